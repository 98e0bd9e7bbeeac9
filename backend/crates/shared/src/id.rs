//! Common ID Types
//!
//! Type-safe wrappers around the database-generated integer identities.
//! A value below 1 means "not persisted yet".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type AuthorId = Id<markers::Author>;
///
/// let id = AuthorId::from_i32(7);
/// assert!(id.is_assigned());
/// assert!(!AuthorId::unassigned().is_assigned());
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: i32,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Placeholder for entities that have not been inserted yet
    pub const fn unassigned() -> Self {
        Self::from_i32(0)
    }

    pub const fn from_i32(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn as_i32(&self) -> i32 {
        self.value
    }

    /// Database identities start at 1
    pub const fn is_assigned(&self) -> bool {
        self.value >= 1
    }
}

// Manual impls: derives would put bounds on `T`.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::unassigned()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i32> for Id<T> {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl<T> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct Author;

    pub struct Book;

    pub struct User;
}

/// Type aliases for common IDs
pub type AuthorId = Id<markers::Author>;
pub type BookId = Id<markers::Book>;
pub type UserId = Id<markers::User>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let author_id: AuthorId = Id::from_i32(3);
        let book_id: BookId = Id::from_i32(3);

        // Same value, different types
        let _a: i32 = author_id.into();
        let _b: i32 = book_id.into();
    }

    #[test]
    fn test_unassigned() {
        assert!(!AuthorId::unassigned().is_assigned());
        assert!(!AuthorId::from_i32(-4).is_assigned());
        assert!(AuthorId::from_i32(1).is_assigned());
        assert_eq!(AuthorId::default(), AuthorId::unassigned());
    }

    #[test]
    fn test_serde_transparent() {
        let id = BookId::from_i32(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: BookId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }
}
