use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Role membership; ids match the `roles` reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    #[display("Administrator")]
    Administrator = 1,
    #[display("Customer")]
    Customer = 2,
}

impl UserRole {
    /// Name carried in the token's `role` claim
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            UserRole::Administrator => "Administrator",
            UserRole::Customer => "Customer",
        }
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(UserRole::Administrator),
            2 => Some(UserRole::Customer),
            _ => {
                tracing::warn!(role_id = id, "Unknown role id");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_id() {
        assert_eq!(UserRole::from_id(1), Some(UserRole::Administrator));
        assert_eq!(UserRole::from_id(2), Some(UserRole::Customer));
        assert_eq!(UserRole::from_id(0), None);
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Administrator.to_string(), "Administrator");
        assert_eq!(UserRole::Customer.to_string(), UserRole::Customer.name());
    }
}
