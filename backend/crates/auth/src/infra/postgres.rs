//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Unique violation (duplicate email or user name)
const UNIQUE_VIOLATION: &str = "23505";

/// Users joined with their role ids; filtered by the caller's WHERE clause
const SELECT_USER_WITH_ROLES: &str = r#"
    SELECT
        u.id,
        u.email,
        u.email_canonical,
        u.user_name,
        u.password_hash,
        u.created_at,
        COALESCE(
            array_agg(ur.role_id ORDER BY ur.role_id) FILTER (WHERE ur.role_id IS NOT NULL),
            '{}'
        ) AS role_ids
    FROM users u
    LEFT JOIN user_roles ur ON ur.user_id = u.id
"#;

/// PostgreSQL-backed identity store
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> AuthResult<Option<User>> {
        let sql = format!("{SELECT_USER_WITH_ROLES} WHERE u.{column} = $1 GROUP BY u.id");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &mut User) -> AuthResult<()> {
        let result = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (
                email,
                email_canonical,
                user_name,
                user_name_canonical,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(user.email.as_str())
        .bind(user.email.canonical())
        .bind(user.user_name.original())
        .bind(user.user_name.canonical())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(id) => {
                user.id = UserId::from_i32(id);
                Ok(())
            }
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                Err(AuthError::RegistrationFailed(db_err.message().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        self.find_one("user_name_canonical", user_name.canonical()).await
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.find_one("email_canonical", email.canonical()).await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    email_canonical: String,
    user_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    role_ids: Vec<i16>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = UserPassword::from_phc_string(self.password_hash)?;

        Ok(User {
            id: UserId::from_i32(self.id),
            email: Email::from_db(self.email, self.email_canonical),
            user_name: UserName::from_db(self.user_name),
            password_hash,
            roles: self.role_ids.into_iter().filter_map(UserRole::from_id).collect(),
            created_at: self.created_at,
        })
    }
}
