//! Domain entities for the accounts domain
//!
//! A [`User`] is stored with its bcrypt password hash; clients only ever see
//! the [`UserView`] projection.

use chrono::{DateTime, Utc};
use mediahub_api::Resource;
use mediahub_auth::{hash_password, AuthContext, Role};
use mediahub_common::Result;
use mediahub_db::Document;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const USERNAME_MIN_LEN: u64 = 3;
pub const USERNAME_MAX_LEN: u64 = 50;

/// bcrypt only reads the first 72 bytes of a password
pub const PASSWORD_MIN_LEN: u64 = 6;
pub const PASSWORD_MAX_LEN: u64 = 72;

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: Uuid,
    #[validate(length(min = USERNAME_MIN_LEN, max = USERNAME_MAX_LEN))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    /// bcrypt hash, never the plaintext
    pub password: String,
    #[serde(default)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a user from an already hashed password
    pub fn new(username: String, email: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            username,
            email,
            password: password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Document for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// User as returned by the API, without the password hash
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request body for registration and for admin user creation
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = USERNAME_MIN_LEN, max = USERNAME_MAX_LEN))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = PASSWORD_MIN_LEN, max = PASSWORD_MAX_LEN))]
    pub password: String,

    /// Defaults to `lector` when omitted
    #[serde(default)]
    pub role: Role,
}

/// Partial update for a user; a new password is re-hashed
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = USERNAME_MIN_LEN, max = USERNAME_MAX_LEN))]
    pub username: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = PASSWORD_MIN_LEN, max = PASSWORD_MAX_LEN))]
    pub password: Option<String>,

    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Successful login
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl Resource for User {
    const NAME: &'static str = "User";

    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;
    type View = UserView;

    fn create(input: CreateUserRequest, _actor: Option<&AuthContext>) -> Result<Self> {
        let password_hash = hash_password(&input.password)?;

        Ok(User::new(
            input.username,
            input.email,
            password_hash,
            input.role,
        ))
    }

    fn apply(&mut self, update: UpdateUserRequest) -> Result<()> {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password) = update.password {
            self.password = hash_password(&password)?;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
