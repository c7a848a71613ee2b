//! User repository

use crate::domain::entities::User;
use crate::domain::error::AccountError;
use mediahub_common::{RepositoryError, Result};
use mediahub_db::{Collection, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    users: Collection<User>,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: Collection::new(pool),
        }
    }

    /// Underlying collection, shared with the generic `/api/users` handlers
    pub fn collection(&self) -> &Collection<User> {
        &self.users
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.find_by_id(id).await?)
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.find_one_by("username", username).await?)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.find_one_by("email", email).await?)
    }

    /// Insert a newly registered user.
    ///
    /// A unique index rejecting the insert reports the same error as the
    /// pre-insert lookups, so concurrent registrations see a consistent answer.
    pub async fn create(&self, user: &User) -> Result<()> {
        match self.users.insert(user).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::AlreadyExists(Some(field))) if field == "username" => {
                Err(AccountError::DuplicateUsername.into())
            }
            Err(RepositoryError::AlreadyExists(Some(field))) if field == "email" => {
                Err(AccountError::DuplicateEmail.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
