//! Accounts domain state

use crate::domain::entities::User;
use crate::repository::UserRepository;
use axum::extract::FromRef;
use mediahub_auth::TokenService;
use mediahub_db::{Collection, SqlitePool};

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub users: UserRepository,
    pub tokens: TokenService,
}

impl AccountsState {
    pub fn new(pool: SqlitePool, tokens: TokenService) -> Self {
        Self {
            users: UserRepository::new(pool),
            tokens,
        }
    }
}

impl FromRef<AccountsState> for TokenService {
    fn from_ref(state: &AccountsState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AccountsState> for Collection<User> {
    fn from_ref(state: &AccountsState) -> Self {
        state.users.collection().clone()
    }
}
