//! Catalog domain state

use axum::extract::FromRef;
use mediahub_auth::TokenService;
use mediahub_db::{Collection, SqlitePool};

use crate::domain::{categories::Category, contents::Content, themes::Theme};

/// Application state for the Catalog domain
#[derive(Clone)]
pub struct CatalogState {
    pub categories: Collection<Category>,
    pub themes: Collection<Theme>,
    pub contents: Collection<Content>,
    pub tokens: TokenService,
}

impl CatalogState {
    pub fn new(pool: SqlitePool, tokens: TokenService) -> Self {
        Self {
            categories: Collection::new(pool.clone()),
            themes: Collection::new(pool.clone()),
            contents: Collection::new(pool),
            tokens,
        }
    }
}

impl FromRef<CatalogState> for TokenService {
    fn from_ref(state: &CatalogState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<CatalogState> for Collection<Category> {
    fn from_ref(state: &CatalogState) -> Self {
        state.categories.clone()
    }
}

impl FromRef<CatalogState> for Collection<Theme> {
    fn from_ref(state: &CatalogState) -> Self {
        state.themes.clone()
    }
}

impl FromRef<CatalogState> for Collection<Content> {
    fn from_ref(state: &CatalogState) -> Self {
        state.contents.clone()
    }
}
