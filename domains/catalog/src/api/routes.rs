//! Route definitions for Catalog domain API

use axum::Router;
use mediahub_api::{resource_routes, AccessPolicy};
use mediahub_auth::{Access, TokenService};

use super::middleware::CatalogState;
use crate::domain::{categories::Category, contents::Content, themes::Theme};

/// Who may read the content listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentVisibility {
    /// Any verified token
    #[default]
    Authenticated,
    /// No token required for list and get
    Public,
}

impl ContentVisibility {
    pub fn from_public_flag(public: bool) -> Self {
        if public {
            ContentVisibility::Public
        } else {
            ContentVisibility::Authenticated
        }
    }

    fn read_access(self) -> Access {
        match self {
            ContentVisibility::Authenticated => Access::Authenticated,
            ContentVisibility::Public => Access::Public,
        }
    }
}

/// Categories and themes: read by any role, managed by admins
const TAXONOMY_POLICY: AccessPolicy = AccessPolicy::read_write(Access::Authenticated, Access::ADMIN);

fn content_policy(visibility: ContentVisibility) -> AccessPolicy {
    AccessPolicy {
        create: Access::ADMIN_OR_CREADOR,
        update: Access::ADMIN_OR_CREADOR,
        ..AccessPolicy::read_write(visibility.read_access(), Access::ADMIN)
    }
}

/// Create all Catalog domain API routes
pub fn routes(tokens: &TokenService, visibility: ContentVisibility) -> Router<CatalogState> {
    Router::new()
        .merge(resource_routes::<Category, CatalogState>(
            "/api/categories",
            TAXONOMY_POLICY,
            tokens,
        ))
        .merge(resource_routes::<Theme, CatalogState>(
            "/api/themes",
            TAXONOMY_POLICY,
            tokens,
        ))
        .merge(resource_routes::<Content, CatalogState>(
            "/api/contents",
            content_policy(visibility),
            tokens,
        ))
}
