//! API layer for the Catalog domain
//!
//! Every catalog resource is served by the generic handlers; this layer only
//! defines the state and the per-resource access rules.

pub mod middleware;
pub mod routes;

pub use middleware::CatalogState;
pub use routes::{routes, ContentVisibility};
