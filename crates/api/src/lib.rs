//! Generic resource API for Mediahub
//!
//! A type implementing [`Resource`] gets list, get, create, update and delete
//! endpoints from [`resource_routes`], each gated by its [`AccessPolicy`].

pub mod handlers;
pub mod resource;
pub mod routes;

pub use resource::Resource;
pub use routes::{resource_routes, AccessPolicy};
