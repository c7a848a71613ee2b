//! Route wiring for generic resources

use axum::{
    extract::FromRef,
    routing::{delete, get, post, put},
    Router,
};
use mediahub_auth::{guard, Access, TokenService};
use mediahub_db::Collection;

use crate::handlers;
use crate::resource::Resource;

/// Access rule for each of the five resource operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    pub list: Access,
    pub get: Access,
    pub create: Access,
    pub update: Access,
    pub delete: Access,
}

impl AccessPolicy {
    /// Same rule on every operation
    pub const fn uniform(access: Access) -> Self {
        Self::read_write(access, access)
    }

    /// One rule for list/get, another for create/update/delete
    pub const fn read_write(read: Access, write: Access) -> Self {
        Self {
            list: read,
            get: read,
            create: write,
            update: write,
            delete: write,
        }
    }
}

/// Mount the CRUD endpoints for `T` under `path`:
///
/// - `GET {path}` list, `POST {path}` create
/// - `GET {path}/{id}` get, `PUT | PATCH {path}/{id}` update,
///   `DELETE {path}/{id}` delete
pub fn resource_routes<T, S>(path: &str, policy: AccessPolicy, tokens: &TokenService) -> Router<S>
where
    T: Resource,
    Collection<T>: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    let collection_routes = guard(get(handlers::list::<T>), policy.list, tokens)
        .merge(guard(post(handlers::create::<T>), policy.create, tokens));

    let item_routes = guard(get(handlers::show::<T>), policy.get, tokens)
        .merge(guard(
            put(handlers::update::<T>).patch(handlers::update::<T>),
            policy.update,
            tokens,
        ))
        .merge(guard(delete(handlers::remove::<T>), policy.delete, tokens));

    Router::new()
        .route(path, collection_routes)
        .route(&format!("{}/{{id}}", path), item_routes)
}
