//! Generic CRUD handlers
//!
//! Instantiated once per [`Resource`]; the route's [`Collection`] comes out of
//! the router state through `FromRef`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use mediahub_auth::MaybeAuthUser;
use mediahub_common::{Error, Result, ValidatedJson};
use mediahub_db::Collection;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::resource::{not_found, Resource};

/// Identifiers that are not UUIDs cannot name a stored document
fn parse_id<T: Resource>(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| not_found::<T>())
}

/// List every document in insertion order
///
/// **GET /api/{resource}**
pub async fn list<T: Resource>(
    State(collection): State<Collection<T>>,
) -> Result<Json<Vec<T::View>>> {
    let docs = collection.find_all().await?;

    Ok(Json(docs.into_iter().map(T::View::from).collect()))
}

/// **GET /api/{resource}/{id}**
pub async fn show<T: Resource>(
    State(collection): State<Collection<T>>,
    Path(id): Path<String>,
) -> Result<Json<T::View>> {
    let id = parse_id::<T>(&id)?;

    let doc = collection
        .find_by_id(id)
        .await?
        .ok_or_else(not_found::<T>)?;

    Ok(Json(T::View::from(doc)))
}

/// Create a document from a validated request body
///
/// **POST /api/{resource}**
pub async fn create<T: Resource>(
    State(collection): State<Collection<T>>,
    MaybeAuthUser(actor): MaybeAuthUser,
    ValidatedJson(input): ValidatedJson<T::Create>,
) -> Result<(StatusCode, Json<T::View>)> {
    let doc = T::create(input, actor.as_ref())?;

    collection.insert(&doc).await.map_err(|e| {
        tracing::warn!(resource = T::NAME, error = %e, "Failed to create resource");
        Error::from(e)
    })?;

    tracing::info!(resource = T::NAME, id = %doc.id(), "Resource created");

    Ok((StatusCode::CREATED, Json(T::View::from(doc))))
}

/// Apply a partial update, then re-validate the whole document
///
/// **PUT | PATCH /api/{resource}/{id}**
pub async fn update<T: Resource>(
    State(collection): State<Collection<T>>,
    Path(id): Path<String>,
    ValidatedJson(changes): ValidatedJson<T::Update>,
) -> Result<Json<T::View>> {
    let id = parse_id::<T>(&id)?;

    let mut doc = collection
        .find_by_id(id)
        .await?
        .ok_or_else(not_found::<T>)?;

    doc.apply(changes)?;
    doc.touch(Utc::now());
    doc.validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    // Deleted between the read and the write
    if !collection.replace(&doc).await? {
        return Err(not_found::<T>());
    }

    tracing::info!(resource = T::NAME, id = %id, "Resource updated");

    Ok(Json(T::View::from(doc)))
}

/// **DELETE /api/{resource}/{id}**
pub async fn remove<T: Resource>(
    State(collection): State<Collection<T>>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_id::<T>(&id)?;

    if !collection.delete(id).await? {
        return Err(not_found::<T>());
    }

    tracing::info!(resource = T::NAME, id = %id, "Resource deleted");

    Ok(Json(json!({
        "message": format!("{} deleted successfully.", T::NAME)
    })))
}
