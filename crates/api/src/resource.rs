//! The contract a document type fulfils to be served by the generic handlers

use chrono::{DateTime, Utc};
use mediahub_auth::AuthContext;
use mediahub_common::Result;
use mediahub_db::Document;
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

pub trait Resource: Document + Validate {
    /// Singular display name used in response messages, e.g. `"Category"`
    const NAME: &'static str;

    /// Request body accepted on create
    type Create: DeserializeOwned + Validate + Send + 'static;

    /// Request body accepted on update; every field optional
    type Update: DeserializeOwned + Validate + Send + 'static;

    /// Representation returned to clients
    type View: Serialize + From<Self> + Send;

    /// Build a new document from a validated request.
    ///
    /// `actor` is the caller when the route is authenticated.
    fn create(input: Self::Create, actor: Option<&AuthContext>) -> Result<Self>;

    /// Merge the fields present in `update` into this document
    fn apply(&mut self, update: Self::Update) -> Result<()>;

    /// Record a modification time
    fn touch(&mut self, at: DateTime<Utc>);
}

/// Format the not-found message for a resource
pub(crate) fn not_found<T: Resource>() -> mediahub_common::Error {
    mediahub_common::Error::NotFound(format!("{} not found.", T::NAME))
}
