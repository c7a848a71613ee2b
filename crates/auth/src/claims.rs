//! JWT claims types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Role;

/// Claims carried by Mediahub access tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Role at the time of issuance
    pub role: Role,
    /// Issued at
    pub iat: i64,
    /// Expires at
    pub exp: i64,
}
