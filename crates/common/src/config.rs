//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Minimum accepted length for the token signing secret
pub const MIN_JWT_SECRET_LEN: usize = 32;

const DEFAULT_DATABASE_URL: &str = "sqlite://mediahub.db?mode=rwc";
const DEFAULT_RUST_LOG: &str = "mediahub=info,tower_http=info";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (SQLite)
    pub database_url: String,

    /// Shared secret used to sign and verify access tokens
    #[serde(skip_serializing)]
    pub jwt_secret: String,

    /// Serve content reads without a bearer token
    pub public_content_listing: bool,

    /// Runtime configuration
    pub rust_log: String,
    pub log_format: LogFormat,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Only the database location, for tools that never issue tokens
    pub fn database_url_from_env() -> String {
        dotenvy::dotenv().ok();

        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is required"))?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            bail!(
                "JWT_SECRET must be at least {} characters",
                MIN_JWT_SECRET_LEN
            );
        }

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {:?}", raw))?,
            None => 3000,
        };

        let public_content_listing = match lookup("PUBLIC_CONTENT_LISTING").as_deref() {
            None | Some("") => false,
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                anyhow::anyhow!("PUBLIC_CONTENT_LISTING must be true or false, got {:?}", raw)
            })?,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            public_content_listing,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_string()),
            log_format,
            port,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
