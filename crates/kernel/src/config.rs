//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

use crate::models::Role;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Role assumed for requests that carry no role header (default: operator).
    pub default_role: Role,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let default_role = env::var("DEFAULT_ROLE")
            .unwrap_or_else(|_| Role::Operator.as_str().to_string())
            .trim()
            .parse()
            .context("DEFAULT_ROLE must name a known role")?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        Ok(Self {
            port,
            default_role,
            cors_allowed_origins,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            default_role: Role::Operator,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}
