// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

/// URI that selects the in-process store instead of Firestore.
pub const MEMORY_URI: &str = "memory://";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Firestore API endpoint, or `memory://` for the in-process store
    pub database_uri: String,
    /// Firestore database id
    pub database_name: String,
    /// Collection holding the profile document
    pub collection_name: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Path to the form template
    pub template_path: String,
    /// Directory served under /assets
    pub assets_dir: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            database_uri: MEMORY_URI.to_string(),
            database_name: "(default)".to_string(),
            collection_name: "profiles".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 9000,
            template_path: "templates/index.html".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    /// The three database settings are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_uri: required("DATABASE_URI")?,
            database_name: required("DATABASE_NAME")?,
            collection_name: required("COLLECTION_NAME")?,
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "9000".to_string())
                .parse()
                .unwrap_or(9000),
            template_path: env::var("TEMPLATE_PATH")
                .unwrap_or_else(|_| "templates/index.html".to_string()),
            assets_dir: env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
        })
    }

    /// Whether the in-process store was requested.
    pub fn uses_memory_store(&self) -> bool {
        self.database_uri == MEMORY_URI
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .map(|v| v.trim().to_string())
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases share one test so they never race on the process environment.
    #[test]
    fn test_config_from_env() {
        env::remove_var("DATABASE_URI");
        env::set_var("DATABASE_NAME", "profiles-db");
        env::set_var("COLLECTION_NAME", "users");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URI")));

        env::set_var("DATABASE_URI", " memory:// ");
        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.database_uri, MEMORY_URI);
        assert_eq!(config.database_name, "profiles-db");
        assert_eq!(config.collection_name, "users");
        assert!(config.uses_memory_store());
    }

    #[test]
    fn test_default_is_memory_backed() {
        let config = Config::default();
        assert!(config.uses_memory_store());
        assert_eq!(config.port, 9000);
    }
}
