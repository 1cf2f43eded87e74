//! HTTP Server Configuration
//!
//! Bind address, CORS and static files for the transport, plus the service
//! settings (API key, deployed dialect, dataset) read once at startup.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::rest_api::Dialect;
use crate::store::{seeded_store, InMemoryOrderStore, OrderStore, StoreResult};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory served for paths no route matches
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            static_dir: None,
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Order-status service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Shared API key secret. Never serialized.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Dialect served at the unversioned endpoint
    #[serde(default)]
    pub dialect: Dialect,

    /// JSON dataset replacing the built-in sample orders
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

impl ServiceConfig {
    pub fn api_key_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Load the dataset this config points at
    pub fn load_store(&self) -> StoreResult<Arc<dyn OrderStore>> {
        let store = match &self.data_path {
            Some(path) => InMemoryOrderStore::from_json_file(path)?,
            None => seeded_store()?,
        };
        Ok(Arc::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_api_key_never_serialized() {
        let config = ServiceConfig {
            api_key: Some("s3cret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("s3cret"));
        assert!(json.contains("\"dialect\":\"legacy\""));
    }

    #[test]
    fn test_api_key_configured() {
        let mut config = ServiceConfig::default();
        assert!(!config.api_key_configured());
        config.api_key = Some(String::new());
        assert!(!config.api_key_configured());
        config.api_key = Some("k".to_string());
        assert!(config.api_key_configured());
    }

    #[test]
    fn test_load_store_default_and_file() {
        let seeded = ServiceConfig::default().load_store().unwrap();
        assert_eq!(seeded.len(), 3);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"ordernumber":"F1","status":"Processing","customer":"C","total":1,"orderdate":"2025-04-01"}}]"#
        )
        .unwrap();

        let config = ServiceConfig {
            data_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let store = config.load_store().unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get("F1").is_some());
        assert!(store.get("ORD001").is_none());
    }
}
