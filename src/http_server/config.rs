//! HTTP Server Configuration
//!
//! Bind address and CORS settings.

use axum::http::{HeaderValue, Uri};
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
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

    /// Every configured CORS origin must be `scheme://authority`
    pub fn validate_origins(&self) -> Result<(), String> {
        for origin in &self.cors_origins {
            parse_origin(origin)?;
        }
        Ok(())
    }
}

/// Parse a CORS origin such as `http://localhost:3000` into a header value
pub fn parse_origin(origin: &str) -> Result<HeaderValue, String> {
    let uri: Uri = origin
        .parse()
        .map_err(|e| format!("invalid CORS origin '{}': {}", origin, e))?;

    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(format!(
            "invalid CORS origin '{}': expected scheme://host[:port]",
            origin
        ));
    }

    HeaderValue::from_str(origin).map_err(|e| format!("invalid CORS origin '{}': {}", origin, e))
}
