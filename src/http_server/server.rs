//! # HTTP Server
//!
//! Combines the coupon and health routers behind a CORS layer.

use std::io;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::{parse_origin, HttpServerConfig};
use super::coupon_routes::{coupon_routes, CouponState};
use super::observability_routes::health_routes;
use crate::observability::{log_event_with_fields, Event};

/// HTTP server for the coupon API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server over the seeded store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_state(config, Arc::new(CouponState::seeded()))
    }

    /// Create a new HTTP server over caller-provided state
    pub fn with_state(config: HttpServerConfig, state: Arc<CouponState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<CouponState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let mut origins = Vec::with_capacity(config.cors_origins.len());
            for origin in &config.cors_origins {
                match parse_origin(origin) {
                    Ok(value) => origins.push(value),
                    Err(reason) => log_event_with_fields(
                        Event::CorsOriginIgnored,
                        &[("reason", reason.as_str())],
                    ),
                }
            }

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/api", coupon_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address. Hostnames are resolved.
    pub async fn bind(&self) -> Result<TcpListener, io::Error> {
        let addr = self.config.socket_addr();
        TcpListener::bind(addr.as_str()).await.map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to bind '{}': {}", addr, e))
        })
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = self.bind().await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::ServerListening, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).router();
    }

    #[tokio::test]
    async fn test_bind_resolves_hostname() {
        let config = HttpServerConfig {
            host: "localhost".to_string(),
            port: 0,
            ..Default::default()
        };
        let listener = HttpServer::with_config(config).bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_rejects_bad_host() {
        let config = HttpServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        let err = HttpServer::with_config(config).bind().await.unwrap_err();
        assert!(err.to_string().contains("not a host"));
    }
}
