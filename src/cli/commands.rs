//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::coupon::{CouponService, CouponStore};
use crate::http_server::{CouponState, HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event, Logger, Severity};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Configuration file structure. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Bind address and CORS settings
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// Minimum log severity: trace, info, warn, error (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Start with the seed coupons (default true)
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            log_level: default_log_level(),
            seed: default_seed(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: ServiceConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        self.http.validate_origins().map_err(CliError::config_error)?;

        self.severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse::<Severity>().map_err(|e| {
            CliError::config_error(format!("Invalid log_level: {}", e))
        })
    }
}

/// Build the effective configuration: file (if any), then flag overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<ServiceConfig> {
    let mut config = match config_path {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
    }
}

/// Coupon state the server starts with
pub fn build_state(config: &ServiceConfig) -> CouponState {
    let store = if config.seed {
        CouponStore::seeded()
    } else {
        CouponStore::new()
    };
    CouponState::new(CouponService::new(store))
}

/// Number of seed coupons loaded, or `None` when seeding is disabled
fn seeded_count(config: &ServiceConfig, state: &CouponState) -> CliResult<Option<usize>> {
    if !config.seed {
        return Ok(None);
    }
    let count = state
        .service
        .store()
        .len()
        .map_err(|e| CliError::boot_failed(e.to_string()))?;
    Ok(Some(count))
}

/// Start the HTTP server and block until it stops.
pub fn serve(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = match resolve_config(config_path, host, port) {
        Ok(config) => config,
        Err(e) => {
            log_event_with_fields(Event::BootFailed, &[("reason", e.message())]);
            return Err(e);
        }
    };

    Logger::set_min_severity(config.severity()?);
    let addr = config.http.socket_addr();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("addr", addr.as_str()), ("log_level", config.log_level.as_str())],
    );

    let state = build_state(&config);
    if let Some(count) = seeded_count(&config, &state)? {
        log_event_with_fields(Event::StoreSeeded, &[("count", count.to_string().as_str())]);
    }

    let server = HttpServer::with_state(config.http, Arc::new(state));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            let message = format!("HTTP server failed: {}", e);
            log_event_with_fields(Event::BootFailed, &[("reason", message.as_str())]);
            CliError::boot_failed(message)
        })
    })?;

    Ok(())
}
