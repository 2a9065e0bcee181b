//! HTTP API for the trivia service.
//!
//! Routes live in `routes`, handlers in `v1`. Handlers are generic over
//! [`Database`] and receive it through [`AppState`].

pub mod error;
pub mod pagination;
pub mod routes;
mod state;
pub mod v1;


use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use crate::paths::get_db_path;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// Environment variable overriding the bind address.
pub const HOST_ENV: &str = "TRIVIA_HOST";
/// Environment variable overriding the port.
pub const PORT_ENV: &str = "TRIVIA_PORT";
/// Environment variable overriding the database file.
pub const DB_ENV: &str = "TRIVIA_DB";

/// API server configuration
///
/// Precedence: builder (CLI flag) > environment variable > default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// SQLite database file
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            db_path: get_db_path(),
        }
    }
}

impl Config {
    /// Defaults overridden by `TRIVIA_HOST`, `TRIVIA_PORT` and `TRIVIA_DB`.
    ///
    /// Values that do not parse are ignored.
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Some(host) = env::var(HOST_ENV).ok().and_then(|v| v.parse().ok()) {
            config.host = host;
        }
        if let Some(port) = env::var(PORT_ENV).ok().and_then(|v| v.parse().ok()) {
            config.port = port;
        }
        if let Some(db_path) = env::var_os(DB_ENV).filter(|v| !v.is_empty()) {
            config.db_path = PathBuf::from(db_path);
        }

        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_db_path(mut self, db_path: PathBuf) -> Self {
        self.db_path = db_path;
        self
    }
}

/// Server startup and runtime errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(trivia::api::bind),
        help("Is another process listening on this port? Try --port or TRIVIA_PORT.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(trivia::api::serve))]
    Serve(#[source] std::io::Error),
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trivia=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration and database
pub async fn run<D: Database + 'static>(config: &Config, db: D) -> Result<(), ServerError> {
    let state = AppState::new(db);
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("API server listening on http://{}", addr);
    info!("API docs available at http://{}/docs", addr);

    axum::serve(listener, app).await.map_err(ServerError::Serve)?;
    Ok(())
}
