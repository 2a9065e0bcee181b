//! Trivia API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use trivia::api::{self, Config, ServerError};
use trivia::db::{Database, DbError, SqliteDatabase};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(trivia::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(trivia::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(trivia::binary::api))]
    Server(#[from] ServerError),
}

#[derive(Parser)]
#[command(name = "trivia-api")]
#[command(author, version, about = "Trivia API server", long_about = None)]
struct Cli {
    /// Host address to bind to [env: TRIVIA_HOST, default: 0.0.0.0]
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on [env: TRIVIA_PORT, default: 5000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path [env: TRIVIA_DB, default: ~/.local/share/trivia/trivia.db]
    #[arg(long)]
    db: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::new();
        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(db) = self.db {
            config = config.with_db_path(db);
        }
        config
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    api::init_tracing();
    run(Cli::parse().into_config()).await?;
    Ok(())
}

async fn run(config: Config) -> Result<(), BinaryError> {
    tracing::info!(path = %config.db_path.display(), "opening database");

    // Ensure parent directory exists
    if let Some(parent) = config.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&config.db_path).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    tracing::info!("database migrations complete");

    api::run(&config, db).await?;

    Ok(())
}
