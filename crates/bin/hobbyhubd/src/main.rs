//! # hobbyhubd — hobbyhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file + env overrides)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository and file-store implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::net::TcpListener;
use tower_sessions::cookie::Key;

use hobbyhub_adapter_http_axum::router::{self, SessionOptions};
use hobbyhub_adapter_http_axum::state::AppState;
use hobbyhub_adapter_storage_sqlite_sqlx::{SqliteHobbyRepository, SqliteUserRepository};
use hobbyhub_adapter_uploads::{LocalDiskStore, S3ObjectStore};
use hobbyhub_app::ports::{FileStore, HobbyRepository, UserRepository};
use hobbyhub_app::services::auth_service::AuthService;
use hobbyhub_app::services::hobby_service::HobbyService;
use hobbyhub_app::services::user_service::UserService;

use crate::config::{Config, UploadMode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = hobbyhub_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let user_service = UserService::new(SqliteUserRepository::new(pool.clone()));
    let hobby_service = HobbyService::new(SqliteHobbyRepository::new(pool.clone()));
    let auth_service = AuthService::new(SqliteUserRepository::new(pool));

    let session = SessionOptions {
        key: session_key(&config)?,
        expiry_minutes: config.session.expiry_minutes,
    };
    let uploads_dir = PathBuf::from(&config.uploads.dir);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, mode = ?config.uploads.mode, "hobbyhubd listening");

    // The file store is picked once here; handlers receive it as a
    // capability and never branch on the mode again.
    match config.uploads.mode {
        UploadMode::Local => {
            let store = LocalDiskStore::new(&uploads_dir)?;
            let state = AppState::new(user_service, hobby_service, auth_service, store);
            serve(listener, state, session, &uploads_dir).await
        }
        UploadMode::S3 => {
            let store = S3ObjectStore::from_env(
                config.uploads.bucket.clone(),
                config.uploads.region.clone(),
            )
            .await;
            let state = AppState::new(user_service, hobby_service, auth_service, store);
            serve(listener, state, session, &uploads_dir).await
        }
    }
}

async fn serve<UR, HR, FS>(
    listener: TcpListener,
    state: AppState<UR, HR, FS>,
    session: SessionOptions,
    uploads_dir: &Path,
) -> anyhow::Result<()>
where
    UR: UserRepository + Send + Sync + 'static,
    HR: HobbyRepository + Send + Sync + 'static,
    FS: FileStore + Send + Sync + 'static,
{
    let app = router::build(state, session, uploads_dir);
    axum::serve(listener, app).await?;
    Ok(())
}

fn session_key(config: &Config) -> anyhow::Result<Key> {
    if config.session.secret.is_empty() {
        return Ok(Key::generate());
    }
    Key::try_from(config.session.secret.as_bytes()).context("invalid session secret")
}
