use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::ConnectOptions;
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::ports::ProfileRepository;
use crate::domain::seed;
use crate::domain::services::auth_service::AuthService;
use crate::domain::store::MentorshipStore;
use crate::infra::auth::http_auth_provider::HttpAuthProvider;
use crate::infra::repositories::{
    postgres_profile_repo::PostgresProfileRepo, sqlite_profile_repo::SqliteProfileRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let profile_repo: Arc<dyn ProfileRepository> = if database_url.starts_with("postgres://")
        || database_url.starts_with("postgresql://")
    {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        sqlx::migrate!("./migrations/postgres")
            .run(&pool)
            .await
            .expect("Failed to run Postgres migrations");

        Arc::new(PostgresProfileRepo::new(pool))
    } else {
        info!("Initializing SQLite connection...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite URL")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to run SQLite migrations");

        Arc::new(SqliteProfileRepo::new(pool))
    };

    let auth_provider = Arc::new(HttpAuthProvider::new(
        config.auth_service_url.clone(),
        config.auth_anon_key.clone(),
    ));

    let auth_service = Arc::new(AuthService::new(auth_provider, profile_repo.clone()));

    // The store is constructed here and passed by reference, never a global.
    let store = Arc::new(MentorshipStore::new(seed::initial_state()));

    AppState {
        config: config.clone(),
        store,
        profile_repo,
        auth_service,
    }
}
