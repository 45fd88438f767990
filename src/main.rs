mod model;
mod server;

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    mail::{CredentialNotifier, DebtNotifier, SmtpNotifier},
    router, startup,
    state::AppState,
    util::hasher::{Argon2Hasher, PasswordHasher},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());
    let smtp = Arc::new(SmtpNotifier::new(&config.smtp)?);
    let notifier: Arc<dyn CredentialNotifier> = smtp.clone();
    let debt_notifier: Arc<dyn DebtNotifier> = smtp;

    startup::ensure_admin(&db, &config, hasher.as_ref()).await?;

    let state = AppState::new(
        db,
        hasher,
        notifier,
        debt_notifier,
        config.bootstrap.clone(),
        config.roster.clone(),
    );

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!(addr = %config.bind_addr, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}
