//! Portfolio site backend server.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_backend::config::Config;
use portfolio_backend::contact::ContactService;
use portfolio_backend::db::{self, Repository};
use portfolio_backend::mail::HttpMailRelay;
use portfolio_backend::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    match &config.static_dir {
        Some(dir) => tracing::info!("Serving site from {:?}", dir),
        None => tracing::info!("No PORTFOLIO_STATIC_DIR set, serving API only"),
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));
    let stored = repo.count_contacts().await?;
    tracing::info!("Contact store holds {} records", stored);

    // Wire the contact pipeline
    let mailer = Arc::new(HttpMailRelay::new(config.mail_relay_url.clone()));
    tracing::info!("Mail relay: {}", mailer.endpoint());
    let contact = ContactService::new(
        mailer,
        repo,
        config.mail_from.clone(),
        config.mail_to.clone(),
    );

    // Create application state
    let state = AppState {
        contact,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
