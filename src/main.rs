use anyhow::{Context, Result};
use marketing_site::config::Config;
use marketing_site::i18n::CatalogResolver;
use marketing_site::identity::{Anonymous, SessionTokenIdentity};
use marketing_site::server::{create_router, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marketing_site=info".parse()?),
        )
        .init();

    info!("Starting marketing site");

    let config = Config::from_env()?;

    let translations = match &config.messages_dir {
        Some(dir) => CatalogResolver::from_dir(dir)
            .with_context(|| format!("Failed to load message catalogs from {}", dir))?,
        None => CatalogResolver::embedded().context("Embedded message catalogs are invalid")?,
    };

    for missing in translations.missing_keys() {
        warn!(
            locale = %missing.locale,
            namespace = %missing.namespace,
            key = %missing.key,
            "Translation missing, default locale will be used"
        );
    }

    let address = config.bind_address();
    let identity = match config.session_users.as_deref() {
        Some(spec) => Some(SessionTokenIdentity::parse(spec).context("Invalid SESSION_USERS")?),
        None => None,
    };
    let state = match identity {
        Some(identity) => {
            info!("Session identity enabled with {} users", identity.len());
            AppState::new(config, translations, identity)
        }
        None => AppState::new(config, translations, Anonymous),
    };

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Listening on {}", address);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
