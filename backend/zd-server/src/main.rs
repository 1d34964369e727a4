use zd_auth::{
    IdentityProvider, IdentityToolkitClient, JwtAlgorithm, JwtValidator, RequestAuthenticator,
};
use zd_db::{ProfileRepository, ProfileStore};
use zd_server::error::ServerError;
use zd_server::{AppState, build_router, logger};
use zd_sync::{IdentitySyncService, SyncPolicy};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = zd_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = zd_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting zd-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    let pool = zd_db::open_pool(&database_path, config.database.max_connections).await?;
    let store: Arc<dyn ProfileStore> = Arc::new(ProfileRepository::new(pool));

    // Identity provider client
    let idp = &config.identity_provider;
    if idp.api_key.is_none() {
        warn!("identity_provider.api_key is not set; provider calls will be rejected");
    }

    let token_algorithm = if let Some(ref secret) = idp.token_secret {
        Some(JwtAlgorithm::HS256 {
            secret: secret.as_bytes().to_vec(),
        })
    } else if let Some(full_path) = config.token_public_key_path()? {
        let public_key_pem =
            std::fs::read_to_string(&full_path).map_err(|e| ServerError::TokenKeyFile {
                path: full_path.display().to_string(),
                source: e,
            })?;
        Some(JwtAlgorithm::RS256 { public_key_pem })
    } else {
        None
    };

    let token_validator = match token_algorithm {
        Some(ref algorithm) => {
            let validator = JwtValidator::from_algorithm(algorithm, idp.project_id.as_deref())
                .map_err(ServerError::from)?;
            info!("ID tokens: {} local validation", validator.algorithm());
            Some(validator)
        }
        None => {
            info!("ID tokens: verified remotely by the identity provider");
            None
        }
    };

    let client = IdentityToolkitClient::new(
        &idp.base_url,
        idp.api_key.clone(),
        Duration::from_secs(idp.request_timeout_secs),
    )
    .map_err(ServerError::from)?
    .with_service_token(idp.service_token.clone())
    .with_token_validator(token_validator);
    let provider: Arc<dyn IdentityProvider> = Arc::new(client);

    let policy = SyncPolicy {
        send_verification_email: config.sync.send_verification_email,
        require_verified_email: config.sync.require_verified_email,
        compensate_on_profile_failure: config.sync.compensate_on_profile_failure,
    };

    // Build application state
    let app_state = AppState {
        sync_service: IdentitySyncService::new(provider.clone(), store, policy),
        authenticator: RequestAuthenticator::new(provider),
        request_timeout: Duration::from_secs(config.handler.timeout_secs),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
