//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `dogrun::DogrunError` rendered through `kernel::error::AppError`.

use anyhow::{Context, bail};
use axum::{
    Router, http,
    http::{Method, header},
};
use dogrun::{DogrunConfig, PgDogrunRepository, dogrun_router};
use platform::upload::{DEFAULT_MAX_UPLOAD_BYTES, UploadPolicy};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,dogrun=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let config = load_config()?;
    tracing::info!(
        token_ttl_secs = config.access_token_ttl.as_secs(),
        min_password_length = config.min_password_length,
        max_upload_bytes = config.upload_policy.max_bytes(),
        upload_dir = %config.upload_dir.display(),
        pepper = config.password_pepper.is_some(),
        "Configuration loaded"
    );

    let store = PgDogrunRepository::new(pool);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api", dogrun_router(store, config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let addr = SocketAddr::from_str(&bind_addr)
        .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the immutable application configuration from the environment
fn load_config() -> anyhow::Result<DogrunConfig> {
    let base = match env::var("TOKEN_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = platform::crypto::from_base64(&secret_b64)
                .context("TOKEN_SECRET must be base64")?;
            let secret: [u8; 32] = secret_bytes
                .try_into()
                .map_err(|_| anyhow::anyhow!("TOKEN_SECRET must decode to 32 bytes"))?;
            DogrunConfig {
                token_secret: secret,
                ..DogrunConfig::default()
            }
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("TOKEN_SECRET not set, using a random secret");
            DogrunConfig::with_random_secret()
        }
        Err(_) => bail!("TOKEN_SECRET must be set in production"),
    };

    let access_token_ttl = match env_parse::<u64>("ACCESS_TOKEN_TTL_MINUTES")? {
        Some(minutes) => Duration::from_secs(minutes * 60),
        None => base.access_token_ttl,
    };

    let upload_policy = UploadPolicy::new(
        env_parse::<usize>("MAX_UPLOAD_BYTES")?.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
    );

    Ok(DogrunConfig {
        access_token_ttl,
        min_password_length: env_parse("MIN_PASSWORD_LENGTH")?
            .unwrap_or(base.min_password_length),
        password_pepper: env::var("PASSWORD_PEPPER")
            .ok()
            .filter(|p| !p.is_empty())
            .map(String::into_bytes),
        upload_policy,
        upload_dir: env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| base.upload_dir.clone()),
        ..base
    })
}

/// Parse an optional environment variable; present-but-invalid is an error
fn env_parse<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} is not valid: {raw}")),
        Err(_) => Ok(None),
    }
}
