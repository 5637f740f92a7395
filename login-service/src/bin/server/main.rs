use std::sync::Arc;

use login_service::config::Config;
use login_service::domain::login::service::AuthService;
use login_service::inbound::http::router::create_router;
use login_service::outbound::repositories::PostgresAccessTokenRepository;
use login_service::outbound::repositories::PostgresUserRepository;
use login_service::outbound::security::Argon2PasswordComparator;
use login_service::outbound::security::JwtTokenGenerator;
use login_service::outbound::validators::EmailFormatValidator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "login-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let token_store = Arc::new(PostgresAccessTokenRepository::new(pg_pool));
    let password_comparator = Arc::new(Argon2PasswordComparator::new());
    let token_generator = Arc::new(JwtTokenGenerator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));

    let auth_service = Arc::new(
        AuthService::new(user_repository, password_comparator, token_generator)
            .with_token_store(token_store),
    );
    let email_validator = Arc::new(EmailFormatValidator::new());

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, Some(email_validator));
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
