use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgergate::adapters::auth::{JwtConfig, JwtTokenValidator};
use ledgergate::adapters::http::payment::PaymentAppState;
use ledgergate::adapters::http::session::SessionAppState;
use ledgergate::adapters::http::{app_router, AppState};
use ledgergate::adapters::session::RedisSessionStore;
use ledgergate::adapters::stripe::{StripeConfig, StripeGateway, WebhookVerifier};
use ledgergate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        test_mode = config.payment.is_test_mode(),
        "Starting ledgergate"
    );

    let mut jwt_config = JwtConfig::new(config.auth.jwt_secret.clone());
    if let Some(issuer) = &config.auth.issuer {
        jwt_config = jwt_config.with_issuer(issuer.clone());
    }
    let validator = Arc::new(JwtTokenValidator::new(jwt_config));

    let sessions = Arc::new(RedisSessionStore::connect(&config.redis).await?);

    let stripe_config = StripeConfig::new(
        config.payment.stripe_secret_key.clone(),
        config.payment.frontend_base_url.clone(),
    )
    .with_request_timeout(Duration::from_secs(config.payment.gateway_timeout_secs));
    let gateway = Arc::new(StripeGateway::new(stripe_config));

    let webhook_verifier = Arc::new(WebhookVerifier::new(
        config.payment.stripe_webhook_secret.clone(),
    ));

    let state = AppState {
        validator,
        payment: PaymentAppState {
            gateway,
            webhook_verifier,
        },
        session: SessionAppState { sessions },
    };

    let cors = {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        if origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = app_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
