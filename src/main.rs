use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moodflix_api::{
    api::{create_router, AppState},
    config::Config,
    services::{providers::OpenRouterProvider, MalformedPolicy, RecommendationService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodflix_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let provider = OpenRouterProvider::from_config(&config)?;

    let rng = match config.fallback_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let policy = if config.degrade_on_malformed {
        MalformedPolicy::Degrade
    } else {
        MalformedPolicy::Surface
    };

    tracing::info!(
        model = %config.openrouter_model,
        timeout_secs = config.request_timeout_secs,
        malformed_policy = ?policy,
        "Recommendation provider configured"
    );

    let recommender = Arc::new(RecommendationService::new(Arc::new(provider), rng, policy));
    let state = AppState::new(recommender);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
