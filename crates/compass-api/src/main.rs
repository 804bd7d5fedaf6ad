//! Leader's Compass API server entry point.

use std::sync::Arc;

use compass_api::config::ApiConfig;
use compass_api::error::AppError;
use compass_api::state::AppState;
use compass_core::clock::SystemClock;
use compass_core::generator::NarrativeGenerator;
use compass_gemini::gemini_generator::GeminiNarrativeGenerator;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Leader's Compass API server");

    let config = ApiConfig::from_env()?;

    let narrative_generator: Option<Arc<dyn NarrativeGenerator>> = match config.gemini {
        Some(gemini) => {
            let generator = GeminiNarrativeGenerator::new(gemini)?;
            tracing::info!(model = generator.model(), "narrative generation enabled");
            Some(Arc::new(generator))
        }
        None => {
            tracing::warn!(
                "neither GEMINI_API_KEY nor GOOGLE_API_KEY is set; insights will be unavailable"
            );
            None
        }
    };

    let app_state = AppState::new(Arc::new(SystemClock), narrative_generator);

    // TODO: Replace CorsLayer::permissive() with the form's origin once it is deployed.
    let app = compass_api::build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
