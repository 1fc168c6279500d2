use axum::extract::DefaultBodyLimit;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{fmt, EnvFilter};

use video_generator::gemini::GeminiClient;
use video_generator::routes::{app, AppState};

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY not set, serving default videos only");
    } else {
        tracing::info!("Using API key: {}...", &api_key[..std::cmp::min(10, api_key.len())]);
    }

    let state = AppState {
        gemini: Arc::new(GeminiClient::new(api_key)),
    };

    let app = app(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    let port: u16 = std::env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "🚀 Starting server");
    tracing::info!("📱 Health check: http://localhost:{}/health", port);
    tracing::info!("📈 Marketing API: http://localhost:{}/api/marketing/generate-video", port);
    tracing::info!("🎬 Real Estate API: http://localhost:{}/api/real-estate/generate-video", port);
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app).await.unwrap();
}
