//! Frame Solver HTTP Server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use frame_solver::prelude::*;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct AnalysisResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<AnalysisResults>,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn simulate(Json(request): Json<AnalysisRequest>) -> impl IntoResponse {
    log::info!(
        "Analysis request: {} nodes, {} members, {} loads, type {:?}",
        request.structure.nodes.len(),
        request.structure.members.len(),
        request.structure.loads.len(),
        request.analysis_type
    );

    match request.run(&AnalysisOptions::default()) {
        Ok(results) => (
            StatusCode::OK,
            Json(AnalysisResponse {
                success: true,
                error: None,
                kind: None,
                results: Some(results),
            }),
        ),
        Err(e) => {
            log::warn!("Analysis failed: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(AnalysisResponse {
                    success: false,
                    error: Some(e.to_string()),
                    kind: Some(e.kind()),
                    results: None,
                }),
            )
        }
    }
}

fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/simulate", post(simulate))
        .route("/api/v1/analyze", post(simulate))
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8086".to_string());
    let addr = format!("{}:{}", host, port);

    log::info!("Frame Solver Server listening on http://{}", addr);
    log::info!("  Health check: GET  /health");
    log::info!("  Analysis:     POST /simulate");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router()).await?;
    Ok(())
}
