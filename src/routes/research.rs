use crate::models::{ErrorResponse, HealthResponse, ResearchRequest};
use crate::services::{UpstreamClient, UpstreamError};
use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "prd-generator-proxy";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// Configure all proxy routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/deep-research", web::post().to(deep_research));
}

/// Health check endpoint
///
/// GET /api/health
///
/// Always succeeds, independent of upstream availability.
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Deep research proxy endpoint, exclusively for PRD generation
///
/// POST /api/deep-research
///
/// Request body:
/// ```json
/// {
///   "query": "string"
/// }
/// ```
async fn deep_research(
    state: web::Data<AppState>,
    req: web::Json<ResearchRequest>,
) -> impl Responder {
    // Absent, null and empty queries are all rejected before any upstream call
    let query = match req.query() {
        Some(q) => q,
        None => {
            tracing::info!("Rejecting deep-research request without a query");
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Query is required".to_string(),
            });
        }
    };

    tracing::info!("Forwarding PRD generation query ({} chars)", query.len());

    match state.upstream.deep_research(query).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(UpstreamError::Api { status, detail }) => {
            tracing::error!(
                "PRD generator returned an error: status={}, detail={:?}",
                status,
                detail
            );
            // Propagate the upstream status verbatim; a missing detail
            // substitutes the fixed "Unknown error" text.
            let detail = detail.unwrap_or_else(|| "Unknown error".to_string());
            HttpResponse::build(
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            )
            .json(ErrorResponse {
                error: format!("Error from PRD Generator: {}", detail),
            })
        }
        Err(e) => {
            tracing::error!("Failed to call PRD generator: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate PRD".to_string(),
            })
        }
    }
}
