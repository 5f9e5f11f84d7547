//! HTTP routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET  | `/health` | liveness |
//! | POST | `/search` | quick-search |
//! | GET  | `/items/{id}/assets` | asset map |
//! | GET  | `/items/{id}/check-activation` | asset map, for polling |
//! | POST | `/items/{id}/activate` | activate-and-check |

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde_json::{Value, json};
use tracing_attributes::instrument;

use scene_gateway_core::ErrorKind;
use scene_gateway_core::types::ValidationErrors;

use crate::error::ApiError;
use crate::response;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .route("/search", web::post().to(search))
        .service(
            web::scope("/items/{id}")
                .route("/assets", web::get().to(list_assets))
                .route("/check-activation", web::get().to(check_activation))
                .route("/activate", web::post().to(activate)),
        )
        .default_service(web::to(not_found));
}

/// 非 JSON 请求体与字段校验失败一样返回 422
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            tracing::warn!("Rejected request body: {err}");
            let messages = ValidationErrors::single(
                "body",
                format!("The request body must be valid JSON: {err}"),
            );
            let res = response::validation_failed(ErrorKind::InvalidInput.summary(), &messages);
            InternalError::from_response(err, res).into()
        })
}

async fn health() -> HttpResponse {
    response::ok(json!({ "status": "ok" }))
}

#[instrument(skip_all)]
async fn search(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let result = state.imagery.search(&body).await?;
    tracing::info!(count = result.count, "Search completed");
    Ok(response::ok(result))
}

#[instrument(skip(state))]
async fn list_assets(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let overview = state.imagery.list_assets(&id).await?;
    Ok(response::ok(overview))
}

#[instrument(skip(state))]
async fn check_activation(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let overview = state.imagery.check_activation(&id).await?;
    Ok(response::ok(overview))
}

#[instrument(skip(state))]
async fn activate(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let result = state.imagery.activate(&id).await?;
    Ok(response::ok(result))
}

async fn not_found() -> HttpResponse {
    response::failure(StatusCode::NOT_FOUND, "Not found", "No route matches this request")
}
