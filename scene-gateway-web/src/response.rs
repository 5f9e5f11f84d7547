//! JSON envelopes
//!
//! Every body carries `status_code`; successes flatten their payload next to
//! it, failures add `error` plus either `messages` (validation) or `message`.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use scene_gateway_core::types::ValidationErrors;

#[derive(Debug, Serialize)]
struct SuccessEnvelope<T> {
    status_code: u16,
    #[serde(flatten)]
    data: T,
}

#[derive(Debug, Serialize)]
struct ValidationEnvelope<'a> {
    status_code: u16,
    error: &'a str,
    messages: &'a ValidationErrors,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    status_code: u16,
    error: &'a str,
    message: &'a str,
}

/// 200 with `data` flattened into the envelope.
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(SuccessEnvelope {
        status_code: StatusCode::OK.as_u16(),
        data,
    })
}

pub fn validation_failed(error: &str, messages: &ValidationErrors) -> HttpResponse {
    let status = StatusCode::UNPROCESSABLE_ENTITY;
    HttpResponse::build(status).json(ValidationEnvelope {
        status_code: status.as_u16(),
        error,
        messages,
    })
}

pub fn failure(status: StatusCode, error: &str, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorEnvelope {
        status_code: status.as_u16(),
        error,
        message,
    })
}
