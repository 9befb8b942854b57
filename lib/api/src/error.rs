use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use jsonorbit_core::VisualizationPayload;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] jsonorbit_core::Error),

    #[error("Failed to decode JSON from URL")]
    Decode,

    #[error("JSON too large ({0:.2}MB). Max: 2MB")]
    TooLarge(f64),

    #[error("Invalid query string: {0}")]
    Query(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error body: the message next to an empty payload, so clients can render it as-is
#[derive(Serialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
    #[serde(flatten)]
    pub payload: VisualizationPayload,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        warn!("request rejected: {}", self);
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            payload: VisualizationPayload::empty(),
        })
    }
}
