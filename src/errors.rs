use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("invalid request body: expected a JSON document other than null")]
    NullBody,
    #[error("failed to encode metrics: {0}")]
    Metrics(#[from] prometheus::Error),
    #[error("metrics output is not utf-8: {0}")]
    MetricsEncoding(#[from] FromUtf8Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::NullBody => StatusCode::BAD_REQUEST,
            Self::Metrics(_) | Self::MetricsEncoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
