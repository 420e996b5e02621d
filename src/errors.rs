use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("Wallet provider error: {0}")]
    ProviderError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unexpected response ({status}): {body}")]
    NotSuccessResponse { status: u16, body: String },

    #[error("Cannot parse response: {0}")]
    ParseError(String),

    #[error("Malformed balance resource: {0}")]
    MalformedResource(String),

    #[error("Wallet not connected")]
    NotConnectedError,

    #[error("Notice not found: {0}")]
    NoticeNotFoundError(String),

    #[error("Clipboard is empty")]
    ClipboardEmptyError,

    #[error("Unsupported network: {0}")]
    UnsupportedNetworkError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl ConnectorError {
    fn code(&self) -> u16 {
        match self {
            ConnectorError::ProviderError(_) => 502,
            ConnectorError::NetworkError(_) => 502,
            ConnectorError::NotSuccessResponse { .. } => 502,
            ConnectorError::ParseError(_) => 502,
            ConnectorError::MalformedResource(_) => 502,
            ConnectorError::NotConnectedError => 400,
            ConnectorError::NoticeNotFoundError(_) => 404,
            ConnectorError::ClipboardEmptyError => 404,
            ConnectorError::UnsupportedNetworkError(_) => 400,
            ConnectorError::ConfigError(_) => 500,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

impl ResponseError for ConnectorError {
    fn error_response(&self) -> HttpResponse {
        let code = self.code();
        let response = ApiResponse {
            status: "FAILURE".to_string(),
            code,
            result: None::<()>,
            error: Some(ApiError {
                code,
                message: self.to_string(),
            }),
        };

        match code {
            400 => HttpResponse::BadRequest().json(response),
            404 => HttpResponse::NotFound().json(response),
            502 => HttpResponse::BadGateway().json(response),
            _ => HttpResponse::InternalServerError().json(response),
        }
    }
}
