use serde::{Deserialize, Serialize};
use validator::Validate;

use swap_requests::RequestError;

/// Errors raised by SMS providers.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    /// The provider could not be reached or is not configured.
    #[error("SMS service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The provider answered but did not report a successful delivery.
    #[error("SMS delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Settings for the Termii SMS API
#[derive(Debug, Clone)]
pub struct TermiiConfig {
    /// Base URL of the Termii API
    pub base_url: String,
    /// API key; the provider is unavailable without one
    pub api_key: Option<String>,
    /// Sender id shown on the handset
    pub sender_id: String,
    /// Termii route, e.g. `dnd` or `generic`
    pub channel: String,
}

impl Default for TermiiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.ng.termii.com".to_string(),
            api_key: None,
            sender_id: "NYSC-Swap".to_string(),
            channel: "dnd".to_string(),
        }
    }
}

/// Body of a Termii send call
#[derive(Debug, Serialize)]
pub struct TermiiSendRequest<'a> {
    /// Destination phone number
    pub to: &'a str,
    /// Sender id
    pub from: &'a str,
    /// Message text
    pub sms: &'a str,
    /// Message type, always `plain`
    #[serde(rename = "type")]
    pub message_type: &'a str,
    /// Delivery route
    pub channel: &'a str,
    /// API key
    pub api_key: &'a str,
}

/// Body of a Termii send response. Only `code == "ok"` counts as success.
#[derive(Debug, Deserialize)]
pub struct TermiiSendResponse {
    /// Status code, `ok` on success
    pub code: Option<String>,
    /// Provider message id
    pub message_id: Option<String>,
    /// Provider status message
    pub message: Option<String>,
}

/// Request structure for SMS code recovery
#[derive(Debug, Deserialize, Validate)]
pub struct RecoverSecretCodeRequest {
    /// Phone number on file
    #[validate(length(min = 10, message = "Invalid phone number"))]
    pub phone: String,
}

/// Response structure for SMS code recovery. Never carries the code itself.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecoveryResponse {
    /// Whether the code was sent
    pub success: bool,
    /// Confirmation text on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecoveryResponse {
    /// Successful acknowledgement.
    pub fn sent() -> Self {
        Self {
            success: true,
            message: Some("Secret code sent via SMS".to_string()),
            error: None,
        }
    }

    /// Failure carrying `error`.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Custom error type for secret code recovery
#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    /// The phone number is malformed
    #[error("{0}")]
    Validation(String),

    /// No request is on file for the phone number
    #[error("No account found with this phone number")]
    NotFound,

    /// The SMS provider is unreachable or misconfigured
    #[error("SMS service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The SMS provider reported a failed delivery
    #[error("Failed to send SMS: {0}")]
    DeliveryFailed(String),

    /// The swap request layer failed
    #[error("Swap request error: {0}")]
    Request(#[from] RequestError),
}

impl From<NotificationError> for RecoveryError {
    fn from(error: NotificationError) -> Self {
        match error {
            NotificationError::ServiceUnavailable(msg) => RecoveryError::ServiceUnavailable(msg),
            NotificationError::DeliveryFailed(msg) => RecoveryError::DeliveryFailed(msg),
        }
    }
}

impl From<validator::ValidationErrors> for RecoveryError {
    fn from(_: validator::ValidationErrors) -> Self {
        RecoveryError::Validation("Invalid phone number".to_string())
    }
}

impl actix_web::ResponseError for RecoveryError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            RecoveryError::Validation(_) => {
                HttpResponse::BadRequest().json(RecoveryResponse::failed(self.to_string()))
            }
            RecoveryError::NotFound => {
                HttpResponse::NotFound().json(RecoveryResponse::failed(self.to_string()))
            }
            RecoveryError::ServiceUnavailable(_) => {
                HttpResponse::ServiceUnavailable().json(RecoveryResponse::failed(self.to_string()))
            }
            RecoveryError::DeliveryFailed(_) => {
                HttpResponse::BadGateway().json(RecoveryResponse::failed(self.to_string()))
            }
            RecoveryError::Request(_) => {
                log::error!("❌ Secret code recovery failed: {}", self);
                HttpResponse::InternalServerError()
                    .json(RecoveryResponse::failed("An error occurred"))
            }
        }
    }
}
