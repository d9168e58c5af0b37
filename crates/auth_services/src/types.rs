use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use swap_requests::{RequestError, SwapRequest};

/// Phone number and secret code presented by a holder. Both are compared by
/// exact equality against the stored values.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct OwnerCredentials {
    /// Phone number on the holder's requests
    pub phone: String,
    /// Secret code chosen at creation
    pub secret_code: String,
}

impl OwnerCredentials {
    /// Builds credentials from the two factors.
    pub fn new(phone: impl Into<String>, secret_code: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            secret_code: secret_code.into(),
        }
    }
}

impl fmt::Debug for OwnerCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerCredentials")
            .field("phone", &self.phone)
            .field("secret_code", &"<redacted>")
            .finish()
    }
}

/// The requests a caller proved ownership of for the current call.
#[derive(Debug, Clone)]
pub struct OwnerSession {
    /// Credentials that opened the session
    pub credentials: OwnerCredentials,
    /// Requests owned by these credentials, newest first
    pub requests: Vec<SwapRequest>,
}

impl OwnerSession {
    /// The owned request with identifier `id`.
    ///
    /// A request outside the session reads the same as one that does not
    /// exist, so callers cannot discover other holders' ids.
    pub fn owned(&self, id: &Uuid) -> Result<&SwapRequest, AuthError> {
        self.requests
            .iter()
            .find(|request| request.id == *id)
            .ok_or(AuthError::NoMatchingAccount)
    }
}

/// Request structure for recovering a secret code with a security question
#[derive(Debug, Deserialize, Validate)]
pub struct SecurityRecoveryRequest {
    /// Phone number on file
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,

    /// Security question code chosen at creation
    #[validate(length(min = 1, message = "Please select your security question"))]
    pub security_question: String,

    /// Answer to the security question
    #[validate(length(min = 1, message = "Please enter your security answer"))]
    pub security_answer: String,
}

/// Response structure for a recovered secret code
#[derive(Debug, Serialize, Deserialize)]
pub struct SecurityRecoveryResponse {
    /// The recovered secret code
    pub secret_code: String,
}

/// Custom error type for identity gate errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The phone or secret code header is missing
    #[error("Phone number and secret code are required")]
    MissingCredentials,

    /// Nothing matches the presented factors. Deliberately does not say which
    /// factor was wrong.
    #[error("No matching account")]
    NoMatchingAccount,

    /// An error occurred while validating input data
    #[error("Validation error: {0}")]
    Validation(String),

    /// The swap request layer failed
    #[error("Swap request error: {0}")]
    Request(#[from] RequestError),

    /// An error occurred while checking a security answer
    #[error("Hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl actix_web::ResponseError for AuthError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::{HttpResponse, ResponseError};

        match self {
            AuthError::MissingCredentials => HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "missing_credentials",
                "message": "Phone number and secret code are required"
            })),
            AuthError::NoMatchingAccount => HttpResponse::NotFound().json(serde_json::json!({
                "error": "no_matching_account",
                "message": "No requests match this phone number and secret code"
            })),
            AuthError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "message": msg
            })),
            AuthError::Request(inner) => inner.error_response(),
            AuthError::Hash(_) => {
                log::error!("❌ Identity gate failure: {}", self);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "internal_error",
                    "message": "An internal error occurred"
                }))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AuthError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AuthError::Validation(errors.to_string())
    }
}
