use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_item_type;

/// Draft submitted by a holder to create a swap request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewSwapRequest {
    /// Name of the holder
    #[validate(length(min = 1, max = 255, message = "Please enter your name"))]
    pub name: String,

    /// Phone number of the holder, also the first credential factor
    #[validate(length(min = 10, max = 20, message = "Please enter a valid phone number"))]
    pub phone: String,

    /// Item type code from the item catalog
    #[validate(custom(function = "validate_item_type"))]
    pub item_type: String,

    /// Size the holder currently has
    #[validate(length(min = 1, message = "Please select the size you have"))]
    pub have_size: String,

    /// Size the holder wants in exchange
    #[validate(length(min = 1, message = "Please select the size you want"))]
    pub want_size: String,

    /// Camp code, `"any"` or absent for a global match
    #[serde(default)]
    pub camp: Option<String>,

    /// Secret code chosen by the holder, the second credential factor
    #[validate(length(min = 4, message = "Secret code must be at least 4 characters"))]
    pub secret_code: String,

    /// Optional security question code used for in-app recovery
    #[serde(default)]
    pub security_question: Option<String>,

    /// Answer to the security question
    #[serde(default)]
    pub security_answer: Option<String>,
}

/// Partial edit of a swap request. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SwapRequestPatch {
    /// New holder name
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: Option<String>,

    /// New item type
    #[validate(custom(function = "validate_item_type"))]
    pub item_type: Option<String>,

    /// New size the holder has
    pub have_size: Option<String>,

    /// New size the holder wants
    pub want_size: Option<String>,

    /// New camp; `"any"` or an empty string clears the camp
    pub camp: Option<String>,
}

/// The editable part of a swap request, after validation and normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequestFields {
    /// Holder name, trimmed
    pub name: String,
    /// Item type code
    pub item_type: String,
    /// Size the holder has
    pub have_size: String,
    /// Size the holder wants
    pub want_size: String,
    /// Camp code, `None` for any camp
    pub camp: Option<String>,
}

/// A validated record ready to be inserted by a store
#[derive(Debug, Clone)]
pub struct NewSwapRecord {
    /// Editable fields
    pub fields: SwapRequestFields,
    /// Phone number, trimmed
    pub phone: String,
    /// Secret code as chosen by the holder
    pub secret_code: String,
    /// Security question code
    pub security_question: Option<String>,
    /// bcrypt hash of the normalized security answer
    pub security_answer_hash: Option<String>,
}

/// Swap request model representing the database schema
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SwapRequest {
    /// Unique identifier generated at creation
    pub id: Uuid,
    /// Name of the holder
    pub name: String,
    /// Phone number of the holder
    pub phone: String,
    /// Item type code
    pub item_type: String,
    /// Size the holder has
    pub have_size: String,
    /// Size the holder wants
    pub want_size: String,
    /// Camp code (nullable, null means any camp)
    pub camp: Option<String>,
    /// Secret code, stored as a plain shared secret
    pub secret_code: String,
    /// Security question code (nullable)
    pub security_question: Option<String>,
    /// Hash of the security answer (nullable)
    pub security_answer_hash: Option<String>,
    /// Timestamp when the request was created
    pub created_at: DateTime<Utc>,
}

impl SwapRequest {
    /// The editable fields of this request.
    pub fn fields(&self) -> SwapRequestFields {
        SwapRequestFields {
            name: self.name.clone(),
            item_type: self.item_type.clone(),
            have_size: self.have_size.clone(),
            want_size: self.want_size.clone(),
            camp: self.camp.clone(),
        }
    }

    /// Owner-facing view, without any secret material.
    pub fn to_view(&self) -> SwapRequestView {
        SwapRequestView {
            id: self.id,
            name: self.name.clone(),
            phone: self.phone.clone(),
            item_type: self.item_type.clone(),
            item_label: catalog::item_label(&self.item_type).to_string(),
            have_size: self.have_size.clone(),
            want_size: self.want_size.clone(),
            camp: self.camp.clone(),
            camp_label: catalog::camp_label(self.camp.as_deref()).to_string(),
            has_security_question: self.security_question.is_some(),
            created_at: self.created_at,
        }
    }

    /// Counterpart-facing view shown in match results.
    pub fn to_match_view(&self) -> MatchView {
        MatchView {
            id: self.id,
            name: self.name.clone(),
            phone: self.phone.clone(),
            item_type: self.item_type.clone(),
            have_size: self.have_size.clone(),
            want_size: self.want_size.clone(),
            camp: self.camp.clone(),
            camp_label: catalog::camp_label(self.camp.as_deref()).to_string(),
        }
    }
}

/// Response structure for a created swap request
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSwapResponse {
    /// Identifier of the new request
    pub id: Uuid,
    /// The secret code, echoed so the holder can save it
    pub secret_code: String,
}

/// A swap request as shown to its owner
#[derive(Debug, Serialize, Deserialize)]
pub struct SwapRequestView {
    /// Unique identifier
    pub id: Uuid,
    /// Name of the holder
    pub name: String,
    /// Phone number of the holder
    pub phone: String,
    /// Item type code
    pub item_type: String,
    /// Item type label
    pub item_label: String,
    /// Size the holder has
    pub have_size: String,
    /// Size the holder wants
    pub want_size: String,
    /// Camp code
    pub camp: Option<String>,
    /// Camp label
    pub camp_label: String,
    /// Whether in-app recovery is available for this request
    pub has_security_question: bool,
    /// When the request was created
    pub created_at: DateTime<Utc>,
}

/// A matching counterpart
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchView {
    /// Identifier of the counterpart's request
    pub id: Uuid,
    /// Name of the counterpart
    pub name: String,
    /// Contact phone of the counterpart
    pub phone: String,
    /// Item type code
    pub item_type: String,
    /// Size the counterpart has
    pub have_size: String,
    /// Size the counterpart wants
    pub want_size: String,
    /// Camp code of the counterpart
    pub camp: Option<String>,
    /// Camp label of the counterpart
    pub camp_label: String,
}

/// Response structure for listing the owner's requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ListRequestsResponse {
    /// Requests owned by the caller, newest first
    pub requests: Vec<SwapRequestView>,
    /// Total count of requests
    pub total: usize,
}

/// Response structure for a match lookup
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchesResponse {
    /// Identifier of the request the matches were computed for
    pub request_id: Uuid,
    /// Mutually compatible requests, unordered
    pub matches: Vec<MatchView>,
    /// Number of matches
    pub count: usize,
    /// Summary for display
    pub message: String,
}

/// Custom error type for swap request operations
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Input failed validation; nothing was written
    #[error("Validation error: {0}")]
    Validation(String),

    /// The swap request does not exist
    #[error("Swap request not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An error occurred while hashing a security answer
    #[error("Hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl actix_web::ResponseError for RequestError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            RequestError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "message": msg
            })),
            RequestError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "request_not_found",
                "message": "Swap request not found"
            })),
            _ => {
                log::error!("❌ Swap request operation failed: {}", self);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "internal_error",
                    "message": "An internal error occurred"
                }))
            }
        }
    }
}

impl From<validator::ValidationErrors> for RequestError {
    fn from(errors: validator::ValidationErrors) -> Self {
        RequestError::Validation(errors.to_string())
    }
}
