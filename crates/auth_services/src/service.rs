use std::sync::Arc;

use validator::Validate;

use swap_requests::security::verify_answer;
use swap_requests::store::SwapRequestStore;
use swap_requests::validation::{MIN_PHONE_LENGTH, is_valid_secret_code};

use crate::types::{AuthError, OwnerCredentials, OwnerSession, SecurityRecoveryRequest};

/// Establishes ownership of swap requests from a phone number and secret code.
#[derive(Clone)]
pub struct IdentityGate {
    store: Arc<dyn SwapRequestStore>,
}

impl IdentityGate {
    /// Creates a new identity gate over the provided store.
    pub fn new(store: Arc<dyn SwapRequestStore>) -> Self {
        Self { store }
    }

    /// Opens a session over every request owned by `credentials`.
    ///
    /// Malformed factors and unknown pairs fail the same way, with
    /// [`AuthError::NoMatchingAccount`].
    pub async fn authenticate(
        &self,
        credentials: &OwnerCredentials,
    ) -> Result<OwnerSession, AuthError> {
        let phone = credentials.phone.trim();
        if phone.len() < MIN_PHONE_LENGTH || !is_valid_secret_code(&credentials.secret_code) {
            return Err(AuthError::NoMatchingAccount);
        }

        let requests = self
            .store
            .find_by_credential(phone, &credentials.secret_code)
            .await?;

        if requests.is_empty() {
            log::info!("🔒 No swap requests match the credentials for {}", mask_phone(phone));
            return Err(AuthError::NoMatchingAccount);
        }

        log::info!(
            "🔓 {} swap request(s) unlocked for {}",
            requests.len(),
            mask_phone(phone)
        );

        Ok(OwnerSession {
            credentials: OwnerCredentials::new(phone, credentials.secret_code.clone()),
            requests,
        })
    }

    /// Discloses the secret code when the phone number, security question and
    /// answer all match the first request on file for that phone.
    ///
    /// The answer is compared case-insensitively. Every mismatch reports
    /// [`AuthError::NoMatchingAccount`].
    pub async fn recover_with_security_question(
        &self,
        request: &SecurityRecoveryRequest,
    ) -> Result<String, AuthError> {
        request.validate()?;

        let phone = request.phone.trim();
        let swap_request = self
            .store
            .find_first_by_phone(phone)
            .await?
            .ok_or(AuthError::NoMatchingAccount)?;

        let (Some(question), Some(answer_hash)) = (
            swap_request.security_question.as_deref(),
            swap_request.security_answer_hash.as_deref(),
        ) else {
            log::info!("🔒 No security question on file for request {}", swap_request.id);
            return Err(AuthError::NoMatchingAccount);
        };

        if question != request.security_question
            || !verify_answer(&request.security_answer, answer_hash)?
        {
            log::warn!("🔒 Security question check failed for request {}", swap_request.id);
            return Err(AuthError::NoMatchingAccount);
        }

        log::info!("🔑 Secret code recovered in-app for request {}", swap_request.id);
        Ok(swap_request.secret_code)
    }
}

/// Phone number with all but the last four digits hidden, for logs.
fn mask_phone(phone: &str) -> String {
    let visible = phone.len().saturating_sub(4);
    match phone.get(visible..) {
        Some(tail) => format!("{}{}", "*".repeat(visible), tail),
        None => "*".repeat(phone.len()),
    }
}
