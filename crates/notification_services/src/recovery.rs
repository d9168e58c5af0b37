use std::sync::Arc;

use swap_requests::store::SwapRequestStore;
use swap_requests::validation::MIN_PHONE_LENGTH;

use crate::sms::SmsProvider;
use crate::types::RecoveryError;

/// Sends a forgotten secret code to the phone on file. The code never travels
/// back to the caller.
#[derive(Clone)]
pub struct RecoveryService {
    store: Arc<dyn SwapRequestStore>,
    sms: Arc<dyn SmsProvider>,
}

impl RecoveryService {
    /// Creates a recovery service that reads from `store` and delivers through `sms`.
    pub fn new(store: Arc<dyn SwapRequestStore>, sms: Arc<dyn SmsProvider>) -> Self {
        Self { store, sms }
    }

    /// Texts the secret code of the first request on file for `phone`.
    pub async fn recover(&self, phone: &str) -> Result<(), RecoveryError> {
        let phone = phone.trim();
        if phone.len() < MIN_PHONE_LENGTH {
            return Err(RecoveryError::Validation("Invalid phone number".to_string()));
        }

        let request = self
            .store
            .find_first_by_phone(phone)
            .await?
            .ok_or(RecoveryError::NotFound)?;

        let message = recovery_message(&request.name, &request.secret_code);
        self.sms.send_sms(phone, &message).await?;

        log::info!("🔑 Secret code for request {} sent by SMS", request.id);
        Ok(())
    }
}

/// Text of the recovery SMS.
pub fn recovery_message(name: &str, secret_code: &str) -> String {
    format!("Hi {}! Your SwapSavvy secret code is: {}", name, secret_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NotificationError, RecoveryResponse};
    use std::sync::Mutex;
    use swap_requests::{InMemorySwapRequestStore, NewSwapRequest, RequestService};

    #[derive(Default)]
    struct MockSmsProvider {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait::async_trait]
    impl SmsProvider for MockSmsProvider {
        async fn send_sms(&self, to: &str, message: &str) -> Result<String, NotificationError> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), message.to_string()));
            Ok("mock-sms-id".to_string())
        }
    }

    struct FailingSmsProvider(fn() -> NotificationError);

    #[async_trait::async_trait]
    impl SmsProvider for FailingSmsProvider {
        async fn send_sms(&self, _to: &str, _message: &str) -> Result<String, NotificationError> {
            Err((self.0)())
        }
    }

    async fn store_with_request() -> Arc<InMemorySwapRequestStore> {
        let store = Arc::new(InMemorySwapRequestStore::new());
        RequestService::new(store.clone())
            .create(&NewSwapRequest {
                name: "Tunde".to_string(),
                phone: "08012345678".to_string(),
                item_type: "face_cap".to_string(),
                have_size: "M".to_string(),
                want_size: "L".to_string(),
                camp: None,
                secret_code: "tunde-42".to_string(),
                security_question: None,
                security_answer: None,
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_known_phone_gets_code_by_sms() {
        let store = store_with_request().await;
        let sms = Arc::new(MockSmsProvider::default());
        let service = RecoveryService::new(store, sms.clone());

        service.recover("08012345678").await.unwrap();

        let sent = sms.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "08012345678");
        assert_eq!(sent[0].1, "Hi Tunde! Your SwapSavvy secret code is: tunde-42");

        let payload = serde_json::to_string(&RecoveryResponse::sent()).unwrap();
        assert!(!payload.contains("tunde-42"));
        assert!(payload.contains("\"success\":true"));
    }

    #[tokio::test]
    async fn test_unknown_phone_is_not_found() {
        let store = store_with_request().await;
        let sms = Arc::new(MockSmsProvider::default());
        let service = RecoveryService::new(store, sms.clone());

        assert!(matches!(
            service.recover("08099999999").await,
            Err(RecoveryError::NotFound)
        ));
        assert!(sms.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_short_phone_is_rejected() {
        let store = store_with_request().await;
        let service = RecoveryService::new(store, Arc::new(MockSmsProvider::default()));

        assert!(matches!(
            service.recover("0801").await,
            Err(RecoveryError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_provider_failures_are_surfaced() {
        let store = store_with_request().await;

        let unavailable = RecoveryService::new(
            store.clone(),
            Arc::new(FailingSmsProvider(|| {
                NotificationError::ServiceUnavailable("down".to_string())
            })),
        );
        assert!(matches!(
            unavailable.recover("08012345678").await,
            Err(RecoveryError::ServiceUnavailable(_))
        ));

        let rejected = RecoveryService::new(
            store,
            Arc::new(FailingSmsProvider(|| {
                NotificationError::DeliveryFailed("rejected".to_string())
            })),
        );
        assert!(matches!(
            rejected.recover("08012345678").await,
            Err(RecoveryError::DeliveryFailed(_))
        ));
    }
}
