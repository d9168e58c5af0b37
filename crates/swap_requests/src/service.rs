use std::sync::Arc;

use uuid::Uuid;

use crate::security::{ANSWER_HASH_COST, hash_answer};
use crate::store::SwapRequestStore;
use crate::types::{
    CreateSwapResponse, NewSwapRecord, NewSwapRequest, RequestError, SwapRequest,
    SwapRequestPatch,
};
use crate::validation::{apply_patch, validate_draft};

/// A service for the swap request lifecycle: creating requests, looking them up
/// by credential, editing and deleting them.
#[derive(Clone)]
pub struct RequestService {
    store: Arc<dyn SwapRequestStore>,
    hash_cost: u32,
}

impl RequestService {
    /// Creates a new instance of `RequestService` over the provided store.
    pub fn new(store: Arc<dyn SwapRequestStore>) -> Self {
        Self {
            store,
            hash_cost: ANSWER_HASH_COST,
        }
    }

    /// Overrides the bcrypt cost used for security answers.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// Validates a draft and persists it. The secret code is echoed back so the
    /// holder can save it.
    pub async fn create(&self, draft: &NewSwapRequest) -> Result<CreateSwapResponse, RequestError> {
        let fields = validate_draft(draft)?;

        let security_answer_hash = match &draft.security_answer {
            Some(answer) => Some(hash_answer(answer, self.hash_cost)?),
            None => None,
        };

        let record = NewSwapRecord {
            fields,
            phone: draft.phone.trim().to_string(),
            secret_code: draft.secret_code.clone(),
            security_question: draft.security_question.clone(),
            security_answer_hash,
        };

        let request = self.store.insert(&record).await?;

        log::info!(
            "✅ Swap request {} created ({} {} -> {})",
            request.id,
            request.item_type,
            request.have_size,
            request.want_size
        );

        Ok(CreateSwapResponse {
            id: request.id,
            secret_code: request.secret_code,
        })
    }

    /// Every request whose phone and secret code match exactly. An empty list
    /// is a normal outcome.
    pub async fn find_by_credential(
        &self,
        phone: &str,
        secret_code: &str,
    ) -> Result<Vec<SwapRequest>, RequestError> {
        self.store.find_by_credential(phone, secret_code).await
    }

    /// Gets a request by identifier.
    pub async fn get(&self, id: &Uuid) -> Result<SwapRequest, RequestError> {
        self.store.get(id).await?.ok_or(RequestError::NotFound)
    }

    /// Applies a partial edit. Ownership must have been established by the caller.
    pub async fn update(
        &self,
        id: &Uuid,
        patch: &SwapRequestPatch,
    ) -> Result<SwapRequest, RequestError> {
        let current = self.get(id).await?;
        let fields = apply_patch(&current, patch)?;

        let updated = self
            .store
            .update(id, &fields)
            .await?
            .ok_or(RequestError::NotFound)?;

        log::info!("✏️ Swap request {} updated", id);
        Ok(updated)
    }

    /// Deletes a request permanently. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: &Uuid) -> Result<(), RequestError> {
        if self.store.delete(id).await? {
            log::info!("🗑️ Swap request {} deleted", id);
        } else {
            log::warn!("Swap request {} was already gone", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::InMemorySwapRequestStore;

    fn service() -> RequestService {
        RequestService::new(Arc::new(InMemorySwapRequestStore::new())).with_hash_cost(4)
    }

    fn draft(phone: &str, item_type: &str, have: &str, want: &str) -> NewSwapRequest {
        NewSwapRequest {
            name: "Chidi Okafor".to_string(),
            phone: phone.to_string(),
            item_type: item_type.to_string(),
            have_size: have.to_string(),
            want_size: want.to_string(),
            camp: None,
            secret_code: "1234".to_string(),
            security_question: None,
            security_answer: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_find_by_credential_round_trip() {
        let service = service();
        let mut new_request = draft("08011112222", "khaki_jacket", "M", "L");
        new_request.camp = Some("kano".to_string());

        let created = service.create(&new_request).await.unwrap();
        assert_eq!(created.secret_code, "1234");

        let found = service
            .find_by_credential("08011112222", "1234")
            .await
            .unwrap();
        assert_eq!(found.len(), 1);

        let stored = &found[0];
        assert_eq!(stored.id, created.id);
        assert_eq!(stored.name, new_request.name);
        assert_eq!(stored.phone, new_request.phone);
        assert_eq!(stored.item_type, new_request.item_type);
        assert_eq!(stored.have_size, new_request.have_size);
        assert_eq!(stored.want_size, new_request.want_size);
        assert_eq!(stored.camp, new_request.camp);
        assert_eq!(stored.secret_code, new_request.secret_code);
    }

    #[tokio::test]
    async fn test_find_by_credential_is_exact() {
        let service = service();
        service
            .create(&draft("08011112222", "belt", "S", "M"))
            .await
            .unwrap();

        assert!(service.find_by_credential("08011112222", "12345").await.unwrap().is_empty());
        assert!(service.find_by_credential("8011112222", "1234").await.unwrap().is_empty());
        assert!(service.find_by_credential("08099999999", "1234").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_credential_lists_newest_first() {
        let service = service();
        let first = service
            .create(&draft("08011112222", "belt", "S", "M"))
            .await
            .unwrap();
        let second = service
            .create(&draft("08011112222", "socks", "L", "XL"))
            .await
            .unwrap();

        let found = service
            .find_by_credential("08011112222", "1234")
            .await
            .unwrap();
        let ids: Vec<Uuid> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_create_rejects_same_sizes_without_writing() {
        let store = Arc::new(InMemorySwapRequestStore::new());
        let service = RequestService::new(store.clone());

        let result = service.create(&draft("08011112222", "belt", "M", "M")).await;
        assert!(matches!(result, Err(RequestError::Validation(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_hashes_security_answer() {
        let service = service();
        let mut new_request = draft("08011112222", "belt", "S", "M");
        new_request.security_question = Some("first_pet".to_string());
        new_request.security_answer = Some("Rex".to_string());

        let created = service.create(&new_request).await.unwrap();
        let stored = service.get(&created.id).await.unwrap();

        let hash = stored.security_answer_hash.unwrap();
        assert_ne!(hash, "Rex");
        assert!(crate::security::verify_answer("rex", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_update_enforces_invariants() {
        let service = service();
        let created = service
            .create(&draft("08011112222", "jungle_boot", "40", "42"))
            .await
            .unwrap();

        let same_sizes = SwapRequestPatch {
            want_size: Some("40".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update(&created.id, &same_sizes).await,
            Err(RequestError::Validation(_))
        ));

        // Boot sizes are not valid letter sizes.
        let switch_item = SwapRequestPatch {
            item_type: Some("white_shirt".to_string()),
            ..Default::default()
        };
        assert!(service.update(&created.id, &switch_item).await.is_err());

        let unchanged = service.get(&created.id).await.unwrap();
        assert_eq!(unchanged.want_size, "42");
        assert_eq!(unchanged.item_type, "jungle_boot");
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let service = service();
        let mut new_request = draft("08011112222", "jungle_boot", "40", "42");
        new_request.camp = Some("lagos".to_string());
        let created = service.create(&new_request).await.unwrap();

        let patch = SwapRequestPatch {
            name: Some(" Chidi O. ".to_string()),
            item_type: Some("white_shirt".to_string()),
            have_size: Some("S".to_string()),
            want_size: Some("M".to_string()),
            camp: Some("any".to_string()),
        };
        let updated = service.update(&created.id, &patch).await.unwrap();

        assert_eq!(updated.name, "Chidi O.");
        assert_eq!(updated.item_type, "white_shirt");
        assert_eq!(updated.have_size, "S");
        assert_eq!(updated.want_size, "M");
        assert_eq!(updated.camp, None);
        assert_eq!(updated.phone, "08011112222");
        assert_eq!(updated.secret_code, "1234");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let service = service();
        let patch = SwapRequestPatch {
            name: Some("Nobody".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            service.update(&Uuid::new_v4(), &patch).await,
            Err(RequestError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = service();
        let keep = service
            .create(&draft("08011112222", "belt", "S", "M"))
            .await
            .unwrap();
        let remove = service
            .create(&draft("08011112222", "socks", "L", "XL"))
            .await
            .unwrap();

        service.delete(&remove.id).await.unwrap();
        service.delete(&remove.id).await.unwrap();

        let remaining = service
            .find_by_credential("08011112222", "1234")
            .await
            .unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }
}
