//! In-memory swap request store.
//!
//! Suitable for local development and tests. Everything is lost when the
//! process exits.

use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::store::SwapRequestStore;
use crate::types::{NewSwapRecord, RequestError, SwapRequest, SwapRequestFields};

/// Swap requests kept in insertion order behind a lock.
#[derive(Debug, Default)]
pub struct InMemorySwapRequestStore {
    rows: RwLock<Vec<SwapRequest>>,
}

impl InMemorySwapRequestStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored requests.
    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the store holds no requests.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl SwapRequestStore for InMemorySwapRequestStore {
    async fn insert(&self, record: &NewSwapRecord) -> Result<SwapRequest, RequestError> {
        let request = SwapRequest {
            id: Uuid::new_v4(),
            name: record.fields.name.clone(),
            phone: record.phone.clone(),
            item_type: record.fields.item_type.clone(),
            have_size: record.fields.have_size.clone(),
            want_size: record.fields.want_size.clone(),
            camp: record.fields.camp.clone(),
            secret_code: record.secret_code.clone(),
            security_question: record.security_question.clone(),
            security_answer_hash: record.security_answer_hash.clone(),
            created_at: Utc::now(),
        };

        self.rows
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        Ok(request)
    }

    async fn find_by_credential(
        &self,
        phone: &str,
        secret_code: &str,
    ) -> Result<Vec<SwapRequest>, RequestError> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);

        // Newest insert first so equal timestamps still come out newest first.
        let mut found: Vec<SwapRequest> = rows
            .iter()
            .rev()
            .filter(|row| row.phone == phone && row.secret_code == secret_code)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(found)
    }

    async fn find_first_by_phone(&self, phone: &str) -> Result<Option<SwapRequest>, RequestError> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.iter().find(|row| row.phone == phone).cloned())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<SwapRequest>, RequestError> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.iter().find(|row| row.id == *id).cloned())
    }

    async fn find_mirror_candidates(
        &self,
        item_type: &str,
        have_size: &str,
        want_size: &str,
        exclude_id: &Uuid,
    ) -> Result<Vec<SwapRequest>, RequestError> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);

        Ok(rows
            .iter()
            .filter(|row| {
                row.item_type == item_type
                    && row.have_size == have_size
                    && row.want_size == want_size
                    && row.id != *exclude_id
            })
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: &Uuid,
        fields: &SwapRequestFields,
    ) -> Result<Option<SwapRequest>, RequestError> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);

        let Some(row) = rows.iter_mut().find(|row| row.id == *id) else {
            return Ok(None);
        };

        row.name = fields.name.clone();
        row.item_type = fields.item_type.clone();
        row.have_size = fields.have_size.clone();
        row.want_size = fields.want_size.clone();
        row.camp = fields.camp.clone();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, RequestError> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        let before = rows.len();
        rows.retain(|row| row.id != *id);
        Ok(rows.len() != before)
    }
}
