//! The storage port the PostgreSQL and in-memory adapters implement.

use uuid::Uuid;

use crate::types::{NewSwapRecord, RequestError, SwapRequest, SwapRequestFields};

/// Query surface over the single swap request table.
///
/// Stores compare phone numbers and secret codes by exact equality. No
/// normalization happens at this layer.
#[async_trait::async_trait]
pub trait SwapRequestStore: Send + Sync {
    /// Inserts a record, assigning its identifier and creation timestamp.
    async fn insert(&self, record: &NewSwapRecord) -> Result<SwapRequest, RequestError>;

    /// Requests whose phone and secret code both equal the arguments, newest first.
    async fn find_by_credential(
        &self,
        phone: &str,
        secret_code: &str,
    ) -> Result<Vec<SwapRequest>, RequestError>;

    /// The oldest request on file for a phone number.
    async fn find_first_by_phone(&self, phone: &str) -> Result<Option<SwapRequest>, RequestError>;

    /// Gets a request by identifier.
    async fn get(&self, id: &Uuid) -> Result<Option<SwapRequest>, RequestError>;

    /// Requests for `item_type` holding `have_size` and wanting `want_size`,
    /// excluding `exclude_id`.
    async fn find_mirror_candidates(
        &self,
        item_type: &str,
        have_size: &str,
        want_size: &str,
        exclude_id: &Uuid,
    ) -> Result<Vec<SwapRequest>, RequestError>;

    /// Overwrites the editable fields of a request. Returns `None` when the id is unknown.
    async fn update(
        &self,
        id: &Uuid,
        fields: &SwapRequestFields,
    ) -> Result<Option<SwapRequest>, RequestError>;

    /// Deletes a request. Returns whether a row was removed.
    async fn delete(&self, id: &Uuid) -> Result<bool, RequestError>;
}
