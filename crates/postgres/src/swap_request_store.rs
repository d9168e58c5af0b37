use sqlx::PgPool;
use uuid::Uuid;

use swap_requests::store::SwapRequestStore;
use swap_requests::types::{NewSwapRecord, RequestError, SwapRequest, SwapRequestFields};

const COLUMNS: &str = "id, name, phone, item_type, have_size, want_size, camp, \
                       secret_code, security_question, security_answer_hash, created_at";

/// Swap request store backed by the `swap_requests` table.
#[derive(Debug, Clone)]
pub struct PgSwapRequestStore {
    pool: PgPool,
}

impl PgSwapRequestStore {
    /// Creates a new store with the provided database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SwapRequestStore for PgSwapRequestStore {
    async fn insert(&self, record: &NewSwapRecord) -> Result<SwapRequest, RequestError> {
        let query = format!(
            r#"
            INSERT INTO swap_requests (
                name, phone, item_type, have_size, want_size, camp,
                secret_code, security_question, security_answer_hash
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        );

        let request = sqlx::query_as::<_, SwapRequest>(&query)
            .bind(&record.fields.name)
            .bind(&record.phone)
            .bind(&record.fields.item_type)
            .bind(&record.fields.have_size)
            .bind(&record.fields.want_size)
            .bind(&record.fields.camp)
            .bind(&record.secret_code)
            .bind(&record.security_question)
            .bind(&record.security_answer_hash)
            .fetch_one(&self.pool)
            .await?;

        Ok(request)
    }

    async fn find_by_credential(
        &self,
        phone: &str,
        secret_code: &str,
    ) -> Result<Vec<SwapRequest>, RequestError> {
        let query = format!(
            r#"
            SELECT {COLUMNS}
            FROM swap_requests
            WHERE phone = $1 AND secret_code = $2
            ORDER BY created_at DESC
            "#
        );

        let requests = sqlx::query_as::<_, SwapRequest>(&query)
            .bind(phone)
            .bind(secret_code)
            .fetch_all(&self.pool)
            .await?;

        Ok(requests)
    }

    async fn find_first_by_phone(&self, phone: &str) -> Result<Option<SwapRequest>, RequestError> {
        let query = format!(
            r#"
            SELECT {COLUMNS}
            FROM swap_requests
            WHERE phone = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#
        );

        let request = sqlx::query_as::<_, SwapRequest>(&query)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await?;

        Ok(request)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<SwapRequest>, RequestError> {
        let query = format!("SELECT {COLUMNS} FROM swap_requests WHERE id = $1");

        let request = sqlx::query_as::<_, SwapRequest>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(request)
    }

    async fn find_mirror_candidates(
        &self,
        item_type: &str,
        have_size: &str,
        want_size: &str,
        exclude_id: &Uuid,
    ) -> Result<Vec<SwapRequest>, RequestError> {
        let query = format!(
            r#"
            SELECT {COLUMNS}
            FROM swap_requests
            WHERE item_type = $1 AND have_size = $2 AND want_size = $3 AND id <> $4
            "#
        );

        let requests = sqlx::query_as::<_, SwapRequest>(&query)
            .bind(item_type)
            .bind(have_size)
            .bind(want_size)
            .bind(exclude_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(requests)
    }

    async fn update(
        &self,
        id: &Uuid,
        fields: &SwapRequestFields,
    ) -> Result<Option<SwapRequest>, RequestError> {
        let query = format!(
            r#"
            UPDATE swap_requests
            SET name = $1,
                item_type = $2,
                have_size = $3,
                want_size = $4,
                camp = $5
            WHERE id = $6
            RETURNING {COLUMNS}
            "#
        );

        let request = sqlx::query_as::<_, SwapRequest>(&query)
            .bind(&fields.name)
            .bind(&fields.item_type)
            .bind(&fields.have_size)
            .bind(&fields.want_size)
            .bind(&fields.camp)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(request)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, RequestError> {
        let result = sqlx::query("DELETE FROM swap_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
