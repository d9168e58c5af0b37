use sqlx::{PgPool, Row};

/// Table definition for swap requests. Matches are computed, never stored.
pub(crate) const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS swap_requests (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        phone TEXT NOT NULL,
        item_type TEXT NOT NULL,
        have_size TEXT NOT NULL,
        want_size TEXT NOT NULL,
        camp TEXT,
        secret_code TEXT NOT NULL,
        security_question TEXT,
        security_answer_hash TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        CONSTRAINT swap_requests_sizes_differ CHECK (have_size <> want_size)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS swap_requests_credential_idx ON swap_requests (phone, secret_code)",
    "CREATE INDEX IF NOT EXISTS swap_requests_mirror_idx ON swap_requests (item_type, have_size, want_size)",
];

/// Creates a connection pool to the PostgreSQL database.
pub async fn create_connection_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Tests the database connection by executing a simple query.
pub async fn test_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    let row = sqlx::query("SELECT 1 as test").fetch_one(pool).await?;

    let test_value: i32 = row.get("test");
    log::info!(
        "✅ Database connection successful! Test value: {}",
        test_value
    );

    Ok(())
}

/// Creates the swap request table and its indexes when they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(*statement).execute(pool).await?;
    }

    log::info!("🗃️ Swap request schema is ready");
    Ok(())
}
