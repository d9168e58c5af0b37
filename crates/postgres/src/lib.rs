//! # Postgres
//!
//! This crate connects the uniform swap service to PostgreSQL: it builds the
//! connection pool, creates the schema and implements the swap request store.

/// Connection pool and schema bootstrap.
pub mod database;

/// PostgreSQL implementation of the swap request store.
pub mod swap_request_store;
pub use swap_request_store::PgSwapRequestStore;
