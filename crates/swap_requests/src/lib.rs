//! # Swap Requests
//!
//! This crate owns the swap request data model and everything that operates on
//! it directly: input validation against the reference catalogs, the storage
//! port with its in-memory adapter, the request lifecycle service and the
//! matching engine.

/// Swap request model, request DTOs and the error type
pub mod types;
pub use types::*;

/// Catalog and invariant checks for drafts and edits
pub mod validation;

/// Hashing of security answers
pub mod security;

/// Storage port implemented by the database adapters
pub mod store;
pub use store::SwapRequestStore;

/// In-memory store for development and tests
pub mod memory_store;
pub use memory_store::InMemorySwapRequestStore;

/// Create, look up, edit and delete swap requests
pub mod service;
pub use service::RequestService;

/// Mirror-exchange matching between swap requests
pub mod matching;
pub use matching::{MatchingEngine, is_match};
