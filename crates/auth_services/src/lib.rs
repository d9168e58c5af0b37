//! # Auth Services
//!
//! This crate provides the identity gate for the application. Holders prove
//! ownership of their swap requests with a phone number and secret code; there
//! are no accounts and no session tokens. A holder who chose a security
//! question can also recover the secret code in-app.

/// Middleware that checks the phone and secret code headers on management routes.
pub mod middleware;
/// Credential checks and security-question recovery.
pub mod service;
/// Types and structures used by the identity gate.
pub mod types;

pub use service::IdentityGate;
pub use types::{AuthError, OwnerCredentials, OwnerSession};
