//! # Web Handlers for the Uniform Swap Web Application
//!
//! This crate provides the web handlers for the uniform swap service and the
//! route table that mounts them.

/// Reference catalog handlers (items, sizes, camps, security questions)
mod catalog_handlers;
pub use catalog_handlers::*;

/// Swap request creation handler
mod request_handlers;
pub use request_handlers::*;

/// Handlers for managing owned swap requests (list, edit, delete, matches)
mod manage_handlers;
pub use manage_handlers::*;

/// Secret code recovery handlers (SMS and security question)
mod recovery_handlers;
pub use recovery_handlers::*;

/// Route table for the API
mod routes;
pub use routes::*;
