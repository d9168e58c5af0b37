//! # Notification Services
//!
//! This crate delivers secret codes to holders over SMS. It provides the SMS
//! provider implementations (Termii, AWS SNS and a log-only provider for
//! development) and the recovery service that looks up a holder by phone
//! number and texts them their code.

/// Recovery of a forgotten secret code over SMS.
pub mod recovery;
/// SMS provider implementations.
pub mod sms;
/// Types and structures used in notification services.
pub mod types;

pub use recovery::RecoveryService;
pub use sms::{LogSmsProvider, SmsProvider, SnsSmsProvider, TermiiSmsProvider};
pub use types::{NotificationError, RecoveryError};
