//! Delivery error types.

use thiserror::Error;

/// Errors from a single delivery attempt.
///
/// Every variant is scoped to one recipient. The dispatcher records the
/// failure and moves on; nothing here aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// A sender or recipient mailbox failed to parse.
    #[error("invalid address: {reason}")]
    InvalidAddress {
        /// What the address parser objected to.
        reason: String,
    },

    /// The message itself could not be assembled.
    #[error("message build failed: {reason}")]
    Message {
        /// What the message builder objected to.
        reason: String,
    },

    /// The transport refused or dropped the message.
    #[error("transport failure: {reason}")]
    Transport {
        /// Connection, TLS, authentication, or protocol fault.
        reason: String,
    },
}
