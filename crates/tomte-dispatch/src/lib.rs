//! Notice construction and delivery for the tomte gift exchange.
//!
//! Turns a session's notify actions into addressed plain-text notices and
//! hands each one to a [`Transport`] for a single delivery attempt. One
//! failed recipient never blocks the rest; the dispatcher aggregates the
//! per-recipient outcomes into a [`DeliveryReport`].
//!
//! # Architecture
//!
//! ```text
//! tomte-dispatch
//!   ├─ Notice          (rendered private message per giver)
//!   ├─ Dispatcher      (sequential single-attempt loop)
//!   ├─ DeliveryReport  (delivered-of-attempted aggregation)
//!   └─ SmtpPost        (STARTTLS submission via lettre)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dispatcher;
mod error;
mod notice;
mod report;
mod transport;

pub use dispatcher::Dispatcher;
pub use error::DeliveryError;
pub use notice::{Notice, SUBJECT};
pub use report::{DeliveryOutcome, DeliveryReport};
pub use transport::{SUBMISSION_PORT, SmtpConfig, SmtpPost, Transport};
