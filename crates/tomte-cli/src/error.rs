//! CLI error types.

use std::fmt;

use tomte_core::SessionError;
use tomte_dispatch::DeliveryError;

/// Errors that can occur in the command line tool.
#[derive(Debug)]
pub enum CliError {
    /// Config file could not be read.
    Io(std::io::Error),

    /// Config file was malformed or incomplete.
    Config(String),

    /// A participant entry was rejected or the draw failed.
    Session(SessionError),

    /// The SMTP transport could not be constructed.
    Transport(DeliveryError),

    /// Some notices were not delivered.
    PartialDelivery {
        /// How many notices went out.
        delivered: usize,
        /// How many were attempted.
        attempted: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "config read error: {err}"),
            Self::Config(message) => write!(f, "config error: {message}"),
            Self::Session(err) => write!(f, "draw error: {err}"),
            Self::Transport(err) => write!(f, "transport error: {err}"),
            Self::PartialDelivery { delivered, attempted } => {
                write!(f, "delivered {delivered} of {attempted} notices, see the log for failures")
            },
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Session(err) => Some(err),
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SessionError> for CliError {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl From<DeliveryError> for CliError {
    fn from(err: DeliveryError) -> Self {
        Self::Transport(err)
    }
}
