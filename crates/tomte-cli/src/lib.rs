//! tomte command line tool.
//!
//! Reads a draw config (participants plus SMTP settings), runs the
//! session state machine once, and executes the resulting actions: log
//! actions go to the logger, notify actions go through the dispatcher,
//! either over SMTP or into the dry-run sink.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;

pub use config::{ExchangeConfig, PASSWORD_ENV};
pub use error::CliError;

use tomte_core::{Session, SessionAction, SessionEvent};
use tomte_dispatch::{DeliveryError, DeliveryReport, Dispatcher, Notice, SmtpPost, Transport};

/// How notices leave the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Send through SMTP.
    #[default]
    Send,
    /// Validate and draw, but send nothing.
    DryRun,
}

/// Dry-run transport: logs the would-be delivery and drops the notice.
///
/// The receiver is deliberately absent from the log line. Printing
/// assignments would defeat the point of a secret draw.
struct DryRunPost;

impl Transport for DryRunPost {
    fn deliver(&self, notice: &Notice) -> Result<(), DeliveryError> {
        tracing::info!(giver = %notice.giver(), to = %notice.to(), "dry run, notice not sent");
        Ok(())
    }
}

/// Run one full draw from a loaded config.
///
/// Every participant is fed to the session as an add event, then a single
/// draw event produces the notices, which go out according to `mode`.
///
/// # Errors
///
/// Returns [`CliError`] when a participant entry is rejected, the draw
/// fails, the transport cannot be built, or any notice is left
/// undelivered.
pub fn run(config: &ExchangeConfig, mode: DeliveryMode) -> Result<(), CliError> {
    let mut session = Session::new(rand::thread_rng());

    for participant in &config.participants {
        let actions = session.handle(SessionEvent::AddParticipant {
            name: participant.name.clone(),
            contact: participant.contact.clone(),
        })?;
        forward_logs(&actions);
    }

    let actions = session.handle(SessionEvent::Draw)?;
    forward_logs(&actions);
    let notices = Notice::from_actions(&actions);

    let report = match mode {
        DeliveryMode::Send => {
            config.require_password()?;
            let post = SmtpPost::new(&config.smtp)?;
            Dispatcher::new(post).run(&notices)
        },
        DeliveryMode::DryRun => Dispatcher::new(DryRunPost).run(&notices),
    };

    finish(&report)
}

/// Forward the session's log actions to the logger.
fn forward_logs(actions: &[SessionAction]) {
    for action in actions {
        if let SessionAction::Log { message } = action {
            tracing::info!("{message}");
        }
    }
}

/// Convert the aggregate report into the process outcome.
fn finish(report: &DeliveryReport) -> Result<(), CliError> {
    if report.is_complete() {
        tracing::info!(delivered = report.delivered(), "all assignment notices delivered");
        return Ok(());
    }

    Err(CliError::PartialDelivery {
        delivered: report.delivered(),
        attempted: report.attempted(),
    })
}
