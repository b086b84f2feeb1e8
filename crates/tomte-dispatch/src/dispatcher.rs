//! Sequential notice dispatch.

use crate::{
    notice::Notice,
    report::{DeliveryOutcome, DeliveryReport},
    transport::Transport,
};

/// Sends notices through a transport, one attempt each, and aggregates
/// the outcomes.
///
/// Notices go out in the order given. A failed attempt is recorded and
/// the batch continues; retries are the organizer's call, not ours.
pub struct Dispatcher<T: Transport> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    /// Wrap a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Access the wrapped transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Attempt every notice once and report the per-recipient outcomes.
    pub fn run(&self, notices: &[Notice]) -> DeliveryReport {
        let mut outcomes = Vec::with_capacity(notices.len());

        for notice in notices {
            match self.transport.deliver(notice) {
                Ok(()) => {
                    tracing::info!(giver = %notice.giver(), to = %notice.to(), "notice delivered");
                    outcomes.push(DeliveryOutcome::delivered(notice.giver()));
                },
                Err(error) => {
                    tracing::warn!(giver = %notice.giver(), %error, "notice delivery failed");
                    outcomes.push(DeliveryOutcome::failed(notice.giver(), error));
                },
            }
        }

        DeliveryReport::new(outcomes)
    }
}
