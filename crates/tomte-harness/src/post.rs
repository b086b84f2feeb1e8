//! Scripted in-memory transports.

use std::cell::RefCell;

use tomte_dispatch::{DeliveryError, Notice, Transport};

/// Transport that accepts every notice and records it in delivery order.
#[derive(Debug, Default)]
pub struct MemoryPost {
    accepted: RefCell<Vec<Notice>>,
}

impl MemoryPost {
    /// Create an empty post box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices accepted so far, in delivery order.
    #[must_use]
    pub fn accepted(&self) -> Vec<Notice> {
        self.accepted.borrow().clone()
    }

    /// Number of accepted notices.
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.borrow().len()
    }
}

impl Transport for MemoryPost {
    fn deliver(&self, notice: &Notice) -> Result<(), DeliveryError> {
        self.accepted.borrow_mut().push(notice.clone());
        Ok(())
    }
}

/// Transport that fails for the named givers and accepts everyone else.
///
/// Faults are per-recipient. One scripted failure never takes the rest of
/// the batch down with it, which is exactly the dispatcher property the
/// tests lean on.
#[derive(Debug, Default)]
pub struct ScriptedPost {
    fail_for: Vec<String>,
    attempted: RefCell<Vec<String>>,
    accepted: RefCell<Vec<Notice>>,
}

impl ScriptedPost {
    /// Fail deliveries for the named givers, accept everyone else.
    pub fn failing_for<I, S>(givers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fail_for: givers.into_iter().map(Into::into).collect(),
            attempted: RefCell::new(Vec::new()),
            accepted: RefCell::new(Vec::new()),
        }
    }

    /// Every giver an attempt was made for, in attempt order.
    #[must_use]
    pub fn attempted(&self) -> Vec<String> {
        self.attempted.borrow().clone()
    }

    /// Successfully accepted notices, in delivery order.
    #[must_use]
    pub fn accepted(&self) -> Vec<Notice> {
        self.accepted.borrow().clone()
    }
}

impl Transport for ScriptedPost {
    fn deliver(&self, notice: &Notice) -> Result<(), DeliveryError> {
        self.attempted.borrow_mut().push(notice.giver().to_string());

        if self.fail_for.iter().any(|giver| giver == notice.giver()) {
            return Err(DeliveryError::Transport {
                reason: format!("scripted failure for {}", notice.giver()),
            });
        }

        self.accepted.borrow_mut().push(notice.clone());
        Ok(())
    }
}
