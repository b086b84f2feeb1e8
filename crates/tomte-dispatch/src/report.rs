//! Delivery outcome aggregation.

use std::fmt;

use crate::error::DeliveryError;

/// Outcome of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    giver: String,
    result: Result<(), DeliveryError>,
}

impl DeliveryOutcome {
    pub(crate) fn delivered(giver: impl Into<String>) -> Self {
        Self { giver: giver.into(), result: Ok(()) }
    }

    pub(crate) fn failed(giver: impl Into<String>, error: DeliveryError) -> Self {
        Self { giver: giver.into(), result: Err(error) }
    }

    /// Giver whose notice this attempt carried.
    #[must_use]
    pub fn giver(&self) -> &str {
        &self.giver
    }

    /// Whether the attempt succeeded.
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        self.result.is_ok()
    }

    /// The failure, when the attempt did not succeed.
    #[must_use]
    pub fn error(&self) -> Option<&DeliveryError> {
        self.result.as_ref().err()
    }
}

/// Aggregate result of one notification batch.
///
/// Complete means every attempted delivery succeeded; anything less is a
/// partial failure reported as a delivered-of-attempted count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    outcomes: Vec<DeliveryOutcome>,
}

impl DeliveryReport {
    pub(crate) fn new(outcomes: Vec<DeliveryOutcome>) -> Self {
        Self { outcomes }
    }

    /// How many deliveries were attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// How many deliveries succeeded.
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_delivered()).count()
    }

    /// Whether every attempted delivery succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(DeliveryOutcome::is_delivered)
    }

    /// Every outcome, in attempt order.
    #[must_use]
    pub fn outcomes(&self) -> &[DeliveryOutcome] {
        &self.outcomes
    }

    /// Only the failed outcomes, in attempt order.
    pub fn failures(&self) -> impl Iterator<Item = &DeliveryOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_delivered())
    }
}

impl fmt::Display for DeliveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delivered {} of {} notices", self.delivered(), self.attempted())
    }
}
