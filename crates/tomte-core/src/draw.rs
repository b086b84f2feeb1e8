//! Derangement draw.
//!
//! Produces the giver/receiver assignment for a gift exchange: a
//! permutation of the participant names with no fixed points, so nobody
//! draws themselves. The generator uses rejection sampling: givers are
//! paired greedily with uniformly random unused receivers, and an attempt
//! that corners itself is thrown away whole and redrawn.

use std::collections::{HashMap, HashSet};

use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

/// Smallest name set a derangement exists for.
pub const MIN_PARTICIPANTS: usize = 2;

/// Attempt budget before the draw gives up.
///
/// A single greedy attempt dead-ends with probability at most 1/4 (worst
/// case, three names), so spurious exhaustion needs 64 consecutive
/// dead ends. The bound keeps malformed inputs from looping forever.
pub const MAX_ATTEMPTS: usize = 64;

/// Errors from the draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Fewer than [`MIN_PARTICIPANTS`] names: no derangement exists.
    #[error("cannot draw with {count} participants, need at least 2")]
    TooFewParticipants {
        /// How many names were supplied.
        count: usize,
    },

    /// No attempt within the budget completed a derangement.
    #[error("no complete derangement after {attempts} attempts")]
    AttemptsExhausted {
        /// The attempt budget that was spent.
        attempts: usize,
    },
}

/// One giver/receiver pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The participant who gives.
    pub giver: String,
    /// The participant they gift.
    pub receiver: String,
}

/// A complete draw result.
///
/// Every participant appears exactly once as giver and exactly once as
/// receiver, and never paired with themselves. Immutable once produced;
/// pairs keep the order the names were supplied in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pairs: Vec<Pair>,
}

impl Assignment {
    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the assignment holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All pairs, in the order the names were supplied.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Receiver assigned to a giver, if the giver is part of the draw.
    #[must_use]
    pub fn receiver_for(&self, giver: &str) -> Option<&str> {
        self.pairs.iter().find(|pair| pair.giver == giver).map(|pair| pair.receiver.as_str())
    }
}

/// Draw a derangement over `names`.
///
/// Shuffles the giver order, then pairs each giver with a uniformly random
/// receiver among the names not yet taken and not the giver themself. An
/// attempt where some giver runs out of candidates is discarded and
/// redrawn from scratch, up to [`MAX_ATTEMPTS`] times.
///
/// Names are expected to be unique; the roster upholds that upstream.
///
/// # Errors
///
/// Returns [`DrawError::TooFewParticipants`] for fewer than two names and
/// [`DrawError::AttemptsExhausted`] when the attempt budget runs out.
pub fn draw<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Result<Assignment, DrawError> {
    if names.len() < MIN_PARTICIPANTS {
        return Err(DrawError::TooFewParticipants { count: names.len() });
    }

    for attempt in 1..=MAX_ATTEMPTS {
        if let Some(pairs) = attempt_draw(names, rng) {
            tracing::debug!(attempt, participants = names.len(), "draw complete");
            return Ok(Assignment { pairs });
        }
        tracing::debug!(attempt, "attempt dead-ended, redrawing");
    }

    Err(DrawError::AttemptsExhausted { attempts: MAX_ATTEMPTS })
}

/// One greedy attempt. `None` means a giver had no candidates left.
fn attempt_draw<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Option<Vec<Pair>> {
    let mut order: Vec<&str> = names.iter().map(String::as_str).collect();
    order.shuffle(rng);

    let mut taken: HashSet<&str> = HashSet::with_capacity(names.len());
    let mut receiver_of: HashMap<&str, &str> = HashMap::with_capacity(names.len());

    for giver in order {
        let candidates: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|name| *name != giver && !taken.contains(name))
            .collect();

        let receiver = *candidates.choose(rng)?;
        taken.insert(receiver);
        receiver_of.insert(giver, receiver);
    }

    names
        .iter()
        .map(|giver| {
            receiver_of
                .get(giver.as_str())
                .map(|receiver| Pair { giver: giver.clone(), receiver: (*receiver).to_string() })
        })
        .collect()
}
