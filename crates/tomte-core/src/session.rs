//! Session state machine.
//!
//! A [`Session`] is the explicit state object behind one gift-exchange
//! round. Callers feed it events (add, remove, draw, reset) and execute
//! the actions it returns; all mutation goes through [`Session::handle`],
//! so the whole flow runs without any UI or transport attached.

use rand::Rng;
use thiserror::Error;

use crate::{
    draw::{DrawError, draw},
    roster::{Participant, Roster, RosterError},
};

/// Smallest roster the session will draw for.
///
/// A derangement exists from two participants, but a two-person exchange
/// has exactly one outcome and no secret to keep. Three is the floor.
pub const MIN_DRAW_SIZE: usize = 3;

/// Events fed into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Add one participant to the roster.
    AddParticipant {
        /// Display name, unique within the roster.
        name: String,
        /// Address their notice is sent to.
        contact: String,
    },
    /// Remove a participant by name.
    RemoveParticipant {
        /// Name of the entry to remove.
        name: String,
    },
    /// Draw assignments and request one notice per giver.
    Draw,
    /// Discard the roster without drawing.
    Reset,
}

/// Actions returned by the session for the caller to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Deliver one private assignment notice.
    Notify {
        /// Giver the notice is addressed to.
        giver: String,
        /// Where to send it.
        contact: String,
        /// The name the notice reveals, only to this giver.
        receiver: String,
    },
    /// Surface a progress message to whoever is driving the session.
    Log {
        /// Human-readable message text.
        message: String,
    },
}

/// Errors from session event processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Roster mutation was rejected.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// Too few participants for a draw.
    #[error("need at least {required} participants to draw, have {count}")]
    RosterTooSmall {
        /// Current roster size.
        count: usize,
        /// Minimum size before a draw is permitted.
        required: usize,
    },

    /// The draw itself failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Gift-exchange session state machine.
///
/// Owns the roster and the RNG the draw consumes. Events go in, actions
/// come out; a failed event leaves the roster exactly as it was.
/// Pure state machine - returns actions, caller handles I/O.
///
/// # Type Parameters
///
/// - `R`: RNG used by the draw; seeded in tests, `thread_rng` in production
#[derive(Debug)]
pub struct Session<R: Rng> {
    /// Participants still in the upcoming draw.
    roster: Roster,

    /// Entropy source for the draw.
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Create an empty session drawing randomness from `rng`.
    pub fn new(rng: R) -> Self {
        Self { roster: Roster::new(), rng }
    }

    /// Read access to the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of participants currently in the roster.
    pub fn participant_count(&self) -> usize {
        self.roster.len()
    }

    /// Whether a draw would currently be permitted.
    pub fn can_draw(&self) -> bool {
        self.roster.len() >= MIN_DRAW_SIZE
    }

    /// Process one event and return the resulting actions.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the event cannot be applied. Failed
    /// events never mutate the roster; in particular a failed draw keeps
    /// every participant in place for a retry.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Vec<SessionAction>, SessionError> {
        match event {
            SessionEvent::AddParticipant { name, contact } => self.handle_add(name, contact),
            SessionEvent::RemoveParticipant { name } => self.handle_remove(&name),
            SessionEvent::Draw => self.handle_draw(),
            SessionEvent::Reset => Ok(self.handle_reset()),
        }
    }

    /// Handle participant addition.
    fn handle_add(
        &mut self,
        name: String,
        contact: String,
    ) -> Result<Vec<SessionAction>, SessionError> {
        let trimmed = name.trim().to_string();
        self.roster.add(Participant::new(name, contact))?;

        tracing::debug!(participant = %trimmed, count = self.roster.len(), "participant added");
        Ok(vec![SessionAction::Log {
            message: format!("Added {trimmed} ({} in the draw)", self.roster.len()),
        }])
    }

    /// Handle participant removal.
    fn handle_remove(&mut self, name: &str) -> Result<Vec<SessionAction>, SessionError> {
        let removed = self.roster.remove(name)?;

        tracing::debug!(
            participant = %removed.name,
            count = self.roster.len(),
            "participant removed"
        );
        Ok(vec![SessionAction::Log {
            message: format!("Removed {} ({} in the draw)", removed.name, self.roster.len()),
        }])
    }

    /// Handle the draw: run the engine, emit notices, consume the roster.
    fn handle_draw(&mut self) -> Result<Vec<SessionAction>, SessionError> {
        let count = self.roster.len();
        if count < MIN_DRAW_SIZE {
            return Err(SessionError::RosterTooSmall { count, required: MIN_DRAW_SIZE });
        }

        let names = self.roster.names();
        let assignment = draw(&names, &mut self.rng)?;

        let mut actions = Vec::with_capacity(assignment.len() + 1);
        for pair in assignment.pairs() {
            let contact = self
                .roster
                .contact(&pair.giver)
                .ok_or_else(|| RosterError::UnknownParticipant { name: pair.giver.clone() })?;

            actions.push(SessionAction::Notify {
                giver: pair.giver.clone(),
                contact: contact.to_string(),
                receiver: pair.receiver.clone(),
            });
        }

        // The roster clears once an assignment exists. Delivery outcomes
        // are the caller's concern and never roll this back.
        self.roster.clear();
        actions.push(SessionAction::Log {
            message: format!("Draw complete for {count} participants"),
        });

        tracing::info!(participants = count, "assignments drawn");
        Ok(actions)
    }

    /// Handle a reset: drop the roster without drawing.
    fn handle_reset(&mut self) -> Vec<SessionAction> {
        let count = self.roster.len();
        self.roster.clear();

        vec![SessionAction::Log { message: format!("Cleared {count} participants") }]
    }
}
