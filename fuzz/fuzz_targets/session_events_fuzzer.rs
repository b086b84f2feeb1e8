//! Fuzz target for the session state machine
//!
//! # Strategy
//!
//! - Event sequences: arbitrary interleavings of adds, removes, draws,
//!   and resets
//! - Name reuse: small id space so duplicates and removals actually hit
//! - Raw names: arbitrary strings exercise trimming and validation
//!
//! # Invariants
//!
//! - NEVER panic on any event sequence
//! - A failed event leaves the roster size unchanged
//! - A successful draw empties the roster and emits one notify per
//!   participant, none of them a self-assignment
//! - Roster names stay unique after every event

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tomte_core::{Session, SessionAction, SessionEvent};

#[derive(Debug, Clone, Arbitrary)]
enum FuzzedEvent {
    Add { name_id: u8, contact_id: u8 },
    AddRaw { name: String, contact: String },
    Remove { name_id: u8 },
    Draw,
    Reset,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Seed for the deterministic RNG behind draws.
    seed: u64,
    /// Event sequence to process.
    events: Vec<FuzzedEvent>,
}

fn name_for(id: u8) -> String {
    format!("participant-{}", id % 24)
}

fn contact_for(id: u8) -> String {
    format!("participant-{}@example.org", id % 24)
}

fn to_event(fuzzed: FuzzedEvent) -> SessionEvent {
    match fuzzed {
        FuzzedEvent::Add { name_id, contact_id } => SessionEvent::AddParticipant {
            name: name_for(name_id),
            contact: contact_for(contact_id),
        },
        FuzzedEvent::AddRaw { name, contact } => {
            SessionEvent::AddParticipant { name, contact }
        },
        FuzzedEvent::Remove { name_id } => {
            SessionEvent::RemoveParticipant { name: name_for(name_id) }
        },
        FuzzedEvent::Draw => SessionEvent::Draw,
        FuzzedEvent::Reset => SessionEvent::Reset,
    }
}

fuzz_target!(|input: FuzzInput| {
    let rng = ChaCha8Rng::seed_from_u64(input.seed);
    let mut session = Session::new(rng);

    for fuzzed in input.events.into_iter().take(256) {
        let before = session.participant_count();
        let event = to_event(fuzzed);
        let was_draw = matches!(event, SessionEvent::Draw);

        match session.handle(event) {
            Ok(actions) => {
                if was_draw {
                    assert_eq!(session.participant_count(), 0, "draw left the roster populated");

                    let notifies: Vec<&SessionAction> = actions
                        .iter()
                        .filter(|action| matches!(action, SessionAction::Notify { .. }))
                        .collect();
                    assert_eq!(notifies.len(), before, "draw lost or invented notices");

                    for action in notifies {
                        if let SessionAction::Notify { giver, receiver, .. } = action {
                            assert_ne!(giver, receiver, "self-assignment escaped the draw");
                        }
                    }
                }
            },
            Err(_) => {
                assert_eq!(
                    session.participant_count(),
                    before,
                    "failed event mutated the roster"
                );
            },
        }

        let names = session.roster().names();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate names in the roster");
    }
});
