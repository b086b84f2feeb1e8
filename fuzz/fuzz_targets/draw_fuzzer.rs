//! Fuzz target for the derangement draw
//!
//! # Strategy
//!
//! - Arbitrary name lists: raw strings, deduplicated to honor the unique
//!   name contract, capped to keep single runs fast
//! - Arbitrary RNG seeds: every run is deterministic for its input
//!
//! # Invariants
//!
//! - NEVER panic, for any name list or seed
//! - Success means a bijection over the input names with zero fixed points
//! - Fewer than two names MUST report `TooFewParticipants`
//! - The call always returns; the attempt budget bounds the retry loop

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tomte_core::{DrawError, draw};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Seed for the deterministic RNG.
    seed: u64,
    /// Raw candidate names, duplicates and all.
    raw_names: Vec<String>,
}

fuzz_target!(|input: FuzzInput| {
    let mut seen = HashSet::new();
    let names: Vec<String> = input
        .raw_names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .take(64)
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(input.seed);

    match draw(&names, &mut rng) {
        Ok(assignment) => {
            assert!(names.len() >= 2, "drew an assignment for fewer than two names");
            assert_eq!(assignment.len(), names.len());

            let mut receivers = HashSet::new();
            for pair in assignment.pairs() {
                assert_ne!(pair.giver, pair.receiver, "fixed point in assignment");
                assert!(names.contains(&pair.receiver), "receiver outside the name list");
                assert!(receivers.insert(pair.receiver.clone()), "receiver drawn twice");
                assert_eq!(
                    assignment.receiver_for(&pair.giver),
                    Some(pair.receiver.as_str()),
                    "lookup disagrees with the pair list"
                );
            }
        },
        Err(DrawError::TooFewParticipants { count }) => {
            assert_eq!(count, names.len());
            assert!(count < 2, "rejected a drawable name list");
        },
        Err(DrawError::AttemptsExhausted { .. }) => {
            // Statistically unreachable for unique names, but a clean
            // error is always acceptable. Only panics are bugs here.
        },
    }
});
