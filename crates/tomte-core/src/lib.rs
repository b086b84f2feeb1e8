//! Core draw logic for the tomte gift exchange.
//!
//! This crate is pure state. It owns the participant roster, the
//! derangement draw, and the session state machine that ties both
//! together. No I/O happens here: callers feed events in and execute the
//! actions that come back.
//!
//! # Components
//!
//! - [`Roster`]: validated, insertion-ordered participant list
//! - [`draw()`]: bounded rejection-sampling derangement generator
//! - [`Session`]: event-driven state machine over the two

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod draw;
pub mod roster;
pub mod session;

pub use draw::{Assignment, DrawError, MAX_ATTEMPTS, MIN_PARTICIPANTS, Pair, draw};
pub use roster::{Participant, Roster, RosterError};
pub use session::{MIN_DRAW_SIZE, Session, SessionAction, SessionError, SessionEvent};
