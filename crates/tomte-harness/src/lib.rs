//! Test harness for the tomte gift exchange.
//!
//! Scripted in-memory transports for exercising the dispatcher and the
//! full session flow without a network: [`MemoryPost`] accepts and records
//! every notice, [`ScriptedPost`] fails exactly the recipients it is told
//! to fail.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod post;

pub use post::{MemoryPost, ScriptedPost};
