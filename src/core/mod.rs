//! Core state machine vocabulary.
//!
//! This module contains the pure functional core shared by any machine
//! built in this crate:
//! - State definitions via the `State` trait
//! - Event definitions via the `Event` trait
//! - The three-way `Outcome` taxonomy for answered events
//! - Immutable `Transcript` tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod event;
mod outcome;
mod state;
mod transcript;

pub use event::Event;
pub use outcome::Outcome;
pub use state::State;
pub use transcript::{Transcript, TranscriptEntry};
