//! Outcome taxonomy for answered events.
//!
//! Every event a machine answers lands in exactly one of three buckets, and
//! all three are normal return paths - none is an error. A rejection here
//! means "informational refusal", never an abortive fault.

use serde::{Deserialize, Serialize};

/// How a machine disposed of a single event.
///
/// - `Transitioned`: the event was processed and the state changed. This
///   includes refusals that still end the session (a wrong PIN or an
///   oversized withdrawal auto-ejects the card); the transcript message
///   carries the refusal.
/// - `AcceptedNoOp`: the event was legal but there was nothing to do
///   (re-entering an already-verified PIN).
/// - `RejectedNoOp`: the event is not meaningful in the current state;
///   nothing changed.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::Outcome;
///
/// let outcome = Outcome::RejectedNoOp;
/// assert!(!outcome.is_transition());
/// assert!(outcome.is_noop());
/// assert_eq!(outcome.name(), "RejectedNoOp");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Event accepted and the state changed.
    Transitioned,

    /// Event legal in this state, nothing to do.
    AcceptedNoOp,

    /// Event not meaningful in this state, nothing changed.
    RejectedNoOp,
}

impl Outcome {
    /// Get the outcome's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transitioned => "Transitioned",
            Self::AcceptedNoOp => "AcceptedNoOp",
            Self::RejectedNoOp => "RejectedNoOp",
        }
    }

    /// Check whether the event changed the machine's state.
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned)
    }

    /// Check whether the machine stayed put.
    pub fn is_noop(&self) -> bool {
        !self.is_transition()
    }

    /// Check whether the event was refused as not meaningful here.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::RejectedNoOp)
    }
}
