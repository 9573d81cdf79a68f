//! The cash machine: owned state, event dispatch, and the transcript.
//!
//! The machine is the imperative shell around the pure responses in
//! [`AtmState`]: it hands each event to the current state, applies the
//! returned step, and records exactly one transcript entry per event.

use crate::atm::config::AtmConfig;
use crate::atm::event::AtmEvent;
use crate::atm::proxy::ReadOnlyAtm;
use crate::atm::state::AtmState;
use crate::core::{Event, Outcome, Transcript, TranscriptEntry};
use crate::snapshot::{SessionSnapshot, SnapshotError};
use chrono::Utc;
use std::fmt;

/// Callback invoked with every transcript entry as it is recorded.
type Observer = Box<dyn Fn(&TranscriptEntry<AtmState>) + Send + Sync>;

/// A single-session cash machine.
///
/// The machine holds exactly one active [`AtmState`] and delegates every
/// event to it; the state alone decides the successor. Each event produces
/// one [`Outcome`] and one transcript entry, whether or not anything
/// changed.
///
/// # Example
///
/// ```
/// use cashpoint::atm::{AtmMachine, AtmState};
/// use cashpoint::core::Outcome;
///
/// let mut atm = AtmMachine::new();
/// assert_eq!(atm.insert_card(), Outcome::Transitioned);
/// assert_eq!(atm.insert_pin(1234), Outcome::Transitioned);
/// assert_eq!(atm.request_cash(2000), Outcome::Transitioned);
///
/// // The full balance left with the customer.
/// assert_eq!(atm.current_state(), AtmState::OutOfCash);
/// assert_eq!(atm.cash_in_machine(), 0);
/// assert_eq!(atm.insert_card(), Outcome::RejectedNoOp);
/// ```
pub struct AtmMachine {
    state: AtmState,
    cash_in_machine: i64,
    pin_verified: bool,
    correct_pin: u32,
    transcript: Transcript<AtmState>,
    observer: Option<Observer>,
}

impl AtmMachine {
    /// Create a machine with the default configuration (2000 in cash,
    /// PIN 1234).
    pub fn new() -> Self {
        Self::with_config(AtmConfig::default())
    }

    /// Create a machine from an explicit configuration.
    ///
    /// A machine stocked with no cash starts directly in
    /// [`AtmState::OutOfCash`].
    pub fn with_config(config: AtmConfig) -> Self {
        let state = if config.initial_cash <= 0 {
            AtmState::OutOfCash
        } else {
            AtmState::NoCard
        };
        Self {
            state,
            cash_in_machine: config.initial_cash,
            pin_verified: false,
            correct_pin: config.correct_pin,
            transcript: Transcript::new(),
            observer: None,
        }
    }

    /// Rebuild a machine from previously captured parts. Used by snapshot
    /// restore; the observer does not survive a restore.
    pub(crate) fn from_parts(
        state: AtmState,
        cash_in_machine: i64,
        pin_verified: bool,
        correct_pin: u32,
        transcript: Transcript<AtmState>,
    ) -> Self {
        Self {
            state,
            cash_in_machine,
            pin_verified,
            correct_pin,
            transcript,
            observer: None,
        }
    }

    /// Insert a card.
    pub fn insert_card(&mut self) -> Outcome {
        self.handle(AtmEvent::InsertCard)
    }

    /// Eject the card, if one is present.
    pub fn eject_card(&mut self) -> Outcome {
        self.handle(AtmEvent::EjectCard)
    }

    /// Enter a PIN. A wrong PIN ejects the card.
    pub fn insert_pin(&mut self, pin: u32) -> Outcome {
        self.handle(AtmEvent::InsertPin(pin))
    }

    /// Request a withdrawal. Served or refused, the attempt ends the
    /// session by ejecting the card.
    pub fn request_cash(&mut self, amount: i64) -> Outcome {
        self.handle(AtmEvent::RequestCash(amount))
    }

    /// Dispatch one event to the current state and apply its step.
    pub fn handle(&mut self, event: AtmEvent) -> Outcome {
        let from = self.state;
        let step = from.respond(&event, self);

        self.pin_verified = step.pin_verified;
        if let Some(amount) = step.dispensed {
            self.cash_in_machine -= amount;
        }
        self.state = step.next;

        let entry = TranscriptEntry {
            event: event.name().to_string(),
            from,
            to: step.next,
            outcome: step.outcome,
            message: step.message,
            timestamp: Utc::now(),
        };
        self.transcript = self.transcript.record(entry);
        if let (Some(observer), Some(recorded)) = (self.observer.as_ref(), self.transcript.last())
        {
            observer(recorded);
        }

        step.outcome
    }

    /// Register a callback invoked with every transcript entry as it is
    /// recorded. Replaces any earlier observer.
    pub fn set_observer(
        &mut self,
        observer: impl Fn(&TranscriptEntry<AtmState>) + Send + Sync + 'static,
    ) {
        self.observer = Some(Box::new(observer));
    }

    /// Builder form of [`set_observer`](Self::set_observer).
    pub fn with_observer(
        mut self,
        observer: impl Fn(&TranscriptEntry<AtmState>) + Send + Sync + 'static,
    ) -> Self {
        self.set_observer(observer);
        self
    }

    /// The active state.
    pub fn current_state(&self) -> AtmState {
        self.state
    }

    /// Cash remaining in the machine.
    pub fn cash_in_machine(&self) -> i64 {
        self.cash_in_machine
    }

    /// Whether the current session has a verified PIN. True exactly when
    /// the machine is in [`AtmState::PinVerified`].
    pub fn pin_verified(&self) -> bool {
        self.pin_verified
    }

    /// The full record of every event handled so far.
    pub fn transcript(&self) -> &Transcript<AtmState> {
        &self.transcript
    }

    /// A view of the machine that can report but not act.
    pub fn read_only(&self) -> ReadOnlyAtm<'_> {
        ReadOnlyAtm::new(self)
    }

    /// Capture the current session as a serializable snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    /// Rebuild a machine from a captured snapshot plus the configured PIN
    /// (the PIN is never part of the snapshot itself).
    pub fn from_snapshot(
        snapshot: &SessionSnapshot,
        correct_pin: u32,
    ) -> Result<Self, SnapshotError> {
        snapshot.restore(correct_pin)
    }

    pub(crate) fn correct_pin(&self) -> u32 {
        self.correct_pin
    }
}

impl Default for AtmMachine {
    fn default() -> Self {
        Self::new()
    }
}

// The observer closure has no useful Debug form; the PIN is deliberately
// left out as well.
impl fmt::Debug for AtmMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtmMachine")
            .field("state", &self.state)
            .field("cash_in_machine", &self.cash_in_machine)
            .field("pin_verified", &self.pin_verified)
            .field("transcript_len", &self.transcript.len())
            .finish_non_exhaustive()
    }
}
