//! The four machine states and their pure response logic.
//!
//! Each variant answers all four events; the machine never branches on its
//! own fields. A variant's response is computed as a pure [`Step`] value and
//! applied by the machine afterwards, keeping the "pure core, imperative
//! shell" split.

use crate::atm::event::AtmEvent;
use crate::atm::machine::AtmMachine;
use crate::core::{Outcome, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition of the cash machine.
///
/// | State | Meaning |
/// |---|---|
/// | `NoCard` | idle, no card present |
/// | `HasCard` | card present, PIN not yet verified |
/// | `PinVerified` | card present, correct PIN entered |
/// | `OutOfCash` | balance drained; refuses all card/PIN/cash requests |
///
/// Exactly one state is active at all times. `OutOfCash` is absorbing:
/// once entered, no event leads back out.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AtmState {
    /// Idle, no card present.
    NoCard,
    /// Card present, PIN not yet verified.
    HasCard,
    /// Card present, correct PIN entered.
    PinVerified,
    /// Balance drained; all card, PIN, and cash requests are refused.
    OutOfCash,
}

impl State for AtmState {
    fn name(&self) -> &str {
        match self {
            Self::NoCard => "NoCard",
            Self::HasCard => "HasCard",
            Self::PinVerified => "PinVerified",
            Self::OutOfCash => "OutOfCash",
        }
    }

    fn is_absorbing(&self) -> bool {
        matches!(self, Self::OutOfCash)
    }
}

impl fmt::Display for AtmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A state's complete answer to one event.
///
/// The machine applies the step verbatim: set the state, set the PIN flag,
/// subtract any dispensed cash, and record one transcript entry.
#[derive(Clone, Debug)]
pub(crate) struct Step {
    pub(crate) next: AtmState,
    pub(crate) outcome: Outcome,
    pub(crate) message: String,
    pub(crate) pin_verified: bool,
    pub(crate) dispensed: Option<i64>,
}

impl Step {
    fn transition(next: AtmState, pin_verified: bool, message: impl Into<String>) -> Self {
        Self {
            next,
            outcome: Outcome::Transitioned,
            message: message.into(),
            pin_verified,
            dispensed: None,
        }
    }

    fn accepted_noop(state: AtmState, pin_verified: bool, message: impl Into<String>) -> Self {
        Self {
            next: state,
            outcome: Outcome::AcceptedNoOp,
            message: message.into(),
            pin_verified,
            dispensed: None,
        }
    }

    fn rejected(state: AtmState, pin_verified: bool, message: impl Into<String>) -> Self {
        Self {
            next: state,
            outcome: Outcome::RejectedNoOp,
            message: message.into(),
            pin_verified,
            dispensed: None,
        }
    }

    fn dispensing(mut self, amount: i64) -> Self {
        self.dispensed = Some(amount);
        self
    }
}

impl AtmState {
    /// Answer `event` from this state.
    ///
    /// Pure: reads the machine through a shared borrow and returns the step
    /// to apply; the current state alone decides the next state.
    pub(crate) fn respond(self, event: &AtmEvent, atm: &AtmMachine) -> Step {
        match self {
            Self::NoCard => Self::when_no_card(event),
            Self::HasCard => Self::when_has_card(event, atm.correct_pin()),
            Self::PinVerified => Self::when_verified(event, atm.cash_in_machine()),
            Self::OutOfCash => Self::when_out_of_cash(event),
        }
    }

    /// Idle machine: only inserting a card means anything.
    fn when_no_card(event: &AtmEvent) -> Step {
        match event {
            AtmEvent::InsertCard => Step::transition(Self::HasCard, false, "card accepted"),
            AtmEvent::EjectCard => Step::rejected(Self::NoCard, false, "no card to eject"),
            AtmEvent::InsertPin(_) | AtmEvent::RequestCash(_) => {
                Step::rejected(Self::NoCard, false, "insert a card first")
            }
        }
    }

    /// Card in, PIN outstanding: a wrong PIN auto-ejects the card.
    fn when_has_card(event: &AtmEvent, correct_pin: u32) -> Step {
        match event {
            AtmEvent::InsertCard => {
                Step::rejected(Self::HasCard, false, "a card is already inserted")
            }
            AtmEvent::EjectCard => Step::transition(Self::NoCard, false, "card ejected"),
            AtmEvent::InsertPin(pin) if *pin == correct_pin => {
                Step::transition(Self::PinVerified, true, "correct PIN entered")
            }
            AtmEvent::InsertPin(_) => {
                Step::transition(Self::NoCard, false, "wrong PIN entered, card ejected")
            }
            AtmEvent::RequestCash(_) => Step::rejected(Self::HasCard, false, "enter a PIN first"),
        }
    }

    /// PIN verified: cash may be requested. Any withdrawal attempt, served
    /// or refused, ends the session by ejecting the card.
    ///
    /// Only a positive amount within the balance dispenses; the subtraction
    /// below is therefore always in range.
    fn when_verified(event: &AtmEvent, cash_in_machine: i64) -> Step {
        match event {
            AtmEvent::InsertCard => {
                Step::rejected(Self::PinVerified, true, "a card is already inserted")
            }
            AtmEvent::EjectCard => Step::transition(Self::NoCard, false, "card ejected"),
            AtmEvent::InsertPin(_) => {
                Step::accepted_noop(Self::PinVerified, true, "PIN already entered")
            }
            AtmEvent::RequestCash(amount) if *amount > 0 && *amount <= cash_in_machine => {
                let next = if cash_in_machine - amount <= 0 {
                    Self::OutOfCash
                } else {
                    Self::NoCard
                };
                Step::transition(next, false, format!("{amount} dispensed, card ejected"))
                    .dispensing(*amount)
            }
            AtmEvent::RequestCash(amount) if *amount > cash_in_machine => Step::transition(
                Self::NoCard,
                false,
                "not enough cash in the machine, card ejected",
            ),
            AtmEvent::RequestCash(_) => {
                Step::transition(Self::NoCard, false, "nothing to dispense, card ejected")
            }
        }
    }

    /// Drained machine: everything is refused in place.
    fn when_out_of_cash(event: &AtmEvent) -> Step {
        match event {
            AtmEvent::EjectCard => Step::rejected(
                Self::OutOfCash,
                false,
                "machine is out of cash, no card to eject",
            ),
            AtmEvent::InsertCard | AtmEvent::InsertPin(_) | AtmEvent::RequestCash(_) => {
                Step::rejected(Self::OutOfCash, false, "machine is out of cash")
            }
        }
    }
}
