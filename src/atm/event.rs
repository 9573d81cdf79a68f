//! The four user actions a cash machine answers.

use crate::core::Event;

/// A customer request presented to the machine.
///
/// Payload-carrying variants hold the entered PIN or the requested amount;
/// what each event does is decided entirely by the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmEvent {
    /// Put a card into the machine.
    InsertCard,
    /// Take the card back out.
    EjectCard,
    /// Enter a PIN for the inserted card.
    InsertPin(u32),
    /// Ask the machine to dispense an amount.
    RequestCash(i64),
}

impl Event for AtmEvent {
    fn name(&self) -> &str {
        match self {
            Self::InsertCard => "InsertCard",
            Self::EjectCard => "EjectCard",
            Self::InsertPin(_) => "InsertPin",
            Self::RequestCash(_) => "RequestCash",
        }
    }
}
