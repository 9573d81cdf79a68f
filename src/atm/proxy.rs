//! Read-only reporting access to a machine.
//!
//! Monitoring code gets a [`ReadOnlyAtm`] instead of the machine itself,
//! so it can inspect balance and state but never feed events in.

use crate::atm::machine::AtmMachine;
use crate::atm::state::AtmState;

/// The reporting surface shared by the machine and its read-only view.
///
/// Code that only needs to observe a machine should take `&dyn CashStatus`
/// rather than the machine type.
pub trait CashStatus {
    /// Cash remaining in the machine.
    fn cash_in_machine(&self) -> i64;

    /// The active state.
    fn current_state(&self) -> AtmState;

    /// Whether the machine still holds any cash.
    fn has_cash(&self) -> bool {
        self.cash_in_machine() > 0
    }
}

impl CashStatus for AtmMachine {
    fn cash_in_machine(&self) -> i64 {
        AtmMachine::cash_in_machine(self)
    }

    fn current_state(&self) -> AtmState {
        AtmMachine::current_state(self)
    }
}

/// A borrowed view of a machine exposing only [`CashStatus`].
///
/// # Example
///
/// ```
/// use cashpoint::atm::{AtmMachine, AtmState, CashStatus};
///
/// let mut atm = AtmMachine::new();
/// atm.insert_card();
///
/// let panel = atm.read_only();
/// assert_eq!(panel.current_state(), AtmState::HasCard);
/// assert_eq!(panel.cash_in_machine(), 2000);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ReadOnlyAtm<'a> {
    inner: &'a AtmMachine,
}

impl<'a> ReadOnlyAtm<'a> {
    pub(crate) fn new(inner: &'a AtmMachine) -> Self {
        Self { inner }
    }
}

impl CashStatus for ReadOnlyAtm<'_> {
    fn cash_in_machine(&self) -> i64 {
        self.inner.cash_in_machine()
    }

    fn current_state(&self) -> AtmState {
        self.inner.current_state()
    }
}
