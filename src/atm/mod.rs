//! A single-session cash machine built on the state pattern.
//!
//! The machine cycles through four states. A customer inserts a card,
//! verifies a PIN, and withdraws cash; a withdrawal that drains the
//! machine parks it in an absorbing `OutOfCash` state that refuses all
//! further service.
//!
//! [`AtmMachine`] is the imperative shell: it owns the balance, the PIN
//! flag, and the transcript, and delegates every event to the current
//! [`AtmState`], which computes the response as a pure value. Monitoring
//! code takes a [`ReadOnlyAtm`] view through the [`CashStatus`] trait.

mod config;
mod event;
mod machine;
mod proxy;
mod state;

pub use config::AtmConfig;
pub use event::AtmEvent;
pub use machine::AtmMachine;
pub use proxy::{CashStatus, ReadOnlyAtm};
pub use state::AtmState;
