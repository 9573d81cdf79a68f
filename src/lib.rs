//! Cashpoint: a state-pattern cash machine core
//!
//! Cashpoint is built around a "pure core, imperative shell" split. Each
//! machine state answers events as a pure value; the machine applies the
//! answer, records one transcript entry, and reports one of three
//! outcomes. Nothing here throws: an event that makes no sense in the
//! current state is answered and recorded, not raised as an error.
//!
//! # Core Concepts
//!
//! - **State**: exactly one of four states is active at all times, and the
//!   drained `OutOfCash` state is absorbing
//! - **Outcome**: every event yields `Transitioned`, `AcceptedNoOp`, or
//!   `RejectedNoOp`
//! - **Transcript**: an immutable record of every event handled, whether
//!   or not it changed anything
//!
//! # Example
//!
//! ```rust
//! use cashpoint::atm::{AtmMachine, AtmState};
//!
//! let mut atm = AtmMachine::new();
//! atm.insert_card();
//! atm.insert_pin(1234);
//! atm.request_cash(2000);
//!
//! assert_eq!(atm.current_state(), AtmState::OutOfCash);
//! assert_eq!(atm.cash_in_machine(), 0);
//! assert_eq!(atm.transcript().len(), 3);
//! ```

pub mod atm;
pub mod core;
pub mod patterns;
pub mod snapshot;

// Re-export commonly used types
pub use atm::{AtmConfig, AtmEvent, AtmMachine, AtmState, CashStatus, ReadOnlyAtm};
pub use core::{Event, Outcome, State, Transcript, TranscriptEntry};
pub use snapshot::{SessionSnapshot, SnapshotError, SNAPSHOT_VERSION};
