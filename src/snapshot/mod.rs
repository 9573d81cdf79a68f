//! Snapshot and restore functionality for cash machine sessions.
//!
//! This module provides serialization and deserialization capabilities for
//! the machine, enabling a session to be captured, handed around as JSON or
//! binary data, and resumed later. Where the captured data is kept is up to
//! the caller.

use crate::atm::{AtmMachine, AtmState};
use crate::core::Transcript;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of a machine session.
///
/// The accepted PIN is configuration rather than session data and is never
/// serialized; [`SessionSnapshot::restore`] takes it as an argument. The
/// observer callback does not survive a restore either.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was captured
    pub timestamp: DateTime<Utc>,

    /// State the machine was in
    pub state: AtmState,

    /// Cash remaining in the machine
    pub cash_in_machine: i64,

    /// Whether the session had a verified PIN
    pub pin_verified: bool,

    /// Complete transcript up to the capture point
    pub transcript: Transcript<AtmState>,
}

impl SessionSnapshot {
    /// Capture the current session of `atm`.
    ///
    /// # Example
    ///
    /// ```
    /// use cashpoint::atm::AtmMachine;
    /// use cashpoint::snapshot::SessionSnapshot;
    ///
    /// let mut atm = AtmMachine::new();
    /// atm.insert_card();
    ///
    /// let snapshot = SessionSnapshot::capture(&atm);
    /// let json = snapshot.to_json().unwrap();
    ///
    /// let resumed = SessionSnapshot::from_json(&json)
    ///     .and_then(|s| s.restore(1234))
    ///     .unwrap();
    /// assert_eq!(resumed.current_state(), atm.current_state());
    /// ```
    pub fn capture(atm: &AtmMachine) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state: atm.current_state(),
            cash_in_machine: atm.cash_in_machine(),
            pin_verified: atm.pin_verified(),
            transcript: atm.transcript().clone(),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from a JSON string, checking the format version.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        check_version(snapshot.version)?;
        Ok(snapshot)
    }

    /// Serialize to a compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary form, checking the format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        check_version(snapshot.version)?;
        Ok(snapshot)
    }

    /// Check the snapshot against the machine invariants.
    ///
    /// All violations are collected before reporting, so a corrupted
    /// snapshot surfaces everything wrong with it at once.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut violations = Vec::new();

        if self.pin_verified != (self.state == AtmState::PinVerified) {
            violations.push(format!(
                "pin_verified is {} but state is {}",
                self.pin_verified, self.state
            ));
        }
        if (self.state == AtmState::OutOfCash) != (self.cash_in_machine <= 0) {
            violations.push(format!(
                "state {} does not match cash_in_machine {}",
                self.state, self.cash_in_machine
            ));
        }
        if let Some(last) = self.transcript.last() {
            if last.to != self.state {
                violations.push(format!(
                    "last transcript entry ends in {} but state is {}",
                    last.to, self.state
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SnapshotError::ValidationFailed(violations.join("; ")))
        }
    }

    /// Rebuild a machine from this snapshot.
    ///
    /// Validates first; a snapshot that breaks the machine invariants is
    /// refused rather than resumed.
    pub fn restore(&self, correct_pin: u32) -> Result<AtmMachine, SnapshotError> {
        check_version(self.version)?;
        self.validate()?;
        Ok(AtmMachine::from_parts(
            self.state,
            self.cash_in_machine,
            self.pin_verified,
            correct_pin,
            self.transcript.clone(),
        ))
    }
}

fn check_version(found: u32) -> Result<(), SnapshotError> {
    if found == SNAPSHOT_VERSION {
        Ok(())
    } else {
        Err(SnapshotError::UnsupportedVersion {
            found,
            supported: SNAPSHOT_VERSION,
        })
    }
}
