//! Transcript tracking for answered events.
//!
//! A machine records one entry per action it is asked to perform - accepted
//! transitions and informational refusals alike - so the transcript doubles
//! as the human-readable session log and as audit data for snapshots.
//! Recording is immutable, following functional programming principles.

use super::outcome::Outcome;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single answered event.
///
/// Entries are immutable values. For no-op outcomes `from` and `to` are the
/// same state; for transitions `to` is the state the machine moved into.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{Outcome, State, TranscriptEntry};
/// use chrono::Utc;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum GateState {
///     Closed,
///     Open,
/// }
///
/// impl State for GateState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// let entry = TranscriptEntry {
///     event: "Badge".to_string(),
///     from: GateState::Closed,
///     to: GateState::Open,
///     outcome: Outcome::Transitioned,
///     message: "gate opened".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(entry.outcome.is_transition());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TranscriptEntry<S: State> {
    /// Name of the event that was answered
    pub event: String,
    /// The state the machine was in when the event arrived
    pub from: S,
    /// The state the machine was in afterwards (equal to `from` for no-ops)
    pub to: S,
    /// How the event was disposed of
    pub outcome: Outcome,
    /// The one human-readable line for this action
    pub message: String,
    /// When the event was answered
    pub timestamp: DateTime<Utc>,
}

/// Ordered record of every answered event.
///
/// The transcript is immutable - `record` returns a new transcript with the
/// entry added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::{Outcome, State, Transcript, TranscriptEntry};
/// use chrono::Utc;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum GateState {
///     Closed,
///     Open,
/// }
///
/// impl State for GateState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// let transcript = Transcript::new();
/// let transcript = transcript.record(TranscriptEntry {
///     event: "Badge".to_string(),
///     from: GateState::Closed,
///     to: GateState::Open,
///     outcome: Outcome::Transitioned,
///     message: "gate opened".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(transcript.len(), 1);
/// assert_eq!(transcript.messages(), vec!["gate opened"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transcript<S: State> {
    entries: Vec<TranscriptEntry<S>>,
}

impl<S: State> Default for Transcript<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Transcript<S> {
    /// Create a new empty transcript.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new transcript.
    ///
    /// This is a pure function - it does not mutate the existing transcript
    /// but returns a new one with the entry added.
    pub fn record(&self, entry: TranscriptEntry<S>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Get all entries in order.
    pub fn entries(&self) -> &[TranscriptEntry<S>] {
        &self.entries
    }

    /// Number of recorded entries (one per answered event).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the most recent entry, if any.
    pub fn last(&self) -> Option<&TranscriptEntry<S>> {
        self.entries.last()
    }

    /// Get the path of states actually traversed.
    ///
    /// Returns the state the session started in, then the `to` state of each
    /// entry whose outcome transitioned. No-op entries do not repeat their
    /// state in the path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cashpoint::core::{Outcome, State, Transcript, TranscriptEntry};
    /// use chrono::Utc;
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// enum GateState {
    ///     Closed,
    ///     Open,
    /// }
    ///
    /// impl State for GateState {
    ///     fn name(&self) -> &str {
    ///         match self {
    ///             Self::Closed => "Closed",
    ///             Self::Open => "Open",
    ///         }
    ///     }
    /// }
    ///
    /// let transcript = Transcript::new()
    ///     .record(TranscriptEntry {
    ///         event: "Push".to_string(),
    ///         from: GateState::Closed,
    ///         to: GateState::Closed,
    ///         outcome: Outcome::RejectedNoOp,
    ///         message: "badge required".to_string(),
    ///         timestamp: Utc::now(),
    ///     })
    ///     .record(TranscriptEntry {
    ///         event: "Badge".to_string(),
    ///         from: GateState::Closed,
    ///         to: GateState::Open,
    ///         outcome: Outcome::Transitioned,
    ///         message: "gate opened".to_string(),
    ///         timestamp: Utc::now(),
    ///     });
    ///
    /// let path = transcript.path();
    /// assert_eq!(path, vec![&GateState::Closed, &GateState::Open]);
    /// ```
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.entries.first() {
            path.push(&first.from);
        }
        for entry in &self.entries {
            if entry.outcome.is_transition() {
                path.push(&entry.to);
            }
        }
        path
    }

    /// Get every recorded message in order - the session's "returned
    /// message list".
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Calculate total duration from first to last entry.
    ///
    /// Returns `None` if there are no entries.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
