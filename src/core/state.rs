//! Core State trait for machine states.
//!
//! All machine states implement this trait, which provides pure methods
//! for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// All methods are pure - no side effects. A state is an immutable value
/// naming the position a machine currently occupies.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for transcript tracking
/// - `PartialEq`: States must be comparable for dispatch and assertions
/// - `Debug`: States must be printable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for snapshots
///
/// # Example
///
/// ```rust
/// use cashpoint::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TurnstileState {
///     Locked,
///     Unlocked,
///     Jammed,
/// }
///
/// impl State for TurnstileState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_absorbing(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// The name appears in transcript entries and rendered output.
    fn name(&self) -> &str;

    /// Check if this is an absorbing state.
    ///
    /// Under the machine's modeled action set, no event leads out of an
    /// absorbing state; the machine answers every further event in place.
    ///
    /// Defaults to `false`.
    fn is_absorbing(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TurnstileState {
        Locked,
        Unlocked,
        Jammed,
    }

    impl State for TurnstileState {
        fn name(&self) -> &str {
            match self {
                Self::Locked => "Locked",
                Self::Unlocked => "Unlocked",
                Self::Jammed => "Jammed",
            }
        }

        fn is_absorbing(&self) -> bool {
            matches!(self, Self::Jammed)
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum MinimalState {
        Only,
    }

    impl State for MinimalState {
        fn name(&self) -> &str {
            "Only"
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TurnstileState::Locked.name(), "Locked");
        assert_eq!(TurnstileState::Unlocked.name(), "Unlocked");
        assert_eq!(TurnstileState::Jammed.name(), "Jammed");
    }

    #[test]
    fn is_absorbing_identifies_absorbing_states() {
        assert!(!TurnstileState::Locked.is_absorbing());
        assert!(!TurnstileState::Unlocked.is_absorbing());
        assert!(TurnstileState::Jammed.is_absorbing());
    }

    #[test]
    fn is_absorbing_defaults_to_false() {
        assert!(!MinimalState::Only.is_absorbing());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TurnstileState::Locked;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TurnstileState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_cloneable_and_comparable() {
        let state = TurnstileState::Unlocked;
        let cloned = state.clone();
        assert_eq!(state, cloned);
        assert_ne!(state, TurnstileState::Locked);
    }
}
