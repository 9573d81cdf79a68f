//! Core Event trait for the inputs a machine answers.
//!
//! Events are the requests a caller hands to a machine; the current state
//! alone decides what each event does. Events may carry payload data
//! (an entered PIN, a requested amount) alongside their identity.

use std::fmt::Debug;

/// Trait for machine events.
///
/// An event's `name` identifies it in transcripts and diagnostics; payload
/// fields stay on the implementing type.
///
/// # Example
///
/// ```rust
/// use cashpoint::core::Event;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum TurnstileEvent {
///     Coin { value: u32 },
///     Push,
/// }
///
/// impl Event for TurnstileEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Coin { .. } => "Coin",
///             Self::Push => "Push",
///         }
///     }
/// }
///
/// assert_eq!(TurnstileEvent::Coin { value: 50 }.name(), "Coin");
/// ```
pub trait Event: Debug {
    /// Get the event's name for transcript entries and logging.
    fn name(&self) -> &str;
}
