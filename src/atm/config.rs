//! Startup configuration for a cash machine.

use serde::{Deserialize, Serialize};

/// Values fixed when a machine is brought up.
///
/// The defaults mirror the classic teaching setup: a freshly stocked
/// machine holding 2000 with PIN 1234.
///
/// # Example
///
/// ```
/// use cashpoint::atm::AtmConfig;
///
/// let config = AtmConfig {
///     initial_cash: 500,
///     ..AtmConfig::default()
/// };
/// assert_eq!(config.correct_pin, 1234);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtmConfig {
    /// Cash loaded into the machine. A non-positive value starts the
    /// machine out of cash.
    pub initial_cash: i64,
    /// The single PIN the machine accepts.
    pub correct_pin: u32,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            initial_cash: 2000,
            correct_pin: 1234,
        }
    }
}
