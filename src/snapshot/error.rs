//! Snapshot error types.

use thiserror::Error;

/// Everything that can go wrong while encoding, decoding, or restoring a
/// session snapshot. Machine actions themselves never produce these.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Encoding to JSON or the binary form failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The input was not a readable snapshot
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The decoded data breaks the machine invariants
    #[error("Snapshot validation failed: {0}")]
    ValidationFailed(String),
}
