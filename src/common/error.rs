// src/common/error.rs

/// Failure of a read-measurement decode. Codec-local and `Copy`; the whole
/// measurement is discarded on any failure, never partially returned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// One of the three 3-byte word groups failed CRC validation.
    /// `group` is 0 (CO2), 1 (temperature) or 2 (humidity).
    #[error("CRC mismatch in word group {group}: expected {expected:#04x}, calculated {calculated:#04x}")]
    ChecksumMismatch {
        group: usize,
        expected: u8,
        calculated: u8,
    },

    /// Response buffer was not exactly 9 bytes long. Only arises from a
    /// transport contract violation.
    #[error("Malformed response: expected 9 bytes, got {got}")]
    MalformedResponse { got: usize },
}

/// Top-level error for driving an SCD41, generic over the transport's own
/// error type.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scd41Error<E = ()>
where
    E: core::fmt::Debug, // Still need Debug for the generic Io error
{
    /// Underlying I/O error from the bus implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// Response bytes came back but failed validation or had the wrong shape.
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// Read was attempted without a running periodic measurement.
    #[error("No measurement running")]
    NotMeasuring,

    /// Start was issued while a periodic measurement is already running.
    /// The sensor ignores most commands in that state, so this is surfaced
    /// instead of silently re-sending.
    #[error("Measurement already running")]
    AlreadyMeasuring,
}
