// src/common/error.rs

// No cfg_attr needed here, thiserror is always available
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SeesawError<E = ()>
where
    E: core::fmt::Debug, // Still need Debug for the generic Io error
{
    /// Underlying transport error from the bus implementation.
    #[error("bus error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// A register read returned a byte count other than the expected length.
    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },

    /// A settle delay was cancelled before it elapsed.
    ///
    /// Kept distinct from retry exhaustion: an interrupted wait says nothing
    /// about the device, only about the caller's execution environment.
    #[error("settle wait interrupted")]
    Interrupted,

    /// Provided byte is not a valid 7-bit bus address.
    #[error("invalid 7-bit bus address: {0:#04x}")]
    InvalidAddress(u8),
}

// No manual Display impl needed - thiserror handles it.
// No manual std::error::Error impl needed - thiserror handles it when its 'std' feature is enabled.

// Allow mapping from the underlying bus error if From is implemented
impl<E: core::fmt::Debug> From<E> for SeesawError<E> {
    fn from(e: E) -> Self {
        SeesawError::Io(e)
    }
}

// Note: For the Io(E) variant's #[error("...")] message to work correctly even
// in no_std, the underlying error type `E` must implement `core::fmt::Debug`.
// If the `std` feature is enabled, `E` would ideally also implement
// `std::error::Error` for better error chaining via `thiserror`, but `Debug`
// is the minimum requirement for the format string used here.
