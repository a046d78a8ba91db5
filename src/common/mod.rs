// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod error;
pub mod hal_traits;
pub mod registers;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::SeesawAddr;

// From error.rs
pub use error::SeesawError;

// From hal_traits.rs
pub use hal_traits::{RawSample, SeesawBus, SeesawTimer, WaitInterrupted};

// From registers.rs
pub use registers::RegisterRequest;

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.

// From types.rs
pub use types::{Temperature, TouchReading};

// --- Feature-gated re-exports ---

// embedded-hal adapter (from hal_traits.rs)
#[cfg(feature = "impl-hal")]
pub use hal_traits::HalInterface;
