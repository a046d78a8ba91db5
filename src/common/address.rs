// src/common/address.rs

use super::error::SeesawError;
use core::convert::TryFrom;
use core::fmt;

/// A 7-bit address on the two-wire bus.
///
/// The seesaw soil sensor answers at [`SeesawAddr::SOIL_SENSOR`] (`0x36`);
/// other addresses are representable so a driver can be pointed at a
/// misconfigured or rebased part and still fail its probe cleanly.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SeesawAddr(u8);

impl SeesawAddr {
    /// Factory-default address of the seesaw soil sensor.
    pub const SOIL_SENSOR: SeesawAddr = SeesawAddr(0x36);

    /// Creates a new `SeesawAddr` if the given byte fits in 7 bits.
    /// Returns `Result<Self, SeesawError<()>>` because validation itself
    /// cannot cause an I/O error.
    pub fn new(address: u8) -> Result<Self, SeesawError<()>> {
        if Self::is_valid_address(address) {
            Ok(SeesawAddr(address))
        } else {
            Err(SeesawError::InvalidAddress(address))
        }
    }

    /// Constructs without validation. The caller must guarantee the value
    /// fits in 7 bits.
    pub const unsafe fn new_unchecked(address: u8) -> Self {
        SeesawAddr(address)
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Whether this address is the one the soil sensor ships with.
    #[inline]
    pub const fn is_soil_sensor(&self) -> bool {
        self.0 == Self::SOIL_SENSOR.0
    }

    #[inline]
    pub const fn is_valid_address(address: u8) -> bool {
        address <= 0x7F
    }
}

impl Default for SeesawAddr {
    fn default() -> Self {
        Self::SOIL_SENSOR
    }
}

impl TryFrom<u8> for SeesawAddr {
    // The error type here is specific: SeesawError with no I/O error possibility
    type Error = SeesawError<()>;

    /// Attempts to convert a byte into a `SeesawAddr`.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SeesawAddr> for u8 {
    fn from(value: SeesawAddr) -> Self {
        value.0
    }
}

impl fmt::Display for SeesawAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(SeesawAddr::new(0x00).is_ok());
        assert!(SeesawAddr::new(0x36).is_ok());
        assert!(SeesawAddr::new(0x49).is_ok());
        assert!(SeesawAddr::new(0x7F).is_ok());
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(matches!(SeesawAddr::new(0x80), Err(SeesawError::InvalidAddress(0x80))));
        assert!(matches!(SeesawAddr::new(0xFF), Err(SeesawError::InvalidAddress(0xFF))));
    }

    #[test]
    fn test_default_is_soil_sensor() {
        assert_eq!(SeesawAddr::default(), SeesawAddr::SOIL_SENSOR);
        assert_eq!(SeesawAddr::SOIL_SENSOR.as_u8(), 0x36);
    }

    #[test]
    fn test_is_soil_sensor_over_full_range() {
        // 0x36 and nothing else in the 7-bit range
        for raw in 0u8..=0x7F {
            let addr = SeesawAddr::new(raw).unwrap();
            assert_eq!(addr.is_soil_sensor(), raw == 0x36);
        }
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(SeesawAddr::try_from(0x36).unwrap(), SeesawAddr(0x36));
        assert_eq!(SeesawAddr::try_from(0x10).unwrap(), SeesawAddr(0x10));
        assert!(matches!(SeesawAddr::try_from(0xB6), Err(SeesawError::InvalidAddress(0xB6))));
    }

    #[test]
    fn test_into_u8() {
        let addr = SeesawAddr::SOIL_SENSOR;
        let raw: u8 = addr.into();
        assert_eq!(raw, 0x36);
    }
}
