// src/common/hal_traits.rs

use super::address::SeesawAddr;
use arrayvec::ArrayVec;
use core::fmt::Debug;
use core::time::Duration;

/// Largest register payload the soil sensor returns (4-byte temperature).
pub const MAX_SAMPLE_LEN: usize = 4;

/// Bytes returned by a single bus read.
///
/// Transient by design: a sample is decoded immediately by the code that
/// requested it and never stored. A sample shorter than the requested length
/// is a short read; the driver decides whether that retries or fails.
pub type RawSample = ArrayVec<u8, MAX_SAMPLE_LEN>;

/// Abstraction for addressed byte-buffer I/O on the two-wire bus.
///
/// Implementations perform pure byte-level transfers: no retry, no
/// interpretation of the payload, no sensor-specific knowledge. Blocking is
/// bounded by the underlying bus timeout, which is the implementation's
/// responsibility.
pub trait SeesawBus {
    /// Associated error type for transport errors.
    type Error: Debug;

    /// Writes `bytes` to the device at `addr`.
    fn write(&mut self, addr: SeesawAddr, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Reads up to `len` bytes from the device at `addr`.
    ///
    /// Returning fewer bytes than requested is not an error at this level;
    /// the caller compares the sample length against what it asked for.
    fn read(&mut self, addr: SeesawAddr, len: usize) -> Result<RawSample, Self::Error>;
}

/// Marker for a settle delay that was cancelled before it elapsed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaitInterrupted;

/// Abstraction for the blocking settle delays the sensor protocol requires.
///
/// `settle` is fallible so host implementations backed by interruptible
/// sleeps can report cancellation; bare-metal busy-wait implementations
/// simply never return `Err`. Tests inject a fake timer here so the retry
/// schedule runs without real time passing.
pub trait SeesawTimer {
    /// Blocks for at least `wait`, or reports that the wait was interrupted.
    fn settle(&mut self, wait: Duration) -> Result<(), WaitInterrupted>;
}

/// Bundles an `embedded-hal` I2C peripheral and delay into a single
/// interface implementing [`SeesawBus`] and [`SeesawTimer`].
///
/// Requires `embedded-hal` v1.0 traits (feature `impl-hal`).
#[cfg(feature = "impl-hal")]
#[derive(Debug)]
pub struct HalInterface<I2C, D> {
    i2c: I2C,
    delay: D,
}

#[cfg(feature = "impl-hal")]
impl<I2C, D> HalInterface<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        HalInterface { i2c, delay }
    }

    /// Releases the underlying peripherals.
    pub fn free(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

#[cfg(feature = "impl-hal")]
impl<I2C, D> SeesawBus for HalInterface<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    type Error = I2C::Error;

    fn write(&mut self, addr: SeesawAddr, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(addr.as_u8(), bytes)
    }

    fn read(&mut self, addr: SeesawAddr, len: usize) -> Result<RawSample, Self::Error> {
        let mut buf = [0u8; MAX_SAMPLE_LEN];
        let len = len.min(MAX_SAMPLE_LEN);
        self.i2c.read(addr.as_u8(), &mut buf[..len])?;
        // embedded-hal reads are all-or-nothing: an Ok here means the full
        // buffer was filled, so the sample is never short.
        Ok(buf[..len].iter().copied().collect())
    }
}

#[cfg(feature = "impl-hal")]
impl<I2C, D> SeesawTimer for HalInterface<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    fn settle(&mut self, wait: Duration) -> Result<(), WaitInterrupted> {
        // DelayNs cannot be interrupted
        self.delay.delay_us(wait.as_micros() as u32);
        Ok(())
    }
}
