// src/sensor/mod.rs

// Necessary imports from the common module and core
use crate::common::{
    address::SeesawAddr,
    error::SeesawError,
    hal_traits::{RawSample, SeesawBus, SeesawTimer},
    registers::RegisterRequest,
    timing,
    types::{Temperature, TouchReading},
};
use core::fmt::Debug;
use core::time::Duration;

/// Driver for the seesaw soil sensor.
///
/// Owns the bus interface for its whole lifetime; opening and closing the
/// bus is the caller's responsibility. All reads are single-shot except the
/// touch path, which carries its own bounded retry (see [`touch_read`]).
///
/// [`touch_read`]: SoilSensor::touch_read
#[derive(Debug)]
pub struct SoilSensor<IF>
where
    IF: SeesawBus + SeesawTimer,
    IF::Error: Debug,
{
    interface: IF,
    address: SeesawAddr,
}

impl<IF> SoilSensor<IF>
where
    IF: SeesawBus + SeesawTimer,
    IF::Error: Debug,
{
    /// Creates a driver bound to the factory-default soil sensor address.
    pub fn new(interface: IF) -> Self {
        Self::with_address(interface, SeesawAddr::SOIL_SENSOR)
    }

    /// Creates a driver bound to `address`. The address is immutable for the
    /// driver's lifetime.
    pub fn with_address(interface: IF, address: SeesawAddr) -> Self {
        SoilSensor { interface, address }
    }

    /// The address this driver is bound to.
    pub fn address(&self) -> SeesawAddr {
        self.address
    }

    /// Releases the bus interface.
    pub fn free(self) -> IF {
        self.interface
    }

    // --- Public Blocking Methods ---

    /// Sanity-checks that this driver is bound to the address the soil
    /// sensor ships with.
    ///
    /// No data is exchanged with the sensor; this catches a miswired
    /// construction, not a dead device.
    pub fn probe(&self) -> bool {
        self.address.is_soil_sensor()
    }

    /// Reads the on-chip temperature.
    ///
    /// Selects the temperature register, settles for
    /// [`timing::TEMP_SETTLE`], then reads exactly 4 bytes. Single-shot: a
    /// short read fails immediately with [`SeesawError::ShortRead`].
    pub fn temperature(&mut self) -> Result<Temperature, SeesawError<IF::Error>> {
        let sample = self.select_and_read(RegisterRequest::temperature(), timing::TEMP_SETTLE, 4)?;
        let raw: [u8; 4] = sample.as_slice().try_into().map_err(|_| SeesawError::ShortRead {
            expected: 4,
            got: sample.len(),
        })?;
        Ok(Temperature::decode(raw))
    }

    /// Reads capacitive touch channel `pin` with bounded retry.
    ///
    /// Each attempt re-selects the register, settles for an escalating delay
    /// ([`timing::touch_settle`]), and reads 2 bytes. The first attempt that
    /// returns exactly 2 bytes wins. After
    /// [`timing::TOUCH_READ_ATTEMPTS`] short reads the result is
    /// [`TouchReading::READ_FAILED`]; transport errors and interrupted waits
    /// abort the loop through the error channel instead.
    pub fn touch_read(&mut self, pin: u8) -> Result<TouchReading, SeesawError<IF::Error>> {
        let request = RegisterRequest::touch_channel(pin);

        for attempt in 0..timing::TOUCH_READ_ATTEMPTS {
            let sample = self.select_and_read(request, timing::touch_settle(attempt), 2)?;
            if let Ok(raw) = <[u8; 2]>::try_from(sample.as_slice()) {
                return Ok(TouchReading::decode(raw));
            }
            // Short read: the channel wasn't ready, settle longer and retry
        }

        Ok(TouchReading::READ_FAILED)
    }

    /// Reads the soil probe's moisture pad (touch channel 0).
    pub fn moisture(&mut self) -> Result<TouchReading, SeesawError<IF::Error>> {
        self.touch_read(0)
    }

    // --- Low-Level Protocol Helpers (Private) ---

    /// One write/settle/read cycle: select the register, give the device
    /// time to prepare the result, read it back. The sample may be short;
    /// the caller decides whether that retries or fails.
    fn select_and_read(
        &mut self,
        request: RegisterRequest,
        settle: Duration,
        len: usize,
    ) -> Result<RawSample, SeesawError<IF::Error>> {
        self.interface
            .write(self.address, &request.frame())
            .map_err(SeesawError::Io)?;

        self.interface
            .settle(settle)
            .map_err(|_| SeesawError::Interrupted)?;

        self.interface
            .read(self.address, len)
            .map_err(SeesawError::Io)
    }
}
