// src/poller/mod.rs

use crate::common::{
    error::SeesawError,
    hal_traits::{SeesawBus, SeesawTimer},
    types::{Temperature, TouchReading},
};
use crate::sensor::SoilSensor;
use core::fmt::Debug;

/// Touch value above which a tick requests an image capture (strict `>`).
pub const CAPTURE_THRESHOLD: u16 = 1000;

/// Collaborator that performs the actual image capture.
///
/// The poller hands over a monotonically increasing sequence number to name
/// the artifact and does not retry failures; whatever reporting a rejected
/// capture deserves is the implementation's business.
pub trait CaptureTrigger {
    /// Associated error type for capture errors.
    type Error: Debug;

    fn request_capture(&mut self, sequence: u32) -> Result<(), Self::Error>;
}

/// Caller-supplied sink for finished readings, e.g. an append-to-log view.
pub trait ReadingSink<E: Debug> {
    fn record(&mut self, reading: &PollResult<E>);
}

// A closure is a perfectly good sink.
impl<E: Debug, F: FnMut(&PollResult<E>)> ReadingSink<E> for F {
    fn record(&mut self, reading: &PollResult<E>) {
        self(reading)
    }
}

/// Everything one tick produced.
///
/// Both readings travel as results so a failed tick is data, not a panic;
/// the caller decides whether a failure is user-visible, logged, or ignored.
/// Owned solely by the caller after return.
#[derive(Debug)]
pub struct PollResult<E: Debug> {
    pub temperature: Result<Temperature, SeesawError<E>>,
    pub touch: Result<TouchReading, SeesawError<E>>,
    pub capture_requested: bool,
}

/// Drives one sensor reading per external tick and applies the capture
/// policy.
///
/// The caller owns the cadence: `tick` has no timing assumptions and
/// completes synchronously, and `&mut self` guarantees two ticks can never
/// overlap. The only state carried across ticks is the capture sequence
/// counter.
#[derive(Debug)]
pub struct SoilPoller<IF, CAP>
where
    IF: SeesawBus + SeesawTimer,
    IF::Error: Debug,
    CAP: CaptureTrigger,
{
    sensor: SoilSensor<IF>,
    capture: CAP,
    capture_seq: u32,
}

impl<IF, CAP> SoilPoller<IF, CAP>
where
    IF: SeesawBus + SeesawTimer,
    IF::Error: Debug,
    CAP: CaptureTrigger,
{
    pub fn new(sensor: SoilSensor<IF>, capture: CAP) -> Self {
        SoilPoller {
            sensor,
            capture,
            capture_seq: 0,
        }
    }

    /// Number of captures requested and accepted so far; also the sequence
    /// number the next capture will carry.
    pub fn captures(&self) -> u32 {
        self.capture_seq
    }

    /// Releases the sensor and the capture collaborator.
    pub fn free(self) -> (SoilSensor<IF>, CAP) {
        (self.sensor, self.capture)
    }

    /// Performs one atomic reading: temperature, then touch channel 0, then
    /// the capture policy, all against the same tick.
    pub fn tick(&mut self) -> PollResult<IF::Error> {
        let temperature = self.sensor.temperature();
        let touch = self.sensor.touch_read(0);

        let capture_requested = match &touch {
            Ok(reading) => !reading.is_read_failure() && reading.value() > CAPTURE_THRESHOLD,
            Err(_) => false,
        };

        if capture_requested {
            // The sequence only advances once the collaborator has accepted
            // the shot, so a rejected capture reuses its number.
            if self.capture.request_capture(self.capture_seq).is_ok() {
                self.capture_seq += 1;
            }
        }

        PollResult {
            temperature,
            touch,
            capture_requested,
        }
    }

    /// Like [`tick`](Self::tick), but also hands the finished reading to
    /// `sink` before returning it.
    pub fn tick_into<S: ReadingSink<IF::Error>>(&mut self, sink: &mut S) -> PollResult<IF::Error> {
        let reading = self.tick();
        sink.record(&reading);
        reading
    }
}
