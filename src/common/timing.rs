// src/common/timing.rs

use core::time::Duration;

// The seesaw needs a settle delay between the register-select write and the
// data read; too early and the device NAKs or returns a short buffer. The
// values below come from the vendor's reference polling loop.

// === Temperature Read Timing ===

/// Settle delay between selecting the temperature register and reading it.
pub const TEMP_SETTLE: Duration = Duration::from_millis(10);

// === Touch Read Timing ===

/// Maximum number of touch read attempts before giving up.
pub const TOUCH_READ_ATTEMPTS: usize = 5;

/// Settle delay before the first touch read attempt.
pub const TOUCH_SETTLE_FLOOR: Duration = Duration::from_millis(3);

/// Extra settle per subsequent attempt. Capacitive channels are noisy under
/// rapid polling; later attempts wait longer to let the sensor settle under
/// contention. Worst case across all attempts: 3+4+5+6+7 = 25 ms of settling
/// plus transport time.
pub const TOUCH_SETTLE_STEP: Duration = Duration::from_millis(1);

/// Settle delay for touch read attempt `attempt` (0-based).
#[inline]
pub const fn touch_settle(attempt: usize) -> Duration {
    Duration::from_millis(
        TOUCH_SETTLE_FLOOR.as_millis() as u64 + attempt as u64 * TOUCH_SETTLE_STEP.as_millis() as u64,
    )
}
