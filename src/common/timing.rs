// src/common/timing.rs

use core::time::Duration;

// Nominal values from the SCD4x datasheet (Sec 3.6, Table 9). The sensor
// tolerates earlier reads by answering with stale or zeroed registers, so
// callers should treat these as minimums.

// === Periodic Measurement Timing ===

/// Interval at which the sensor refreshes its measurement registers in
/// periodic mode.
pub const SIGNAL_UPDATE_INTERVAL: Duration = Duration::from_secs(5);
/// Wait after Start Periodic Measurement before the first read returns a
/// valid sample (one full signal update interval).
pub const FIRST_SAMPLE_DELAY: Duration = SIGNAL_UPDATE_INTERVAL;

// === Command Execution Timing ===

/// Maximum command execution time for start/read commands; the sensor must
/// not be addressed again within this window.
pub const COMMAND_EXECUTION_TIME: Duration = Duration::from_millis(1);
/// Stop Periodic Measurement execution time. The sensor accepts no command
/// until it has elapsed.
pub const STOP_EXECUTION_TIME: Duration = Duration::from_millis(500);

/// Helper for handing these constants to [`Scd41Timer`]'s millisecond API.
///
/// [`Scd41Timer`]: super::hal_traits::Scd41Timer
#[inline]
pub(crate) fn as_ms(d: Duration) -> u32 {
    d.as_millis() as u32
}
