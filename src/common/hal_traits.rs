// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction over the bridge that carries SCD41 frames.
///
/// The sensor protocol needs exactly two capabilities from its transport:
/// write a command frame, or write a command frame and read a fixed-length
/// response back in the same transaction. Frames already carry the address
/// byte, matching bridges (like the CH347) that stream raw I2C bytes;
/// adapters for address-aware buses strip it (see [`I2cBus`]).
///
/// Blocking and single-transaction by design: the SCD41 protocol is strictly
/// request/response. Timeouts and retries are the implementation's concern.
pub trait Scd41Bus {
    /// Associated error type for transport errors.
    type Error: Debug;

    /// Writes a complete command frame. Used for commands with no response
    /// phase (start/stop measurement).
    fn write(&mut self, frame: &[u8]) -> Result<(), Self::Error>;

    /// Writes a command frame, then reads exactly `response.len()` bytes
    /// back. The implementation must fill the whole buffer or fail.
    fn write_read(&mut self, frame: &[u8], response: &mut [u8]) -> Result<(), Self::Error>;
}

/// Abstraction for the coarse delays the SCD41 sequencing contract needs.
///
/// Note: This could potentially be replaced by directly requiring
/// `embedded_hal::delay::DelayNs` if embedded-hal v1 is mandated.
pub trait Scd41Timer {
    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Adapter implementing [`Scd41Bus`] over any `embedded_hal::i2c::I2c` bus.
///
/// embedded-hal buses take the 7-bit address separately, so the adapter
/// strips the frame's leading address byte and addresses the sensor at
/// [`I2C_ADDR_7BIT`](super::command::I2C_ADDR_7BIT).
#[cfg(feature = "embedded-hal")]
pub struct I2cBus<I> {
    i2c: I,
}

#[cfg(feature = "embedded-hal")]
impl<I> I2cBus<I>
where
    I: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Hands the wrapped bus back.
    pub fn release(self) -> I {
        self.i2c
    }
}

#[cfg(feature = "embedded-hal")]
impl<I> Scd41Bus for I2cBus<I>
where
    I: embedded_hal::i2c::I2c,
{
    type Error = I::Error;

    fn write(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.i2c
            .write(super::command::I2C_ADDR_7BIT, &frame[1..])
    }

    fn write_read(&mut self, frame: &[u8], response: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c
            .write_read(super::command::I2C_ADDR_7BIT, &frame[1..], response)
    }
}
