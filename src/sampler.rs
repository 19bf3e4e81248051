// src/sampler.rs

// Thin sequencing wrapper around the stateless codec. The protocol it
// enforces is linear: Idle -> Measuring -> (read)* -> Idle. Delays between
// consecutive reads (one signal update interval) remain the caller's
// responsibility since only the caller knows its sampling cadence.

use crate::common::{
    command::Command,
    error::Scd41Error,
    hal_traits::{Scd41Bus, Scd41Timer},
    measurement::{decode_measurement, Measurement, MEASUREMENT_RESPONSE_LEN},
    timing,
};
use core::fmt::Debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SamplerState {
    Idle,
    Measuring,
}

/// Drives an SCD41 through its periodic-measurement sequence over a
/// [`Scd41Bus`] + [`Scd41Timer`] interface.
#[derive(Debug)]
pub struct Scd41Sampler<IF>
where
    IF: Scd41Bus + Scd41Timer,
    IF::Error: Debug,
{
    interface: IF,
    state: SamplerState,
}

impl<IF> Scd41Sampler<IF>
where
    IF: Scd41Bus + Scd41Timer,
    IF::Error: Debug,
{
    pub fn new(interface: IF) -> Self {
        Scd41Sampler {
            interface,
            state: SamplerState::Idle,
        }
    }

    /// Whether a periodic measurement is currently running.
    pub fn is_measuring(&self) -> bool {
        self.state == SamplerState::Measuring
    }

    /// Starts periodic measurement and blocks for the first-sample settle
    /// time, after which [`read_measurement`](Self::read_measurement) may be
    /// called.
    pub fn start_measurement(&mut self) -> Result<(), Scd41Error<IF::Error>> {
        if self.state == SamplerState::Measuring {
            return Err(Scd41Error::AlreadyMeasuring);
        }

        self.interface
            .write(&Command::StartPeriodicMeasurement.frame())
            .map_err(Scd41Error::Io)?;
        self.interface
            .delay_ms(timing::as_ms(timing::FIRST_SAMPLE_DELAY));

        self.state = SamplerState::Measuring;
        Ok(())
    }

    /// Executes one read-measurement transaction and decodes the response.
    ///
    /// Fails with [`Scd41Error::NotMeasuring`] unless a measurement was
    /// started. A checksum failure discards the reading and is propagated;
    /// whether to re-read is the caller's policy.
    pub fn read_measurement(&mut self) -> Result<Measurement, Scd41Error<IF::Error>> {
        if self.state != SamplerState::Measuring {
            return Err(Scd41Error::NotMeasuring);
        }

        let mut response = [0u8; MEASUREMENT_RESPONSE_LEN];
        self.interface
            .write_read(&Command::ReadMeasurement.frame(), &mut response)
            .map_err(Scd41Error::Io)?;

        Ok(decode_measurement(&response)?)
    }

    /// Stops periodic measurement and waits out the stop execution time, so
    /// the sensor is ready for the next command on return.
    ///
    /// Idempotent: stopping while idle just re-sends the stop command, which
    /// the sensor tolerates.
    pub fn stop_measurement(&mut self) -> Result<(), Scd41Error<IF::Error>> {
        self.interface
            .write(&Command::StopPeriodicMeasurement.frame())
            .map_err(Scd41Error::Io)?;
        self.interface
            .delay_ms(timing::as_ms(timing::STOP_EXECUTION_TIME));

        self.state = SamplerState::Idle;
        Ok(())
    }

    /// Consumes the sampler and hands the interface back.
    pub fn release(self) -> IF {
        self.interface
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::crc::append_crc8;
    use crate::common::error::DecodeError;
    use std::vec::Vec;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    struct MockBusError;

    /// Records writes and serves canned responses, one per write_read call.
    #[derive(Debug, Default)]
    struct MockInterface {
        writes: Vec<Vec<u8>>,
        responses: Vec<[u8; 9]>,
        delays_ms: Vec<u32>,
        fail_next: bool,
    }

    impl MockInterface {
        fn queue_response(&mut self, co2: u16, temp: u16, hum: u16) {
            let mut raw = [0u8; 9];
            raw[0..3].copy_from_slice(&append_crc8(co2));
            raw[3..6].copy_from_slice(&append_crc8(temp));
            raw[6..9].copy_from_slice(&append_crc8(hum));
            self.responses.push(raw);
        }
    }

    impl Scd41Bus for MockInterface {
        type Error = MockBusError;

        fn write(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
            if self.fail_next {
                self.fail_next = false;
                return Err(MockBusError);
            }
            self.writes.push(frame.to_vec());
            Ok(())
        }

        fn write_read(&mut self, frame: &[u8], response: &mut [u8]) -> Result<(), Self::Error> {
            if self.fail_next {
                self.fail_next = false;
                return Err(MockBusError);
            }
            self.writes.push(frame.to_vec());
            let raw = self.responses.remove(0);
            response.copy_from_slice(&raw);
            Ok(())
        }
    }

    impl Scd41Timer for MockInterface {
        fn delay_ms(&mut self, ms: u32) {
            self.delays_ms.push(ms);
        }
    }

    #[test]
    fn test_full_sequence() {
        let mut mock = MockInterface::default();
        mock.queue_response(450, 0x6667, 0x5E95);
        let mut sampler = Scd41Sampler::new(mock);

        sampler.start_measurement().unwrap();
        assert!(sampler.is_measuring());
        let m = sampler.read_measurement().unwrap();
        assert_eq!(m.co2_ppm, 450);
        sampler.stop_measurement().unwrap();
        assert!(!sampler.is_measuring());

        let mock = sampler.release();
        assert_eq!(
            mock.writes,
            [
                std::vec![0xC4, 0x21, 0xB1],
                std::vec![0xC4, 0xEC, 0x05],
                std::vec![0xC4, 0x3F, 0x86],
            ]
        );
        // Settle after start, execution time after stop.
        assert_eq!(mock.delays_ms, [5000, 500]);
    }

    #[test]
    fn test_read_without_start_rejected() {
        let mut sampler = Scd41Sampler::new(MockInterface::default());
        assert!(matches!(
            sampler.read_measurement(),
            Err(Scd41Error::NotMeasuring)
        ));
    }

    #[test]
    fn test_double_start_rejected() {
        let mut sampler = Scd41Sampler::new(MockInterface::default());
        sampler.start_measurement().unwrap();
        assert!(matches!(
            sampler.start_measurement(),
            Err(Scd41Error::AlreadyMeasuring)
        ));
        // Only one start frame actually hit the bus.
        assert_eq!(sampler.release().writes.len(), 1);
    }

    #[test]
    fn test_corrupted_response_propagates_decode_error() {
        let mut mock = MockInterface::default();
        mock.queue_response(450, 0x6667, 0x5E95);
        mock.responses[0][4] ^= 0x10; // corrupt a temperature data byte
        let mut sampler = Scd41Sampler::new(mock);

        sampler.start_measurement().unwrap();
        assert!(matches!(
            sampler.read_measurement(),
            Err(Scd41Error::Decode(DecodeError::ChecksumMismatch {
                group: 1,
                ..
            }))
        ));
        // State survives a bad reading; the caller may read again.
        assert!(sampler.is_measuring());
    }

    #[test]
    fn test_bus_error_wrapped_as_io() {
        let mut mock = MockInterface::default();
        mock.fail_next = true;
        let mut sampler = Scd41Sampler::new(mock);
        assert!(matches!(
            sampler.start_measurement(),
            Err(Scd41Error::Io(MockBusError))
        ));
        // Failed start leaves the sampler idle.
        assert!(!sampler.is_measuring());
    }

    #[test]
    fn test_stop_while_idle_is_allowed() {
        let mut sampler = Scd41Sampler::new(MockInterface::default());
        sampler.stop_measurement().unwrap();
        assert_eq!(sampler.release().writes, [std::vec![0xC4, 0x3F, 0x86]]);
    }
}
