//! Shared host-side test helpers.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;
use std::vec::Vec;

/// Bus address used by every test.
pub const ADDR: u8 = 0x49;

/// Expect a write of `bytes` to [`ADDR`].
pub fn i2c_write(bytes: Vec<u8>) -> I2cTransaction {
    I2cTransaction::write(ADDR, bytes)
}

/// Expect a read from [`ADDR`] answered with `bytes`.
pub fn i2c_read(bytes: Vec<u8>) -> I2cTransaction {
    I2cTransaction::read(ADDR, bytes)
}

/// Delay provider that returns immediately and records every request.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    /// Requested delays, in microseconds, in call order.
    pub calls_us: Vec<u64>,
}

impl RecordingDelay {
    pub fn total_us(&self) -> u64 {
        self.calls_us.iter().sum()
    }
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls_us.push(u64::from(ns) / 1_000);
    }

    async fn delay_us(&mut self, us: u32) {
        self.calls_us.push(u64::from(us));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.calls_us.push(u64::from(ms) * 1_000);
    }
}
