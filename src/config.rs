//! Driver configuration: protocol timing, transfer limits and pin tables.

use embassy_time::Duration;

use crate::registers::{ADC_CHANNEL_COUNT, DEFAULT_MAX_READ_CHUNK, PWM_CHANNEL_COUNT};

/// Board pin tables for the analog peripherals.
///
/// Index *n* of each table is the firmware channel *n*; the value is the
/// seesaw pin number that channel is routed to. [`PinMap::default()`] is the
/// SAMD09 breakout layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// ADC-capable pins, indexed by ADC channel.
    pub adc: [u8; ADC_CHANNEL_COUNT],
    /// PWM-capable pins, indexed by PWM channel.
    pub pwm: [u8; PWM_CHANNEL_COUNT],
}

impl PinMap {
    /// SAMD09 breakout: ADC on pins 2–5, PWM on pins 4–7.
    pub const SAMD09: PinMap = PinMap {
        adc: [2, 3, 4, 5],
        pwm: [4, 5, 6, 7],
    };

    /// ADC channel routed to `pin`, if any.
    pub fn adc_channel(&self, pin: u8) -> Option<u8> {
        self.adc.iter().position(|&p| p == pin).map(|ch| ch as u8)
    }

    /// PWM channel routed to `pin`, if any.
    ///
    /// Channels 0/1 and 2/3 share a timer on SAMD09 firmware; see
    /// [`Seesaw::set_pwm_freq`](crate::Seesaw::set_pwm_freq).
    pub fn pwm_channel(&self, pin: u8) -> Option<u8> {
        self.pwm.iter().position(|&p| p == pin).map(|ch| ch as u8)
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self::SAMD09
    }
}

/// Configuration for a [`Seesaw`](crate::Seesaw) handle.
///
/// [`SeesawConfig::default()`] reproduces the timing of the reference
/// Arduino driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SeesawConfig {
    /// Maximum bytes requested per read transaction. Default: 32.
    pub max_read_chunk: usize,

    // ── Timing ───────────────────────────────────────────────────────
    /// Settle delay for plain register reads. Default: none.
    pub read_delay: Duration,
    /// Wait after a software reset before identification. Default: 500 ms.
    pub reset_delay: Duration,
    /// Wait after persisting a new bus address. Default: 250 ms.
    pub address_change_delay: Duration,
    /// Conversion time between addressing an ADC channel and reading it.
    /// Default: 500 µs.
    pub adc_settle_delay: Duration,
    /// Pause after each ADC sample before the next conversion. Default: 1 ms.
    pub adc_spacing_delay: Duration,
    /// Pause after each single-character SERCOM write. Default: 1 ms.
    pub sercom_char_delay: Duration,

    /// Analog pin tables.
    pub pins: PinMap,
}

impl Default for SeesawConfig {
    fn default() -> Self {
        Self {
            max_read_chunk: DEFAULT_MAX_READ_CHUNK,
            read_delay: Duration::from_ticks(0),
            reset_delay: Duration::from_millis(500),
            address_change_delay: Duration::from_millis(250),
            adc_settle_delay: Duration::from_micros(500),
            adc_spacing_delay: Duration::from_millis(1),
            sercom_char_delay: Duration::from_millis(1),
            pins: PinMap::SAMD09,
        }
    }
}
