//! Error types for the seesaw driver.

use core::fmt;

/// Errors that can occur when communicating with a seesaw device.
#[derive(Debug, PartialEq, Eq)]
pub enum SeesawError<E> {
    /// Underlying I2C bus error (NACK, arbitration loss, ...). Never retried.
    I2c(E),

    /// The hardware id register did not contain
    /// [`SEESAW_HW_ID_CODE`](crate::registers::SEESAW_HW_ID_CODE).
    InvalidHardwareId(u8),

    /// Bus address does not fit in 7 bits.
    InvalidAddress(u8),

    /// GPIO pin number outside the 32-pin bulk mask.
    InvalidPin(u8),

    /// SERCOM index outside `0..SERCOM_COUNT`.
    InvalidSercom(u8),

    /// Write payload exceeds the local staging buffer.
    PayloadTooLong,

    /// More ADC channels requested than the firmware exposes.
    TooManyChannels,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for SeesawError<E> {
    fn from(error: E) -> Self {
        SeesawError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for SeesawError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeesawError::I2c(e) => write!(f, "I2C error: {:?}", e),
            SeesawError::InvalidHardwareId(id) => {
                write!(f, "Unexpected hardware id 0x{:02X}", id)
            }
            SeesawError::InvalidAddress(addr) => {
                write!(f, "Invalid 7-bit I2C address 0x{:02X}", addr)
            }
            SeesawError::InvalidPin(pin) => write!(f, "Invalid GPIO pin {} (must be 0-31)", pin),
            SeesawError::InvalidSercom(n) => write!(f, "Invalid SERCOM index {}", n),
            SeesawError::PayloadTooLong => write!(f, "Write payload exceeds staging buffer"),
            SeesawError::TooManyChannels => write!(f, "Too many ADC channels requested"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for SeesawError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            SeesawError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            SeesawError::InvalidHardwareId(id) => {
                defmt::write!(f, "Unexpected hardware id {=u8:#x}", *id)
            }
            SeesawError::InvalidAddress(addr) => {
                defmt::write!(f, "Invalid I2C address {=u8:#x}", *addr)
            }
            SeesawError::InvalidPin(pin) => defmt::write!(f, "Invalid GPIO pin {}", pin),
            SeesawError::InvalidSercom(n) => defmt::write!(f, "Invalid SERCOM index {}", n),
            SeesawError::PayloadTooLong => defmt::write!(f, "Payload too long"),
            SeesawError::TooManyChannels => defmt::write!(f, "Too many ADC channels"),
        }
    }
}
