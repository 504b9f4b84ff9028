//! Async driver for Adafruit seesaw I/O expanders.
//!
//! This crate provides an Embassy-compatible async I2C driver for chips
//! running the Adafruit seesaw firmware (SAMD09/SAMD11/ATtiny breakouts),
//! covering GPIO, ADC, PWM, EEPROM, SERCOM pass-through and device
//! identification.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **`driver`** (crate-private) — seesaw transaction framing: the two-byte
//!   `[module, function]` register address, single-transaction writes,
//!   settle-delayed chunked reads.
//! - **[`Seesaw`]** (public) — typed register operations built only on those
//!   primitives, spread over the `gpio`, `analog`, `eeprom` and `sercom`
//!   modules.
//!
//! # Quick start
//!
//! ```no_run
//! use seesaw_driver::{PinMode, Seesaw, SeesawError, DEFAULT_ADDRESS};
//!
//! # async fn example<I: embedded_hal_async::i2c::I2c>(i2c: I) -> Result<(), SeesawError<I::Error>> {
//! // Construct with any `embedded-hal-async` I2C implementation
//! let mut ss = Seesaw::new(i2c, DEFAULT_ADDRESS);
//! ss.begin().await?;
//!
//! ss.pin_mode(15, PinMode::InputPullup).await?;
//! let pressed = !ss.digital_read(15).await?;
//! let level = ss.analog_read(2).await?.value();
//! # let _ = (pressed, level);
//! # Ok(())
//! # }
//! ```
//!
//! # Timing
//!
//! All delays (reset settle, ADC conversion, address change) come from
//! [`SeesawConfig`] and run on the handle's `DelayNs` provider —
//! [`embassy_time::Delay`] unless [`Seesaw::with_config`] is given another.
//!
//! # Features
//!
//! - **`defmt`** — [`defmt::Format`] implementations on public types and
//!   transaction tracing for embedded logging.

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub use analog::{scale_duty_8_to_16, AnalogReading, PwmUpdate};
pub use config::{PinMap, SeesawConfig};
pub use embedded_hal::digital::PinState;
pub use error::SeesawError;
pub use gpio::PinMode;
pub use registers::DEFAULT_ADDRESS;
pub use seesaw::{Seesaw, Version};

mod analog;
mod config;
mod driver;
mod eeprom;
mod error;
mod gpio;
pub mod registers;
mod seesaw;
mod sercom;

#[cfg(test)]
mod testing;
