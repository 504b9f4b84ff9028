//! GPIO operations.
//!
//! All pin operations are expressed as 32-bit bulk masks (bit *i* = pin *i*)
//! sent big-endian; the single-pin helpers just build a one-bit mask.

use embedded_hal::digital::PinState;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::error::SeesawError;
use crate::registers::{
    GPIO_PIN_COUNT, SEESAW_GPIO_BASE, SEESAW_GPIO_BULK, SEESAW_GPIO_BULK_CLR,
    SEESAW_GPIO_BULK_SET, SEESAW_GPIO_BULK_TOGGLE, SEESAW_GPIO_DIRCLR_BULK,
    SEESAW_GPIO_DIRSET_BULK, SEESAW_GPIO_INTENCLR, SEESAW_GPIO_INTENSET, SEESAW_GPIO_INTFLAG,
    SEESAW_GPIO_PULLENSET,
};
use crate::Seesaw;

/// Pin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input,
    Output,
    /// Input with the internal pull-up enabled.
    InputPullup,
}

/// Single-bit mask for `pin`.
fn pin_mask<E>(pin: u8) -> Result<u32, SeesawError<E>> {
    if pin >= GPIO_PIN_COUNT {
        return Err(SeesawError::InvalidPin(pin));
    }
    Ok(1u32 << pin)
}

impl<I2C, D> Seesaw<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Configure a single pin.
    ///
    /// # Errors
    /// * [`SeesawError::InvalidPin`] if `pin >= 32`
    /// * [`SeesawError::I2c`] on communication failure
    pub async fn pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), SeesawError<I2C::Error>> {
        let mask = pin_mask(pin)?;
        self.pin_mode_bulk(mask, mode).await
    }

    /// Configure every pin set in `pins`.
    ///
    /// `InputPullup` is not a chip-level mode: it is three writes in this
    /// order, each with the same mask: direction clear, pull enable, output
    /// set (the output latch selects pull-up over pull-down).
    pub async fn pin_mode_bulk(&mut self, pins: u32, mode: PinMode) -> Result<(), SeesawError<I2C::Error>> {
        match mode {
            PinMode::Output => {
                self.driver
                    .write_u32(SEESAW_GPIO_BASE, SEESAW_GPIO_DIRSET_BULK, pins)
                    .await
            }
            PinMode::Input => {
                self.driver
                    .write_u32(SEESAW_GPIO_BASE, SEESAW_GPIO_DIRCLR_BULK, pins)
                    .await
            }
            PinMode::InputPullup => {
                self.driver
                    .write_u32(SEESAW_GPIO_BASE, SEESAW_GPIO_DIRCLR_BULK, pins)
                    .await?;
                self.driver
                    .write_u32(SEESAW_GPIO_BASE, SEESAW_GPIO_PULLENSET, pins)
                    .await?;
                self.driver
                    .write_u32(SEESAW_GPIO_BASE, SEESAW_GPIO_BULK_SET, pins)
                    .await
            }
        }
    }

    /// Drive a single output pin.
    pub async fn digital_write(&mut self, pin: u8, state: PinState) -> Result<(), SeesawError<I2C::Error>> {
        let mask = pin_mask(pin)?;
        self.digital_write_bulk(mask, state).await
    }

    /// Drive every pin in `pins` to `state`.
    pub async fn digital_write_bulk(&mut self, pins: u32, state: PinState) -> Result<(), SeesawError<I2C::Error>> {
        let function = match state {
            PinState::High => SEESAW_GPIO_BULK_SET,
            PinState::Low => SEESAW_GPIO_BULK_CLR,
        };
        self.driver.write_u32(SEESAW_GPIO_BASE, function, pins).await
    }

    /// Invert every output pin in `pins`.
    pub async fn digital_toggle_bulk(&mut self, pins: u32) -> Result<(), SeesawError<I2C::Error>> {
        self.driver
            .write_u32(SEESAW_GPIO_BASE, SEESAW_GPIO_BULK_TOGGLE, pins)
            .await
    }

    /// Read a single pin. `true` means high.
    pub async fn digital_read(&mut self, pin: u8) -> Result<bool, SeesawError<I2C::Error>> {
        let mask = pin_mask(pin)?;
        Ok(self.digital_read_bulk(mask).await? != 0)
    }

    /// Read the level of every pin and keep only the bits in `pins`.
    ///
    /// Passing `0b0110` with pin 1 high and pin 2 low returns `0b0010`.
    pub async fn digital_read_bulk(&mut self, pins: u32) -> Result<u32, SeesawError<I2C::Error>> {
        let settle = self.config.read_delay;
        let raw = self
            .driver
            .read_u32(SEESAW_GPIO_BASE, SEESAW_GPIO_BULK, settle)
            .await?;
        Ok(raw & pins)
    }

    /// Enable or disable pin-change interrupts on every pin in `pins`.
    ///
    /// Set and clear are separate registers, so pins outside the mask keep
    /// their current setting.
    pub async fn set_gpio_interrupts(&mut self, pins: u32, enabled: bool) -> Result<(), SeesawError<I2C::Error>> {
        let function = if enabled {
            SEESAW_GPIO_INTENSET
        } else {
            SEESAW_GPIO_INTENCLR
        };
        self.driver.write_u32(SEESAW_GPIO_BASE, function, pins).await
    }

    /// Read and clear the pending pin-change interrupt flags.
    ///
    /// The INTFLAG register is self-clearing: reading it drives the INT pin
    /// back high, so call this after handling an interrupt.
    pub async fn gpio_interrupt_flags(&mut self) -> Result<u32, SeesawError<I2C::Error>> {
        let settle = self.config.read_delay;
        self.driver
            .read_u32(SEESAW_GPIO_BASE, SEESAW_GPIO_INTFLAG, settle)
            .await
    }
}
