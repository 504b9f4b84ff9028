//! Serial (SERCOM) pass-through.
//!
//! SERCOM *n* is the module at `SEESAW_SERCOM0_BASE + n`. Only firmware
//! builds with a SERCOM compiled in respond; the default SAMD09 breakout
//! firmware has none.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::error::SeesawError;
use crate::registers::{
    MAX_WRITE_PAYLOAD, SERCOM_COUNT, SEESAW_SERCOM0_BASE, SEESAW_SERCOM_BAUD, SEESAW_SERCOM_DATA,
    SEESAW_SERCOM_INTEN, SEESAW_SERCOM_INTEN_DATA_RDY,
};
use crate::Seesaw;

/// Module id for SERCOM `sercom`.
fn sercom_base<E>(sercom: u8) -> Result<u8, SeesawError<E>> {
    if sercom >= SERCOM_COUNT {
        return Err(SeesawError::InvalidSercom(sercom));
    }
    Ok(SEESAW_SERCOM0_BASE + sercom)
}

impl<I2C, D> Seesaw<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Send one byte, then wait
    /// [`sercom_char_delay`](crate::SeesawConfig::sercom_char_delay).
    pub async fn sercom_write(&mut self, sercom: u8, byte: u8) -> Result<(), SeesawError<I2C::Error>> {
        let module = sercom_base(sercom)?;
        self.driver.write_u8(module, SEESAW_SERCOM_DATA, byte).await?;
        let pause = self.config.sercom_char_delay;
        self.driver.wait(pause).await;
        Ok(())
    }

    /// Send a string in frame-sized pieces; returns the number of bytes sent.
    ///
    /// On error some leading pieces may already have been transmitted.
    pub async fn sercom_write_str(&mut self, sercom: u8, s: &str) -> Result<usize, SeesawError<I2C::Error>> {
        let module = sercom_base(sercom)?;
        let mut sent = 0;
        for chunk in s.as_bytes().chunks(MAX_WRITE_PAYLOAD) {
            self.driver.write(module, SEESAW_SERCOM_DATA, chunk).await?;
            sent += chunk.len();
        }
        Ok(sent)
    }

    /// Read one received byte.
    pub async fn read_sercom_data(&mut self, sercom: u8) -> Result<u8, SeesawError<I2C::Error>> {
        let module = sercom_base(sercom)?;
        self.read8(module, SEESAW_SERCOM_DATA).await
    }

    /// Set the UART baud rate (up to 115200).
    pub async fn uart_set_baud(&mut self, sercom: u8, baud: u32) -> Result<(), SeesawError<I2C::Error>> {
        let module = sercom_base(sercom)?;
        self.driver.write_u32(module, SEESAW_SERCOM_BAUD, baud).await
    }

    /// Fire the seesaw INT pin when SERCOM `sercom` has data to read.
    ///
    /// Needs the interrupt module compiled into the firmware as well.
    pub async fn enable_sercom_data_rdy_interrupt(&mut self, sercom: u8) -> Result<(), SeesawError<I2C::Error>> {
        self.set_sercom_data_rdy(sercom, true).await
    }

    pub async fn disable_sercom_data_rdy_interrupt(&mut self, sercom: u8) -> Result<(), SeesawError<I2C::Error>> {
        self.set_sercom_data_rdy(sercom, false).await
    }

    /// Locally mirrored DATA_RDY enable for `sercom`.
    ///
    /// This is what the driver last wrote, not a read-back. The handle's
    /// own [`sw_reset`](Self::sw_reset) clears it; a reset triggered outside
    /// this handle leaves it stale.
    pub fn sercom_data_rdy_enabled(&self, sercom: u8) -> bool {
        sercom < SERCOM_COUNT && self.sercom_data_rdy & (1 << sercom) != 0
    }

    async fn set_sercom_data_rdy(&mut self, sercom: u8, enabled: bool) -> Result<(), SeesawError<I2C::Error>> {
        let module = sercom_base(sercom)?;
        let bit = 1u8 << sercom;
        let mirror = if enabled {
            self.sercom_data_rdy | bit
        } else {
            self.sercom_data_rdy & !bit
        };

        let inten = if enabled {
            SEESAW_SERCOM_INTEN_DATA_RDY
        } else {
            0
        };
        self.driver.write_u8(module, SEESAW_SERCOM_INTEN, inten).await?;

        // Only mirror what the chip acknowledged.
        self.sercom_data_rdy = mirror;
        Ok(())
    }
}
