//! EEPROM access.
//!
//! The EEPROM module uses the function byte as the byte address, and the
//! firmware auto-increments it across a multi-byte write. No capacity check
//! is done here (64 bytes on SAMD09); the last byte,
//! [`SEESAW_EEPROM_I2C_ADDR`](crate::registers::SEESAW_EEPROM_I2C_ADDR),
//! holds the persisted bus address.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::error::SeesawError;
use crate::registers::{MAX_WRITE_PAYLOAD, SEESAW_EEPROM_BASE};
use crate::Seesaw;

impl<I2C, D> Seesaw<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub async fn eeprom_write8(&mut self, addr: u8, value: u8) -> Result<(), SeesawError<I2C::Error>> {
        self.eeprom_write(addr, &[value]).await
    }

    /// Write `data` starting at `addr`.
    ///
    /// Data longer than one write frame is sent as consecutive writes at
    /// increasing addresses.
    pub async fn eeprom_write(&mut self, addr: u8, data: &[u8]) -> Result<(), SeesawError<I2C::Error>> {
        let mut offset = addr;
        for chunk in data.chunks(MAX_WRITE_PAYLOAD) {
            self.driver.write(SEESAW_EEPROM_BASE, offset, chunk).await?;
            offset = offset.wrapping_add(chunk.len() as u8);
        }
        Ok(())
    }

    pub async fn eeprom_read8(&mut self, addr: u8) -> Result<u8, SeesawError<I2C::Error>> {
        self.read8(SEESAW_EEPROM_BASE, addr).await
    }

    /// Fill `buf` from consecutive EEPROM bytes starting at `addr`.
    ///
    /// Each frame-sized window is addressed separately, so the result does
    /// not depend on how the firmware handles long reads.
    pub async fn eeprom_read(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), SeesawError<I2C::Error>> {
        let settle = self.config.read_delay;
        let mut offset = addr;
        for chunk in buf.chunks_mut(MAX_WRITE_PAYLOAD) {
            let len = chunk.len() as u8;
            self.driver
                .read(SEESAW_EEPROM_BASE, offset, chunk, settle)
                .await?;
            offset = offset.wrapping_add(len);
        }
        Ok(())
    }
}
