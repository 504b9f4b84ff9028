//! Low-level seesaw protocol driver.
//!
//! Implements the I2C transaction framing used by the seesaw firmware:
//! every register access starts with the two-byte `[module, function]`
//! address, writes carry their payload in that same transaction, and reads
//! re-open the bus (optionally after a settle delay) to pull the response in
//! bus-sized chunks.
//!
//! This module is crate-private — consumers interact with [`Seesaw`]
//! instead.
//!
//! [`Seesaw`]: crate::Seesaw

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use heapless::Vec;

use crate::error::SeesawError;
use crate::registers::MAX_WRITE_PAYLOAD;

/// Address bytes plus the largest payload we stage.
const FRAME_CAPACITY: usize = 2 + MAX_WRITE_PAYLOAD;

/// Low-level seesaw protocol driver.
///
/// Owns the I2C peripheral and the delay provider, and provides the
/// `read`/`write` primitives every register operation is built on.
pub(crate) struct SeesawDriver<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    max_read_chunk: usize,
}

impl<I2C, D> SeesawDriver<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a new seesaw driver.
    ///
    /// A `max_read_chunk` of zero is treated as one byte per transfer.
    pub fn new(i2c: I2C, delay: D, address: u8, max_read_chunk: usize) -> Self {
        Self {
            i2c,
            delay,
            address,
            max_read_chunk: max_read_chunk.max(1),
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    /// Give back the transport and the delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    // -----------------------------------------------------------------------
    // Core protocol primitives
    // -----------------------------------------------------------------------

    /// Write `payload` to register `[module, function]` in one transaction.
    ///
    /// The address and the payload are staged into a single frame so the
    /// firmware sees them as one register access.
    ///
    /// # Errors
    /// * [`SeesawError::PayloadTooLong`] if `payload` exceeds
    ///   [`MAX_WRITE_PAYLOAD`]; nothing is sent.
    /// * [`SeesawError::I2c`] if the device does not acknowledge.
    pub async fn write(
        &mut self,
        module: u8,
        function: u8,
        payload: &[u8],
    ) -> Result<(), SeesawError<I2C::Error>> {
        let mut frame: Vec<u8, FRAME_CAPACITY> = Vec::new();
        // Capacity is at least 2, the address always fits.
        let _ = frame.extend_from_slice(&[module, function]);
        frame
            .extend_from_slice(payload)
            .map_err(|_| SeesawError::PayloadTooLong)?;

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "seesaw {=u8:#x} write [{=u8:#x}, {=u8:#x}] {} bytes",
            self.address,
            module,
            function,
            payload.len()
        );

        self.i2c.write(self.address, &frame).await?;
        Ok(())
    }

    /// Address-only transaction: no payload, no response.
    pub async fn write_empty(
        &mut self,
        module: u8,
        function: u8,
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.write(module, function, &[]).await
    }

    /// Read `buffer.len()` bytes from register `[module, function]`.
    ///
    /// 1. Write the register address (2 bytes)
    /// 2. Wait `settle` for the firmware to prepare the data
    /// 3. Read the response in transfers of at most `max_read_chunk` bytes
    ///
    /// Separate `write()` and `read()` operations are used rather than
    /// `write_read()` because a repeated-start leaves no room for the settle
    /// delay. On error the buffer may be partially filled.
    pub async fn read(
        &mut self,
        module: u8,
        function: u8,
        buffer: &mut [u8],
        settle: Duration,
    ) -> Result<(), SeesawError<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "seesaw {=u8:#x} read [{=u8:#x}, {=u8:#x}] {} bytes",
            self.address,
            module,
            function,
            buffer.len()
        );

        self.i2c.write(self.address, &[module, function]).await?;

        self.wait(settle).await;

        for chunk in buffer.chunks_mut(self.max_read_chunk) {
            self.i2c.read(self.address, chunk).await?;
        }

        Ok(())
    }

    /// Pause for `duration`. Zero durations skip the delay provider entirely.
    pub async fn wait(&mut self, duration: Duration) {
        let micros = duration.as_micros();
        if micros == 0 {
            return;
        }
        self.delay
            .delay_us(u32::try_from(micros).unwrap_or(u32::MAX))
            .await;
    }

    // -----------------------------------------------------------------------
    // Typed read/write helpers
    // -----------------------------------------------------------------------

    pub async fn read_u8(
        &mut self,
        module: u8,
        function: u8,
        settle: Duration,
    ) -> Result<u8, SeesawError<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.read(module, function, &mut buf, settle).await?;
        Ok(buf[0])
    }

    pub async fn write_u8(
        &mut self,
        module: u8,
        function: u8,
        value: u8,
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.write(module, function, &[value]).await
    }

    /// Read a 32-bit register, converting from big-endian (seesaw byte order).
    pub async fn read_u32(
        &mut self,
        module: u8,
        function: u8,
        settle: Duration,
    ) -> Result<u32, SeesawError<I2C::Error>> {
        let mut buf = [0u8; 4];
        self.read(module, function, &mut buf, settle).await?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Write a 32-bit register as big-endian bytes.
    pub async fn write_u32(
        &mut self,
        module: u8,
        function: u8,
        value: u32,
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.write(module, function, &value.to_be_bytes()).await
    }
}
