//! Device handle, identification handshake and raw register access.
//!
//! [`Seesaw`] wraps the low-level protocol driver with the lifecycle
//! operations (reset, identification, address change) and exposes the raw
//! `read`/`write` primitives for registers this crate has no typed wrapper
//! for. The peripheral-specific operations live in the `gpio`, `analog`,
//! `eeprom` and `sercom` modules as further `impl` blocks on the same type.

use embassy_time::{Delay, Duration};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::config::SeesawConfig;
use crate::driver::SeesawDriver;
use crate::error::SeesawError;
use crate::registers::{
    SEESAW_EEPROM_I2C_ADDR, SEESAW_HW_ID_CODE, SEESAW_STATUS_BASE, SEESAW_STATUS_HW_ID,
    SEESAW_STATUS_OPTIONS, SEESAW_STATUS_SWRST, SEESAW_STATUS_VERSION, SEESAW_SWRST_VALUE,
};

/// Firmware version word as returned by [`Seesaw::get_version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Version(pub u32);

impl Version {
    /// Product id, bits [15:0].
    pub fn product_id(&self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// Firmware date code, bits [31:16].
    pub fn date_code(&self) -> u16 {
        (self.0 >> 16) as u16
    }
}

/// Handle for one seesaw device on an I2C bus.
///
/// Owns the I2C peripheral (or a shared-bus device wrapper) and a delay
/// provider. Every bus-touching method takes `&mut self`, so operations on
/// one handle are serialised by construction.
///
/// # Example
///
/// ```no_run
/// use seesaw_driver::{PinMode, Seesaw, DEFAULT_ADDRESS};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut ss = Seesaw::new(i2c, DEFAULT_ADDRESS);
/// ss.begin().await.unwrap();
///
/// ss.pin_mode(15, PinMode::Output).await.unwrap();
/// ss.digital_write(15, true.into()).await.unwrap();
/// # }
/// ```
pub struct Seesaw<I2C, D = Delay> {
    pub(crate) driver: SeesawDriver<I2C, D>,
    pub(crate) config: SeesawConfig,
    /// Mirror of the DATA_RDY interrupt enable, one bit per SERCOM. Not
    /// read back from the chip; cleared by [`sw_reset`](Self::sw_reset).
    pub(crate) sercom_data_rdy: u8,
}

impl<I2C> Seesaw<I2C, Delay>
where
    I2C: I2c,
{
    /// Create a handle with the default configuration and the embassy-time
    /// delay.
    ///
    /// No I2C traffic is generated; call [`begin()`](Self::begin) to run the
    /// identification handshake.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically 0x49)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self::with_config(i2c, Delay, address, SeesawConfig::default())
    }
}

impl<I2C, D> Seesaw<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a handle with an explicit delay provider and configuration.
    pub fn with_config(i2c: I2C, delay: D, address: u8, config: SeesawConfig) -> Self {
        Self {
            driver: SeesawDriver::new(i2c, delay, address, config.max_read_chunk),
            config,
            sercom_data_rdy: 0,
        }
    }

    /// Current 7-bit bus address.
    pub fn address(&self) -> u8 {
        self.driver.address()
    }

    pub fn config(&self) -> &SeesawConfig {
        &self.config
    }

    /// Consume the handle and return the I2C peripheral and delay provider.
    pub fn release(self) -> (I2C, D) {
        self.driver.release()
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Run the identification handshake at the current address.
    ///
    /// See [`begin_at`](Self::begin_at).
    pub async fn begin(&mut self) -> Result<(), SeesawError<I2C::Error>> {
        let address = self.address();
        self.begin_at(address).await
    }

    /// Record `address` and run the identification handshake there.
    ///
    /// 1. Software reset
    /// 2. Wait [`reset_delay`](SeesawConfig::reset_delay) for the firmware to restart
    /// 3. Read the hardware id register and compare it with
    ///    [`SEESAW_HW_ID_CODE`]
    ///
    /// # Errors
    /// * [`SeesawError::InvalidAddress`] if `address > 0x7F`; nothing is sent
    /// * [`SeesawError::InvalidHardwareId`] if another chip answered
    /// * [`SeesawError::I2c`] if nothing answered (absent or still booting)
    ///
    /// `address` is recorded before the handshake and stays recorded on
    /// failure; [`set_device_address`](Self::set_device_address) is the
    /// variant that rolls back.
    pub async fn begin_at(&mut self, address: u8) -> Result<(), SeesawError<I2C::Error>> {
        if address > 0x7F {
            return Err(SeesawError::InvalidAddress(address));
        }
        self.driver.set_address(address);

        self.sw_reset().await?;
        let reset_delay = self.config.reset_delay;
        self.driver.wait(reset_delay).await;

        let id = self.read8(SEESAW_STATUS_BASE, SEESAW_STATUS_HW_ID).await?;
        if id != SEESAW_HW_ID_CODE {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "seesaw {=u8:#x}: unexpected hardware id {=u8:#x}",
                address,
                id
            );
            return Err(SeesawError::InvalidHardwareId(id));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("seesaw {=u8:#x}: identified", address);

        Ok(())
    }

    /// Reset every seesaw register to its power-on default.
    ///
    /// Called automatically from [`begin()`](Self::begin). Once the chip
    /// acknowledges, the local SERCOM DATA_RDY mirror is cleared to match.
    pub async fn sw_reset(&mut self) -> Result<(), SeesawError<I2C::Error>> {
        self.write8(SEESAW_STATUS_BASE, SEESAW_STATUS_SWRST, SEESAW_SWRST_VALUE)
            .await?;
        self.sercom_data_rdy = 0;
        Ok(())
    }

    /// Bitmask of the modules compiled into the firmware.
    ///
    /// Bit *k* is set when the module with id *k* is present, e.g.
    /// `options & (1 << SEESAW_ADC_BASE) != 0` when the ADC is available.
    pub async fn get_options(&mut self) -> Result<u32, SeesawError<I2C::Error>> {
        let settle = self.config.read_delay;
        self.driver
            .read_u32(SEESAW_STATUS_BASE, SEESAW_STATUS_OPTIONS, settle)
            .await
    }

    /// Check whether `module` is compiled into the firmware.
    pub async fn has_module(&mut self, module: u8) -> Result<bool, SeesawError<I2C::Error>> {
        let options = self.get_options().await?;
        Ok(module < 32 && options & (1 << module) != 0)
    }

    /// Firmware version word: date code in [31:16], product id in [15:0].
    pub async fn get_version(&mut self) -> Result<Version, SeesawError<I2C::Error>> {
        let settle = self.config.read_delay;
        let word = self
            .driver
            .read_u32(SEESAW_STATUS_BASE, SEESAW_STATUS_VERSION, settle)
            .await?;
        Ok(Version(word))
    }

    /// Persist a new bus address and re-identify the device there.
    ///
    /// Writes `address` into the EEPROM address slot, waits
    /// [`address_change_delay`](SeesawConfig::address_change_delay), then
    /// runs [`begin_at(address)`](Self::begin_at). The handle only keeps the
    /// new address if that handshake succeeds.
    pub async fn set_device_address(&mut self, address: u8) -> Result<(), SeesawError<I2C::Error>> {
        if address > 0x7F {
            return Err(SeesawError::InvalidAddress(address));
        }
        let previous = self.address();

        self.eeprom_write8(SEESAW_EEPROM_I2C_ADDR, address).await?;
        let settle = self.config.address_change_delay;
        self.driver.wait(settle).await;

        if let Err(e) = self.begin_at(address).await {
            self.driver.set_address(previous);
            return Err(e);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("seesaw address changed {=u8:#x} -> {=u8:#x}", previous, address);

        Ok(())
    }

    /// Bus address persisted in the device EEPROM.
    pub async fn get_device_address(&mut self) -> Result<u8, SeesawError<I2C::Error>> {
        self.eeprom_read8(SEESAW_EEPROM_I2C_ADDR).await
    }

    // -----------------------------------------------------------------------
    // Raw register access
    // -----------------------------------------------------------------------

    /// Read `buf.len()` bytes from `[module, function]` after a settle delay.
    pub async fn read(
        &mut self,
        module: u8,
        function: u8,
        buf: &mut [u8],
        settle: Duration,
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.driver.read(module, function, buf, settle).await
    }

    /// Write `payload` to `[module, function]` in one transaction.
    pub async fn write(
        &mut self,
        module: u8,
        function: u8,
        payload: &[u8],
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.driver.write(module, function, payload).await
    }

    /// Read one byte with the configured default settle delay.
    pub async fn read8(&mut self, module: u8, function: u8) -> Result<u8, SeesawError<I2C::Error>> {
        let settle = self.config.read_delay;
        self.driver.read_u8(module, function, settle).await
    }

    pub async fn write8(
        &mut self,
        module: u8,
        function: u8,
        value: u8,
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.driver.write_u8(module, function, value).await
    }

    /// Address-only command (no payload, no response).
    pub async fn write_empty(
        &mut self,
        module: u8,
        function: u8,
    ) -> Result<(), SeesawError<I2C::Error>> {
        self.driver.write_empty(module, function).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::SEESAW_ADC_BASE;
    use crate::testing::{i2c_read, i2c_write, RecordingDelay, ADDR};
    use embassy_futures::block_on;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    fn seesaw(expectations: &[I2cTransaction]) -> Seesaw<I2cMock, RecordingDelay> {
        Seesaw::with_config(
            I2cMock::new(expectations),
            RecordingDelay::default(),
            ADDR,
            SeesawConfig::default(),
        )
    }

    fn finish(ss: Seesaw<I2cMock, RecordingDelay>) -> RecordingDelay {
        let (mut i2c, delay) = ss.release();
        i2c.done();
        delay
    }

    #[test]
    fn begin_resets_waits_and_checks_hardware_id() {
        let mut ss = seesaw(&[
            i2c_write(vec![0x00, 0x7F, 0xFF]),
            i2c_write(vec![0x00, 0x01]),
            i2c_read(vec![0x55]),
        ]);

        block_on(ss.begin()).unwrap();

        let delay = finish(ss);
        assert_eq!(delay.calls_us, vec![500_000]);
    }

    #[test]
    fn begin_rejects_wrong_hardware_id() {
        let mut ss = seesaw(&[
            i2c_write(vec![0x00, 0x7F, 0xFF]),
            i2c_write(vec![0x00, 0x01]),
            i2c_read(vec![0x87]),
        ]);

        assert_eq!(block_on(ss.begin()), Err(SeesawError::InvalidHardwareId(0x87)));

        finish(ss);
    }

    #[test]
    fn begin_reports_transport_failure_during_identification() {
        let mut ss = seesaw(&[
            i2c_write(vec![0x00, 0x7F, 0xFF]),
            i2c_write(vec![0x00, 0x01]),
            i2c_read(vec![0x00]).with_error(ErrorKind::Other),
        ]);

        assert_eq!(block_on(ss.begin()), Err(SeesawError::I2c(ErrorKind::Other)));

        finish(ss);
    }

    #[test]
    fn begin_at_rejects_eight_bit_address() {
        let mut ss = seesaw(&[]);

        assert_eq!(block_on(ss.begin_at(0x80)), Err(SeesawError::InvalidAddress(0x80)));
        assert_eq!(ss.address(), ADDR);

        finish(ss);
    }

    #[test]
    fn version_and_options_are_reassembled_big_endian() {
        let mut ss = seesaw(&[
            i2c_write(vec![0x00, 0x02]),
            i2c_read(vec![0x4E, 0x2A, 0x13, 0x7F]),
            i2c_write(vec![0x00, 0x03]),
            i2c_read(vec![0x00, 0x00, 0x02, 0x03]),
        ]);

        let version = block_on(ss.get_version()).unwrap();
        assert_eq!(version, Version(0x4E2A_137F));
        assert_eq!(version.product_id(), 0x137F);
        assert_eq!(version.date_code(), 0x4E2A);

        let options = block_on(ss.get_options()).unwrap();
        assert_eq!(options, 0x0000_0203);

        finish(ss);
    }

    #[test]
    fn has_module_checks_option_bit() {
        let mut ss = seesaw(&[
            i2c_write(vec![0x00, 0x03]),
            i2c_read(vec![0x00, 0x00, 0x02, 0x03]),
        ]);

        assert!(block_on(ss.has_module(SEESAW_ADC_BASE)).unwrap());

        finish(ss);
    }

    #[test]
    fn set_device_address_persists_then_rebegins_at_new_address() {
        let mut ss = seesaw(&[
            i2c_write(vec![0x0D, 0x3F, 0x50]),
            I2cTransaction::write(0x50, vec![0x00, 0x7F, 0xFF]),
            I2cTransaction::write(0x50, vec![0x00, 0x01]),
            I2cTransaction::read(0x50, vec![0x55]),
        ]);

        block_on(ss.set_device_address(0x50)).unwrap();
        assert_eq!(ss.address(), 0x50);

        let delay = finish(ss);
        assert_eq!(delay.calls_us, vec![250_000, 500_000]);
    }

    #[test]
    fn set_device_address_keeps_old_address_when_handshake_fails() {
        let mut ss = seesaw(&[
            i2c_write(vec![0x0D, 0x3F, 0x50]),
            I2cTransaction::write(0x50, vec![0x00, 0x7F, 0xFF]).with_error(ErrorKind::Other),
        ]);

        assert_eq!(
            block_on(ss.set_device_address(0x50)),
            Err(SeesawError::I2c(ErrorKind::Other))
        );
        assert_eq!(ss.address(), ADDR);

        finish(ss);
    }

    #[test]
    fn begin_clears_sercom_interrupt_mirror() {
        let mut ss = seesaw(&[
            i2c_write(vec![0x02, 0x02, 0x01]),
            i2c_write(vec![0x00, 0x7F, 0xFF]),
            i2c_write(vec![0x00, 0x01]),
            i2c_read(vec![0x55]),
        ]);

        block_on(ss.enable_sercom_data_rdy_interrupt(0)).unwrap();
        assert!(ss.sercom_data_rdy_enabled(0));

        block_on(ss.begin()).unwrap();
        assert!(!ss.sercom_data_rdy_enabled(0));

        finish(ss);
    }

    #[test]
    fn failed_reset_leaves_sercom_interrupt_mirror() {
        let mut ss = seesaw(&[
            i2c_write(vec![0x02, 0x02, 0x01]),
            i2c_write(vec![0x00, 0x7F, 0xFF]).with_error(ErrorKind::Other),
        ]);

        block_on(ss.enable_sercom_data_rdy_interrupt(0)).unwrap();
        assert!(block_on(ss.sw_reset()).is_err());
        assert!(ss.sercom_data_rdy_enabled(0));

        finish(ss);
    }

    #[test]
    fn begin_at_keeps_new_address_after_failed_handshake() {
        let mut ss = seesaw(&[
            I2cTransaction::write(0x50, vec![0x00, 0x7F, 0xFF]).with_error(ErrorKind::Other),
        ]);

        assert!(block_on(ss.begin_at(0x50)).is_err());
        assert_eq!(ss.address(), 0x50);

        finish(ss);
    }

    #[test]
    fn get_device_address_reads_eeprom_slot() {
        let mut ss = seesaw(&[i2c_write(vec![0x0D, 0x3F]), i2c_read(vec![0x49])]);

        assert_eq!(block_on(ss.get_device_address()).unwrap(), 0x49);

        finish(ss);
    }
}
