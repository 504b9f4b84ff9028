//! ADC sampling and PWM output.
//!
//! Both peripherals only exist on a fixed set of pins, looked up in the
//! handle's [`PinMap`](crate::PinMap). A pin outside the table never
//! touches the bus; the outcome says so instead of failing.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::error::SeesawError;
use crate::registers::{
    ADC_CHANNEL_COUNT, SEESAW_ADC_BASE, SEESAW_ADC_CHANNEL_OFFSET, SEESAW_TIMER_BASE,
    SEESAW_TIMER_FREQ, SEESAW_TIMER_PWM,
};
use crate::Seesaw;

/// Outcome of [`Seesaw::analog_read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogReading {
    /// Converted sample (10-bit on SAMD09 firmware).
    Sampled(u16),
    /// The pin has no ADC channel; nothing was read.
    Unsupported,
}

impl AnalogReading {
    /// Sample value, or 0 for an unsupported pin.
    pub fn value(&self) -> u16 {
        match self {
            AnalogReading::Sampled(v) => *v,
            AnalogReading::Unsupported => 0,
        }
    }

    pub fn sample(&self) -> Option<u16> {
        match self {
            AnalogReading::Sampled(v) => Some(*v),
            AnalogReading::Unsupported => None,
        }
    }
}

/// Outcome of the PWM operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmUpdate {
    /// The register write was sent.
    Applied,
    /// The pin has no PWM channel; nothing was sent.
    Unsupported,
}

/// Rescale an 8-bit duty cycle to the 16-bit range: `v * 65535 / 255`.
pub fn scale_duty_8_to_16(value: u8) -> u16 {
    // 65535 / 255 == 257 exactly.
    u16::from(value) * 257
}

impl<I2C, D> Seesaw<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    // -----------------------------------------------------------------------
    // ADC
    // -----------------------------------------------------------------------

    /// Sample the ADC channel routed to `pin`.
    ///
    /// Addresses the channel register, waits
    /// [`adc_settle_delay`](crate::SeesawConfig::adc_settle_delay) for the
    /// conversion, reads the big-endian 16-bit result, then waits
    /// [`adc_spacing_delay`](crate::SeesawConfig::adc_spacing_delay) so
    /// back-to-back conversions are spaced out.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example<I: embedded_hal_async::i2c::I2c>(ss: &mut seesaw_driver::Seesaw<I>) {
    /// let level = ss.analog_read(2).await.unwrap().value();
    /// # }
    /// ```
    pub async fn analog_read(&mut self, pin: u8) -> Result<AnalogReading, SeesawError<I2C::Error>> {
        let Some(channel) = self.config.pins.adc_channel(pin) else {
            #[cfg(feature = "defmt")]
            defmt::debug!("analog_read: pin {} has no ADC channel", pin);
            return Ok(AnalogReading::Unsupported);
        };

        let mut buf = [0u8; 2];
        let settle = self.config.adc_settle_delay;
        self.driver
            .read(
                SEESAW_ADC_BASE,
                SEESAW_ADC_CHANNEL_OFFSET + channel,
                &mut buf,
                settle,
            )
            .await?;

        let spacing = self.config.adc_spacing_delay;
        self.driver.wait(spacing).await;

        Ok(AnalogReading::Sampled(u16::from_be_bytes(buf)))
    }

    /// Sample ADC channels `0..out.len()` in one register read.
    ///
    /// # Errors
    /// * [`SeesawError::TooManyChannels`] if `out.len()` exceeds the
    ///   firmware's channel count; nothing is sent
    pub async fn analog_read_bulk(&mut self, out: &mut [u16]) -> Result<(), SeesawError<I2C::Error>> {
        if out.len() > ADC_CHANNEL_COUNT {
            return Err(SeesawError::TooManyChannels);
        }

        let mut raw = [0u8; ADC_CHANNEL_COUNT * 2];
        let raw = &mut raw[..out.len() * 2];
        let settle = self.config.adc_settle_delay;
        self.driver
            .read(SEESAW_ADC_BASE, SEESAW_ADC_CHANNEL_OFFSET, raw, settle)
            .await?;

        for (sample, bytes) in out.iter_mut().zip(raw.chunks_exact(2)) {
            *sample = u16::from_be_bytes([bytes[0], bytes[1]]);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // PWM
    // -----------------------------------------------------------------------

    /// Set an 8-bit duty cycle, rescaled to the full 16-bit range
    /// (0 → 0, 255 → 65535).
    pub async fn analog_write(&mut self, pin: u8, value: u8) -> Result<PwmUpdate, SeesawError<I2C::Error>> {
        self.analog_write_16(pin, scale_duty_8_to_16(value)).await
    }

    /// Set a 16-bit duty cycle, sent as-is.
    pub async fn analog_write_16(&mut self, pin: u8, value: u16) -> Result<PwmUpdate, SeesawError<I2C::Error>> {
        self.write_pwm_register(SEESAW_TIMER_PWM, pin, value).await
    }

    /// Set the PWM frequency (Hz) of the channel routed to `pin`.
    ///
    /// SAMD09/SAMD11 firmware maps the request to the closest fixed
    /// frequency. Channels sharing a timer (PWM pins 4/5 and 6/7 on the
    /// SAMD09 breakout) change together: setting one also retunes its pair.
    pub async fn set_pwm_freq(&mut self, pin: u8, freq: u16) -> Result<PwmUpdate, SeesawError<I2C::Error>> {
        self.write_pwm_register(SEESAW_TIMER_FREQ, pin, freq).await
    }

    async fn write_pwm_register(
        &mut self,
        function: u8,
        pin: u8,
        value: u16,
    ) -> Result<PwmUpdate, SeesawError<I2C::Error>> {
        let Some(channel) = self.config.pins.pwm_channel(pin) else {
            #[cfg(feature = "defmt")]
            defmt::debug!("pin {} has no PWM channel, ignored", pin);
            return Ok(PwmUpdate::Unsupported);
        };

        let [hi, lo] = value.to_be_bytes();
        self.driver
            .write(SEESAW_TIMER_BASE, function, &[channel, hi, lo])
            .await?;
        Ok(PwmUpdate::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeesawConfig;
    use crate::testing::{i2c_read, i2c_write, RecordingDelay, ADDR};
    use embassy_futures::block_on;
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
    fn eight_bit_duty_scales_to_sixteen_bit() {
        assert_eq!(scale_duty_8_to_16(0), 0);
        assert_eq!(scale_duty_8_to_16(255), 65535);
        for v in 0..=255u8 {
            let expected = (u32::from(v) * 65535 + 127) / 255;
            assert_eq!(u32::from(scale_duty_8_to_16(v)), expected);
        }
    }

    #[test]
    fn analog_read_settles_then_spaces_conversions() {
        // Pin 3 is ADC channel 1 -> register 0x08.
        let mut ss = seesaw(&[i2c_write(vec![0x09, 0x08]), i2c_read(vec![0x03, 0xFF])]);

        let reading = block_on(ss.analog_read(3)).unwrap();
        assert_eq!(reading, AnalogReading::Sampled(1023));
        assert_eq!(reading.value(), 1023);

        let delay = finish(ss);
        assert_eq!(delay.calls_us, vec![500, 1_000]);
    }

    #[test]
    fn analog_read_on_unsupported_pin_touches_nothing() {
        let mut ss = seesaw(&[]);

        let reading = block_on(ss.analog_read(9)).unwrap();
        assert_eq!(reading, AnalogReading::Unsupported);
        assert_eq!(reading.value(), 0);
        assert_eq!(reading.sample(), None);

        let delay = finish(ss);
        assert!(delay.calls_us.is_empty());
    }

    #[test]
    fn analog_read_bulk_decodes_each_channel_big_endian() {
        let mut ss = seesaw(&[
            i2c_write(vec![0x09, 0x07]),
            i2c_read(vec![0x00, 0x10, 0x01, 0x00, 0x03, 0xFF]),
        ]);

        let mut out = [0u16; 3];
        block_on(ss.analog_read_bulk(&mut out)).unwrap();
        assert_eq!(out, [0x0010, 0x0100, 0x03FF]);

        finish(ss);
    }

    #[test]
    fn analog_read_bulk_rejects_more_channels_than_available() {
        let mut ss = seesaw(&[]);

        let mut out = [0u16; ADC_CHANNEL_COUNT + 1];
        assert_eq!(
            block_on(ss.analog_read_bulk(&mut out)),
            Err(SeesawError::TooManyChannels)
        );

        finish(ss);
    }

    #[test]
    fn analog_write_sends_channel_and_scaled_value() {
        // Pin 6 is PWM channel 2.
        let mut ss = seesaw(&[
            i2c_write(vec![0x08, 0x01, 0x02, 0xFF, 0xFF]),
            i2c_write(vec![0x08, 0x01, 0x02, 0x80, 0x80]),
            i2c_write(vec![0x08, 0x01, 0x00, 0x12, 0x34]),
        ]);

        assert_eq!(block_on(ss.analog_write(6, 255)).unwrap(), PwmUpdate::Applied);
        assert_eq!(block_on(ss.analog_write(6, 128)).unwrap(), PwmUpdate::Applied);
        assert_eq!(block_on(ss.analog_write_16(4, 0x1234)).unwrap(), PwmUpdate::Applied);

        finish(ss);
    }

    #[test]
    fn set_pwm_freq_writes_frequency_register() {
        let mut ss = seesaw(&[i2c_write(vec![0x08, 0x02, 0x03, 0x03, 0xE8])]);

        assert_eq!(block_on(ss.set_pwm_freq(7, 1000)).unwrap(), PwmUpdate::Applied);

        finish(ss);
    }

    #[test]
    fn pwm_on_unsupported_pin_touches_nothing() {
        let mut ss = seesaw(&[]);

        assert_eq!(block_on(ss.analog_write(2, 100)).unwrap(), PwmUpdate::Unsupported);
        assert_eq!(block_on(ss.analog_write_16(12, 100)).unwrap(), PwmUpdate::Unsupported);
        assert_eq!(block_on(ss.set_pwm_freq(0, 500)).unwrap(), PwmUpdate::Unsupported);

        finish(ss);
    }
}
