//! Seesaw register address constants.
//!
//! The seesaw firmware uses a two-byte register addressing scheme:
//! - Byte 1: Module ID (the "base" of a functional block)
//! - Byte 2: Function ID (the register offset within that module)
//!
//! The values are a fixed contract with the remote firmware; nothing here is
//! negotiated at runtime.

// ---------------------------------------------------------------------------
// Module IDs
// ---------------------------------------------------------------------------

/// Status module: hardware id, version, options, software reset.
pub const SEESAW_STATUS_BASE: u8 = 0x00;

/// GPIO module.
pub const SEESAW_GPIO_BASE: u8 = 0x01;

/// First serial (SERCOM) module. SERCOM *n* lives at `SEESAW_SERCOM0_BASE + n`.
pub const SEESAW_SERCOM0_BASE: u8 = 0x02;

/// Timer / PWM module.
pub const SEESAW_TIMER_BASE: u8 = 0x08;

/// ADC module.
pub const SEESAW_ADC_BASE: u8 = 0x09;

pub const SEESAW_DAC_BASE: u8 = 0x0A;
pub const SEESAW_INTERRUPT_BASE: u8 = 0x0B;
pub const SEESAW_DAP_BASE: u8 = 0x0C;

/// EEPROM module. The function byte is the EEPROM byte address.
pub const SEESAW_EEPROM_BASE: u8 = 0x0D;

pub const SEESAW_NEOPIXEL_BASE: u8 = 0x0E;
pub const SEESAW_TOUCH_BASE: u8 = 0x0F;
pub const SEESAW_KEYPAD_BASE: u8 = 0x10;
pub const SEESAW_ENCODER_BASE: u8 = 0x11;

// ---------------------------------------------------------------------------
// Status module registers
// ---------------------------------------------------------------------------

/// Hardware identification register (8-bit, read-only).
pub const SEESAW_STATUS_HW_ID: u8 = 0x01;

/// Firmware version register (32-bit). Bits [31:16] date code, [15:0] product id.
pub const SEESAW_STATUS_VERSION: u8 = 0x02;

/// Compiled-in module bitmask (32-bit). Bit *k* set = module id *k* present.
pub const SEESAW_STATUS_OPTIONS: u8 = 0x03;

pub const SEESAW_STATUS_TEMP: u8 = 0x04;

/// Software reset register. Writing [`SEESAW_SWRST_VALUE`] resets all registers.
pub const SEESAW_STATUS_SWRST: u8 = 0x7F;

/// Value expected in [`SEESAW_STATUS_HW_ID`] for a seesaw device.
pub const SEESAW_HW_ID_CODE: u8 = 0x55;

/// Sentinel written to [`SEESAW_STATUS_SWRST`].
pub const SEESAW_SWRST_VALUE: u8 = 0xFF;

// ---------------------------------------------------------------------------
// GPIO module registers (all 32-bit bulk masks, big-endian)
// ---------------------------------------------------------------------------

pub const SEESAW_GPIO_DIRSET_BULK: u8 = 0x02;
pub const SEESAW_GPIO_DIRCLR_BULK: u8 = 0x03;
pub const SEESAW_GPIO_BULK: u8 = 0x04;
pub const SEESAW_GPIO_BULK_SET: u8 = 0x05;
pub const SEESAW_GPIO_BULK_CLR: u8 = 0x06;
pub const SEESAW_GPIO_BULK_TOGGLE: u8 = 0x07;
pub const SEESAW_GPIO_INTENSET: u8 = 0x08;
pub const SEESAW_GPIO_INTENCLR: u8 = 0x09;

/// Interrupt flag register. Reading it clears the flags and releases INT.
pub const SEESAW_GPIO_INTFLAG: u8 = 0x0A;

pub const SEESAW_GPIO_PULLENSET: u8 = 0x0B;
pub const SEESAW_GPIO_PULLENCLR: u8 = 0x0C;

// ---------------------------------------------------------------------------
// Timer module registers
// ---------------------------------------------------------------------------

pub const SEESAW_TIMER_STATUS: u8 = 0x00;

/// PWM duty cycle: `[channel, value_hi, value_lo]`.
pub const SEESAW_TIMER_PWM: u8 = 0x01;

/// PWM frequency: `[channel, freq_hi, freq_lo]`.
pub const SEESAW_TIMER_FREQ: u8 = 0x02;

// ---------------------------------------------------------------------------
// ADC module registers
// ---------------------------------------------------------------------------

pub const SEESAW_ADC_STATUS: u8 = 0x00;
pub const SEESAW_ADC_INTEN: u8 = 0x02;
pub const SEESAW_ADC_INTENCLR: u8 = 0x03;
pub const SEESAW_ADC_WINMODE: u8 = 0x04;
pub const SEESAW_ADC_WINTHRESH: u8 = 0x05;

/// First ADC channel register. Channel *n* is read at `SEESAW_ADC_CHANNEL_OFFSET + n`.
pub const SEESAW_ADC_CHANNEL_OFFSET: u8 = 0x07;

// ---------------------------------------------------------------------------
// SERCOM module registers
// ---------------------------------------------------------------------------

pub const SEESAW_SERCOM_STATUS: u8 = 0x00;
pub const SEESAW_SERCOM_INTEN: u8 = 0x02;
pub const SEESAW_SERCOM_INTENCLR: u8 = 0x03;
pub const SEESAW_SERCOM_BAUD: u8 = 0x04;
pub const SEESAW_SERCOM_DATA: u8 = 0x05;

/// DATA_RDY bit in the SERCOM INTEN register.
pub const SEESAW_SERCOM_INTEN_DATA_RDY: u8 = 0x01;

// ---------------------------------------------------------------------------
// EEPROM layout
// ---------------------------------------------------------------------------

/// EEPROM byte holding the persisted I2C address.
pub const SEESAW_EEPROM_I2C_ADDR: u8 = 0x3F;

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// Default I2C address of a seesaw breakout.
pub const DEFAULT_ADDRESS: u8 = 0x49;

/// Largest payload staged into a single write transaction.
pub const MAX_WRITE_PAYLOAD: usize = 32;

/// Default maximum bytes requested per read transaction.
pub const DEFAULT_MAX_READ_CHUNK: usize = 32;

/// Number of serial modules addressable after [`SEESAW_SERCOM0_BASE`].
pub const SERCOM_COUNT: u8 = 6;

/// Number of ADC channels exposed by the firmware.
pub const ADC_CHANNEL_COUNT: usize = 4;

/// Number of PWM channels exposed by the firmware.
pub const PWM_CHANNEL_COUNT: usize = 4;

/// Number of pins addressable by a bulk GPIO mask.
pub const GPIO_PIN_COUNT: u8 = 32;
