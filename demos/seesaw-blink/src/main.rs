//! Seesaw blink example
//!
//! Demonstrates basic usage of the seesaw-driver crate on the Raspberry Pi
//! Pico 2. Identifies the seesaw, blinks an LED on a seesaw GPIO, fades a
//! second LED with PWM, and logs the ADC reading of a potentiometer via
//! defmt.
//!
//! # Wiring
//!
//! | Signal      | Pico 2 Pin | Seesaw pin | Notes                     |
//! |-------------|------------|------------|---------------------------|
//! | I2C0 SDA    | GP20       | SDA        |                           |
//! | I2C0 SCL    | GP21       | SCL        |                           |
//! | LED         |            | 15         | GPIO output               |
//! | LED (fade)  |            | 5          | PWM channel 1             |
//! | Pot wiper   |            | 2          | ADC channel 0             |
//! | Button      |            | 9          | To GND, internal pull-up  |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use seesaw_driver::{AnalogReading, PinMode, PinState, Seesaw, DEFAULT_ADDRESS};

const LED_PIN: u8 = 15;
const FADE_PIN: u8 = 5;
const POT_PIN: u8 = 2;
const BUTTON_PIN: u8 = 9;

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    // --- Seesaw ---
    let mut ss = Seesaw::new(i2c, DEFAULT_ADDRESS);

    if let Err(e) = ss.begin().await {
        error!("seesaw not found: {}", e);
        loop {
            Timer::after(Duration::from_secs(1)).await;
        }
    }

    match ss.get_version().await {
        Ok(version) => info!(
            "seesaw product {} (date code {})",
            version.product_id(),
            version.date_code()
        ),
        Err(e) => warn!("Version read failed: {}", e),
    }

    if let Err(e) = ss.pin_mode(LED_PIN, PinMode::Output).await {
        error!("Failed to configure LED pin: {}", e);
    }
    if let Err(e) = ss.pin_mode(BUTTON_PIN, PinMode::InputPullup).await {
        error!("Failed to configure button pin: {}", e);
    }

    info!("Seesaw blink started");

    let mut led = PinState::Low;
    let mut duty: u8 = 0;

    loop {
        led = !led;
        if let Err(e) = ss.digital_write(LED_PIN, led).await {
            error!("LED write failed: {}", e);
        }

        duty = duty.wrapping_add(16);
        if let Err(e) = ss.analog_write(FADE_PIN, duty).await {
            error!("PWM write failed: {}", e);
        }

        match ss.analog_read(POT_PIN).await {
            Ok(AnalogReading::Sampled(level)) => info!("Pot: {}", level),
            Ok(AnalogReading::Unsupported) => warn!("Pin {} has no ADC channel", POT_PIN),
            Err(e) => error!("ADC read failed: {}", e),
        }

        // Button pulls the pin low when pressed.
        match ss.digital_read(BUTTON_PIN).await {
            Ok(false) => info!("Button pressed"),
            Ok(true) => {}
            Err(e) => error!("Button read failed: {}", e),
        }

        Timer::after(Duration::from_millis(500)).await;
    }
}
