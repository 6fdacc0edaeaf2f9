// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use cortex_m::delay::Delay;
    use cortex_m_rt::entry;
    use log::{info, warn};
    use panic_halt as _;

    use stm32f7xx_hal::{
        pac,
        prelude::*,
        serial::{Config, Serial},
    };

    use tiltball::config::{BALL_START, CALIBRATION_SAMPLES, LOG_LEVEL, USART_BAUD};
    use tiltball::drivers::{Mpu6050, Ssd1306};
    use tiltball::hw::{logger, pins::BoardPins, watchdog, ChipSelect, I2cBus, Led, SpiBus, Usart};
    use tiltball::sim::{Ball, EntityId, Scene};

    #[entry]
    fn main() -> ! {
        watchdog::disable();

        // Peripherals
        let dp = pac::Peripherals::take().unwrap();
        let cp = cortex_m::Peripherals::take().unwrap();

        // Clocks
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();

        let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);

        // USART3 (ST-LINK VCP) as the log output
        let usart_cfg = Config {
            baud_rate: USART_BAUD.bps(),
            ..Default::default()
        };
        let serial = Serial::new(
            dp.USART3,
            (pins.usart3.tx, pins.usart3.rx),
            &clocks,
            usart_cfg,
        );
        logger::init(Usart::new(serial), LOG_LEVEL).ok();
        info!("tiltball starting");

        // Lit while the loop is paused on an error
        let mut led_red = Led::active_high(pins.leds.red);
        let mut delay = Delay::new(cp.SYST, clocks.sysclk().raw());

        // OLED
        let oled_bus = SpiBus::new(pins.oled.sclk, pins.oled.mosi, pins.oled.miso);
        let mut oled = Ssd1306::new(
            oled_bus,
            ChipSelect::active_low(pins.oled.cs),
            pins.oled.dc,
            pins.oled.reset,
        );
        while let Err(e) = oled.init(&mut delay) {
            led_red.on();
            warn!("oled init failed: {:?}", e);
        }

        // MPU-6050; the bus keeps the delay for bit timing from here on
        let mpu_bus = I2cBus::new(pins.mpu.scl, pins.mpu.sda, delay);
        let mut mpu = Mpu6050::new(mpu_bus);
        while let Err(e) = mpu.init() {
            led_red.on();
            warn!("mpu6050 init failed: {:?}", e);
        }
        match mpu.who_am_i() {
            Ok(id) => info!("mpu6050 WHO_AM_I = {:#04x}", id),
            Err(e) => warn!("mpu6050 WHO_AM_I failed: {:?}", e),
        }
        match mpu.calibrate(CALIBRATION_SAMPLES) {
            Ok(offset) => info!("gyro offset {:?}", offset),
            Err(e) => warn!("gyro calibration failed, using zero offset: {:?}", e),
        }
        led_red.off();

        let mut scene = Scene::new([Ball::new(EntityId(0), BALL_START).into()]);
        if let Err(e) = scene.present(&mut oled) {
            warn!("first frame failed: {:?}", e);
        }

        loop {
            match scene.tick(&mut mpu, &mut oled) {
                Ok(()) => led_red.off(),
                Err(e) => {
                    led_red.on();
                    warn!("tick paused: {:?}", e);
                }
            }
        }
    }
}

/// Host builds only carry the library; the firmware entry point exists for the MCU target.
#[cfg(not(target_os = "none"))]
fn main() {}
