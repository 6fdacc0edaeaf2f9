// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F767ZI Nucleo board, wired through its Arduino header.
//!
//! | Signal | Header | Pin |
//! | ------ | ------ | --- |
//! | MPU-6050 SCL / SDA | SCL / SDA | PB8 / PB9 |
//! | OLED MOSI | D9 | PD15 |
//! | OLED SCLK | D10 | PD14 |
//! | OLED D/C | D11 | PA7 |
//! | OLED CS | D12 | PA6 |
//! | OLED RESET | D13 | PA5 |
//! | OLED MISO | D5 | PE11 |

use stm32f7xx_hal::{
    gpio::{
        gpioa, gpiob, gpiod, gpioe, Alternate, Floating, Input, OpenDrain, Output, PushPull,
    },
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub usart3: Usart3Pins,
    pub mpu: MpuPins,
    pub oled: OledPins,
}

pub struct LedPins {
    pub green: gpiob::PB0<Output<PushPull>>, // LD1
    pub blue: gpiob::PB7<Output<PushPull>>,  // LD2
    pub red: gpiob::PB14<Output<PushPull>>,  // LD3
}

/// USART3, routed to the ST-LINK virtual COM port
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Bit-banged I2C to the MPU-6050. Open drain, pulled up on the breakout.
pub struct MpuPins {
    pub scl: gpiob::PB8<Output<OpenDrain>>,
    pub sda: gpiob::PB9<Output<OpenDrain>>,
}

/// Bit-banged SPI plus control lines to the SSD1306 OLED
pub struct OledPins {
    pub mosi: gpiod::PD15<Output<PushPull>>,
    pub sclk: gpiod::PD14<Output<PushPull>>,
    pub dc: gpioa::PA7<Output<PushPull>>,
    pub cs: gpioa::PA6<Output<PushPull>>,
    pub reset: gpioa::PA5<Output<PushPull>>,
    pub miso: gpioe::PE11<Input<Floating>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(
        gpioa: pac::GPIOA,
        gpiob: pac::GPIOB,
        gpiod: pac::GPIOD,
        gpioe: pac::GPIOE,
    ) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            leds: LedPins {
                green: gpiob.pb0.into_push_pull_output(),
                blue: gpiob.pb7.into_push_pull_output(),
                red: gpiob.pb14.into_push_pull_output(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            mpu: MpuPins {
                scl: gpiob.pb8.into_open_drain_output(),
                sda: gpiob.pb9.into_open_drain_output(),
            },

            oled: OledPins {
                mosi: gpiod.pd15.into_push_pull_output(),
                sclk: gpiod.pd14.into_push_pull_output(),
                dc: gpioa.pa7.into_push_pull_output(),
                cs: gpioa.pa6.into_push_pull_output(),
                reset: gpioa.pa5.into_push_pull_output(),
                miso: gpioe.pe11.into_floating_input(),
            },
        }
    }
}
