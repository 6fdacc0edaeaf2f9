// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status LED. The firmware lights one while the loop is paused on a sensor or display fault.

use embedded_hal::digital::v2::OutputPin;

/// Whether the LED is lit by driving its pin high or low.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    /// Pin level that produces the logical state `on`.
    #[inline]
    fn pin_high_for(self, on: bool) -> bool {
        match self {
            ActiveLevel::High => on,
            ActiveLevel::Low => !on,
        }
    }
}

/// LED that remembers its wiring and the last state it was driven to.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Wrap `pin` and switch the LED off.
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        let mut led = Self {
            pin,
            active,
            is_on: false,
        };
        led.set(false);
        led
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Drive the LED logically on (true) or off (false). Pin errors are ignored.
    pub fn set(&mut self, on: bool) {
        if self.active.pin_high_for(on) {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
        self.is_on = on;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn toggle(&mut self) {
        self.set(!self.is_on);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Probe(Rc<Cell<bool>>);

    impl OutputPin for Probe {
        type Error = Infallible;

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.set(true);
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.0.set(false);
            Ok(())
        }
    }

    #[test]
    fn test_active_high_starts_off() {
        let level = Rc::new(Cell::new(true));
        let mut led = Led::active_high(Probe(level.clone()));
        assert!(!level.get());
        assert!(!led.is_on());

        led.on();
        assert!(level.get());
        assert!(led.is_on());
    }

    #[test]
    fn test_active_low_inverts() {
        let level = Rc::new(Cell::new(false));
        let mut led = Led::active_low(Probe(level.clone()));
        assert!(level.get());

        led.toggle();
        assert!(!level.get());
        led.toggle();
        assert!(level.get());
        assert!(!led.is_on());
    }
}
