// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial Peripheral Interface (SPI) abstraction layer.
//!
//! - `SpiBus` is a bit-banged mode 0 master (CPOL=0, CPHA=0), MSB first, 8-bit words.
//! - `ChipSelect` is an active-low GPIO output wrapper for manual CS control.
//!
//! The bus runs as fast as the GPIOs toggle; no delay is inserted between edges.

use embedded_hal::blocking::spi::{Transfer, Write};
use embedded_hal::digital::v2::{InputPin, OutputPin};

/// Error type for `SpiBus` transfers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A GPIO operation failed.
    Pin,
}

/// Bit-banged SPI master on `SCLK`, `MOSI` and `MISO`.
pub struct SpiBus<SCLK, MOSI, MISO> {
    sclk: SCLK,
    mosi: MOSI,
    miso: MISO,
}

impl<SCLK, MOSI, MISO> SpiBus<SCLK, MOSI, MISO>
where
    SCLK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
{
    /// Take ownership of the pins and park the clock low.
    pub fn new(mut sclk: SCLK, mosi: MOSI, miso: MISO) -> Self {
        sclk.set_low().ok();
        Self { sclk, mosi, miso }
    }

    /// Perform a blocking, full-duplex transfer of one byte.
    pub fn transfer_byte(&mut self, byte: u8) -> Result<u8, Error> {
        let mut received = 0u8;
        for i in (0..8).rev() {
            let res = if (byte >> i) & 1 != 0 {
                self.mosi.set_high()
            } else {
                self.mosi.set_low()
            };
            res.map_err(|_| Error::Pin)?;

            // Slave samples on the rising edge, we sample with it
            self.sclk.set_high().map_err(|_| Error::Pin)?;
            let bit = self.miso.is_high().map_err(|_| Error::Pin)?;
            received = (received << 1) | bit as u8;
            self.sclk.set_low().map_err(|_| Error::Pin)?;
        }
        Ok(received)
    }

    /// Send a byte, ignoring the response.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        let _ = self.transfer_byte(byte)?;
        Ok(())
    }

    /// Read a byte, sending 0x00.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, Error> {
        self.transfer_byte(0x00)
    }

    /// Transfer a byte buffer in-place.
    pub fn transfer_in_place(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        for b in buf.iter_mut() {
            *b = self.transfer_byte(*b)?;
        }
        Ok(())
    }

    pub fn free(self) -> (SCLK, MOSI, MISO) {
        (self.sclk, self.mosi, self.miso)
    }
}

impl<SCLK, MOSI, MISO> Write<u8> for SpiBus<SCLK, MOSI, MISO>
where
    SCLK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
{
    type Error = Error;

    fn write(&mut self, words: &[u8]) -> Result<(), Error> {
        for &w in words {
            self.write_byte(w)?;
        }
        Ok(())
    }
}

impl<SCLK, MOSI, MISO> Transfer<u8> for SpiBus<SCLK, MOSI, MISO>
where
    SCLK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
{
    type Error = Error;

    fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'w [u8], Error> {
        self.transfer_in_place(words)?;
        Ok(words)
    }
}

/// Manual chip-select line, active-low, generic over any GPIO output.
pub struct ChipSelect<PIN> {
    pin: PIN,
}

impl<PIN: OutputPin> ChipSelect<PIN> {
    /// Create an active-low chip select and set to the inactive state (i.e., high).
    pub fn active_low(mut pin: PIN) -> Self {
        pin.set_high().ok();
        Self { pin }
    }

    /// Assert the chip select.
    #[inline]
    pub fn select(&mut self) {
        self.pin.set_low().ok();
    }

    /// Deassert the chip select.
    #[inline]
    pub fn deselect(&mut self) {
        self.pin.set_high().ok();
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}
