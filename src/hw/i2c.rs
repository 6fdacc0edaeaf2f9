// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bit-banged I2C master on two open-drain GPIO lines.
//!
//! - `set_high()` releases a line (the pull-up takes it high), `set_low()` drives it low.
//! - Both lines must be readable so the master can sample SDA and notice clock stretching.
//! - Implements the `embedded-hal` blocking I2C traits so device drivers stay bus-agnostic.
//!
//! With a 5 µs half period the clock runs at about 100 kHz, minus GPIO overhead.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::i2c::{Read, Write, WriteRead};
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::config::{I2C_HALF_PERIOD_US, I2C_STRETCH_LIMIT};

/// Error type for `I2cBus` transactions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A GPIO operation failed.
    Pin,
    /// No device acknowledged the address byte.
    AddressNack,
    /// The device did not acknowledge a data byte.
    DataNack,
    /// A device held SCL low for longer than the stretch limit.
    ClockStretchTimeout,
}

/// I2C master driving `SCL` and `SDA` by hand, paced by `D`.
pub struct I2cBus<SCL, SDA, D> {
    scl: SCL,
    sda: SDA,
    delay: D,
    half_period_us: u32,
}

impl<SCL, SDA, D> I2cBus<SCL, SDA, D>
where
    SCL: OutputPin + InputPin,
    SDA: OutputPin + InputPin,
    D: DelayUs<u32>,
{
    /// Take ownership of the lines and release both (bus idle).
    pub fn new(mut scl: SCL, mut sda: SDA, delay: D) -> Self {
        sda.set_high().ok();
        scl.set_high().ok();
        Self {
            scl,
            sda,
            delay,
            half_period_us: I2C_HALF_PERIOD_US,
        }
    }

    /// Release the pins and the delay provider.
    pub fn free(self) -> (SCL, SDA, D) {
        (self.scl, self.sda, self.delay)
    }

    #[inline]
    fn wait(&mut self) {
        self.delay.delay_us(self.half_period_us);
    }

    /// Release SCL and wait for any slave stretching the clock.
    fn scl_high(&mut self) -> Result<(), Error> {
        self.scl.set_high().map_err(|_| Error::Pin)?;
        for _ in 0..I2C_STRETCH_LIMIT {
            if self.scl.is_high().map_err(|_| Error::Pin)? {
                return Ok(());
            }
            self.wait();
        }
        Err(Error::ClockStretchTimeout)
    }

    #[inline]
    fn scl_low(&mut self) -> Result<(), Error> {
        self.scl.set_low().map_err(|_| Error::Pin)
    }

    #[inline]
    fn sda_set(&mut self, high: bool) -> Result<(), Error> {
        let res = if high {
            self.sda.set_high()
        } else {
            self.sda.set_low()
        };
        res.map_err(|_| Error::Pin)
    }

    /// START, or repeated START when SCL is low.
    fn start(&mut self) -> Result<(), Error> {
        self.sda_set(true)?;
        self.scl_high()?;
        self.wait();
        self.sda_set(false)?;
        self.wait();
        self.scl_low()
    }

    fn stop(&mut self) -> Result<(), Error> {
        self.sda_set(false)?;
        self.wait();
        self.scl_high()?;
        self.wait();
        self.sda_set(true)?;
        self.wait();
        Ok(())
    }

    fn write_bit(&mut self, bit: bool) -> Result<(), Error> {
        self.sda_set(bit)?;
        self.wait();
        self.scl_high()?;
        self.wait();
        self.scl_low()
    }

    fn read_bit(&mut self) -> Result<bool, Error> {
        self.sda_set(true)?;
        self.wait();
        self.scl_high()?;
        let bit = self.sda.is_high().map_err(|_| Error::Pin)?;
        self.wait();
        self.scl_low()?;
        Ok(bit)
    }

    /// Clock out one byte MSB first. Returns true if the slave acknowledged.
    fn write_byte(&mut self, byte: u8) -> Result<bool, Error> {
        for i in (0..8).rev() {
            self.write_bit((byte >> i) & 1 != 0)?;
        }
        // ACK is SDA held low by the slave
        Ok(!self.read_bit()?)
    }

    /// Clock in one byte MSB first, then ACK (more to come) or NACK (last byte).
    fn read_byte(&mut self, ack: bool) -> Result<u8, Error> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()? as u8;
        }
        self.write_bit(!ack)?;
        Ok(byte)
    }

    fn send_address(&mut self, address: u8, read: bool) -> Result<(), Error> {
        let byte = (address << 1) | read as u8;
        if self.write_byte(byte)? {
            Ok(())
        } else {
            Err(Error::AddressNack)
        }
    }

    fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        for &b in bytes {
            if !self.write_byte(b)? {
                return Err(Error::DataNack);
            }
        }
        Ok(())
    }

    fn receive_bytes(&mut self, buffer: &mut [u8]) -> Result<(), Error> {
        let last = buffer.len().saturating_sub(1);
        for (i, b) in buffer.iter_mut().enumerate() {
            *b = self.read_byte(i < last)?;
        }
        Ok(())
    }

    /// Always end with STOP so a failed transaction leaves the bus idle. The transaction's own
    /// error takes precedence over a failed STOP.
    fn finish(&mut self, result: Result<(), Error>) -> Result<(), Error> {
        let stop = self.stop();
        result?;
        stop
    }
}

impl<SCL, SDA, D> Write for I2cBus<SCL, SDA, D>
where
    SCL: OutputPin + InputPin,
    SDA: OutputPin + InputPin,
    D: DelayUs<u32>,
{
    type Error = Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Error> {
        let result = self
            .start()
            .and_then(|_| self.send_address(address, false))
            .and_then(|_| self.send_bytes(bytes));
        self.finish(result)
    }
}

impl<SCL, SDA, D> Read for I2cBus<SCL, SDA, D>
where
    SCL: OutputPin + InputPin,
    SDA: OutputPin + InputPin,
    D: DelayUs<u32>,
{
    type Error = Error;

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Error> {
        let result = self
            .start()
            .and_then(|_| self.send_address(address, true))
            .and_then(|_| self.receive_bytes(buffer));
        self.finish(result)
    }
}

impl<SCL, SDA, D> WriteRead for I2cBus<SCL, SDA, D>
where
    SCL: OutputPin + InputPin,
    SDA: OutputPin + InputPin,
    D: DelayUs<u32>,
{
    type Error = Error;

    fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Error> {
        let result = self
            .start()
            .and_then(|_| self.send_address(address, false))
            .and_then(|_| self.send_bytes(bytes))
            .and_then(|_| self.start())
            .and_then(|_| self.send_address(address, true))
            .and_then(|_| self.receive_bytes(buffer));
        self.finish(result)
    }
}
