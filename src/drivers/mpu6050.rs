// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! InvenSense MPU-6050 accelerometer/gyroscope over I2C.
//!
//! This module handles register access, gyro zero-offset calibration and the tilt angles the demo
//! steers with. The chip is mounted sideways on the breadboard, so roll and pitch are derived from
//! different axes than in the datasheet's reference orientation:
//!
//! - roll  = atan(az / ax)
//! - pitch = -atan(ay / sqrt(ax² + az²))
//!
//! Both are in degrees, range [-90, 90].

use core::fmt;

use embedded_hal::blocking::i2c::{Write, WriteRead};
use log::debug;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::sim::TiltSensor;

/// 7-bit bus address with AD0 tied low.
pub const ADDRESS: u8 = 0x68;

/// Expected contents of `WHO_AM_I`.
pub const DEVICE_ID: u8 = 0x68;

pub use crate::config::CALIBRATION_SAMPLES as DEFAULT_CALIBRATION_SAMPLES;

// Register addresses
pub mod reg {
    pub const GYRO_CONFIG: u8 = 0x1B;
    pub const ACCEL_CONFIG: u8 = 0x1C;
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    pub const GYRO_XOUT_H: u8 = 0x43;
    pub const PWR_MGMT_1: u8 = 0x6B;
    pub const WHO_AM_I: u8 = 0x75;
}

/// PWR_MGMT_1: wake up, clock from the X gyro PLL
const CLOCK_PLL_GYRO_X: u8 = 0x01;
/// ACCEL_CONFIG: ±2 g
const ACCEL_RANGE_2G: u8 = 0x00;
/// GYRO_CONFIG: ±500 °/s
const GYRO_RANGE_500DPS: u8 = 0x08;

/// Error type for `Mpu6050` operations.
#[derive(Debug, Eq, PartialEq)]
pub enum Error<E> {
    /// I2C transaction failed.
    Bus(E),
}

/// Raw signed 16-bit sample for three axes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Axes {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Axes {
    fn from_be(bytes: &[u8]) -> Self {
        Self {
            x: i16::from_be_bytes([bytes[0], bytes[1]]),
            y: i16::from_be_bytes([bytes[2], bytes[3]]),
            z: i16::from_be_bytes([bytes[4], bytes[5]]),
        }
    }

    fn saturating_sub(self, rhs: Axes) -> Axes {
        Axes {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
            z: self.z.saturating_sub(rhs.z),
        }
    }
}

/// One burst read of the sensor. Gyro values are offset-corrected, accel values are not since
/// they depend on how the board is held at calibration time.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Reading {
    pub accel: Axes,
    pub temperature: i16,
    pub gyro: Axes,
}

impl Reading {
    /// Roll in degrees.
    pub fn roll(&self) -> f32 {
        atan_deg(self.accel.z as f32, self.accel.x as f32)
    }

    /// Pitch in degrees.
    pub fn pitch(&self) -> f32 {
        let x = self.accel.x as f32;
        let z = self.accel.z as f32;
        -atan_deg(self.accel.y as f32, (x * x + z * z).sqrt())
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "|acX: {} |acY: {} |acZ: {} |gyX: {} |gyY: {} |gyZ: {}",
            self.accel.x, self.accel.y, self.accel.z, self.gyro.x, self.gyro.y, self.gyro.z
        )
    }
}

/// `atan(num / den)` in degrees; a zero denominator gives ±90 by the sign of `num`.
fn atan_deg(num: f32, den: f32) -> f32 {
    if den == 0.0 {
        return if num > 0.0 {
            90.0
        } else if num < 0.0 {
            -90.0
        } else {
            0.0
        };
    }
    (num / den).atan().to_degrees()
}

/// MPU-6050 driver owning its I2C bus.
pub struct Mpu6050<I2C> {
    i2c: I2C,
    reading: Reading,
    gyro_offset: Axes,
}

impl<I2C, E> Mpu6050<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    /// Wrap the bus. Call [`Mpu6050::init`] before reading.
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            reading: Reading::default(),
            gyro_offset: Axes::default(),
        }
    }

    /// Release the bus.
    pub fn free(self) -> I2C {
        self.i2c
    }

    fn write_reg(&mut self, addr: u8, value: u8) -> Result<(), Error<E>> {
        self.i2c.write(ADDRESS, &[addr, value]).map_err(Error::Bus)
    }

    fn read_regs(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c.write_read(ADDRESS, &[addr], buf).map_err(Error::Bus)
    }

    /// Wake the device and set the accelerometer to ±2 g.
    pub fn init(&mut self) -> Result<(), Error<E>> {
        self.write_reg(reg::PWR_MGMT_1, CLOCK_PLL_GYRO_X)?;
        self.write_reg(reg::ACCEL_CONFIG, ACCEL_RANGE_2G)?;
        debug!("mpu6050 awake, accel ±2 g");
        Ok(())
    }

    /// Set the gyroscope full-scale range to ±500 °/s.
    pub fn set_gyro_range_500dps(&mut self) -> Result<(), Error<E>> {
        self.write_reg(reg::GYRO_CONFIG, GYRO_RANGE_500DPS)
    }

    /// Read the identity register; a genuine part returns [`DEVICE_ID`].
    pub fn who_am_i(&mut self) -> Result<u8, Error<E>> {
        let mut buf = [0u8; 1];
        self.read_regs(reg::WHO_AM_I, &mut buf)?;
        Ok(buf[0])
    }

    /// Read the gyroscope without offset correction.
    pub fn gyro_raw(&mut self) -> Result<Axes, Error<E>> {
        let mut buf = [0u8; 6];
        self.read_regs(reg::GYRO_XOUT_H, &mut buf)?;
        Ok(Axes::from_be(&buf))
    }

    /// Average `samples` raw gyro readings and store them as the zero offset.
    ///
    /// The board must be held still. `samples == 0` leaves the offset unchanged.
    pub fn calibrate(&mut self, samples: u16) -> Result<Axes, Error<E>> {
        if samples == 0 {
            return Ok(self.gyro_offset);
        }

        let (mut sx, mut sy, mut sz) = (0i32, 0i32, 0i32);
        for _ in 0..samples {
            let g = self.gyro_raw()?;
            sx += g.x as i32;
            sy += g.y as i32;
            sz += g.z as i32;
        }

        let n = samples as i32;
        self.gyro_offset = Axes {
            x: (sx / n) as i16,
            y: (sy / n) as i16,
            z: (sz / n) as i16,
        };
        debug!(
            "gyro offset x={} y={} z={}",
            self.gyro_offset.x, self.gyro_offset.y, self.gyro_offset.z
        );
        Ok(self.gyro_offset)
    }

    /// Burst-read accel, temperature and gyro. The previous reading is kept on error.
    pub fn read_values(&mut self) -> Result<&Reading, Error<E>> {
        let mut buf = [0u8; 14];
        self.read_regs(reg::ACCEL_XOUT_H, &mut buf)?;

        self.reading = Reading {
            accel: Axes::from_be(&buf[0..6]),
            temperature: i16::from_be_bytes([buf[6], buf[7]]),
            gyro: Axes::from_be(&buf[8..14]).saturating_sub(self.gyro_offset),
        };
        Ok(&self.reading)
    }

    #[inline]
    pub fn reading(&self) -> &Reading {
        &self.reading
    }

    #[inline]
    pub fn gyro_offset(&self) -> Axes {
        self.gyro_offset
    }
}

impl<I2C, E> TiltSensor for Mpu6050<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    type Error = Error<E>;

    fn read_values(&mut self) -> Result<(), Self::Error> {
        Mpu6050::read_values(self).map(|_| ())
    }

    fn pitch(&self) -> f32 {
        self.reading.pitch()
    }

    fn roll(&self) -> f32 {
        self.reading.roll()
    }
}
