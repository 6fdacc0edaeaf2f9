// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Solomon SSD1306 128×64 monochrome OLED over 4-wire SPI.
//!
//! Drawing goes to a 1 KiB frame buffer in RAM; `flush` copies the whole buffer to the panel. The
//! buffer uses the controller's page layout: byte `page * 128 + x` holds pixels `x`,
//! `8 * page .. 8 * page + 8`, least significant bit on top.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::spi::Write;
use embedded_hal::digital::v2::OutputPin;
use log::debug;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::hw::ChipSelect;
use crate::sim::{Buffering, DisplaySink, Glyph, Vector};

pub const WIDTH: usize = SCREEN_WIDTH as usize;
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

// Command bytes
pub mod cmd {
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_RAM: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const SET_START_LINE: u8 = 0x40;
    pub const MEMORY_MODE: u8 = 0x20;
    pub const COLUMN_ADDR: u8 = 0x21;
    pub const PAGE_ADDR: u8 = 0x22;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SEG_REMAP: u8 = 0xA1;
    pub const CHARGE_PUMP: u8 = 0x8D;
}

/// Power-up sequence for a 128×64 panel with the internal charge pump.
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80,
    cmd::SET_MULTIPLEX,
    (HEIGHT - 1) as u8,
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::CHARGE_PUMP,
    0x14,
    cmd::MEMORY_MODE,
    0x00, // horizontal addressing
    cmd::SEG_REMAP,
    cmd::COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_RAM,
    cmd::NORMAL_DISPLAY,
    cmd::DISPLAY_ON,
];

/// Error type for `Ssd1306` operations.
#[derive(Debug, Eq, PartialEq)]
pub enum Error<E> {
    /// SPI transfer failed.
    Spi(E),
    /// D/C or RESET line could not be driven.
    Pin,
}

/// Page-major 1 bpp frame buffer.
#[derive(Clone)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    pub fn clear(&mut self) {
        self.bytes = [0; BUFFER_SIZE];
    }

    /// Light or darken one pixel. Off-screen coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let idx = (y / 8) * WIDTH + x;
        let mask = 1u8 << (y % 8);
        if on {
            self.bytes[idx] |= mask;
        } else {
            self.bytes[idx] &= !mask;
        }
    }

    /// Off-screen pixels read as dark.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        self.bytes[(y / 8) * WIDTH + x] & (1 << (y % 8)) != 0
    }

    /// Replace the 8×8 region at `position` with `glyph`, clipping at the screen edges.
    pub fn draw_glyph(&mut self, position: Vector, glyph: &Glyph) {
        for row in 0..8 {
            for col in 0..8 {
                self.set_pixel(
                    position.x + col as i32,
                    position.y + row as i32,
                    glyph.pixel(col, row),
                );
            }
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// SSD1306 driver owning its SPI bus, chip select, D/C and RESET lines.
pub struct Ssd1306<SPI, CS, DC, RST> {
    spi: SPI,
    cs: ChipSelect<CS>,
    dc: DC,
    rst: RST,
    buffer: FrameBuffer,
}

impl<SPI, CS, DC, RST, E> Ssd1306<SPI, CS, DC, RST>
where
    SPI: Write<u8, Error = E>,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    pub fn new(spi: SPI, cs: ChipSelect<CS>, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            buffer: FrameBuffer::new(),
        }
    }

    /// Tear down this driver and return its constituent parts.
    pub fn free(self) -> (SPI, ChipSelect<CS>, DC, RST) {
        (self.spi, self.cs, self.dc, self.rst)
    }

    /// Pulse RESET, run the power-up sequence and blank the panel.
    pub fn init<D: DelayMs<u8>>(&mut self, delay: &mut D) -> Result<(), Error<E>> {
        self.rst.set_high().map_err(|_| Error::Pin)?;
        delay.delay_ms(1);
        self.rst.set_low().map_err(|_| Error::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(|_| Error::Pin)?;
        delay.delay_ms(10);

        self.send_commands(INIT_SEQUENCE)?;
        self.buffer.clear();
        self.flush_buffer()?;
        debug!("ssd1306 initialised");
        Ok(())
    }

    #[inline]
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    pub fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Error<E>> {
        transfer(&mut self.spi, &mut self.cs, &mut self.dc, false, cmds)
    }

    /// Copy the whole frame buffer to display RAM.
    pub fn flush_buffer(&mut self) -> Result<(), Error<E>> {
        self.send_commands(&[
            cmd::COLUMN_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::PAGE_ADDR,
            0,
            (HEIGHT / 8 - 1) as u8,
        ])?;

        transfer(
            &mut self.spi,
            &mut self.cs,
            &mut self.dc,
            true,
            self.buffer.as_bytes(),
        )
    }
}

/// Send `bytes` in one chip-select frame with D/C set to `data`.
///
/// Takes the lines separately so the frame buffer can be borrowed alongside them.
fn transfer<SPI, CS, DC, E>(
    spi: &mut SPI,
    cs: &mut ChipSelect<CS>,
    dc: &mut DC,
    data: bool,
    bytes: &[u8],
) -> Result<(), Error<E>>
where
    SPI: Write<u8, Error = E>,
    CS: OutputPin,
    DC: OutputPin,
{
    let level = if data { dc.set_high() } else { dc.set_low() };
    level.map_err(|_| Error::Pin)?;

    cs.select();
    let res = spi.write(bytes);
    cs.deselect();
    res.map_err(Error::Spi)
}

impl<SPI, CS, DC, RST, E> DisplaySink for Ssd1306<SPI, CS, DC, RST>
where
    SPI: Write<u8, Error = E>,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = Error<E>;

    fn write(&mut self, position: Vector, glyph: &Glyph, mode: Buffering) -> Result<(), Self::Error> {
        self.buffer.draw_glyph(position, glyph);
        match mode {
            Buffering::Buffered => Ok(()),
            Buffering::Unbuffered => self.flush_buffer(),
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flush_buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// (D/C level, bytes) for every SPI write
    type Log = Rc<RefCell<Vec<(bool, Vec<u8>)>>>;

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

    struct FakeSpi {
        dc: Rc<Cell<bool>>,
        cs: Rc<Cell<bool>>,
        log: Log,
    }

    impl Write<u8> for FakeSpi {
        type Error = ();

        fn write(&mut self, words: &[u8]) -> Result<(), ()> {
            // Chip select must be asserted (low) during a transfer
            assert!(!self.cs.get());
            self.log.borrow_mut().push((self.dc.get(), words.to_vec()));
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayMs<u8> for NoDelay {
        fn delay_ms(&mut self, _ms: u8) {}
    }

    struct Rig {
        oled: Ssd1306<FakeSpi, Probe, Probe, Probe>,
        log: Log,
        rst: Rc<Cell<bool>>,
    }

    fn rig() -> Rig {
        let dc = Rc::new(Cell::new(false));
        let cs = Rc::new(Cell::new(false));
        let rst = Rc::new(Cell::new(false));
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let spi = FakeSpi {
            dc: dc.clone(),
            cs: cs.clone(),
            log: log.clone(),
        };
        let oled = Ssd1306::new(
            spi,
            ChipSelect::active_low(Probe(cs)),
            Probe(dc),
            Probe(rst.clone()),
        );
        Rig { oled, log, rst }
    }

    const ADDRESS_WINDOW: [u8; 6] = [cmd::COLUMN_ADDR, 0, 127, cmd::PAGE_ADDR, 0, 7];

    #[test]
    fn test_page_layout() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(5, 10, true);
        assert_eq!(fb.as_bytes()[WIDTH + 5], 1 << 2);
        assert!(fb.pixel(5, 10));

        fb.set_pixel(5, 10, false);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_glyph_replaces_region() {
        let mut fb = FrameBuffer::new();
        fb.draw_glyph(Vector::new(10, 10), &Glyph::SOLID);
        assert!(fb.pixel(17, 17));

        fb.draw_glyph(Vector::new(10, 10), &Glyph::BLANK);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_glyph_clips_at_edges() {
        let mut fb = FrameBuffer::new();
        fb.draw_glyph(Vector::new(-2, -2), &Glyph::BALL);
        // Glyph pixel (2, 2) lands on screen pixel (0, 0)
        assert_eq!(fb.pixel(0, 0), Glyph::BALL.pixel(2, 2));
        assert_eq!(fb.pixel(5, 5), Glyph::BALL.pixel(7, 7));

        fb.clear();
        fb.draw_glyph(Vector::new(124, 60), &Glyph::SOLID);
        let lit = (0..SCREEN_WIDTH)
            .flat_map(|x| (0..SCREEN_HEIGHT).map(move |y| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y))
            .count();
        assert_eq!(lit, 16);
    }

    #[test]
    fn test_init_resets_and_configures() {
        let mut rig = rig();
        rig.oled.init(&mut NoDelay).unwrap();

        assert!(rig.rst.get());
        let log = rig.log.borrow();
        assert_eq!(log[0], (false, INIT_SEQUENCE.to_vec()));
        assert_eq!(log[1], (false, ADDRESS_WINDOW.to_vec()));
        assert_eq!(log[2], (true, vec![0u8; BUFFER_SIZE]));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_buffered_write_waits_for_flush() {
        let mut rig = rig();
        rig.oled
            .write(Vector::new(0, 0), &Glyph::SOLID, Buffering::Buffered)
            .unwrap();
        assert!(rig.log.borrow().is_empty());

        rig.oled.flush().unwrap();
        let log = rig.log.borrow();
        assert_eq!(log[0], (false, ADDRESS_WINDOW.to_vec()));

        let (dc, data) = &log[1];
        assert!(*dc);
        assert_eq!(data.len(), BUFFER_SIZE);
        // First page, columns 0..8 fully lit
        assert!(data[..8].iter().all(|&b| b == 0xFF));
        assert!(data[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_flush_sends_staged_buffer() {
        let mut rig = rig();
        rig.oled.buffer_mut().set_pixel(127, 63, true);
        rig.oled.buffer_mut().set_pixel(0, 8, true);
        rig.oled.flush().unwrap();

        let log = rig.log.borrow();
        let (dc, data) = &log[1];
        assert!(*dc);
        assert_eq!(data.as_slice(), &rig.oled.buffer().as_bytes()[..]);
        assert_eq!(data[WIDTH], 0x01);
        assert_eq!(data[BUFFER_SIZE - 1], 0x80);
    }

    #[test]
    fn test_unbuffered_write_flushes() {
        let mut rig = rig();
        rig.oled
            .write(Vector::new(64, 32), &Glyph::BALL, Buffering::Unbuffered)
            .unwrap();
        assert_eq!(rig.log.borrow().len(), 2);
    }
}
