#![no_std]

//! Driver for HD44780 character LCDs behind a PCF8574A I2C backpack, using the controller's
//! 4-bit interface.
//!
//! ```ignore
//! use core::fmt::Write;
//! use lcd_pcf8574::{Config, Geometry, LcdI2c, Mode};
//!
//! let mut lcd = LcdI2c::new(i2c, Config::default().with_geometry(Geometry::Lcd20x4))?;
//! lcd.cls()?;
//! write!(lcd, "Hello World!\n").ok();
//! lcd.display(Mode::CursorOn)?;
//! ```

mod bus;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod scan;
pub mod text;

use core::fmt;

use bus::Bus;
use command::*;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, trace};

pub use command::Mode;
pub use config::{BusAddress, Config, DEFAULT_ADDRESS};
pub use error::{Error, Result};
pub use geometry::{Cursor, Geometry};
pub use text::{CharSink, TextWriter};

pub struct LcdI2c<I2C, D> {
    bus: Bus<I2C, D>,
    geometry: Geometry,
    address: BusAddress,
    display_control: u8,
    display_mode: u8,
    cursor: Cursor,
}

impl<I2C, E> LcdI2c<I2C, embassy_time::Delay>
where
    I2C: I2c<Error = E>,
{
    /// Creates and initializes a display, timing the protocol with `embassy_time`.
    pub fn new(i2c: I2C, config: Config) -> Result<Self, E> {
        Self::with_delay(i2c, embassy_time::Delay, config)
    }
}

impl<I2C, D, E> LcdI2c<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Creates a display on any delay provider and runs the power-on sequence.
    ///
    /// The returned driver is ready for use.
    pub fn with_delay(i2c: I2C, delay: D, config: Config) -> Result<Self, E> {
        let address = BusAddress::new(config.address).ok_or(Error::<E>::InvalidAddress {
            address: config.address,
        })?;
        let mut lcd = Self {
            bus: Bus::new(i2c, delay, address.seven_bit()),
            geometry: config.geometry,
            address,
            display_control: 0,
            display_mode: 0,
            cursor: Cursor::default(),
        };
        lcd.initialize()?;
        Ok(lcd)
    }

    fn initialize(&mut self) -> Result<(), E> {
        // See HD44780U datasheet "Initializing by Instruction" Figure 24 (4-Bit Interface)
        debug!(
            "Initializing {:?} LCD at {:#04x}",
            self.geometry,
            self.address.seven_bit()
        );

        // Three 0x3 nibbles force 8-bit mode whatever state the controller woke up in
        trace!("Sync nibbles");
        self.bus.write_nibble(0x03 << 4, bus::MODE_COMMAND)?;
        self.bus.delay_us(POWER_ON_SETTLE_US);
        self.bus.write_nibble(0x03 << 4, bus::MODE_COMMAND)?;
        self.bus.delay_us(POWER_ON_SETTLE_US);
        self.bus.write_nibble(0x03 << 4, bus::MODE_COMMAND)?;
        self.bus.delay_us(FOURBIT_SETTLE_US);

        // Switch to 4-bit mode
        self.bus.write_nibble(0x02 << 4, bus::MODE_COMMAND)?;

        // Interface width, line count and font are fixed from here on
        self.bus
            .command(LCD_FUNCTION_SET | FOUR_BIT_MODE | TWO_LINE | FONT_5X8)?;

        self.display_control = 0;
        self.display(Mode::DisplayOn)?;
        self.display(Mode::CursorOff)?;
        self.display(Mode::BlinkOff)?;

        self.cls()?;

        self.display_mode = ENTRY_LEFT;
        self.bus.command(LCD_ENTRY_MODE_SET | self.display_mode)?;

        self.home()?;

        self.display(Mode::BacklightOn)?;

        debug!("LCD ready");
        Ok(())
    }

    /// Clears the screen and moves the cursor to 0,0.
    pub fn cls(&mut self) -> Result<(), E> {
        self.bus.command(LCD_CLEAR_DISPLAY)?;
        self.bus.delay_us(LONG_COMMAND_US);
        self.cursor = Cursor::default();
        Ok(())
    }

    /// Moves the text cursor. Nothing is sent until the next character.
    pub fn locate(&mut self, column: u8, row: u8) -> Result<(), E> {
        self.geometry.check::<E>(column, row)?;
        self.cursor = Cursor::new(column, row);
        Ok(())
    }

    /// Returns the controller to DDRAM address 0 and undoes any display shift.
    pub fn home(&mut self) -> Result<(), E> {
        self.bus.command(LCD_RETURN_HOME)?;
        self.bus.delay_us(LONG_COMMAND_US);
        self.cursor = Cursor::default();
        Ok(())
    }

    /// Applies one display mode.
    ///
    /// Display, cursor and blink flags share one register, as do text direction and
    /// auto-scroll; changing one flag keeps the others as they were.
    pub fn display(&mut self, mode: Mode) -> Result<(), E> {
        debug!("Display mode {:?}", mode);

        match mode.action() {
            ModeAction::DisplayControl { bit, set } => {
                self.display_control = apply_bit(self.display_control, bit, set);
                self.bus.command(LCD_DISPLAY_CONTROL | self.display_control)
            }
            ModeAction::EntryMode { bit, set } => {
                self.display_mode = apply_bit(self.display_mode, bit, set);
                self.bus.command(LCD_ENTRY_MODE_SET | self.display_mode)
            }
            ModeAction::Shift(command) => self.bus.command(command),
            ModeAction::Backlight(on) => self.bus.set_backlight(on),
        }
    }

    /// Writes `c` at a given cell without moving the text cursor. Handy for custom glyphs.
    pub fn character(&mut self, column: u8, row: u8, c: u8) -> Result<(), E> {
        let address = self.geometry.address::<E>(column, row)?;
        self.bus.command(address)?;
        self.bus.data(c)
    }

    /// Uploads a custom glyph into CGRAM slot `location` (0-7).
    ///
    /// Slots above 7 are ignored. Each byte is one pixel row, low five bits used.
    pub fn create(&mut self, location: u8, charmap: &[u8; 8]) -> Result<(), E> {
        if location > 7 {
            return Ok(());
        }
        let location = location & 0x7;

        self.bus.command(LCD_SET_CGRAM_ADDR | (location << 3))?;
        for &row in charmap.iter() {
            self.bus.data(row)?;
        }
        Ok(())
    }

    /// Writes a string at the text cursor.
    pub fn print(&mut self, s: &str) -> Result<(), E> {
        self.put_str(s)
    }

    /// Formats text at the text cursor, e.g. `lcd.print_fmt(format_args!("{}C", t))`.
    ///
    /// A failing `Display` impl gives `Error::Format`; characters before it are already shown.
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), E> {
        text::write_fmt(self, args)
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn backlight(&self) -> bool {
        self.bus.backlight()
    }

    pub fn address(&self) -> BusAddress {
        self.address
    }

    /// Gives back the bus and the delay provider.
    pub fn release(self) -> (I2C, D) {
        self.bus.release()
    }
}

impl<I2C, D, E> CharSink for LcdI2c<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    type Error = Error<E>;

    /// Writes one character at the cursor and advances it, wrapping at the end of each row
    /// and back to the top after the last row. `\n` only moves the cursor.
    fn put_char(&mut self, c: u8) -> Result<(), E> {
        if c == b'\n' {
            self.cursor.newline(self.geometry);
            return Ok(());
        }
        self.character(self.cursor.column, self.cursor.row, c)?;
        self.cursor.advance(self.geometry);
        Ok(())
    }
}

impl<I2C, D, E> fmt::Write for LcdI2c<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_str(s).map_err(|_| fmt::Error)
    }
}
