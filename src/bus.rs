//! PCF8574A expander side of the 4-bit interface.
//!
//! Backpack wiring: P0 = RS, P1 = RW, P2 = EN, P3 = backlight, P4..P7 = D4..D7.

use crate::command::{COMMAND_SETTLE_US, ENABLE_PULSE_US};
use crate::error::{Error, Result};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::trace;

/// Register select: instruction register.
pub(crate) const MODE_COMMAND: u8 = 0;
/// Register select: data register.
pub(crate) const MODE_DATA: u8 = 1;

/// Image of the eight expander outputs.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct OutputState {
    rs: u8,
    rw: u8,
    e: u8,
    led: u8,
    data: u8,
}

impl OutputState {
    /// Packs the outputs into the byte the expander latches.
    pub(crate) fn byte(&self) -> u8 {
        let mut buffer = self.rs;
        buffer |= self.rw << 1;
        buffer |= self.e << 2;
        buffer |= self.led << 3;
        buffer |= self.data & 0xF0;
        buffer
    }
}

pub(crate) struct Bus<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    output: OutputState,
}

impl<I2C, D, E> Bus<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    pub(crate) fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            output: OutputState::default(),
        }
    }

    pub(crate) fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    pub(crate) fn backlight(&self) -> bool {
        self.output.led != 0
    }

    /// Changes the backlight line and pushes it out with all other outputs low.
    pub(crate) fn set_backlight(&mut self, on: bool) -> Result<(), E> {
        self.output.led = on as u8;
        self.output.rs = 0;
        self.output.e = 0;
        self.output.data = 0;
        self.i2c_write()
    }

    pub(crate) fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    /// Latches the high half of `value` into the controller with one enable pulse.
    pub(crate) fn write_nibble(&mut self, value: u8, mode: u8) -> Result<(), E> {
        self.output.rs = mode;
        self.output.rw = 0;
        self.output.data = value;

        self.output.e = 0;
        self.i2c_write()?;
        self.delay.delay_us(ENABLE_PULSE_US);

        self.output.e = 1;
        self.i2c_write()?;
        self.delay.delay_us(ENABLE_PULSE_US);

        self.output.e = 0;
        self.i2c_write()?;
        self.delay.delay_us(COMMAND_SETTLE_US);

        Ok(())
    }

    /// Sends a full byte as two nibbles, high nibble first.
    pub(crate) fn send(&mut self, value: u8, mode: u8) -> Result<(), E> {
        trace!("Sending {:08b}, RS: {}", value, mode);

        self.write_nibble(value & 0xF0, mode)?;
        self.write_nibble((value << 4) & 0xF0, mode)?;
        Ok(())
    }

    pub(crate) fn command(&mut self, command: u8) -> Result<(), E> {
        self.send(command, MODE_COMMAND)
    }

    pub(crate) fn data(&mut self, data: u8) -> Result<(), E> {
        self.send(data, MODE_DATA)
    }

    #[cfg(test)]
    pub(crate) fn i2c(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    fn i2c_write(&mut self) -> Result<(), E> {
        self.i2c
            .write(self.address, &[self.output.byte()])
            .map_err(Error::I2c)
    }
}
