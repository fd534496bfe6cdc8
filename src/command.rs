//! HD44780 instruction set, register flags and controller timings.

// commands
pub const LCD_CLEAR_DISPLAY: u8 = 0x01;
pub const LCD_RETURN_HOME: u8 = 0x02;
pub const LCD_ENTRY_MODE_SET: u8 = 0x04;
pub const LCD_DISPLAY_CONTROL: u8 = 0x08;
pub const LCD_CURSOR_SHIFT: u8 = 0x10;
pub const LCD_FUNCTION_SET: u8 = 0x20;
pub const LCD_SET_CGRAM_ADDR: u8 = 0x40;
pub const LCD_SET_DDRAM_ADDR: u8 = 0x80;

// entry mode flags
pub const ENTRY_LEFT: u8 = 0x02;
pub const ENTRY_SHIFT_INCREMENT: u8 = 0x01;

// display control flags
pub const DISPLAY_ON: u8 = 0x04;
pub const CURSOR_ON: u8 = 0x02;
pub const BLINK_ON: u8 = 0x01;

// cursor/display shift flags
pub const DISPLAY_MOVE: u8 = 0x08;
pub const MOVE_RIGHT: u8 = 0x04;
pub const MOVE_LEFT: u8 = 0x00;

// function set flags
pub const FOUR_BIT_MODE: u8 = 0x00;
pub const TWO_LINE: u8 = 0x08;
pub const FONT_5X8: u8 = 0x00;

/// Wait after each of the first two `0x3` nibbles of the cold start.
pub const POWER_ON_SETTLE_US: u32 = 4500;
/// Wait after the third `0x3` nibble of the cold start.
pub const FOURBIT_SETTLE_US: u32 = 150;
/// Minimum enable pulse width and setup time.
pub const ENABLE_PULSE_US: u32 = 1;
/// Execution time of an ordinary instruction. Must not be shortened.
pub const COMMAND_SETTLE_US: u32 = 40;
/// Clear display and return home take ~1.64ms.
pub const LONG_COMMAND_US: u32 = 2000;

/// Display modes accepted by [`LcdI2c::display`](crate::LcdI2c::display).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    /// Turn the display on.
    DisplayOn,
    /// Turn the display off. DDRAM contents are kept.
    DisplayOff,
    /// Show the underline cursor.
    CursorOn,
    CursorOff,
    /// Blink the character cell under the cursor.
    BlinkOn,
    BlinkOff,
    /// Shift the whole display one cell left without touching DDRAM.
    ScrollLeft,
    /// Shift the whole display one cell right without touching DDRAM.
    ScrollRight,
    /// Text flows left to right.
    LeftToRight,
    /// Text flows right to left.
    RightToLeft,
    /// "Right justify" text from the cursor by shifting the display on every write.
    ScrollOn,
    ScrollOff,
    BacklightOn,
    BacklightOff,
}

/// What a [`Mode`] does to the controller.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum ModeAction {
    /// Set or clear a bit of the display-control register.
    DisplayControl { bit: u8, set: bool },
    /// Set or clear a bit of the entry-mode register.
    EntryMode { bit: u8, set: bool },
    /// One-shot cursor/display shift with no stored state.
    Shift(u8),
    /// Expander-only backlight line.
    Backlight(bool),
}

impl Mode {
    pub(crate) fn action(self) -> ModeAction {
        use ModeAction::*;

        match self {
            Mode::DisplayOn => DisplayControl { bit: DISPLAY_ON, set: true },
            Mode::DisplayOff => DisplayControl { bit: DISPLAY_ON, set: false },
            Mode::CursorOn => DisplayControl { bit: CURSOR_ON, set: true },
            Mode::CursorOff => DisplayControl { bit: CURSOR_ON, set: false },
            Mode::BlinkOn => DisplayControl { bit: BLINK_ON, set: true },
            Mode::BlinkOff => DisplayControl { bit: BLINK_ON, set: false },
            Mode::ScrollLeft => Shift(LCD_CURSOR_SHIFT | DISPLAY_MOVE | MOVE_LEFT),
            Mode::ScrollRight => Shift(LCD_CURSOR_SHIFT | DISPLAY_MOVE | MOVE_RIGHT),
            Mode::LeftToRight => EntryMode { bit: ENTRY_LEFT, set: true },
            Mode::RightToLeft => EntryMode { bit: ENTRY_LEFT, set: false },
            Mode::ScrollOn => EntryMode { bit: ENTRY_SHIFT_INCREMENT, set: true },
            Mode::ScrollOff => EntryMode { bit: ENTRY_SHIFT_INCREMENT, set: false },
            Mode::BacklightOn => Backlight(true),
            Mode::BacklightOff => Backlight(false),
        }
    }
}

/// Sets or clears `bit` in `register`, leaving every other bit alone.
pub(crate) fn apply_bit(register: u8, bit: u8, set: bool) -> u8 {
    if set { register | bit } else { register & !bit }
}
