use crate::command::LCD_SET_DDRAM_ADDR;
use crate::error::Error;

/// Cells per DDRAM line in two-line mode (0x00..=0x27 and 0x40..=0x67).
pub const DDRAM_LINE_LENGTH: u8 = 40;

/// Supported panel layouts.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum Geometry {
    #[default]
    Lcd16x2,
    Lcd20x2,
    Lcd20x4,
    Lcd40x2,
}

impl Geometry {
    pub fn columns(self) -> u8 {
        match self {
            Geometry::Lcd16x2 => 16,
            Geometry::Lcd20x2 | Geometry::Lcd20x4 => 20,
            Geometry::Lcd40x2 => 40,
        }
    }

    pub fn rows(self) -> u8 {
        match self {
            Geometry::Lcd20x4 => 4,
            Geometry::Lcd16x2 | Geometry::Lcd20x2 | Geometry::Lcd40x2 => 2,
        }
    }

    /// Returns the "set DDRAM address" command for the cell at `column`, `row`.
    ///
    /// Four-line panels interleave their rows in DDRAM: row 2 continues row 0 and row 3
    /// continues row 1, so their bases are 0x80, 0xC0, 0x94 and 0xD4.
    pub fn address<E>(self, column: u8, row: u8) -> Result<u8, Error<E>> {
        self.check::<E>(column, row)?;

        let base = match self {
            Geometry::Lcd20x4 => [0x80, 0xC0, 0x94, 0xD4][row as usize],
            _ => LCD_SET_DDRAM_ADDR + row * 0x40,
        };
        Ok(base + column)
    }

    pub(crate) fn check<E>(self, column: u8, row: u8) -> Result<(), Error<E>> {
        if row >= self.rows() {
            return Err(Error::InvalidRow {
                row,
                rows: self.rows(),
            });
        }
        if column >= DDRAM_LINE_LENGTH {
            return Err(Error::InvalidColumn { column });
        }
        Ok(())
    }
}

/// Free-running cursor used by the character stream.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Cursor {
    pub column: u8,
    pub row: u8,
}

impl Cursor {
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Column 0 of the next row, wrapping to the top row after the last one.
    pub(crate) fn newline(&mut self, geometry: Geometry) {
        self.column = 0;
        self.row += 1;
        if self.row >= geometry.rows() {
            self.row = 0;
        }
    }

    /// Moves one cell right, wrapping at the end of the row.
    pub(crate) fn advance(&mut self, geometry: Geometry) {
        self.column += 1;
        if self.column >= geometry.columns() {
            self.newline(geometry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type R = Result<u8, Error<()>>;

    const ALL: [Geometry; 4] = [
        Geometry::Lcd16x2,
        Geometry::Lcd20x2,
        Geometry::Lcd20x4,
        Geometry::Lcd40x2,
    ];

    #[test]
    fn dimensions() {
        let dims: [(u8, u8); 4] = ALL.map(|g| (g.columns(), g.rows()));
        assert_eq!(dims, [(16, 2), (20, 2), (20, 4), (40, 2)]);
    }

    #[test]
    fn four_line_row_bases() {
        let g = Geometry::Lcd20x4;
        assert_eq!(g.address::<()>(0, 0), Ok(0x80));
        assert_eq!(g.address::<()>(0, 1), Ok(0xC0));
        assert_eq!(g.address::<()>(0, 2), Ok(0x94));
        assert_eq!(g.address::<()>(0, 3), Ok(0xD4));
        assert_eq!(g.address::<()>(19, 3), Ok(0xE7));
    }

    #[test]
    fn two_line_addresses_are_linear() {
        for g in [Geometry::Lcd16x2, Geometry::Lcd20x2, Geometry::Lcd40x2] {
            for row in 0..g.rows() {
                for col in 0..g.columns() {
                    let expected: R = Ok(0x80 + row * 0x40 + col);
                    assert_eq!(g.address(col, row), expected, "{g:?} ({col}, {row})");
                }
            }
        }
    }

    #[test]
    fn out_of_range_row_is_an_error() {
        let r: R = Geometry::Lcd20x4.address(0, 4);
        assert_eq!(r, Err(Error::InvalidRow { row: 4, rows: 4 }));

        let r: R = Geometry::Lcd16x2.address(3, 2);
        assert_eq!(r, Err(Error::InvalidRow { row: 2, rows: 2 }));
    }

    #[test]
    fn column_past_ddram_line_is_an_error() {
        let r: R = Geometry::Lcd40x2.address(40, 1);
        assert_eq!(r, Err(Error::InvalidColumn { column: 40 }));

        // Off-screen but still inside the line, reachable by scrolling.
        let r: R = Geometry::Lcd16x2.address(20, 0);
        assert_eq!(r, Ok(0x94));
    }

    #[test]
    fn cursor_wraps_rows_and_screen() {
        let g = Geometry::Lcd16x2;
        let mut cursor = Cursor::default();

        for _ in 0..g.columns() - 1 {
            cursor.advance(g);
        }
        assert_eq!(cursor, Cursor::new(15, 0));

        cursor.advance(g);
        assert_eq!(cursor, Cursor::new(0, 1));

        for _ in 0..g.columns() {
            cursor.advance(g);
        }
        assert_eq!(cursor, Cursor::new(0, 0));
    }

    #[test]
    fn newline_wraps_on_last_row() {
        let g = Geometry::Lcd20x4;
        let mut cursor = Cursor::new(7, 2);

        cursor.newline(g);
        assert_eq!(cursor, Cursor::new(0, 3));

        cursor.newline(g);
        assert_eq!(cursor, Cursor::new(0, 0));
    }
}
