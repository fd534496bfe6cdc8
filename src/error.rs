use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq, Clone, Copy)]
pub enum Error<E> {
    /// The I2C write failed. The controller may be left mid nibble pair.
    #[error("I2C error: {0:?}")]
    I2c(E),
    #[error("row {row} is outside a {rows}-row panel")]
    InvalidRow { row: u8, rows: u8 },
    #[error("column {column} is outside the DDRAM line")]
    InvalidColumn { column: u8 },
    #[error("{address:#04x} is not a 7-bit I2C address")]
    InvalidAddress { address: u8 },
    /// A `Display` impl failed while formatting text for the panel.
    #[error("formatting error")]
    Format,
}

impl<E> From<core::fmt::Error> for Error<E> {
    fn from(_: core::fmt::Error) -> Self {
        Error::Format
    }
}

pub type Result<T, E> = core::result::Result<T, Error<E>>;
