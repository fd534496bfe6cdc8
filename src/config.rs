use crate::geometry::Geometry;

/// 7-bit address of a PCF8574 backpack with A0..A2 pulled high.
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Panel layout and bus address of one display.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    pub geometry: Geometry,
    /// 7-bit I2C address (0x00..=0x7F), not the left-shifted 8-bit form.
    pub address: u8,
}

impl Config {
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            geometry: Geometry::default(),
            address: DEFAULT_ADDRESS,
        }
    }
}

/// An I2C device address, kept in 7-bit form.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BusAddress(pub(crate) u8);

impl BusAddress {
    /// Returns `None` for values above 0x7F, such as an 8-bit form passed by mistake.
    pub fn new(seven_bit: u8) -> Option<Self> {
        (seven_bit <= 0x7F).then_some(Self(seven_bit))
    }

    /// Address as `embedded-hal` expects it.
    pub fn seven_bit(self) -> u8 {
        self.0
    }

    /// Address shifted into the upper seven bits, as 8-bit bus tools print it.
    pub fn eight_bit(self) -> u8 {
        self.0 << 1
    }
}
