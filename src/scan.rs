//! Bus scan for commissioning a backpack with an unknown address.

use crate::config::BusAddress;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use log::{debug, info};

/// Probes every 7-bit address with an empty write and returns the first that acknowledges.
///
/// A missing acknowledge moves on to the next address; any other bus error aborts the scan.
pub fn find_device<I2C: I2c>(i2c: &mut I2C) -> Result<Option<BusAddress>, I2C::Error> {
    for candidate in 0x00..=0x7F {
        match i2c.write(candidate, &[]) {
            Ok(()) => {
                let address = BusAddress(candidate);
                info!("I2C address 8bit: {:X}", address.eight_bit());
                info!("I2C address 7bit: {:X}", address.seven_bit());
                return Ok(Some(address));
            }
            Err(err) if matches!(err.kind(), ErrorKind::NoAcknowledge(_)) => {}
            Err(err) => return Err(err),
        }
    }
    debug!("No I2C device answered");
    Ok(None)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use embedded_hal::i2c::NoAcknowledgeSource;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use std::vec::Vec;

    fn nack(address: u8) -> I2cTransaction {
        I2cTransaction::write(address, std::vec![])
            .with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
    }

    #[test]
    fn finds_first_acknowledging_device() {
        let mut expected: Vec<_> = (0x00..0x27).map(nack).collect();
        expected.push(I2cTransaction::write(0x27, std::vec![]));
        let mut i2c = I2cMock::new(&expected);

        let found = find_device(&mut i2c).map(|a| a.map(BusAddress::eight_bit));
        assert_eq!(found, Ok(Some(0x4E)));

        i2c.done();
    }

    #[test]
    fn empty_bus() {
        let expected: Vec<_> = (0x00..=0x7F).map(nack).collect();
        let mut i2c = I2cMock::new(&expected);

        assert_eq!(find_device(&mut i2c), Ok(None));

        i2c.done();
    }

    #[test]
    fn bus_fault_aborts_scan() {
        let expected = std::vec![
            nack(0x00),
            I2cTransaction::write(0x01, std::vec![]).with_error(ErrorKind::Bus),
        ];
        let mut i2c = I2cMock::new(&expected);

        assert_eq!(find_device(&mut i2c), Err(ErrorKind::Bus));

        i2c.done();
    }
}
