//! MPU6050 I2C Address Configuration
//!
//! The MPU6050 answers on one of two 7-bit addresses, selected by the AD0 pin:
//! - 0x68 (default, AD0 pin low)
//! - 0x69 (alternate, AD0 pin high)
//!
//! On the wire the address is shifted left by one and the lowest bit carries
//! the transfer direction, so 0x68 goes out as 0xD0 (write) or 0xD1 (read).

use crate::bus::Direction;

/// A 7-bit two-wire slave address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Address(u8);

impl Address {
    /// Address used when AD0 is tied to GND or left floating.
    pub const PRIMARY: Self = Self(0x68);
    /// Address used when AD0 is tied to VCC.
    pub const ALTERNATE: Self = Self(0x69);

    /// Returns `None` for values that do not fit in seven bits.
    pub const fn new(raw: u8) -> Option<Self> {
        if raw > 0x7F {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// First byte of a transaction: address in the upper seven bits,
    /// direction in bit 0.
    pub const fn header(self, direction: Direction) -> u8 {
        (self.0 << 1) | direction as u8
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_carries_direction_bit() {
        assert_eq!(Address::default().header(Direction::Write), 0xD0);
        assert_eq!(Address::default().header(Direction::Read), 0xD1);
        assert_eq!(Address::ALTERNATE.header(Direction::Read), 0xD3);
    }

    #[test]
    fn rejects_eight_bit_addresses() {
        assert_eq!(Address::new(0x7F), Some(Address(0x7F)));
        assert_eq!(Address::new(0x80), None);
        assert_eq!(Address::new(0xD0), None);
    }
}
