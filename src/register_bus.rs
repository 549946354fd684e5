//! Register-level access to a single slave.
//!
//! [`RegisterBus`] is the seam the sensor driver talks through. Two
//! transports implement it:
//! - [`TwoWireEngine`]: the polled bus master in this crate
//! - [`HalBus`]: any `embedded-hal` 1.0 I2C peripheral

use crate::{
    address::Address,
    bus::TwoWireMaster,
    engine::{Fault, TwoWireEngine, MAX_BURST_LEN},
    error::Error,
};
use embedded_hal::i2c::I2c;

/// Byte-wide register access with auto-incrementing bursts.
pub trait RegisterBus {
    /// Transport-specific failure.
    type Error: core::fmt::Debug;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<Self::Error>>;

    fn read_register(&mut self, reg: u8) -> Result<u8, Error<Self::Error>>;

    /// Fill `buf` from consecutive registers starting at `reg`.
    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<Self::Error>>;

    /// Write `data` to consecutive registers starting at `reg`.
    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Error<Self::Error>>;
}

impl<M> RegisterBus for TwoWireEngine<M>
where
    M: TwoWireMaster,
{
    type Error = Fault;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<Fault>> {
        self.write(reg, value)
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Error<Fault>> {
        self.read(reg)
    }

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<Fault>> {
        self.burst_read(reg, buf)
    }

    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Error<Fault>> {
        self.burst_write(reg, data)
    }
}

/// Adapter running the register protocol over an `embedded-hal` I2C bus.
pub struct HalBus<I> {
    i2c: I,
    address: u8,
}

impl<I> HalBus<I>
where
    I: I2c,
{
    pub fn new(i2c: I, address: Address) -> Self {
        Self {
            i2c,
            address: address.into(),
        }
    }

    /// Returns the underlying I2C peripheral, consuming this adapter.
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I> RegisterBus for HalBus<I>
where
    I: I2c,
{
    type Error = I::Error;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.i2c.write(self.address, &[reg, value])?;
        Ok(())
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0; 1];
        self.i2c.write_read(self.address, &[reg], &mut buf)?;
        Ok(buf[0])
    }

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<I::Error>> {
        if buf.is_empty() || buf.len() > MAX_BURST_LEN {
            return Err(Error::InvalidParameter);
        }
        self.i2c.write_read(self.address, &[reg], buf)?;
        Ok(())
    }

    fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Error<I::Error>> {
        if data.is_empty() || data.len() > MAX_BURST_LEN {
            return Err(Error::InvalidParameter);
        }
        let mut bytes = [0; MAX_BURST_LEN + 1];
        bytes[0] = reg;
        bytes[1..=data.len()].copy_from_slice(data);
        self.i2c.write(self.address, &bytes[..=data.len()])?;
        Ok(())
    }
}
