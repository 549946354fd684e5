//! Error types shared by the bus layer and the sensor driver.
//!
//! Every operation reports its failure to the immediate caller; nothing in
//! this crate retries. `E` is the transport's own error type: [`Fault`] for
//! the polled [`TwoWireEngine`], the HAL error for [`HalBus`].
//!
//! [`Fault`]: crate::engine::Fault
//! [`TwoWireEngine`]: crate::engine::TwoWireEngine
//! [`HalBus`]: crate::register_bus::HalBus

use core::fmt::{Debug, Display, Formatter};

/// Error for bus and sensor operations.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// The transport failed (not-acknowledge, timeout, HAL error).
    Bus(E),
    /// `WHO_AM_I` did not match; carries the value that was read.
    WrongDevice(u8),
    /// A read was attempted before a successful `initialize`.
    NotInitialized,
    /// A transfer was requested with an empty or oversized buffer.
    InvalidParameter,
}

/// Coarse classification of [`Error`], independent of the transport.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ErrorKind {
    Communication,
    NotInitialized,
    InvalidParameter,
}

impl<E> Error<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Bus(_) | Self::WrongDevice(_) => ErrorKind::Communication,
            Self::NotInitialized => ErrorKind::NotInitialized,
            Self::InvalidParameter => ErrorKind::InvalidParameter,
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

impl<E: Debug> Debug for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => f.debug_tuple("Bus").field(e).finish(),
            Self::WrongDevice(id) => f.debug_tuple("WrongDevice").field(id).finish(),
            Self::NotInitialized => f.write_str("NotInitialized"),
            Self::InvalidParameter => f.write_str("InvalidParameter"),
        }
    }
}

impl<E: Debug> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus error: {:?}", e),
            Self::WrongDevice(id) => write!(f, "unexpected WHO_AM_I value {:#04x}", id),
            Self::NotInitialized => f.write_str("sensor not initialized"),
            Self::InvalidParameter => f.write_str("invalid parameter"),
        }
    }
}
