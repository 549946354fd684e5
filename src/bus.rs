//! Two-wire bus master primitives.
//!
//! A synchronous serial port in master mode exposes a handful of operations:
//! generate a start, repeated start or stop condition, shift one byte out,
//! or clock one byte in. Each of them is *issued* and then completes some
//! time later while the peripheral reports itself busy. [`TwoWireMaster`]
//! keeps those two halves apart so the protocol engine decides how long it
//! is willing to wait.

/// Data direction carried in bit 0 of the address header.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Direction {
    Write = 0,
    Read = 1,
}

/// Per-byte handshake bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Ack {
    /// Receiver pulled SDA low during the ninth clock.
    Ack,
    /// Receiver left SDA high.
    Nack,
}

/// Single-master two-wire peripheral, polled.
///
/// Every issuing method returns immediately; the operation is complete once
/// [`is_busy`](Self::is_busy) reports `false`. Implementations must not block.
///
/// # Invariants
///
/// - Only one owner drives the peripheral.
/// - No operation other than [`abort`](Self::abort) is issued while the
///   previous one is still busy.
pub trait TwoWireMaster {
    /// Generate a start condition.
    fn start(&mut self);

    /// Generate a repeated start condition.
    fn restart(&mut self);

    /// Generate a stop condition.
    fn stop(&mut self);

    /// Cancel whatever operation is in progress and release SCL and SDA.
    ///
    /// Unlike every other issuing method this one may be called while
    /// [`is_busy`](Self::is_busy) reports `true`, and must take effect
    /// regardless (e.g. by resetting the serial port). It is fire and forget:
    /// the engine does not poll for its completion.
    fn abort(&mut self);

    /// Shift `byte` out. The slave's answer is available from
    /// [`ack_status`](Self::ack_status) once the transfer completed.
    fn send(&mut self, byte: u8);

    /// Clock one byte in and answer it with `reply`. The byte is available
    /// from [`received`](Self::received) once the transfer completed.
    fn receive(&mut self, reply: Ack);

    /// `true` while the last issued operation is still in progress.
    fn is_busy(&mut self) -> bool;

    /// Handshake the slave returned for the last byte sent.
    fn ack_status(&mut self) -> Ack;

    /// Last byte clocked in.
    fn received(&mut self) -> u8;
}

impl<T: TwoWireMaster + ?Sized> TwoWireMaster for &mut T {
    fn start(&mut self) {
        T::start(self)
    }

    fn restart(&mut self) {
        T::restart(self)
    }

    fn stop(&mut self) {
        T::stop(self)
    }

    fn abort(&mut self) {
        T::abort(self)
    }

    fn send(&mut self, byte: u8) {
        T::send(self, byte)
    }

    fn receive(&mut self, reply: Ack) {
        T::receive(self, reply)
    }

    fn is_busy(&mut self) -> bool {
        T::is_busy(self)
    }

    fn ack_status(&mut self) -> Ack {
        T::ack_status(self)
    }

    fn received(&mut self) -> u8 {
        T::received(self)
    }
}
