//! Bus and sensor configuration
//!
//! Two groups of settings:
//! - [`BusConfig`]: how the polled engine frames transactions and how it
//!   reacts to a silent or unresponsive slave
//! - [`SensorConfig`]: the full-scale ranges written during initialization
//!
//! Both are plain `Copy` values with builder-style `with_*` methods.

use crate::address::Address;

/// How long the engine waits for the peripheral to finish a bus phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum WaitPolicy {
    /// Spin until the peripheral reports completion.
    /// - Matches the bare-metal reference loop
    /// - A stuck bus hangs the caller forever
    Unbounded,

    /// Give up after `polls` busy polls.
    /// - The phase fails with a timeout fault
    /// - The engine aborts the pending operation before returning
    Bounded { polls: u32 },
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::Bounded { polls: 10_000 }
    }
}

/// What the engine does when the slave does not acknowledge a byte.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum NackPolicy {
    /// Issue a stop condition and fail the transaction.
    #[default]
    Abort,

    /// Log the not-acknowledge and finish the byte framing anyway.
    /// Received data may be meaningless afterwards.
    Continue,
}

/// Transaction framing settings for [`TwoWireEngine`](crate::engine::TwoWireEngine).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct BusConfig {
    pub address: Address,
    pub wait: WaitPolicy,
    pub nack: NackPolicy,
}

impl BusConfig {
    /// (consumes and returns `Self` to be callable in a "builder-like" pattern)
    pub fn with_address(self, address: Address) -> Self {
        Self { address, ..self }
    }

    pub fn with_wait(self, wait: WaitPolicy) -> Self {
        Self { wait, ..self }
    }

    pub fn with_nack(self, nack: NackPolicy) -> Self {
        Self { nack, ..self }
    }
}

/// Gyroscope full-scale range, written to bits 4:3 of `GYRO_CONFIG`.
///
/// Smaller ranges resolve slower rotation:
/// - `Deg250`: 131 LSB per °/s
/// - `Deg2000`: 16.4 LSB per °/s
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum GyroFullScale {
    #[default]
    Deg250 = 0,
    Deg500 = 1,
    Deg1000 = 2,
    Deg2000 = 3,
}

/// Accelerometer full-scale range, written to bits 4:3 of `ACCEL_CONFIG`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum AccelFullScale {
    #[default]
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl GyroFullScale {
    pub const fn register_value(self) -> u8 {
        (self as u8) << 3
    }
}

impl AccelFullScale {
    pub const fn register_value(self) -> u8 {
        (self as u8) << 3
    }
}

/// Settings applied by [`MotionSensor::initialize`](crate::sensor::MotionSensor::initialize).
///
/// The default selects the most sensitive range on both sensors, i.e. both
/// configuration registers are cleared to `0x00`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct SensorConfig {
    pub gyro_scale: GyroFullScale,
    pub accel_scale: AccelFullScale,
}

impl SensorConfig {
    pub fn with_gyro_scale(self, gyro_scale: GyroFullScale) -> Self {
        Self { gyro_scale, ..self }
    }

    pub fn with_accel_scale(self, accel_scale: AccelFullScale) -> Self {
        Self {
            accel_scale,
            ..self
        }
    }
}
