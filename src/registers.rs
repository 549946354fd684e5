//! MPU6050 Register Map
//!
//! Only the registers touched by the motion pipeline are listed:
//! - Identity: `WHO_AM_I`, checked once during initialization
//! - Configuration: power management and full-scale range selection
//! - Data: the accelerometer and gyroscope output blocks (6 bytes each,
//!   high byte first per axis)
//! - Calibration: the user gyroscope offset block

/// Value the `WHO_AM_I` register reports on a genuine MPU-6050.
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// Length of one three-axis output block.
pub const AXIS_BLOCK_LEN: usize = 6;

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    // Gyroscope Calibration Registers
    /// High byte of X-axis gyroscope offset
    GyroOffsetX_H = 0x13,

    /// Gyroscope Configuration register (0x1B)
    /// Bits 4:3 select the full-scale range
    GyroConfig = 0x1B,

    /// Accelerometer Configuration register (0x1C)
    /// Bits 4:3 select the full-scale range
    AccelConfig = 0x1C,

    /// High byte of X-axis acceleration, start of the accelerometer block
    AccelX_H = 0x3B,

    /// High byte of X-axis angular rate, start of the gyroscope block
    GyroX_H = 0x43,

    /// Power Management 1 register (0x6B)
    /// Controls sleep mode and clock source; 0x00 wakes the device on the
    /// internal oscillator
    PwrMgmt1 = 0x6B,

    /// Device identity (0x75)
    WhoAmI = 0x75,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg as u8
    }
}
