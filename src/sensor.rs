//! MPU-6050 motion sensor driver.
//!
//! The driver walks a three-state machine:
//!
//! ```text
//! Uninitialized --initialize()--> Initializing --ok--> Ready
//!       ^                              |
//!       +-------------err--------------+
//! ```
//!
//! Only `Ready` allows reads. A failed `initialize` always leaves the driver
//! `Uninitialized`, also when it was `Ready` before; there is no other way
//! out of `Ready`.

use crate::{
    config::SensorConfig,
    error::Error,
    reading::AxisReading,
    register_bus::RegisterBus,
    registers::{Register, AXIS_BLOCK_LEN, WHO_AM_I_VALUE},
};

/// Initialization state, owned by each driver instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum DriverState {
    Uninitialized,
    Initializing,
    Ready,
}

/// InvenSense MPU-6050 Driver
pub struct MotionSensor<B> {
    bus: B,
    config: SensorConfig,
    state: DriverState,
}

impl<B> MotionSensor<B>
where
    B: RegisterBus,
{
    /// Construct a driver with the most sensitive ranges. No bus traffic
    /// happens until [`initialize`](Self::initialize).
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, SensorConfig::default())
    }

    pub fn with_config(bus: B, config: SensorConfig) -> Self {
        Self {
            bus,
            config,
            state: DriverState::Uninitialized,
        }
    }

    /// Returns the underlying bus, consuming this driver.
    pub fn release(self) -> B {
        self.bus
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == DriverState::Ready
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Check the device identity, wake it and program the full-scale ranges.
    pub fn initialize(&mut self) -> Result<(), Error<B::Error>> {
        self.state = DriverState::Initializing;
        match self.configure() {
            Ok(()) => {
                self.state = DriverState::Ready;
                info!("mpu6050 ready");
                Ok(())
            }
            Err(e) => {
                self.state = DriverState::Uninitialized;
                Err(e)
            }
        }
    }

    fn configure(&mut self) -> Result<(), Error<B::Error>> {
        let id = self.bus.read_register(Register::WhoAmI.into())?;
        if id != WHO_AM_I_VALUE {
            warn!("unexpected WHO_AM_I {}", id);
            return Err(Error::WrongDevice(id));
        }

        // wake up, internal oscillator
        self.bus.write_register(Register::PwrMgmt1.into(), 0x00)?;
        self.bus.write_register(
            Register::GyroConfig.into(),
            self.config.gyro_scale.register_value(),
        )?;
        self.bus.write_register(
            Register::AccelConfig.into(),
            self.config.accel_scale.register_value(),
        )?;
        debug!("ranges set: {:?}", self.config);
        Ok(())
    }

    /// Read the identity register. Works in any state.
    pub fn who_am_i(&mut self) -> Result<u8, Error<B::Error>> {
        self.bus.read_register(Register::WhoAmI.into())
    }

    /// Angular rate on all three axes, one burst read.
    pub fn read_motion(&mut self) -> Result<AxisReading, Error<B::Error>> {
        self.read_block(Register::GyroX_H)
    }

    /// Acceleration on all three axes, one burst read.
    pub fn read_accel(&mut self) -> Result<AxisReading, Error<B::Error>> {
        self.read_block(Register::AccelX_H)
    }

    /// Gyroscope user offsets, as stored in the offset registers.
    pub fn gyro_offsets(&mut self) -> Result<AxisReading, Error<B::Error>> {
        self.read_block(Register::GyroOffsetX_H)
    }

    /// Overwrite the gyroscope user offsets with one burst write.
    pub fn set_gyro_offsets(&mut self, offsets: &AxisReading) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        self.bus
            .write_registers(Register::GyroOffsetX_H.into(), &offsets.to_bytes())
    }

    fn read_block(&mut self, reg: Register) -> Result<AxisReading, Error<B::Error>> {
        self.ensure_ready()?;
        let mut data = [0; AXIS_BLOCK_LEN];
        self.bus.read_registers(reg.into(), &mut data)?;
        Ok(AxisReading::from_bytes(data))
    }

    fn ensure_ready(&self) -> Result<(), Error<B::Error>> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }
}
