//! One sampling cycle of the motion indicator.
//!
//! read gyro → magnitude → moving average → color. Failures are returned
//! unchanged; what to show while the sensor is faulty is up to the caller.

use crate::{
    color::{classify, Color},
    error::Error,
    filter::SpeedAverage,
    reading::AxisReading,
    register_bus::RegisterBus,
    sensor::MotionSensor,
};

/// Outcome of one successful cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Sample {
    pub reading: AxisReading,
    /// Instantaneous magnitude of `reading`.
    pub magnitude: u16,
    /// Moving average, `0` until the filter is full.
    pub smoothed: u16,
    pub color: Color,
}

pub struct MotionIndicator<B> {
    sensor: MotionSensor<B>,
    average: SpeedAverage,
}

impl<B> MotionIndicator<B>
where
    B: RegisterBus,
{
    pub fn new(sensor: MotionSensor<B>) -> Self {
        Self {
            sensor,
            average: SpeedAverage::new(),
        }
    }

    /// Initialize the sensor and start with an empty history.
    pub fn initialize(&mut self) -> Result<(), Error<B::Error>> {
        self.average.reset();
        self.sensor.initialize()
    }

    pub fn sample(&mut self) -> Result<Sample, Error<B::Error>> {
        let reading = self.sensor.read_motion()?;
        let magnitude = reading.magnitude();
        self.average.update(magnitude);
        let smoothed = self.average.average();
        let color = classify(smoothed);
        trace!("magnitude {} smoothed {}", magnitude, smoothed);

        Ok(Sample {
            reading,
            magnitude,
            smoothed,
            color,
        })
    }

    pub fn sensor(&mut self) -> &mut MotionSensor<B> {
        &mut self.sensor
    }

    pub fn average(&self) -> &SpeedAverage {
        &self.average
    }

    /// Returns the sensor, consuming this indicator.
    pub fn release(self) -> MotionSensor<B> {
        self.sensor
    }
}
