//! Fixed-depth moving average over magnitude samples.
//!
//! The buffer always holds `N` slots. It reports an average only once `N`
//! samples have been written since creation or the last [`reset`]; until
//! then [`average`] returns `0`. Use [`try_average`] or [`is_full`] where a
//! genuine zero must be told apart from missing history.
//!
//! [`reset`]: MovingAverage::reset
//! [`average`]: MovingAverage::average
//! [`try_average`]: MovingAverage::try_average
//! [`is_full`]: MovingAverage::is_full

/// Depth used by the motion indicator.
pub const DEFAULT_DEPTH: usize = 8;

/// Moving average of the last eight samples.
pub type SpeedAverage = MovingAverage<DEFAULT_DEPTH>;

/// Circular buffer of the `N` most recent samples.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct MovingAverage<const N: usize> {
    samples: [u16; N],
    cursor: usize,
    full: bool,
}

impl<const N: usize> MovingAverage<N> {
    const NON_EMPTY: () = assert!(N > 0, "moving average needs at least one slot");

    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            samples: [0; N],
            cursor: 0,
            full: false,
        }
    }

    /// Store `sample` in the oldest slot.
    pub fn update(&mut self, sample: u16) {
        self.samples[self.cursor] = sample;
        self.cursor += 1;
        if self.cursor == N {
            self.cursor = 0;
            self.full = true;
        }
    }

    /// Integer mean of the last `N` samples, or `0` while not full.
    pub fn average(&self) -> u16 {
        self.try_average().unwrap_or(0)
    }

    /// Integer mean of the last `N` samples, `None` while not full.
    pub fn try_average(&self) -> Option<u16> {
        if !self.full {
            return None;
        }
        let sum: u32 = self.samples.iter().map(|&s| u32::from(s)).sum();
        // the mean of u16 values is itself a u16
        Some((sum / N as u32) as u16)
    }

    /// `true` once `N` samples were written since the last reset.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Zero every slot and forget the history.
    pub fn reset(&mut self) {
        self.samples = [0; N];
        self.cursor = 0;
        self.full = false;
    }
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}
