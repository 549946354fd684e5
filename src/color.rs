//! Smoothed magnitude to indicator color.
//!
//! Four contiguous bands with inclusive upper bounds:
//!
//! | magnitude | level    | color  |
//! |-----------|----------|--------|
//! | 0..=100   | `Still`  | red    |
//! | 101..=300 | `Slow`   | yellow |
//! | 301..=600 | `Medium` | green  |
//! | 601..     | `Fast`   | blue   |
//!
//! There is no hysteresis: a value hovering on a boundary flips between the
//! two neighbouring colors.

/// Upper bound of the `Still` band.
pub const STILL_MAX: u16 = 100;
/// Upper bound of the `Slow` band.
pub const SLOW_MAX: u16 = 300;
/// Upper bound of the `Medium` band.
pub const MEDIUM_MAX: u16 = 600;

const SLOW_MIN: u16 = STILL_MAX + 1;
const MEDIUM_MIN: u16 = SLOW_MAX + 1;
const FAST_MIN: u16 = MEDIUM_MAX + 1;

/// Channel brightness, 0 = off, 255 = full.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const OFF: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(color: Color) -> Self {
        (color.r, color.g, color.b)
    }
}

/// Motion band of a smoothed magnitude.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum MotionLevel {
    Still,
    Slow,
    Medium,
    Fast,
}

impl MotionLevel {
    pub const fn from_magnitude(magnitude: u16) -> Self {
        match magnitude {
            0..=STILL_MAX => Self::Still,
            SLOW_MIN..=SLOW_MAX => Self::Slow,
            MEDIUM_MIN..=MEDIUM_MAX => Self::Medium,
            FAST_MIN..=u16::MAX => Self::Fast,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Still => Color::RED,
            Self::Slow => Color::YELLOW,
            Self::Medium => Color::GREEN,
            Self::Fast => Color::BLUE,
        }
    }
}

/// Map a smoothed magnitude to its indicator color.
pub const fn classify(magnitude: u16) -> Color {
    MotionLevel::from_magnitude(magnitude).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(classify(0), Color::new(255, 0, 0));
        assert_eq!(classify(100), Color::new(255, 0, 0));
        assert_eq!(classify(101), Color::new(255, 255, 0));
        assert_eq!(classify(300), Color::new(255, 255, 0));
        assert_eq!(classify(301), Color::new(0, 255, 0));
        assert_eq!(classify(600), Color::new(0, 255, 0));
        assert_eq!(classify(601), Color::new(0, 0, 255));
        assert_eq!(classify(u16::MAX), Color::new(0, 0, 255));
    }

    #[test]
    fn bands_are_disjoint() {
        let bands = [
            (0..=STILL_MAX, MotionLevel::Still),
            (SLOW_MIN..=SLOW_MAX, MotionLevel::Slow),
            (MEDIUM_MIN..=MEDIUM_MAX, MotionLevel::Medium),
            (FAST_MIN..=u16::MAX, MotionLevel::Fast),
        ];
        for magnitude in 0..=u16::MAX {
            let mut owners = bands.iter().filter(|(band, _)| band.contains(&magnitude));
            let (_, level) = owners.next().unwrap();
            assert!(owners.next().is_none(), "{} in two bands", magnitude);
            assert_eq!(MotionLevel::from_magnitude(magnitude), *level);
        }
    }

    #[test]
    fn levels_are_monotonic() {
        let mut previous = MotionLevel::Still;
        for magnitude in 0..=u16::MAX {
            let level = MotionLevel::from_magnitude(magnitude);
            assert!(level >= previous, "level dropped at {}", magnitude);
            previous = level;
        }
    }

    #[test]
    fn color_converts_to_triple() {
        let triple: (u8, u8, u8) = classify(450).into();
        assert_eq!(triple, (0, 255, 0));
    }
}
