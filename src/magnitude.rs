//! Integer-only vector magnitude.
//!
//! The squared norm of three `i16` components is at most `3 * 32768^2`,
//! which still fits in a `u32`; its square root fits in a `u16`.

use crate::reading::AxisReading;

/// Largest value [`magnitude`] can return: `floor(sqrt(3 * 32768^2))`.
pub const MAX_MAGNITUDE: u16 = 56_755;

/// Floor of the square root of `n`, by Newton's iteration.
///
/// Starts from `n` and iterates `x' = (x + n / x) / 2` while the estimate
/// keeps decreasing. The sum is formed in `u64` so the first step cannot
/// overflow for `n` close to `u32::MAX`.
pub fn isqrt(n: u32) -> u16 {
    if n == 0 {
        return 0;
    }

    let n = u64::from(n);
    let mut x = n;
    let mut next = (x + n / x) / 2;
    while next < x {
        x = next;
        next = (x + n / x) / 2;
    }

    // x <= 65535 because n < 2^32
    x as u16
}

/// Euclidean norm of a reading, rounded down.
pub fn magnitude(reading: &AxisReading) -> u16 {
    let x = i32::from(reading.x()).unsigned_abs();
    let y = i32::from(reading.y()).unsigned_abs();
    let z = i32::from(reading.z()).unsigned_abs();

    isqrt(x * x + y * y + z * z)
}
