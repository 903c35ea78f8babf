//! Extended-precision fractional arithmetic.
//!
//! The BBP left-series accumulation is numerically unstable in `f64`:
//! naive summation of `O(d)` fractional terms loses the low-order mantissa
//! bits that carry the hex digit being extracted. [`reduce_mod1`] is
//! applied after every addition to keep each partial sum inside `[0, 1)`,
//! and the whole pipeline runs in [`TwoFloat`] (double-double, ~106 bits of
//! mantissa) rather than plain `f64` (52 bits), which is not sufficient
//! once `d` reaches roughly `10^5` (ยง5, ยง9).

use twofloat::TwoFloat;

/// Reduces `x` modulo 1, returning a value in `[0, 1)`.
pub fn reduce_mod1(x: TwoFloat) -> TwoFloat {
    let approx_floor = x.hi().floor();
    let mut y = x - TwoFloat::from(approx_floor);

    let zero = TwoFloat::from(0.0_f64);
    let one = TwoFloat::from(1.0_f64);
    while y < zero {
        y = y + one;
    }
    while y >= one {
        y = y - one;
    }
    y
}
