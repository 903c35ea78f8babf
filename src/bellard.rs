//! Bellard's accelerated base-2 variant of the digit-extraction formula
//! (ยง4.L). Selectable via `--formula bellard` on the concurrent binary;
//! additive to, not a replacement for, the original four-term series, and
//! not exercised by the canonical end-to-end table.

use twofloat::TwoFloat;

use crate::error::BbpError;
use crate::modpow::modpow_barrett;
use crate::precision::reduce_mod1;
use crate::EPSILON;

/// `(sign, m, j, l)` rows of Bellard's seven sub-series.
pub const SUB_SERIES: [(f64, u64, u64, i64); 7] = [
    (-1.0, 4, 1, -1),
    (-1.0, 4, 3, -6),
    (1.0, 10, 1, 2),
    (-1.0, 10, 3, 0),
    (-1.0, 10, 5, -4),
    (-1.0, 10, 7, -4),
    (1.0, 10, 9, -6),
];

/// Upper bound for a sub-series: `floor((4d + l) / 10)`, clamped to 0 so a
/// negative `l` never drives it below the domain of `k`.
fn upper_bound_for(d: u64, l: i64) -> u64 {
    let numerator = 4 * d as i64 + l;
    (numerator / 10).max(0) as u64
}

/// One left-sub-series term, base 2 instead of base 16: `sign *
/// modpow_barrett(2, bound - k, m*k+j) / (m*k+j)`, reduced modulo 1.
fn left_sub_term(sign: f64, m: u64, j: u64, k: u64, bound: u64) -> Result<TwoFloat, BbpError> {
    let r = m * k + j;
    let exponent = bound - k;
    let power = modpow_barrett(2, exponent, r)?;
    let term = TwoFloat::from(sign) * TwoFloat::from(power as f64) / TwoFloat::from(r as f64);
    Ok(reduce_mod1(term))
}

/// One right-sub-series term, evaluated in plain floating point since the
/// exponent `bound - k` is non-positive there.
fn right_sub_term(sign: f64, m: u64, j: u64, k: u64, bound: u64) -> f64 {
    let r = (m * k + j) as f64;
    let exponent = bound as i64 - k as i64;
    sign * 2f64.powi(exponent as i32) / r
}

fn left_sub_series(d: u64) -> Result<TwoFloat, BbpError> {
    let mut acc = TwoFloat::from(0.0_f64);
    for (sign, m, j, l) in SUB_SERIES {
        let bound = upper_bound_for(d, l);
        let mut k = 0;
        while k < bound {
            acc = reduce_mod1(acc + left_sub_term(sign, m, j, k, bound)?);
            k += 1;
        }
    }
    Ok(acc)
}

fn right_sub_series(d: u64, slack: u64) -> TwoFloat {
    let mut acc = TwoFloat::from(0.0_f64);
    for (sign, m, j, l) in SUB_SERIES {
        let bound = upper_bound_for(d, l);
        let cap = bound + slack;
        let mut k = bound;
        while k < cap {
            let t = right_sub_term(sign, m, j, k, bound);
            if t.abs() < EPSILON {
                break;
            }
            acc = reduce_mod1(acc + TwoFloat::from(t));
            k += 1;
        }
    }
    acc
}

/// Evaluates the full Bellard formula at digit position `d`: left
/// sub-series summed sequentially (no worker pool — this is the
/// opt-in, unparallelized extension) plus the analytic right tail.
pub fn evaluate(d: u64, slack: u64) -> Result<TwoFloat, BbpError> {
    let left = left_sub_series(d)?;
    let right = right_sub_series(d, slack);
    Ok(reduce_mod1(left + right))
}
