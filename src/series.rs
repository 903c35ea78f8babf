//! The four-term original BBP series (ยง4.B, ยง4.C, ยง4.D).
//!
//! `π = Σ_k 16^(-k) · (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6))`.
//! The coefficient table below pairs each `j` with its multiplier; `r = 8k+j`
//! is the modulus passed to [`modpow_barrett`].

use twofloat::TwoFloat;

use crate::error::BbpError;
use crate::modpow::modpow_barrett;
use crate::precision::reduce_mod1;
use crate::EPSILON;

/// `(j, multiplier)` pairs of the original BBP series.
pub const SERIES: [(u64, f64); 4] = [(1, 4.0), (4, -2.0), (5, -1.0), (6, -1.0)];

/// One left-series term: `mult_j * modpow_barrett(16, U-k, 8k+j) / (8k+j)`,
/// reduced modulo 1. Requires `k < upper_bound`.
pub fn left_term(j: u64, mult: f64, k: u64, upper_bound: u64) -> Result<TwoFloat, BbpError> {
    let r = 8 * k + j;
    let exponent = upper_bound - k;
    let power = modpow_barrett(16, exponent, r)?;
    let term = TwoFloat::from(mult) * TwoFloat::from(power as f64) / TwoFloat::from(r as f64);
    Ok(reduce_mod1(term))
}

/// One right-series term: `mult_j * 16^(U-k) / (8k+j)`, where `U-k <= 0` so
/// the exponent is evaluated in plain floating point rather than via
/// [`modpow_barrett`], which only accepts non-negative integer exponents.
pub fn right_term(j: u64, mult: f64, k: u64, upper_bound: u64) -> f64 {
    let r = (8 * k + j) as f64;
    let exponent = upper_bound as i64 - k as i64;
    mult * 16f64.powi(exponent as i32) / r
}

/// Sums `term(j, k, upper_bound)` for every `j` in [`SERIES`] and every `k`
/// in `[s, min(s + batch_size, upper_bound))`, reducing mod 1 after each
/// addition (ยง4.C).
pub fn left_batch(s: u64, batch_size: u64, upper_bound: u64) -> Result<TwoFloat, BbpError> {
    let end = (s + batch_size).min(upper_bound);
    let mut acc = TwoFloat::from(0.0_f64);
    for (j, mult) in SERIES {
        let mut k = s;
        while k < end {
            acc = reduce_mod1(acc + left_term(j, mult, k, upper_bound)?);
            k += 1;
        }
    }
    Ok(acc)
}

/// Sums the analytic tail `k >= upper_bound` for every `j` in [`SERIES`],
/// stopping each series once its term magnitude drops below `EPSILON`, up to
/// a hard cap of `slack` extra iterations (ยง4.D).
pub fn right_tail(upper_bound: u64, slack: u64) -> TwoFloat {
    let cap = upper_bound + slack;
    let mut acc = TwoFloat::from(0.0_f64);
    for (j, mult) in SERIES {
        let mut k = upper_bound;
        while k < cap {
            let t = right_term(j, mult, k, upper_bound);
            if t.abs() < EPSILON {
                break;
            }
            acc = reduce_mod1(acc + TwoFloat::from(t));
            k += 1;
        }
    }
    acc
}
