//! Fixed-width modular exponentiation via Barrett reduction (ยง4.A).
//!
//! This is the hottest loop in the whole program: one call per left-series
//! iteration, across all four `j`-series, across every batch. `r` varies on
//! every call (`r = 8k + j`), so the Barrett `factor` is recomputed every
//! time rather than cached.

use crate::error::BbpError;

/// Reduces the 128-bit product `t` modulo `r`, given `factor = u64::MAX / r`.
///
/// Since both operands to the multiplication that produced `t` are already
/// reduced mod `r`, `t < r * r`, so `t * factor < r * (u64::MAX / r) * r
/// \approx r * 2^64`, which fits comfortably in a `u128` for any `r < 2^63`.
/// The correction loop below therefore runs at most two iterations.
#[inline]
fn barrett_reduce(t: u128, r: u64, factor: u64) -> u64 {
    let r128 = r as u128;
    let q = (t * factor as u128) >> 64;
    let mut rem = t - q * r128;
    while rem >= r128 {
        rem -= r128;
    }
    rem as u64
}

/// Computes `b^e mod r` using exponentiation by squaring, with every
/// modular multiplication reduced via [`barrett_reduce`].
///
/// # Errors
///
/// Returns [`BbpError::InternalInvariant`] if `r == 0`. This must never
/// happen for any caller in this crate: `r = 8k + j` with `j >= 1`.
pub fn modpow_barrett(mut b: u64, mut e: u64, r: u64) -> Result<u64, BbpError> {
    if r == 0 {
        return Err(BbpError::InternalInvariant(
            "modpow_barrett called with r == 0".to_string(),
        ));
    }
    if r == 1 {
        return Ok(0);
    }

    let factor = u64::MAX / r;
    let mut acc: u64 = 1;
    b %= r;

    while e != 0 {
        if e & 1 == 1 {
            acc = barrett_reduce(acc as u128 * b as u128, r, factor);
        }
        b = barrett_reduce(b as u128 * b as u128, r, factor);
        e >>= 1;
    }

    Ok(acc)
}
