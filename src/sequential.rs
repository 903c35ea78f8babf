//! Single-threaded reference path used by `bbp-seq`: no dispenser, no
//! shards, no worker pool — just the left batch over the whole range
//! followed by the right tail.

use twofloat::TwoFloat;

use crate::error::BbpError;
use crate::precision::reduce_mod1;
use crate::series::{left_batch, right_tail};
use crate::RIGHT_TAIL_SLACK;

/// Computes the extended-precision fractional value at digit position `d`
/// using the original four-term formula, single-threaded.
#[tracing::instrument]
pub fn bbp(d: u64) -> Result<TwoFloat, BbpError> {
    let left = left_batch(0, d, d)?;
    let right = right_tail(d, RIGHT_TAIL_SLACK);
    Ok(reduce_mod1(left + right))
}
