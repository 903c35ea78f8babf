//! Worker pool: spawns `T` threads that drain the dispenser into the shard
//! array (ยง4.G). Replaces the generic channel-based job queue this crate is
//! otherwise built on — the worker loop needs direct access to the shared
//! cursor, shard index, and shard array rather than opaque boxed closures.

use std::sync::{Arc, Mutex};
use std::thread;

use crate::dispenser::Dispenser;
use crate::error::BbpError;
use crate::series::left_batch;
use crate::shards::Shards;
use crate::NUM_SHARDS;

/// Shared state handed to every worker by `Arc` reference. Owns the
/// dispenser, the shard array, and the round-robin shard index. No global
/// mutable state: this value is the single source of truth for a run.
pub struct Context {
    dispenser: Dispenser,
    shards: Shards,
    shard_index: Mutex<usize>,
    batch_size: u64,
    upper_bound: u64,
}

impl Context {
    pub fn new(upper_bound: u64, batch_size: u64) -> Self {
        Context {
            dispenser: Dispenser::new(upper_bound, batch_size),
            shards: Shards::new(),
            shard_index: Mutex::new(0),
            batch_size,
            upper_bound,
        }
    }

    /// Claims the next round-robin shard index, guarded by its own mutex
    /// and never held while a shard mutex is taken (lock-ordering:
    /// index -> shard).
    fn claim_shard(&self) -> usize {
        let mut index = self.shard_index.lock().expect("shard-index mutex poisoned");
        let claimed = *index;
        *index = (*index + 1) % NUM_SHARDS;
        claimed
    }

    /// Sums all shards. Only valid after every worker has joined.
    pub fn reduce_shards(&self) -> twofloat::TwoFloat {
        self.shards.reduce()
    }
}

#[tracing::instrument(skip(ctx))]
fn worker_loop(ctx: &Context) -> Result<(), BbpError> {
    while let Some(s) = ctx.dispenser.next_batch() {
        let contribution = left_batch(s, ctx.batch_size, ctx.upper_bound)?;
        let shard = ctx.claim_shard();
        tracing::debug!(shard, batch_start = s, "routing batch to shard");
        ctx.shards.add(shard, contribution);
    }
    Ok(())
}

/// Spawns `threads` workers draining `ctx`, then joins all of them.
/// Propagates the first error encountered by any worker; a thread that
/// fails to spawn or join is reported as `BbpError::ResourceExhausted`.
#[tracing::instrument(skip(ctx))]
pub fn run(ctx: Arc<Context>, threads: u16) -> Result<(), BbpError> {
    let mut handles = Vec::with_capacity(threads as usize);
    for _ in 0..threads {
        let ctx = Arc::clone(&ctx);
        let handle = thread::Builder::new()
            .spawn(move || worker_loop(&ctx))
            .map_err(|e| BbpError::ResourceExhausted(format!("failed to spawn worker: {e}")))?;
        handles.push(handle);
    }

    for handle in handles {
        handle
            .join()
            .map_err(|_| BbpError::ResourceExhausted("worker thread panicked".to_string()))??;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Context: Send, Sync);

    #[test]
    fn zero_upper_bound_leaves_shards_at_zero() {
        let ctx = Arc::new(Context::new(0, 100));
        run(Arc::clone(&ctx), 4).unwrap();
        assert_eq!(ctx.reduce_shards().hi(), 0.0);
    }

    #[test]
    fn single_threaded_run_matches_direct_batch_sum() {
        let upper_bound = 37;
        let batch_size = 5;
        let ctx = Arc::new(Context::new(upper_bound, batch_size));
        run(Arc::clone(&ctx), 1).unwrap();

        let mut expected = twofloat::TwoFloat::from(0.0_f64);
        let mut s = 0;
        while s < upper_bound {
            expected = expected + left_batch(s, batch_size, upper_bound).unwrap();
            s += batch_size;
        }
        assert!((ctx.reduce_shards().hi() - expected.hi()).abs() < 1e-9);
    }

    #[test]
    fn varying_thread_count_is_deterministic() {
        let upper_bound = 200;
        let batch_size = 13;

        let one = Arc::new(Context::new(upper_bound, batch_size));
        run(Arc::clone(&one), 1).unwrap();

        let many = Arc::new(Context::new(upper_bound, batch_size));
        run(Arc::clone(&many), 8).unwrap();

        assert!((one.reduce_shards().hi() - many.reduce_shards().hi()).abs() < 1e-6);
    }
}
