//! Fixed shard array for diffusing accumulator lock contention (ยง4.E).

use std::sync::Mutex;

use twofloat::TwoFloat;

use crate::NUM_SHARDS;

/// `NUM_SHARDS` independent accumulators, each guarded by its own mutex.
/// Sized to comfortably exceed typical core counts so two workers rarely
/// contend for the same shard.
pub struct Shards {
    cells: Vec<Mutex<TwoFloat>>,
}

impl Shards {
    pub fn new() -> Self {
        let cells = (0..NUM_SHARDS)
            .map(|_| Mutex::new(TwoFloat::from(0.0_f64)))
            .collect();
        Shards { cells }
    }

    /// Adds `value` into shard `index`, holding that shard's mutex for the
    /// duration of the add and no other.
    pub fn add(&self, index: usize, value: TwoFloat) {
        let mut cell = self.cells[index].lock().expect("shard mutex poisoned");
        *cell = *cell + value;
    }

    /// Sums every shard. Called only after all workers have joined.
    pub fn reduce(&self) -> TwoFloat {
        self.cells.iter().fold(TwoFloat::from(0.0_f64), |acc, cell| {
            acc + *cell.lock().expect("shard mutex poisoned")
        })
    }
}

impl Default for Shards {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_shards_reduce_to_zero() {
        let shards = Shards::new();
        assert_eq!(shards.reduce().hi(), 0.0);
    }

    #[test]
    fn add_is_visible_in_reduce() {
        let shards = Shards::new();
        shards.add(0, TwoFloat::from(0.5));
        shards.add(NUM_SHARDS - 1, TwoFloat::from(0.25));
        assert!((shards.reduce().hi() - 0.75).abs() < 1e-15);
    }

    #[test]
    fn independent_shards_accumulate_independently() {
        let shards = Shards::new();
        for i in 0..NUM_SHARDS {
            shards.add(i, TwoFloat::from(1.0));
        }
        assert!((shards.reduce().hi() - NUM_SHARDS as f64).abs() < 1e-9);
    }
}
