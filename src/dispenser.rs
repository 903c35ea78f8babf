//! Atomic work-dispenser handing out batches of `k` values (ยง4.F).

use std::sync::Mutex;

/// Hands out disjoint batch starts `s` over `[0, upper_bound)`, stepping by
/// `batch_size`. Terminal once the cursor reaches `upper_bound`.
pub struct Dispenser {
    upper_bound: u64,
    batch_size: u64,
    cursor: Mutex<u64>,
}

impl Dispenser {
    pub fn new(upper_bound: u64, batch_size: u64) -> Self {
        Dispenser {
            upper_bound,
            batch_size,
            cursor: Mutex::new(0),
        }
    }

    /// Returns the next batch start, or `None` once exhausted. Every
    /// returned value is distinct and no two callers ever observe the same
    /// one, since the cursor read-and-advance happens under one mutex
    /// acquisition.
    pub fn next_batch(&self) -> Option<u64> {
        let mut cursor = self.cursor.lock().expect("cursor mutex poisoned");
        if *cursor >= self.upper_bound {
            return None;
        }
        let s = *cursor;
        *cursor += self.batch_size;
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn exhausts_to_none() {
        let d = Dispenser::new(10, 100);
        assert_eq!(d.next_batch(), Some(0));
        assert_eq!(d.next_batch(), None);
    }

    #[test]
    fn emits_expected_sequence() {
        let d = Dispenser::new(250, 100);
        assert_eq!(d.next_batch(), Some(0));
        assert_eq!(d.next_batch(), Some(100));
        assert_eq!(d.next_batch(), Some(200));
        assert_eq!(d.next_batch(), None);
    }

    #[test]
    fn zero_upper_bound_yields_no_work() {
        let d = Dispenser::new(0, 100);
        assert_eq!(d.next_batch(), None);
    }

    #[test]
    fn concurrent_callers_never_observe_the_same_batch() {
        let dispenser = Arc::new(Dispenser::new(10_000, 7));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let d = Arc::clone(&dispenser);
            handles.push(thread::spawn(move || {
                let mut seen = Vec::new();
                while let Some(s) = d.next_batch() {
                    seen.push(s);
                }
                seen
            }));
        }
        let mut all = Vec::new();
        for h in handles {
            all.extend(h.join().unwrap());
        }
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len(), "every batch start must be unique");

        let expected_count = (10_000u64 + 7 - 1) / 7;
        assert_eq!(all.len() as u64, expected_count);
    }
}
