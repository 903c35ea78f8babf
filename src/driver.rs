//! Top-level orchestration used by both binaries: validates arguments,
//! dispatches on [`Formula`], and renders the final hex string (ยง4.H).

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::BbpError;
use crate::formula::Formula;
use crate::{hex, pool, series};
use crate::{DEFAULT_BATCH_SIZE, RIGHT_TAIL_SLACK};

/// The outcome of one end-to-end run: the rendered hex digits plus wall-clock
/// elapsed time, ready for the binaries' stdout contract.
pub struct RunResult {
    pub digits: String,
    pub elapsed: Duration,
}

/// Validated, immutable configuration for one concurrent run.
#[derive(Debug)]
pub struct Driver {
    start: u64,
    threads: u16,
    upper_bound: u64,
    batch_size: u64,
    formula: Formula,
}

impl Driver {
    /// Validates `threads != 0` (clap's type system already enforces the
    /// `<= 65535` ceiling via `u16`) and derives `upper_bound`/`batch_size`.
    pub fn new(start: u64, threads: u16, formula: Formula) -> Result<Self, BbpError> {
        if threads == 0 {
            return Err(BbpError::ArgumentInvalid(
                "threads must be at least 1".to_string(),
            ));
        }
        let upper_bound = start;
        let batch_size = DEFAULT_BATCH_SIZE.min(upper_bound.max(1));
        Ok(Driver {
            start,
            threads,
            upper_bound,
            batch_size,
            formula,
        })
    }

    #[tracing::instrument(skip(self))]
    pub fn run(&self) -> Result<RunResult, BbpError> {
        let started = Instant::now();

        let total = match self.formula {
            Formula::Original => {
                let ctx = Arc::new(pool::Context::new(self.upper_bound, self.batch_size));
                pool::run(Arc::clone(&ctx), self.threads)?;
                ctx.reduce_shards() + series::right_tail(self.upper_bound, RIGHT_TAIL_SLACK)
            }
            Formula::Bellard => crate::bellard::evaluate(self.start, RIGHT_TAIL_SLACK)?,
        };

        let elapsed = started.elapsed();
        let digits = hex::render(total);
        Ok(RunResult { digits, elapsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_threads() {
        match Driver::new(100, 0, Formula::Original) {
            Err(BbpError::ArgumentInvalid(_)) => {}
            other => panic!("expected ArgumentInvalid, got {other:?}"),
        }
    }

    #[test]
    fn batch_size_never_exceeds_upper_bound() {
        let driver = Driver::new(5, 1, Formula::Original).unwrap();
        assert!(driver.batch_size <= driver.upper_bound.max(1));
    }

    #[test]
    fn zero_start_produces_ten_digits() {
        let driver = Driver::new(0, 4, Formula::Original).unwrap();
        let result = driver.run().unwrap();
        assert_eq!(result.digits.len(), crate::PRECISION);
    }

    #[test]
    fn thread_count_does_not_change_the_digits() {
        let one = Driver::new(1000, 1, Formula::Original).unwrap().run().unwrap();
        let many = Driver::new(1000, 8, Formula::Original).unwrap().run().unwrap();
        assert_eq!(one.digits, many.digits);
    }
}
