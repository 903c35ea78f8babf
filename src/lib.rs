//! Parallel digit-extraction computation of hexadecimal digits of π.
//!
//! The hot path is a Barrett-reduction modular exponentiation ([`modpow`])
//! feeding a sharded, work-stealing-free parallel accumulation ([`pool`],
//! [`shards`], [`dispenser`]) over the original four-term BBP series
//! ([`series`]). [`driver`] wires it all together for the `bbp-conc` and
//! `bbp-seq` binaries; [`bellard`] is an additive, opt-in variant.

pub mod bellard;
pub mod dispenser;
pub mod driver;
pub mod error;
pub mod formula;
pub mod hex;
pub mod modpow;
pub mod pool;
pub mod precision;
pub mod sequential;
pub mod series;
pub mod shards;

/// Number of hex digits rendered per run.
pub const PRECISION: usize = 10;

/// Termination threshold for the right-series tail.
pub const EPSILON: f64 = 1e-17;

/// Number of shard accumulators in the worker pool.
pub const NUM_SHARDS: usize = 15;

/// Default batch size handed out by the work dispenser.
pub const DEFAULT_BATCH_SIZE: u64 = 100;

/// Extra iterations beyond `upper_bound` the right-series tail may run
/// before it is forcibly cut off.
pub const RIGHT_TAIL_SLACK: u64 = 100;

pub use driver::Driver;
pub use error::BbpError;
pub use formula::Formula;
