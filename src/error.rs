use std::fmt;

/// Error taxonomy for the BBP driver: every fatal condition the CLI
/// binaries can hit is one of these three (ยง7).
#[derive(Debug)]
pub enum BbpError {
    /// Bad CLI arguments: wrong arity, negative start, out-of-range thread count.
    ArgumentInvalid(String),
    /// Worker thread creation, spawn, or join failed.
    ResourceExhausted(String),
    /// A contract that must never be violated was violated (e.g. `r == 0`
    /// reaching [`crate::modpow::modpow_barrett`]). Not recoverable.
    InternalInvariant(String),
}

impl fmt::Display for BbpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BbpError::ArgumentInvalid(msg) => write!(f, "Invalid Argument: {msg}"),
            BbpError::ResourceExhausted(msg) => write!(f, "Error Creating/Joining Threads: {msg}"),
            BbpError::InternalInvariant(msg) => write!(f, "Internal Invariant Violated: {msg}"),
        }
    }
}

impl std::error::Error for BbpError {}
