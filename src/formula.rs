//! Selects which BBP variant a concurrent run evaluates (ยง9: replaces a
//! function-pointer dispatch with a plain enum, matched statically).

use clap::ValueEnum;

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Formula {
    /// The canonical four-term base-16 series (ยง4.A-ยง4.H).
    Original,
    /// Bellard's seven-sub-series base-2 variant (ยง4.L). Opt-in extension,
    /// not exercised by the canonical end-to-end table.
    Bellard,
}

impl Default for Formula {
    fn default() -> Self {
        Formula::Original
    }
}
