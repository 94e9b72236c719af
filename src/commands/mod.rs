//! Command implementations

pub mod autoplay;
pub mod check;
pub mod simple;

pub use autoplay::{AutoplayConfig, AutoplayResult, run_autoplay};
pub use check::{CheckResult, check_guess};
pub use simple::run_simple;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded RNG when `seed` is given, otherwise one seeded from the OS
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
