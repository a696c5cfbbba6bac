//! Onlooker selection.
//!
//! Fitness-proportionate (roulette wheel) sampling over the colony.
//! Unlike a minimization roulette that must invert raw costs, the ABC
//! fitness transform `1/(1+cost)` is already higher-is-better and
//! strictly positive, so the draw runs directly against the fitness
//! mass.
//!
//! # References
//!
//! - Karaboga & Basturk (2007), "A powerful and efficient algorithm for
//!   numerical function optimization: artificial bee colony (ABC)
//!   algorithm"

use super::types::FoodSource;
use rand::Rng;

/// Selects a colony index with probability proportional to fitness.
///
/// Draws a uniform value over the total fitness mass and scans the
/// cumulative sums in natural order; the first member whose cumulative
/// mass exceeds the draw wins, which is also the tie-breaking rule.
///
/// # Panics
/// Panics if `colony` is empty.
pub fn roulette<S, R: Rng>(colony: &[FoodSource<S>], rng: &mut R) -> usize {
    assert!(!colony.is_empty(), "cannot select from an empty colony");

    let n = colony.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = colony.iter().map(|source| source.fitness()).sum();

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, source) in colony.iter().enumerate() {
        cumulative += source.fitness();
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
