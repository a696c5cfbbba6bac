//! ABC colony loop execution.
//!
//! [`AbcRunner`] orchestrates the full search:
//! initialize → repeat { employed → onlooker → scout → best update →
//! record convergence } → terminate after the fixed cycle budget.

use super::config::AbcConfig;
use super::selection::roulette;
use super::types::{AbcProblem, FoodSource};
use crate::random::create_rng;
use rand::Rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Result of an ABC optimization run.
#[derive(Debug, Clone)]
pub struct AbcResult<S: Clone> {
    /// The best solution found during the entire run.
    pub best: S,

    /// Cost of the best solution (unweighted-by-fitness total cost).
    pub best_cost: f64,

    /// Number of cycles actually executed.
    pub cycles: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost at the end of each completed cycle.
    ///
    /// Length equals [`cycles`](Self::cycles); monotonically
    /// non-increasing.
    pub convergence: Vec<f64>,
}

/// Executes the Artificial Bee Colony loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = AbcConfig::default().with_seed(42);
/// let result = AbcRunner::run(&problem, &config);
/// println!("Best cost: {}", result.best_cost);
/// ```
pub struct AbcRunner;

impl AbcRunner {
    /// Runs the ABC optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`AbcConfig::validate`] first to get a descriptive error).
    pub fn run<P: AbcProblem>(problem: &P, config: &AbcConfig) -> AbcResult<P::Solution> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the ABC with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run
    /// stops at the next cycle boundary and returns the best solution
    /// found so far with a correspondingly shorter convergence trace.
    pub fn run_with_cancel<P: AbcProblem>(
        problem: &P,
        config: &AbcConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AbcResult<P::Solution> {
        config.validate().expect("invalid AbcConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Initialize colony
        let mut colony: Vec<FoodSource<P::Solution>> = (0..config.colony_size)
            .map(|_| {
                let solution = problem.random_solution(&mut rng);
                let cost = problem.cost(&solution);
                FoodSource::new(solution, cost)
            })
            .collect();

        // 2. Seed the best record from the lowest-cost member
        let seed_idx = lowest_cost(&colony);
        let mut best = colony[seed_idx].solution.clone();
        let mut best_cost = colony[seed_idx].cost;

        let mut convergence = Vec::with_capacity(config.max_cycles);
        let mut cancelled = false;
        let start = Instant::now();

        // 3. Colony loop
        for cycle in 0..config.max_cycles {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(limit) {
                    break;
                }
            }

            // Employed phase: one neighbor per member.
            let members: Vec<usize> = (0..colony.len()).collect();
            run_phase(problem, &mut colony, &members, &mut rng, config.parallel);

            // Onlooker phase: fitness-proportional re-sampling over the
            // post-employed colony, colony-size trials.
            let picks: Vec<usize> = (0..colony.len())
                .map(|_| roulette(&colony, &mut rng))
                .collect();
            run_phase(problem, &mut colony, &picks, &mut rng, config.parallel);

            // Scout phase: regenerate members stagnant past the limit.
            for source in colony.iter_mut() {
                if source.trials > config.scout_limit {
                    let solution = problem.random_solution(&mut rng);
                    let cost = problem.cost(&solution);
                    *source = FoodSource::new(solution, cost);
                }
            }

            // Best update: strict improvement on total cost, never the
            // fitness transform, keeping the record monotonic.
            let idx = lowest_cost(&colony);
            if colony[idx].cost < best_cost {
                best = colony[idx].solution.clone();
                best_cost = colony[idx].cost;
            }

            convergence.push(best_cost);
            problem.on_cycle(cycle + 1, best_cost);
            log::trace!("cycle {}: best cost {best_cost}", cycle + 1);
        }

        log::debug!(
            "abc finished after {} cycles, best cost {best_cost}",
            convergence.len()
        );

        AbcResult {
            best,
            best_cost,
            cycles: convergence.len(),
            cancelled,
            convergence,
        }
    }
}

/// Runs one perturbation phase over the given member indices.
///
/// Candidates are generated against the phase-start colony, each from a
/// child seed pre-drawn off the master RNG — parallel and sequential
/// modes therefore produce identical results. Accept/reject commits run
/// afterwards, sequentially in trial order (the phase barrier).
fn run_phase<P: AbcProblem>(
    problem: &P,
    colony: &mut [FoodSource<P::Solution>],
    targets: &[usize],
    rng: &mut impl Rng,
    parallel: bool,
) {
    let seeds: Vec<u64> = (0..targets.len()).map(|_| rng.random()).collect();

    let generate = |(&i, &seed): (&usize, &u64)| {
        let mut child = create_rng(seed);
        let candidate = problem.neighbor(&colony[i].solution, &mut child);
        let cost = problem.cost(&candidate);
        (candidate, cost)
    };

    let candidates: Vec<(P::Solution, f64)> = if parallel {
        targets
            .par_iter()
            .zip(seeds.par_iter())
            .map(generate)
            .collect()
    } else {
        targets.iter().zip(seeds.iter()).map(generate).collect()
    };

    for (&i, (candidate, cost)) in targets.iter().zip(candidates) {
        // fitness is strictly decreasing in cost, so a strict fitness
        // improvement is exactly a strict cost decrease.
        if cost < colony[i].cost {
            colony[i] = FoodSource::new(candidate, cost);
        } else {
            colony[i].trials += 1;
        }
    }
}

/// Index of the member with the lowest cost (first on ties).
fn lowest_cost<S>(colony: &[FoodSource<S>]) -> usize {
    let mut best = 0;
    for (i, source) in colony.iter().enumerate().skip(1) {
        if source.cost < colony[best].cost {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
