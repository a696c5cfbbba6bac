//! Core trait and types for the ABC engine.
//!
//! [`AbcProblem`] is the contract between the generic colony engine and
//! a domain-specific problem implementation: how to build a random
//! solution, how to score it, and how to perturb it into a neighbor.

use rand::Rng;

/// Defines an Artificial Bee Colony optimization problem.
///
/// The engine minimizes the cost function; ranking between colony
/// members uses the [`fitness`] transform of cost.
///
/// # Thread Safety
///
/// `AbcProblem` must be `Send + Sync` because the runner may generate
/// and evaluate candidates in parallel using rayon.
pub trait AbcProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send + Sync;

    /// Creates a random solution.
    ///
    /// Called for the initial colony and whenever a scout replaces a
    /// stagnant member. Repeated calls must produce independent
    /// solutions — any shared state between calls is read-only
    /// reference data.
    fn random_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better, never negative.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Produces a locally perturbed copy of a solution.
    ///
    /// Must not mutate the input: the colony member it belongs to stays
    /// intact until the candidate is accepted.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;

    /// Called at the end of each cycle with the best cost so far.
    ///
    /// The default implementation is a no-op.
    fn on_cycle(&self, _cycle: usize, _best_cost: f64) {}
}

/// Selection-ranking transform of cost.
///
/// Strictly decreasing in cost and always in `(0, 1]`: a cost of zero
/// maps to exactly 1, and the denominator `1 + cost` is never zero for
/// non-negative cost.
pub fn fitness(cost: f64) -> f64 {
    1.0 / (1.0 + cost)
}

/// One colony member: a candidate solution, its cost, and its trial
/// counter (consecutive non-improving attempts since the last
/// acceptance or regeneration).
#[derive(Debug, Clone)]
pub struct FoodSource<S> {
    /// The candidate solution.
    pub solution: S,
    /// Cost of the solution, cached at last evaluation.
    pub cost: f64,
    /// Consecutive non-improving attempts.
    pub trials: usize,
}

impl<S> FoodSource<S> {
    /// Wraps a freshly evaluated solution with a zeroed trial counter.
    pub fn new(solution: S, cost: f64) -> Self {
        Self {
            solution,
            cost,
            trials: 0,
        }
    }

    /// Fitness of this member.
    pub fn fitness(&self) -> f64 {
        fitness(self.cost)
    }
}
