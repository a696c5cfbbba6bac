//! Artificial Bee Colony (ABC) engine.
//!
//! A generic, domain-agnostic population-based optimizer. Users define
//! their problem by implementing [`AbcProblem`] — random solution
//! construction, cost evaluation, and neighbor perturbation — and the
//! engine drives the colony through the classic three phases each
//! cycle:
//!
//! - **Employed**: every food source attempts one local move; strict
//!   improvements are accepted, failures increment the member's trial
//!   counter.
//! - **Onlooker**: fitness-proportional (roulette) re-sampling focuses
//!   additional moves on promising members.
//! - **Scout**: members stagnant past the configured trial limit are
//!   abandoned and regenerated from scratch.
//!
//! The best solution seen so far and a per-cycle convergence trace are
//! tracked across the fixed cycle budget. There is no early stopping;
//! cancellation and an optional wall-clock limit are honored at cycle
//! boundaries.
//!
//! # Key Types
//!
//! - [`AbcProblem`]: Problem definition — generation, evaluation, moves
//! - [`AbcConfig`]: Algorithm parameters (colony size, cycles, scout limit)
//! - [`AbcRunner`]: Executes the colony loop
//! - [`AbcResult`]: Final result with convergence statistics
//!
//! # References
//!
//! - Karaboga (2005), *An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization*, Technical Report TR06
//! - Karaboga & Basturk (2007), "A powerful and efficient algorithm for
//!   numerical function optimization: artificial bee colony (ABC)
//!   algorithm", *Journal of Global Optimization* 39(3), 459-471.

mod config;
mod runner;
mod selection;
mod types;

pub use config::AbcConfig;
pub use runner::{AbcResult, AbcRunner};
pub use selection::roulette;
pub use types::{fitness, AbcProblem, FoodSource};
