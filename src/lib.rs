//! Exam-to-classroom assignment via Artificial Bee Colony optimization.
//!
//! Assigns university exams to classrooms while minimizing constraint
//! violations — room capacity overflow, wasted seats, room-type
//! mismatches, and room–timeslot collisions. The search is a
//! best-effort randomized optimizer, not a complete constraint solver:
//! it may terminate with a nonzero-cost assignment, and for
//! unsatisfiable inputs that is the expected outcome rather than an
//! error.
//!
//! # Architecture
//!
//! - **[`abc`]**: The generic Artificial Bee Colony engine —
//!   trait-driven, domain-agnostic, parallel-capable.
//! - **[`models`]**: Exam/room reference records and the assignment
//!   encoding.
//! - **[`cost`]**: The pure multi-term cost model and its weights.
//! - **[`problem`]**: The exam-scheduling binding that plugs models and
//!   cost into the engine, including the neighborhood move policies.
//! - **[`validation`]**: Precondition checks run before any search.
//! - **[`schedule`]**: The validate → search → report facade.
//! - **[`dataset`]**: Tabular ingestion of exam/room records and export
//!   of the final schedule.
//! - **[`random`]**: Seeded RNG construction; every stochastic draw in
//!   the crate threads through an explicit seed.
//!
//! Rendering (tables, convergence charts) and interactive parameter
//! input are external concerns — the crate returns plain data.
//!
//! # Example
//!
//! ```
//! use examhive::abc::AbcConfig;
//! use examhive::cost::CostWeights;
//! use examhive::models::{Exam, Room};
//! use examhive::problem::ExamRoomProblem;
//! use examhive::schedule::solve;
//!
//! let exams = vec![
//!     Exam::new("CS101", 30).with_day(1).with_time("09:00"),
//!     Exam::new("MA201", 25).with_day(1).with_time("09:00"),
//! ];
//! let rooms = vec![Room::new("A-1", 30), Room::new("A-2", 25)];
//!
//! let problem = ExamRoomProblem::new(exams, rooms, CostWeights::default());
//! let config = AbcConfig::default()
//!     .with_colony_size(20)
//!     .with_max_cycles(60)
//!     .with_seed(42);
//!
//! let result = solve(&problem, &config).unwrap();
//! assert_eq!(result.total_cost, 0.0);
//! assert_eq!(result.convergence.len(), 60);
//! ```

pub mod abc;
pub mod cost;
pub mod dataset;
pub mod models;
pub mod problem;
pub mod random;
pub mod schedule;
pub mod validation;
