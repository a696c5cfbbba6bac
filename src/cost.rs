//! Assignment cost model.
//!
//! [`evaluate`] scores a candidate [`Assignment`] against the run's
//! exam/room reference data and a set of caller-supplied
//! [`CostWeights`]. It is a pure function: no side effects,
//! deterministic for fixed inputs. The search engine ranks candidates
//! through the reciprocal fitness transform in
//! [`abc::fitness`](crate::abc::fitness).
//!
//! Violation categories:
//!
//! - **Capacity violation** — room too small for the exam. Accounted
//!   per [`CapacityPolicy`].
//! - **Wasted capacity** — surplus seats when the room is big enough,
//!   in raw seats.
//! - **Type mismatch** — exam's classification requires a different
//!   room type than the assigned room declares.
//! - **Room conflict** — two exams in the same room at the same
//!   `(day, time)` slot. The first occupant of a slot is free; each
//!   later arrival counts one conflict, scanning in mapping order.
//! - **Margin violation** — spare seats below the configured safety
//!   margin, counted only when capacity itself is not violated.

use std::collections::HashSet;

use crate::models::{Assignment, Exam, Room};

/// How capacity violations are accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Magnitude of overflow: `students − capacity` per violating exam.
    #[default]
    Overflow,
    /// One unit per violating exam, regardless of overflow size.
    PerExam,
}

/// Caller-supplied weights and policies for the cost model.
///
/// One weight per violation category; all weights must be
/// non-negative. Defaults follow the classic α=50 / β=5 split between
/// the capacity hard constraint and the wasted-capacity soft objective.
///
/// # Examples
///
/// ```
/// use examhive::cost::{CapacityPolicy, CostWeights};
///
/// let weights = CostWeights::default()
///     .with_capacity(100.0)
///     .with_capacity_policy(CapacityPolicy::PerExam)
///     .with_min_free_seats(5);
/// assert_eq!(weights.capacity, 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct CostWeights {
    /// Weight of the capacity-violation term (α).
    pub capacity: f64,
    /// Weight of the wasted-capacity term (β).
    pub waste: f64,
    /// Weight of the room-type mismatch term.
    pub room_type: f64,
    /// Weight of the room–timeslot conflict term.
    pub conflict: f64,
    /// Weight of the safety-margin term.
    pub safety_margin: f64,
    /// Minimum spare seats required before the safety-margin term
    /// triggers. `None` disables the term entirely.
    pub min_free_seats: Option<u32>,
    /// Capacity accounting mode.
    pub capacity_policy: CapacityPolicy,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            capacity: 50.0,
            waste: 5.0,
            room_type: 10.0,
            conflict: 20.0,
            safety_margin: 5.0,
            min_free_seats: None,
            capacity_policy: CapacityPolicy::Overflow,
        }
    }
}

impl CostWeights {
    /// Sets the capacity-violation weight.
    pub fn with_capacity(mut self, w: f64) -> Self {
        self.capacity = w;
        self
    }

    /// Sets the wasted-capacity weight.
    pub fn with_waste(mut self, w: f64) -> Self {
        self.waste = w;
        self
    }

    /// Sets the room-type mismatch weight.
    pub fn with_room_type(mut self, w: f64) -> Self {
        self.room_type = w;
        self
    }

    /// Sets the room–timeslot conflict weight.
    pub fn with_conflict(mut self, w: f64) -> Self {
        self.conflict = w;
        self
    }

    /// Sets the safety-margin weight.
    pub fn with_safety_margin(mut self, w: f64) -> Self {
        self.safety_margin = w;
        self
    }

    /// Enables the safety-margin term with the given seat threshold.
    pub fn with_min_free_seats(mut self, seats: u32) -> Self {
        self.min_free_seats = Some(seats);
        self
    }

    /// Sets the capacity accounting mode.
    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = policy;
        self
    }

    /// Validates the weights.
    ///
    /// Returns `Err` with a description if any weight is negative or
    /// not finite.
    pub fn validate(&self) -> Result<(), String> {
        for (name, w) in [
            ("capacity", self.capacity),
            ("waste", self.waste),
            ("room_type", self.room_type),
            ("conflict", self.conflict),
            ("safety_margin", self.safety_margin),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(format!("{name} weight must be finite and non-negative"));
            }
        }
        Ok(())
    }
}

/// Raw per-category violation totals for one assignment.
///
/// Category values are unweighted counts/magnitudes; [`total`](Self::total)
/// applies the weights.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct CostBreakdown {
    /// Capacity-violation total (units per [`CapacityPolicy`]).
    pub capacity_violation: f64,
    /// Surplus seats over non-violating exams.
    pub wasted_capacity: f64,
    /// Number of room-type mismatches.
    pub type_mismatch: f64,
    /// Number of room–timeslot collisions.
    pub room_conflict: f64,
    /// Number of safety-margin shortfalls.
    pub margin_violation: f64,
}

impl CostBreakdown {
    /// Weighted total cost. Always ≥ 0 for non-negative weights.
    pub fn total(&self, weights: &CostWeights) -> f64 {
        weights.capacity * self.capacity_violation
            + weights.waste * self.wasted_capacity
            + weights.room_type * self.type_mismatch
            + weights.conflict * self.room_conflict
            + weights.safety_margin * self.margin_violation
    }
}

/// Scores an assignment against all violation categories.
///
/// `assignment` must index into `exams`/`rooms`; the caller (the
/// problem binding) guarantees this structurally.
pub fn evaluate(
    assignment: &Assignment,
    exams: &[Exam],
    rooms: &[Room],
    weights: &CostWeights,
) -> CostBreakdown {
    let mut breakdown = CostBreakdown::default();
    let mut occupied: HashSet<(usize, u32, &str)> = HashSet::new();

    for (exam_idx, room_idx) in assignment.iter() {
        let exam = &exams[exam_idx];
        let room = &rooms[room_idx];

        if room.capacity < exam.students {
            breakdown.capacity_violation += match weights.capacity_policy {
                CapacityPolicy::Overflow => (exam.students - room.capacity) as f64,
                CapacityPolicy::PerExam => 1.0,
            };
        } else {
            let spare = room.capacity - exam.students;
            breakdown.wasted_capacity += spare as f64;
            if let Some(min) = weights.min_free_seats {
                if spare < min {
                    breakdown.margin_violation += 1.0;
                }
            }
        }

        if !room.accepts(exam.exam_type) {
            breakdown.type_mismatch += 1.0;
        }

        if let Some((day, time)) = exam.slot() {
            if !occupied.insert((room_idx, day, time)) {
                breakdown.room_conflict += 1.0;
            }
        }
    }

    breakdown
}
