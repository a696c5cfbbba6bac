//! Exam-to-room problem binding.
//!
//! [`ExamRoomProblem`] plugs the exam-scheduling domain into the
//! generic [`abc`](crate::abc) engine: it owns the run's read-only
//! exam/room reference data and implements solution generation, cost
//! evaluation, and the neighborhood move. No ambient module state — all
//! lookup data travels inside the problem value.

use rand::Rng;

use crate::abc::AbcProblem;
use crate::cost::{self, CostBreakdown, CostWeights};
use crate::models::{Assignment, Exam, Room};

/// Room-selection policy for the neighborhood operator.
///
/// Governs which room a perturbed exam is moved to. All policies draw
/// from the caller's seeded RNG and are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RoomSelection {
    /// Uniform choice over all rooms except the currently assigned one.
    #[default]
    Uniform,
    /// With probability `bias`, uniform choice among rooms whose
    /// declared type matches the exam's requirement; otherwise the
    /// uniform policy. Exams without a type always fall back to
    /// uniform.
    TypeBiased {
        /// Probability of the type-directed draw, clamped to `0.0–1.0`.
        bias: f64,
    },
    /// The compatible room minimizing `|capacity − students|`,
    /// first-in-input-order on ties.
    BestFit,
}

/// The exam-scheduling optimization problem.
///
/// # Examples
///
/// ```
/// use examhive::abc::{AbcConfig, AbcRunner};
/// use examhive::cost::CostWeights;
/// use examhive::models::{Exam, Room};
/// use examhive::problem::ExamRoomProblem;
///
/// let exams = vec![Exam::new("CS101", 30), Exam::new("MA201", 25)];
/// let rooms = vec![Room::new("A-1", 30), Room::new("A-2", 25)];
/// let problem = ExamRoomProblem::new(exams, rooms, CostWeights::default());
///
/// let config = AbcConfig::default().with_max_cycles(50).with_seed(42);
/// let result = AbcRunner::run(&problem, &config);
/// assert!(result.best_cost >= 0.0);
/// ```
pub struct ExamRoomProblem {
    exams: Vec<Exam>,
    rooms: Vec<Room>,
    weights: CostWeights,
    room_selection: RoomSelection,
}

impl ExamRoomProblem {
    /// Creates a problem over the given reference data.
    pub fn new(exams: Vec<Exam>, rooms: Vec<Room>, weights: CostWeights) -> Self {
        Self {
            exams,
            rooms,
            weights,
            room_selection: RoomSelection::default(),
        }
    }

    /// Sets the neighborhood room-selection policy.
    pub fn with_room_selection(mut self, policy: RoomSelection) -> Self {
        self.room_selection = policy;
        self
    }

    /// The run's exam list, in mapping order.
    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    /// The run's room list.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The active cost weights.
    pub fn weights(&self) -> &CostWeights {
        &self.weights
    }

    /// Per-category violation totals for an assignment.
    pub fn breakdown(&self, assignment: &Assignment) -> CostBreakdown {
        cost::evaluate(assignment, &self.exams, &self.rooms, &self.weights)
    }

    /// Rooms whose declared type matches the exam's requirement.
    ///
    /// Empty for untyped exams — the strict set drives the biased draw,
    /// not penalty-freeness.
    fn matching_rooms(&self, exam: &Exam) -> Vec<usize> {
        let Some(required) = exam.exam_type.map(|t| t.required_room()) else {
            return Vec::new();
        };
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| room.room_type == Some(required))
            .map(|(i, _)| i)
            .collect()
    }

    fn pick_room<R: Rng>(&self, exam: &Exam, current: usize, rng: &mut R) -> usize {
        match self.room_selection {
            RoomSelection::Uniform => pick_other(self.rooms.len(), current, rng),
            RoomSelection::TypeBiased { bias } => {
                let matching = self.matching_rooms(exam);
                if !matching.is_empty() && rng.random_bool(bias.clamp(0.0, 1.0)) {
                    matching[rng.random_range(0..matching.len())]
                } else {
                    pick_other(self.rooms.len(), current, rng)
                }
            }
            RoomSelection::BestFit => {
                let mut best: Option<(usize, u32)> = None;
                for (i, room) in self.rooms.iter().enumerate() {
                    if !room.accepts(exam.exam_type) {
                        continue;
                    }
                    let gap = room.capacity.abs_diff(exam.students);
                    if best.is_none_or(|(_, g)| gap < g) {
                        best = Some((i, gap));
                    }
                }
                // Exams no room can host type-wise fall back to the
                // closest-capacity room overall.
                best.map(|(i, _)| i).unwrap_or_else(|| {
                    let mut idx = 0;
                    let mut gap = self.rooms[0].capacity.abs_diff(exam.students);
                    for (i, room) in self.rooms.iter().enumerate().skip(1) {
                        let g = room.capacity.abs_diff(exam.students);
                        if g < gap {
                            idx = i;
                            gap = g;
                        }
                    }
                    idx
                })
            }
        }
    }
}

/// Uniform index in `0..count` excluding `current` (when possible).
fn pick_other<R: Rng>(count: usize, current: usize, rng: &mut R) -> usize {
    if count <= 1 {
        return current;
    }
    let mut idx = rng.random_range(0..count - 1);
    if idx >= current {
        idx += 1;
    }
    idx
}

impl AbcProblem for ExamRoomProblem {
    type Solution = Assignment;

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Assignment {
        // Uniform with replacement; collisions and violations are the
        // cost model's business, not the generator's.
        Assignment::new(
            (0..self.exams.len())
                .map(|_| rng.random_range(0..self.rooms.len()))
                .collect(),
        )
    }

    fn cost(&self, solution: &Assignment) -> f64 {
        self.breakdown(solution).total(&self.weights)
    }

    fn neighbor<R: Rng>(&self, solution: &Assignment, rng: &mut R) -> Assignment {
        let mut next = solution.clone();
        let exam_idx = rng.random_range(0..self.exams.len());
        let room_idx = self.pick_room(&self.exams[exam_idx], solution.room_of(exam_idx), rng);
        next.set_room(exam_idx, room_idx);
        next
    }
}
