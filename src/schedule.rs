//! Solve facade.
//!
//! Ties the pieces together for library callers: validate the inputs,
//! run the colony engine, and shape the winning assignment into
//! tabular-ready [`ScheduleEntry`] rows. Rendering and persistence of
//! the result stay outside the crate; [`dataset`](crate::dataset) offers
//! a plain CSV writer for the latter.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serde::Serialize;

use crate::abc::{AbcConfig, AbcRunner};
use crate::cost::CostBreakdown;
use crate::problem::ExamRoomProblem;
use crate::validation::{validate_config, validate_input, ValidationError};

/// One row of the final schedule: an exam with its assigned room and
/// the attributes a report needs.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    /// Exam identifier.
    pub exam_id: String,
    /// Enrolled student count.
    pub students: u32,
    /// Assigned room identifier.
    pub room_id: String,
    /// Building of the assigned room, when known.
    pub building: Option<String>,
    /// Capacity of the assigned room.
    pub capacity: u32,
    /// Exam day, when scheduled.
    pub day: Option<u32>,
    /// Exam start time, when scheduled.
    pub time: Option<String>,
}

/// Outcome of a scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleResult {
    /// Final schedule, one entry per exam in input order.
    pub entries: Vec<ScheduleEntry>,
    /// Weighted total cost of the best assignment.
    pub total_cost: f64,
    /// Per-category violation totals of the best assignment.
    pub breakdown: CostBreakdown,
    /// Best cost after each completed cycle.
    pub convergence: Vec<f64>,
    /// Number of cycles executed.
    pub cycles: usize,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Runs the full pipeline: validate, search, report.
///
/// Returns every detected precondition problem at once instead of
/// starting a search that cannot mean anything.
pub fn solve(
    problem: &ExamRoomProblem,
    config: &AbcConfig,
) -> Result<ScheduleResult, Vec<ValidationError>> {
    solve_with_cancel(problem, config, None)
}

/// [`solve`] with an optional cancellation token, honored at cycle
/// boundaries.
pub fn solve_with_cancel(
    problem: &ExamRoomProblem,
    config: &AbcConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<ScheduleResult, Vec<ValidationError>> {
    validate_input(problem.exams(), problem.rooms(), problem.weights())?;
    validate_config(config)?;

    log::info!(
        "scheduling {} exams across {} rooms (colony {}, cycles {})",
        problem.exams().len(),
        problem.rooms().len(),
        config.colony_size,
        config.max_cycles
    );

    let result = AbcRunner::run_with_cancel(problem, config, cancel);
    let breakdown = problem.breakdown(&result.best);

    let entries = result
        .best
        .iter()
        .map(|(exam_idx, room_idx)| {
            let exam = &problem.exams()[exam_idx];
            let room = &problem.rooms()[room_idx];
            ScheduleEntry {
                exam_id: exam.id.clone(),
                students: exam.students,
                room_id: room.id.clone(),
                building: room.building.clone(),
                capacity: room.capacity,
                day: exam.day,
                time: exam.time.clone(),
            }
        })
        .collect();

    log::info!(
        "best cost {} after {} cycles{}",
        result.best_cost,
        result.cycles,
        if result.cancelled { " (cancelled)" } else { "" }
    );

    Ok(ScheduleResult {
        entries,
        total_cost: result.best_cost,
        breakdown,
        convergence: result.convergence,
        cycles: result.cycles,
        cancelled: result.cancelled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostWeights;
    use crate::models::{Exam, Room};
    use crate::validation::ValidationErrorKind;
    use std::sync::atomic::Ordering;

    fn weights() -> CostWeights {
        CostWeights::default()
    }

    #[test]
    fn test_perfect_fit_reaches_zero_cost() {
        // Three 30-student exams, three 30-seat rooms, all in the same
        // slot: the optimum is a zero-cost permutation.
        let exams = vec![
            Exam::new("E1", 30).with_day(1).with_time("09:00"),
            Exam::new("E2", 30).with_day(1).with_time("09:00"),
            Exam::new("E3", 30).with_day(1).with_time("09:00"),
        ];
        let rooms = vec![
            Room::new("R1", 30),
            Room::new("R2", 30),
            Room::new("R3", 30),
        ];
        let problem = ExamRoomProblem::new(exams, rooms, weights());
        let config = AbcConfig::default()
            .with_colony_size(20)
            .with_max_cycles(80)
            .with_seed(42)
            .with_parallel(false);

        let result = solve(&problem, &config).unwrap();
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.breakdown.room_conflict, 0.0);

        // A zero-cost schedule uses all three rooms.
        let mut used: Vec<&str> = result.entries.iter().map(|e| e.room_id.as_str()).collect();
        used.sort_unstable();
        used.dedup();
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn test_unsatisfiable_capacity_stabilizes() {
        // Two 50-student exams, one 30-seat room: overflow of 20 each
        // is unavoidable, so cost pins at capacity_weight * 40.
        let exams = vec![Exam::new("E1", 50), Exam::new("E2", 50)];
        let rooms = vec![Room::new("R1", 30)];
        let problem = ExamRoomProblem::new(exams, rooms, weights());
        let config = AbcConfig::default()
            .with_colony_size(10)
            .with_max_cycles(40)
            .with_seed(7)
            .with_parallel(false);

        let result = solve(&problem, &config).unwrap();
        assert_eq!(result.total_cost, 50.0 * 40.0);
        assert!(result.convergence.iter().all(|&c| c == result.total_cost));
    }

    #[test]
    fn test_entries_cover_all_exams_in_order() {
        let exams = vec![
            Exam::new("A", 10).with_day(2).with_time("14:00"),
            Exam::new("B", 20),
            Exam::new("C", 30),
        ];
        let rooms = vec![
            Room::new("R1", 40).with_building("Main"),
            Room::new("R2", 25),
        ];
        let problem = ExamRoomProblem::new(exams, rooms, weights());
        let config = AbcConfig::default()
            .with_colony_size(8)
            .with_max_cycles(20)
            .with_seed(1)
            .with_parallel(false);

        let result = solve(&problem, &config).unwrap();
        let ids: Vec<&str> = result.entries.iter().map(|e| e.exam_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        for entry in &result.entries {
            assert!(entry.room_id == "R1" || entry.room_id == "R2");
        }
        assert_eq!(result.entries[0].day, Some(2));
        assert_eq!(result.entries[0].time.as_deref(), Some("14:00"));
    }

    #[test]
    fn test_precondition_failure_never_runs() {
        let problem = ExamRoomProblem::new(vec![], vec![Room::new("R1", 10)], weights());
        let errors = solve(&problem, &AbcConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyExamList));
    }

    #[test]
    fn test_invalid_config_is_an_error_not_a_panic() {
        let problem = ExamRoomProblem::new(
            vec![Exam::new("E1", 10)],
            vec![Room::new("R1", 10)],
            weights(),
        );
        let errors = solve(&problem, &AbcConfig::default().with_colony_size(0)).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidConfig);
    }

    #[test]
    fn test_reproducible_end_to_end() {
        let make_problem = || {
            ExamRoomProblem::new(
                (0..12)
                    .map(|i| Exam::new(format!("E{i}"), 20 + i * 5))
                    .collect(),
                (0..5)
                    .map(|i| Room::new(format!("R{i}"), 30 + i * 20))
                    .collect(),
                weights(),
            )
        };
        let config = AbcConfig::default()
            .with_colony_size(15)
            .with_max_cycles(60)
            .with_seed(99)
            .with_parallel(false);

        let a = solve(&make_problem(), &config).unwrap();
        let b = solve(&make_problem(), &config).unwrap();
        assert_eq!(a.total_cost, b.total_cost);
        assert_eq!(a.convergence, b.convergence);
        let rooms_a: Vec<&str> = a.entries.iter().map(|e| e.room_id.as_str()).collect();
        let rooms_b: Vec<&str> = b.entries.iter().map(|e| e.room_id.as_str()).collect();
        assert_eq!(rooms_a, rooms_b);
    }

    #[test]
    fn test_cancellation_passthrough() {
        let problem = ExamRoomProblem::new(
            vec![Exam::new("E1", 10)],
            vec![Room::new("R1", 10), Room::new("R2", 20)],
            weights(),
        );
        let config = AbcConfig::default()
            .with_colony_size(5)
            .with_max_cycles(10_000)
            .with_seed(4)
            .with_parallel(false);

        let cancel = Arc::new(AtomicBool::new(false));
        cancel.store(true, Ordering::Relaxed);
        let result = solve_with_cancel(&problem, &config, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert!(result.convergence.is_empty());
        // The best record is still seeded from the initial colony.
        assert_eq!(result.entries.len(), 1);
    }

    #[test]
    fn test_entries_serialize() {
        let entry = ScheduleEntry {
            exam_id: "CS101".into(),
            students: 30,
            room_id: "A-1".into(),
            building: None,
            capacity: 40,
            day: Some(1),
            time: Some("09:00".into()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"exam_id\":\"CS101\""));
        assert!(json.contains("\"capacity\":40"));
    }
}
