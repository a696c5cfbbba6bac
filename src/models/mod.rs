//! Exam-scheduling domain models.
//!
//! The record types ([`Exam`], [`Room`]) mirror the tabular datasets the
//! surrounding program ingests; [`Assignment`] is the candidate-solution
//! encoding the optimizer searches over. All three are plain data — the
//! scoring lives in [`cost`](crate::cost), the search in
//! [`abc`](crate::abc).

mod assignment;
mod exam;
mod room;

pub use assignment::Assignment;
pub use exam::{Exam, ExamType};
pub use room::{Room, RoomType};
