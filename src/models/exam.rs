//! Exam model.

use serde::{Deserialize, Serialize};

use super::RoomType;

/// An exam sitting to be placed in a room.
///
/// Exams are read-only reference data for the duration of a search run;
/// the optimizer never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    /// Unique exam identifier (course code or similar).
    pub id: String,
    /// Number of enrolled students sitting the exam.
    pub students: u32,
    /// Exam day (dataset-defined numbering), if scheduled to a day.
    pub day: Option<u32>,
    /// Start time label (e.g. "09:00"), if scheduled to a slot.
    pub time: Option<String>,
    /// Exam classification, used for room-type compatibility.
    pub exam_type: Option<ExamType>,
}

/// Exam classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamType {
    /// Written/theory exam, held in a lecture room.
    Theory,
    /// Hands-on exam, held in a lab.
    Practical,
}

impl ExamType {
    /// The room type this exam classification requires.
    pub fn required_room(self) -> RoomType {
        match self {
            ExamType::Theory => RoomType::Lecture,
            ExamType::Practical => RoomType::Lab,
        }
    }
}

impl Exam {
    /// Creates an exam with the minimum required attributes.
    pub fn new(id: impl Into<String>, students: u32) -> Self {
        Self {
            id: id.into(),
            students,
            day: None,
            time: None,
            exam_type: None,
        }
    }

    /// Sets the exam day.
    pub fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    /// Sets the start time label.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets the exam classification.
    pub fn with_exam_type(mut self, exam_type: ExamType) -> Self {
        self.exam_type = Some(exam_type);
        self
    }

    /// The `(day, time)` slot key, when both components are known.
    ///
    /// Exams without a complete slot key do not participate in
    /// room–timeslot conflict detection.
    pub fn slot(&self) -> Option<(u32, &str)> {
        match (self.day, self.time.as_deref()) {
            (Some(day), Some(time)) => Some((day, time)),
            _ => None,
        }
    }
}
