//! Classroom model.

use serde::{Deserialize, Serialize};

/// A classroom that exams can be assigned to.
///
/// Like [`Exam`](super::Exam), rooms are immutable reference data for
/// the duration of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Building the room is located in.
    pub building: Option<String>,
    /// Room classification, used for exam-type compatibility.
    pub room_type: Option<RoomType>,
}

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    /// General lecture room.
    Lecture,
    /// Laboratory.
    Lab,
}

impl Room {
    /// Creates a room with the minimum required attributes.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
            building: None,
            room_type: None,
        }
    }

    /// Sets the building name.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    /// Sets the room classification.
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Whether an exam of the given classification may use this room
    /// without a type penalty.
    ///
    /// Untyped rooms accept every exam; untyped exams accept every room.
    pub fn accepts(&self, exam_type: Option<super::ExamType>) -> bool {
        match (exam_type, self.room_type) {
            (Some(et), Some(rt)) => et.required_room() == rt,
            _ => true,
        }
    }
}
