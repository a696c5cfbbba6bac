//! Candidate solution representation.

/// A candidate exam→room assignment.
///
/// Stored as a vector of room indices, position `i` holding the room
/// assigned to exam `i` of the run's exam list. The mapping is total by
/// construction — every exam has exactly one room at all times — so
/// totality is a property of the representation rather than a checked
/// invariant.
///
/// Each candidate owns its vector; colony members never share storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    rooms: Vec<usize>,
}

impl Assignment {
    /// Wraps a room-index vector, one entry per exam.
    pub fn new(rooms: Vec<usize>) -> Self {
        Self { rooms }
    }

    /// The room index assigned to exam `exam_idx`.
    pub fn room_of(&self, exam_idx: usize) -> usize {
        self.rooms[exam_idx]
    }

    /// Reassigns exam `exam_idx` to `room_idx`.
    pub fn set_room(&mut self, exam_idx: usize, room_idx: usize) {
        self.rooms[exam_idx] = room_idx;
    }

    /// Number of exams in the mapping.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the mapping covers no exams.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterates `(exam_idx, room_idx)` pairs in exam-list order.
    ///
    /// This order is the "mapping order" used by conflict detection.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rooms.iter().copied().enumerate()
    }
}
