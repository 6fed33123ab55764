//! Input Normalizer (spec §2 component 1, §3 "Validation"): reject malformed
//! input before any solver artifact is built.

use std::collections::HashSet;

use log::debug;

use crate::error::{SeatingError, SeatingResult};
use crate::types::{Restrictions, Room, Student};

pub fn validate(students: &[Student], rooms: &[Room], restrictions: &Restrictions) -> SeatingResult<()> {
    let mut seen_students = HashSet::with_capacity(students.len());
    for student in students {
        if !seen_students.insert(student.id) {
            return Err(SeatingError::DuplicateStudentId(student.id));
        }
    }

    let mut seen_rooms = HashSet::with_capacity(rooms.len());
    for room in rooms {
        if !seen_rooms.insert(room.id.as_str()) {
            return Err(SeatingError::DuplicateRoomId(room.id.clone()));
        }
        if room.rows == 0 || room.cols == 0 {
            return Err(SeatingError::InvalidRoomDimensions(room.id.clone()));
        }
    }

    for (exam, allowed) in restrictions {
        for room_id in allowed {
            if !seen_rooms.contains(room_id.as_str()) {
                return Err(SeatingError::UnknownRestrictedRoom {
                    exam: exam.clone(),
                    room: room_id.clone(),
                });
            }
        }
    }

    debug!(
        "validated {} students, {} rooms, {} restricted exams",
        students.len(),
        rooms.len(),
        restrictions.len()
    );
    Ok(())
}
