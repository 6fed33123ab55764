//! Feasibility Checker (spec §2 component 3, §4.2): pre-solve rejections
//! that are far cheaper than letting the solver prove infeasibility.

use std::collections::HashMap;

use log::debug;

use crate::error::{SeatingError, SeatingResult};
use crate::model::position::RoomPositions;
use crate::types::{Restrictions, Room, Student};

/// `total_capacity = Σ |positions[k]|`; fails with `InsufficientCapacity` if
/// it falls short of the student count, then checks each restricted exam's
/// capacity within its allowed rooms.
pub fn check_feasibility(
    students: &[Student],
    rooms: &[Room],
    room_positions: &[RoomPositions],
    restrictions: &Restrictions,
) -> SeatingResult<usize> {
    let total_capacity: usize = room_positions.iter().map(|rp| rp.positions.len()).sum();
    debug!(
        "total capacity {} across {} rooms for {} students",
        total_capacity,
        rooms.len(),
        students.len()
    );
    if total_capacity < students.len() {
        return Err(SeatingError::InsufficientCapacity {
            available: total_capacity,
            required: students.len(),
        });
    }

    let mut exam_student_count: HashMap<&str, usize> = HashMap::new();
    for student in students {
        *exam_student_count.entry(student.exam.as_str()).or_insert(0) += 1;
    }

    let room_capacity: HashMap<&str, usize> = rooms
        .iter()
        .zip(room_positions.iter())
        .map(|(room, rp)| (room.id.as_str(), rp.positions.len()))
        .collect();

    for (exam, allowed_rooms) in restrictions {
        let required = match exam_student_count.get(exam.as_str()) {
            Some(&count) => count,
            None => continue,
        };
        let available: usize = allowed_rooms
            .iter()
            .filter_map(|room_id| room_capacity.get(room_id.as_str()))
            .sum();
        if available < required {
            return Err(SeatingError::RestrictedInsufficientCapacity {
                exam: exam.clone(),
                available,
                required,
            });
        }
    }

    Ok(total_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::position::enumerate_positions;

    fn student(id: u64, exam: &str) -> Student {
        Student { id, exam: exam.into() }
    }

    fn room(id: &str, rows: u32, cols: u32) -> Room {
        Room {
            id: id.into(),
            rows,
            cols,
            skip_rows: false,
            skip_cols: false,
        }
    }

    #[test]
    fn rejects_when_total_capacity_too_small() {
        let students: Vec<_> = (0..5).map(|i| student(i, "x")).collect();
        let rooms = vec![room("R1", 1, 3)];
        let positions: Vec<_> = rooms.iter().map(enumerate_positions).collect();
        let err = check_feasibility(&students, &rooms, &positions, &Restrictions::new()).unwrap_err();
        assert!(matches!(err, SeatingError::InsufficientCapacity { .. }));
    }

    #[test]
    fn empty_restriction_list_is_treated_as_zero_capacity() {
        let students = vec![student(0, "chem")];
        let rooms = vec![room("R1", 1, 3)];
        let positions: Vec<_> = rooms.iter().map(enumerate_positions).collect();
        let mut restrictions = Restrictions::new();
        restrictions.insert("chem".to_string(), vec![]);
        let err = check_feasibility(&students, &rooms, &positions, &restrictions).unwrap_err();
        assert!(matches!(
            err,
            SeatingError::RestrictedInsufficientCapacity { .. }
        ));
    }

    #[test]
    fn sufficient_capacity_passes() {
        let students: Vec<_> = (0..3).map(|i| student(i, "x")).collect();
        let rooms = vec![room("R1", 1, 3)];
        let positions: Vec<_> = rooms.iter().map(enumerate_positions).collect();
        assert_eq!(
            check_feasibility(&students, &rooms, &positions, &Restrictions::new()).unwrap(),
            3
        );
    }
}
