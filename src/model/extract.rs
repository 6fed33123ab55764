//! Solution Extractor (spec §2 component 6, §4.5).

use cp_sat::proto::{CpSolverResponse, CpSolverStatus};

use super::context::SeatingModel;
use crate::error::{SeatingError, SeatingResult};
use crate::types::{Assignment, Room, Student};

/// On `OPTIMAL`/`FEASIBLE`, decode one Assignment per student by scanning
/// each student's candidate variables in deterministic order (room index
/// ascending, then position order) and taking the first one the solver set
/// true. Any other status yields an empty list — mapping that status to a
/// `SeatingError` is the caller's job (spec §4.5, §6, §7), not this
/// function's.
pub fn extract_solution(
    ctx: &SeatingModel,
    response: &CpSolverResponse,
    students: &[Student],
    rooms: &[Room],
) -> SeatingResult<Vec<Assignment>> {
    match response.status() {
        CpSolverStatus::Optimal | CpSolverStatus::Feasible => {}
        _ => return Ok(Vec::new()),
    }

    let mut assignments = Vec::with_capacity(students.len());
    for (student_idx, student) in students.iter().enumerate() {
        let placement = ctx.student_vars[student_idx]
            .iter()
            .find(|(_, _, var)| var.solution_value(response));

        let &(room_idx, position_idx, _) = placement.ok_or_else(|| {
            SeatingError::SolverInvariantViolated(format!(
                "no seat variable was true for student {}",
                student.id
            ))
        })?;

        let room = &rooms[room_idx];
        let position = ctx.room_positions[room_idx].positions[position_idx];
        assignments.push(Assignment {
            student_id: student.id,
            room_id: room.id.clone(),
            row: position.row,
            col: position.col,
        });
    }

    Ok(assignments)
}
