//! Model Builder's variable layer (spec §2 component 4, §4.3, §9 "Variable
//! keying"): owns the `CpModelBuilder` plus the decision variables, indexed
//! by a flat integer triple rather than a composed string key.

use std::collections::HashMap;

use cp_sat::builder::{BoolVar, CpModelBuilder};
use log::debug;

use super::position::{enumerate_positions, RoomPositions};
use crate::types::{Restrictions, Room, Student};

/// `(student_idx, room_idx, position_idx)` — the key into [`SeatingModel::vars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarKey {
    pub student_idx: usize,
    pub room_idx: usize,
    pub position_idx: usize,
}

/// The Model Builder's working state: the solver handle, the precomputed
/// positions, and every decision variable, reachable both by direct triple
/// lookup and through the per-student/per-seat convenience indices the
/// constraint emitters (§4.3) iterate over.
pub struct SeatingModel {
    pub model: CpModelBuilder,
    pub room_positions: Vec<RoomPositions>,
    /// `y[k]`, one per room.
    pub room_vars: Vec<BoolVar>,
    /// Canonical store for `x[s,k,p]`, keyed by the flat integer triple.
    pub vars: HashMap<VarKey, BoolVar>,
    /// Per student, the variables that exist for them — room index
    /// ascending, then position order. This is the same order the Solution
    /// Extractor (§4.5) scans.
    pub student_vars: Vec<Vec<(usize, usize, BoolVar)>>,
    /// Per `(room_idx, position_idx)`, the variables of students who could
    /// be seated there.
    pub seat_vars: Vec<Vec<Vec<BoolVar>>>,
}

impl SeatingModel {
    pub fn variable_count(&self) -> usize {
        self.vars.len() + self.room_vars.len()
    }
}

/// Enumerate positions (if not already precomputed by the Feasibility
/// Checker), create `y[k]` for every room, and create `x[s,k,p]` only where
/// the restriction pre-filter allows it (spec §4.3's "single largest
/// variable reduction"). No constraints are added here — see
/// [`super::constraints`].
pub fn build_variables(
    students: &[Student],
    rooms: &[Room],
    restrictions: &Restrictions,
    room_positions: Vec<RoomPositions>,
) -> SeatingModel {
    let mut model = CpModelBuilder::default();

    let room_vars: Vec<BoolVar> = rooms.iter().map(|_| model.new_bool_var()).collect();

    let mut vars = HashMap::new();
    let mut student_vars: Vec<Vec<(usize, usize, BoolVar)>> = vec![Vec::new(); students.len()];
    let mut seat_vars: Vec<Vec<Vec<BoolVar>>> = room_positions
        .iter()
        .map(|rp| vec![Vec::new(); rp.positions.len()])
        .collect();

    for (room_idx, room) in rooms.iter().enumerate() {
        let position_count = room_positions[room_idx].positions.len();
        for (student_idx, student) in students.iter().enumerate() {
            if let Some(allowed) = restrictions.get(&student.exam) {
                if !allowed.iter().any(|room_id| room_id == &room.id) {
                    continue;
                }
            }
            for position_idx in 0..position_count {
                let var = model.new_bool_var();
                vars.insert(
                    VarKey {
                        student_idx,
                        room_idx,
                        position_idx,
                    },
                    var.clone(),
                );
                student_vars[student_idx].push((room_idx, position_idx, var.clone()));
                seat_vars[room_idx][position_idx].push(var);
            }
        }
    }

    debug!(
        "created {} seat variables and {} room-usage variables",
        vars.len(),
        room_vars.len()
    );

    SeatingModel {
        model,
        room_positions,
        room_vars,
        vars,
        student_vars,
        seat_vars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::position::enumerate_positions;

    #[test]
    fn restriction_filters_out_variables_for_disallowed_rooms() {
        let students = vec![
            Student { id: 0, exam: "art".into() },
            Student { id: 1, exam: "math".into() },
        ];
        let rooms = vec![
            Room { id: "R1".into(), rows: 1, cols: 2, skip_rows: false, skip_cols: false },
            Room { id: "R2".into(), rows: 1, cols: 2, skip_rows: false, skip_cols: false },
        ];
        let mut restrictions = Restrictions::new();
        restrictions.insert("art".to_string(), vec!["R1".to_string()]);

        let room_positions: Vec<_> = rooms.iter().map(enumerate_positions).collect();
        let ctx = build_variables(&students, &rooms, &restrictions, room_positions);

        // student 0 (art, restricted to R1) only has variables in room_idx 0.
        assert!(ctx.student_vars[0].iter().all(|(room_idx, _, _)| *room_idx == 0));
        // student 1 (math, unrestricted) has variables in both rooms.
        let rooms_seen: std::collections::HashSet<_> =
            ctx.student_vars[1].iter().map(|(room_idx, _, _)| *room_idx).collect();
        assert_eq!(rooms_seen.len(), 2);
    }
}
