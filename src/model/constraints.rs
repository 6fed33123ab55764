//! Constraint and objective emission (spec §2 component 4, §4.3).

use std::collections::HashMap;

use cp_sat::builder::LinearExpr;
use log::warn;

use super::context::{SeatingModel, VarKey};
use crate::types::{Room, Student};

/// Assignment: `Σ_{k,p} x[s,k,p] = 1` for every student with at least one
/// variable. A student left with zero variables (restriction contradicts
/// capacity after pre-filtering) is left unconstrained here; the solver then
/// reports INFEASIBLE, which the caller surfaces as `SolverInfeasible`.
pub fn add_assignment_constraints(ctx: &mut SeatingModel) {
    for vars in &ctx.student_vars {
        if vars.is_empty() {
            continue;
        }
        let mut expr = LinearExpr::from(0);
        for (_, _, var) in vars {
            expr = expr + LinearExpr::from(var.clone());
        }
        ctx.model.add_eq(expr, LinearExpr::from(1));
    }
}

/// Capacity: `Σ_s x[s,k,p] <= 1` for every usable seat.
pub fn add_capacity_constraints(ctx: &mut SeatingModel) {
    for room_seats in &ctx.seat_vars {
        for seat in room_seats {
            if seat.is_empty() {
                continue;
            }
            let mut expr = LinearExpr::from(0);
            for var in seat {
                expr = expr + LinearExpr::from(var.clone());
            }
            ctx.model.add_le(expr, LinearExpr::from(1));
        }
    }
}

/// Room-usage linkage: `x[s,k,p] <= y[k]` for every seat variable, so the
/// objective can minimize `y`.
pub fn add_linkage_constraints(ctx: &mut SeatingModel) {
    for (room_idx, room_seats) in ctx.seat_vars.iter().enumerate() {
        let room_var = ctx.room_vars[room_idx].clone();
        for seat in room_seats {
            for var in seat {
                ctx.model.add_le(
                    LinearExpr::from(var.clone()),
                    LinearExpr::from(room_var.clone()),
                );
            }
        }
    }
}

/// Separation: for each exam with >= 2 students, each room, each adjacent
/// position pair `(p, q)`, and each student pair `(s_i, s_j)`: forbid both
/// `s_i@p, s_j@q` and `s_i@q, s_j@p` — same-exam students may not occupy
/// either orientation of an adjacent pair. Emission order is exam (sorted),
/// room (index ascending), adjacent-pair (index ascending), student-pair
/// (index ascending), each orientation in turn, and halts the moment `cap`
/// constraints have been emitted.
///
/// Returns `(constraints_emitted, cap_hit)`.
pub fn add_separation_constraints(
    ctx: &mut SeatingModel,
    students: &[Student],
    rooms: &[Room],
    cap: usize,
) -> (usize, bool) {
    let mut exam_students: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, student) in students.iter().enumerate() {
        exam_students
            .entry(student.exam.as_str())
            .or_default()
            .push(idx);
    }
    let mut exams: Vec<&str> = exam_students.keys().copied().collect();
    exams.sort_unstable();

    let mut emitted = 0usize;
    let mut cap_hit = false;

    'emission: for exam in exams {
        let students_in_exam = &exam_students[exam];
        if students_in_exam.len() < 2 {
            continue;
        }
        for room_idx in 0..rooms.len() {
            let adjacent_pairs = ctx.room_positions[room_idx].adjacent_pairs.clone();
            for (pos_p, pos_q) in adjacent_pairs {
                for a in 0..students_in_exam.len() {
                    for b in (a + 1)..students_in_exam.len() {
                        let s_i = students_in_exam[a];
                        let s_j = students_in_exam[b];
                        for &(first, second) in &[(pos_p, pos_q), (pos_q, pos_p)] {
                            let key_i = VarKey { student_idx: s_i, room_idx, position_idx: first };
                            let key_j = VarKey { student_idx: s_j, room_idx, position_idx: second };
                            let pair = ctx.vars.get(&key_i).cloned().zip(ctx.vars.get(&key_j).cloned());
                            if let Some((var_i, var_j)) = pair {
                                ctx.model.add_le(
                                    LinearExpr::from(var_i) + LinearExpr::from(var_j),
                                    LinearExpr::from(1),
                                );
                                emitted += 1;
                                if emitted >= cap {
                                    cap_hit = true;
                                    break 'emission;
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    if cap_hit {
        warn!(
            "separation constraint cap ({cap}) reached after {emitted} constraints; remaining same-exam pairs are unconstrained"
        );
    }

    (emitted, cap_hit)
}

/// Objective: `minimize Σ_k y[k]`. When `break_room_symmetry` is set, also
/// add the optional lexicographic tie-breaker `y[k] >= y[k+1]` across rooms
/// that share `(rows, cols, skip_rows, skip_cols)`, in room-index order
/// within each group (spec §4.3, §9).
pub fn add_objective(ctx: &mut SeatingModel, rooms: &[Room], break_room_symmetry: bool) {
    let mut sum = LinearExpr::from(0);
    for var in &ctx.room_vars {
        sum = sum + LinearExpr::from(var.clone());
    }
    ctx.model.minimize(sum);

    if !break_room_symmetry {
        return;
    }

    let mut groups: HashMap<(u32, u32, bool, bool), Vec<usize>> = HashMap::new();
    for (idx, room) in rooms.iter().enumerate() {
        groups
            .entry((room.rows, room.cols, room.skip_rows, room.skip_cols))
            .or_default()
            .push(idx);
    }
    let mut keys: Vec<_> = groups.keys().copied().collect();
    keys.sort_unstable();
    for key in keys {
        for pair in groups[&key].windows(2) {
            let (first, second) = (pair[0], pair[1]);
            ctx.model.add_ge(
                LinearExpr::from(ctx.room_vars[first].clone()),
                LinearExpr::from(ctx.room_vars[second].clone()),
            );
        }
    }
}
