//! Exam seating assignment optimizer.
//!
//! Given students (each taking one named exam), rectangular rooms, and
//! optional per-exam room restrictions, [`solve_seating`] produces a seat
//! assignment that respects capacity, same-exam separation, and restriction
//! constraints while minimizing the number of rooms used. See SPEC_FULL.md
//! for the full specification this crate implements; parsing, a CLI,
//! language bindings, and reporting are external collaborators and have no
//! surface in this crate.

pub mod config;
pub mod diagnostics;
pub mod error;
mod feasibility;
mod model;
pub mod types;
mod validate;

use log::info;

pub use config::SeatingConfig;
pub use diagnostics::Diagnostics;
pub use error::SeatingError;
pub use types::{Assignment, Position, Restrictions, Room, Student, StudentId};

use cp_sat::proto::CpSolverStatus;

use model::constraints::{
    add_assignment_constraints, add_capacity_constraints, add_linkage_constraints, add_objective,
    add_separation_constraints,
};
use model::context::build_variables;
use model::extract::extract_solution;
use model::position::enumerate_positions;
use model::search::run_search;

const NOT_RUN: &str = "NOT_RUN";

/// Solve one exam seating problem. A pure function of its inputs plus the
/// CP search's bounded internal nondeterminism (spec §5): the model built
/// from identical inputs is always identical, but which optimal seating is
/// returned when several exist is not guaranteed to be stable across runs.
///
/// Returns the assignment result alongside a [`Diagnostics`] record that is
/// populated as far as the pipeline got, even on failure.
pub fn solve_seating(
    students: &[Student],
    rooms: &[Room],
    restrictions: &Restrictions,
    config: &SeatingConfig,
) -> (Result<Vec<Assignment>, SeatingError>, Diagnostics) {
    let mut diagnostics = Diagnostics {
        student_count: students.len(),
        room_count: rooms.len(),
        total_capacity: 0,
        variables_created: 0,
        separation_constraints_emitted: 0,
        cap_hit: false,
        symmetry_breaking_enabled: config.break_room_symmetry,
        solver_status: NOT_RUN.to_string(),
        solve_time_ms: 0,
    };

    info!(
        "solving seating for {} students across {} rooms",
        students.len(),
        rooms.len()
    );

    if let Err(err) = validate::validate(students, rooms, restrictions) {
        return (Err(err), diagnostics);
    }

    let room_positions: Vec<_> = rooms.iter().map(enumerate_positions).collect();

    let total_capacity =
        match feasibility::check_feasibility(students, rooms, &room_positions, restrictions) {
            Ok(capacity) => capacity,
            Err(err) => return (Err(err), diagnostics),
        };
    diagnostics.total_capacity = total_capacity;

    let mut ctx = build_variables(students, rooms, restrictions, room_positions);
    diagnostics.variables_created = ctx.variable_count();

    add_assignment_constraints(&mut ctx);
    add_capacity_constraints(&mut ctx);
    add_linkage_constraints(&mut ctx);
    let (separation_emitted, cap_hit) =
        add_separation_constraints(&mut ctx, students, rooms, config.separation_cap);
    diagnostics.separation_constraints_emitted = separation_emitted;
    diagnostics.cap_hit = cap_hit;
    add_objective(&mut ctx, rooms, config.break_room_symmetry);

    let outcome = run_search(&mut ctx.model, config);
    diagnostics.solve_time_ms = outcome.elapsed_ms;
    diagnostics.solver_status = Diagnostics::solver_status_str(outcome.response.status());

    let assignments = match extract_solution(&ctx, &outcome.response, students, rooms) {
        Ok(assignments) => assignments,
        Err(err) => return (Err(err), diagnostics),
    };

    let status = outcome.response.status();
    let result = match status {
        CpSolverStatus::Optimal | CpSolverStatus::Feasible => Ok(assignments),
        CpSolverStatus::Infeasible => Err(SeatingError::SolverInfeasible),
        CpSolverStatus::ModelInvalid => Err(SeatingError::SolverModelInvalid),
        _ => Err(SeatingError::SolverTimeout {
            elapsed_ms: outcome.elapsed_ms,
        }),
    };

    (result, diagnostics)
}
