//! Observability record emitted on every call, success or failure (spec §4.6).

use cp_sat::proto::CpSolverStatus;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostics {
    pub student_count: usize,
    pub room_count: usize,
    pub total_capacity: usize,
    pub variables_created: usize,
    pub separation_constraints_emitted: usize,
    /// Set when the separation constraint cap (spec §4.3) halted emission early.
    pub cap_hit: bool,
    /// Echoes [`crate::config::SeatingConfig::break_room_symmetry`] so callers
    /// can tell, after the fact, whether the tie-breaker shaped the solution.
    pub symmetry_breaking_enabled: bool,
    pub solver_status: String,
    pub solve_time_ms: u128,
}

impl Diagnostics {
    pub(crate) fn solver_status_str(status: CpSolverStatus) -> String {
        format!("{status:?}")
    }
}
