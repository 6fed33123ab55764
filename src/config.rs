//! Caller-supplied tunables (spec §6, §9). None of these are read from the
//! environment — the optimizer is a pure function of its explicit inputs.

/// Knobs for a single [`crate::solve_seating`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingConfig {
    /// Wall-clock budget handed to the CP search. Defaults to 120s per spec §4.4.
    pub timeout_seconds: u64,
    /// Parallel search workers inside the CP search. Defaults to 4 per spec §4.4.
    pub num_workers: i32,
    /// Ceiling on emitted separation constraints before the builder stops and
    /// flags `cap_hit` in diagnostics. Defaults to 50 000 per spec §4.3.
    pub separation_cap: usize,
    /// Opt-in lexicographic tie-breaker `y[k] >= y[k+1]` across rooms sharing
    /// dimensions and skip flags (spec §4.3, §9). Off by default because it
    /// changes the solution distribution; callers that enable it see the flag
    /// echoed back on [`crate::diagnostics::Diagnostics`].
    pub break_room_symmetry: bool,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 120,
            num_workers: 4,
            separation_cap: 50_000,
            break_room_symmetry: false,
        }
    }
}
