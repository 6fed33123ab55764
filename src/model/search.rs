//! Search Driver (spec §2 component 5, §4.4): configure and run the CP
//! search once. No restarts, no warm-starts — the solver's final response is
//! handed to the extractor untouched.

use std::time::Instant;

use cp_sat::builder::CpModelBuilder;
use cp_sat::proto::{CpSolverResponse, SatParameters};
use log::info;

use crate::config::SeatingConfig;

/// OR-Tools CP-SAT's `PORTFOLIO_SEARCH` branching strategy value.
const PORTFOLIO_SEARCH: i32 = 2;

pub struct SearchOutcome {
    pub response: CpSolverResponse,
    pub elapsed_ms: u128,
}

/// Assemble `SatParameters` from `config` and run a single blocking solve.
/// Model construction and result extraction never touch this configuration;
/// it lives entirely here, keeping search tuning out of the constraint-adding
/// helpers.
pub fn run_search(model: &mut CpModelBuilder, config: &SeatingConfig) -> SearchOutcome {
    let mut params = SatParameters::default();
    params.max_time_in_seconds = Some(config.timeout_seconds as f64);
    params.num_search_workers = Some(config.num_workers);
    params.search_branching = Some(PORTFOLIO_SEARCH);
    params.cp_model_presolve = Some(true);
    params.log_search_progress = Some(false);

    info!(
        "starting CP search: timeout={}s workers={}",
        config.timeout_seconds, config.num_workers
    );

    let start = Instant::now();
    let response = model.solve_with_parameters(&params);
    let elapsed_ms = start.elapsed().as_millis();

    info!(
        "CP search finished in {}ms with status {:?}",
        elapsed_ms,
        response.status()
    );

    SearchOutcome { response, elapsed_ms }
}
