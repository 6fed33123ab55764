//! Model Builder, Search Driver, and Solution Extractor (spec §2 components
//! 2, 4-6): everything that talks directly to `cp_sat`.

pub mod constraints;
pub mod context;
pub mod extract;
pub mod position;
pub mod search;
