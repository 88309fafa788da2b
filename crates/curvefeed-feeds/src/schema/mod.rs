/// Common helpers (used in data transformations)
pub mod common;
pub mod market;
pub mod yields;
