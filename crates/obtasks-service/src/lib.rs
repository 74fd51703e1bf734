//! Task activation: resolving task definitions and deciding, for a given day,
//! whether each task is active, when it is due, or when it next starts.

pub mod activation;
pub mod definition;
pub mod error;
