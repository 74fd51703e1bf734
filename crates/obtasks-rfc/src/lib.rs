//! Date and recurrence grammars used to describe when a task is active.
//!
//! - [`rfc::duration`]: ISO-8601 style durations with fixed-length months and years
//! - [`rfc::date`]: start dates in the handful of layouts notes tend to use
//! - [`rfc::recurrence`]: RFC 5545 recurrence rules, expanded by the `rrule` crate

pub mod error;
pub mod rfc;
