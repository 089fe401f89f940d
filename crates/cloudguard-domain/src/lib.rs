//! Rule execution engine (no IO).
//!
//! Input: a populated data source cache and an effective scan config.
//! Output: per-rule findings, consulted cache entries, counts and a verdict.

#![forbid(unsafe_code)]

pub mod check;
pub mod error;
pub mod executor;
pub mod findings;
pub mod fingerprint;
pub mod policy;
pub mod preamble;
pub mod report;
pub mod rule;
pub mod rules;
pub mod sources;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, evaluate_with, run_rule};
