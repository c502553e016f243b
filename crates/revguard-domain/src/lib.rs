//! Pure policy evaluation (no IO).
//!
//! Input: raw `revinfo` text captured elsewhere.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod model;
pub mod parse;
pub mod policy;
pub mod report;

mod checks;
mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checks::is_commit_hash;
pub use engine::evaluate;
