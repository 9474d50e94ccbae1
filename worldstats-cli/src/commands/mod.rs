//! CLI command implementations.

pub mod common;
pub mod config;
pub mod continent;
pub mod country;
pub mod globe;
pub mod report;

#[cfg(test)]
pub mod fixtures;
