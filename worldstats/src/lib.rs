//! WorldStats - Country statistics reports from the REST Countries dataset
//!
//! This library fetches country records, ranks and aggregates them into
//! chart-ready datasets, and classifies which part of a spinning globe faces
//! the viewer.
//!
//! # Modules
//!
//! - [`country`]: country records, continents, membership filtering
//! - [`report`]: ranked and continent-bucketed reports
//! - [`classifier`]: facing-region classification with change detection
//! - [`provider`]: HTTP data provider (blocking and async)
//! - [`config`]: INI configuration file
//! - [`logging`]: tracing subscriber setup

pub mod classifier;
pub mod config;
pub mod country;
pub mod logging;
pub mod provider;
pub mod report;
