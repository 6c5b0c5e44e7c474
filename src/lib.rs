//! dp-config-gen: Merge per-site deployment parameters into JSON templates
//!
//! Reads the `DP` sheet of a deployment-parameter workbook, extracts one
//! column of overrides per site, and merges those overrides into a JSON
//! configuration template. Each site produces a merged config, a processing
//! log, and a dump of the raw parameter table.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod generate;
pub mod merge;
pub mod normalize;
pub mod render;
pub mod workbook;
