//! Core data types shared by the loader, the mergers and the orchestrator.

pub mod config;
pub mod log;
pub mod table;
pub mod value;

pub use config::{CompositeRule, GeneratorConfig};
pub use log::{display_json, RunLog};
pub use table::{Lookup, ParameterTable};
pub use value::ParamValue;
