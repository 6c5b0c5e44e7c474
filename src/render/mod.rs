//! Rendering of per-site output artifacts.

pub mod outputs;

pub use outputs::{to_pretty_json, write_site_outputs, SiteOutputs};
