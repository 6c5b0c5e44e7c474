//! Merging parameter overrides into a JSON template.

pub mod composite;
pub mod node;
pub mod template;

pub use composite::{apply_composite_rules, merge_into_composite};
pub use node::{is_scalar, Node};
pub use template::{apply_overrides, merge_template};
