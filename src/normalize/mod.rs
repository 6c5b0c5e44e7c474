//! Key canonicalization and cell value coercion.

pub mod cell;
pub mod key;

pub use cell::{cell_text, coerce_text, normalize_cell};
pub use key::normalize_key;
