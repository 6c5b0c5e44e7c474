//! Deployment-parameter workbook loading.

pub mod sheet;

pub use sheet::DpSheet;
