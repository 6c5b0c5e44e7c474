//! dp-config-gen: Merge per-site deployment parameters into JSON templates
//!
//! Reads site columns from the `DP` sheet of a workbook and writes one merged
//! configuration, log, and variable dump per site.

use anyhow::Result;

fn main() -> Result<()> {
    dp_config_gen::cli::run()
}
