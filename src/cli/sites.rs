//! Sites command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::workbook::DpSheet;

#[derive(Args)]
pub struct SitesArgs {
    /// Workbook holding the parameter sheet
    #[arg(short = 'w', long, value_name = "FILE")]
    pub workbook: PathBuf,

    /// Path to settings file (dp-config-gen.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name of the parameter sheet
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Header of the parameter-name column
    #[arg(long, value_name = "LABEL")]
    pub key_column: Option<String>,
}

pub fn run(args: SitesArgs) -> Result<()> {
    let file_config = load_config(&std::env::current_dir()?, args.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides { sheet: args.sheet, key_column: args.key_column, release_tag: None },
    );

    let sheet = DpSheet::open(&args.workbook, &config.sheet, &config.key_column)?;
    let sites = sheet.site_columns();

    println!("Site columns in sheet '{}':", sheet.name());
    for site in &sites {
        println!("  {}", site);
    }
    if sites.is_empty() {
        println!("  (none)");
    }

    Ok(())
}
