//! Generate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::prompt::{
    Prompter, OUTPUT_DIR_PROMPT, SITES_PROMPT, TEMPLATE_PROMPT, WORKBOOK_PROMPT,
};
use super::utils::parse_csv;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::generate::{generate, GenerateRequest};

#[derive(Args)]
pub struct GenerateArgs {
    /// Workbook holding the parameter sheet (.xlsx, .xlsm, .xls, .ods)
    #[arg(short = 'w', long, value_name = "FILE")]
    pub workbook: Option<PathBuf>,

    /// JSON configuration template
    #[arg(short = 't', long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Site column names (comma-separated)
    #[arg(short = 's', long, value_name = "SITES")]
    pub sites: Option<String>,

    /// Directory for output files (created if missing)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to settings file (dp-config-gen.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suffix of output file names
    #[arg(long, value_name = "TAG")]
    pub release_tag: Option<String>,

    /// Name of the parameter sheet
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Header of the parameter-name column
    #[arg(long, value_name = "LABEL")]
    pub key_column: Option<String>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let file_config = load_config(&std::env::current_dir()?, args.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            sheet: args.sheet,
            key_column: args.key_column,
            release_tag: args.release_tag,
        },
    );

    let prompter = Prompter::from_terminal();
    let workbook = prompter.path(args.workbook, WORKBOOK_PROMPT, "--workbook")?;
    let template = prompter.path(args.template, TEMPLATE_PROMPT, "--template")?;
    let sites = parse_csv(&prompter.text(args.sites, SITES_PROMPT, "--sites")?);
    let output_dir = prompter.path(args.output_dir, OUTPUT_DIR_PROMPT, "--output-dir")?;

    if sites.is_empty() {
        anyhow::bail!("No site names given");
    }

    let request = GenerateRequest { workbook, template, sites, output_dir };
    let summary = generate(&request, &config)?;

    for outputs in &summary.written {
        println!("{}:", outputs.site);
        println!("  Generated JSON configuration saved to: {}", outputs.json.display());
        println!("  Variable file saved to: {}", outputs.var.display());
        println!("  Log file saved to: {}", outputs.log.display());
    }
    for skipped in &summary.skipped {
        println!("{}: skipped ({})", skipped.site, skipped.reason);
    }
    println!(
        "Sites generated: {}, skipped: {}",
        summary.written.len(),
        summary.skipped.len()
    );

    Ok(())
}
