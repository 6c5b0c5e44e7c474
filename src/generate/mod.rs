//! Per-site generation run.
//!
//! Loads the template and the workbook once, then processes each requested
//! site in order. A site that cannot be extracted is skipped without writing
//! any files; the run continues with the next site.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub mod site;

pub use site::{run_site, SiteOutcome, SiteRun};

use crate::domain::GeneratorConfig;
use crate::error::TemplateError;
use crate::render::{write_site_outputs, SiteOutputs};
use crate::workbook::DpSheet;

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub workbook: PathBuf,
    pub template: PathBuf,
    pub sites: Vec<String>,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSite {
    pub site: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub written: Vec<SiteOutputs>,
    pub skipped: Vec<SkippedSite>,
}

pub fn load_template(path: &Path) -> Result<Value, TemplateError> {
    if !path.exists() {
        return Err(TemplateError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)
        .map_err(|source| TemplateError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&content)
        .map_err(|source| TemplateError::Parse { path: path.to_path_buf(), source })
}

pub fn generate(request: &GenerateRequest, config: &GeneratorConfig) -> Result<RunSummary> {
    // A missing template skips the whole run; an unreadable one is an error.
    let template = match load_template(&request.template) {
        Err(TemplateError::NotFound(path)) => {
            tracing::warn!("JSON template file not found at: {}", path.display());
            return Ok(RunSummary::default());
        }
        loaded => loaded?,
    };

    fs::create_dir_all(&request.output_dir).with_context(|| {
        format!("Failed creating output directory {}", request.output_dir.display())
    })?;

    let sheet = DpSheet::open(&request.workbook, &config.sheet, &config.key_column);
    if let Err(e) = &sheet {
        tracing::warn!("{}", e);
    }

    let mut summary = RunSummary::default();
    for site in &request.sites {
        tracing::info!("Processing site: {}", site);
        match run_site(sheet.as_ref(), &template, site, config) {
            SiteOutcome::Merged(mut run) => {
                let outputs = write_site_outputs(
                    &request.output_dir,
                    &run.site,
                    &run.merged,
                    &run.table,
                    &mut run.log,
                    config,
                )?;
                summary.written.push(outputs);
            }
            SiteOutcome::Skipped { site, reason, .. } => {
                tracing::warn!("No valid DP data found for site: {}. Skipping. ({})", site, reason);
                summary.skipped.push(SkippedSite { site, reason });
            }
        }
    }

    Ok(summary)
}
