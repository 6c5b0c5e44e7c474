//! Config, log and variable-dump files for one site.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{GeneratorConfig, ParameterTable, RunLog};

/// Paths of the three files written for a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOutputs {
    pub site: String,
    pub json: PathBuf,
    pub log: PathBuf,
    pub var: PathBuf,
}

impl SiteOutputs {
    pub fn new(output_dir: &Path, site: &str, config: &GeneratorConfig) -> Self {
        let stem = config.output_stem(site);
        Self {
            site: site.to_string(),
            json: output_dir.join(format!("{stem}.json")),
            log: output_dir.join(format!("{stem}.log")),
            var: output_dir.join(format!("{stem}.var")),
        }
    }
}

/// Pretty-print `value` with `indent` spaces per level.
pub fn to_pretty_json<T: Serialize>(value: &T, indent: usize) -> serde_json::Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the merged config, the variable dump and the site log.
///
/// The log is written last so it records the other two saves.
pub fn write_site_outputs(
    output_dir: &Path,
    site: &str,
    merged: &serde_json::Value,
    table: &ParameterTable,
    log: &mut RunLog,
    config: &GeneratorConfig,
) -> Result<SiteOutputs> {
    let outputs = SiteOutputs::new(output_dir, site, config);

    fs::write(&outputs.json, to_pretty_json(merged, config.indent)?)
        .with_context(|| format!("Failed writing {}", outputs.json.display()))?;
    log.record(format!("Generated JSON configuration saved to: {}", outputs.json.display()));

    fs::write(&outputs.var, to_pretty_json(table, config.indent)?)
        .with_context(|| format!("Failed writing {}", outputs.var.display()))?;
    log.record(format!("Variable file saved to: {}", outputs.var.display()));

    fs::write(&outputs.log, log.render())
        .with_context(|| format!("Failed writing {}", outputs.log.display()))?;
    tracing::info!("Log file saved to: {}", outputs.log.display());

    Ok(outputs)
}
