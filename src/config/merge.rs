//! Command-line overrides of file settings

use crate::domain::GeneratorConfig;

/// Settings given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub sheet: Option<String>,
    pub key_column: Option<String>,
    pub release_tag: Option<String>,
}

pub fn merge_cli_with_config(mut config: GeneratorConfig, cli: CliOverrides) -> GeneratorConfig {
    if let Some(sheet) = cli.sheet {
        config.sheet = sheet;
    }
    if let Some(key_column) = cli.key_column {
        config.key_column = key_column;
    }
    if let Some(release_tag) = cli.release_tag {
        config.release_tag = release_tag;
    }
    config
}
