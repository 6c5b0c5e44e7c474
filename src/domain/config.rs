//! Generator settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SHEET: &str = "DP";
pub const DEFAULT_KEY_COLUMN: &str = "NE Parameter Name";
pub const DEFAULT_RELEASE_TAG: &str = "zts_24.7_mp1";
pub const DEFAULT_INDENT: usize = 4;

/// A nested template object that accepts table entries it does not model.
///
/// The target is the mapping stored under `object` inside the `value` of the
/// top-level entry whose `name` is `section`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositeRule {
    pub section: String,
    pub object: String,
    pub prefix: String,
}

impl CompositeRule {
    pub fn new(
        section: impl Into<String>,
        object: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self { section: section.into(), object: object.into(), prefix: prefix.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Worksheet holding the deployment parameters
    pub sheet: String,
    /// Header label of the parameter-name column
    pub key_column: String,
    /// Suffix of every output file name
    pub release_tag: String,
    /// Keys whose cells are kept as trimmed text instead of being coerced
    pub preserve_as_text: Vec<String>,
    pub composite: Vec<CompositeRule>,
    /// Spaces per indentation level in the JSON outputs
    pub indent: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_SHEET.to_string(),
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            release_tag: DEFAULT_RELEASE_TAG.to_string(),
            preserve_as_text: vec!["AIF_Enabled".to_string()],
            composite: vec![CompositeRule::new("chartValues", "UmIdpConfig", "UmIdp")],
            indent: DEFAULT_INDENT,
        }
    }
}

impl GeneratorConfig {
    /// Base output file name for a site, e.g. `Lagos_zts_24.7_mp1`.
    pub fn output_stem(&self, site: &str) -> String {
        format!("{}_{}", site, self.release_tag)
    }

    pub fn preserves(&self, key: &str) -> bool {
        self.preserve_as_text.iter().any(|k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployment_workbook_layout() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.sheet, "DP");
        assert_eq!(cfg.key_column, "NE Parameter Name");
        assert_eq!(cfg.output_stem("Lagos"), "Lagos_zts_24.7_mp1");
        assert!(cfg.preserves("AIF_Enabled"));
        assert!(!cfg.preserves("aif_enabled"));
        assert_eq!(cfg.composite.len(), 1);
        assert_eq!(cfg.indent, 4);
    }
}
