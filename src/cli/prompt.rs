//! Interactive input for values missing from the command line.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::IsTerminal;
use std::path::PathBuf;

pub const WORKBOOK_PROMPT: &str = "Enter the path to the Excel file (DP sheet is used)";
pub const TEMPLATE_PROMPT: &str =
    "Enter the path to the JSON Template file (e.g., zts_template.json)";
pub const SITES_PROMPT: &str = "Enter the SITE column names separated by comma";
pub const OUTPUT_DIR_PROMPT: &str =
    "Enter the output directory path (where output files will be saved)";

/// Resolves missing inputs by prompting, when a terminal is attached.
pub struct Prompter {
    interactive: bool,
}

impl Prompter {
    pub fn from_terminal() -> Self {
        Self { interactive: std::io::stdin().is_terminal() && std::io::stdout().is_terminal() }
    }

    /// Return `given`, or ask for it. `flag` names the option in errors.
    pub fn text(&self, given: Option<String>, prompt: &str, flag: &str) -> Result<String> {
        if let Some(value) = given {
            return Ok(value.trim().to_string());
        }
        if !self.interactive {
            anyhow::bail!("Missing {flag} (non-interactive session, cannot prompt)");
        }
        let answer: String =
            Input::with_theme(&ColorfulTheme::default()).with_prompt(prompt).interact_text()?;
        Ok(answer.trim().to_string())
    }

    pub fn path(&self, given: Option<PathBuf>, prompt: &str, flag: &str) -> Result<PathBuf> {
        match given {
            Some(path) => Ok(path),
            None => self.text(None, prompt, flag).map(PathBuf::from),
        }
    }
}
