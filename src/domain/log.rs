//! Per-site processing log.

use serde_json::Value;

/// Ordered log lines collected while processing one site.
///
/// Passed explicitly into each pipeline step. Every recorded line is also
/// emitted as a `debug` trace event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunLog {
    lines: Vec<String>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "dp_config_gen::site_log", "{}", line);
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Newline-joined contents, without a trailing newline.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Render a JSON value for a log line: strings bare, everything else as JSON.
pub fn display_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
