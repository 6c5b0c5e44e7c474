//! The `DP` sheet: one parameter-name column plus one column per site.

use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

use crate::domain::{ParameterTable, RunLog};
use crate::error::TableError;
use crate::normalize::{cell_text, normalize_cell};

/// A loaded parameter sheet with its header row resolved.
#[derive(Debug, Clone)]
pub struct DpSheet {
    name: String,
    header: Vec<String>,
    key_index: usize,
    range: Range<Data>,
}

impl DpSheet {
    /// Open `path` and load `sheet`, locating the `key_column` header.
    pub fn open(path: &Path, sheet: &str, key_column: &str) -> Result<Self, TableError> {
        if !path.exists() {
            return Err(TableError::WorkbookNotFound(path.to_path_buf()));
        }

        let mut workbook = open_workbook_auto(path).map_err(|e| {
            TableError::WorkbookUnreadable { path: path.to_path_buf(), reason: e.to_string() }
        })?;

        if !workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(TableError::SheetNotFound(sheet.to_string()));
        }

        let range = workbook.worksheet_range(sheet).map_err(|e| {
            TableError::WorkbookUnreadable { path: path.to_path_buf(), reason: e.to_string() }
        })?;

        tracing::debug!(
            "Loaded sheet '{}' from {} ({} rows)",
            sheet,
            path.display(),
            range.height()
        );

        Self::from_range(sheet, range, key_column)
    }

    /// Build from an in-memory cell range.
    ///
    /// Row 1 of the sheet is the header. calamine trims leading empty rows
    /// from a range, so a range that does not start on row 1 has an empty
    /// header.
    pub fn from_range(sheet: &str, range: Range<Data>, key_column: &str) -> Result<Self, TableError> {
        let starts_on_first_row = matches!(range.start(), Some((0, _)));
        let header: Vec<String> = if starts_on_first_row {
            range
                .rows()
                .next()
                .map(|row| row.iter().map(|cell| cell_text(cell).trim().to_string()).collect())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        let key_index = header
            .iter()
            .position(|h| h == key_column)
            .ok_or_else(|| TableError::KeyColumnNotFound(key_column.to_string()))?;

        Ok(Self { name: sheet.to_string(), header, key_index, range })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Non-empty header labels other than the parameter-name column.
    pub fn site_columns(&self) -> Vec<&str> {
        self.header
            .iter()
            .enumerate()
            .filter(|(idx, label)| *idx != self.key_index && !label.is_empty())
            .map(|(_, label)| label.as_str())
            .collect()
    }

    /// Index of the first header equal to `site`, ignoring case.
    fn site_index(&self, site: &str) -> Option<usize> {
        let wanted = site.to_lowercase();
        self.header.iter().position(|h| h.to_lowercase() == wanted)
    }

    /// Extract the parameter table for one site column.
    ///
    /// Rows with an empty parameter name are skipped. Keys are trimmed;
    /// `preserved_keys` keep their cell text instead of being coerced.
    pub fn site_table(
        &self,
        site: &str,
        preserved_keys: &[String],
        log: &mut RunLog,
    ) -> Result<ParameterTable, TableError> {
        let site_index = self
            .site_index(site)
            .ok_or_else(|| TableError::SiteColumnNotFound(site.to_string()))?;

        let mut table = ParameterTable::new();
        for row in self.range.rows().skip(1) {
            let key_cell = row.get(self.key_index).unwrap_or(&Data::Empty);
            if matches!(key_cell, Data::Empty) {
                continue;
            }
            let key = cell_text(key_cell).trim().to_string();
            if key.is_empty() {
                continue;
            }

            let raw = row.get(site_index).unwrap_or(&Data::Empty);
            let value = normalize_cell(&key, raw, preserved_keys);
            log.record(format!(
                "DP data: Set key '{}' to value: {} (type: {})",
                key,
                value,
                value.type_name()
            ));
            table.insert(key, value);
        }

        Ok(table)
    }
}
