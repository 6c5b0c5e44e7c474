//! Processing of a single site.

use serde_json::Value;

use crate::domain::{GeneratorConfig, Lookup, ParameterTable, RunLog};
use crate::error::TableError;
use crate::merge::{apply_composite_rules, merge_template};
use crate::workbook::DpSheet;

/// A site whose table was extracted and merged, ready to be written.
#[derive(Debug, Clone)]
pub struct SiteRun {
    pub site: String,
    pub table: ParameterTable,
    pub merged: Value,
    pub log: RunLog,
}

#[derive(Debug, Clone)]
pub enum SiteOutcome {
    Merged(SiteRun),
    Skipped { site: String, reason: String, log: RunLog },
}

/// Extract, merge and composite-merge one site against `template`.
///
/// `sheet` is the result of opening the workbook; an error there skips the
/// site just like a missing site column. `template` is never modified.
pub fn run_site(
    sheet: Result<&DpSheet, &TableError>,
    template: &Value,
    site: &str,
    config: &GeneratorConfig,
) -> SiteOutcome {
    let mut log = RunLog::new();
    log.record(format!("Processing site: {site}"));

    let extracted =
        sheet.map_err(Clone::clone).and_then(|s| s.site_table(site, &config.preserve_as_text, &mut log));

    let table = match extracted {
        Ok(table) if !table.is_empty() => table,
        Ok(_) => return skipped(site, "no parameter rows".to_string(), log),
        Err(e) => {
            let reason = e.to_string();
            log.record(reason.clone());
            return skipped(site, reason, log);
        }
    };

    let lookup = Lookup::build(&table, &mut log);
    let mut merged = merge_template(template, &lookup, &mut log);
    let added = apply_composite_rules(&mut merged, &config.composite, &lookup, &mut log);
    tracing::debug!(site, entries = table.len(), composite_added = added, "Merged site parameters");

    SiteOutcome::Merged(SiteRun { site: site.to_string(), table, merged, log })
}

fn skipped(site: &str, reason: String, mut log: RunLog) -> SiteOutcome {
    log.record(format!("No valid DP data found for site: {site}. Skipping."));
    SiteOutcome::Skipped { site: site.to_string(), reason, log }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Range};
    use serde_json::json;

    fn sheet(rows: &[[&str; 3]]) -> DpSheet {
        let mut range = Range::new((0, 0), (rows.len() as u32 - 1, 2));
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if !cell.is_empty() {
                    range.set_value((r as u32, c as u32), Data::String(cell.to_string()));
                }
            }
        }
        DpSheet::from_range("DP", range, "NE Parameter Name").expect("sheet")
    }

    #[test]
    fn merges_the_documented_scenario() {
        let sheet = sheet(&[
            ["NE Parameter Name", "Lagos", "Abuja"],
            ["Foo Bar", "true", "false"],
            ["AIF_Enabled", "1", "0"],
        ]);
        let template = json!([
            {"name": "Foo Bar", "value": "x"},
            {"name": "AIF_Enabled", "value": 0}
        ]);

        let outcome = run_site(Ok(&sheet), &template, "Lagos", &GeneratorConfig::default());

        let SiteOutcome::Merged(run) = outcome else {
            panic!("expected merged site");
        };
        assert_eq!(
            run.merged,
            json!([
                {"name": "Foo Bar", "value": true},
                {"name": "AIF_Enabled", "value": "1"}
            ])
        );
        assert_eq!(run.log.lines()[0], "Processing site: Lagos");
        assert_eq!(template[0]["value"], json!("x"));
    }

    #[test]
    fn sites_do_not_contaminate_each_other() {
        let sheet = sheet(&[
            ["NE Parameter Name", "Lagos", "Abuja"],
            ["Port", "1", "2"],
        ]);
        let template = json!({"port": 0});
        let config = GeneratorConfig::default();

        let first = run_site(Ok(&sheet), &template, "Lagos", &config);
        let second = run_site(Ok(&sheet), &template, "Abuja", &config);

        match (first, second) {
            (SiteOutcome::Merged(a), SiteOutcome::Merged(b)) => {
                assert_eq!(a.merged, json!({"port": 1}));
                assert_eq!(b.merged, json!({"port": 2}));
            }
            _ => panic!("expected both sites merged"),
        }
    }

    #[test]
    fn missing_site_column_skips_with_reason() {
        let sheet = sheet(&[["NE Parameter Name", "Lagos", ""], ["Port", "1", ""]]);
        let outcome = run_site(Ok(&sheet), &json!({}), "Kano", &GeneratorConfig::default());

        let SiteOutcome::Skipped { site, reason, log } = outcome else {
            panic!("expected skipped site");
        };
        assert_eq!(site, "Kano");
        assert_eq!(reason, "Site column 'Kano' not found in header.");
        assert!(log.contains("No valid DP data found for site: Kano. Skipping."));
    }

    #[test]
    fn empty_table_skips() {
        let sheet = sheet(&[["NE Parameter Name", "Lagos", ""]]);
        let outcome = run_site(Ok(&sheet), &json!({}), "Lagos", &GeneratorConfig::default());
        assert!(matches!(outcome, SiteOutcome::Skipped { ref reason, .. } if reason == "no parameter rows"));
    }

    #[test]
    fn workbook_error_skips_every_site() {
        let err = TableError::SheetNotFound("DP".to_string());
        let outcome = run_site(Err(&err), &json!({}), "Lagos", &GeneratorConfig::default());
        let SiteOutcome::Skipped { log, .. } = outcome else {
            panic!("expected skipped site");
        };
        assert!(log.contains("Sheet 'DP' not found in the Excel file."));
    }
}
