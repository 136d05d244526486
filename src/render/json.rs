use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::gradebook::{Report, ReportRow};

/// Top-level JSON document for a rendered report.
#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    assignments: usize,
    students: &'a [ReportRow],
}

/// Renders the report as pretty-printed JSON.
pub fn render(report: &Report) -> Result<String> {
    let doc = JsonReport {
        generated_at: Utc::now(),
        assignments: report.assignments,
        students: &report.rows,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
