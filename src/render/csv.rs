use csv::WriterBuilder;

use crate::error::{GradeError, Result};
use crate::gradebook::Report;

/// Renders a header record followed by one record per student. Short score
/// lists are padded with empty fields so every record has the same width.
pub fn render(report: &Report) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(report.headers())?;
    for row in &report.rows {
        writer.write_record(row.cells(report.assignments))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GradeError::Csv(e.into_error().into()))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| GradeError::config(format!("rendered CSV is not UTF-8: {e}")))?;

    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradebook::ReportRow;

    #[test]
    fn test_render_records() {
        let report = Report {
            assignments: 2,
            rows: vec![ReportRow {
                first_name: "Ada".into(),
                last_name: "King, Lovelace".into(),
                average: 45.0,
                letter: "F".into(),
                scores: vec![90.0],
            }],
        };

        let expected = "\
First Name,Last Name,Overall Average,Letter Grade,Score 1,Score 2
Ada,\"King, Lovelace\",45,F,90,";
        assert_eq!(render(&report).unwrap(), expected);
    }
}
