use crate::gradebook::Report;

const FIXED_SEPARATOR: &str = "-----------|-----------|-----------------|--------------|";

/// Renders a pipe table: header, dashed separator, one row per student.
pub fn render(report: &Report) -> String {
    let headers = report.headers();

    let separator = format!(
        "{}{}",
        FIXED_SEPARATOR,
        "------|".repeat(report.assignments)
    );

    let mut lines = vec![row(&headers), separator];
    lines.extend(report.rows.iter().map(|r| {
        let cells: Vec<String> = r
            .cells(report.assignments)
            .iter()
            .map(|c| escape(c))
            .collect();
        row(&cells)
    }));

    lines.join("\n")
}

fn row(cells: &[String]) -> String {
    format!("{} |", cells.join(" | "))
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
