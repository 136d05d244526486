use std::fmt::Write;

use crate::gradebook::Report;

const TITLE: &str = "Final Grades";

/// Renders a standalone page holding one bordered table.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n  <head>\n");
    let _ = writeln!(out, "    <title>{}</title>", escape(TITLE));
    out.push_str("  </head>\n  <body>\n    <table border=\"1\">\n");

    push_row(&mut out, "th", &report.headers());
    for row in &report.rows {
        push_row(&mut out, "td", &row.cells(report.assignments));
    }

    out.push_str("    </table>\n  </body>\n</html>");
    out
}

fn push_row(out: &mut String, tag: &str, cells: &[String]) {
    out.push_str("      <tr>\n");
    for cell in cells {
        let _ = writeln!(out, "        <{tag}>{}</{tag}>", escape(cell));
    }
    out.push_str("      </tr>\n");
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradebook::ReportRow;

    #[test]
    fn test_render_document() {
        let report = Report {
            assignments: 2,
            rows: vec![ReportRow {
                first_name: "Ada".into(),
                last_name: "O'Brien <Jr>".into(),
                average: 45.0,
                letter: "F".into(),
                scores: vec![90.0],
            }],
        };

        let html = render(&report);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Final Grades</title>"));
        assert!(html.contains("<table border=\"1\">"));
        assert!(html.contains("<th>Score 2</th>"));
        assert!(html.contains("<td>O&#39;Brien &lt;Jr&gt;</td>"));
        assert!(html.contains("<td></td>"));
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & \"b\""), "a &amp; &quot;b&quot;");
    }
}
