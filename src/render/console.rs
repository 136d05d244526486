use crate::gradebook::Report;

/// Draws a boxed table, header separated from the body by `=`.
///
/// ```text
/// +------------+-----------+-----------------+--------------+---------+
/// | First Name | Last Name | Overall Average | Letter Grade | Score 1 |
/// +============+===========+=================+==============+=========+
/// | Alan       | Turing    | 75              | C            | 75      |
/// +------------+-----------+-----------------+--------------+---------+
/// ```
pub fn render(report: &Report) -> String {
    let headers = report.headers();
    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| r.cells(report.assignments))
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() * 2 + 3);
    lines.push(border(&widths, '-'));
    lines.push(line(&widths, &headers));
    lines.push(border(&widths, '='));
    for row in &rows {
        lines.push(line(&widths, row));
        lines.push(border(&widths, '-'));
    }
    if rows.is_empty() {
        lines.pop();
        lines.push(border(&widths, '-'));
    }

    lines.join("\n")
}

fn border(widths: &[usize], fill: char) -> String {
    let mut out = String::from("+");
    for &w in widths {
        out.extend(std::iter::repeat_n(fill, w + 2));
        out.push('+');
    }
    out
}

fn line(widths: &[usize], cells: &[String]) -> String {
    let mut out = String::from("|");
    for (w, cell) in widths.iter().zip(cells) {
        let pad = w - cell.chars().count();
        out.push(' ');
        out.push_str(cell);
        out.extend(std::iter::repeat_n(' ', pad + 1));
        out.push('|');
    }
    out
}
