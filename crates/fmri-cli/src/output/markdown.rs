/// Render a pipe table with left-aligned columns padded to a common width.
#[must_use]
pub fn render_markdown(headers: &[&str], rows: &[Vec<String>]) -> String {
    let escaped: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| escape_cell(cell)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            escaped
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers.iter().copied(), &widths));
    lines.push(format!(
        "|{}|",
        widths
            .iter()
            .map(|width| format!(":{}", "-".repeat(width + 1)))
            .collect::<Vec<_>>()
            .join("|")
    ));
    for row in &escaped {
        lines.push(format_row(row.iter().map(String::as_str), &widths));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let cells = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!(" {cell}{} ", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("|");
    format!("|{cells}|")
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}
