#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let cell = pad(&truncate_text(value, *width), *width);
                if options.color {
                    colorize_problem(&cell)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].len().max(8);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(pad))
}

/// Color a padded problem cell; other cells pass through.
fn colorize_problem(cell: &str) -> String {
    let code = match cell.trim_end() {
        "missing" | "unreadable" => "31",
        "no TR" => "33",
        _ => return cell.to_string(),
    };
    let trimmed = cell.trim_end();
    let trailing = &cell[trimmed.len()..];
    format!("\u{1b}[{code}m{trimmed}\u{1b}[0m{trailing}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TableOptions {
        TableOptions {
            max_width: None,
            color: false,
        }
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["subject", "session", "file", "problem"];
        let rows = vec![
            vec![
                "sub-01".to_string(),
                "ses-01".to_string(),
                "func dir".to_string(),
                "missing".to_string(),
            ],
            vec![
                "sub-10".to_string(),
                "ses-baseline".to_string(),
                "sub-10_ses-baseline_bold.json".to_string(),
                "no TR".to_string(),
            ],
        ];

        let table = render_table(&headers, &rows, plain());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("subject  session"));
        assert!(lines[1].chars().all(|c| c == '-'));
        let file_col = lines[0].find("file").unwrap();
        assert_eq!(lines[2].find("func dir"), Some(file_col));
        assert_eq!(lines[3].find("sub-10_ses"), Some(file_col));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["subject", "file"];
        let rows = vec![vec![
            "sub-01".to_string(),
            "sub-01_ses-01_task-rest_run-01_space-MNI_bold.json".to_string(),
        ]];

        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.ends_with('…'));
        assert!(row.chars().count() <= 30);
    }

    #[test]
    fn color_wraps_problem_labels_only() {
        assert_eq!(colorize_problem("sub-01 "), "sub-01 ");
        assert_eq!(
            colorize_problem("missing  "),
            "\u{1b}[31mmissing\u{1b}[0m  "
        );
        assert!(colorize_problem("no TR").starts_with("\u{1b}[33m"));
    }
}
