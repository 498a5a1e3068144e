#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;

/// Render an aligned plain-text table.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN)
        })
        .collect();
    shrink_to_fit(&mut widths, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = truncate(row.get(index).map_or("-", String::as_str), *width);
                let numeric = is_numeric(&value);
                let padded = pad(&value, *width, numeric);
                if options.color {
                    colorize(&value, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest column one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some((idx, _)) = widths
            .iter()
            .enumerate()
            .filter(|(_, width)| **width > MIN_COLUMN)
            .max_by_key(|(_, width)| **width)
        else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Color status words: green for live states, yellow for paused or pending,
/// red for terminal ones.
fn colorize(value: &str, padded: String) -> String {
    let code = match value.to_ascii_uppercase().as_str() {
        "ACTIVE" | "AUTHENTICATED" | "TRUE" => "32",
        "DRAFT" | "PAUSED" | "RESTORING" => "33",
        "INACTIVE" | "USED" | "EXPIRED" | "ENDED" | "ANONYMOUS" | "FALSE" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_mixed_widths() {
        let rows = vec![
            vec!["c1".to_string(), "ACTIVE".to_string(), "500".to_string()],
            vec!["c200".to_string(), "INACTIVE".to_string(), "12500.5".to_string()],
        ];
        let table = render(&["id", "status", "bill"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].ends_with("    500"), "numbers are right-aligned: {lines:?}");
        assert_eq!(lines[0].chars().count(), lines[2].chars().count());
    }

    #[test]
    fn truncates_to_max_width() {
        let rows = vec![vec!["x".repeat(80), "y".repeat(80)]];
        let table = render(
            &["first", "second"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn colors_only_known_statuses() {
        let colored = colorize("USED", "USED  ".to_string());
        assert!(colored.starts_with("\u{1b}[31m"));
        assert_eq!(colorize("Spice", "Spice".to_string()), "Spice");
    }
}
