//! Plain-text table layout.

/// Lay out `rows` under `headers` in left-aligned columns.
///
/// Returns the header line and the body lines (the first body line is the
/// dashed rule under the header). Trailing whitespace is trimmed.
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> (String, Vec<String>) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_line = join(
        headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect(),
    );

    let mut body = Vec::with_capacity(rows.len() + 1);
    body.push(join(widths.iter().map(|w| "-".repeat(*w)).collect()));
    for row in rows {
        body.push(join(
            widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad(row.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect(),
        ));
    }

    (header_line, body)
}

fn join(cells: Vec<String>) -> String {
    cells.join("  ").trim_end().to_string()
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_aligned() {
        let rows = vec![
            vec!["Sous Chef Kitchen API".to_string(), "Ready".to_string()],
            vec!["Prefect Cloud".to_string(), "Not Ready".to_string()],
        ];
        let (header, body) = render_table(&["System Name", "Status"], &rows);

        assert_eq!(header, "System Name            Status");
        assert_eq!(body[0], "---------------------  ---------");
        assert_eq!(body[1], "Sous Chef Kitchen API  Ready");
        assert_eq!(body[2], "Prefect Cloud          Not Ready");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let rows = vec![vec!["pasta".to_string()]];
        let (_, body) = render_table(&["Recipe Name", "Description"], &rows);
        assert_eq!(body[1], "pasta");
    }

    #[test]
    fn test_empty_table_has_rule() {
        let (header, body) = render_table(&["A", "Bee"], &[]);
        assert_eq!(header, "A  Bee");
        assert_eq!(body, vec!["-  ---"]);
    }
}
