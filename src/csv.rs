//! Minimal CSV for the static result tables and the selection export.

use std::collections::HashMap;

pub type CsvRow = HashMap<String, String>;

/// Parse with a header row. Handles quoted fields with `""` escapes, ignores
/// `\r`, trims header names and cells, and skips blank rows.
pub fn parse_csv(text: &str) -> Vec<CsvRow> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    cur.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                cur.push(ch);
            }
            continue;
        }
        match ch {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut cur)),
            '\n' => {
                row.push(std::mem::take(&mut cur));
                rows.push(std::mem::take(&mut row));
            }
            '\r' => {}
            _ => cur.push(ch),
        }
    }
    if !cur.is_empty() || !row.is_empty() {
        row.push(cur);
        rows.push(row);
    }

    let mut it = rows.into_iter();
    let Some(header) = it.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();
    it.filter(|r| r.iter().any(|c| !c.trim().is_empty()))
        .map(|r| {
            header
                .iter()
                .enumerate()
                .map(|(j, h)| {
                    let v = r.get(j).map(|c| c.trim().to_string()).unwrap_or_default();
                    (h.clone(), v)
                })
                .collect()
        })
        .collect()
}

fn escape(v: &str) -> String {
    if v.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", v.replace('"', "\"\""))
    } else {
        v.to_string()
    }
}

/// Header line plus one line per row, each `\n`-terminated. Missing keys become empty cells.
pub fn to_csv(rows: &[CsvRow], header: &[&str]) -> String {
    let mut out = String::new();
    let line = |cells: Vec<String>| cells.join(",");
    out.push_str(&line(header.iter().map(|h| escape(h)).collect()));
    out.push('\n');
    for r in rows {
        let cells = header
            .iter()
            .map(|k| escape(r.get(*k).map(String::as_str).unwrap_or("")))
            .collect();
        out.push_str(&line(cells));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> CsvRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_quotes_crlf_and_blank_lines() {
        let text = "level, region_id ,winner_name\r\n\
                    governor,11,\"Kim, \"\"Jr\"\"\"\r\n\
                    \r\n\
                    ,  ,\n\
                    sigungu,11010,  Lee  ";
        let rows = parse_csv(text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["region_id"], "11");
        assert_eq!(rows[0]["winner_name"], "Kim, \"Jr\"");
        assert_eq!(rows[1]["level"], "sigungu");
        assert_eq!(rows[1]["winner_name"], "Lee");
    }

    #[test]
    fn short_rows_fill_missing_cells() {
        let rows = parse_csv("a,b,c\n1\n");
        assert_eq!(rows, vec![row(&[("a", "1"), ("b", ""), ("c", "")])]);
    }

    #[test]
    fn quoted_newline_stays_in_cell() {
        let rows = parse_csv("name,note\nx,\"line1\nline2\"\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["note"], "line1\nline2");
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("only,header\n").is_empty());
    }

    #[test]
    fn serializer_quotes_only_when_needed() {
        let rows = vec![
            row(&[("id", "1"), ("name", "plain")]),
            row(&[("id", "2"), ("name", "a,b")]),
            row(&[("id", "3"), ("name", "say \"hi\"")]),
            row(&[("id", "4")]),
        ];
        let out = to_csv(&rows, &["id", "name"]);
        assert_eq!(
            out,
            "id,name\n1,plain\n2,\"a,b\"\n3,\"say \"\"hi\"\"\"\n4,\n"
        );
    }

    #[test]
    fn serialized_output_parses_back() {
        let rows = vec![row(&[("k", "v, \"q\"\nz"), ("n", "서울")])];
        let back = parse_csv(&to_csv(&rows, &["k", "n"]));
        assert_eq!(back, rows);
    }
}
