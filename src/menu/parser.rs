//! CSV row parsing.
//!
//! Only single-line rows are understood: fields are split on every comma and
//! may each be wrapped in one layer of double quotes.

use super::helpers::{clean_field, is_present};
use super::models::{Diagnostic, DiagnosticKind, Parsed, RawRecord, HEADERS};

/// Splits `text` into `(line_number, line)` pairs, dropping blank lines and
/// any trailing carriage return.
fn non_empty_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn header_matches(line: &str) -> bool {
    let names: Vec<String> = line.split(',').map(clean_field).collect();
    names.len() == HEADERS.len()
        && names
            .iter()
            .zip(HEADERS.iter())
            .all(|(found, expected)| found.eq_ignore_ascii_case(expected))
}

/// Maps one data line onto the header columns.
///
/// Extra fields beyond the header count are dropped; missing trailing fields
/// stay `None`.
pub fn parse_line(line_number: usize, line: &str) -> RawRecord {
    let mut record = RawRecord {
        line: line_number,
        ..RawRecord::default()
    };
    for (index, field) in line.split(',').take(HEADERS.len()).enumerate() {
        record.set(index, clean_field(field));
    }
    record
}

/// Parses CSV text into raw records.
///
/// The first non-blank line is the header and is never returned. Rows without
/// an `ID` or `CategoryKey` are skipped and reported.
pub fn parse_rows(text: &str) -> Parsed<Vec<RawRecord>> {
    let mut lines = non_empty_lines(text);
    let mut records = Vec::new();
    let mut diagnostics = Vec::new();

    if let Some((line_number, header)) = lines.next() {
        if !header_matches(header) {
            tracing::warn!(line = line_number, "CSV header does not match expected columns");
            diagnostics.push(Diagnostic {
                line: line_number,
                kind: DiagnosticKind::UnexpectedHeader,
            });
        }
    }

    for (line_number, line) in lines {
        let record = parse_line(line_number, line);

        let missing = if !is_present(record.id.as_deref()) {
            Some("ID")
        } else if !is_present(record.category_key.as_deref()) {
            Some("CategoryKey")
        } else {
            None
        };

        if let Some(field) = missing {
            tracing::warn!(line = line_number, field, "skipping row with missing field");
            diagnostics.push(Diagnostic {
                line: line_number,
                kind: DiagnosticKind::MissingField(field),
            });
            continue;
        }

        records.push(record);
    }

    Parsed {
        value: records,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "ID,Name,CategoryTitle,CategoryKey,Price30cm,Price40cm,Price50cm,Tag,IsSpecial,imageURL";

    #[test]
    fn header_only_yields_no_rows() {
        let parsed = parse_rows(HEADER);
        assert!(parsed.value.is_empty());
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn empty_input_yields_no_rows() {
        let parsed = parse_rows("");
        assert!(parsed.value.is_empty());
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn handles_crlf_and_blank_lines() {
        let text = format!("{HEADER}\r\n\r\n1,Маргарита,,classics,300,400,500,,,\r\n   \n");
        let parsed = parse_rows(&text);
        assert_eq!(parsed.value.len(), 1);
        let record = &parsed.value[0];
        assert_eq!(record.line, 3);
        assert_eq!(record.name.as_deref(), Some("Маргарита"));
        assert_eq!(record.image_url.as_deref(), Some(""));
    }

    #[test]
    fn short_rows_leave_trailing_fields_unset() {
        let parsed = parse_rows(&format!("{HEADER}\n7,Пастрмајлија,,others,350"));
        let record = &parsed.value[0];
        assert_eq!(record.price30.as_deref(), Some("350"));
        assert_eq!(record.price40, None);
        assert_eq!(record.image_url, None);
    }

    #[test]
    fn long_rows_are_clipped() {
        let parsed = parse_rows(&format!(
            "{HEADER}\n1,A,,classics,1,2,3,,,img.png,extra,more"
        ));
        assert_eq!(parsed.value.len(), 1);
        assert_eq!(parsed.value[0].image_url.as_deref(), Some("img.png"));
    }

    #[test]
    fn quoted_fields_are_unwrapped() {
        let parsed = parse_rows(&format!(
            "{HEADER}\n\"3\",\"Капричоза\",,\"classics\",1,2,3,\"Препорака\",\"true\","
        ));
        let record = &parsed.value[0];
        assert_eq!(record.id.as_deref(), Some("3"));
        assert_eq!(record.tag.as_deref(), Some("Препорака"));
        assert_eq!(record.is_special.as_deref(), Some("true"));
    }

    #[test]
    fn rows_missing_required_fields_are_skipped() {
        let text = format!("{HEADER}\n,NoId,,classics,1,2,3\n2,NoKey,,,1,2,3\n3,Ok,,veggie,5");
        let parsed = parse_rows(&text);
        assert_eq!(parsed.value.len(), 1);
        assert_eq!(parsed.value[0].id.as_deref(), Some("3"));
        assert_eq!(
            parsed.diagnostics,
            vec![
                Diagnostic {
                    line: 2,
                    kind: DiagnosticKind::MissingField("ID")
                },
                Diagnostic {
                    line: 3,
                    kind: DiagnosticKind::MissingField("CategoryKey")
                },
            ]
        );
    }

    #[test]
    fn mismatched_header_is_reported_but_not_fatal() {
        let parsed = parse_rows("id,name\n1,A,,classics,10");
        assert_eq!(parsed.value.len(), 1);
        assert_eq!(parsed.diagnostics[0].kind, DiagnosticKind::UnexpectedHeader);
    }
}
