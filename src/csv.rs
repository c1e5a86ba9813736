//! CSV serialization
//!
//! Spreadsheet-friendly output: UTF-8 byte-order-mark prefix so import
//! dialogs auto-detect the encoding, CRLF row terminators, RFC 4180
//! quoting. Pure functions, no I/O.

/// Byte-order mark prepended to every artifact (`EF BB BF` in UTF-8).
pub const BOM: char = '\u{feff}';

fn needs_quotes(field: &str) -> bool {
    field.contains('"') || field.contains(',') || field.contains('\n') || field.contains('\r')
}

/// Escape a single field: quote-wrap when it contains a quote, comma or
/// line break, doubling internal quotes; otherwise emit as-is.
pub fn escape_field(field: &str) -> String {
    if needs_quotes(field) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serialize a rectangular cell grid to a CSV artifact.
///
/// An empty grid serializes to just the BOM; there is no trailing row
/// terminator.
pub fn grid_to_csv(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push(BOM);
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str("\r\n");
        }
        for (j, field) in row.iter().enumerate() {
            if j > 0 {
                out.push(',');
            }
            out.push_str(&escape_field(field));
        }
    }
    out
}
