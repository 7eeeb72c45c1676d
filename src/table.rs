/// Status glyphs stripped from the start of body cells. Distinct from the
/// inline formatter's allow-list; the two sets are not unified.
const CELL_GLYPHS: &[char] = &[
    '\u{2705}',  // ✅
    '\u{274c}',  // ❌
    '\u{1f4ca}', // 📊
    '\u{1f949}', // 🥉
    '\u{1f948}', // 🥈
    '\u{1f947}', // 🥇
];

/// Split an accumulated block of pipe-delimited lines into header cells
/// and body rows.
///
/// The first line is the header row unconditionally; this is a positional
/// rule, not a content check. Later lines containing the literal `---` are
/// the separator and dropped. Rows are not padded or validated against the
/// header count.
pub fn extract(lines: &[String]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = Vec::new();
    let mut rows = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            headers = split_cells(line);
        } else if !line.contains("---") {
            rows.push(split_cells(line));
        }
    }

    (headers, rows)
}

/// Split one row on `|`, dropping the first and last segments (empty when
/// the row starts and ends with a pipe, dropped regardless).
fn split_cells(line: &str) -> Vec<String> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Clean a body cell for output: strip symmetric `*` and backtick
/// characters, then one leading status glyph.
pub fn clean_cell(cell: &str) -> String {
    let trimmed = cell.trim_matches(|c: char| c == '*' || c == '`');
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) if CELL_GLYPHS.contains(&first) => chars.as_str().trim_start().to_string(),
        _ => trimmed.to_string(),
    }
}

/// Clean a header cell: strip symmetric `*` only, backticks stay.
pub fn clean_header(cell: &str) -> &str {
    cell.trim_matches('*')
}
