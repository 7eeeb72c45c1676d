use crate::block::StyledRun;

/// Marker glyphs stripped from the start of a cleaned line. The set is a
/// class of single scalars, so U+FE0F (variation selector) is a member in
/// its own right and presentation-style emoji lose only their base
/// character.
const LEADING_GLYPHS: &[char] = &[
    '\u{1f3af}', // 🎯
    '\u{1f3d7}', // 🏗
    '\u{fe0f}',
    '\u{1f4ca}', // 📊
    '\u{1f680}', // 🚀
    '\u{1f4cb}', // 📋
    '\u{1f9ea}', // 🧪
    '\u{1f3e2}', // 🏢
    '\u{1f4c8}', // 📈
    '\u{1f916}', // 🤖
    '\u{1f9e0}', // 🧠
    '\u{23f1}',  // ⏱
    '\u{1f6e0}', // 🛠
    '\u{1f504}', // 🔄
];

/// Strip Markdown emphasis from one line of text.
///
/// Applies the marker-stripping pipeline in a fixed order: `**`/`__` bold
/// pairs, `*` italic pairs, backtick code pairs, then leading heading,
/// blockquote and list markers, then one leading marker glyph. The order is
/// load-bearing: the dash-to-bullet substitution runs before glyph
/// stripping, so a glyph that followed a dash is no longer at the start of
/// the line and survives.
pub fn clean(text: &str) -> String {
    let text = strip_pairs(text, "**");
    let text = strip_pairs(&text, "__");
    let text = strip_pairs(&text, "*");
    let text = strip_pairs(&text, "`");
    let text = strip_heading_marker(&text);
    let text = strip_quote_marker(text);
    let text = bullet_from_dash(text);
    strip_leading_glyph(&text).trim().to_string()
}

/// Split a raw line on `**...**` pairs into alternating plain/bold runs.
///
/// Matches a non-greedy regex split: segments between pairs stay verbatim,
/// and an unmatched trailing `**` leaves the remainder as literal plain
/// text. Empty segments are dropped.
pub fn split_bold(text: &str) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    let mut rest = text;
    loop {
        let Some(open) = rest.find("**") else {
            runs.push(StyledRun::plain(rest));
            break;
        };
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            runs.push(StyledRun::plain(rest));
            break;
        };
        runs.push(StyledRun::plain(&rest[..open]));
        runs.push(StyledRun::bold(&after[..close]));
        rest = &after[close + 2..];
    }
    runs.retain(|run| !run.text.is_empty());
    runs
}

/// Remove every non-greedy `marker...marker` pair, keeping the enclosed
/// text. An unpaired marker is left as-is.
fn strip_pairs(text: &str, marker: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(marker) {
        let after = &rest[open + marker.len()..];
        let Some(close) = after.find(marker) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&after[..close]);
        rest = &after[close + marker.len()..];
    }
    out.push_str(rest);
    out
}

fn strip_heading_marker(text: &str) -> &str {
    if text.starts_with('#') {
        text.trim_start_matches('#').trim_start()
    } else {
        text
    }
}

fn strip_quote_marker(text: &str) -> &str {
    match text.strip_prefix('>') {
        Some(rest) => rest.trim_start(),
        None => text,
    }
}

fn bullet_from_dash(text: &str) -> String {
    match text.strip_prefix('-') {
        Some(rest) => format!("\u{2022} {}", rest.trim_start()),
        None => text.to_string(),
    }
}

fn strip_leading_glyph(text: &str) -> &str {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if LEADING_GLYPHS.contains(&first) => chars.as_str().trim_start(),
        _ => text,
    }
}
