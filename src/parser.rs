use crate::block::{Block, StyledRun};
use crate::inline;
use crate::table;

/// Parse markdown text into a list of blocks
pub fn parse(markdown: &str, title_phrase: Option<&str>) -> Vec<Block> {
    let mut parser = LineParser::new(title_phrase);
    // split rather than `lines()` so a trailing newline still yields one
    // final empty line (a trailing spacer outside tables)
    for raw in markdown.split('\n') {
        parser.feed(raw.trim());
    }
    parser.finish()
}

/// Scanner mode. The pending table buffer lives outside the state so a
/// fence opened mid-table parks the table instead of dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    InCodeBlock,
    InTable,
}

struct LineParser<'a> {
    state: State,
    pending: Vec<String>,
    blocks: Vec<Block>,
    title_phrase: Option<&'a str>,
}

impl<'a> LineParser<'a> {
    fn new(title_phrase: Option<&'a str>) -> Self {
        Self {
            state: State::Scanning,
            pending: Vec::new(),
            blocks: Vec::new(),
            title_phrase,
        }
    }

    fn feed(&mut self, line: &str) {
        // flushing a table block asks for the flushed-over line to be
        // classified again from scratch
        while self.step(line) {}
    }

    /// Apply one classification step; returns true when the same line must
    /// be classified again.
    fn step(&mut self, line: &str) -> bool {
        // blank lines and horizontal rules become spacers, suppressed
        // while a table block is open (even one parked behind a fence)
        if line.is_empty() || line == "---" {
            if self.pending.is_empty() {
                self.blocks.push(Block::Spacer);
            }
            return false;
        }

        // fence markers toggle code mode and emit nothing
        if line.starts_with("```") {
            self.state = match self.state {
                State::InCodeBlock if self.pending.is_empty() => State::Scanning,
                State::InCodeBlock => State::InTable,
                _ => State::InCodeBlock,
            };
            return false;
        }

        // inside a fence every line is opaque code, headings and pipe
        // rows included
        if self.state == State::InCodeBlock {
            self.blocks.push(Block::CodeLine {
                text: line.to_string(),
            });
            return false;
        }

        // a pipe-delimited row accumulates; nothing is emitted until the
        // block ends
        if line.starts_with('|') && line[1..].contains('|') {
            self.pending.push(line.to_string());
            self.state = State::InTable;
            return false;
        }

        // first non-table line after a table block flushes it, then the
        // line is classified again
        if self.state == State::InTable {
            self.flush_table();
            self.state = State::Scanning;
            return true;
        }

        self.scan_line(line);
        false
    }

    /// Classify a plain line (headings, quotes, list items, paragraphs).
    fn scan_line(&mut self, line: &str) {
        if line.starts_with('#') {
            let depth = line.chars().take_while(|&c| c == '#').count();
            let text = inline::clean(line);
            let level = match depth {
                1 if self.is_title(&text) => 0,
                1 | 2 => 1,
                3 => 2,
                4 => 3,
                _ => {
                    log::debug!("dropping heading deeper than four levels: {line:?}");
                    return;
                }
            };
            self.blocks.push(Block::Heading { level, text });
        } else if line.starts_with('>') {
            self.blocks.push(Block::Paragraph {
                runs: vec![StyledRun::plain(inline::clean(line))],
                centered: true,
                italic: true,
            });
        } else if line.starts_with('-') || line.starts_with('*') {
            self.blocks.push(Block::ListItem {
                text: inline::clean(line),
            });
        } else {
            let cleaned = inline::clean(line);
            if cleaned.is_empty() {
                return;
            }
            let runs = if line.contains("**") {
                inline::split_bold(line)
            } else {
                vec![StyledRun::plain(cleaned)]
            };
            self.blocks.push(Block::Paragraph {
                runs,
                centered: false,
                italic: false,
            });
        }
    }

    fn is_title(&self, text: &str) -> bool {
        self.title_phrase.is_some_and(|phrase| text.contains(phrase))
    }

    fn flush_table(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        let (headers, rows) = table::extract(&pending);
        self.blocks.push(Block::Table { headers, rows });
        self.blocks.push(Block::Spacer);
    }

    fn finish(mut self) -> Vec<Block> {
        if !self.pending.is_empty() {
            self.flush_table();
        }
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(markdown: &str) -> Vec<Block> {
        parse(markdown, None)
    }

    fn heading(level: u8, text: &str) -> Block {
        Block::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            runs: vec![StyledRun::plain(text)],
            centered: false,
            italic: false,
        }
    }

    #[test]
    fn heading_depth_maps_to_levels() {
        assert_eq!(
            scan("# One\n## Two\n### Three\n#### Four"),
            vec![
                heading(1, "One"),
                heading(1, "Two"),
                heading(2, "Three"),
                heading(3, "Four"),
            ]
        );
    }

    #[test]
    fn deep_headings_are_dropped() {
        assert_eq!(scan("##### Five"), vec![]);
    }

    #[test]
    fn title_phrase_promotes_top_heading() {
        assert_eq!(
            parse("# Launch Plan 2026\n# Appendix", Some("Launch Plan")),
            vec![heading(0, "Launch Plan 2026"), heading(1, "Appendix")]
        );
    }

    #[test]
    fn blockquote_is_centered_and_italic() {
        assert_eq!(
            scan("> stay focused"),
            vec![Block::Paragraph {
                runs: vec![StyledRun::plain("stay focused")],
                centered: true,
                italic: true,
            }]
        );
    }

    #[test]
    fn bold_paragraph_round_trip() {
        assert_eq!(
            scan("plain **bold** plain"),
            vec![Block::Paragraph {
                runs: vec![
                    StyledRun::plain("plain "),
                    StyledRun::bold("bold"),
                    StyledRun::plain(" plain"),
                ],
                centered: false,
                italic: false,
            }]
        );
    }

    #[test]
    fn blank_lines_and_rules_become_spacers() {
        assert_eq!(
            scan("a\n\nb\n---\nc"),
            vec![
                paragraph("a"),
                Block::Spacer,
                paragraph("b"),
                Block::Spacer,
                paragraph("c"),
            ]
        );
    }

    #[test]
    fn code_block_lines_are_opaque() {
        assert_eq!(
            scan("```\n# not a heading\n| not | a | table |\n```"),
            vec![
                Block::CodeLine {
                    text: "# not a heading".to_string()
                },
                Block::CodeLine {
                    text: "| not | a | table |".to_string()
                },
            ]
        );
    }

    #[test]
    fn fence_language_tag_is_discarded() {
        assert_eq!(
            scan("```rust\nlet x = 1;\n```"),
            vec![Block::CodeLine {
                text: "let x = 1;".to_string()
            }]
        );
    }

    #[test]
    fn table_flush_reclassifies_the_next_line() {
        assert_eq!(
            scan("| A |B|\n| --- | --- |\n|1|2|\n# Next"),
            vec![
                Block::Table {
                    headers: vec!["A".to_string(), "B".to_string()],
                    rows: vec![vec!["1".to_string(), "2".to_string()]],
                },
                Block::Spacer,
                heading(1, "Next"),
            ]
        );
    }

    #[test]
    fn unterminated_table_is_flushed_at_end_of_input() {
        assert_eq!(
            scan("| A | B |\n| --- | --- |\n| 1 | 2 |"),
            vec![
                Block::Table {
                    headers: vec!["A".to_string(), "B".to_string()],
                    rows: vec![vec!["1".to_string(), "2".to_string()]],
                },
                Block::Spacer,
            ]
        );
    }

    #[test]
    fn spacers_are_suppressed_inside_tables() {
        assert_eq!(
            scan("| A | B |\n\n| 1 | 2 |\nend"),
            vec![
                Block::Table {
                    headers: vec!["A".to_string(), "B".to_string()],
                    rows: vec![vec!["1".to_string(), "2".to_string()]],
                },
                Block::Spacer,
                paragraph("end"),
            ]
        );
    }

    #[test]
    fn fence_inside_a_table_parks_the_pending_rows() {
        assert_eq!(
            scan("| A | B |\n```\ncode\n```\n| 1 | 2 |\ndone"),
            vec![
                Block::CodeLine {
                    text: "code".to_string()
                },
                Block::Table {
                    headers: vec!["A".to_string(), "B".to_string()],
                    rows: vec![vec!["1".to_string(), "2".to_string()]],
                },
                Block::Spacer,
                paragraph("done"),
            ]
        );
    }

    #[test]
    fn star_list_items_keep_their_marker() {
        assert_eq!(
            scan("* item"),
            vec![Block::ListItem {
                text: "* item".to_string()
            }]
        );
    }

    #[test]
    fn list_items_keep_their_glyph_after_the_bullet() {
        assert_eq!(
            scan("- ✅ Done"),
            vec![Block::ListItem {
                text: "\u{2022} ✅ Done".to_string()
            }]
        );
    }

    #[test]
    fn empty_cleaned_paragraphs_emit_nothing() {
        assert_eq!(scan("``"), vec![]);
    }

    #[test]
    fn trailing_newline_yields_a_trailing_spacer() {
        assert_eq!(scan("a\n"), vec![paragraph("a"), Block::Spacer]);
    }
}
