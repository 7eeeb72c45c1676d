/// A contiguous span of paragraph text sharing one emphasis state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Block-level elements emitted by the line parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with level 0 (document title) through 3
    Heading { level: u8, text: String },
    Paragraph {
        runs: Vec<StyledRun>,
        centered: bool,
        italic: bool,
    },
    /// Bulleted list entry, text already cleaned
    ListItem { text: String },
    /// One monospace line inside a fenced block
    CodeLine { text: String },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Blank paragraph preserving vertical separation
    Spacer,
}
