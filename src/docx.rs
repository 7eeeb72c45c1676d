use std::fs;
use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, RunFonts, SpecialIndentType, Start, Style, StyleType,
    Table, TableCell, TableRow,
};

use crate::block::{Block, StyledRun};
use crate::config::{Config, TextStyle};
use crate::error::Error;
use crate::table;

const BULLET_NUMBERING: usize = 1;

/// Accumulates parsed blocks into a DOCX document.
///
/// Styles are registered once at construction from the style
/// configuration; blocks are appended in input order and the finished
/// document is packed into a zip buffer or saved to disk.
pub struct DocxBuilder {
    docx: Docx,
    code: TextStyle,
}

impl DocxBuilder {
    pub fn new(config: &Config) -> Self {
        let styles = &config.styles;
        let docx = Docx::new()
            .add_style(paragraph_style("Title", "Title", &styles.title, true))
            .add_style(paragraph_style("Heading1", "Heading 1", &styles.heading1, true))
            .add_style(paragraph_style("Heading2", "Heading 2", &styles.heading2, true))
            .add_style(paragraph_style("Heading3", "Heading 3", &styles.heading3, true))
            .add_style(paragraph_style("Normal", "Normal", &styles.body, false));

        Self {
            docx: add_bullet_numbering(docx),
            code: styles.code.clone(),
        }
    }

    pub fn push(&mut self, block: &Block) {
        match block {
            Block::Heading { level, text } => self.heading(text, *level),
            Block::Paragraph {
                runs,
                centered,
                italic,
            } => self.paragraph(runs, *centered, *italic),
            Block::ListItem { text } => self.list_item(text),
            Block::CodeLine { text } => self.code_line(text),
            Block::Table { headers, rows } => self.table(headers, rows),
            Block::Spacer => self.spacer(),
        }
    }

    pub fn heading(&mut self, text: &str, level: u8) {
        let style = match level {
            0 => "Title",
            1 => "Heading1",
            2 => "Heading2",
            _ => "Heading3",
        };
        let para = Paragraph::new()
            .style(style)
            .add_run(Run::new().add_text(text));
        self.add_paragraph(para);
    }

    pub fn paragraph(&mut self, runs: &[StyledRun], centered: bool, italic: bool) {
        let mut para = Paragraph::new().style("Normal");
        if centered {
            para = para.align(AlignmentType::Center);
        }
        for styled in runs {
            if styled.text.is_empty() {
                continue;
            }
            let mut run = Run::new().add_text(styled.text.as_str());
            if styled.bold {
                run = run.bold();
            }
            if italic {
                run = run.italic();
            }
            para = para.add_run(run);
        }
        self.add_paragraph(para);
    }

    pub fn list_item(&mut self, text: &str) {
        let para = Paragraph::new()
            .style("Normal")
            .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0))
            .add_run(Run::new().add_text(text));
        self.add_paragraph(para);
    }

    pub fn code_line(&mut self, text: &str) {
        let run = Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&self.code.font))
            .size(half_points(self.code.size));
        self.add_paragraph(Paragraph::new().style("Normal").add_run(run));
    }

    /// Append a table: one bold header row, then one row per extracted
    /// body row, rendered with exactly the header's cell count. A table
    /// with no headers or no rows appends nothing.
    pub fn table(&mut self, headers: &[String], rows: &[Vec<String>]) {
        if headers.is_empty() || rows.is_empty() {
            return;
        }

        let mut table_rows = Vec::with_capacity(rows.len() + 1);
        let header_cells: Vec<TableCell> = headers
            .iter()
            .map(|cell| text_cell(Run::new().add_text(table::clean_header(cell)).bold()))
            .collect();
        table_rows.push(TableRow::new(header_cells));

        for row in rows {
            let cells: Vec<TableCell> = (0..headers.len())
                .map(|i| {
                    let text = row.get(i).map(|cell| table::clean_cell(cell)).unwrap_or_default();
                    text_cell(Run::new().add_text(text))
                })
                .collect();
            table_rows.push(TableRow::new(cells));
        }

        self.docx = std::mem::take(&mut self.docx).add_table(Table::new(table_rows));
    }

    pub fn spacer(&mut self) {
        self.add_paragraph(Paragraph::new().style("Normal"));
    }

    fn add_paragraph(&mut self, para: Paragraph) {
        self.docx = std::mem::take(&mut self.docx).add_paragraph(para);
    }

    /// Pack the document into an in-memory DOCX (zip) buffer.
    pub fn into_bytes(self) -> Result<Vec<u8>, Error> {
        let mut buffer = Vec::new();
        self.docx
            .build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| Error::Document(e.to_string()))?;
        Ok(buffer)
    }

    pub fn save(self, path: &Path) -> Result<(), Error> {
        let bytes = self.into_bytes()?;
        fs::write(path, bytes).map_err(|source| Error::DestinationWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Render parsed blocks into DOCX bytes.
pub fn render(blocks: &[Block], config: &Config) -> Result<Vec<u8>, Error> {
    let mut builder = DocxBuilder::new(config);
    for block in blocks {
        builder.push(block);
    }
    builder.into_bytes()
}

fn paragraph_style(id: &str, name: &str, text: &TextStyle, bold: bool) -> Style {
    let mut style = Style::new(id, StyleType::Paragraph)
        .name(name)
        .fonts(RunFonts::new().ascii(&text.font))
        .size(half_points(text.size));
    if bold {
        style = style.bold();
    }
    style
}

fn add_bullet_numbering(docx: Docx) -> Docx {
    let level = Level::new(
        0,
        Start::new(1),
        NumberFormat::new("bullet"),
        LevelText::new("\u{2022}"),
        LevelJc::new("left"),
    )
    .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None);

    docx.add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(level))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}

fn text_cell(run: Run) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}

fn half_points(points: u32) -> usize {
    (points * 2) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;

    fn bytes_for(blocks: &[Block]) -> Vec<u8> {
        render(blocks, &Config::default()).unwrap()
    }

    #[test]
    fn packs_a_zip_container() {
        let bytes = bytes_for(&[
            Block::Heading {
                level: 0,
                text: "Title".to_string(),
            },
            Block::Paragraph {
                runs: vec![StyledRun::plain("body")],
                centered: false,
                italic: false,
            },
            Block::Spacer,
        ]);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_table_is_a_no_op() {
        let with_empty = bytes_for(&[Block::Table {
            headers: vec![],
            rows: vec![],
        }]);
        let without = bytes_for(&[]);
        assert_eq!(with_empty.len(), without.len());
    }

    #[test]
    fn headerless_rows_are_also_skipped() {
        let blocks = [Block::Table {
            headers: vec!["A".to_string()],
            rows: vec![],
        }];
        // headers but no rows: still nothing appended
        assert!(!bytes_for(&blocks).is_empty());
    }

    #[test]
    fn tables_and_code_render() {
        let bytes = bytes_for(&[
            Block::Table {
                headers: vec!["**Name**".to_string(), "Status".to_string()],
                rows: vec![vec!["build".to_string(), "✅ green".to_string()]],
            },
            Block::Spacer,
            Block::CodeLine {
                text: "let x = 1;".to_string(),
            },
        ]);
        assert_eq!(&bytes[..2], b"PK");
    }
}
