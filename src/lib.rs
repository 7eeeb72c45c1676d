mod block;
mod config;
mod docx;
mod error;
mod inline;
mod parser;
mod table;

pub use block::{Block, StyledRun};
pub use config::Config;
pub use docx::DocxBuilder;
pub use error::Error;

use std::fs;
use std::io;
use std::path::Path;

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown, None)
}

/// Parse markdown text into a vector of blocks with custom config.
pub fn parse_with_config(markdown: &str, config: &Config) -> Vec<Block> {
    parser::parse(markdown, config.document.title_phrase.as_deref())
}

/// Convert markdown to DOCX bytes using default config.
pub fn markdown_to_docx(markdown: &str) -> Result<Vec<u8>, Error> {
    markdown_to_docx_with_config(markdown, &Config::default())
}

/// Convert markdown to DOCX bytes with custom config.
pub fn markdown_to_docx_with_config(markdown: &str, config: &Config) -> Result<Vec<u8>, Error> {
    let blocks = parse_with_config(markdown, config);
    docx::render(&blocks, config)
}

/// Convert one markdown file into a DOCX file.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<(), Error> {
    let markdown = fs::read_to_string(input).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::SourceNotFound {
            path: input.to_path_buf(),
        },
        _ => Error::SourceRead {
            path: input.to_path_buf(),
            source,
        },
    })?;

    let blocks = parse_with_config(&markdown, config);
    let mut builder = DocxBuilder::new(config);
    for block in &blocks {
        builder.push(block);
    }
    builder.save(output)
}
