use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub styles: StyleConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DocumentConfig {
    /// Phrase identifying the document title: the top-level heading whose
    /// cleaned text contains it is promoted to the title style.
    pub title_phrase: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub title: TextStyle,
    pub heading1: TextStyle,
    pub heading2: TextStyle,
    pub heading3: TextStyle,
    pub body: TextStyle,
    pub code: TextStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: TextStyle::new("Arial", 20),
            heading1: TextStyle::new("Arial", 16),
            heading2: TextStyle::new("Arial", 14),
            heading3: TextStyle::new("Arial", 12),
            body: TextStyle::new("Arial", 11),
            code: TextStyle::new("Courier New", 9),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font: String,
    /// Point size
    pub size: u32,
}

impl TextStyle {
    fn new(font: &str, size: u32) -> Self {
        Self {
            font: font.to_string(),
            size,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new("Arial", 11)
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
