//! Section blocks and the composed document.

use serde::{Deserialize, Serialize};

/// One legal-article block: a title plus ordered paragraphs.
///
/// A paragraph equal to the empty string is a vertical-spacing
/// directive (half a line), not literal text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title; may contain `\n` for multi-line titles
    pub title: String,

    /// Ordered paragraph texts
    pub paragraphs: Vec<String>,
}

impl Section {
    /// Create a section with a title and no paragraphs yet.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
        }
    }

    /// Append a paragraph.
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    /// Append a half-line vertical gap.
    pub fn gap(mut self) -> Self {
        self.paragraphs.push(String::new());
        self
    }

    /// Title lines, split on `\n`.
    pub fn title_lines(&self) -> impl Iterator<Item = &str> {
        self.title.split('\n')
    }

    /// Plain text of the section (title + paragraphs).
    pub fn plain_text(&self) -> String {
        let mut out = self.title.clone();
        for para in &self.paragraphs {
            out.push('\n');
            out.push_str(para);
        }
        out
    }
}

/// Identifying metadata for a composed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Contract number the document was composed from
    pub contract_number: String,

    /// Template identifier, e.g. "lump-sum"
    pub template: String,

    /// File-name stem for saved artifacts
    pub file_stem: String,
}

/// The assembler's output: ordered sections ready for layout,
/// serializable for interactive preview front ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposedDocument {
    /// Document metadata
    pub meta: DocumentMeta,

    /// Ordered section blocks
    pub sections: Vec<Section>,
}

impl ComposedDocument {
    /// Create an empty composed document.
    pub fn new(meta: DocumentMeta) -> Self {
        Self {
            meta,
            sections: Vec::new(),
        }
    }

    /// Append a section.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Plain text of the whole document.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
