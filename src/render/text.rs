//! Plain text rendering of composed documents, used for terminal
//! preview and screen display.

use crate::model::ComposedDocument;

/// Convert a composed document to plain text.
///
/// Titles are kept on their own lines, numbered paragraphs verbatim,
/// and half-line gap directives become blank lines.
pub fn to_text(doc: &ComposedDocument) -> String {
    let mut out = String::new();
    for section in &doc.sections {
        if !out.is_empty() {
            out.push('\n');
        }
        for line in section.title_lines() {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        for paragraph in &section.paragraphs {
            out.push_str(paragraph);
            out.push('\n');
        }
    }
    out.trim_end().to_string()
}
