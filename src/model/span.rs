//! Styled span types, the atomic unit of the line renderer.

use serde::{Deserialize, Serialize};

/// A contiguous run of text sharing one visual style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// The text content
    pub text: String,

    /// Visual style of the run
    pub style: SpanStyle,
}

impl Span {
    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::normal(),
        }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::bold(),
        }
    }

    /// Create an italic span.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::italic(),
        }
    }

    /// Check if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Visual style of a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpanStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl SpanStyle {
    /// The default (normal) style.
    pub fn normal() -> Self {
        Self::default()
    }

    /// Bold style.
    pub fn bold() -> Self {
        Self {
            bold: true,
            italic: false,
        }
    }

    /// Italic style.
    pub fn italic() -> Self {
        Self {
            bold: false,
            italic: true,
        }
    }

    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(!Span::plain("abc").style.has_styling());
        assert!(Span::bold("abc").style.bold);
        assert!(Span::italic("abc").style.italic);
    }

    #[test]
    fn test_is_empty() {
        assert!(Span::plain("").is_empty());
        assert!(!Span::plain(" ").is_empty());
    }
}
