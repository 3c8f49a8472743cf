//! The rendering-surface seam.
//!
//! Layout is written against [`TextSurface`] so the word-wrap and
//! pagination logic can be exercised with a measuring mock in tests and
//! bound to a real PDF writer in production.

use crate::assets::ImageAsset;
use crate::model::SpanStyle;

/// An explicit layout cursor, owned by the paginator and passed down by
/// reference; never shared across concurrent calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// Horizontal position in points from the left page edge
    pub x: f32,
    /// Vertical position in points from the top page edge
    pub y: f32,
}

impl Cursor {
    /// Create a cursor at a position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Drawing and measurement primitives for one output page stream.
///
/// Coordinates are points, y growing downward from the top edge.
pub trait TextSurface {
    /// Rendered width of `text` in the given style.
    fn measure_width(&self, text: &str, style: SpanStyle) -> f32;

    /// Draw `text` with its left edge at `x` and baseline row `y`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: SpanStyle);

    /// Finish the current page and start a new one.
    fn new_page(&mut self);

    /// Page width in points.
    fn page_width(&self) -> f32;

    /// Page height in points.
    fn page_height(&self) -> f32;

    /// Place an image with its top-left corner at `(x, y)`. Returns
    /// `false` when the surface cannot place the image, in which case
    /// the caller substitutes a placeholder.
    fn place_image(&mut self, image: &ImageAsset, x: f32, y: f32, w: f32, h: f32) -> bool {
        let _ = (image, x, y, w, h);
        false
    }

    /// Greedy-wrap plain text into the column and draw it, one line per
    /// draw call. Returns the vertical extent consumed.
    ///
    /// This is the fast path for unstyled paragraphs; its output must
    /// be visually equivalent to per-word placement in normal style.
    fn draw_wrapped(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: f32,
        line_height: f32,
    ) -> f32 {
        let style = SpanStyle::normal();
        let mut lines = 0u32;
        let mut line = String::new();
        for word in text.split(' ') {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate_width =
                self.measure_width(&line, style) + self.measure_width(" ", style) + self.measure_width(word, style);
            if candidate_width > max_width {
                self.draw_text(&line, x, y + lines as f32 * line_height, style);
                lines += 1;
                line.clear();
                line.push_str(word);
            } else {
                line.push(' ');
                line.push_str(word);
            }
        }
        if !line.is_empty() || lines == 0 {
            self.draw_text(&line, x, y + lines as f32 * line_height, style);
            lines += 1;
        }
        lines as f32 * line_height
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// One recorded draw call.
    #[derive(Debug, Clone)]
    pub struct DrawCall {
        pub text: String,
        pub x: f32,
        pub y: f32,
        pub style: SpanStyle,
        pub page: u32,
    }

    /// Fixed-metric surface that records every placement.
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
        pub pages: u32,
        pub char_width: f32,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self {
                calls: Vec::new(),
                pages: 1,
                char_width: 6.0,
            }
        }

        pub fn text_on_page(&self, page: u32) -> String {
            self.calls
                .iter()
                .filter(|c| c.page == page)
                .map(|c| c.text.as_str())
                .collect()
        }
    }

    impl TextSurface for RecordingSurface {
        fn measure_width(&self, text: &str, style: SpanStyle) -> f32 {
            // Bold glyphs run a little wider, like the real fonts.
            let per_char = if style.bold {
                self.char_width * 1.1
            } else {
                self.char_width
            };
            text.chars().count() as f32 * per_char
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, style: SpanStyle) {
            self.calls.push(DrawCall {
                text: text.to_string(),
                x,
                y,
                style,
                page: self.pages,
            });
        }

        fn new_page(&mut self) {
            self.pages += 1;
        }

        fn page_width(&self) -> f32 {
            595.0
        }

        fn page_height(&self) -> f32 {
            842.0
        }
    }
}
