//! Numbered-paragraph rendering with hanging indent.

use crate::markup::MarkupResolver;
use crate::model::SpanStyle;

use super::line::render_spans;
use super::surface::TextSurface;

/// Render one paragraph, detecting a leading `N. ` ordinal marker.
///
/// Without a marker the whole paragraph flows through the line renderer
/// at full width. With one, the marker is drawn unstyled at `x` and the
/// remainder flows at `x + marker_width`, so continuation lines align
/// under the first word, not under the marker. Returns the vertical
/// extent consumed.
pub fn render_paragraph(
    surface: &mut dyn TextSurface,
    resolver: &MarkupResolver,
    text: &str,
    x: f32,
    y: f32,
    max_width: f32,
    line_height: f32,
) -> f32 {
    match ordinal_marker(text) {
        None => {
            let spans = resolver.resolve(text);
            render_spans(surface, &spans, x, y, max_width, line_height)
        }
        Some(marker_len) => {
            let (marker, rest) = text.split_at(marker_len);
            let marker_width = surface.measure_width(marker, SpanStyle::normal());
            surface.draw_text(marker, x, y, SpanStyle::normal());
            let spans = resolver.resolve(rest);
            render_spans(
                surface,
                &spans,
                x + marker_width,
                y,
                max_width - marker_width,
                line_height,
            )
        }
    }
}

/// Byte length of a leading `N. ` marker (ASCII digits, period, one
/// space), including the space, or `None`.
fn ordinal_marker(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    if bytes.get(digits) == Some(&b'.') && bytes.get(digits + 1) == Some(&b' ') {
        Some(digits + 2)
    } else {
        None
    }
}
