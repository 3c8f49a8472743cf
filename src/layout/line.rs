//! Word-wrapping renderer for styled span sequences.

use crate::model::Span;

use super::surface::TextSurface;

/// Lay out spans left-to-right from `(origin_x, start_y)`, wrapping at
/// `origin_x + max_width`, switching style per span. Returns the total
/// vertical extent consumed.
///
/// Words keep a single trailing space except the last word of each
/// span, so inter-word and inter-span gaps survive the split. A word is
/// only pushed to the next line when the current line already holds
/// something, which guarantees forward progress on overlong words.
pub fn render_spans(
    surface: &mut dyn TextSurface,
    spans: &[Span],
    origin_x: f32,
    start_y: f32,
    max_width: f32,
    line_height: f32,
) -> f32 {
    // A single plain span takes the surface's built-in wrap.
    if let [span] = spans {
        if !span.style.has_styling() {
            return surface.draw_wrapped(&span.text, origin_x, start_y, max_width, line_height);
        }
    }
    if spans.is_empty() {
        return line_height;
    }

    let mut x = origin_x;
    let mut y = start_y;

    for span in spans {
        let words: Vec<&str> = span.text.split(' ').collect();
        let last = words.len() - 1;
        for (i, word) in words.iter().enumerate() {
            let chunk = if i < last {
                format!("{} ", word)
            } else {
                (*word).to_string()
            };
            if chunk.is_empty() {
                continue;
            }
            let width = surface.measure_width(&chunk, span.style);
            if x + width > origin_x + max_width && x > origin_x {
                y += line_height;
                x = origin_x;
            }
            surface.draw_text(&chunk, x, y, span.style);
            x += width;
        }
    }

    (y - start_y) + line_height
}
