//! Glyph widths for the base-14 Helvetica family.
//!
//! Widths are in 1/1000 of the font size, straight from the Adobe AFM
//! files, covering the printable ASCII range the contract text uses.
//! Oblique variants share the upright widths.

use crate::model::SpanStyle;

/// Helvetica, characters 0x20..=0x7E.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20-0x2F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30-0x3F
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40-0x4F
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50-0x5F
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60-0x6F
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70-0x7E
];

/// Helvetica-Bold, characters 0x20..=0x7E.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20-0x2F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30-0x3F
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40-0x4F
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50-0x5F
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60-0x6F
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70-0x7E
];

/// Width of one character in 1/1000 font-size units.
///
/// Characters outside the table fall back to the digit width, which
/// keeps measurement monotone for the occasional stray glyph.
fn char_width(c: char, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        556
    }
}

/// Rendered width of `text` at `font_size` in the given style.
pub fn text_width(text: &str, style: SpanStyle, font_size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| char_width(c, style.bold) as u32)
        .sum();
    units as f32 * font_size / 1000.0
}

/// PostScript font name for a span style.
pub fn font_name(style: SpanStyle) -> &'static str {
    match (style.bold, style.italic) {
        (false, false) => "Helvetica",
        (true, false) => "Helvetica-Bold",
        (false, true) => "Helvetica-Oblique",
        (true, true) => "Helvetica-BoldOblique",
    }
}

/// Resource key for a span style, shared by every page.
pub fn font_key(style: SpanStyle) -> &'static str {
    match (style.bold, style.italic) {
        (false, false) => "F1",
        (true, false) => "F2",
        (false, true) => "F3",
        (true, true) => "F4",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_width() {
        let w = text_width(" ", SpanStyle::normal(), 10.0);
        assert!((w - 2.78).abs() < 0.001);
    }

    #[test]
    fn test_bold_wider_than_normal() {
        let normal = text_width("Perjanjian", SpanStyle::normal(), 11.0);
        let bold = text_width("Perjanjian", SpanStyle::bold(), 11.0);
        assert!(bold > normal);
    }

    #[test]
    fn test_oblique_shares_upright_widths() {
        let upright = text_width("rupiah", SpanStyle::normal(), 11.0);
        let oblique = text_width("rupiah", SpanStyle::italic(), 11.0);
        assert_eq!(upright, oblique);
    }

    #[test]
    fn test_font_names() {
        assert_eq!(font_name(SpanStyle::normal()), "Helvetica");
        assert_eq!(font_name(SpanStyle::bold()), "Helvetica-Bold");
        assert_eq!(font_name(SpanStyle::italic()), "Helvetica-Oblique");
        assert_eq!(
            font_name(SpanStyle {
                bold: true,
                italic: true
            }),
            "Helvetica-BoldOblique"
        );
    }

    #[test]
    fn test_scaling_linear() {
        let small = text_width("abc", SpanStyle::normal(), 10.0);
        let large = text_width("abc", SpanStyle::normal(), 20.0);
        assert!((large - 2.0 * small).abs() < 0.001);
    }
}
