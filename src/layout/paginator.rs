//! Page-level layout: vertical cursor, break thresholds, footers.

use crate::markup::MarkupResolver;
use crate::model::{Section, SpanStyle};

use super::paragraph::render_paragraph;
use super::surface::{Cursor, TextSurface};

/// Page geometry and break thresholds, in points (A4 defaults).
///
/// The two break limits are distinct: a paragraph inside a block breaks
/// at `paragraph_break_limit` (a wider bottom margin), while a new
/// block's title is only pushed to the next page when it would land
/// past `section_break_limit`, closer to the page bottom.
#[derive(Debug, Clone)]
pub struct PageMetrics {
    /// Left/right page margin
    pub margin_x: f32,
    /// First baseline row on a fresh page
    pub top_margin: f32,
    /// Baseline-to-baseline distance
    pub line_height: f32,
    /// Mid-block limit: break before a paragraph once the cursor passes this
    pub paragraph_break_limit: f32,
    /// Block-start limit: break when title bottom would pass this
    pub section_break_limit: f32,
    /// Baseline row of the page-number footer
    pub footer_y: f32,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            margin_x: 57.0,
            top_margin: 57.0,
            line_height: 16.0,
            paragraph_break_limit: 770.0,
            section_break_limit: 800.0,
            footer_y: 812.0,
        }
    }
}

impl PageMetrics {
    /// Usable column width for a given page width.
    pub fn content_width(&self, page_width: f32) -> f32 {
        page_width - 2.0 * self.margin_x
    }
}

/// Walks section blocks down the page, inserting breaks and footers.
///
/// Owns the only cursor of the generation pass; one paginator serves
/// exactly one synchronous render call.
pub struct Paginator<'a> {
    surface: &'a mut dyn TextSurface,
    resolver: &'a MarkupResolver,
    metrics: PageMetrics,
    cursor: Cursor,
    page: u32,
}

impl<'a> Paginator<'a> {
    /// Create a paginator starting at the top margin of page 1.
    pub fn new(
        surface: &'a mut dyn TextSurface,
        resolver: &'a MarkupResolver,
        metrics: PageMetrics,
    ) -> Self {
        let cursor = Cursor::new(metrics.margin_x, metrics.top_margin);
        Self {
            surface,
            resolver,
            metrics,
            cursor,
            page: 1,
        }
    }

    /// Move the start position below an already-drawn header.
    pub fn start_below(mut self, y: f32) -> Self {
        self.cursor.y = y;
        self
    }

    /// 1-based number of the page currently being drawn.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Current vertical position.
    pub fn cursor_y(&self) -> f32 {
        self.cursor.y
    }

    /// Render all sections and emit the final page footer.
    pub fn render(&mut self, sections: &[Section]) {
        self.render_sections(sections);
        self.finish();
    }

    /// Render sections without the final footer, for callers that
    /// append trailing content (signature block) before finishing.
    pub fn render_sections(&mut self, sections: &[Section]) {
        for section in sections {
            self.render_section(section);
        }
        log::debug!("paginated {} sections onto {} pages", sections.len(), self.page);
    }

    /// Emit the footer of the page currently being drawn. Call exactly
    /// once, after all content.
    pub fn finish(&mut self) {
        self.draw_footer();
    }

    /// Break to a new page unless `height` more points fit above the
    /// mid-block limit.
    pub fn ensure_space(&mut self, height: f32) {
        if self.cursor.y + height > self.metrics.paragraph_break_limit {
            self.break_page();
        }
    }

    /// Advance the cursor down by `dy`.
    pub fn advance(&mut self, dy: f32) {
        self.cursor.y += dy;
    }

    /// The surface being drawn to, for trailing content placed by the
    /// caller at the paginator's cursor.
    pub fn surface_mut(&mut self) -> &mut dyn TextSurface {
        &mut *self.surface
    }

    /// The page metrics in effect.
    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    fn render_section(&mut self, section: &Section) {
        let title_lines: Vec<&str> = section.title_lines().collect();
        let title_height = title_lines.len() as f32 * self.metrics.line_height;

        if self.cursor.y + title_height > self.metrics.section_break_limit {
            self.break_page();
        }

        for line in &title_lines {
            let width = self.surface.measure_width(line, SpanStyle::bold());
            let x = (self.surface.page_width() - width) / 2.0;
            self.surface.draw_text(line, x, self.cursor.y, SpanStyle::bold());
            self.cursor.y += self.metrics.line_height;
        }
        self.cursor.y += self.metrics.line_height / 2.0;

        let content_width = self.metrics.content_width(self.surface.page_width());
        for paragraph in &section.paragraphs {
            if paragraph.is_empty() {
                self.cursor.y += self.metrics.line_height / 2.0;
                continue;
            }
            if self.cursor.y > self.metrics.paragraph_break_limit {
                self.break_page();
            }
            let used = render_paragraph(
                self.surface,
                self.resolver,
                paragraph,
                self.metrics.margin_x,
                self.cursor.y,
                content_width,
                self.metrics.line_height,
            );
            self.cursor.y += used;
        }

        self.cursor.y += self.metrics.line_height;
    }

    fn break_page(&mut self) {
        self.draw_footer();
        self.surface.new_page();
        self.page += 1;
        self.cursor = Cursor::new(self.metrics.margin_x, self.metrics.top_margin);
    }

    fn draw_footer(&mut self) {
        let label = format!("- {} -", self.page);
        let width = self.surface.measure_width(&label, SpanStyle::normal());
        let x = (self.surface.page_width() - width) / 2.0;
        self.surface
            .draw_text(&label, x, self.metrics.footer_y, SpanStyle::normal());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::surface::testing::RecordingSurface;
    use crate::model::Section;

    fn long_section(title: &str, paragraphs: usize) -> Section {
        let mut section = Section::new(title);
        for i in 0..paragraphs {
            section = section.paragraph(format!(
                "{}. kalimat panjang yang diulang untuk mengisi halaman dengan teks berjalan",
                i + 1
            ));
        }
        section
    }

    #[test]
    fn test_single_page_has_footer() {
        let mut surface = RecordingSurface::new();
        let resolver = MarkupResolver::empty();
        let mut paginator = Paginator::new(&mut surface, &resolver, PageMetrics::default());
        paginator.render(&[Section::new("JUDUL").paragraph("satu kalimat saja")]);

        assert_eq!(surface.pages, 1);
        assert!(surface.text_on_page(1).contains("- 1 -"));
    }

    #[test]
    fn test_overflow_creates_numbered_pages() {
        let mut surface = RecordingSurface::new();
        let resolver = MarkupResolver::empty();
        let sections: Vec<Section> = (1..=8)
            .map(|i| long_section(&format!("PASAL {}", i), 12))
            .collect();
        let mut paginator = Paginator::new(&mut surface, &resolver, PageMetrics::default());
        paginator.render(&sections);

        assert!(surface.pages > 1, "content must overflow one page");
        for page in 1..=surface.pages {
            assert!(
                surface.text_on_page(page).contains(&format!("- {} -", page)),
                "page {} missing its footer",
                page
            );
        }
    }

    #[test]
    fn test_title_centered() {
        let mut surface = RecordingSurface::new();
        let resolver = MarkupResolver::empty();
        let mut paginator = Paginator::new(&mut surface, &resolver, PageMetrics::default());
        paginator.render(&[Section::new("PASAL 1").paragraph("isi")]);

        let title = surface.calls.iter().find(|c| c.text == "PASAL 1").unwrap();
        let width = surface.measure_width("PASAL 1", SpanStyle::bold());
        assert!((title.x - (595.0 - width) / 2.0).abs() < 0.01);
        assert!(title.style.bold);
    }

    #[test]
    fn test_empty_paragraph_is_half_line_gap() {
        let mut surface = RecordingSurface::new();
        let resolver = MarkupResolver::empty();
        let metrics = PageMetrics::default();
        let mut paginator = Paginator::new(&mut surface, &resolver, metrics.clone());
        paginator.render(&[Section::new("T").paragraph("a").gap().paragraph("b")]);

        let a = surface.calls.iter().find(|c| c.text == "a").unwrap();
        let b = surface.calls.iter().find(|c| c.text == "b").unwrap();
        assert_eq!(b.y - a.y, metrics.line_height * 1.5);
    }

    #[test]
    fn test_section_break_keeps_title_with_body() {
        let mut surface = RecordingSurface::new();
        let resolver = MarkupResolver::empty();
        let metrics = PageMetrics::default();
        let mut paginator = Paginator::new(&mut surface, &resolver, metrics.clone());
        // Fill page one close to the bottom, then start a new section.
        let filler = long_section("PASAL 1", 40);
        let tail = Section::new("PASAL 2").paragraph("isi pasal dua");
        paginator.render(&[filler, tail]);

        let title = surface.calls.iter().find(|c| c.text == "PASAL 2").unwrap();
        let body = surface.calls.iter().find(|c| c.text.contains("isi pasal dua")).unwrap();
        assert_eq!(title.page, body.page, "title must not be orphaned from body");
        assert!(title.y + metrics.line_height <= metrics.section_break_limit);
    }
}
