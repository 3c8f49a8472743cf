//! The contract assembler: header, article sections, signature block.

use crate::error::{Error, Result};
use crate::layout::{Paginator, TextSurface};
use crate::markup::MarkupResolver;
use crate::model::{ComposedDocument, ContractData, SpanStyle};

use super::pdf::PdfSurface;
use super::{RenderOptions, SignaturePolicy, LOGO_ASSET, SIGNATURE_ASSET};

/// Width of the logo as drawn in the header.
const LOGO_WIDTH: f32 = 90.0;
/// Drawn size of the signature image.
const SIGNATURE_WIDTH: f32 = 120.0;
const SIGNATURE_HEIGHT: f32 = 60.0;
/// Vertical room the whole signature block needs.
const SIGNATURE_BLOCK_HEIGHT: f32 = 140.0;

/// Renders a contract into the final PDF artifact.
pub struct ContractRenderer {
    options: RenderOptions,
    resolver: MarkupResolver,
}

impl ContractRenderer {
    /// Create a renderer with the default contract markup rules.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            resolver: MarkupResolver::contract(),
        }
    }

    /// Compose the document without rendering it.
    pub fn compose(&self, contract: &ContractData) -> ComposedDocument {
        self.options.template.compose(contract)
    }

    /// Generate the PDF bytes for a contract.
    ///
    /// Asset problems are recovered locally with placeholders; only a
    /// missing signature under [`SignaturePolicy::Required`] or a PDF
    /// write failure aborts the call.
    pub fn render_pdf(&self, contract: &ContractData) -> Result<Vec<u8>> {
        if self.options.signature_policy == SignaturePolicy::Required
            && self.options.signature().map(|s| s.embeddable()) != Some(true)
        {
            return Err(Error::SignatureRequired);
        }

        let composed = self.compose(contract);
        let mut surface = PdfSurface::new(self.options.font_size);
        surface.set_title(format!("Surat Perjanjian {}", contract.contract_number));

        let start_y = self.draw_header(&mut surface);

        let mut paginator =
            Paginator::new(&mut surface, &self.resolver, self.options.metrics.clone())
                .start_below(start_y);
        paginator.render_sections(&composed.sections);
        self.draw_signature_block(&mut paginator, contract);
        paginator.finish();
        let pages = paginator.page();
        drop(paginator);

        log::debug!(
            "contract {} rendered on {} pages",
            contract.contract_number,
            pages
        );
        surface.finish()
    }

    /// Draw the logo header and return the first content row.
    ///
    /// A missing or unembeddable logo shrinks the header instead of
    /// failing the document.
    fn draw_header(&self, surface: &mut PdfSurface) -> f32 {
        let metrics = &self.options.metrics;
        match self.options.logo() {
            Some(logo) if logo.embeddable() => {
                let height = LOGO_WIDTH / logo.aspect();
                let x = (surface.page_width() - LOGO_WIDTH) / 2.0;
                if surface.place_image(logo, x, metrics.top_margin, LOGO_WIDTH, height) {
                    return metrics.top_margin + height + metrics.line_height;
                }
                log::warn!("logo {} could not be placed, shrinking header", LOGO_ASSET);
                metrics.top_margin
            }
            Some(_) => {
                log::warn!("logo {} is not embeddable, shrinking header", LOGO_ASSET);
                metrics.top_margin
            }
            None => metrics.top_margin,
        }
    }

    /// Draw the two signature columns; the investor column carries the
    /// signature image or a blank line when no usable image exists.
    fn draw_signature_block(&self, paginator: &mut Paginator<'_>, contract: &ContractData) {
        paginator.ensure_space(SIGNATURE_BLOCK_HEIGHT);
        let metrics = paginator.metrics().clone();
        let line_height = metrics.line_height;
        let y = paginator.cursor_y();

        let page_width = paginator.surface_mut().page_width();
        let left_x = metrics.margin_x;
        let right_x = page_width / 2.0 + metrics.margin_x / 2.0;

        let surface = paginator.surface_mut();
        surface.draw_text("PIHAK PERTAMA", left_x, y, SpanStyle::bold());
        surface.draw_text("PIHAK KEDUA", right_x, y, SpanStyle::bold());

        let image_y = y + line_height;
        let name_y = image_y + SIGNATURE_HEIGHT + line_height;

        let placed = match self.options.signature() {
            Some(signature) => {
                let ok = surface.place_image(
                    signature,
                    right_x,
                    image_y,
                    SIGNATURE_WIDTH,
                    SIGNATURE_HEIGHT,
                );
                if !ok {
                    log::warn!("{} image could not be placed, using blank line", SIGNATURE_ASSET);
                }
                ok
            }
            None => false,
        };
        if !placed {
            surface.draw_text(
                "(_______________________)",
                right_x,
                name_y - line_height,
                SpanStyle::normal(),
            );
        }

        surface.draw_text(
            "Koperasi Tani Maju Bersama",
            left_x,
            name_y,
            SpanStyle::normal(),
        );
        surface.draw_text(
            contract.investor.name.as_deref().unwrap_or(""),
            right_x,
            name_y,
            SpanStyle::normal(),
        );

        paginator.advance(name_y - y + line_height);
    }
}
