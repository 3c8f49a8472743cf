//! # akta
//!
//! Investment-contract document generation for Rust.
//!
//! This library composes Indonesian cooperative plant-investment
//! contracts from structured data and renders them as paginated PDF
//! documents, plain-text previews, or JSON for interactive front ends.
//!
//! ## Quick Start
//!
//! ```no_run
//! use akta::{generate_pdf, ContractData, RenderOptions};
//!
//! fn main() -> akta::Result<()> {
//!     let data = std::fs::read_to_string("contract.json")?;
//!     let contract: ContractData = serde_json::from_str(&data)?;
//!
//!     let pdf = generate_pdf(&contract, &RenderOptions::default())?;
//!     std::fs::write("contract.pdf", pdf)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Measured layout**: word wrap, hanging indents, and pagination
//!   driven by real Helvetica metrics
//! - **Inline markup**: legal terms, amounts, and category tokens
//!   styled by an ordered rule list with anchor conditions
//! - **Amount words**: Indonesian numeral-to-words for Rupiah amounts
//! - **Recoverable assets**: logo and signature failures degrade to
//!   placeholders instead of aborting the document

pub mod assets;
pub mod error;
pub mod format;
pub mod layout;
pub mod markup;
pub mod model;
pub mod render;
pub mod template;

// Re-export commonly used types
pub use assets::{AssetStore, ImageAsset, ImageFormat};
pub use error::{Error, Result};
pub use format::{rupiah_contract, rupiah_screen, terbilang};
pub use layout::{PageMetrics, Paginator, TextSurface};
pub use markup::MarkupResolver;
pub use model::{
    Category, ComposedDocument, ContractData, Investment, Investor, PaymentType, Section, Span,
    SpanStyle,
};
pub use render::{
    ContractRenderer, JsonFormat, RenderOptions, SignaturePolicy,
};
pub use template::TemplateKind;

/// Compose the section blocks for a contract without rendering them.
///
/// # Example
///
/// ```
/// use akta::{compose, ContractData, TemplateKind};
///
/// # let contract: ContractData = serde_json::from_str(r#"{
/// #   "contract_number": "1", "contract_date": null,
/// #   "investor": {},
/// #   "investment": {"total_amount": 1000, "product_name": "Alpukat",
/// #                  "payment_type": "full"}
/// # }"#).unwrap();
/// let doc = compose(&contract, TemplateKind::LumpSum);
/// assert!(!doc.is_empty());
/// ```
pub fn compose(contract: &ContractData, template: TemplateKind) -> ComposedDocument {
    template.compose(contract)
}

/// Generate the contract PDF and return its bytes.
pub fn generate_pdf(contract: &ContractData, options: &RenderOptions) -> Result<Vec<u8>> {
    ContractRenderer::new(options.clone()).render_pdf(contract)
}

/// Generate the contract PDF and save it to a path.
pub fn save_pdf<P: AsRef<std::path::Path>>(
    contract: &ContractData,
    options: &RenderOptions,
    path: P,
) -> Result<()> {
    let bytes = generate_pdf(contract, options)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Plain-text preview of the composed contract.
pub fn preview_text(contract: &ContractData, template: TemplateKind) -> String {
    render::to_text(&compose(contract, template))
}

/// Builder for composing and rendering contract documents.
///
/// # Example
///
/// ```no_run
/// use akta::{Akta, ContractData, TemplateKind};
///
/// # let contract: ContractData = todo!();
/// let result = Akta::new()
///     .with_template(TemplateKind::Installment)
///     .require_signature()
///     .generate(&contract)?;
/// result.save("contract.pdf")?;
/// # Ok::<(), akta::Error>(())
/// ```
pub struct Akta {
    options: RenderOptions,
}

impl Akta {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Select the article template.
    pub fn with_template(mut self, template: TemplateKind) -> Self {
        self.options = self.options.with_template(template);
        self
    }

    /// Override the page metrics.
    pub fn with_metrics(mut self, metrics: PageMetrics) -> Self {
        self.options = self.options.with_metrics(metrics);
        self
    }

    /// Set the body font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.options = self.options.with_font_size(size);
        self
    }

    /// Provide the header logo image.
    pub fn with_logo(mut self, logo: ImageAsset) -> Self {
        self.options = self.options.with_logo(logo);
        self
    }

    /// Provide the investor signature image.
    pub fn with_signature(mut self, signature: ImageAsset) -> Self {
        self.options = self.options.with_signature(signature);
        self
    }

    /// Provide the signature as a base64 data URL.
    pub fn with_signature_data_url(mut self, url: &str) -> Self {
        self.options = self.options.with_signature_data_url(url);
        self
    }

    /// Refuse to generate without a usable signature.
    pub fn require_signature(mut self) -> Self {
        self.options = self.options.require_signature();
        self
    }

    /// Compose the document and return a result wrapper.
    pub fn generate(self, contract: &ContractData) -> Result<AktaResult> {
        let renderer = ContractRenderer::new(self.options.clone());
        let document = renderer.compose(contract);
        let pdf = renderer.render_pdf(contract)?;
        Ok(AktaResult { document, pdf })
    }
}

impl Default for Akta {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of generating a contract document.
#[derive(Debug)]
pub struct AktaResult {
    /// The composed section structure
    document: ComposedDocument,
    /// The rendered PDF bytes
    pdf: Vec<u8>,
}

impl AktaResult {
    /// The rendered PDF bytes.
    pub fn pdf_bytes(&self) -> &[u8] {
        &self.pdf
    }

    /// Save the PDF to a path.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.pdf)?;
        Ok(())
    }

    /// Suggested file name for the artifact.
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.document.meta.file_stem)
    }

    /// Plain-text preview of the document.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// JSON export of the composed document.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// The composed document.
    pub fn document(&self) -> &ComposedDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Investment, Investor};

    fn contract() -> ContractData {
        ContractData {
            contract_number: "010/SPK-INV/VIII/2026".to_string(),
            contract_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 7),
            investor: Investor {
                name: Some("Siti Aminah".to_string()),
                ..Default::default()
            },
            investment: Investment {
                total_amount: 12_500_000,
                product_name: "Kelengkeng Super".to_string(),
                payment_type: PaymentType::Installment,
            },
        }
    }

    #[test]
    fn test_builder_generate() {
        let result = Akta::new()
            .with_template(TemplateKind::Installment)
            .generate(&contract())
            .unwrap();

        assert!(result.pdf_bytes().starts_with(b"%PDF-"));
        assert_eq!(result.document().meta.template, "installment");
        assert!(result.file_name().ends_with(".pdf"));
    }

    #[test]
    fn test_preview_text_contains_amount() {
        let text = preview_text(&contract(), TemplateKind::LumpSum);
        assert!(text.contains("Rp12.500.000,-"));
        assert!(text.contains("dua belas juta lima ratus ribu rupiah"));
    }

    #[test]
    fn test_builder_required_signature_fails_without_one() {
        let err = Akta::new()
            .require_signature()
            .generate(&contract())
            .unwrap_err();
        assert!(matches!(err, Error::SignatureRequired));
    }
}
