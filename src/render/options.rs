//! Rendering options and configuration.

use crate::assets::{AssetStore, ImageAsset};
use crate::layout::PageMetrics;
use crate::template::TemplateKind;

/// Asset-store key for the header logo.
pub const LOGO_ASSET: &str = "logo";
/// Asset-store key for the investor signature.
pub const SIGNATURE_ASSET: &str = "signature";

/// Whether generation may proceed without a usable signature image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignaturePolicy {
    /// Missing or undecodable signatures render as a blank line.
    #[default]
    Optional,
    /// Refuse to generate before layout begins.
    Required,
}

/// Options for rendering a contract document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Which legal-article template to compose
    pub template: TemplateKind,

    /// Page geometry and break thresholds
    pub metrics: PageMetrics,

    /// Body font size in points
    pub font_size: f32,

    /// Signature requirement policy
    pub signature_policy: SignaturePolicy,

    /// Pre-resolved image assets (logo, signature)
    pub assets: AssetStore,
}

impl RenderOptions {
    /// Create render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the article template.
    pub fn with_template(mut self, template: TemplateKind) -> Self {
        self.template = template;
        self
    }

    /// Override the page metrics.
    pub fn with_metrics(mut self, metrics: PageMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the body font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Provide the header logo image.
    pub fn with_logo(mut self, logo: ImageAsset) -> Self {
        self.assets.insert(LOGO_ASSET, logo);
        self
    }

    /// Provide the investor signature image.
    pub fn with_signature(mut self, signature: ImageAsset) -> Self {
        self.assets.insert(SIGNATURE_ASSET, signature);
        self
    }

    /// Provide the signature as a data URL; an undecodable payload is
    /// logged and left unset so generation falls back per policy.
    pub fn with_signature_data_url(self, url: &str) -> Self {
        match ImageAsset::from_data_url(url) {
            Ok(asset) => self.with_signature(asset),
            Err(e) => {
                log::warn!("signature data URL rejected: {}", e);
                self
            }
        }
    }

    /// Require a usable signature before generation starts.
    pub fn require_signature(mut self) -> Self {
        self.signature_policy = SignaturePolicy::Required;
        self
    }

    /// The signature asset, if one was provided and decoded.
    pub fn signature(&self) -> Option<&ImageAsset> {
        self.assets.get(SIGNATURE_ASSET)
    }

    /// The logo asset, if one was provided and decoded.
    pub fn logo(&self) -> Option<&ImageAsset> {
        self.assets.get(LOGO_ASSET)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            template: TemplateKind::LumpSum,
            metrics: PageMetrics::default(),
            font_size: 11.0,
            signature_policy: SignaturePolicy::Optional,
            assets: AssetStore::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new()
            .with_template(TemplateKind::Installment)
            .with_font_size(10.0)
            .require_signature();

        assert_eq!(options.template, TemplateKind::Installment);
        assert_eq!(options.font_size, 10.0);
        assert_eq!(options.signature_policy, SignaturePolicy::Required);
    }

    #[test]
    fn test_bad_signature_url_leaves_unset() {
        let options = RenderOptions::new().with_signature_data_url("not-a-data-url");
        assert!(options.signature().is_none());
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.signature_policy, SignaturePolicy::Optional);
        assert!(options.logo().is_none());
    }
}
