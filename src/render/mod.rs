//! Rendering module: PDF emission, plain-text preview, and JSON export
//! of composed contract documents.

mod contract;
mod json;
mod options;
pub mod pdf;
mod text;

pub use contract::ContractRenderer;
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, SignaturePolicy, LOGO_ASSET, SIGNATURE_ASSET};
pub use pdf::PdfSurface;
pub use text::to_text;
