//! Data model for contract document composition.
//!
//! This module defines the intermediate representation that bridges
//! contract data and document rendering: input contract types, styled
//! spans, and the composed section structure the paginator consumes.

mod contract;
mod section;
mod span;

pub use contract::{Category, ContractData, Investment, Investor, PaymentType};
pub use section::{ComposedDocument, DocumentMeta, Section};
pub use span::{Span, SpanStyle};
