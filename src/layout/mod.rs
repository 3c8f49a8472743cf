//! Text layout engine: measurement-driven word wrap, hanging indents,
//! and pagination over an abstract rendering surface.
//!
//! Nothing in this module knows about PDF; the concrete surface lives
//! in [`crate::render::pdf`] and tests use a recording mock.

mod line;
mod paginator;
mod paragraph;
mod surface;

pub use line::render_spans;
pub use paginator::{PageMetrics, Paginator};
pub use paragraph::render_paragraph;
pub use surface::{Cursor, TextSurface};
