//! Amount formatting: numeral-to-words and grouped Rupiah rendering.

mod currency;
mod terbilang;

pub use currency::{rupiah_contract, rupiah_screen};
pub use terbilang::terbilang;
