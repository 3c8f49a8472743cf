//! Default styling rules for contract legal text.

use super::Rule;
use crate::model::SpanStyle;

/// The ordered rule set used by the contract templates.
///
/// Party designators are bolded only directly after their "disebut "
/// introduction; bare mentions elsewhere stay plain. Currency tokens
/// and category keywords are bolded wherever they appear; latin species
/// names and loan terms are italicized.
pub fn contract_rules() -> Vec<Rule> {
    vec![
        Rule::phrase("PIHAK PERTAMA", SpanStyle::bold()).with_anchor("disebut "),
        Rule::phrase("PIHAK KEDUA", SpanStyle::bold()).with_anchor("disebut "),
        Rule::phrase("Perjanjian Kerja Sama Investasi", SpanStyle::bold()),
        Rule::phrase("Surat Perjanjian", SpanStyle::bold()),
        Rule::pattern(r"Rp[0-9][0-9.]*,-", SpanStyle::bold()),
        Rule::pattern(
            r"\b(ALPUKAT|DURIAN|MANGGA|JERUK|KELENGKENG|JAMBU|TANAMAN)\b",
            SpanStyle::bold(),
        ),
        Rule::pattern(r"\b[Ff]orce [Mm]ajeure\b", SpanStyle::italic()),
        Rule::phrase("Persea americana", SpanStyle::italic()),
        Rule::phrase("Durio zibethinus", SpanStyle::italic()),
    ]
}
