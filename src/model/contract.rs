//! Contract-level data types.
//!
//! These mirror the JSON shape returned by the contract-retrieval
//! endpoint. Every identity field is optional; a missing value renders
//! as an empty string rather than failing the document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input data for one contract document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractData {
    /// Contract number, e.g. "001/SPK-INV/VIII/2026"
    pub contract_number: String,

    /// Date the contract is signed
    pub contract_date: Option<NaiveDate>,

    /// The investing party
    pub investor: Investor,

    /// The investment being contracted
    pub investment: Investment,
}

impl ContractData {
    /// Stem for the output file name, derived from contract number and
    /// investor or product name. Non-alphanumeric runs collapse to `-`.
    pub fn file_stem(&self) -> String {
        let raw = format!(
            "{}-{}",
            self.contract_number,
            self.investor
                .name
                .as_deref()
                .unwrap_or(&self.investment.product_name)
        );
        let mut stem = String::with_capacity(raw.len());
        let mut last_dash = true;
        for c in raw.chars() {
            if c.is_ascii_alphanumeric() {
                stem.push(c);
                last_dash = false;
            } else if !last_dash {
                stem.push('-');
                last_dash = true;
            }
        }
        stem.trim_end_matches('-').to_string()
    }
}

/// The investing party. All fields optional; missing values render empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Investor {
    /// Full legal name
    pub name: Option<String>,

    /// National identity number (NIK)
    pub national_id: Option<String>,

    /// Date of birth
    pub birth_date: Option<NaiveDate>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Contact e-mail address
    pub email: Option<String>,

    /// Street address
    pub address: Option<String>,

    /// Village (kelurahan/desa)
    pub village: Option<String>,

    /// District (kecamatan)
    pub district: Option<String>,

    /// City or regency
    pub city: Option<String>,

    /// Province
    pub province: Option<String>,
}

impl Investor {
    /// Birth date formatted for the document, or empty if missing.
    pub fn birth_date_text(&self) -> String {
        self.birth_date
            .map(|d| d.format("%d-%m-%Y").to_string())
            .unwrap_or_default()
    }

    /// Full address line joined from the available components.
    pub fn address_line(&self) -> String {
        [
            self.address.as_deref(),
            self.village.as_deref(),
            self.district.as_deref(),
            self.city.as_deref(),
            self.province.as_deref(),
        ]
        .iter()
        .filter_map(|part| *part)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// The investment being contracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    /// Total amount in whole Rupiah (no minor units)
    pub total_amount: u64,

    /// Free-text product name, e.g. "Paket Investasi Alpukat Miki"
    pub product_name: String,

    /// How the amount is paid
    pub payment_type: PaymentType,
}

impl Investment {
    /// Category token inferred from the product name.
    pub fn category(&self) -> Category {
        Category::detect(&self.product_name).unwrap_or(Category::Tanaman)
    }
}

/// Payment scheme for the investment amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Single lump-sum payment
    Full,
    /// Scheduled installment payments
    Installment,
}

/// Closed set of plant categories used to parameterize legal boilerplate.
///
/// Detection is a case-insensitive substring match against the product
/// name; unknown products fall back to the generic [`Category::Tanaman`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Alpukat,
    Durian,
    Mangga,
    Jeruk,
    Kelengkeng,
    Jambu,
    /// Generic fallback when no keyword matches
    Tanaman,
}

impl Category {
    const KEYWORDS: [(&'static str, Category); 6] = [
        ("alpukat", Category::Alpukat),
        ("durian", Category::Durian),
        ("mangga", Category::Mangga),
        ("jeruk", Category::Jeruk),
        ("kelengkeng", Category::Kelengkeng),
        ("jambu", Category::Jambu),
    ];

    /// Detect a category from a free-text product name.
    pub fn detect(product_name: &str) -> Option<Category> {
        let lower = product_name.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, category)| *category)
    }

    /// The uppercase token interpolated into legal text.
    pub fn token(&self) -> &'static str {
        match self {
            Category::Alpukat => "ALPUKAT",
            Category::Durian => "DURIAN",
            Category::Mangga => "MANGGA",
            Category::Jeruk => "JERUK",
            Category::Kelengkeng => "KELENGKENG",
            Category::Jambu => "JAMBU",
            Category::Tanaman => "TANAMAN",
        }
    }

    /// All tokens of the closed set, for the markup keyword matcher.
    pub fn tokens() -> [&'static str; 7] {
        [
            "ALPUKAT",
            "DURIAN",
            "MANGGA",
            "JERUK",
            "KELENGKENG",
            "JAMBU",
            "TANAMAN",
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContractData {
        ContractData {
            contract_number: "001/SPK-INV/VIII/2026".to_string(),
            contract_date: NaiveDate::from_ymd_opt(2026, 8, 7),
            investor: Investor {
                name: Some("Budi Santoso".to_string()),
                ..Default::default()
            },
            investment: Investment {
                total_amount: 15_000_000,
                product_name: "Paket Investasi Alpukat Miki".to_string(),
                payment_type: PaymentType::Full,
            },
        }
    }

    #[test]
    fn test_category_detect() {
        assert_eq!(
            Category::detect("Paket Investasi Alpukat Miki"),
            Some(Category::Alpukat)
        );
        assert_eq!(Category::detect("DURIAN musang king"), Some(Category::Durian));
        assert_eq!(Category::detect("Paket Sayur"), None);
    }

    #[test]
    fn test_category_fallback() {
        let investment = Investment {
            total_amount: 1,
            product_name: "Paket Hidroponik".to_string(),
            payment_type: PaymentType::Installment,
        };
        assert_eq!(investment.category(), Category::Tanaman);
        assert_eq!(investment.category().token(), "TANAMAN");
    }

    #[test]
    fn test_file_stem() {
        let contract = sample();
        assert_eq!(contract.file_stem(), "001-SPK-INV-VIII-2026-Budi-Santoso");
    }

    #[test]
    fn test_file_stem_without_name() {
        let mut contract = sample();
        contract.investor.name = None;
        assert!(contract.file_stem().ends_with("Paket-Investasi-Alpukat-Miki"));
    }

    #[test]
    fn test_address_line_skips_missing() {
        let investor = Investor {
            address: Some("Jl. Mawar No. 5".to_string()),
            city: Some("Jakarta Timur".to_string()),
            ..Default::default()
        };
        assert_eq!(investor.address_line(), "Jl. Mawar No. 5, Jakarta Timur");
        assert_eq!(Investor::default().address_line(), "");
    }

    #[test]
    fn test_payment_type_serde() {
        let json = serde_json::to_string(&PaymentType::Full).unwrap();
        assert_eq!(json, "\"full\"");
        let back: PaymentType = serde_json::from_str("\"installment\"").unwrap();
        assert_eq!(back, PaymentType::Installment);
    }

    #[test]
    fn test_contract_deserialize() {
        let json = r#"{
            "contract_number": "007/SPK-INV/I/2026",
            "contract_date": "2026-01-15",
            "investor": { "name": "Siti Aminah" },
            "investment": {
                "total_amount": 5000000,
                "product_name": "Durian Bawor",
                "payment_type": "installment"
            }
        }"#;
        let contract: ContractData = serde_json::from_str(json).unwrap();
        assert_eq!(contract.investment.total_amount, 5_000_000);
        assert_eq!(contract.investment.category(), Category::Durian);
        assert!(contract.investor.phone.is_none());
    }
}
