//! Contract templates: the legal-article text blocks, parameterized by
//! contract data.
//!
//! Two templates exist because the two historical document variants
//! disagree on the profit-split wording (70/30 versus 30/70). They are
//! kept as distinct texts on purpose; see DESIGN.md.

use chrono::NaiveDate;

use crate::format::{rupiah_contract, terbilang};
use crate::model::{ComposedDocument, ContractData, DocumentMeta, PaymentType, Section};

/// Which legal-article template to compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Lump-sum payment contract (70/30 split wording)
    LumpSum,
    /// Installment payment contract (30/70 split wording)
    Installment,
}

impl TemplateKind {
    /// Stable identifier used in metadata and CLI flags.
    pub fn id(&self) -> &'static str {
        match self {
            TemplateKind::LumpSum => "lump-sum",
            TemplateKind::Installment => "installment",
        }
    }

    /// Build the full section list for a contract.
    pub fn compose(&self, contract: &ContractData) -> ComposedDocument {
        let meta = DocumentMeta {
            contract_number: contract.contract_number.clone(),
            template: self.id().to_string(),
            file_stem: contract.file_stem(),
        };
        let mut doc = ComposedDocument::new(meta);

        doc.add_section(opening(contract));
        doc.add_section(pasal_definisi());
        doc.add_section(pasal_maksud(contract));
        doc.add_section(pasal_nilai(contract, *self));
        doc.add_section(pasal_hak_kewajiban());
        doc.add_section(pasal_bagi_hasil(*self));
        doc.add_section(pasal_jangka_waktu());
        doc.add_section(pasal_force_majeure());
        doc.add_section(pasal_perselisihan());
        doc.add_section(pasal_penutup(contract));

        doc
    }
}

const BULAN: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Indonesian long-form date, or empty when the date is missing.
fn tanggal(date: Option<NaiveDate>) -> String {
    use chrono::Datelike;
    match date {
        None => String::new(),
        Some(d) => format!(
            "{} {} {}",
            d.day(),
            BULAN[d.month0() as usize],
            d.year()
        ),
    }
}

fn opening(contract: &ContractData) -> Section {
    let investor = &contract.investor;
    Section::new(format!(
        "SURAT PERJANJIAN KERJA SAMA INVESTASI\nNomor: {}",
        contract.contract_number
    ))
    .paragraph(format!(
        "Pada hari ini, tanggal {}, telah dibuat dan ditandatangani Perjanjian Kerja Sama \
         Investasi oleh dan antara:",
        tanggal(contract.contract_date)
    ))
    .gap()
    .paragraph(
        "1. Koperasi Tani Maju Bersama, berkedudukan di Jakarta Timur, dalam hal ini diwakili \
         oleh pengurus yang sah, bertindak untuk dan atas nama koperasi, yang selanjutnya \
         disebut PIHAK PERTAMA.",
    )
    .paragraph(format!(
        "2. {}, NIK {}, tanggal lahir {}, beralamat di {}, telepon {}, e-mail {}, bertindak \
         untuk dan atas nama diri sendiri, yang selanjutnya disebut PIHAK KEDUA.",
        investor.name.as_deref().unwrap_or_default(),
        investor.national_id.as_deref().unwrap_or_default(),
        investor.birth_date_text(),
        investor.address_line(),
        investor.phone.as_deref().unwrap_or_default(),
        investor.email.as_deref().unwrap_or_default(),
    ))
    .gap()
    .paragraph(
        "Kedua belah pihak sepakat untuk mengikatkan diri dalam perjanjian kerja sama \
         investasi dengan ketentuan sebagai berikut:",
    )
}

fn pasal_definisi() -> Section {
    Section::new("PASAL 1\nDEFINISI")
        .paragraph(
            "1. Investasi adalah penempatan dana oleh PIHAK KEDUA kepada PIHAK PERTAMA untuk \
             dikelola dalam usaha budidaya tanaman produktif.",
        )
        .paragraph(
            "2. Paket investasi adalah satuan kerja sama yang mencakup bibit, lahan, \
             perawatan, dan panen selama jangka waktu perjanjian.",
        )
        .paragraph(
            "3. Bagi hasil adalah pembagian keuntungan bersih hasil panen menurut \
             perbandingan yang diatur dalam perjanjian ini.",
        )
}

fn pasal_maksud(contract: &ContractData) -> Section {
    Section::new("PASAL 2\nMAKSUD DAN TUJUAN").paragraph(format!(
        "Perjanjian ini dibuat dalam rangka kerja sama pengelolaan paket investasi tanaman \
         {} atas produk \"{}\" yang dikelola sepenuhnya oleh PIHAK PERTAMA.",
        contract.investment.category().token(),
        contract.investment.product_name,
    ))
}

fn pasal_nilai(contract: &ContractData, kind: TemplateKind) -> Section {
    let amount = contract.investment.total_amount;
    let mut section = Section::new("PASAL 3\nNILAI INVESTASI DAN CARA PEMBAYARAN").paragraph(
        format!(
            "1. PIHAK KEDUA menempatkan dana investasi sebesar {} ({}) kepada PIHAK PERTAMA \
             untuk paket tanaman {}.",
            rupiah_contract(amount),
            terbilang(amount),
            contract.investment.category().token(),
        ),
    );

    section = match (contract.investment.payment_type, kind) {
        (PaymentType::Full, _) => section.paragraph(
            "2. Dana investasi dibayarkan secara sekaligus dan lunas pada saat perjanjian \
             ini ditandatangani.",
        ),
        (PaymentType::Installment, _) => section.paragraph(
            "2. Dana investasi dibayarkan secara angsuran sesuai jadwal cicilan yang \
             disepakati para pihak dan menjadi lampiran tidak terpisahkan dari perjanjian \
             ini.",
        ),
    };

    section.paragraph(
        "3. Pembayaran dianggap sah setelah dana diterima penuh pada rekening resmi \
         PIHAK PERTAMA.",
    )
}

fn pasal_hak_kewajiban() -> Section {
    Section::new("PASAL 4\nHAK DAN KEWAJIBAN PARA PIHAK")
        .paragraph(
            "1. PIHAK PERTAMA wajib mengelola dana investasi dengan itikad baik, merawat \
             tanaman, dan melaporkan perkembangan budidaya secara berkala.",
        )
        .paragraph(
            "2. PIHAK PERTAMA berhak menerima bagian keuntungan sebagaimana diatur pada \
             Pasal 5 perjanjian ini.",
        )
        .paragraph(
            "3. PIHAK KEDUA wajib menyetorkan dana investasi sesuai Pasal 3 dan tidak \
             mencampuri pengelolaan teknis budidaya.",
        )
        .paragraph(
            "4. PIHAK KEDUA berhak memperoleh laporan perkembangan serta bagian keuntungan \
             sebagaimana diatur pada Pasal 5 perjanjian ini.",
        )
}

fn pasal_bagi_hasil(kind: TemplateKind) -> Section {
    // The two historical document variants reverse these percentages;
    // both are preserved verbatim pending product-owner clarification.
    let clause = match kind {
        TemplateKind::LumpSum => {
            "Keuntungan bersih hasil panen dibagi dengan perbandingan 70% (tujuh puluh \
             persen) untuk PIHAK KEDUA dan 30% (tiga puluh persen) untuk PIHAK PERTAMA, \
             dihitung setelah dikurangi biaya operasional yang wajar."
        }
        TemplateKind::Installment => {
            "Keuntungan bersih hasil panen dibagi dengan perbandingan 30% (tiga puluh \
             persen) untuk PIHAK KEDUA dan 70% (tujuh puluh persen) untuk PIHAK PERTAMA, \
             dihitung setelah dikurangi biaya operasional yang wajar."
        }
    };
    Section::new("PASAL 5\nBAGI HASIL").paragraph(clause)
}

fn pasal_jangka_waktu() -> Section {
    Section::new("PASAL 6\nJANGKA WAKTU")
        .paragraph(
            "1. Perjanjian ini berlaku selama 5 (lima) tahun terhitung sejak tanggal \
             penandatanganan.",
        )
        .paragraph(
            "2. Perpanjangan jangka waktu dilakukan atas kesepakatan tertulis kedua belah \
             pihak paling lambat 30 (tiga puluh) hari sebelum perjanjian berakhir.",
        )
}

fn pasal_force_majeure() -> Section {
    Section::new("PASAL 7\nKEADAAN MEMAKSA")
        .paragraph(
            "1. Yang dimaksud keadaan memaksa (force majeure) adalah kejadian di luar \
             kemampuan para pihak, termasuk bencana alam, wabah, kebakaran, dan kebijakan \
             pemerintah yang bersifat memaksa.",
        )
        .paragraph(
            "2. Dalam hal terjadi force majeure, para pihak dibebaskan dari kewajiban yang \
             terdampak dan akan merundingkan penyesuaian pelaksanaan perjanjian.",
        )
}

fn pasal_perselisihan() -> Section {
    Section::new("PASAL 8\nPENYELESAIAN PERSELISIHAN")
        .paragraph(
            "1. Perselisihan yang timbul dari perjanjian ini diselesaikan terlebih dahulu \
             secara musyawarah untuk mufakat.",
        )
        .paragraph(
            "2. Apabila musyawarah tidak mencapai mufakat, para pihak sepakat memilih \
             penyelesaian melalui Pengadilan Negeri Jakarta Timur.",
        )
}

fn pasal_penutup(contract: &ContractData) -> Section {
    Section::new("PASAL 9\nPENUTUP").paragraph(format!(
        "Demikian Perjanjian Kerja Sama Investasi nomor {} ini dibuat dalam rangkap 2 (dua) \
         bermeterai cukup dan mempunyai kekuatan hukum yang sama, ditandatangani oleh para \
         pihak dalam keadaan sadar tanpa paksaan dari pihak manapun.",
        contract.contract_number
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Investment, Investor};

    fn contract(amount: u64, product: &str, payment: PaymentType) -> ContractData {
        ContractData {
            contract_number: "003/SPK-INV/VIII/2026".to_string(),
            contract_date: NaiveDate::from_ymd_opt(2026, 8, 7),
            investor: Investor {
                name: Some("Budi Santoso".to_string()),
                ..Default::default()
            },
            investment: Investment {
                total_amount: amount,
                product_name: product.to_string(),
                payment_type: payment,
            },
        }
    }

    #[test]
    fn test_compose_interpolates_amount_and_category() {
        let doc = TemplateKind::LumpSum.compose(&contract(
            15_000_000,
            "Paket Alpukat Miki",
            PaymentType::Full,
        ));
        let text = doc.plain_text();
        assert!(text.contains("Rp15.000.000,-"));
        assert!(text.contains("lima belas juta rupiah"));
        assert!(text.contains("ALPUKAT"));
        assert!(text.contains("dibayarkan secara sekaligus"));
    }

    #[test]
    fn test_installment_clause() {
        let doc = TemplateKind::Installment.compose(&contract(
            5_000_000,
            "Durian Bawor",
            PaymentType::Installment,
        ));
        let text = doc.plain_text();
        assert!(text.contains("secara angsuran"));
        assert!(text.contains("DURIAN"));
    }

    #[test]
    fn test_profit_split_divergence_preserved() {
        let lump = TemplateKind::LumpSum
            .compose(&contract(1, "Alpukat", PaymentType::Full))
            .plain_text();
        let installment = TemplateKind::Installment
            .compose(&contract(1, "Alpukat", PaymentType::Installment))
            .plain_text();
        assert!(lump.contains("70% (tujuh puluh persen) untuk PIHAK KEDUA"));
        assert!(installment.contains("30% (tiga puluh persen) untuk PIHAK KEDUA"));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let mut c = contract(1000, "Mangga", PaymentType::Full);
        c.contract_date = None;
        c.investor = Investor::default();
        let doc = TemplateKind::LumpSum.compose(&c);
        let text = doc.plain_text();
        assert!(text.contains("pada hari ini") || text.contains("Pada hari ini"));
        assert!(text.contains("NIK ,"));
    }

    #[test]
    fn test_tanggal_formatting() {
        assert_eq!(
            tanggal(NaiveDate::from_ymd_opt(2026, 8, 7)),
            "7 Agustus 2026"
        );
        assert_eq!(tanggal(None), "");
    }

    #[test]
    fn test_every_section_has_title_and_content() {
        let doc = TemplateKind::LumpSum.compose(&contract(1, "Jeruk", PaymentType::Full));
        assert_eq!(doc.sections.len(), 10);
        for section in &doc.sections {
            assert!(!section.title.is_empty());
            assert!(section.paragraphs.iter().any(|p| !p.is_empty()));
        }
    }
}
