//! akta CLI - investment-contract document generation tool

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use akta::{
    Akta, ContractData, ImageAsset, JsonFormat, RenderOptions, TemplateKind,
};

#[derive(Parser)]
#[command(name = "akta")]
#[command(version)]
#[command(about = "Generate investment-contract PDF documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a contract PDF from JSON contract data
    Generate {
        /// Input contract JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file (derived from the contract if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Article template
        #[arg(long, value_enum, default_value = "lump-sum")]
        template: Template,

        /// Logo image file for the header
        #[arg(long, value_name = "FILE")]
        logo: Option<PathBuf>,

        /// Signature image file (PNG or JPEG)
        #[arg(long, value_name = "FILE")]
        signature: Option<PathBuf>,

        /// Refuse to generate without a usable signature
        #[arg(long)]
        require_signature: bool,
    },

    /// Print a plain-text preview of the composed contract
    Preview {
        /// Input contract JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Article template
        #[arg(long, value_enum, default_value = "lump-sum")]
        template: Template,
    },

    /// Print the composed document as JSON
    Json {
        /// Input contract JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Article template
        #[arg(long, value_enum, default_value = "lump-sum")]
        template: Template,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Spell out a Rupiah amount in words
    Terbilang {
        /// Amount in whole Rupiah
        #[arg(value_name = "AMOUNT")]
        amount: u64,
    },

    /// Generate PDFs for every contract JSON in a directory
    Batch {
        /// Directory containing contract JSON files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory (defaults to the input directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Article template
        #[arg(long, value_enum, default_value = "lump-sum")]
        template: Template,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Template {
    LumpSum,
    Installment,
}

impl From<Template> for TemplateKind {
    fn from(value: Template) -> Self {
        match value {
            Template::LumpSum => TemplateKind::LumpSum,
            Template::Installment => TemplateKind::Installment,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            template,
            logo,
            signature,
            require_signature,
        } => generate(
            &input,
            output.as_deref(),
            template.into(),
            logo.as_deref(),
            signature.as_deref(),
            require_signature,
        ),
        Commands::Preview { input, template } => preview(&input, template.into()),
        Commands::Json {
            input,
            template,
            compact,
        } => json(&input, template.into(), compact),
        Commands::Terbilang { amount } => {
            println!("{}", akta::terbilang(amount));
            Ok(())
        }
        Commands::Batch {
            input,
            output,
            template,
        } => batch(&input, output.as_deref(), template.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn read_contract(path: &Path) -> akta::Result<ContractData> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn generate(
    input: &Path,
    output: Option<&Path>,
    template: TemplateKind,
    logo: Option<&Path>,
    signature: Option<&Path>,
    require_signature: bool,
) -> akta::Result<()> {
    let contract = read_contract(input)?;

    let mut builder = Akta::new().with_template(template);
    if let Some(path) = logo {
        builder = builder.with_logo(ImageAsset::from_file(path)?);
    }
    if let Some(path) = signature {
        builder = builder.with_signature(ImageAsset::from_file(path)?);
    }
    if require_signature {
        builder = builder.require_signature();
    }

    let result = builder.generate(&contract)?;
    let output = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(result.file_name()));
    result.save(&output)?;

    println!(
        "{} {} ({} bytes)",
        "saved".green().bold(),
        output.display(),
        result.pdf_bytes().len()
    );
    Ok(())
}

fn preview(input: &Path, template: TemplateKind) -> akta::Result<()> {
    let contract = read_contract(input)?;
    println!("{}", akta::preview_text(&contract, template));
    Ok(())
}

fn json(input: &Path, template: TemplateKind, compact: bool) -> akta::Result<()> {
    let contract = read_contract(input)?;
    let doc = akta::compose(&contract, template);
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", akta::render::to_json(&doc, format)?);
    Ok(())
}

fn batch(input: &Path, output: Option<&Path>, template: TemplateKind) -> akta::Result<()> {
    let output_dir = output.unwrap_or(input);
    fs::create_dir_all(output_dir)?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        println!("{}", "no contract JSON files found".yellow());
        return Ok(());
    }

    let bar = ProgressBar::new(inputs.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut failures = 0usize;
    for path in &inputs {
        bar.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        match read_contract(path).and_then(|contract| {
            let options = RenderOptions::default().with_template(template);
            let pdf = akta::generate_pdf(&contract, &options)?;
            let name = format!("{}.pdf", contract.file_stem());
            fs::write(output_dir.join(name), pdf)?;
            Ok(())
        }) {
            Ok(()) => {}
            Err(e) => {
                failures += 1;
                log::warn!("{}: {}", path.display(), e);
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    let generated = inputs.len() - failures;
    println!(
        "{} {} generated, {} failed",
        "done:".green().bold(),
        generated,
        failures
    );
    if failures > 0 {
        return Err(akta::Error::Other(format!(
            "{} contract(s) failed to generate",
            failures
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_mapping() {
        assert_eq!(TemplateKind::from(Template::LumpSum).id(), "lump-sum");
        assert_eq!(
            TemplateKind::from(Template::Installment).id(),
            "installment"
        );
    }

    #[test]
    fn test_generate_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("contract.json");
        fs::write(
            &input,
            r#"{
                "contract_number": "001/SPK/2026",
                "contract_date": "2026-08-07",
                "investor": { "name": "Budi" },
                "investment": {
                    "total_amount": 1000000,
                    "product_name": "Alpukat",
                    "payment_type": "full"
                }
            }"#,
        )
        .unwrap();
        let output = dir.path().join("out.pdf");

        generate(
            &input,
            Some(&output),
            TemplateKind::LumpSum,
            None,
            None,
            false,
        )
        .unwrap();

        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
