//! provld CLI: convert PROV-JSON provenance documents to PROV-JSONLD.
//!
//! Usage:
//!   provld <INPUT> <OUTPUT> [--strict] [--pretty]

use clap::Parser;
use provld::{Converter, ConverterConfig};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "provld",
    version,
    about = "Convert PROV-JSON provenance documents to PROV-JSONLD"
)]
struct Cli {
    /// Input PROV-JSON file
    input: PathBuf,
    /// Output PROV-JSONLD file
    output: PathBuf,
    /// Treat recoverable conversion warnings as errors
    #[arg(long)]
    strict: bool,
    /// Pretty-print the output document
    #[arg(long)]
    pretty: bool,
}

fn run(cli: &Cli) -> i32 {
    let input = match fs::read_to_string(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", cli.input.display(), e);
            return 1;
        }
    };

    let converter = Converter::with_config(ConverterConfig {
        strict: cli.strict,
        ..ConverterConfig::default()
    });
    let conversion = match converter.convert_str(&input) {
        Ok(conversion) => conversion,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let serialized = if cli.pretty {
        serde_json::to_string_pretty(&conversion.document)
    } else {
        serde_json::to_string(&conversion.document)
    };
    let serialized = match serialized {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot serialize output: {}", e);
            return 1;
        }
    };

    if let Err(e) = fs::write(&cli.output, serialized) {
        eprintln!("Error: cannot write '{}': {}", cli.output.display(), e);
        return 1;
    }
    println!("Converted PROV-JSON to PROV-JSONLD: {}", cli.output.display());
    0
}

fn main() {
    // Warnings and diagnostics go to stderr so the output document stays
    // clean when scripts redirect stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}
