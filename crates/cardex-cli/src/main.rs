mod commands;
mod interactive;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cardex",
    version,
    about = "Extract business-card contact records from PDF text into CSV"
)]
struct Cli {
    /// Runs the interactive prompts when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for the input file, output format and save location
    Interactive,
    /// Convert a PDF without prompting
    Convert {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: csv (default), txt or json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Directory to save into; prints to stdout when omitted
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Output file name without extension (default: input file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Extract with pdftotext -layout instead of reading order
        #[arg(long)]
        layout: bool,
    },
    /// Show how each extracted line is classified and segmented
    Inspect {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Extract with pdftotext -layout instead of reading order
        #[arg(long)]
        layout: bool,
    },
}

fn main() {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Interactive) => interactive::run(),
        Some(Commands::Convert {
            input_file,
            format,
            dir,
            name,
            layout,
        }) => commands::convert::run(input_file, &format, dir, name, layout),
        Some(Commands::Inspect {
            input_file,
            output,
            layout,
        }) => commands::inspect::run(input_file, &output, layout),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
