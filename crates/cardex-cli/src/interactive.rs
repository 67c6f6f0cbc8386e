//! Interactive mode.
//!
//! Prompts for the PDF path, the output format and where to save the
//! result, then runs the conversion pipeline once. Every run ends with an
//! exit prompt and a zero exit status, including runs that hit an error.

use cardex_core::error::CardexError;
use cardex_core::extraction::pdftotext::PdftotextExtractor;
use cardex_core::extraction::{join_pages, PdfExtractor};
use cardex_core::format::OutputFormat;
use cardex_core::OutputTarget;
use dialoguer::Input;
use std::path::PathBuf;

const EXIT_MESSAGE: &str = "Press [enter] to exit.";

/// Runs the prompt flow. Never returns.
pub fn run() -> Result<(), CardexError> {
    let message = match convert() {
        Ok(()) => "Parsing Complete.".to_string(),
        Err(e) => e.to_string(),
    };
    exit_program(&message)
}

fn convert() -> Result<(), CardexError> {
    let pdf_bytes = read_pdf()?;

    println!("Opening the document...");
    println!("Parsing the page content...");
    let extractor = PdftotextExtractor::new();
    let pages = extractor.extract_pages(&pdf_bytes)?;
    let text = join_pages(&pages);

    println!("Generating the output file...");
    let format = ask_format()?;
    let conversion = cardex_core::convert_text(text, format)?;

    let target = OutputTarget {
        directory: ask("Where would you like to save the output?")?.into(),
        name: ask("What name would you like to save the output with?")?,
        format,
    };
    let path = cardex_core::write_output(&target, &conversion.rendered)?;
    log::info!(
        "saved {} record(s) to {}",
        conversion.records.len(),
        path.display()
    );

    Ok(())
}

/// Keep asking until the path points at a readable file.
fn read_pdf() -> Result<Vec<u8>, CardexError> {
    loop {
        let path: PathBuf = ask("What is the absolute path to the PDF file?")?.into();
        println!("Reading the file...");

        match cardex_core::read_input(&path) {
            Ok(bytes) => return Ok(bytes),
            Err(CardexError::InputNotFound(_)) => {
                println!("Invalid path, file not found in that location.");
            }
            Err(e) => return Err(e),
        }
    }
}

fn ask_format() -> Result<OutputFormat, CardexError> {
    let answer: String = Input::new()
        .with_prompt("Parsing Completed. How would you like the output? [csv, txt]")
        .validate_with(|input: &String| -> Result<(), &'static str> {
            match input.as_str() {
                "csv" | "txt" => Ok(()),
                _ => Err("Unrecognized output type. Please select one of the following: csv, txt."),
            }
        })
        .interact_text()
        .map_err(prompt_error)?;
    answer.parse()
}

fn ask(prompt: &str) -> Result<String, CardexError> {
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(prompt_error)
}

fn prompt_error(e: dialoguer::Error) -> CardexError {
    CardexError::Io(std::io::Error::other(e))
}

fn exit_program(message: &str) -> ! {
    if !message.is_empty() {
        println!("{message}");
    }

    let _: Result<String, _> = Input::new()
        .with_prompt(EXIT_MESSAGE)
        .allow_empty(true)
        .interact_text();

    std::process::exit(0);
}
