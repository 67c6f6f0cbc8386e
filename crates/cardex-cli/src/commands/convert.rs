use cardex_core::error::CardexError;
use cardex_core::extraction::pdftotext::PdftotextExtractor;
use cardex_core::format::OutputFormat;
use cardex_core::OutputTarget;
use std::path::PathBuf;

pub fn run(
    pdf_file: PathBuf,
    format: &str,
    dir: Option<PathBuf>,
    name: Option<String>,
    layout: bool,
) -> Result<(), CardexError> {
    let format: OutputFormat = format.parse()?;

    let pdf_bytes = cardex_core::read_input(&pdf_file)?;
    let extractor = PdftotextExtractor::new().with_layout(layout);
    let conversion = cardex_core::convert_pdf(&pdf_bytes, &extractor, format)?;

    match dir {
        Some(directory) => {
            let name = name.unwrap_or_else(|| {
                pdf_file
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "contacts".into())
            });
            let target = OutputTarget {
                directory,
                name,
                format,
            };
            let path = cardex_core::write_output(&target, &conversion.rendered)?;
            eprintln!(
                "Converted {} record(s), written to {}",
                conversion.records.len(),
                path.display()
            );
        }
        None => {
            println!("{}", conversion.rendered);
        }
    }

    Ok(())
}
