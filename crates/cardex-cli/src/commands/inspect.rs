use cardex_core::classify::classify_lines;
use cardex_core::error::CardexError;
use cardex_core::extraction::pdftotext::PdftotextExtractor;
use cardex_core::extraction::{join_pages, PdfExtractor};
use cardex_core::segment::segment;
use std::path::PathBuf;

use crate::output;

pub fn run(pdf_file: PathBuf, output_format: &str, layout: bool) -> Result<(), CardexError> {
    let pdf_bytes = cardex_core::read_input(&pdf_file)?;
    let extractor = PdftotextExtractor::new().with_layout(layout);
    let pages = extractor.extract_pages(&pdf_bytes)?;

    let text = join_pages(&pages);
    let lines = classify_lines(&text);
    let records = segment(&lines);

    match output_format {
        "json" => output::json::print(&lines, &records)?,
        _ => output::table::print(&lines, &records),
    }

    Ok(())
}
