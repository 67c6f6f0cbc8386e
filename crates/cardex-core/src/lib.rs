pub mod classify;
pub mod error;
pub mod extraction;
pub mod format;
pub mod model;
pub mod segment;

use error::CardexError;
use extraction::PdfExtractor;
use format::OutputFormat;
use model::Record;
use std::path::{Path, PathBuf};

/// Where and how the converted output is saved.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    pub directory: PathBuf,
    /// File name without extension.
    pub name: String,
    pub format: OutputFormat,
}

impl OutputTarget {
    /// `{directory}/{name}.{extension}`
    pub fn path(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.name, self.format.extension()))
    }
}

/// Result of one run through the pipeline.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// All pages' text, concatenated.
    pub text: String,
    /// Contact records segmented from the text.
    pub records: Vec<Record>,
    /// The output file content.
    pub rendered: String,
}

/// Main API entry point: extract a PDF and convert it to the chosen format.
pub fn convert_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    format: OutputFormat,
) -> Result<Conversion, CardexError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    log::info!(
        "extracted {} page(s) with {}",
        pages.len(),
        extractor.backend_name()
    );

    let text = extraction::join_pages(&pages);
    convert_text(text, format)
}

/// Segment already-extracted text and render it.
pub fn convert_text(text: String, format: OutputFormat) -> Result<Conversion, CardexError> {
    let lines = classify::classify_lines(&text);
    let records = segment::segment(&lines);
    log::info!(
        "segmented {} line(s) into {} record(s)",
        lines.len(),
        records.len()
    );

    let rendered = format::render(format, &text, &records)?;
    Ok(Conversion {
        text,
        records,
        rendered,
    })
}

/// Read the input PDF, mapping a missing file or directory to
/// [`CardexError::InputNotFound`].
pub fn read_input(path: &Path) -> Result<Vec<u8>, CardexError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CardexError::InputNotFound(path.to_path_buf()),
        _ => CardexError::Io(e),
    })
}

/// Write `content` to the target path, replacing any existing file.
pub fn write_output(target: &OutputTarget, content: &str) -> Result<PathBuf, CardexError> {
    let path = target.path();
    std::fs::write(&path, content).map_err(|e| CardexError::OutputWrite {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    log::info!("wrote {} byte(s) to {}", content.len(), path.display());
    Ok(path)
}
