use crate::error::CardexError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

/// PDF extraction backend using pdfinfo and pdftotext (from poppler-utils).
///
/// Pages are extracted one at a time so a failure can name the page that
/// could not be read.
#[derive(Debug, Clone, Default)]
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor { layout: false }
    }

    /// Use `pdftotext -layout`, preserving horizontal alignment instead of
    /// reading order.
    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }

    fn page_count(&self, pdf_path: &Path) -> Result<usize, CardexError> {
        let output = run_tool("pdfinfo", Command::new("pdfinfo").arg(pdf_path))?;
        if !output.status.success() {
            return Err(failed(&output));
        }

        let info = String::from_utf8_lossy(&output.stdout);
        parse_page_count(&info).ok_or_else(|| {
            CardexError::Extraction("pdfinfo did not report a page count".into())
        })
    }

    fn extract_page(&self, pdf_path: &Path, page: usize) -> Result<String, CardexError> {
        let page_arg = page.to_string();
        let mut cmd = Command::new("pdftotext");
        if self.layout {
            cmd.arg("-layout");
        }
        cmd.args(["-f", page_arg.as_str(), "-l", page_arg.as_str()])
            .arg(pdf_path)
            .arg("-"); // output to stdout

        let output = run_tool("pdftotext", &mut cmd)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CardexError::PageExtraction {
                page,
                reason: stderr,
            });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(strip_page_break(&text).to_string())
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, CardexError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| CardexError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| CardexError::Extraction(e.to_string()))?;
        let tmp_path = tmpfile.path().to_path_buf();

        let count = self.page_count(&tmp_path)?;
        log::debug!("pdfinfo reports {count} page(s)");

        let mut pages = Vec::with_capacity(count);
        for page_number in 1..=count {
            let text = self.extract_page(&tmp_path, page_number)?;
            log::trace!("page {page_number}: {} byte(s) of text", text.len());
            pages.push(PageContent { page_number, text });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn run_tool(name: &str, cmd: &mut Command) -> Result<Output, CardexError> {
    cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CardexError::PdftotextNotFound
        } else {
            CardexError::Extraction(format!("{name} failed: {e}"))
        }
    })
}

fn failed(output: &Output) -> CardexError {
    let code = output.status.code().unwrap_or(-1);
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    CardexError::PdftotextFailed { code, stderr }
}

/// Read the `Pages:` entry from pdfinfo output.
fn parse_page_count(info: &str) -> Option<usize> {
    info.lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .and_then(|rest| rest.trim().parse().ok())
}

/// pdftotext terminates every page with a form feed.
fn strip_page_break(text: &str) -> &str {
    text.strip_suffix('\x0c').unwrap_or(text)
}
