pub mod pdftotext;

use crate::error::CardexError;

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// 1-based page number.
    pub page_number: usize,
    /// Page text with internal `\n` line breaks.
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, CardexError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Concatenate page texts in page order, with nothing inserted between pages.
pub fn join_pages(pages: &[PageContent]) -> String {
    pages.iter().map(|p| p.text.as_str()).collect()
}
