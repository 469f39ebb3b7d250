//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfProcessor, Result};
use crate::error::PdfError;
use crate::policy::PageText;

/// PDF text extractor.
///
/// `lopdf` handles document structure (page count, empty-password
/// decryption); `pdf-extract` does the actual text extraction from the
/// raw bytes.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Approximate the text of one page by slicing the full-document
    /// text proportionally. pdf-extract does not expose page boundaries,
    /// so lines are split evenly across the page count.
    fn page_slice(full_text: &str, page: u32, page_count: u32) -> String {
        let lines: Vec<&str> = full_text.lines().collect();
        if page_count == 0 {
            return String::new();
        }

        let lines_per_page = lines.len() / page_count as usize;
        let start = (page - 1) as usize * lines_per_page;
        let end = if page == page_count {
            lines.len()
        } else {
            page as usize * lines_per_page
        };

        lines[start.min(lines.len())..end.min(lines.len())].join("\n")
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    fn extract_pages(&self) -> Vec<PageText> {
        let page_count = self.page_count();
        if page_count == 0 {
            return Vec::new();
        }

        // A failed whole-document extraction means no page has text;
        // the document simply contributes no rows.
        let full_text = match self.extract_text() {
            Ok(text) => text,
            Err(e) => {
                debug!("text extraction failed, skipping document: {}", e);
                return Vec::new();
            }
        };

        let mut pages = Vec::with_capacity(page_count as usize);
        for number in 1..=page_count {
            let text = Self::page_slice(&full_text, number, page_count);
            if text.trim().is_empty() {
                debug!("page {} has no extractable text, skipping", number);
                continue;
            }
            pages.push(PageText { number, text });
        }

        debug!(
            "extracted text from {}/{} pages",
            pages.len(),
            page_count
        );
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(extractor.extract_pages().is_empty());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        assert!(extractor.load(b"not a pdf").is_err());
    }

    #[test]
    fn test_page_slice_splits_lines_evenly() {
        let text = "a\nb\nc\nd";
        assert_eq!(PdfExtractor::page_slice(text, 1, 2), "a\nb");
        assert_eq!(PdfExtractor::page_slice(text, 2, 2), "c\nd");
    }

    #[test]
    fn test_page_slice_last_page_takes_remainder() {
        let text = "a\nb\nc\nd\ne";
        assert_eq!(PdfExtractor::page_slice(text, 2, 2), "c\nd\ne");
    }
}
