//! Per-page extraction records and the aggregated result table.

use chrono::Local;
use tracing::debug;

use super::extractor::{FieldValues, PolicyFieldExtractor};
use super::fields::Field;

/// Timestamp format stamped on each record (Brazilian convention).
pub const RECORD_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Metadata columns preceding the field columns in every export.
pub const METADATA_COLUMNS: [&str; 3] = ["Arquivo", "Página", "Data/Hora"];

/// Text extracted from a single page.
#[derive(Debug, Clone)]
pub struct PageText {
    /// Page number (1-indexed).
    pub number: u32,
    /// Raw extracted text.
    pub text: String,
}

/// Extracted text of one document, page by page.
///
/// Pages that yielded no text are absent; a document may legitimately
/// have no pages at all (e.g. a scan without a text layer).
#[derive(Debug, Clone)]
pub struct DocumentText {
    /// Source filename.
    pub filename: String,
    /// Pages with extractable text, in page order.
    pub pages: Vec<PageText>,
}

/// One row of the result table: all field values for one page, plus
/// source metadata.
#[derive(Debug, Clone)]
pub struct ExtractionRecord {
    /// Source filename.
    pub filename: String,
    /// Page number (1-indexed).
    pub page: u32,
    /// When extraction ran, formatted with [`RECORD_TIMESTAMP_FORMAT`].
    pub extracted_at: String,
    /// Extracted field values.
    pub fields: FieldValues,
}

impl ExtractionRecord {
    /// Create a record stamped with the current local time.
    pub fn new(filename: impl Into<String>, page: u32, fields: FieldValues) -> Self {
        Self {
            filename: filename.into(),
            page,
            extracted_at: Local::now().format(RECORD_TIMESTAMP_FORMAT).to_string(),
            fields,
        }
    }

    /// All cells of this record in column order, metadata first.
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(METADATA_COLUMNS.len() + Field::COUNT);
        cells.push(self.filename.clone());
        cells.push(self.page.to_string());
        cells.push(self.extracted_at.clone());
        for field in Field::ALL {
            cells.push(self.fields.get(field).to_string());
        }
        cells
    }
}

/// Insertion-ordered collection of extraction records for one run.
///
/// Row order is (document intake order, page order); nothing is merged,
/// deduplicated, or dropped. A page whose fields are all empty still
/// gets a row.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    records: Vec<ExtractionRecord>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, preserving arrival order.
    pub fn push(&mut self, record: ExtractionRecord) {
        self.records.push(record);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no page produced a record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in row order.
    pub fn records(&self) -> &[ExtractionRecord] {
        &self.records
    }

    /// The fixed column header: metadata columns then field labels.
    pub fn header() -> Vec<&'static str> {
        let mut header = Vec::with_capacity(METADATA_COLUMNS.len() + Field::COUNT);
        header.extend(METADATA_COLUMNS);
        header.extend(Field::ALL.iter().map(|f| f.label()));
        header
    }

    /// Iterate rows as cell vectors in header order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.records.iter().map(ExtractionRecord::cells)
    }
}

/// Run the field extraction engine over every page of every document and
/// collect one record per page into a fresh table.
pub fn collect_records(
    documents: impl IntoIterator<Item = DocumentText>,
    extractor: &PolicyFieldExtractor,
) -> ResultTable {
    let mut table = ResultTable::new();

    for document in documents {
        let page_count = document.pages.len();
        for page in document.pages {
            let fields = extractor.extract_fields(&page.text);
            table.push(ExtractionRecord::new(
                document.filename.clone(),
                page.number,
                fields,
            ));
        }
        debug!("collected {} page records from {}", page_count, document.filename);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn doc(filename: &str, pages: &[(u32, &str)]) -> DocumentText {
        DocumentText {
            filename: filename.to_string(),
            pages: pages
                .iter()
                .map(|(number, text)| PageText {
                    number: *number,
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_header_shape() {
        let header = ResultTable::header();
        assert_eq!(header.len(), 3 + Field::COUNT);
        assert_eq!(&header[..3], &["Arquivo", "Página", "Data/Hora"]);
        assert_eq!(header[3], "Transportadora");
    }

    #[test]
    fn test_one_row_per_page_in_arrival_order() {
        let extractor = PolicyFieldExtractor::new();
        let table = collect_records(
            [
                doc("b.pdf", &[(1, "Susep: 1"), (2, "")]),
                doc("a.pdf", &[(1, "Seguradora: ACME")]),
            ],
            &extractor,
        );

        assert_eq!(table.len(), 3);
        let rows: Vec<_> = table.records().iter().collect();
        assert_eq!(rows[0].filename, "b.pdf");
        assert_eq!(rows[0].page, 1);
        assert_eq!(rows[1].filename, "b.pdf");
        assert_eq!(rows[1].page, 2);
        assert_eq!(rows[2].filename, "a.pdf");
    }

    #[test]
    fn test_empty_page_still_gets_a_row() {
        let extractor = PolicyFieldExtractor::new();
        let table = collect_records([doc("x.pdf", &[(1, "nothing relevant")])], &extractor);
        assert_eq!(table.len(), 1);
        assert!(table.records()[0].fields.is_all_empty());
    }

    #[test]
    fn test_document_without_pages_yields_no_rows() {
        let extractor = PolicyFieldExtractor::new();
        let table = collect_records([doc("scan.pdf", &[])], &extractor);
        assert!(table.is_empty());
    }

    #[test]
    fn test_record_timestamp_format() {
        let record = ExtractionRecord::new("f.pdf", 1, FieldValues::empty());
        let stamp = Regex::new(r"^\d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2}$").unwrap();
        assert!(stamp.is_match(&record.extracted_at), "{}", record.extracted_at);
    }

    #[test]
    fn test_cells_match_header_width() {
        let record = ExtractionRecord::new("f.pdf", 7, FieldValues::empty());
        let cells = record.cells();
        assert_eq!(cells.len(), ResultTable::header().len());
        assert_eq!(cells[0], "f.pdf");
        assert_eq!(cells[1], "7");
    }
}
