//! Integration tests for the convert_pdf() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use cardex_core::classify::classify_lines;
use cardex_core::error::CardexError;
use cardex_core::extraction::{PageContent, PdfExtractor};
use cardex_core::format::OutputFormat;
use cardex_core::model::Record;
use cardex_core::{convert_pdf, write_output, OutputTarget};

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, CardexError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

/// Fails on a given page, like a PDF engine hitting a corrupt content stream.
struct BrokenPageExtractor {
    bad_page: usize,
}

impl PdfExtractor for BrokenPageExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, CardexError> {
        Err(CardexError::PageExtraction {
            page: self.bad_page,
            reason: "invalid content stream".into(),
        })
    }

    fn backend_name(&self) -> &str {
        "broken"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    let mut text = lines.join("\n");
    text.push('\n');
    PageContent {
        page_number: number,
        text,
    }
}

const TWO_CARDS: &[&str] = &[
    "Mr. John Doe",
    "Acme Corp",
    "123 Elm St",
    "Springfield, IL",
    "Title: Engineer",
    "Phone: 555-1234",
    "Email: john@acme.com",
    "3",
    "Ms. Jane Roe",
    "Beta LLC",
    "456 Oak Ave",
    "Title: Manager",
    "Email: jane@beta.com",
];

// ---------------------------------------------------------------------------
// Test 1: Two cards on one page, page footer between them
// ---------------------------------------------------------------------------
#[test]
fn two_cards_segmented_into_records() {
    let extractor = MockExtractor {
        pages: vec![page(1, TWO_CARDS)],
    };

    let conv = convert_pdf(&[], &extractor, OutputFormat::Csv).unwrap();

    assert_eq!(
        conv.records,
        vec![
            Record {
                name: "Mr. John Doe".into(),
                company: "Acme Corp".into(),
                title: "Engineer".into(),
                phone: "555-1234".into(),
                mobile: "".into(),
                email: "john@acme.com".into(),
                address: "123 Elm St Springfield, IL".into(),
            },
            Record {
                name: "Ms. Jane Roe".into(),
                company: "Beta LLC".into(),
                title: "Manager".into(),
                phone: "".into(),
                mobile: "".into(),
                email: "jane@beta.com".into(),
                address: "456 Oak Ave".into(),
            },
        ]
    );
}

// ---------------------------------------------------------------------------
// Test 2: CSV rendering quotes every value, empty ones included
// ---------------------------------------------------------------------------
#[test]
fn two_cards_rendered_as_csv() {
    let extractor = MockExtractor {
        pages: vec![page(1, TWO_CARDS)],
    };

    let conv = convert_pdf(&[], &extractor, OutputFormat::Csv).unwrap();

    let rows: Vec<&str> = conv.rendered.split('\n').collect();
    assert_eq!(
        rows,
        vec![
            "Name,Company,Title,Phone,Mobile,Email,Address",
            r#""Mr. John Doe","Acme Corp","Engineer","555-1234","","john@acme.com","123 Elm St Springfield, IL""#,
            r#""Ms. Jane Roe","Beta LLC","Manager","","","jane@beta.com","456 Oak Ave""#,
        ]
    );
}

// ---------------------------------------------------------------------------
// Test 3: A card split across a page break, with the footer number dropped
// ---------------------------------------------------------------------------
#[test]
fn card_spanning_pages_is_joined() {
    let extractor = MockExtractor {
        pages: vec![
            page(1, &["Dr. Ann Lee", "Gamma Inc", "12 Main St", "1"]),
            page(2, &["Suite 4", "Springfield", "Mobile: 555-9999", "2"]),
        ],
    };

    let conv = convert_pdf(&[], &extractor, OutputFormat::Csv).unwrap();

    assert_eq!(conv.records.len(), 1);
    assert_eq!(conv.records[0].address, "12 Main St Suite 4 Springfield");
    assert_eq!(conv.records[0].mobile, "555-9999");
}

// ---------------------------------------------------------------------------
// Test 4: Txt output is the extracted text, page numbers and all
// ---------------------------------------------------------------------------
#[test]
fn txt_output_is_unsegmented_text() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["Mr. A", "Co"]), page(2, &["7"])],
    };

    let conv = convert_pdf(&[], &extractor, OutputFormat::Txt).unwrap();

    assert_eq!(conv.rendered, "Mr. A\nCo\n7\n");
}

// ---------------------------------------------------------------------------
// Test 5: Record count equals the number of Name lines; page numbers vanish
// ---------------------------------------------------------------------------
#[test]
fn record_count_matches_name_lines() {
    let lines = [
        "Company Directory",
        "Title: Orphan",
        "Mr. A",
        "Co A",
        "10",
        "Ms. B",
        "Mrs. C",
        "Co C",
        "1 Road",
        "999",
        "Dr. D",
        "4321",
    ];
    let text = lines.join("\n");
    let expected = classify_lines(&text)
        .iter()
        .filter(|l| l.is_name_label())
        .count();

    let extractor = MockExtractor {
        pages: vec![page(1, &lines)],
    };
    let conv = convert_pdf(&[], &extractor, OutputFormat::Csv).unwrap();

    assert_eq!(conv.records.len(), expected);
    assert_eq!(expected, 4);
    for record in &conv.records {
        for value in record.values() {
            for number in ["10", "999", "4321"] {
                assert_ne!(value, number);
                assert!(!value.split(' ').any(|w| w == number));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Test 6: No Name lines means no records, only a header row
// ---------------------------------------------------------------------------
#[test]
fn no_name_lines_yields_header_only() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["Acme Corp", "Phone: 555", "12"])],
    };

    let conv = convert_pdf(&[], &extractor, OutputFormat::Csv).unwrap();

    assert!(conv.records.is_empty());
    assert_eq!(conv.rendered, "Name,Company,Title,Phone,Mobile,Email,Address");
}

// ---------------------------------------------------------------------------
// Test 7: Extraction failure names the page and aborts the run
// ---------------------------------------------------------------------------
#[test]
fn page_extraction_failure_is_fatal() {
    let extractor = BrokenPageExtractor { bad_page: 3 };

    let err = convert_pdf(&[], &extractor, OutputFormat::Csv).unwrap_err();

    assert!(matches!(err, CardexError::PageExtraction { page: 3, .. }));
    assert!(err.to_string().contains("page #3"));
}

// ---------------------------------------------------------------------------
// Test 8: Converting twice gives the same output
// ---------------------------------------------------------------------------
#[test]
fn conversion_is_repeatable() {
    let extractor = MockExtractor {
        pages: vec![page(1, TWO_CARDS)],
    };

    let first = convert_pdf(&[], &extractor, OutputFormat::Csv).unwrap();
    let second = convert_pdf(&[], &extractor, OutputFormat::Csv).unwrap();

    assert_eq!(first.records, second.records);
    assert_eq!(first.rendered, second.rendered);
}

// ---------------------------------------------------------------------------
// Test 9: Output file is written to {dir}/{name}.{ext}, replacing old content
// ---------------------------------------------------------------------------
#[test]
fn write_output_overwrites_target() {
    let dir = tempfile::tempdir().unwrap();
    let target = OutputTarget {
        directory: dir.path().to_path_buf(),
        name: "contacts".into(),
        format: OutputFormat::Csv,
    };
    std::fs::write(dir.path().join("contacts.csv"), "stale content that is longer").unwrap();

    let path = write_output(&target, "Name\n").unwrap();

    assert_eq!(path, dir.path().join("contacts.csv"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Name\n");
}

// ---------------------------------------------------------------------------
// Test 10: Writing into a missing directory reports the path
// ---------------------------------------------------------------------------
#[test]
fn write_output_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let target = OutputTarget {
        directory: dir.path().join("missing"),
        name: "contacts".into(),
        format: OutputFormat::Txt,
    };

    let err = write_output(&target, "x").unwrap_err();

    match err {
        CardexError::OutputWrite { path, .. } => {
            assert_eq!(path, dir.path().join("missing").join("contacts.txt"))
        }
        other => panic!("unexpected error: {other}"),
    }
}
