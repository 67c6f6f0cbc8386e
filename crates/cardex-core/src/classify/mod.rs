pub mod keywords;

use crate::model::Field;
use keywords::match_keyword;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Page footers come through extraction as a bare number on its own line.
static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,4}$").expect("valid page number pattern"));

/// How a single trimmed line of extracted text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineClass<'a> {
    /// A page-number artifact; carries no content.
    PageNumber,
    /// A line starting with a known keyword prefix.
    Labeled { field: Field, value: &'a str },
    /// Anything else, including empty lines.
    Plain { text: &'a str },
}

impl LineClass<'_> {
    /// True for "Mr."/"Ms."/"Mrs."/"Dr." lines, the only record boundary signal.
    pub fn is_name_label(&self) -> bool {
        matches!(
            self,
            LineClass::Labeled {
                field: Field::Name,
                ..
            }
        )
    }
}

/// Classify one line. The caller is expected to have trimmed it.
///
/// For labeled lines the value is whatever follows the first `:` (trimmed).
/// Honorific lines usually have no colon, in which case the whole line,
/// honorific included, is the value.
pub fn classify(line: &str) -> LineClass<'_> {
    if PAGE_NUMBER.is_match(line) {
        return LineClass::PageNumber;
    }

    match match_keyword(line) {
        Some((_, field)) => {
            let value = match line.find(':') {
                Some(idx) => line[idx + 1..].trim(),
                None => line,
            };
            LineClass::Labeled { field, value }
        }
        None => LineClass::Plain { text: line },
    }
}

/// Split extracted text on `\n`, trim every line and classify it.
pub fn classify_lines(text: &str) -> Vec<LineClass<'_>> {
    text.split('\n').map(|line| classify(line.trim())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_numbers() {
        assert_eq!(classify("3"), LineClass::PageNumber);
        assert_eq!(classify("1234"), LineClass::PageNumber);
        assert_eq!(classify("12345"), LineClass::Plain { text: "12345" });
        assert_eq!(classify("3a"), LineClass::Plain { text: "3a" });
    }

    #[test]
    fn test_non_ascii_digits_are_not_page_numbers() {
        assert_eq!(classify("٣"), LineClass::Plain { text: "٣" });
    }

    #[test]
    fn test_labeled_value_after_colon() {
        assert_eq!(
            classify("Title: Engineer"),
            LineClass::Labeled {
                field: Field::Title,
                value: "Engineer"
            }
        );
        assert_eq!(
            classify("Email:jane@beta.com"),
            LineClass::Labeled {
                field: Field::Email,
                value: "jane@beta.com"
            }
        );
    }

    #[test]
    fn test_value_split_on_first_colon_only() {
        assert_eq!(
            classify("Phone: +1 555: ext 4"),
            LineClass::Labeled {
                field: Field::Phone,
                value: "+1 555: ext 4"
            }
        );
    }

    #[test]
    fn test_honorific_keeps_whole_line() {
        assert_eq!(
            classify("Mrs. Ada Lovelace"),
            LineClass::Labeled {
                field: Field::Name,
                value: "Mrs. Ada Lovelace"
            }
        );
        assert!(classify("Dr. Who").is_name_label());
        assert!(!classify("Title: Dr.").is_name_label());
    }

    #[test]
    fn test_empty_line_is_plain() {
        assert_eq!(classify(""), LineClass::Plain { text: "" });
    }

    #[test]
    fn test_classify_lines_trims() {
        let lines = classify_lines("  Acme Corp \r\n 7 \nPhone: 1");
        assert_eq!(
            lines,
            vec![
                LineClass::Plain { text: "Acme Corp" },
                LineClass::PageNumber,
                LineClass::Labeled {
                    field: Field::Phone,
                    value: "1"
                },
            ]
        );
    }
}
