use crate::model::Field;

/// Line prefixes that identify a labeled field.
///
/// Matched case-sensitively against the start of a trimmed line. No prefix
/// is a prefix of another, so lookup order only matters for ties that
/// cannot occur.
pub const KEYWORDS: [(&str, Field); 8] = [
    ("Mr.", Field::Name),
    ("Ms.", Field::Name),
    ("Mrs.", Field::Name),
    ("Dr.", Field::Name),
    ("Title:", Field::Title),
    ("Phone:", Field::Phone),
    ("Mobile:", Field::Mobile),
    ("Email:", Field::Email),
];

/// Find the keyword a line starts with, if any.
pub fn match_keyword(line: &str) -> Option<(&'static str, Field)> {
    KEYWORDS
        .iter()
        .find(|(prefix, _)| line.starts_with(prefix))
        .copied()
}
