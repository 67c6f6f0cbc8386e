use cardex_core::classify::LineClass;
use cardex_core::model::{Field, Record};

pub fn print(lines: &[LineClass<'_>], records: &[Record]) {
    print!("{}", format_lines(lines));
    println!();
    print!("{}", format_records(records));
}

/// One row per extracted line: index, classification, content.
pub fn format_lines(lines: &[LineClass<'_>]) -> String {
    let mut out = String::new();
    out.push_str("=== Lines ===\n\n");

    let width = lines.len().to_string().len();
    for (i, line) in lines.iter().enumerate() {
        let (kind, content) = match line {
            LineClass::PageNumber => ("page#".to_string(), String::new()),
            LineClass::Labeled { field, value } => (field.to_string(), (*value).to_string()),
            LineClass::Plain { text } if text.is_empty() => ("blank".to_string(), String::new()),
            LineClass::Plain { text } => ("text".to_string(), (*text).to_string()),
        };
        let boundary = if line.is_name_label() { " *" } else { "" };
        out.push_str(&format!(
            "  {:>width$}  {:<8} {}{}\n",
            i + 1,
            kind,
            content,
            boundary,
            width = width
        ));
    }

    out
}

/// Records listed field by field.
pub fn format_records(records: &[Record]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Records ({}) ===\n", records.len()));

    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("\n  #{}\n", i + 1));
        for field in Field::ALL {
            let value = record.get(field);
            if value.is_empty() {
                continue;
            }
            out.push_str(&format!("    {:<8} {}\n", field.header(), value));
        }
    }

    out
}
