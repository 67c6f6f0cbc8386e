use crate::error::CardexError;
use crate::model::{Field, Record};
use std::fmt;
use std::str::FromStr;

/// Output file flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One quoted row per contact record.
    Csv,
    /// The extracted text, unsegmented.
    Txt,
    /// Records as a pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Txt => "txt",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = CardexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "txt" => Ok(OutputFormat::Txt),
            "json" => Ok(OutputFormat::Json),
            other => Err(CardexError::InvalidFormat(other.to_string())),
        }
    }
}

/// Render records as CSV: a header row, then one row per record.
///
/// Every value is wrapped in double quotes. Embedded quotes are not escaped.
pub fn render_csv(records: &[Record]) -> String {
    let header = Field::ALL.map(|f| f.header()).join(",");

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(header);
    for record in records {
        let row: Vec<String> = record.values().iter().map(|v| format!("\"{v}\"")).collect();
        rows.push(row.join(","));
    }

    rows.join("\n")
}

/// Render the chosen output. `text` is the raw extracted text, used as-is
/// for [`OutputFormat::Txt`].
pub fn render(format: OutputFormat, text: &str, records: &[Record]) -> Result<String, CardexError> {
    match format {
        OutputFormat::Csv => Ok(render_csv(records)),
        OutputFormat::Txt => Ok(text.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}
