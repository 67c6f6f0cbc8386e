use cardex_core::classify::LineClass;
use cardex_core::error::CardexError;
use cardex_core::model::Record;

pub fn print(lines: &[LineClass<'_>], records: &[Record]) -> Result<(), CardexError> {
    let value = serde_json::json!({
        "lines": lines,
        "records": records,
    });
    let json = serde_json::to_string_pretty(&value)?;
    println!("{json}");
    Ok(())
}
