use std::path::Path;

use screenplay::export;

use crate::cli::ParseFormat;
use crate::shared::{open_script, write_output};

pub fn run(file: &Path, output: &Path, format: &ParseFormat) -> Result<(), i32> {
    let script = open_script(file)?;

    let rendered = match format {
        ParseFormat::Text => export::to_text(&script),
        ParseFormat::Json => export::to_json(&script).map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?,
        ParseFormat::JsonPretty => export::to_json_pretty(&script).map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?,
        ParseFormat::Structured => export::to_structured(&script).map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?,
    };

    write_output(output, &rendered)
}
