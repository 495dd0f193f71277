use std::path::Path;

use screenplay::Script;

/// Parse a PDF screenplay with user-friendly error messages.
///
/// Returns `Err(1)` with a single-line message printed to stderr if the
/// file is not found or cannot be parsed.
pub fn open_script(file: &Path) -> Result<Script, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    screenplay::parse_pdf_file(file).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

/// Write output to a file with a friendly error message on failure.
pub fn write_output(path: &Path, contents: &str) -> Result<(), i32> {
    std::fs::write(path, contents).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", path.display());
        1
    })
}
