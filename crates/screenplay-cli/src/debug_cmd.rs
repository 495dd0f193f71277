use std::path::Path;

use screenplay::export;

use crate::shared::{open_script, write_output};

pub fn run(file: &Path, output: &Path) -> Result<(), i32> {
    let script = open_script(file)?;
    write_output(output, &export::to_debug(&script))
}
