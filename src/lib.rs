use std::{fs::File, io::Read, io::Write, path::Path};

pub mod ast;
pub mod codegen;
pub mod frontend;
pub mod semantic;
pub mod utils;

pub use utils::errors;

pub const VERSION: &str = "0.1.0";

/// Required extension of kat source files.
pub const SOURCE_EXTENSION: &str = "kat";

use crate::codegen::Emitter;
use crate::errors::{KatError, KatResult};
use crate::frontend::{parse, scan};

pub fn read(filename: &Path) -> KatResult<String> {
    match filename.extension() {
        Some(ext) if ext == SOURCE_EXTENSION => {}
        _ => {
            return Err(KatError::FileReadError(format!(
                "{}: input file must have a .{} extension",
                filename.display(),
                SOURCE_EXTENSION
            )));
        }
    }
    // Open the path in read-only mode, returns `io::Result<File>`
    let mut file = File::open(filename)?;
    // Read the file contents into a string, returns `io::Result<usize>`
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Runs the whole pipeline and returns the listing text.
///
/// Each stage must succeed before the next one runs.
pub fn compile(source: &str) -> KatResult<String> {
    let mut buffer = Vec::new();
    compile_to(source, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Like `compile`, but writes into `sink`. Nothing is written when a stage fails.
pub fn compile_to<W: Write>(source: &str, sink: &mut W) -> KatResult<()> {
    let tokens = scan(source)?;
    let program = parse(&tokens)?;
    let mut emitter = Emitter::new();
    emitter.emit_program(&program)?;
    emitter.finalize(sink)
}
