//! Line-oriented reading and writing of PED, MAP, and listing files.

use std::io::{BufWriter, Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tempfile::NamedTempFile;

use crate::core::error::PipelineError;

/// Check if a path looks gzip-compressed
pub fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz") || ext.eq_ignore_ascii_case("bgz"))
}

/// Read a UTF-8 text file into lines, decompressing `.gz` and `.bgz` input.
///
/// Compressed input may hold several gzip members (BGZF or concatenated
/// gzip); all of them are read.
///
/// Both `\n` and `\r\n` line endings are accepted; a trailing newline does
/// not produce an extra empty line.
///
/// # Errors
///
/// Returns `PipelineError::Io` if the file cannot be opened, decompressed, or
/// is not valid UTF-8.
pub fn read_lines(path: &Path) -> Result<Vec<String>, PipelineError> {
    let mut file = std::fs::File::open(path).map_err(|e| PipelineError::io(path, e))?;

    let mut content = String::new();
    let result = if is_gzipped(path) {
        MultiGzDecoder::new(file).read_to_string(&mut content)
    } else {
        file.read_to_string(&mut content)
    };
    result.map_err(|e| PipelineError::io(path, e))?;

    Ok(content.lines().map(str::to_string).collect())
}

/// Write lines to `path`, each terminated by `\n`.
///
/// Content goes to a temporary file in the destination directory which then
/// replaces `path`, so a failed write leaves any previous file intact.
///
/// # Errors
///
/// Returns `PipelineError::Io` if the temporary file cannot be created,
/// written, or moved into place.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), PipelineError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| PipelineError::io(path, e))?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        let mut write_all = || -> std::io::Result<()> {
            for line in lines {
                writer.write_all(line.as_ref().as_bytes())?;
                writer.write_all(b"\n")?;
            }
            writer.flush()
        };
        write_all().map_err(|e| PipelineError::io(path, e))?;
    }

    temp.persist(path)
        .map_err(|e| PipelineError::io(path, e.error))?;
    Ok(())
}
