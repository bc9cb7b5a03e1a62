//! Reading and writing the index file.
//!
//! The file is a pretty-printed JSON array with two-space indentation.
//! Non-ASCII text is written as-is, never as `\u` escapes, so the player can
//! match filenames byte for byte.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Index;

/// Write `index` to `output_path`, replacing whatever was there.
///
/// The parent directory is created if it does not exist. The destination is
/// truncated and written in place.
///
/// # Errors
///
/// Returns an error if `output_path` has no file name, if the parent
/// directory cannot be created, or if the file cannot be written.
pub fn persist(index: &Index, output_path: &Path) -> Result<()> {
    if output_path.file_name().is_none() {
        return Err(Error::InvalidPath(output_path.to_path_buf()));
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, index)?;
    writer.flush()?;

    log::debug!(
        "Wrote {} entries to {}",
        index.len(),
        output_path.display()
    );
    Ok(())
}

/// Read an index previously written by [`persist`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid index.
pub fn load(path: &Path) -> Result<Index> {
    let file = File::open(path)?;
    let index = serde_json::from_reader(BufReader::new(file))?;
    Ok(index)
}
