use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RomFileError {
    #[error("Error writing ROM image to '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Error reading ROM image from '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("ROM image '{path}' is {actual} bytes, expected {expected}")]
    IncorrectSize { path: String, expected: usize, actual: u64 },
}

impl RomFileError {
    fn write(path: &Path, source: io::Error) -> Self {
        Self::Write { path: path.display().to_string(), source }
    }

    fn read(path: &Path, source: io::Error) -> Self {
        Self::Read { path: path.display().to_string(), source }
    }
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let Some(file_name) = path.file_name() else {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"));
    };

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

fn write_and_sync(file: File, bytes: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

/// Write `bytes` to `path` verbatim, replacing any existing file.
///
/// Bytes are written to a `.tmp` file next to `path` which is renamed over `path` only once it is
/// completely written and synced, so a failed write never leaves a truncated image at `path`.
///
/// # Errors
///
/// Propagates any I/O error from creating, writing, syncing, or renaming the file.
pub fn write_image(path: &Path, bytes: &[u8]) -> Result<(), RomFileError> {
    let tmp_path = temp_path(path).map_err(|source| RomFileError::write(path, source))?;
    let file = File::create(&tmp_path).map_err(|source| RomFileError::write(path, source))?;

    if let Err(source) = write_and_sync(file, bytes).and_then(|()| fs::rename(&tmp_path, path)) {
        if let Err(err) = fs::remove_file(&tmp_path) {
            log::warn!("Unable to remove temporary file '{}': {err}", tmp_path.display());
        }
        return Err(RomFileError::write(path, source));
    }

    log::debug!("Wrote {} bytes to '{}'", bytes.len(), path.display());

    Ok(())
}

/// Read a ROM image back from disk, checking that it is exactly `expected_len` bytes.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if its size does not match.
pub fn read_image(path: &Path, expected_len: usize) -> Result<Vec<u8>, RomFileError> {
    let file = File::open(path).map_err(|source| RomFileError::read(path, source))?;
    let metadata = file.metadata().map_err(|source| RomFileError::read(path, source))?;
    if metadata.len() != expected_len as u64 {
        return Err(RomFileError::IncorrectSize {
            path: path.display().to_string(),
            expected: expected_len,
            actual: metadata.len(),
        });
    }

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(expected_len);
    reader.read_to_end(&mut bytes).map_err(|source| RomFileError::read(path, source))?;

    log::debug!("{} byte(s) read from '{}'", bytes.len(), path.display());

    Ok(bytes)
}
