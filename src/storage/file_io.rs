//! JSON file helpers
//!
//! Reads tolerate missing files; writes go through a sibling temp file and a
//! rename so a data file is never left half-written.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::RideCareError;

/// Read JSON from `path`, or `T::default()` when the file does not exist yet
pub fn read_json<T, P>(path: P) -> Result<T, RideCareError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "data file missing, starting empty");
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| RideCareError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| RideCareError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write `data` as pretty JSON to `path` atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), RideCareError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            RideCareError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| RideCareError::Storage(format!("Failed to serialize data: {}", e)))
    })?;

    debug!(path = %path.display(), "data file written");
    Ok(())
}

/// Write `path` through a sibling temp file that replaces it only once
/// `write` has succeeded. On failure the existing file is left untouched.
pub fn write_atomic<T, F>(path: &Path, write: F) -> Result<T, RideCareError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T, RideCareError>,
{
    let temp_path = temp_path_for(path);
    let value = match write_and_sync(&temp_path, write) {
        Ok(value) => value,
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
    };

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        RideCareError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(value)
}

/// Whether `path` exists and holds well-formed JSON
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    File::open(path.as_ref())
        .map(|file| serde_json::from_reader::<_, serde_json::Value>(BufReader::new(file)).is_ok())
        .unwrap_or(false)
}

/// `vehicles.json` -> `vehicles.json.tmp`, in the same directory so the
/// rename stays on one filesystem
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_and_sync<T, F>(temp_path: &Path, write: F) -> Result<T, RideCareError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T, RideCareError>,
{
    let file = File::create(temp_path).map_err(|e| {
        RideCareError::Storage(format!("Failed to create {}: {}", temp_path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    let value = write(&mut writer)?;
    writer
        .flush()
        .map_err(|e| RideCareError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| RideCareError::Storage(format!("Failed to sync data: {}", e)))?;
    Ok(value)
}
