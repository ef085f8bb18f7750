//! Save files using `MessagePack`.
//!
//! Each save slot is one `<name>.sav` file in the save directory, holding a
//! named-field `MessagePack` encoding of a [`Snapshot`].

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use wayfarer_engine::snapshot::{Snapshot, SnapshotStore, validate_save_name};
use wayfarer_foundation::{Error, ErrorKind, Result};

/// File extension of save files.
pub const SAVE_EXTENSION: &str = "sav";

/// Serializes a snapshot to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(snapshot: &Snapshot) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(snapshot)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Snapshot> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!(
        "failed to {action} '{}': {e}",
        path.display()
    )))
}

/// Saves a snapshot to a file, replacing any existing file.
///
/// The bytes go to a temporary file beside `path`, which is then renamed
/// over it. A failed save leaves the previous file untouched.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(snapshot: &Snapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(snapshot)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = tempfile::Builder::new()
        .prefix(".wayfarer-")
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(|e| io_error("create temporary file in", dir, &e))?;
    let temp_path = temp.path().to_path_buf();
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        writer
            .write_all(&bytes)
            .map_err(|e| io_error("write to file", &temp_path, &e))?;
        writer
            .flush()
            .map_err(|e| io_error("flush file", &temp_path, &e))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(|e| io_error("sync file", &temp_path, &e))?;
    temp.persist(path).map_err(|e| io_error("replace file", path, &e.error))?;
    Ok(())
}

/// Loads a snapshot from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open file", path, &e))?;
    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read file", path, &e))?;
    from_bytes(&bytes)
}

/// A [`SnapshotStore`] keeping one file per slot in a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The save directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file a slot is stored in.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidSaveName`] for unusable names.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let name = validate_save_name(name)?;
        Ok(self.dir.join(format!("{name}.{SAVE_EXTENSION}")))
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, name: &str, snapshot: &Snapshot) -> Result<()> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)
            .map_err(|e| io_error("create directory", &self.dir, &e))?;
        save_to_file(snapshot, &path)
    }

    fn load(&mut self, name: &str) -> Result<Snapshot> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(Error::persistence(format!(
                "no saved game named '{}'",
                name.trim()
            )));
        }
        let snapshot = load_from_file(&path)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries =
            fs::read_dir(&self.dir).map_err(|e| io_error("read directory", &self.dir, &e))?;
        let mut names: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == SAVE_EXTENSION))
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }
}
