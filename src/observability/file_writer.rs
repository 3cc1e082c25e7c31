//! Size-rotated trace file.
//!
//! Backups are numbered: `<file>.1` is the most recent, `<file>.N` the
//! oldest. On rotation every backup shifts up by one and the one past the
//! retention limit is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many backups to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB files, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe line writer with size-based rotation.
///
/// The file is opened lazily on the first write, so construction never
/// fails.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_policy(file_path, RotationPolicy::default())
    }

    pub const fn with_policy(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            writer: Mutex::new(None),
        }
    }

    /// Appends `json` and a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Fails on a poisoned lock or any I/O error while rotating, opening,
    /// writing or flushing.
    pub fn write_line(&self, json: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("Mutex poisoned: {e}")))?;

        if self.is_full() {
            *writer = None;
            self.rotate()?;
        }

        if writer.is_none() {
            *writer = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }

        if let Some(file) = writer.as_mut() {
            writeln!(file, "{json}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() >= self.policy.max_bytes)
    }

    /// Path of backup number `index` (1 = newest).
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        backup_path(&self.file_path, index)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.file_path, self.backup_path(1))
    }
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
