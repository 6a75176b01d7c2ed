//! Profile file management with atomic writes and backup support.
//!
//! This module provides safe operations for loading and saving binding
//! profile files. Key features:
//!
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Automatic backups**: Every save creates a timestamped backup first
//! - **Permissive loads**: Corrupt entries degrade to "no binding", they
//!   never abort startup
//! - **Symlink warnings**: Alerts user but allows symlinked profiles
//!
//! # Example
//!
//! ```no_run
//! use input_bindings::config::ProfileManager;
//! use input_bindings::core::types::Binding;
//!
//! let manager = ProfileManager::new("/home/user/.config/input-bindings/bindings.conf".into())?;
//!
//! let mut profile = manager.load()?;
//! profile.bind("undo", Binding::keycode(54));
//! manager.save(&profile)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use atomic_write_file::AtomicWriteFile;
use chrono::Local;
use thiserror::Error;

pub mod profile;

pub use profile::Profile;

/// Errors that can occur during profile file management.
///
/// Note what is *not* here: unreadable binding text. The codec degrades
/// malformed entries to no binding by design, so only real I/O failures
/// surface as errors.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Profile file does not exist.
    #[error("Profile not found: {0}")]
    NotFound(PathBuf),

    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {0}")]
    BackupDirNotWritable(PathBuf),

    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),

    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Manages a binding profile file with safe atomic operations.
///
/// Provides read access and atomic saves with automatic backup creation.
/// The original file is never in a half-written state: a save either
/// completes fully or leaves the previous content untouched, with a
/// timestamped backup available either way.
#[derive(Debug)]
pub struct ProfileManager {
    /// Path to the profile file.
    profile_path: PathBuf,
    backup_dir: PathBuf,
}

impl ProfileManager {
    /// Creates a new ProfileManager for the given profile file.
    ///
    /// Validates that the file exists and creates the backup directory
    /// next to it (`<dir>/backups/`) if missing. A symlinked profile gets
    /// a stderr warning but is allowed.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NotFound` if the profile doesn't exist, and
    /// `ProfileError::BackupDirNotWritable` if the backup directory cannot
    /// be created or written.
    pub fn new(profile_path: PathBuf) -> Result<Self, ProfileError> {
        if !profile_path.exists() {
            return Err(ProfileError::NotFound(profile_path));
        }

        if profile_path.read_link().is_ok() {
            eprintln!(
                "⚠ Warning: Profile file is a symlink: {}",
                profile_path.display()
            );
            eprintln!("  This is allowed, but be aware of what it points to.");
        }

        let backup_dir = profile_path
            .parent()
            .ok_or_else(|| {
                ProfileError::BackupDirNotWritable(PathBuf::from(
                    "Profile file has no parent directory",
                ))
            })?
            .join("backups");

        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir)
                .map_err(|_| ProfileError::BackupDirNotWritable(backup_dir.clone()))?;
        }

        if backup_dir.metadata()?.permissions().readonly() {
            return Err(ProfileError::BackupDirNotWritable(backup_dir));
        }

        Ok(Self {
            profile_path,
            backup_dir,
        })
    }

    /// Reads the raw profile file content.
    pub fn read_raw(&self) -> Result<String, ProfileError> {
        Ok(fs::read_to_string(&self.profile_path)?)
    }

    /// Loads and parses the profile.
    ///
    /// Parsing is permissive: corrupt lines are dropped, not reported.
    /// Compare [`Profile::binding_count`] before and after a rewrite to
    /// surface how much was dropped.
    pub fn load(&self) -> Result<Profile, ProfileError> {
        Ok(Profile::parse(&self.read_raw()?))
    }

    /// Saves the profile atomically, creating a timestamped backup first.
    ///
    /// The backup is written before anything touches the profile file, so
    /// a failed save always leaves a recoverable state. Returns the backup
    /// path for logging.
    pub fn save(&self, profile: &Profile) -> Result<PathBuf, ProfileError> {
        let backup_path = self.create_timestamped_backup()?;

        let mut file = AtomicWriteFile::options()
            .open(&self.profile_path)
            .map_err(|e| {
                ProfileError::WriteFailed(format!("Failed to open for atomic write: {}", e))
            })?;

        file.write_all(profile.render().as_bytes())
            .map_err(|e| ProfileError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit().map_err(|e| {
            ProfileError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        Ok(backup_path)
    }

    fn create_timestamped_backup(&self) -> Result<PathBuf, ProfileError> {
        let content = fs::read_to_string(&self.profile_path)?;

        // YYYY-MM-DD_HHMMSS, sorts chronologically in a directory listing
        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

        let original_name = self
            .profile_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("bindings.conf");

        let backup_filename = format!("{}.{}", original_name, timestamp);
        let backup_path = self.backup_dir.join(&backup_filename);

        fs::write(&backup_path, &content)
            .map_err(|e| ProfileError::BackupFailed(e.to_string()))?;

        Ok(backup_path)
    }
}


#[cfg(test)]
mod tests;
