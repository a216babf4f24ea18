//! Staged output: build the store beside its destination, then rename.
//!
//! The staging file lives in the destination directory so the final rename
//! never crosses filesystems. Dropping a [`StagedStore`] without persisting
//! it deletes the staging file, so a failed run leaves the destination
//! untouched.

use std::fs::Permissions;
use std::path::{Path, PathBuf};

use godb_config::SourceConfig;
use godb_graph::OntologyBuild;
use godb_parser::OboHeader;
use tempfile::TempPath;
use tracing::{debug, info};

use crate::GoDb;
use crate::error::DatabaseError;
use crate::writer::WriteSummary;

/// A store under construction at a temporary path.
#[derive(Debug)]
pub struct StagedStore {
    temp: TempPath,
    target: PathBuf,
    permissions: Option<Permissions>,
}

impl StagedStore {
    /// Reserve a staging file next to `target`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidPath` if `target` has no file name and
    /// `DatabaseError::Staging` if the staging file cannot be created.
    pub fn new(target: &Path) -> Result<Self, DatabaseError> {
        if target.file_name().is_none() {
            return Err(DatabaseError::InvalidPath {
                path: target.to_path_buf(),
            });
        }
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = tempfile::Builder::new()
            .prefix(".godb-")
            .suffix(".partial")
            .tempfile_in(dir)
            .map_err(|source| DatabaseError::Staging {
                path: dir.to_path_buf(),
                source,
            })?
            .into_temp_path();
        debug!(staging = %temp.display(), target = %target.display(), "staging store");

        Ok(Self {
            temp,
            target: target.to_path_buf(),
            permissions: store_permissions(target),
        })
    }

    /// Where the store is being written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.temp
    }

    /// Move the staged store over the target, replacing any existing file.
    ///
    /// The store takes the mode of the file it replaces, or `0644` when the
    /// target is new.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Staging` if setting the mode or the rename
    /// fails; the staging file is removed.
    pub fn persist(self) -> Result<PathBuf, DatabaseError> {
        let Self {
            temp,
            target,
            permissions,
        } = self;
        if let Some(permissions) = permissions {
            std::fs::set_permissions(&temp, permissions).map_err(|source| {
                DatabaseError::Staging {
                    path: temp.to_path_buf(),
                    source,
                }
            })?;
        }
        temp.persist(&target)
            .map_err(|e| DatabaseError::Staging {
                path: target.clone(),
                source: e.error,
            })?;
        Ok(target)
    }
}

/// Mode for the finished store: the replaced file's, else the platform default.
fn store_permissions(target: &Path) -> Option<Permissions> {
    std::fs::metadata(target)
        .map(|meta| meta.permissions())
        .ok()
        .or_else(default_permissions)
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
const fn default_permissions() -> Option<Permissions> {
    None
}

/// Write `build` to `target` through a staging file.
///
/// On success `target` holds the committed store. On any error the staging
/// file is deleted and `target` is left as it was.
///
/// # Errors
///
/// Returns `DatabaseError` from staging, opening, writing, or the final rename.
pub async fn write_staged(
    target: &Path,
    build: &OntologyBuild,
    header: &OboHeader,
    source: &SourceConfig,
) -> Result<WriteSummary, DatabaseError> {
    let staged = StagedStore::new(target)?;

    let db = GoDb::open_local(staged.path()).await?;
    let summary = db.write_build(build, header, source).await?;
    drop(db);

    let path = staged.persist()?;
    info!(path = %path.display(), "store written");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_file_sits_beside_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("go.sqlite");
        let staged = StagedStore::new(&target).unwrap();

        assert_eq!(staged.path().parent(), Some(dir.path()));
        let name = staged.path().file_name().unwrap().to_string_lossy();
        assert!(name.starts_with(".godb-") && name.ends_with(".partial"));
        assert!(!target.exists());
    }

    #[test]
    fn dropping_removes_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let staged = StagedStore::new(&dir.path().join("go.sqlite")).unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());

        drop(staged);
        assert!(!path.exists());
    }

    #[test]
    fn persist_replaces_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("go.sqlite");
        std::fs::write(&target, b"old").unwrap();

        let staged = StagedStore::new(&target).unwrap();
        std::fs::write(staged.path(), b"new").unwrap();
        let persisted = staged.persist().unwrap();

        assert_eq!(persisted, target);
        assert_eq!(std::fs::read(&target).unwrap(), b"new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn persisted_store_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("go.sqlite");
        let staged = StagedStore::new(&target).unwrap();
        std::fs::write(staged.path(), b"new").unwrap();
        staged.persist().unwrap();

        let mode = std::fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn persist_keeps_mode_of_replaced_target() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("go.sqlite");
        std::fs::write(&target, b"old").unwrap();
        std::fs::set_permissions(&target, Permissions::from_mode(0o640)).unwrap();

        let staged = StagedStore::new(&target).unwrap();
        std::fs::write(staged.path(), b"new").unwrap();
        staged.persist().unwrap();

        let mode = std::fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn missing_directory_is_a_staging_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("absent").join("go.sqlite");
        let err = StagedStore::new(&target).unwrap_err();
        assert!(matches!(err, DatabaseError::Staging { .. }));
    }

    #[test]
    fn target_without_file_name_is_rejected() {
        let err = StagedStore::new(Path::new("/")).unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidPath { .. }));
    }
}
