//! Recursive discovery of files eligible for stamping.
//!
//! Walks a directory tree depth-first, visiting the children of each directory
//! in sorted order so that runs are deterministic. Only regular files (or
//! symlinks resolving to regular files) whose name ends with the requested
//! suffix are returned. Symlinked directories are never descended into.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DirListError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> DirListError + '_ {
    move |e| {
        if e.kind() == ErrorKind::PermissionDenied {
            DirListError::PermissionDenied(path.to_path_buf())
        } else {
            DirListError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    }
}

/// Lists every eligible file under `root`, at any depth.
///
/// A file is eligible when its name ends with `extension` and it resolves to a
/// regular file. Broken symlinks and symlinks to directories are skipped.
/// The returned paths are `root` joined with the relative path of each file.
pub fn list_eligible_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, DirListError> {
    let mut files = Vec::new();
    walk(root, extension, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, extension: &str, files: &mut Vec<PathBuf>) -> Result<(), DirListError> {
    let read_dir = std::fs::read_dir(dir).map_err(io_error(dir))?;

    let mut children = Vec::new();
    for entry in read_dir {
        children.push(entry.map_err(io_error(dir))?.path());
    }
    children.sort();

    for path in children {
        let metadata = std::fs::symlink_metadata(&path).map_err(io_error(&path))?;
        let file_type = metadata.file_type();

        if file_type.is_dir() {
            walk(&path, extension, files)?;
            continue;
        }

        if !has_extension(&path, extension) {
            continue;
        }

        let is_regular = if file_type.is_symlink() {
            match std::fs::metadata(&path) {
                Ok(target) => target.is_file(),
                Err(e) if e.kind() == ErrorKind::NotFound => false,
                Err(e) => return Err(io_error(&path)(e)),
            }
        } else {
            file_type.is_file()
        };

        if is_regular {
            files.push(path);
        }
    }

    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(extension))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lists_matching_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("a.rs"), "fn a() {}").unwrap();
        fs::write(root.join("b.txt"), "text").unwrap();
        fs::write(root.join("c.rs.bak"), "old").unwrap();

        let files = list_eligible_files(root, ".rs").unwrap();

        assert_eq!(files, vec![root.join("a.rs")]);
    }

    #[test]
    fn test_descends_into_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("dir1/dir2/dir3")).unwrap();
        fs::write(root.join("dir1/dir2/dir3/deep.rs"), "").unwrap();
        fs::write(root.join("dir1/mid.rs"), "").unwrap();
        fs::write(root.join("top.rs"), "").unwrap();

        let files = list_eligible_files(root, ".rs").unwrap();

        assert_eq!(
            files,
            vec![
                root.join("dir1/dir2/dir3/deep.rs"),
                root.join("dir1/mid.rs"),
                root.join("top.rs"),
            ]
        );
    }

    #[test]
    fn test_directory_named_like_source_file_is_not_listed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("weird.rs")).unwrap();
        fs::write(root.join("weird.rs/inner.rs"), "").unwrap();

        let files = list_eligible_files(root, ".rs").unwrap();

        assert_eq!(files, vec![root.join("weird.rs/inner.rs")]);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let files = list_eligible_files(temp_dir.path(), ".rs").unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_deterministic_ordering() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("zebra.rs"), "").unwrap();
        fs::write(root.join("apple.rs"), "").unwrap();
        fs::write(root.join("banana.rs"), "").unwrap();

        let files1 = list_eligible_files(root, ".rs").unwrap();
        let files2 = list_eligible_files(root, ".rs").unwrap();

        assert_eq!(
            files1,
            vec![
                root.join("apple.rs"),
                root.join("banana.rs"),
                root.join("zebra.rs"),
            ]
        );
        assert_eq!(files1, files2);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = list_eligible_files(&temp_dir.path().join("missing"), ".rs");

        match result {
            Err(DirListError::Io { path, .. }) => assert!(path.ends_with("missing")),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_to_file_is_listed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("target.txt"), "fn t() {}").unwrap();
        std::os::unix::fs::symlink(root.join("target.txt"), root.join("link.rs")).unwrap();

        let files = list_eligible_files(root, ".rs").unwrap();

        assert_eq!(files, vec![root.join("link.rs")]);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_directory_is_not_followed() {
        let temp_dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(outside.path().join("outside.rs"), "").unwrap();
        std::os::unix::fs::symlink(outside.path(), root.join("linked.rs")).unwrap();

        let files = list_eligible_files(root, ".rs").unwrap();

        assert!(files.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_broken_symlink_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        std::os::unix::fs::symlink("/nonexistent/target.rs", root.join("broken.rs")).unwrap();

        let files = list_eligible_files(root, ".rs").unwrap();

        assert!(files.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let restricted_dir = root.join("restricted");
        fs::create_dir(&restricted_dir).unwrap();

        let mut perms = fs::metadata(&restricted_dir).unwrap().permissions();
        perms.set_mode(0o000);
        fs::set_permissions(&restricted_dir, perms.clone()).unwrap();

        let result = list_eligible_files(root, ".rs");

        perms.set_mode(0o755);
        fs::set_permissions(&restricted_dir, perms).unwrap();

        // Root ignores permission bits, so only check the error shape when denied.
        if let Err(e) = result {
            match e {
                DirListError::PermissionDenied(path) => assert_eq!(path, restricted_dir),
                other => panic!("Expected PermissionDenied error, got {other:?}"),
            }
        }
    }
}
