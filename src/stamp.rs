use crate::config::StampConfig;
use crate::dir_list::{DirListError, list_eligible_files};
use crate::header::{is_stamped, stamp_content};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum StampError {
    #[error("Directory listing error: {0}")]
    DirList(#[from] DirListError),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(PathBuf),
}

impl StampError {
    fn from_io(path: &Path, e: std::io::Error) -> Self {
        match e.kind() {
            ErrorKind::PermissionDenied => StampError::PermissionDenied(path.to_path_buf()),
            ErrorKind::InvalidData => StampError::InvalidUtf8(path.to_path_buf()),
            _ => StampError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        }
    }
}

pub struct StampOptions {
    pub config: StampConfig,
    pub dry_run: bool,
}

#[derive(Debug, Default)]
pub struct StampResult {
    /// Files that received the header (or would have, in a dry run).
    pub stamped: Vec<PathBuf>,
    /// Files that already contained the header.
    pub skipped: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct CheckResult {
    pub missing: Vec<PathBuf>,
    pub files_checked: usize,
}

/// Prepend the configured header to every eligible file under `root`.
///
/// Eligible files are those found by [`list_eligible_files`] for the configured
/// extension. Each file is read in full; if it already contains the header
/// anywhere it is skipped and a `Skipping <path>` notice is printed to stdout.
/// Otherwise it is replaced by the header, a blank line and its original
/// content, byte for byte.
///
/// # Behavior
///
/// **Fail fast:** the first I/O or decoding error aborts the run. Files
/// stamped before the failure stay stamped; there is no rollback.
///
/// **In place:** each file is truncated and rewritten through its existing
/// inode, so hard links, ownership and permissions are untouched. A file that
/// is not writable fails the run with `PermissionDenied`.
///
/// **Idempotence:** a second run over the same tree only skips.
///
/// **Dry run:** if `options.dry_run`, reports what would be stamped but writes
/// nothing.
///
/// No locking is performed; a concurrent external edit between read and
/// rewrite is lost.
pub fn stamp_tree(root: &Path, options: &StampOptions) -> Result<StampResult, StampError> {
    let header = options.config.header.as_str();
    let mut result = StampResult::default();

    for path in eligible_files(root, &options.config)? {
        let content = read_source(&path)?;

        if is_stamped(&content, header) {
            println!("Skipping {}", path.display());
            result.skipped.push(path);
            continue;
        }

        if options.dry_run {
            info!("Would stamp {}", path.display());
        } else {
            write_in_place(&path, &stamp_content(&content, header))?;
            info!("Stamped {}", path.display());
        }
        result.stamped.push(path);
    }

    Ok(result)
}

/// List every eligible file under `root` that does not contain the header.
///
/// Read-only counterpart of [`stamp_tree`].
pub fn check_tree(root: &Path, config: &StampConfig) -> Result<CheckResult, StampError> {
    let mut result = CheckResult::default();

    for path in eligible_files(root, config)? {
        let content = read_source(&path)?;
        result.files_checked += 1;

        if !is_stamped(&content, &config.header) {
            result.missing.push(path);
        }
    }

    Ok(result)
}

fn eligible_files(root: &Path, config: &StampConfig) -> Result<Vec<PathBuf>, StampError> {
    let metadata = std::fs::metadata(root).map_err(|e| StampError::from_io(root, e))?;
    if !metadata.is_dir() {
        return Err(StampError::NotADirectory(root.to_path_buf()));
    }

    Ok(list_eligible_files(root, &config.extension)?)
}

fn read_source(path: &Path) -> Result<String, StampError> {
    debug!("Reading {}", path.display());
    std::fs::read_to_string(path).map_err(|e| StampError::from_io(path, e))
}

fn write_in_place(path: &Path, content: &str) -> Result<(), StampError> {
    use std::io::Write;

    // Opening through a symlink rewrites its target and keeps the link.
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| StampError::from_io(path, e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| StampError::from_io(path, e))?;

    Ok(())
}
