use std::fs;
use std::path::Path;

use log::info;

use super::{SiteError, io_error};

/// Replaces `dest` with a recursive copy of `src`.
///
/// Any existing `dest` tree is deleted first. Returns the number of files
/// copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    if !src.is_dir() {
        return Err(SiteError::NotFound(src.to_path_buf()));
    }

    if dest.exists() {
        info!("Deleting existing directory: {}", dest.display());
        fs::remove_dir_all(dest).map_err(io_error(dest))?;
    }

    info!("Creating directory: {}", dest.display());
    fs::create_dir_all(dest).map_err(io_error(dest))?;

    copy_contents(src, dest)
}

fn copy_contents(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    let mut entries = fs::read_dir(src)
        .map_err(io_error(src))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error(src))?;
    entries.sort();

    let mut copied = 0;
    for source_path in entries {
        let Some(name) = source_path.file_name() else {
            continue;
        };
        let dest_path = dest.join(name);

        if source_path.is_dir() {
            info!("Creating directory: {}", dest_path.display());
            fs::create_dir(&dest_path).map_err(io_error(&dest_path))?;
            copied += copy_contents(&source_path, &dest_path)?;
        } else {
            info!(
                "Copying file: {} -> {}",
                source_path.display(),
                dest_path.display()
            );
            fs::copy(&source_path, &dest_path).map_err(io_error(&source_path))?;
            copied += 1;
        }
    }
    Ok(copied)
}
