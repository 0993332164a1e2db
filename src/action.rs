use std::fs;
use std::path::{Path, PathBuf};

use context::ReorganizeContext;
use error::*;

#[derive(Debug, Clone, PartialEq)]
pub struct MoveTask {
    source: PathBuf,
    destination: PathBuf
}

impl MoveTask {
    pub fn new(source: PathBuf, destination: PathBuf) -> MoveTask {
        MoveTask { source, destination }
    }

    /// Moves the source onto the destination, replacing a file already there.
    /// Returns whether something was replaced.
    pub fn execute(&self, file_context: &ReorganizeContext) -> Result<bool> {
        let overwrites = self.destination.exists();
        if overwrites {
            info!("Overwriting existing file {}", self.destination.to_string_lossy());
        }
        info!("Moving {} -> {}", self.source.to_string_lossy(), self.destination.to_string_lossy());
        if !file_context.dry_run {
            move_file(&self.source, &self.destination)?;
        }
        Ok(overwrites)
    }
}

pub fn determine_task(file_name: &str, output_directory: &Path, file_context: &ReorganizeContext) -> Option<MoveTask> {
    let source = file_context.base_dir.join(file_name);
    if !source.exists() {
        debug!("Skipping missing file: {}", source.to_string_lossy());
        return None;
    }
    Some(MoveTask::new(source, output_directory.join(file_name)))
}

/// Ensures `base_directory/relative_output_directory` exists. The flag is true
/// when the directory was missing.
pub fn create_output_directory(
    base_directory: &Path,
    relative_output_directory: &Path,
    dry_run: bool,
) -> Result<(PathBuf, bool)> {
    let output_directory: PathBuf = base_directory.join(relative_output_directory);
    if output_directory.is_dir() {
        trace!("Destination directory already exists: {}", output_directory.to_string_lossy());
        return Ok((output_directory, false));
    }

    info!("Creating destination directory: {}", output_directory.to_string_lossy());
    if dry_run {
        // Anything in the way that is not a directory would stop create_dir_all
        let blocker = output_directory
            .ancestors()
            .take_while(|path| path.starts_with(base_directory))
            .find(|path| path.exists() && !path.is_dir());
        if let Some(blocker) = blocker {
            bail!("Unable to create destination directory: {} ({} is not a directory)",
                  output_directory.to_string_lossy(), blocker.to_string_lossy());
        }
    } else {
        fs::create_dir_all(&output_directory)
            .chain_err(|| format!("Unable to create destination directory: {}",
                                  output_directory.to_string_lossy()))?
    }

    Ok((output_directory, true))
}

fn move_file(source: &Path, destination: &Path) -> Result<()> {
    let rename_error = match fs::rename(source, destination) {
        Ok(()) => return Ok(()),
        Err(error) => error
    };
    if !source.is_file() {
        return Err(Error::with_chain(rename_error,
                                     format!("Unable to move {} to destination {}", source.to_string_lossy(),
                                             destination.to_string_lossy())));
    }

    // Rename cannot cross filesystems; copy the bytes over and drop the original instead
    debug!("Rename failed ({}), copying {} instead", rename_error, source.to_string_lossy());
    fs::copy(source, destination)
        .chain_err(|| format!("Unable to move file {} to destination {} (rename failed: {})",
                              source.to_string_lossy(), destination.to_string_lossy(), rename_error))?;
    fs::remove_file(source)
        .chain_err(|| format!("Moved file {} to {} but could not remove the original",
                              source.to_string_lossy(), destination.to_string_lossy()))
}
