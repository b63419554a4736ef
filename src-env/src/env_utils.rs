//! Environment variable utilities for optbench
//!
//! This module resolves where benchmark output goes. The OPTBENCH_DIR
//! variable, when set, points to the root directory under which result
//! folders are created; without it results land under the current working
//! directory.

use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("OPTBENCH_DIR points to a non-existent directory: {0}")]
    OptbenchDirNotFound(PathBuf),

    #[error("Failed to create results directory {0}: {1}")]
    ResultsDirCreationFailed(PathBuf, std::io::Error),

    #[error("Failed to determine the current working directory: {0}")]
    WorkingDirUnavailable(std::io::Error),
}

/// Get the root directory under which result folders are created
///
/// # Returns
///
/// Returns OPTBENCH_DIR when the variable is set, otherwise the current
/// working directory.
///
/// # Errors
///
/// Returns an error if:
/// - OPTBENCH_DIR is set but points to a non-existent directory
/// - OPTBENCH_DIR is unset and the working directory cannot be determined
///
/// # Example
///
/// ```no_run
/// use optbench_env::env_utils::results_root;
///
/// let root = results_root()?;
/// println!("results root: {}", root.display());
/// # Ok::<(), optbench_env::env_utils::EnvError>(())
/// ```
pub fn results_root() -> Result<PathBuf, EnvError> {
    match env::var("OPTBENCH_DIR") {
        Ok(dir) => {
            let path = PathBuf::from(dir);
            if !path.exists() {
                return Err(EnvError::OptbenchDirNotFound(path));
            }
            Ok(path)
        }
        Err(_) => env::current_dir().map_err(EnvError::WorkingDirUnavailable),
    }
}

/// Get the path to a named results directory, creating it if necessary
///
/// The directory is created under [`results_root`]; nested folder names
/// such as `"exdata/run1"` are allowed.
///
/// # Errors
///
/// Returns an error if:
/// - OPTBENCH_DIR is set but invalid
/// - the directory cannot be created
///
/// # Example
///
/// ```no_run
/// use optbench_env::env_utils::get_results_dir;
///
/// let out = get_results_dir("exdata")?;
/// println!("writing results to: {}", out.display());
/// # Ok::<(), optbench_env::env_utils::EnvError>(())
/// ```
pub fn get_results_dir(folder: &str) -> Result<PathBuf, EnvError> {
    let root = results_root()?;
    results_dir_under(&root, folder)
}

/// Same as [`get_results_dir`] but with an explicit root directory
pub fn results_dir_under(root: &Path, folder: &str) -> Result<PathBuf, EnvError> {
    let dir = root.join(folder);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| EnvError::ResultsDirCreationFailed(dir.clone(), e))?;
    }
    Ok(dir)
}
