//! Save-directory validation — checks that a Minecraft save looks like
//! it has a ComputerCraft `computercraft/computer` directory before any
//! planning proceeds (spec §4.1).

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;

#[derive(Debug, Clone)]
pub struct SaveValidation {
    pub is_valid: bool,
    pub computer_root: PathBuf,
    pub errors: Vec<String>,
    /// Optional save-layout files that weren't found. Listed for
    /// diagnostics but never affect `is_valid` (spec §4.2: "Missing
    /// optional files are listed but do not fail").
    pub missing_files: Vec<String>,
}

/// Validate that `save_path` looks like a Minecraft save directory
/// containing a ComputerCraft computer folder. `level.dat`, `session.lock`,
/// and `region/` are checked but only ever reported, never fatal; the
/// `computercraft/computer/` subtree missing (or not a directory) is the
/// one fatal condition (spec §4.2).
pub fn validate(fs: &dyn FileSystem, save_path: &Path) -> SaveValidation {
    let mut errors = Vec::new();
    let mut missing_files = Vec::new();

    if !fs.exists(save_path) {
        errors.push(format!("save directory does not exist: {}", save_path.display()));
        return SaveValidation { is_valid: false, computer_root: save_path.to_path_buf(), errors, missing_files };
    }
    if !fs.is_dir(save_path) {
        errors.push(format!("save path is not a directory: {}", save_path.display()));
        return SaveValidation { is_valid: false, computer_root: save_path.to_path_buf(), errors, missing_files };
    }

    for optional in ["level.dat", "session.lock", "region"] {
        if !fs.exists(&save_path.join(optional)) {
            missing_files.push(optional.to_string());
        }
    }

    let computer_root = save_path.join("computercraft").join("computer");
    if !fs.exists(&computer_root) {
        errors.push(format!(
            "no ComputerCraft computer directory found at {}",
            computer_root.display()
        ));
    } else if !fs.is_dir(&computer_root) {
        errors.push(format!("{} exists but is not a directory", computer_root.display()));
    }

    SaveValidation { is_valid: errors.is_empty(), computer_root, errors, missing_files }
}
