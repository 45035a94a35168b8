//! Computer discovery — lists the numbered (and occasionally named)
//! subdirectories under a save's computer root (spec §4.3).

use std::path::Path;

use crate::domain::entities::Computer;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::path::to_normalized_string;

/// Directory entries under the computer root that are never computers,
/// regardless of what the game or an editor happens to drop there
/// (spec §4.3).
const IGNORED_ENTRIES: &[&str] = &[".git", ".vscode", ".DS_Store"];

/// Discover every subdirectory of `computer_root`, sorted per spec §4.3:
/// numeric ids ascending first, then non-numeric ids lexicographically.
pub fn discover(fs: &dyn FileSystem, computer_root: &Path) -> crate::error::CcResult<Vec<Computer>> {
    let names = fs
        .read_dir_names(computer_root)
        .map_err(|e| crate::error::CcError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))?;

    let mut computers: Vec<Computer> = names
        .into_iter()
        .filter(|name| !IGNORED_ENTRIES.contains(&name.as_str()))
        .filter_map(|name| {
            let path = computer_root.join(&name);
            if fs.is_dir(&path) {
                let short_path = to_normalized_string(&path);
                Some(Computer::new(name, path, short_path))
            } else {
                None
            }
        })
        .collect();

    computers.sort_by(|a, b| a.discovery_sort_key().cmp(&b.discovery_sort_key()));
    Ok(computers)
}
