//! Small readability helpers for scenario test bodies.

use std::path::Path;

pub fn assert_file_content(path: &Path, expected: &str) {
    let actual = std::fs::read_to_string(path).unwrap_or_else(|e| {
        panic!("expected file {} to exist: {}", path.display(), e);
    });
    assert_eq!(actual, expected, "unexpected content at {}", path.display());
}

pub fn assert_no_file(path: &Path) {
    assert!(!path.exists(), "expected {} not to exist", path.display());
}
