//! Shared test utilities for the filegate workspace.
//!
//! Engine, app, and CLI tests all build small throwaway directory trees; the
//! helpers here keep that in one place so the fixtures read the same way
//! everywhere.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
}

pub fn write_file(path: &Utf8Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, contents).expect("write file");
}

/// Build a tree from `(relative path, contents)` pairs, returning its root.
pub fn fixture_tree(tmp: &TempDir, files: &[(&str, &str)]) -> Utf8PathBuf {
    let root = utf8_root(tmp);
    for (rel, contents) in files {
        write_file(&root.join(rel), contents);
    }
    root
}
