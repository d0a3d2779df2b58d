//! Shared helpers for the lock tests.

use std::fs;
use std::path::{Path, PathBuf};

/// A matching source line: path relative to `kernel/src`, 1-based line
/// number, trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHit {
    pub file: String,
    pub line: usize,
    pub text: String,
}

/// Workspace root, resolved from this crate's manifest directory.
///
/// # Panics
///
/// Panics if the crate is not at `tests/lock` inside the workspace.
#[must_use]
pub fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

#[must_use]
pub fn kernel_src() -> PathBuf {
    workspace_root().join("kernel").join("src")
}

/// Every non-comment line of production code under `dir` that satisfies
/// `pred`. Scanning a file stops at its `#[cfg(test)]` module. Files are
/// visited in sorted path order.
#[must_use]
pub fn scan_source(dir: &Path, pred: &dyn Fn(&str) -> bool) -> Vec<SourceHit> {
    let mut hits = Vec::new();
    scan_into(dir, pred, &mut hits);
    hits
}

/// Distinct files among `hits`, in visit order.
#[must_use]
pub fn hit_files(hits: &[SourceHit]) -> Vec<&str> {
    let mut files: Vec<&str> = hits.iter().map(|h| h.file.as_str()).collect();
    files.dedup();
    files
}

fn scan_into(dir: &Path, pred: &dyn Fn(&str) -> bool, hits: &mut Vec<SourceHit>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();

    let root = kernel_src();
    for path in paths {
        if path.is_dir() {
            scan_into(&path, pred, hits);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let file = path
            .strip_prefix(&root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        for (idx, line) in content.lines().enumerate() {
            let text = line.trim();
            if text == "#[cfg(test)]" {
                break;
            }
            if text.starts_with("//") {
                continue;
            }
            if pred(text) {
                hits.push(SourceHit {
                    file: file.clone(),
                    line: idx + 1,
                    text: text.to_string(),
                });
            }
        }
    }
}
