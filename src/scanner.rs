use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::models::DependencyRecord;

/// Walk `root` and invoke `visit` for every qualifying license file within
/// `max_depth`, in traversal order: a folder's files first (directory read
/// order, unsorted), then each subfolder in turn.
///
/// A file qualifies when its name ends with `LICENSE` or `LICENSE.txt`.
/// Both suffix checks are needed: `LICENSE.txt` does not end with the
/// literal `LICENSE`. The match is case-sensitive, so `MY-LICENSE`
/// qualifies and `license` does not. The dependency name is the name of the
/// file's containing folder.
///
/// Unreadable folders are reported as warnings and skipped; they never abort
/// the scan.
pub fn scan_root(root: &Path, max_depth: usize, visit: &mut dyn FnMut(DependencyRecord)) {
    walk(root, 0, max_depth, visit);
}

fn walk(dir: &Path, levels: usize, max_depth: usize, visit: &mut dyn FnMut(DependencyRecord)) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!(
                "{} cannot read {}: {}",
                "warning:".yellow(),
                dir.display(),
                err
            );
            return;
        }
    };

    // A file's depth is the number of folder levels between its containing
    // folder and the scan root; files directly in the root also count as
    // depth 0, like the folders right below it.
    let depth = levels.saturating_sub(1);
    let mut subdirs = Vec::new();

    for entry in entries.flatten() {
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            subdirs.push(entry.path());
            continue;
        }
        if depth >= max_depth {
            continue;
        }
        let file_name = entry.file_name();
        if is_license_file(&file_name.to_string_lossy()) {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            visit(DependencyRecord {
                name,
                license_path: entry.path(),
            });
        }
    }

    // Anything below this level would sit beyond max_depth.
    if levels < max_depth {
        for subdir in subdirs {
            walk(&subdir, levels + 1, max_depth, visit);
        }
    }
}

fn is_license_file(name: &str) -> bool {
    name.ends_with("LICENSE") || name.ends_with("LICENSE.txt")
}
