use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

/// Ensure the `Licenses` output folder exists. When it already exists and
/// `clean_up` is set, recursively delete previously generated documents
/// (files whose name ends with `.<extension>`) so a stale entry cannot
/// survive a fresh run. Other files and the folder structure are left
/// untouched.
pub fn prepare_licenses_dir(
    dir: &Path,
    clean_up: bool,
    extension: &str,
    quiet: bool,
) -> Result<()> {
    if !dir.exists() {
        if !quiet {
            println!("Creating Licenses folder");
        }
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        return Ok(());
    }

    if clean_up {
        if !quiet {
            println!("Removing old license documents");
        }
        remove_documents(dir, &format!(".{extension}"));
    }

    Ok(())
}

/// Delete generated documents under `dir`. Failure to remove a single file
/// is reported and does not stop the rest of the cleanup.
fn remove_documents(dir: &Path, suffix: &str) {
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

    for entry in entries.flatten() {
        let path = entry.path();
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            remove_documents(&path, suffix);
        } else if entry.file_name().to_string_lossy().ends_with(suffix) {
            if let Err(err) = fs::remove_file(&path) {
                eprintln!(
                    "{} could not remove {}: {}",
                    "warning:".yellow(),
                    path.display(),
                    err
                );
            }
        }
    }
}
