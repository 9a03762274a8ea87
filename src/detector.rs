use std::fs;
use std::path::{Path, PathBuf};

/// Auto-detect input folders by convention: the Carthage `Checkouts` folder
/// and the CocoaPods `Pods` folder, in that order.
pub fn find_input_folders(cwd: &Path) -> Vec<PathBuf> {
    let mut folders = Vec::new();
    if let Some(checkouts) = find_folder(cwd, Path::new("Carthage/Checkouts")) {
        folders.push(checkouts);
    }
    if let Some(pods) = find_folder(cwd, Path::new("Pods")) {
        folders.push(pods);
    }
    folders
}

/// Auto-detect the output folder by convention: the project's
/// `Settings.bundle`.
pub fn find_output_folder(cwd: &Path) -> Option<PathBuf> {
    find_folder(cwd, Path::new("Settings.bundle"))
}

/// Look for `search` under `base`: directly, then one subfolder down (the
/// tool may be invoked from above the project root), then retry from the
/// parent as long as it looks like a project root, i.e. contains a
/// `Cartfile` or `Podfile` (the tool may sit in a `Scripts` subfolder).
fn find_folder(base: &Path, search: &Path) -> Option<PathBuf> {
    let candidate = base.join(search);
    if candidate.is_dir() {
        return Some(candidate);
    }

    if let Ok(entries) = fs::read_dir(base) {
        for entry in entries.flatten() {
            let candidate = entry.path().join(search);
            if candidate.is_dir() {
                return Some(candidate);
            }
        }
    }

    let parent = base.parent()?;
    if parent.join("Cartfile").exists() || parent.join("Podfile").exists() {
        return find_folder(parent, search);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_folders_in_project_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Carthage").join("Checkouts")).unwrap();
        fs::create_dir_all(dir.path().join("Pods")).unwrap();
        fs::create_dir_all(dir.path().join("Settings.bundle")).unwrap();

        let inputs = find_input_folders(dir.path());
        assert_eq!(
            inputs,
            [
                dir.path().join("Carthage").join("Checkouts"),
                dir.path().join("Pods"),
            ]
        );
        assert_eq!(
            find_output_folder(dir.path()),
            Some(dir.path().join("Settings.bundle"))
        );
    }

    #[test]
    fn test_finds_folders_from_scripts_subfolder() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cartfile"), "").unwrap();
        fs::create_dir_all(dir.path().join("Carthage").join("Checkouts")).unwrap();
        let scripts = dir.path().join("Scripts");
        fs::create_dir_all(&scripts).unwrap();

        let inputs = find_input_folders(&scripts);
        assert_eq!(inputs, [dir.path().join("Carthage").join("Checkouts")]);
    }

    #[test]
    fn test_finds_folders_one_level_down() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("MyProject");
        fs::create_dir_all(project.join("Pods")).unwrap();

        let inputs = find_input_folders(dir.path());
        assert_eq!(inputs, [project.join("Pods")]);
    }

    #[test]
    fn test_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_input_folders(dir.path()).is_empty());
        assert!(find_output_folder(dir.path()).is_none());
    }
}
