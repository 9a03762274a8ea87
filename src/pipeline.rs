use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cleanup;
use crate::emitter::{self, DocumentWriter};
use crate::models::DependencyRecord;
use crate::normalize::normalize;
use crate::scanner;

/// Resolved settings for one generation run.
pub struct Options {
    pub max_depth: usize,
    pub clean_up: bool,
    pub quiet: bool,
}

/// Run the full generation pass: prepare (and optionally clean) the
/// `Licenses` folder, scan every input folder for license files, write one
/// license document per dependency as it is found, then write the
/// acknowledgements index.
///
/// A license that cannot be read or written is reported and skipped; it does
/// not appear in the index and does not abort the run. A failure while
/// preparing the output folder or writing the index is fatal.
///
/// Returns the records behind the generated index, in scan order.
pub fn generate(
    input_folders: &[PathBuf],
    output_folder: &Path,
    options: &Options,
    writer: &dyn DocumentWriter,
) -> Result<Vec<DependencyRecord>> {
    let licenses_dir = output_folder.join("Licenses");
    cleanup::prepare_licenses_dir(
        &licenses_dir,
        options.clean_up,
        writer.extension(),
        options.quiet,
    )?;

    if !options.quiet {
        println!("Searching licenses...");
    }

    let mut records: Vec<DependencyRecord> = Vec::new();
    for input_folder in input_folders {
        scanner::scan_root(input_folder, options.max_depth, &mut |record| {
            let dest = licenses_dir.join(format!("{}.{}", record.name, writer.extension()));
            match write_license_document(&record, &dest, writer) {
                Ok(()) => {
                    if !options.quiet {
                        println!("Creating license plist for {}", record.name.cyan());
                    }
                    records.push(record);
                }
                Err(err) => {
                    eprintln!(
                        "{} skipping {}: {:#}",
                        "warning:".yellow(),
                        record.license_path.display(),
                        err
                    );
                }
            }
        });
    }

    if records.is_empty() && !options.quiet {
        println!("No licenses found");
    }

    if !options.quiet {
        println!("Creating acknowledgements plist");
    }
    let index_path = output_folder.join(format!("Acknowledgements.{}", writer.extension()));
    emitter::emit_index_document(&records, &index_path, writer)
        .with_context(|| format!("writing {}", index_path.display()))?;

    Ok(records)
}

fn write_license_document(
    record: &DependencyRecord,
    dest: &Path,
    writer: &dyn DocumentWriter,
) -> Result<()> {
    let raw = std::fs::read_to_string(&record.license_path)
        .with_context(|| format!("reading {}", record.license_path.display()))?;
    let text = normalize(&raw)?;
    emitter::emit_license_document(&text, dest, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::plist::{read_document, PlistWriter};
    use crate::models::Specifier;
    use std::fs;

    fn touch(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn options(max_depth: usize, clean_up: bool) -> Options {
        Options {
            max_depth,
            clean_up,
            quiet: true,
        }
    }

    #[test]
    fn test_end_to_end_generation() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Checkouts");
        touch(&root.join("Alamofire").join("LICENSE"), "MIT license\ntext here");
        touch(&root.join("SwiftyJSON").join("LICENSE.txt"), "Some  text");
        touch(&root.join("Deep").join("Nested").join("LICENSE"), "deep");
        let out = dir.path().join("Settings.bundle");

        let records = generate(&[root], &out, &options(1, true), &PlistWriter).unwrap();

        let mut names: Vec<_> = records.iter().map(|r| r.name.clone()).collect();
        names.sort();
        assert_eq!(names, ["Alamofire", "SwiftyJSON"]);
        assert!(out.join("Licenses").join("Alamofire.plist").exists());
        assert!(out.join("Licenses").join("SwiftyJSON.plist").exists());
        assert!(!out.join("Licenses").join("Nested.plist").exists());

        // Soft wrap joined, double space collapsed.
        let license = read_document(&out.join("Licenses").join("Alamofire.plist")).unwrap();
        assert_eq!(
            license.specifiers,
            vec![Specifier::Group {
                footer_text: "MIT license text here".to_string()
            }]
        );

        let index = read_document(&out.join("Acknowledgements.plist")).unwrap();
        assert_eq!(index.specifiers.len(), 2);
    }

    #[test]
    fn test_max_depth_two_includes_nested() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Checkouts");
        touch(&root.join("Deep").join("Nested").join("LICENSE"), "deep");
        let out = dir.path().join("Settings.bundle");

        let records = generate(&[root], &out, &options(2, true), &PlistWriter).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Nested");
        assert!(out.join("Licenses").join("Nested.plist").exists());
    }

    #[test]
    fn test_roots_processed_in_given_order() {
        let dir = tempfile::tempdir().unwrap();
        let carthage = dir.path().join("Checkouts");
        let pods = dir.path().join("Pods");
        touch(&carthage.join("Alpha").join("LICENSE"), "a");
        touch(&pods.join("Beta").join("LICENSE"), "b");
        let out = dir.path().join("Settings.bundle");

        let records = generate(
            &[carthage, pods],
            &out,
            &options(1, true),
            &PlistWriter,
        )
        .unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);

        let index = read_document(&out.join("Acknowledgements.plist")).unwrap();
        assert_eq!(
            index.specifiers,
            vec![
                Specifier::ChildPane {
                    file: "Licenses/Alpha".to_string(),
                    title: "Alpha".to_string()
                },
                Specifier::ChildPane {
                    file: "Licenses/Beta".to_string(),
                    title: "Beta".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_names_across_roots_kept() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        touch(&first.join("Shared").join("LICENSE"), "from first");
        touch(&second.join("Shared").join("LICENSE"), "from second");
        let out = dir.path().join("Settings.bundle");

        generate(&[first, second], &out, &options(1, true), &PlistWriter).unwrap();

        // Two index entries, not deduplicated; the second document wins on
        // disk since both share a file name.
        let index = read_document(&out.join("Acknowledgements.plist")).unwrap();
        assert_eq!(index.specifiers.len(), 2);
        let license = read_document(&out.join("Licenses").join("Shared.plist")).unwrap();
        assert_eq!(
            license.specifiers,
            vec![Specifier::Group {
                footer_text: "from second".to_string()
            }]
        );
    }

    #[test]
    fn test_clean_up_removes_stale_documents() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Checkouts");
        fs::create_dir_all(&root).unwrap();
        let out = dir.path().join("Settings.bundle");
        touch(&out.join("Licenses").join("Old.plist"), "stale");

        generate(&[root], &out, &options(1, true), &PlistWriter).unwrap();
        assert!(!out.join("Licenses").join("Old.plist").exists());
    }

    #[test]
    fn test_no_clean_keeps_stale_documents() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Checkouts");
        fs::create_dir_all(&root).unwrap();
        let out = dir.path().join("Settings.bundle");
        touch(&out.join("Licenses").join("Old.plist"), "stale");

        generate(&[root], &out, &options(1, false), &PlistWriter).unwrap();
        assert!(out.join("Licenses").join("Old.plist").exists());
    }

    #[test]
    fn test_empty_root_emits_empty_index() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Checkouts");
        fs::create_dir_all(&root).unwrap();
        let out = dir.path().join("Settings.bundle");

        let records = generate(&[root], &out, &options(1, true), &PlistWriter).unwrap();
        assert!(records.is_empty());

        let index = read_document(&out.join("Acknowledgements.plist")).unwrap();
        assert!(index.specifiers.is_empty());
    }

    #[test]
    fn test_repeat_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Checkouts");
        touch(&root.join("Alamofire").join("LICENSE"), "MIT license text");
        let out = dir.path().join("Settings.bundle");

        generate(&[root.clone()], &out, &options(1, true), &PlistWriter).unwrap();
        let license_first = fs::read(out.join("Licenses").join("Alamofire.plist")).unwrap();
        let index_first = fs::read(out.join("Acknowledgements.plist")).unwrap();

        generate(&[root], &out, &options(1, true), &PlistWriter).unwrap();
        let license_second = fs::read(out.join("Licenses").join("Alamofire.plist")).unwrap();
        let index_second = fs::read(out.join("Acknowledgements.plist")).unwrap();

        assert_eq!(license_first, license_second);
        assert_eq!(index_first, index_second);
    }

    #[test]
    fn test_unreadable_license_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Checkouts");
        touch(&root.join("Good").join("LICENSE"), "fine");
        // Invalid UTF-8 cannot be read as text; the record is skipped.
        fs::create_dir_all(root.join("Bad")).unwrap();
        fs::write(root.join("Bad").join("LICENSE"), [0xff, 0xfe, 0x00]).unwrap();
        let out = dir.path().join("Settings.bundle");

        let records = generate(&[root], &out, &options(1, true), &PlistWriter).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Good"]);

        let index = read_document(&out.join("Acknowledgements.plist")).unwrap();
        assert_eq!(index.specifiers.len(), 1);
    }
}
