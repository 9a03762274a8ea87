use std::path::Path;

use anyhow::Result;

use crate::models::{DependencyRecord, SettingsDocument, Specifier};

pub mod plist;

/// Serializer for [`SettingsDocument`]s. The pipeline is written against
/// this trait so an alternate document format can be swapped in without
/// touching the scan or normalization logic.
pub trait DocumentWriter {
    /// File extension (without the dot) of the documents this writer
    /// produces.
    fn extension(&self) -> &'static str;

    /// Serialize `document` to `dest`, overwriting any existing file. Fails
    /// if the destination folder does not exist or is not writable.
    fn write_document(&self, document: &SettingsDocument, dest: &Path) -> Result<()>;
}

/// Write the standalone document for a single license: one Group specifier
/// carrying the normalized license text.
pub fn emit_license_document(text: &str, dest: &Path, writer: &dyn DocumentWriter) -> Result<()> {
    let document = SettingsDocument {
        specifiers: vec![Specifier::Group {
            footer_text: text.to_owned(),
        }],
    };
    writer.write_document(&document, dest)
}

/// Write the acknowledgements index: one ChildPane specifier per record, in
/// record order, each pointing at `Licenses/<name>`. Duplicate names are
/// kept as separate entries.
pub fn emit_index_document(
    records: &[DependencyRecord],
    dest: &Path,
    writer: &dyn DocumentWriter,
) -> Result<()> {
    let specifiers = records
        .iter()
        .map(|record| Specifier::ChildPane {
            file: format!("Licenses/{}", record.name),
            title: record.name.clone(),
        })
        .collect();
    writer.write_document(&SettingsDocument { specifiers }, dest)
}
