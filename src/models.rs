use std::path::PathBuf;

/// One discovered license and the dependency that owns it.
///
/// The name is taken from the folder that directly contains the license
/// file. Records are created in traversal order, and that order is carried
/// all the way into the acknowledgements index.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyRecord {
    pub name: String,
    pub license_path: PathBuf,
}

/// One entry of a settings document, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Specifier {
    /// A group pane carrying footer text; per-license documents hold exactly
    /// one of these with the normalized license text.
    Group { footer_text: String },
    /// A link to a nested settings document; the index holds one per
    /// dependency.
    ChildPane { file: String, title: String },
}

/// An ordered settings document. Specifier order is the display order in the
/// Settings app and must survive serialization unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsDocument {
    pub specifiers: Vec<Specifier>,
}
