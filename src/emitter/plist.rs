use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::DocumentWriter;
use crate::models::{SettingsDocument, Specifier};

const DOCTYPE: &str = r#"plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd""#;

/// Writes settings documents as XML property lists, the format the iOS
/// Settings app reads from a `Settings.bundle`.
pub struct PlistWriter;

impl DocumentWriter for PlistWriter {
    fn extension(&self) -> &'static str {
        "plist"
    }

    fn write_document(&self, document: &SettingsDocument, dest: &Path) -> Result<()> {
        let bytes = to_xml(document)?;
        std::fs::write(dest, bytes).with_context(|| format!("writing {}", dest.display()))?;
        Ok(())
    }
}

fn to_xml(document: &SettingsDocument) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;

    let mut plist = BytesStart::new("plist");
    plist.push_attribute(("version", "1.0"));
    writer.write_event(Event::Start(plist))?;
    writer.write_event(Event::Start(BytesStart::new("dict")))?;
    write_key(&mut writer, "PreferenceSpecifiers")?;
    writer.write_event(Event::Start(BytesStart::new("array")))?;

    for specifier in &document.specifiers {
        writer.write_event(Event::Start(BytesStart::new("dict")))?;
        match specifier {
            Specifier::Group { footer_text } => {
                write_entry(&mut writer, "Type", "PSGroupSpecifier")?;
                write_entry(&mut writer, "FooterText", footer_text)?;
            }
            Specifier::ChildPane { file, title } => {
                write_entry(&mut writer, "Type", "PSChildPaneSpecifier")?;
                write_entry(&mut writer, "File", file)?;
                write_entry(&mut writer, "Title", title)?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new("dict")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("array")))?;
    writer.write_event(Event::End(BytesEnd::new("dict")))?;
    writer.write_event(Event::End(BytesEnd::new("plist")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_key<W: std::io::Write>(writer: &mut Writer<W>, key: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("key")))?;
    writer.write_event(Event::Text(BytesText::new(key)))?;
    writer.write_event(Event::End(BytesEnd::new("key")))?;
    Ok(())
}

fn write_entry<W: std::io::Write>(writer: &mut Writer<W>, key: &str, value: &str) -> Result<()> {
    write_key(writer, key)?;
    writer.write_event(Event::Start(BytesStart::new("string")))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new("string")))?;
    Ok(())
}

/// Parse a generated property list back into a [`SettingsDocument`].
/// Test support for round-trip assertions.
#[cfg(test)]
pub(crate) fn read_document(path: &Path) -> Result<SettingsDocument> {
    use quick_xml::Reader;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut reader = Reader::from_str(&content);

    let mut document = SettingsDocument::default();
    let mut buf = Vec::new();
    let mut dict_level = 0u32;
    let mut capture = false;
    let mut text = String::new();
    let mut pending_key = String::new();
    let mut entries: Vec<(String, String)> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"dict" => {
                    dict_level += 1;
                    if dict_level == 2 {
                        entries.clear();
                    }
                }
                b"key" | b"string" => {
                    capture = true;
                    text.clear();
                }
                _ => {}
            },
            Event::Text(ref t) => {
                if capture {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"key" => {
                    pending_key = std::mem::take(&mut text);
                    capture = false;
                }
                b"string" => {
                    entries.push((std::mem::take(&mut pending_key), std::mem::take(&mut text)));
                    capture = false;
                }
                b"dict" => {
                    if dict_level == 2 {
                        document.specifiers.push(specifier_from_entries(&entries)?);
                    }
                    dict_level -= 1;
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(document)
}

#[cfg(test)]
fn specifier_from_entries(entries: &[(String, String)]) -> Result<Specifier> {
    let get = |wanted: &str| {
        entries
            .iter()
            .find(|(key, _)| key == wanted)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    };

    match get("Type").as_str() {
        "PSGroupSpecifier" => Ok(Specifier::Group {
            footer_text: get("FooterText"),
        }),
        "PSChildPaneSpecifier" => Ok(Specifier::ChildPane {
            file: get("File"),
            title: get("Title"),
        }),
        other => anyhow::bail!("unknown specifier type {other:?}"),
    }
}
