//! Resource document model.
//!
//! A `.resx` file is parsed with `roxmltree`, which gives byte ranges for every
//! node but no mutation API. The model kept here is therefore a flat view of
//! the root element's content:
//! - `Segment::Other` holds opaque source text (prologue, root start tag,
//!   comments, non-entry elements) exactly as it appeared.
//! - `Segment::Entry` holds one `data` element as an atomic unit: its exact
//!   markup, the indentation that preceded it, and the raw values of every
//!   attribute locally named `name`.
//!
//! Serializing concatenates the segments, so a document that was not
//! reordered round-trips byte-for-byte.

use roxmltree::{Node, ParsingOptions};

/// Local name of the elements that get sorted.
pub const ENTRY_ELEMENT: &str = "data";
/// Local name of the attribute carrying an entry's key.
pub const KEY_ATTRIBUTE: &str = "name";

const BOM: &str = "\u{FEFF}";

/// Failures while loading a document or reading keys out of it.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document is not valid UTF-8 (invalid byte at offset {0})")]
    Encoding(usize),
    #[error("{0}")]
    Xml(#[from] roxmltree::Error),
    #[error("entry at line {line}, column {column} has no `name` attribute")]
    MissingKey { line: u32, column: u32 },
    #[error("entry at line {line}, column {column} has {count} attributes named `name`")]
    AmbiguousKey { line: u32, column: u32, count: usize },
}

/// One-based line/column of an entry's start tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// A `data` element moved as an opaque unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    indent: String,
    markup: String,
    key_candidates: Vec<String>,
    position: Position,
}

impl Entry {
    /// Exact source text of the element, start tag through end tag.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Values of all attributes whose local name is `name`, in source order.
    pub fn key_candidates(&self) -> &[String] {
        &self.key_candidates
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Other(String),
    Entry(Entry),
}

/// In-memory resource document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    bom: bool,
    segments: Vec<Segment>,
    // whitespace before the root end tag, the end tag, and any trailing misc
    tail: String,
}

impl Document {
    /// Parse UTF-8 bytes (optionally BOM-prefixed) into a document.
    ///
    /// Fails on invalid UTF-8, malformed XML, or a missing root element.
    pub fn parse(bytes: &[u8]) -> Result<Self, DocumentError> {
        let text = std::str::from_utf8(bytes).map_err(|e| DocumentError::Encoding(e.valid_up_to()))?;
        let (bom, text) = match text.strip_prefix(BOM) {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let opts = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let xml = roxmltree::Document::parse_with_options(text, opts)?;
        let root = xml.root_element();
        let entries: Vec<Node> = root.children().filter(is_entry).collect();
        if entries.is_empty() {
            return Ok(Document {
                bom,
                segments: vec![Segment::Other(text.to_string())],
                tail: String::new(),
            });
        }

        // A root with element children always has an end tag.
        let root_end = root.range().end;
        let close_start = text[..root_end].rfind("</").unwrap_or(root_end);
        let body_end = text[..close_start].trim_end_matches(is_xml_space).len();

        let mut segments = Vec::with_capacity(entries.len() * 2 + 1);
        let mut cursor = 0;
        for node in &entries {
            let range = node.range();
            let gap = &text[cursor..range.start];
            let kept = gap.trim_end_matches(is_xml_space);
            if !kept.is_empty() {
                segments.push(Segment::Other(kept.to_string()));
            }
            let pos = xml.text_pos_at(range.start);
            segments.push(Segment::Entry(Entry {
                indent: gap[kept.len()..].to_string(),
                markup: text[range.clone()].to_string(),
                key_candidates: node
                    .attributes()
                    .filter(|a| a.name() == KEY_ATTRIBUTE)
                    .map(|a| a.value().to_string())
                    .collect(),
                position: Position {
                    line: pos.row,
                    column: pos.col,
                },
            }));
            cursor = range.end;
        }
        let rest = &text[cursor..body_end.max(cursor)];
        if !rest.is_empty() {
            segments.push(Segment::Other(rest.to_string()));
        }

        Ok(Document {
            bom,
            segments,
            tail: text[body_end.max(cursor)..].to_string(),
        })
    }

    /// Render the document back to bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = String::new();
        if self.bom {
            out.push_str(BOM);
        }
        for seg in &self.segments {
            match seg {
                Segment::Other(text) => out.push_str(text),
                Segment::Entry(entry) => {
                    out.push_str(&entry.indent);
                    out.push_str(&entry.markup);
                }
            }
        }
        out.push_str(&self.tail);
        out.into_bytes()
    }

    /// Entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Entry(entry) => Some(entry),
            Segment::Other(_) => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    /// Detach all entries, leaving non-entry content in its original order.
    pub(crate) fn take_entries(&mut self) -> Vec<Entry> {
        let mut taken = Vec::new();
        let mut kept = Vec::with_capacity(self.segments.len());
        for seg in self.segments.drain(..) {
            match seg {
                Segment::Entry(entry) => taken.push(entry),
                other => kept.push(other),
            }
        }
        self.segments = kept;
        taken
    }

    /// Append entries after all remaining root content.
    pub(crate) fn append_entries(&mut self, entries: impl IntoIterator<Item = Entry>) {
        self.segments.extend(entries.into_iter().map(Segment::Entry));
    }
}

fn is_entry(node: &Node) -> bool {
    node.is_element() && node.tag_name().name() == ENTRY_ELEMENT
}

fn is_xml_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <!-- header -->
  <resheader name="resmimetype">
    <value>text/microsoft-resx</value>
  </resheader>
  <data name="Zebra" xml:space="preserve">
    <value>Z</value>
    <comment>last</comment>
  </data>
  <data name="Apple" xml:space="preserve">
    <value>A</value>
  </data>
</root>
"#;

    #[test]
    fn test_parse_then_serialize_is_byte_identical() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(doc.serialize(), SAMPLE.as_bytes());
    }

    #[test]
    fn test_bom_and_crlf_are_preserved() {
        let src = "\u{FEFF}<root>\r\n  <data name=\"b\"/>\r\n  <data name=\"a\"/>\r\n</root>\r\n";
        let doc = Document::parse(src.as_bytes()).unwrap();
        assert_eq!(doc.entry_count(), 2);
        assert_eq!(doc.serialize(), src.as_bytes());
    }

    #[test]
    fn test_entries_capture_markup_keys_and_position() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        let entries: Vec<_> = doc.entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key_candidates(), ["Zebra".to_string()]);
        assert!(entries[0].markup().starts_with("<data name=\"Zebra\""));
        assert!(entries[0].markup().ends_with("</data>"));
        assert!(entries[0].markup().contains("<comment>last</comment>"));
        assert_eq!(entries[0].position(), Position { line: 7, column: 3 });
    }

    #[test]
    fn test_only_direct_root_children_are_entries() {
        let src = r#"<root><group><data name="nested"/></group><data name="top"/></root>"#;
        let doc = Document::parse(src.as_bytes()).unwrap();
        let keys: Vec<_> = doc.entries().map(|e| e.key_candidates()[0].clone()).collect();
        assert_eq!(keys, vec!["top"]);
    }

    #[test]
    fn test_entry_match_ignores_namespace_prefix() {
        let src = r#"<root xmlns:r="urn:r"><r:data name="b"/><r:data name="a"/></root>"#;
        let doc = Document::parse(src.as_bytes()).unwrap();
        assert_eq!(doc.entry_count(), 2);
    }

    #[test]
    fn test_document_without_entries_round_trips() {
        let src = "<root>\n  <resheader name=\"x\"/>\n</root>";
        let doc = Document::parse(src.as_bytes()).unwrap();
        assert_eq!(doc.entry_count(), 0);
        assert_eq!(doc.serialize(), src.as_bytes());
    }

    #[test]
    fn test_malformed_xml_is_rejected() {
        let err = Document::parse(b"<root><data name=\"a\"></root>").unwrap_err();
        assert!(matches!(err, DocumentError::Xml(_)));
    }

    #[test]
    fn test_missing_root_is_rejected() {
        let err = Document::parse(b"<?xml version=\"1.0\"?>\n").unwrap_err();
        assert!(matches!(err, DocumentError::Xml(_)));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = Document::parse(&[b'<', b'r', 0xff, b'>']).unwrap_err();
        assert!(matches!(err, DocumentError::Encoding(2)));
    }

    #[test]
    fn test_take_and_append_moves_entries_to_end() {
        let src = "<root>\n  <data name=\"a\"/>\n  <x/>\n  <data name=\"b\"/>\n</root>";
        let mut doc = Document::parse(src.as_bytes()).unwrap();
        let entries = doc.take_entries();
        assert_eq!(doc.entry_count(), 0);
        assert_eq!(String::from_utf8(doc.serialize()).unwrap(), "<root>\n  <x/>\n</root>");
        doc.append_entries(entries.into_iter().rev());
        assert_eq!(
            String::from_utf8(doc.serialize()).unwrap(),
            "<root>\n  <x/>\n  <data name=\"b\"/>\n  <data name=\"a\"/>\n</root>"
        );
    }
}
