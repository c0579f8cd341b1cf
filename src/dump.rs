//! UI hierarchy dump parsing.
//!
//! A dump is a generic XML tree where each node describes one on-screen UI
//! element. Only the tree shape and the `bounds` attribute matter to this
//! tool, so the dump is read with quick-xml's event reader into a plain
//! element tree instead of a serde-mapped schema.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event, attributes::AttrError};
use thiserror::Error;

/// One element of the UI hierarchy.
#[derive(Debug, Clone)]
pub struct UiElement {
    /// Tag name, e.g. `node`.
    pub tag: String,
    attributes: Vec<(String, String)>,
    pub children: Vec<UiElement>,
}

/// Error type for a dump that is not well-formed XML.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("could not read XML event: {0}")]
    ReadEvent(#[from] quick_xml::Error),

    #[error("could not parse attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("closing tag without a matching opening tag")]
    UnbalancedTag,
}

/// Error type for loading a dump from disk, keeping unreadable files and
/// malformed markup as distinct failure categories.
#[derive(Debug, Error)]
pub enum DumpLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] DumpError),
}

impl UiElement {
    fn from_start(start: &BytesStart) -> Result<UiElement, DumpError> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.local_name().into_inner()).into_owned();
            let value = attr.unescape_value().map_err(DumpError::ReadEvent)?;
            attributes.push((key, value.into_owned()));
        }
        Ok(UiElement {
            tag: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes,
            children: Vec::new(),
        })
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Collect the leaf elements of this subtree in document order.
    ///
    /// Pre-order traversal with an explicit stack; children are pushed in
    /// reverse so the leftmost child is visited first. A childless root is
    /// its own single leaf.
    pub fn leaves(&self) -> Vec<&UiElement> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(elem) = stack.pop() {
            if elem.is_leaf() {
                out.push(elem);
            } else {
                stack.extend(elem.children.iter().rev());
            }
        }
        out
    }
}

/// Parse a UI dump from a string. Returns the root element, or `None` for a
/// document with no elements.
pub fn parse_dump(xml: &str) -> Result<Option<UiElement>, DumpError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<UiElement> = Vec::new();
    let mut root: Option<UiElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(UiElement::from_start(&start)?),
            Event::Empty(start) => {
                let elem = UiElement::from_start(&start)?;
                attach(&mut stack, &mut root, elem);
            }
            Event::End(_) => {
                let elem = stack.pop().ok_or(DumpError::UnbalancedTag)?;
                attach(&mut stack, &mut root, elem);
            }
            Event::Eof => break,
            // Declarations, comments, text and processing instructions carry
            // no UI elements.
            _ => {}
        }
    }

    Ok(root)
}

/// Attach a completed element to its parent, or make it the root. Top-level
/// elements after the first are ignored; the first one is the document root.
fn attach(stack: &mut [UiElement], root: &mut Option<UiElement>, elem: UiElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(elem),
        None => {
            if root.is_none() {
                *root = Some(elem);
            }
        }
    }
}

/// Parse a UI dump from disk.
pub fn parse_dump_file(path: &Path) -> Result<Option<UiElement>, DumpLoadError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_dump(&contents)?)
}
