//! In-memory element tree for a single SVG document.
//!
//! Attribute values, text and comments are kept exactly as they appear in the
//! source (still escaped), so a parse/serialize cycle does not change
//! anything the normalization steps did not touch. The one exception is a
//! literal `"` in a single-quoted attribute, written back as `&quot;` since
//! every attribute is serialized in double quotes. Only the root element is
//! retained: declarations, doctypes and top-level comments are dropped.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use quick_xml::{
    events::{
        attributes::Attribute, BytesCData, BytesEnd, BytesStart, BytesText, Event,
    },
    name::QName,
    Reader, Writer,
};
use std::borrow::Cow;
use std::io::Cursor;

/// Expected name of the root element.
pub const ROOT_ELEMENT: &str = "svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Raw (escaped) character data
    Text(String),
    Comment(String),
    CData(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Raw (escaped) attribute values in document order
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), attributes: IndexMap::new(), children: Vec::new() }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets an attribute, keeping its position when it already exists.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First direct child element with the given name.
    pub fn first_child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    pub fn prepend_child(&mut self, node: Node) {
        self.children.insert(0, node);
    }

    /// Removes every descendant element named `name`, returning how many
    /// were removed.
    pub fn remove_descendants(&mut self, name: &str) -> usize {
        let before = self.children.len();
        self.children
            .retain(|node| !matches!(node, Node::Element(element) if element.name == name));
        let mut removed = before - self.children.len();

        for node in &mut self.children {
            if let Node::Element(element) = node {
                removed += element.remove_descendants(name);
            }
        }
        removed
    }

    /// Counts descendant elements named `name`.
    pub fn count_descendants(&self, name: &str) -> usize {
        self.child_elements()
            .map(|element| usize::from(element.name == name) + element.count_descendants(name))
            .sum()
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }
}

/// A parsed SVG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicDocument {
    root: Element,
}

impl GraphicDocument {
    /// Parses markup into an element tree.
    ///
    /// # Errors
    /// * `Error::DocumentError` if the markup is not well formed, has no root
    ///   element, has more than one root element, or its root is not `<svg>`
    pub fn parse(markup: &str) -> Result<Self> {
        let mut reader = Reader::from_str(markup);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                Error::DocumentError(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                ))
            })?;

            match event {
                Event::Start(start) => stack.push(element_from(&start)?),
                Event::Empty(start) => {
                    let element = element_from(&start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        Error::DocumentError("unexpected closing tag".to_string())
                    })?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_text(&utf8(&text)?);
                    }
                }
                Event::GeneralRef(reference) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_text(&format!("&{};", utf8(&reference)?));
                    }
                }
                Event::CData(data) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(Node::CData(utf8(&data)?));
                    }
                }
                Event::Comment(comment) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(Node::Comment(utf8(&comment)?));
                    }
                }
                Event::Eof => break,
                // Declarations, processing instructions and doctypes
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(Error::DocumentError(format!("unclosed element <{}>", open.name)));
        }
        let root = root.ok_or_else(|| Error::DocumentError("no root element".to_string()))?;
        if root.name != ROOT_ELEMENT {
            return Err(Error::DocumentError(format!(
                "root element is <{}>, expected <{ROOT_ELEMENT}>",
                root.name
            )));
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Serializes the root element back to markup. Elements without children
    /// are written self-closing.
    pub fn to_markup(&self) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        write_element(&mut writer, &self.root)?;
        String::from_utf8(writer.into_inner().into_inner())
            .map_err(|e| Error::DocumentError(e.to_string()))
    }
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| Error::DocumentError(format!("invalid UTF-8: {e}")))
}

fn element_from(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(utf8(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::DocumentError(format!("invalid attribute: {e}")))?;
        element.attributes.insert(utf8(attr.key.as_ref())?, utf8(&attr.value)?);
    }
    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(Error::DocumentError(format!(
            "multiple root elements, found a second <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

fn write_event<'a, E: Into<Event<'a>>>(writer: &mut Writer<Cursor<Vec<u8>>>, event: E) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::DocumentError(format!("serialization failed: {e}")))
}

/// Makes a stored value safe inside double quotes. Values read from
/// single-quoted attributes may hold a literal `"`.
fn quoted_value(value: &str) -> Cow<'_, [u8]> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "&quot;").into_bytes())
    } else {
        Cow::Borrowed(value.as_bytes())
    }
}

fn write_element(writer: &mut Writer<Cursor<Vec<u8>>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute(Attribute { key: QName(key.as_bytes()), value: quoted_value(value) });
    }

    if element.children.is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => write_event(writer, Event::Text(BytesText::from_escaped(text.as_str())))?,
            Node::Comment(text) => {
                write_event(writer, Event::Comment(BytesText::from_escaped(text.as_str())))?
            }
            Node::CData(text) => write_event(writer, Event::CData(BytesCData::new(text.as_str())))?,
        }
    }
    write_event(writer, Event::End(BytesEnd::new(element.name.as_str())))
}
