// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Minimal element tree for xCal (RFC 6321) property elements.

use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesRef, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::CodecError;
use crate::keyword::XCAL_NAMESPACE;

/// An XML element with its local name, text content and child elements.
///
/// Namespace prefixes are dropped when reading; attributes are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Local name of the element.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content, trimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a child element holding `text`.
    pub fn append(&mut self, name: &str, text: impl Into<String>) {
        let mut child = XmlElement::new(name);
        child.set_text(text);
        self.children.push(child);
    }

    /// Append a child element built by the caller.
    pub fn append_element(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Text of the first child named `name`.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.children(name).next().map(XmlElement::text)
    }

    /// Texts of every child named `name`, in document order.
    #[must_use]
    pub fn all(&self, name: &str) -> Vec<&str> {
        self.children(name).map(XmlElement::text).collect()
    }

    /// Children named `name`, in document order.
    pub fn children<'a, 'b>(
        &'a self,
        name: &'b str,
    ) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// All children, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter()
    }

    /// Read the root element of a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well-formed or has no root.
    pub fn from_xml(src: &str) -> Result<Self, CodecError> {
        let mut reader = Reader::from_str(src);
        reader.config_mut().check_end_names = true;

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root = None;
        loop {
            match reader.read_event()? {
                Event::Start(ref e) => stack.push(XmlElement::new(local_name(e)?)),
                Event::Empty(ref e) => {
                    let element = XmlElement::new(local_name(e)?);
                    close(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    if let Some(mut element) = stack.pop() {
                        element.text = element.text.trim().to_owned();
                        close(&mut stack, &mut root, element)?;
                    }
                }
                Event::Text(ref e) => {
                    if let Some(top) = stack.last_mut() {
                        let decoded = reader
                            .decoder()
                            .decode(e.as_ref())
                            .map_err(quick_xml::Error::from)?;
                        top.text.push_str(&decoded);
                    }
                }
                Event::CData(ref e) => {
                    if let Some(top) = stack.last_mut() {
                        let decoded = reader
                            .decoder()
                            .decode(e.as_ref())
                            .map_err(quick_xml::Error::from)?;
                        top.text.push_str(&decoded);
                    }
                }
                Event::GeneralRef(ref e) => {
                    if let Some(top) = stack.last_mut() {
                        resolve_reference(&reader, e, &mut top.text)?;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(CodecError::Xml("unexpected end of document".to_owned()));
        }
        root.ok_or(CodecError::MissingRoot)
    }

    /// Write the element as a document, declaring the xCal namespace on it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn to_xml(&self) -> Result<String, CodecError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        self.write(&mut writer, Some(XCAL_NAMESPACE))?;
        let bytes = writer.into_inner().into_inner();
        Ok(String::from_utf8(bytes)?)
    }

    fn write(
        &self,
        writer: &mut Writer<Cursor<Vec<u8>>>,
        namespace: Option<&str>,
    ) -> Result<(), CodecError> {
        let mut start = BytesStart::new(self.name.as_str());
        if let Some(ns) = namespace {
            start.push_attribute(("xmlns", ns));
        }

        if self.text.is_empty() && self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if !self.text.is_empty() {
            writer.write_event(Event::Text(BytesText::new(&self.text)))?;
        }
        for child in &self.children {
            child.write(writer, None)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

fn local_name(e: &BytesStart<'_>) -> Result<String, CodecError> {
    Ok(String::from_utf8(e.local_name().as_ref().to_vec())?)
}

fn close(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), CodecError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(CodecError::Xml("multiple root elements".to_owned())),
    }
    Ok(())
}

fn resolve_reference(
    reader: &Reader<&[u8]>,
    e: &BytesRef<'_>,
    text: &mut String,
) -> Result<(), CodecError> {
    if let Some(c) = e.resolve_char_ref()? {
        text.push(c);
        return Ok(());
    }

    let name = reader
        .decoder()
        .decode(e.as_ref())
        .map_err(quick_xml::Error::from)?;
    match quick_xml::escape::resolve_predefined_entity(&name) {
        Some(resolved) => {
            text.push_str(resolved);
            Ok(())
        }
        None => Err(CodecError::Xml(format!("unknown entity: &{name};"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tree() {
        let src = r#"<?xml version="1.0" encoding="utf-8"?>
<x:rdate xmlns:x="urn:ietf:params:xml:ns:icalendar-2.0">
  <x:parameters>
    <x:tzid><x:text>America/New_York</x:text></x:tzid>
  </x:parameters>
  <x:date-time>2020-01-15T09:00:00Z</x:date-time>
  <x:date> 2020-01-16 </x:date>
  <x:date-time>2020-01-17T09:00:00Z</x:date-time>
  <x:empty/>
</x:rdate>"#;

        let root = XmlElement::from_xml(src).unwrap();
        assert_eq!(root.name(), "rdate");
        assert_eq!(root.text(), "");
        assert_eq!(
            root.all("date-time"),
            ["2020-01-15T09:00:00Z", "2020-01-17T09:00:00Z"]
        );
        assert_eq!(root.first("date"), Some("2020-01-16"));
        assert_eq!(root.first("empty"), Some(""));
        assert_eq!(root.first("period"), None);
        assert_eq!(root.elements().count(), 5);

        let tzid = root
            .children("parameters")
            .flat_map(|p| p.children("tzid"))
            .find_map(|t| t.first("text"));
        assert_eq!(tzid, Some("America/New_York"));
    }

    #[test]
    fn resolves_entities() {
        let root = XmlElement::from_xml("<text>a &amp; b &#65;</text>").unwrap();
        assert_eq!(root.text(), "a & b A");
    }

    #[test]
    fn rejects_malformed_documents() {
        let fail_cases = [
            "",                       // no root
            "<rdate><date></rdate>",  // mismatched end
            "<rdate>",                // unclosed
            "<a/><b/>",               // multiple roots
        ];
        for src in fail_cases {
            assert!(XmlElement::from_xml(src).is_err(), "Parse {src} should fail");
        }
    }

    #[test]
    fn looks_up_children_by_borrowed_name() {
        let root = XmlElement::from_xml(
            "<rdate><date>2020-01-15</date><date-time>2020-01-16T09:00:00Z</date-time><date>2020-01-17</date></rdate>",
        )
        .unwrap();

        let (first, all) = {
            let name = String::from("date");
            (root.first(&name), root.all(&name))
        };
        assert_eq!(first, Some("2020-01-15"));
        assert_eq!(all, ["2020-01-15", "2020-01-17"]);
        assert_eq!(root.first("period"), None);
    }

    #[test]
    fn writes_tree() {
        let mut root = XmlElement::new("rdate");
        let mut period = XmlElement::new("period");
        period.append("start", "2020-01-15T09:00:00Z");
        period.append("duration", "PT30M");
        root.append_element(period);
        root.append("date", "2020-01-16");

        assert_eq!(root.elements().map(XmlElement::name).collect::<Vec<_>>(), ["period", "date"]);

        let xml = root.to_xml().unwrap();
        assert!(xml.starts_with(r#"<rdate xmlns="urn:ietf:params:xml:ns:icalendar-2.0">"#));
        assert!(xml.contains("<start>2020-01-15T09:00:00Z</start>"));
        assert!(xml.contains("<duration>PT30M</duration>"));

        let read = XmlElement::from_xml(&xml).unwrap();
        assert_eq!(read, root);
    }
}
