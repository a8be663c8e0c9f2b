//! Vivado project (XPR) document model
//!
//! The project file is read once into a small owned element tree. Only
//! element names, attributes and nesting are kept; text content, comments
//! and processing instructions are discarded since nothing downstream
//! reads them.
//!
//! The expected shape is:
//!
//! ```text
//! <Project>
//!   <FileSets>
//!     <FileSet Name="sources_1">
//!       <File Path="$PPRDIR/src/top.vhd">
//!         <FileInfo>
//!           <Attr Name="Library" Val="lib_a"/>
//!         </FileInfo>
//!       </File>
//!     </FileSet>
//!   </FileSets>
//! </Project>
//! ```

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::error::{Error, Result};

/// A single XML element with its attributes and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Parse an XML document and return its root element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| Error::Parse {
                position: reader.error_position(),
                message: e.to_string(),
            })?;

            match event {
                Event::Start(start) => open.push(Self::from_start(&start, &reader)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start, &reader)?;
                    attach(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open.pop().ok_or_else(|| {
                        Error::Malformed("closing tag without matching open tag".to_string())
                    })?;
                    attach(&mut open, &mut root, element)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(Error::Malformed(format!(
                "element <{}> is never closed",
                unclosed.name
            )));
        }

        root.ok_or_else(|| Error::Malformed("document has no root element".to_string()))
    }

    fn from_start(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut element = Self::new(name);

        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::Parse {
                position: reader.buffer_position(),
                message: e.to_string(),
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Parse {
                    position: reader.buffer_position(),
                    message: e.to_string(),
                })?
                .into_owned();
            element.attributes.push((key, value));
        }

        Ok(element)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the first attribute named `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All direct child elements, in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Direct child elements with the given name, in document order.
    pub fn children_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child element with the given name.
    pub fn child<'a>(&'a self, name: &str) -> Option<&'a Element> {
        self.children.iter().find(|c| c.name == name)
    }
}

fn attach(open: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(Error::Malformed(format!(
                "unexpected second root element <{}>",
                element.name
            )));
        }
    }
    Ok(())
}

/// A parsed project file.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    root: Element,
}

impl ProjectFile {
    /// Read and parse a project file from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let xml = fs::read_to_string(path).map_err(|source| Error::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("read {} bytes from {}", xml.len(), path.display());
        Self::parse(&xml)
    }

    /// Parse a project file from an in-memory XML string.
    pub fn parse(xml: &str) -> Result<Self> {
        Ok(Self::from_root(Element::parse(xml)?))
    }

    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    fn filesets_element(&self) -> Result<&Element> {
        self.root.child("FileSets").ok_or_else(|| {
            Error::Malformed(format!(
                "<{}> has no <FileSets> element",
                self.root.name()
            ))
        })
    }

    /// Look up a fileset by its `Name` attribute.
    ///
    /// A missing fileset is an error rather than an empty result, so a typo
    /// in the fileset name cannot silently produce an empty configuration.
    pub fn fileset(&self, name: &str) -> Result<&Element> {
        let filesets = self.filesets_element()?;
        filesets
            .children_named("FileSet")
            .find(|fs| fs.attr("Name") == Some(name))
            .ok_or_else(|| Error::FilesetNotFound {
                name: name.to_string(),
                available: fileset_names(filesets),
            })
    }
}

/// Names of all `FileSet` children, in document order.
fn fileset_names(filesets: &Element) -> Vec<String> {
    filesets
        .children_named("FileSet")
        .filter_map(|fs| fs.attr("Name"))
        .map(str::to_string)
        .collect()
}
