//! HTML serialization of live nodes, for inspection and tests.

use std::io::Write;

use crate::node::{Node, NodeKind};
use crate::Element;

/// Tags serialized without a closing tag when childless.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

impl<'dom> Node<'dom> {
    /// Write this node as HTML. Text and quoted attribute values are
    /// escaped; the output is flat (no pretty-printing).
    pub fn write(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        match &self.0.kind {
            NodeKind::Text(content) => {
                write!(
                    writer,
                    "{}",
                    html_escape::encode_text(content.borrow().as_str())
                )
            }
            NodeKind::Element(data) => {
                let element = Element(self.0);
                write!(writer, "<{}", data.tag.as_str())?;
                for (name, value) in data.attrs.borrow().iter() {
                    match value {
                        Some(value) => write!(
                            writer,
                            " {}=\"{}\"",
                            name.as_str(),
                            html_escape::encode_quoted_attribute(value.as_str())
                        )?,
                        None => write!(writer, " {}", name.as_str())?,
                    }
                }
                let style_text = element.style_text();
                if !style_text.is_empty() {
                    write!(
                        writer,
                        " style=\"{}\"",
                        html_escape::encode_quoted_attribute(&style_text)
                    )?;
                }
                for (key, value) in data.dataset.borrow().iter() {
                    write!(
                        writer,
                        " data-{}=\"{}\"",
                        key.as_str(),
                        html_escape::encode_quoted_attribute(value.as_str())
                    )?;
                }
                write!(writer, ">")?;

                let children = data.children.borrow();
                if children.is_empty() && VOID_TAGS.contains(&data.tag.as_str()) {
                    return Ok(());
                }
                for child in children.iter() {
                    child.write(writer)?;
                }
                write!(writer, "</{}>", data.tag.as_str())
            }
        }
    }

    /// Serialize this node to an HTML string.
    pub fn outer_html(&self) -> std::io::Result<String> {
        let mut output = vec![];
        self.write(&mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }
}

impl<'dom> Element<'dom> {
    /// Serialize this element to an HTML string.
    pub fn outer_html(&self) -> std::io::Result<String> {
        self.as_node().outer_html()
    }
}
