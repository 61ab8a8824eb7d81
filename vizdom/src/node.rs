//! Node records and handles for the live tree.
//!
//! All node records live in the document's bump arena and are handed out
//! as `Copy` handle types wrapping shared references. The tree is made
//! live through `Cell`/`RefCell` interior mutability; handle equality is
//! node identity.

use std::cell::{Cell, RefCell};
use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;

use crate::geometry::{ClientRect, Position};
use crate::{Document, Element};

/// The record behind every node handle.
pub(crate) struct NodeData<'dom> {
    pub(crate) doc: Document<'dom>,
    pub(crate) parent: Cell<Option<Element<'dom>>>,
    pub(crate) kind: NodeKind<'dom>,
}

pub(crate) enum NodeKind<'dom> {
    Element(ElementData<'dom>),
    Text(RefCell<BumpString<'dom>>),
}

/// Element-specific state. Class list, style map, and data map are kept as
/// order-preserving pair lists; attribute values of `None` are bare
/// boolean attributes.
pub(crate) struct ElementData<'dom> {
    pub(crate) tag: BumpString<'dom>,
    pub(crate) attrs: RefCell<BumpVec<'dom, (BumpString<'dom>, Option<BumpString<'dom>>)>>,
    pub(crate) classes: RefCell<BumpVec<'dom, BumpString<'dom>>>,
    pub(crate) styles: RefCell<BumpVec<'dom, (BumpString<'dom>, BumpString<'dom>)>>,
    pub(crate) dataset: RefCell<BumpVec<'dom, (BumpString<'dom>, BumpString<'dom>)>>,
    pub(crate) children: RefCell<BumpVec<'dom, Node<'dom>>>,
    pub(crate) offset_position: Cell<Position>,
    pub(crate) bounding_rect: Cell<ClientRect>,
}

/// A handle to any node in the live tree. `Copy`; equality is identity.
#[derive(Clone, Copy)]
pub struct Node<'dom>(pub(crate) &'dom NodeData<'dom>);

/// A handle to a text node. `Copy`; equality is identity.
#[derive(Clone, Copy)]
pub struct Text<'dom>(pub(crate) &'dom NodeData<'dom>);

impl<'dom> Node<'dom> {
    /// The document this node belongs to.
    pub fn document(&self) -> Document<'dom> {
        self.0.doc
    }

    /// The parent element, if attached.
    pub fn parent(&self) -> Option<Element<'dom>> {
        self.0.parent.get()
    }

    /// Whether this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self.0.kind, NodeKind::Element(_))
    }

    /// Whether this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self.0.kind, NodeKind::Text(_))
    }

    /// Downcast to an element handle.
    pub fn as_element(&self) -> Option<Element<'dom>> {
        match self.0.kind {
            NodeKind::Element(_) => Some(Element(self.0)),
            NodeKind::Text(_) => None,
        }
    }

    /// Downcast to a text handle.
    pub fn as_text(&self) -> Option<Text<'dom>> {
        match self.0.kind {
            NodeKind::Element(_) => None,
            NodeKind::Text(_) => Some(Text(self.0)),
        }
    }

    /// Detach this node from its parent. No-op when already detached;
    /// never fails.
    pub fn remove(&self) {
        if let Some(parent) = self.parent() {
            parent.remove_child(*self);
        }
    }

    /// Substitute `replacement` for this node at the same position in the
    /// parent's child list. No-op when this node is detached.
    pub fn replace_with(&self, replacement: impl Into<Node<'dom>>) {
        if let Some(parent) = self.parent() {
            parent.replace_child(*self, replacement.into());
        }
    }

    /// The concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.0.kind {
            NodeKind::Text(content) => out.push_str(content.borrow().as_str()),
            NodeKind::Element(data) => {
                for child in data.children.borrow().iter() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl<'dom> Text<'dom> {
    /// The document this node belongs to.
    pub fn document(&self) -> Document<'dom> {
        self.0.doc
    }

    /// The parent element, if attached.
    pub fn parent(&self) -> Option<Element<'dom>> {
        self.0.parent.get()
    }

    /// Upcast to a plain node handle.
    pub fn as_node(&self) -> Node<'dom> {
        Node(self.0)
    }

    /// The character data of this text node.
    pub fn data(&self) -> String {
        match &self.0.kind {
            NodeKind::Text(content) => content.borrow().as_str().to_owned(),
            NodeKind::Element(_) => unreachable!("text handle over an element node"),
        }
    }

    /// Replace the character data of this text node.
    pub fn set_data(&self, text: &str) {
        match &self.0.kind {
            NodeKind::Text(content) => {
                *content.borrow_mut() = BumpString::from_str_in(text, self.0.doc.bump());
            }
            NodeKind::Element(_) => unreachable!("text handle over an element node"),
        }
    }

    /// Detach this node from its parent. No-op when already detached.
    pub fn remove(&self) {
        self.as_node().remove();
    }
}

impl<'dom> From<Element<'dom>> for Node<'dom> {
    fn from(element: Element<'dom>) -> Self {
        Node(element.0)
    }
}
impl<'dom> From<Text<'dom>> for Node<'dom> {
    fn from(text: Text<'dom>) -> Self {
        Node(text.0)
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}
impl Eq for Node<'_> {}

impl PartialEq for Text<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}
impl Eq for Text<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            NodeKind::Element(data) => write!(f, "<{}>", data.tag.as_str()),
            NodeKind::Text(content) => write!(f, "#text({:?})", content.borrow().as_str()),
        }
    }
}

impl fmt::Debug for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_node(), f)
    }
}
