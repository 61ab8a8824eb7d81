//! The document handle: arena-backed node creation and document-level
//! geometry state.

use std::cell::{Cell, OnceCell, RefCell};
use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::geometry::{ClientRect, Position};
use crate::node::{ElementData, NodeData, NodeKind, Text};
use crate::Element;

/// A live document over a caller-owned bump allocator.
///
/// The handle is `Copy`; all state lives in the arena. Every node-creating
/// function goes through the document, and every node it creates is freed
/// together with the bump.
///
/// # Example
///
/// ```
/// use vizdom::{bumpalo::Bump, Document};
///
/// let bump = Bump::new();
/// let doc = Document::new(&bump);
/// let el = doc.create_element_node("div");
/// assert_eq!(el.tag_name(), "div");
/// ```
#[derive(Clone, Copy)]
pub struct Document<'dom>(pub(crate) &'dom DocShared<'dom>);

pub(crate) struct DocShared<'dom> {
    bump: &'dom Bump,
    scroll: Cell<Position>,
    root_border: Cell<Position>,
    nbsp: OnceCell<Text<'dom>>,
}

impl<'dom> Document<'dom> {
    /// Create a new empty document backed by `bump`.
    pub fn new(bump: &'dom Bump) -> Self {
        Document(bump.alloc(DocShared {
            bump,
            scroll: Cell::new(Position::default()),
            root_border: Cell::new(Position::default()),
            nbsp: OnceCell::new(),
        }))
    }

    /// The backing bump allocator.
    pub fn bump(&self) -> &'dom Bump {
        self.0.bump
    }

    /// Create a bare element of kind `tag` with no attributes and no
    /// children. The tag is not validated.
    ///
    /// This is the host creation primitive; the declarative entry point is
    /// [`Document::create_element`].
    ///
    /// [`Document::create_element`]: crate::Document::create_element
    pub fn create_element_node(&self, tag: &str) -> Element<'dom> {
        let bump = self.0.bump;
        let data = bump.alloc(NodeData {
            doc: *self,
            parent: Cell::new(None),
            kind: NodeKind::Element(ElementData {
                tag: BumpString::from_str_in(tag, bump),
                attrs: RefCell::new(BumpVec::new_in(bump)),
                classes: RefCell::new(BumpVec::new_in(bump)),
                styles: RefCell::new(BumpVec::new_in(bump)),
                dataset: RefCell::new(BumpVec::new_in(bump)),
                children: RefCell::new(BumpVec::new_in(bump)),
                offset_position: Cell::new(Position::default()),
                bounding_rect: Cell::new(ClientRect::default()),
            }),
        });
        Element(data)
    }

    /// Create a detached text node.
    pub fn create_text_node(&self, text: &str) -> Text<'dom> {
        let bump = self.0.bump;
        let data = bump.alloc(NodeData {
            doc: *self,
            parent: Cell::new(None),
            kind: NodeKind::Text(RefCell::new(BumpString::from_str_in(text, bump))),
        });
        Text(data)
    }

    /// The document's shared non-breaking-space text node.
    ///
    /// Created lazily once; every call returns the same node, so appending
    /// it somewhere moves the one node.
    pub fn nbsp(&self) -> Text<'dom> {
        *self.0.nbsp.get_or_init(|| self.create_text_node("\u{a0}"))
    }

    /// The document scroll offsets (the host's page-offset globals).
    pub fn scroll(&self) -> Position {
        self.0.scroll.get()
    }

    /// Store the document scroll offsets.
    pub fn set_scroll(&self, scroll: Position) {
        self.0.scroll.set(scroll);
    }

    /// The root element's border widths (the host's client-top/client-left
    /// globals), subtracted by [`Element::offset`].
    ///
    /// [`Element::offset`]: crate::Element::offset
    pub fn root_border(&self) -> Position {
        self.0.root_border.get()
    }

    /// Store the root element's border widths.
    pub fn set_root_border(&self, border: Position) {
        self.0.root_border.set(border);
    }
}

impl PartialEq for Document<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}
impl Eq for Document<'_> {}

impl fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#document")
    }
}
