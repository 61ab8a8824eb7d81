#![deny(missing_docs)]
//! A declarative element-construction and manipulation layer over a live,
//! arena-backed document tree, used as a foundational utility by
//! visualization UI code.
//!
//! Elements are built in one expression through [`Document::create_element`]
//! or the per-tag constructors ([`Document::div`], [`Document::ul`], …):
//! attributes dispatch on their kind (class list, style map, data map, or
//! plain), children are flattened recursively, and conditional
//! attributes/children are expressed with `false`/`None` values that are
//! skipped. The returned [`Element`] is a `Copy` handle into the live tree
//! and supports the small mutation and query surface widget code needs:
//! append/insert/remove/replace, `show`/`hide`, `position`/`offset`, and
//! selector [`Element::matches`].
//!
//! All allocations are done through a bump allocator ([`bumpalo::Bump`])
//! owned by the caller and handed to [`Document::new`].
//!
//! # Example
//!
//! ```
//! use vizdom::{bumpalo::Bump, Document};
//!
//! let bump = Bump::new();
//! let doc = Document::new(&bump);
//! let list = doc.ul(
//!     [("class", vec!["items"]).into()],
//!     [
//!         doc.li([], ["first".into()]).unwrap().into(),
//!         doc.li([], ["second".into()]).unwrap().into(),
//!     ],
//! ).unwrap();
//! assert_eq!(
//!     list.outer_html().unwrap(),
//!     r#"<ul class="items"><li>first</li><li>second</li></ul>"#
//! );
//! ```

// Re-export bumpalo for convenience
pub use bumpalo;

mod attribute;
pub use attribute::{AttrKind, AttrValue, Attribute};

mod builder;
pub use builder::TAG_NAMES;

mod child;
pub use child::{Child, InvalidChildError};

mod document;
pub use document::Document;

mod element;
pub use element::Element;

mod geometry;
pub use geometry::{ClientRect, Position};

mod keys;
pub use keys::Key;

mod node;
pub use node::{Node, Text};

mod render;

mod selector;
pub use selector::SelectorError;
