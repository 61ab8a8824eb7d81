//! The element handle and its host surface: attributes, class list,
//! inline style map, data map, tree mutation, visibility, and geometry.

use std::fmt;

use bumpalo::collections::String as BumpString;

use crate::geometry::{ClientRect, Position};
use crate::node::{ElementData, Node, NodeData, NodeKind};
use crate::selector::{self, SelectorError};
use crate::Document;

/// A handle to an element node in the live tree.
///
/// Handles are `Copy` references into the document arena; equality is node
/// identity. All mutation goes through interior mutability, so a shared
/// handle is enough to edit the tree.
#[derive(Clone, Copy)]
pub struct Element<'dom>(pub(crate) &'dom NodeData<'dom>);

impl<'dom> Element<'dom> {
    fn data(&self) -> &'dom ElementData<'dom> {
        match &self.0.kind {
            NodeKind::Element(data) => data,
            NodeKind::Text(_) => unreachable!("element handle over a text node"),
        }
    }

    /// The document this element belongs to.
    pub fn document(&self) -> Document<'dom> {
        self.0.doc
    }

    /// Upcast to a plain node handle.
    pub fn as_node(&self) -> Node<'dom> {
        Node(self.0)
    }

    /// The element's tag name, as given at creation.
    pub fn tag_name(&self) -> &'dom str {
        self.data().tag.as_str()
    }

    /// The parent element, if attached.
    pub fn parent(&self) -> Option<Element<'dom>> {
        self.0.parent.get()
    }

    // ------------------------------------------------------------------
    // Generic attributes
    // ------------------------------------------------------------------

    /// Set a literal attribute.
    ///
    /// `"class"` writes refresh the class list (whitespace-split),
    /// `"style"` writes are parsed into the inline style map, and
    /// `"data-{key}"` writes land in the data map, the way real hosts keep
    /// those views in sync.
    pub fn set_attribute(&self, name: &str, value: &str) {
        match name {
            "class" => self.set_class_text(value),
            "style" => self.set_style_text(value),
            _ => match name.strip_prefix("data-") {
                Some(key) => self.data_set(key, value),
                None => self.put_attr(name, Some(value)),
            },
        }
    }

    /// Set a bare (valueless) boolean attribute.
    pub fn set_boolean_attribute(&self, name: &str) {
        self.put_attr(name, None);
    }

    /// Read an attribute value. Bare boolean attributes read as `""`;
    /// `"style"` reads back the serialized inline style map and
    /// `"data-{key}"` reads back the data map entry.
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        if name == "style" {
            let text = self.style_text();
            return if text.is_empty() { None } else { Some(text) };
        }
        if let Some(key) = name.strip_prefix("data-") {
            return self.data_get(key);
        }
        self.data()
            .attrs
            .borrow()
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v.as_ref().map(|v| v.as_str().to_owned()).unwrap_or_default())
    }

    /// Whether the attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        if name == "style" {
            return !self.data().styles.borrow().is_empty();
        }
        if let Some(key) = name.strip_prefix("data-") {
            return self.data_get(key).is_some();
        }
        self.data()
            .attrs
            .borrow()
            .iter()
            .any(|(n, _)| n.as_str() == name)
    }

    /// Remove an attribute. Removing `"class"` clears the class list,
    /// removing `"style"` clears the inline style map, and removing
    /// `"data-{key}"` drops the data map entry.
    pub fn remove_attribute(&self, name: &str) {
        match name {
            "class" => {
                self.data().classes.borrow_mut().clear();
                self.drop_attr("class");
            }
            "style" => self.data().styles.borrow_mut().clear(),
            _ => match name.strip_prefix("data-") {
                Some(key) => self
                    .data()
                    .dataset
                    .borrow_mut()
                    .retain(|(k, _)| k.as_str() != key),
                None => self.drop_attr(name),
            },
        }
    }

    /// Attribute names in application order. Includes `"style"` when the
    /// inline style map is non-empty and a `"data-{key}"` entry per data
    /// map member.
    pub fn attribute_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .data()
            .attrs
            .borrow()
            .iter()
            .map(|(n, _)| n.as_str().to_owned())
            .collect();
        if !self.data().styles.borrow().is_empty() && !names.iter().any(|n| n == "style") {
            names.push("style".to_owned());
        }
        for (key, _) in self.data().dataset.borrow().iter() {
            names.push(format!("data-{}", key.as_str()));
        }
        names
    }

    fn put_attr(&self, name: &str, value: Option<&str>) {
        let bump = self.document().bump();
        let mut attrs = self.data().attrs.borrow_mut();
        let value = value.map(|v| BumpString::from_str_in(v, bump));
        if let Some(entry) = attrs.iter_mut().find(|(n, _)| n.as_str() == name) {
            entry.1 = value;
        } else {
            attrs.push((BumpString::from_str_in(name, bump), value));
        }
    }

    fn drop_attr(&self, name: &str) {
        self.data()
            .attrs
            .borrow_mut()
            .retain(|(n, _)| n.as_str() != name);
    }

    // ------------------------------------------------------------------
    // Class list
    // ------------------------------------------------------------------

    /// Add a class token. De-duplicating; order-preserving.
    pub fn add_class(&self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let bump = self.document().bump();
        self.data()
            .classes
            .borrow_mut()
            .push(BumpString::from_str_in(class, bump));
        self.sync_class_attribute();
    }

    /// Remove a class token. No-op when absent.
    pub fn remove_class(&self, class: &str) {
        self.data()
            .classes
            .borrow_mut()
            .retain(|c| c.as_str() != class);
        self.sync_class_attribute();
    }

    /// Toggle a class token; returns whether it is present afterwards.
    pub fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Whether the class list contains a token.
    pub fn has_class(&self, class: &str) -> bool {
        self.data()
            .classes
            .borrow()
            .iter()
            .any(|c| c.as_str() == class)
    }

    /// The class tokens, in membership order.
    pub fn class_list(&self) -> Vec<String> {
        self.data()
            .classes
            .borrow()
            .iter()
            .map(|c| c.as_str().to_owned())
            .collect()
    }

    fn set_class_text(&self, value: &str) {
        {
            let bump = self.document().bump();
            let mut classes = self.data().classes.borrow_mut();
            classes.clear();
            for token in value.split_whitespace() {
                if !classes.iter().any(|c| c.as_str() == token) {
                    classes.push(BumpString::from_str_in(token, bump));
                }
            }
        }
        self.sync_class_attribute();
    }

    fn sync_class_attribute(&self) {
        let joined = self.class_list().join(" ");
        if joined.is_empty() {
            self.drop_attr("class");
        } else {
            self.put_attr("class", Some(&joined));
        }
    }

    // ------------------------------------------------------------------
    // Inline style map
    // ------------------------------------------------------------------

    /// Set an inline style property. The value is assigned as-is; no unit
    /// inference, no validation.
    pub fn style_set(&self, name: &str, value: &str) {
        let bump = self.document().bump();
        let mut styles = self.data().styles.borrow_mut();
        let value = BumpString::from_str_in(value, bump);
        if let Some(entry) = styles.iter_mut().find(|(n, _)| n.as_str() == name) {
            entry.1 = value;
        } else {
            styles.push((BumpString::from_str_in(name, bump), value));
        }
    }

    /// Read an inline style property.
    pub fn style_get(&self, name: &str) -> Option<String> {
        self.data()
            .styles
            .borrow()
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v.as_str().to_owned())
    }

    /// Remove an inline style property, returning it to its unset state.
    pub fn style_remove(&self, name: &str) {
        self.data()
            .styles
            .borrow_mut()
            .retain(|(n, _)| n.as_str() != name);
    }

    /// All inline style properties, in application order.
    pub fn styles(&self) -> Vec<(String, String)> {
        self.data()
            .styles
            .borrow()
            .iter()
            .map(|(n, v)| (n.as_str().to_owned(), v.as_str().to_owned()))
            .collect()
    }

    pub(crate) fn style_text(&self) -> String {
        self.styles()
            .iter()
            .map(|(n, v)| format!("{n}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set_style_text(&self, css: &str) {
        self.data().styles.borrow_mut().clear();
        for declaration in css.split(';') {
            if let Some((name, value)) = declaration.split_once(':') {
                let (name, value) = (name.trim(), value.trim());
                if !name.is_empty() {
                    self.style_set(name, value);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Data map
    // ------------------------------------------------------------------

    /// Set a custom data attribute (serialized as `data-{key}`).
    pub fn data_set(&self, key: &str, value: &str) {
        let bump = self.document().bump();
        let mut dataset = self.data().dataset.borrow_mut();
        let value = BumpString::from_str_in(value, bump);
        if let Some(entry) = dataset.iter_mut().find(|(k, _)| k.as_str() == key) {
            entry.1 = value;
        } else {
            dataset.push((BumpString::from_str_in(key, bump), value));
        }
    }

    /// Read a custom data attribute.
    pub fn data_get(&self, key: &str) -> Option<String> {
        self.data()
            .dataset
            .borrow()
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str().to_owned())
    }

    /// All custom data entries, in application order.
    pub fn dataset(&self) -> Vec<(String, String)> {
        self.data()
            .dataset
            .borrow()
            .iter()
            .map(|(k, v)| (k.as_str().to_owned(), v.as_str().to_owned()))
            .collect()
    }

    // ------------------------------------------------------------------
    // Tree mutation and queries
    // ------------------------------------------------------------------

    /// Append a node as the last child. If it was attached elsewhere it is
    /// moved here.
    ///
    /// # Panics
    ///
    /// Panics when the node is this element or one of its ancestors (a
    /// hierarchy violation, as the reference host throws).
    pub fn append_child(&self, child: impl Into<Node<'dom>>) {
        let child = child.into();
        self.assert_can_insert(child);
        child.remove();
        self.data().children.borrow_mut().push(child);
        child.0.parent.set(Some(*self));
    }

    /// Insert a node before `reference`, or append when `reference` is
    /// `None`. Inserting a node before itself is a no-op.
    ///
    /// # Panics
    ///
    /// Panics on a hierarchy violation, or when `reference` is not a child
    /// of this element.
    pub fn insert_before(&self, new: impl Into<Node<'dom>>, reference: Option<Node<'dom>>) {
        let new = new.into();
        let Some(reference) = reference else {
            self.append_child(new);
            return;
        };
        // Inserting a node before itself leaves the tree unchanged.
        if new == reference {
            return;
        }
        self.assert_can_insert(new);
        new.remove();
        {
            let mut children = self.data().children.borrow_mut();
            let Some(index) = children.iter().position(|n| *n == reference) else {
                panic!("reference node is not a child of this element");
            };
            children.insert(index, new);
        }
        new.0.parent.set(Some(*self));
    }

    /// Substitute `new` for `old` at the same position. No-op when `old`
    /// is not a child of this element.
    pub fn replace_child(&self, old: Node<'dom>, new: impl Into<Node<'dom>>) {
        let new = new.into();
        if old == new {
            return;
        }
        self.assert_can_insert(new);
        new.remove();
        let replaced = {
            let mut children = self.data().children.borrow_mut();
            match children.iter().position(|n| *n == old) {
                Some(index) => {
                    children[index] = new;
                    true
                }
                None => false,
            }
        };
        if replaced {
            old.0.parent.set(None);
            new.0.parent.set(Some(*self));
        }
    }

    /// Detach a child. No-op when the node is not a child of this element.
    pub fn remove_child(&self, child: impl Into<Node<'dom>>) {
        let child = child.into();
        let removed = {
            let mut children = self.data().children.borrow_mut();
            match children.iter().position(|n| *n == child) {
                Some(index) => {
                    children.remove(index);
                    true
                }
                None => false,
            }
        };
        if removed {
            child.0.parent.set(None);
        }
    }

    /// Insert nodes immediately before the current first child, preserving
    /// their relative order. Plain append when the element is childless.
    pub fn prepend(&self, nodes: impl IntoIterator<Item = Node<'dom>>) {
        let first = self.first_child();
        for node in nodes {
            self.insert_before(node, first);
        }
    }

    /// Detach the first child repeatedly until none remain.
    pub fn empty(&self) {
        while let Some(child) = self.first_child() {
            child.remove();
        }
    }

    /// A snapshot of the child list, in order.
    pub fn children(&self) -> Vec<Node<'dom>> {
        self.data().children.borrow().iter().copied().collect()
    }

    /// The first child, if any.
    pub fn first_child(&self) -> Option<Node<'dom>> {
        self.data().children.borrow().first().copied()
    }

    /// The number of children.
    pub fn child_count(&self) -> usize {
        self.data().children.borrow().len()
    }

    /// The concatenated text of this element's descendants.
    pub fn text_content(&self) -> String {
        self.as_node().text_content()
    }

    fn assert_can_insert(&self, node: Node<'dom>) {
        if let Some(element) = node.as_element() {
            let mut current = Some(*self);
            while let Some(ancestor) = current {
                if ancestor == element {
                    panic!("hierarchy violation: node is the insertion target or one of its ancestors");
                }
                current = ancestor.parent();
            }
        }
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// Set the inline `display` property to `"none"`.
    pub fn hide(&self) {
        self.style_set("display", "none");
    }

    /// Clear the inline `display` override, returning the property to its
    /// unset (inherited/default) state. Does not restore a prior explicit
    /// inline value.
    pub fn show(&self) {
        self.style_remove("display");
    }

    // ------------------------------------------------------------------
    // Geometry (pure reads over host-set state)
    // ------------------------------------------------------------------

    /// The offset-parent-relative top/left. Pure read.
    pub fn position(&self) -> Position {
        self.data().offset_position.get()
    }

    /// Store the offset-parent-relative position (set by the embedding
    /// layout layer).
    pub fn set_offset_position(&self, position: Position) {
        self.data().offset_position.set(position);
    }

    /// The element's bounding rectangle in viewport coordinates.
    pub fn bounding_rect(&self) -> ClientRect {
        self.data().bounding_rect.get()
    }

    /// Store the bounding rectangle (set by the embedding layout layer).
    pub fn set_bounding_rect(&self, rect: ClientRect) {
        self.data().bounding_rect.set(rect);
    }

    /// The viewport-relative top/left, adjusted for the document scroll
    /// offsets and root border. Pure read.
    pub fn offset(&self) -> Position {
        let rect = self.bounding_rect();
        let scroll = self.document().scroll();
        let border = self.document().root_border();
        Position {
            top: rect.top + scroll.top - border.top,
            left: rect.left + scroll.left - border.left,
        }
    }

    // ------------------------------------------------------------------
    // Selector matching
    // ------------------------------------------------------------------

    /// Whether this element satisfies a selector string.
    ///
    /// Delegated to the host selector engine; invalid selector syntax
    /// propagates as [`SelectorError`].
    pub fn matches(&self, selector: &str) -> Result<bool, SelectorError> {
        selector::matches(*self, selector)
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}
impl Eq for Element<'_> {}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_node(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    #[test]
    fn generic_class_write_refreshes_class_list() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc.create_element_node("div");

        el.set_attribute("class", "a  b a");
        assert_eq!(el.class_list(), vec!["a", "b"]);
        assert_eq!(el.get_attribute("class").as_deref(), Some("a b"));

        el.add_class("c");
        assert_eq!(el.get_attribute("class").as_deref(), Some("a b c"));

        el.remove_attribute("class");
        assert!(el.class_list().is_empty());
        assert_eq!(el.get_attribute("class"), None);
    }

    #[test]
    fn generic_style_write_parses_into_map() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc.create_element_node("div");

        el.set_attribute("style", "color: red; width : 10px ;");
        assert_eq!(el.style_get("color").as_deref(), Some("red"));
        assert_eq!(el.style_get("width").as_deref(), Some("10px"));
        assert_eq!(
            el.get_attribute("style").as_deref(),
            Some("color: red; width: 10px")
        );
    }

    #[test]
    fn boolean_attributes_read_as_empty() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc.create_element_node("input");

        el.set_boolean_attribute("disabled");
        assert!(el.has_attribute("disabled"));
        assert_eq!(el.get_attribute("disabled").as_deref(), Some(""));
        assert_eq!(el.get_attribute("checked"), None);
    }

    #[test]
    fn toggle_class() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc.create_element_node("div");

        assert!(el.toggle_class("on"));
        assert!(el.has_class("on"));
        assert!(!el.toggle_class("on"));
        assert!(!el.has_class("on"));
    }

    #[test]
    fn append_moves_between_parents() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let a = doc.create_element_node("div");
        let b = doc.create_element_node("div");
        let child = doc.create_element_node("span");

        a.append_child(child);
        assert_eq!(child.parent(), Some(a));
        b.append_child(child);
        assert_eq!(child.parent(), Some(b));
        assert_eq!(a.child_count(), 0);
        assert_eq!(b.children(), vec![child.as_node()]);
    }

    #[test]
    fn inserting_a_node_before_itself_keeps_its_position() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let parent = doc.create_element_node("ul");
        let a = doc.create_element_node("li");
        let b = doc.create_element_node("li");
        parent.append_child(a);
        parent.append_child(b);

        parent.insert_before(a, Some(a.as_node()));
        assert_eq!(parent.children(), vec![a.as_node(), b.as_node()]);
        assert_eq!(a.parent(), Some(parent));
    }

    #[test]
    fn data_entries_read_back_as_data_attributes() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc.create_element_node("div");

        el.data_set("foo", "bar");
        assert!(el.has_attribute("data-foo"));
        assert_eq!(el.get_attribute("data-foo").as_deref(), Some("bar"));
        assert_eq!(el.attribute_names(), vec!["data-foo"]);

        el.set_attribute("data-baz", "qux");
        assert_eq!(el.data_get("baz").as_deref(), Some("qux"));

        el.remove_attribute("data-foo");
        assert_eq!(el.data_get("foo"), None);
        assert!(!el.has_attribute("data-foo"));
    }

    #[test]
    #[should_panic(expected = "hierarchy violation")]
    fn appending_an_ancestor_panics() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let outer = doc.create_element_node("div");
        let inner = doc.create_element_node("div");
        outer.append_child(inner);
        inner.append_child(outer);
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc
            .div([], ["Hello, ".into(), doc.span([], ["world".into()]).unwrap().into()])
            .unwrap();
        assert_eq!(el.text_content(), "Hello, world");
    }
}
