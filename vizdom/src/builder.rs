//! The declarative element builder: `create_element` plus one bound
//! constructor per supported tag name.

use crate::attribute::{AttrKind, AttrValue, Attribute};
use crate::child::{Child, InvalidChildError};
use crate::{Document, Element};

impl<'dom> Document<'dom> {
    /// Build an element of kind `tag` with attributes applied and children
    /// appended, in one expression.
    ///
    /// Attributes are applied in the supplied order; `None` and `false`
    /// values are skipped, and each entry dispatches on its [`AttrKind`]
    /// (class list, style map, data map, or generic). Children are appended
    /// in the supplied order, with nested lists flattened in-order
    /// depth-first and `Child::None` entries ignored.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidChildError`] when a child value is outside the
    /// contract (a number, `true`). The partially configured element stays
    /// allocated in the arena but detached and unreturned.
    ///
    /// # Example
    ///
    /// ```
    /// use vizdom::{bumpalo::Bump, Document};
    ///
    /// let bump = Bump::new();
    /// let doc = Document::new(&bump);
    /// let item = doc.li([], ["first".into()]).unwrap();
    /// let list = doc
    ///     .ul(
    ///         [("class", vec!["items", "wide"]).into()],
    ///         [item.into(), "second".into()],
    ///     )
    ///     .unwrap();
    /// assert_eq!(
    ///     list.outer_html().unwrap(),
    ///     r#"<ul class="items wide"><li>first</li>second</ul>"#
    /// );
    /// ```
    pub fn create_element<A, C>(
        &self,
        tag: &str,
        attrs: A,
        children: C,
    ) -> Result<Element<'dom>, InvalidChildError>
    where
        A: IntoIterator<Item = Attribute>,
        C: IntoIterator<Item = Child<'dom>>,
    {
        let element = self.create_element_node(tag);

        for attr in attrs {
            if attr.value.is_skipped() {
                continue;
            }
            match (attr.kind(), attr.value) {
                (AttrKind::Class, AttrValue::Tokens(tokens)) => {
                    for token in tokens.into_iter().flatten() {
                        element.add_class(&token);
                    }
                }
                (AttrKind::Style, AttrValue::Map(properties)) => {
                    for (name, value) in properties {
                        element.style_set(&name, &value);
                    }
                }
                (AttrKind::Data, AttrValue::Map(entries)) => {
                    for (key, value) in entries {
                        element.data_set(&key, &value);
                    }
                }
                (_, AttrValue::Bool(true)) => element.set_boolean_attribute(&attr.name),
                (_, value) => element.set_attribute(&attr.name, &value.to_plain_string()),
            }
        }

        for child in children {
            append(element, child)?;
        }

        Ok(element)
    }
}

/// Append one child value, recursing through nested lists.
fn append<'dom>(element: Element<'dom>, child: Child<'dom>) -> Result<(), InvalidChildError> {
    match child {
        Child::None => {}
        Child::Text(text) => {
            let node = element.document().create_text_node(&text);
            element.append_child(node);
        }
        Child::Node(node) => element.append_child(node),
        Child::List(children) => {
            for child in children {
                append(element, child)?;
            }
        }
        Child::Other(value) => return Err(InvalidChildError { value }),
    }
    Ok(())
}

macro_rules! tag_constructors {
    ($($tag:ident),* $(,)?) => {
        impl<'dom> Document<'dom> {
            $(
                #[doc = concat!("Build a `<", stringify!($tag), ">` element; fixes the tag and forwards to [`Document::create_element`].")]
                pub fn $tag<A, C>(&self, attrs: A, children: C) -> Result<Element<'dom>, InvalidChildError>
                where
                    A: IntoIterator<Item = Attribute>,
                    C: IntoIterator<Item = Child<'dom>>,
                {
                    self.create_element(stringify!($tag), attrs, children)
                }
            )*
        }
        /// The tag names with a dedicated constructor.
        pub const TAG_NAMES: &[&str] = &[$(stringify!($tag)),*];
    };
}

tag_constructors! {
    div, span, link, style, a, p, pre, button,
    label, input, select, option, canvas, ul, ol, li,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;

    #[test]
    fn null_and_false_attributes_never_appear() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc
            .input(
                [
                    ("type", "checkbox").into(),
                    ("checked", false).into(),
                    ("title", None::<&str>).into(),
                    ("disabled", true).into(),
                ],
                [],
            )
            .unwrap();

        assert_eq!(el.get_attribute("type").as_deref(), Some("checkbox"));
        assert!(!el.has_attribute("checked"));
        assert!(!el.has_attribute("title"));
        assert!(el.has_attribute("disabled"));
        assert_eq!(el.get_attribute("disabled").as_deref(), Some(""));
    }

    #[test]
    fn class_tokens_skip_null_entries_in_order() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc
            .div(
                [("class", vec![Some("c1"), Some("c2"), None, Some("c3")]).into()],
                [],
            )
            .unwrap();
        assert_eq!(el.class_list(), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn style_map_sets_exactly_the_given_properties() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc
            .div(
                [("style", vec![("color", "red"), ("width", "10px")]).into()],
                [],
            )
            .unwrap();
        assert_eq!(el.style_get("color").as_deref(), Some("red"));
        assert_eq!(el.style_get("width").as_deref(), Some("10px"));
        assert_eq!(el.styles().len(), 2);
    }

    #[test]
    fn data_map_sets_data_accessors() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc
            .div([("data", vec![("foo", "bar")]).into()], [])
            .unwrap();
        assert_eq!(el.data_get("foo").as_deref(), Some("bar"));
        assert_eq!(el.data_get("baz"), None);
    }

    #[test]
    fn special_shapes_under_other_names_stay_generic() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc
            .a([("rel", vec!["noopener", "noreferrer"]).into()], [])
            .unwrap();
        assert!(el.class_list().is_empty());
        assert_eq!(
            el.get_attribute("rel").as_deref(),
            Some("noopener noreferrer")
        );
    }

    #[test]
    fn scalar_attributes_stringify() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc
            .canvas([("width", 150).into(), ("height", 80.5).into()], [])
            .unwrap();
        assert_eq!(el.get_attribute("width").as_deref(), Some("150"));
        assert_eq!(el.get_attribute("height").as_deref(), Some("80.5"));
    }

    #[test]
    fn children_flatten_in_order() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let li1 = doc.li([], []).unwrap();
        let li2 = doc.li([], []).unwrap();
        let li3 = doc.li([], []).unwrap();
        let list = doc
            .ul(
                [],
                [
                    li1.into(),
                    vec![Child::from(li2), li3.into()].into(),
                    false.into(),
                    "text".into(),
                ],
            )
            .unwrap();

        let children = list.children();
        assert_eq!(children.len(), 4);
        assert_eq!(children[0], li1.as_node());
        assert_eq!(children[1], li2.as_node());
        assert_eq!(children[2], li3.as_node());
        let text = children[3].as_text().unwrap();
        assert_eq!(text.data(), "text");
    }

    #[test]
    fn deeply_nested_lists_flatten_depth_first() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let el = doc
            .div(
                [],
                [Child::List(vec![
                    "a".into(),
                    Child::List(vec!["b".into(), "c".into()]),
                    "d".into(),
                ])],
            )
            .unwrap();
        assert_eq!(el.text_content(), "abcd");
    }

    #[test]
    fn numeric_child_fails_with_invalid_child_error() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let err = doc.div([], [42.into()]).unwrap_err();
        assert_eq!(err.value, "42");

        let err = doc.div([], [true.into()]).unwrap_err();
        assert_eq!(err.value, "true");
    }

    #[test]
    fn failed_builds_keep_earlier_children_detached() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let child = doc.span([], []).unwrap();
        // The bad value aborts the build after `child` was appended to the
        // unreturned element; `child` must not be reachable from a live tree.
        let err = doc.div([], [child.into(), 7.into()]).unwrap_err();
        assert_eq!(err.value, "7");
        assert!(child.parent().is_some());
        assert!(child.parent().unwrap().parent().is_none());
    }

    #[test]
    fn appending_an_attached_element_moves_it() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        let child = doc.span([], []).unwrap();
        let first = doc.div([], [child.into()]).unwrap();
        let second = doc.div([], [child.into()]).unwrap();

        assert_eq!(first.child_count(), 0);
        assert_eq!(second.children(), vec![child.as_node()]);
    }

    #[test]
    fn every_tag_constructor_uses_its_tag() {
        let bump = Bump::new();
        let doc = Document::new(&bump);
        assert_eq!(doc.div([], []).unwrap().tag_name(), "div");
        assert_eq!(doc.span([], []).unwrap().tag_name(), "span");
        assert_eq!(doc.link([], []).unwrap().tag_name(), "link");
        assert_eq!(doc.style([], []).unwrap().tag_name(), "style");
        assert_eq!(doc.a([], []).unwrap().tag_name(), "a");
        assert_eq!(doc.p([], []).unwrap().tag_name(), "p");
        assert_eq!(doc.pre([], []).unwrap().tag_name(), "pre");
        assert_eq!(doc.button([], []).unwrap().tag_name(), "button");
        assert_eq!(doc.label([], []).unwrap().tag_name(), "label");
        assert_eq!(doc.input([], []).unwrap().tag_name(), "input");
        assert_eq!(doc.select([], []).unwrap().tag_name(), "select");
        assert_eq!(doc.option([], []).unwrap().tag_name(), "option");
        assert_eq!(doc.canvas([], []).unwrap().tag_name(), "canvas");
        assert_eq!(doc.ul([], []).unwrap().tag_name(), "ul");
        assert_eq!(doc.ol([], []).unwrap().tag_name(), "ol");
        assert_eq!(doc.li([], []).unwrap().tag_name(), "li");
        assert_eq!(TAG_NAMES.len(), 16);
    }
}
