use std::error::Error;
use std::fmt;

use crate::{Element, Node, Text};

/// A child value supplied to the element builder.
///
/// Children form a tree: a [`Child::List`] is flattened in place, in-order
/// depth-first, when the element is built. `false` and `None` convert to
/// [`Child::None`] so conditional children can be written inline:
///
/// ```
/// use vizdom::{bumpalo::Bump, Child, Document};
///
/// let bump = Bump::new();
/// let doc = Document::new(&bump);
/// let expanded = false;
/// let el = doc
///     .div([], [Child::from("always"), expanded.into()])
///     .unwrap();
/// assert_eq!(el.child_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub enum Child<'dom> {
    /// Contributes nothing; `false` and `None` convert to this.
    None,
    /// Text, appended as a new text node.
    Text(String),
    /// An already-constructed node, appended as-is. If it was attached
    /// elsewhere it is moved.
    Node(Node<'dom>),
    /// A nested sequence, flattened in order.
    List(Vec<Child<'dom>>),
    /// A value outside the contract (a number, `true`). Carries a rendering
    /// of the offending value and always fails the build with
    /// [`InvalidChildError`].
    Other(String),
}

impl<'dom> From<&str> for Child<'dom> {
    fn from(text: &str) -> Self {
        Child::Text(text.to_owned())
    }
}
impl<'dom> From<String> for Child<'dom> {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}
impl<'dom> From<&String> for Child<'dom> {
    fn from(text: &String) -> Self {
        Child::Text(text.clone())
    }
}
impl<'dom> From<Node<'dom>> for Child<'dom> {
    fn from(node: Node<'dom>) -> Self {
        Child::Node(node)
    }
}
impl<'dom> From<Element<'dom>> for Child<'dom> {
    fn from(element: Element<'dom>) -> Self {
        Child::Node(element.as_node())
    }
}
impl<'dom> From<Text<'dom>> for Child<'dom> {
    fn from(text: Text<'dom>) -> Self {
        Child::Node(text.as_node())
    }
}
impl<'dom> From<bool> for Child<'dom> {
    fn from(value: bool) -> Self {
        if value {
            Child::Other("true".to_owned())
        } else {
            Child::None
        }
    }
}
impl<'dom> From<i32> for Child<'dom> {
    fn from(value: i32) -> Self {
        Child::Other(value.to_string())
    }
}
impl<'dom> From<i64> for Child<'dom> {
    fn from(value: i64) -> Self {
        Child::Other(value.to_string())
    }
}
impl<'dom> From<f64> for Child<'dom> {
    fn from(value: f64) -> Self {
        Child::Other(value.to_string())
    }
}
impl<'dom, T: Into<Child<'dom>>> From<Option<T>> for Child<'dom> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Child::None,
        }
    }
}
impl<'dom, T: Into<Child<'dom>>> From<Vec<T>> for Child<'dom> {
    fn from(children: Vec<T>) -> Self {
        Child::List(children.into_iter().map(Into::into).collect())
    }
}
impl<'dom, T: Into<Child<'dom>>, const N: usize> From<[T; N]> for Child<'dom> {
    fn from(children: [T; N]) -> Self {
        Child::List(children.into_iter().map(Into::into).collect())
    }
}

/// A child value was none of text, element, `false`/`None`, or a nested
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChildError {
    /// A rendering of the offending value, for diagnostics.
    pub value: String,
}

impl fmt::Display for InvalidChildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected an element, string, false or null, got {}",
            self.value
        )
    }
}

impl Error for InvalidChildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditional_conversions() {
        assert!(matches!(Child::from(false), Child::None));
        assert!(matches!(Child::from(None::<&str>), Child::None));
        assert!(matches!(Child::from(Some("x")), Child::Text(_)));
    }

    #[test]
    fn rejected_conversions() {
        assert!(matches!(Child::from(true), Child::Other(v) if v == "true"));
        assert!(matches!(Child::from(42), Child::Other(v) if v == "42"));
        assert!(matches!(Child::from(1.5), Child::Other(v) if v == "1.5"));
    }

    #[test]
    fn error_message_names_the_value() {
        let err = InvalidChildError {
            value: "42".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "expected an element, string, false or null, got 42"
        );
    }
}
