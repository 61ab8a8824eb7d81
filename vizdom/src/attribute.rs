use std::fmt::Write as _;

/// A typed attribute value supplied to the element builder.
///
/// The builder skips [`AttrValue::None`] and `AttrValue::Bool(false)`
/// entries entirely, which makes conditional attributes cheap to express:
///
/// ```
/// use vizdom::{Attribute, AttrValue};
///
/// let selected = false;
/// let attr = Attribute::from(("selected", selected));
/// assert_eq!(attr.value, AttrValue::Bool(false)); // skipped at build time
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// No value; the attribute is skipped.
    None,
    /// A boolean. `false` skips the attribute; `true` sets a bare
    /// (valueless) attribute.
    Bool(bool),
    /// A string value.
    Text(String),
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A list of class-name tokens; `None` entries are skipped. Meaningful
    /// under the `"class"` name.
    Tokens(Vec<Option<String>>),
    /// A key/value mapping. Meaningful under the `"style"` (inline style
    /// properties) and `"data"` (custom data attributes) names.
    Map(Vec<(String, String)>),
}

impl AttrValue {
    /// Whether the builder skips this value outright (`None` or `false`).
    pub fn is_skipped(&self) -> bool {
        matches!(self, AttrValue::None | AttrValue::Bool(false))
    }

    /// The plain-string form used when the value lands on a generic
    /// attribute: scalars stringify, token lists join with spaces, and
    /// maps serialize as `key: value` pairs.
    pub(crate) fn to_plain_string(&self) -> String {
        match self {
            AttrValue::None => String::new(),
            AttrValue::Bool(b) => b.to_string(),
            AttrValue::Text(s) => s.clone(),
            AttrValue::Int(i) => i.to_string(),
            AttrValue::Float(f) => f.to_string(),
            AttrValue::Tokens(tokens) => tokens
                .iter()
                .flatten()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            AttrValue::Map(entries) => {
                let mut out = String::new();
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str("; ");
                    }
                    let _ = write!(out, "{key}: {value}");
                }
                out
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}
impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}
impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}
impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}
impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}
impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}
impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Int(value.into())
    }
}
impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}
impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => AttrValue::None,
        }
    }
}
impl From<Vec<&str>> for AttrValue {
    fn from(tokens: Vec<&str>) -> Self {
        AttrValue::Tokens(tokens.into_iter().map(|t| Some(t.to_owned())).collect())
    }
}
impl From<Vec<String>> for AttrValue {
    fn from(tokens: Vec<String>) -> Self {
        AttrValue::Tokens(tokens.into_iter().map(Some).collect())
    }
}
impl From<Vec<Option<&str>>> for AttrValue {
    fn from(tokens: Vec<Option<&str>>) -> Self {
        AttrValue::Tokens(
            tokens
                .into_iter()
                .map(|t| t.map(str::to_owned))
                .collect(),
        )
    }
}
impl From<Vec<Option<String>>> for AttrValue {
    fn from(tokens: Vec<Option<String>>) -> Self {
        AttrValue::Tokens(tokens)
    }
}
impl<const N: usize> From<[&str; N]> for AttrValue {
    fn from(tokens: [&str; N]) -> Self {
        AttrValue::Tokens(tokens.into_iter().map(|t| Some(t.to_owned())).collect())
    }
}
impl From<Vec<(&str, &str)>> for AttrValue {
    fn from(entries: Vec<(&str, &str)>) -> Self {
        AttrValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        )
    }
}
impl From<Vec<(String, String)>> for AttrValue {
    fn from(entries: Vec<(String, String)>) -> Self {
        AttrValue::Map(entries)
    }
}
impl<const N: usize> From<[(&str, &str); N]> for AttrValue {
    fn from(entries: [(&str, &str); N]) -> Self {
        AttrValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        )
    }
}

/// A key/value pair supplied to the element builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// The attribute name.
    pub name: String,
    /// The attribute value.
    pub value: AttrValue,
}

impl Attribute {
    /// Create an attribute from a name and anything convertible to an
    /// [`AttrValue`].
    pub fn new(name: &str, value: impl Into<AttrValue>) -> Self {
        Attribute {
            name: name.to_owned(),
            value: value.into(),
        }
    }

    /// Create a bare (valueless) boolean attribute.
    pub fn boolean(name: &str) -> Self {
        Attribute {
            name: name.to_owned(),
            value: AttrValue::Bool(true),
        }
    }

    /// The dispatch kind of this entry, resolved from the name plus the
    /// value shape.
    pub fn kind(&self) -> AttrKind {
        AttrKind::resolve(&self.name, &self.value)
    }
}

impl<V: Into<AttrValue>> From<(&str, V)> for Attribute {
    fn from((name, value): (&str, V)) -> Self {
        Attribute::new(name, value)
    }
}
impl<V: Into<AttrValue>> From<(String, V)> for Attribute {
    fn from((name, value): (String, V)) -> Self {
        Attribute {
            name,
            value: value.into(),
        }
    }
}
impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Attribute::boolean(name)
    }
}

/// How an attribute entry is applied to an element.
///
/// Resolved once per entry from the attribute name plus the value shape;
/// each kind has exactly one handler in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// A `"class"` entry with a token list: each non-`None` token is added
    /// to the element's class list.
    Class,
    /// A `"style"` entry with a map: each pair sets an inline style
    /// property, assigned as-is.
    Style,
    /// A `"data"` entry with a map: each pair sets a custom data attribute.
    Data,
    /// Anything else: a literal attribute set through the generic
    /// attribute primitive.
    Generic,
}

impl AttrKind {
    /// Resolve the kind for a name/value pair. The special names only
    /// trigger their kind when the value has the matching shape; a plain
    /// string under `"class"` is still a generic attribute.
    pub fn resolve(name: &str, value: &AttrValue) -> AttrKind {
        match (name, value) {
            ("class", AttrValue::Tokens(_)) => AttrKind::Class,
            ("style", AttrValue::Map(_)) => AttrKind::Style,
            ("data", AttrValue::Map(_)) => AttrKind::Data,
            _ => AttrKind::Generic,
        }
    }
}
