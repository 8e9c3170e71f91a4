use super::value::AttributeValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the attribute holding CSS classes.
pub const ATTRIBUTE_CSS_CLASS: &str = "class";

/// Ordered collection of HTML attributes.
///
/// Names are unique: adding an existing name overwrites its value but keeps the
/// position it was first added at, so serialization is stable. Attributes with an
/// empty name are ignored.
///
/// # Example
///
/// ```rust
/// use navmenu::html::Attributes;
///
/// let mut attributes = Attributes::from([("id", "main"), ("class", "nav")]);
/// attributes.add("data-position", 12);
/// attributes.add("id", "left");
///
/// assert_eq!(attributes.as_string(), r#"id="left" class="nav" data-position="12""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, String>",
    into = "IndexMap<String, String>"
)]
pub struct Attributes {
    elements: IndexMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, replacing the value of an existing one with the same name.
    pub fn add<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: AttributeValue,
    {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.elements.insert(name, value.into_attribute_value());
    }

    /// Adds each pair in iteration order. Later duplicates win.
    pub fn add_multiple<I, N, V>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: AttributeValue,
    {
        for (name, value) in attributes {
            self.add(name, value);
        }
    }

    /// Merges another collection into this one.
    pub fn extend(&mut self, other: Attributes) {
        self.add_multiple(other.elements);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.elements.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.elements.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.elements
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Exports the attributes as an ordered map.
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.elements.clone()
    }

    /// Serializes as `name="value"` pairs joined with single spaces.
    ///
    /// Returns an empty string if there are no attributes.
    pub fn as_string(&self) -> String {
        self.elements
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl<N, V, const SIZE: usize> From<[(N, V); SIZE]> for Attributes
where
    N: Into<String>,
    V: AttributeValue,
{
    fn from(attributes: [(N, V); SIZE]) -> Self {
        attributes.into_iter().collect()
    }
}

impl From<IndexMap<String, String>> for Attributes {
    fn from(elements: IndexMap<String, String>) -> Self {
        elements.into_iter().collect()
    }
}

impl From<Attributes> for IndexMap<String, String> {
    fn from(attributes: Attributes) -> Self {
        attributes.elements
    }
}

impl<N, V> FromIterator<(N, V)> for Attributes
where
    N: Into<String>,
    V: AttributeValue,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        attributes.add_multiple(iter);
        attributes
    }
}

impl IntoIterator for Attributes {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
