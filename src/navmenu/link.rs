use crate::error::Result;
use crate::html::Attributes;
use crate::part::{render_template, MenuPart, Node, NodeMut};
use navmenu_templates::{TemplateValues, Templates};
use tracing::trace;

/// A link: the leaf of the menu tree.
///
/// A link without a name is treated as absent and renders to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    name: String,
    url: String,
    attributes: Attributes,
}

impl Link {
    pub const KIND: &'static str = "link";

    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            attributes: Attributes::new(),
        }
    }

    /// Creates a link and applies the given attributes, if any.
    pub fn create(
        name: impl Into<String>,
        url: impl Into<String>,
        attributes: Option<Attributes>,
    ) -> Self {
        let mut link = Self::new(name, url);
        if let Some(attributes) = attributes {
            link.add_attributes(attributes);
        }
        link
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// True if the link has no name, i.e. renders to nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl MenuPart for Link {
    fn kind(&self) -> &str {
        Self::KIND
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn prepare_template_values(&self, _templates: &Templates) -> Result<TemplateValues> {
        Ok(TemplateValues::from([
            ("name".to_string(), self.name.clone()),
            ("url".to_string(), self.url.clone()),
        ]))
    }

    fn node(&self) -> Node<'_> {
        Node::Link(self)
    }

    fn node_mut(&mut self) -> NodeMut<'_> {
        NodeMut::Link(self)
    }

    fn render(&self, templates: &Templates) -> Result<String> {
        if self.is_empty() {
            trace!(url = %self.url, "skipping link without name");
            return Ok(String::new());
        }
        render_template(self, templates)
    }
}
