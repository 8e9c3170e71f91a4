use crate::error::Result;
use crate::html::Attributes;
use crate::link::Link;
use crate::part::{render_template, MenuPart, Node, NodeMut};
use navmenu_templates::{TemplateValues, Templates};
use once_cell::unsync::OnceCell;
use tracing::trace;

/// A container (wrapper) for a single link, e.g. a list item.
///
/// The rendered link is cached on first use and reused afterwards, even if a
/// different set of templates is passed in later. Borrowing the link mutably
/// through [`LinkContainer::link_mut`] drops the cache.
#[derive(Debug, Clone, Default)]
pub struct LinkContainer {
    link: Link,
    attributes: Attributes,
    link_rendered: OnceCell<String>,
}

impl LinkContainer {
    pub const KIND: &'static str = "link_container";

    pub fn new(link: Link) -> Self {
        Self {
            link,
            attributes: Attributes::new(),
            link_rendered: OnceCell::new(),
        }
    }

    /// Creates a container with a new link, applying the given attributes to
    /// the link and to the container.
    pub fn create(
        link_name: impl Into<String>,
        link_url: impl Into<String>,
        link_attributes: Option<Attributes>,
        container_attributes: Option<Attributes>,
    ) -> Self {
        let mut container = Self::new(Link::create(link_name, link_url, link_attributes));
        if let Some(attributes) = container_attributes {
            container.add_attributes(attributes);
        }
        container
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut Link {
        self.link_rendered.take();
        &mut self.link
    }

    /// True if the link is empty, i.e. the container renders to nothing.
    pub fn is_empty(&self) -> bool {
        self.link.is_empty()
    }

    fn render_link(&self, templates: &Templates) -> Result<&str> {
        self.link_rendered
            .get_or_try_init(|| self.link.render(templates))
            .map(String::as_str)
    }
}

impl PartialEq for LinkContainer {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link && self.attributes == other.attributes
    }
}

impl Eq for LinkContainer {}

impl MenuPart for LinkContainer {
    fn kind(&self) -> &str {
        Self::KIND
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn prepare_template_values(&self, templates: &Templates) -> Result<TemplateValues> {
        let link = self.render_link(templates)?;
        Ok(TemplateValues::from([("link".to_string(), link.to_string())]))
    }

    fn node(&self) -> Node<'_> {
        Node::LinkContainer(self)
    }

    fn node_mut(&mut self) -> NodeMut<'_> {
        NodeMut::LinkContainer(self)
    }

    fn render(&self, templates: &Templates) -> Result<String> {
        if self.render_link(templates)?.is_empty() {
            trace!("skipping container of an empty link");
            return Ok(String::new());
        }
        render_template(self, templates)
    }
}
