use crate::error::Result;
use crate::html::Attributes;
use crate::link_container::LinkContainer;
use crate::part::{render_template, MenuPart, Node, NodeMut};
use crate::visitor::MenuPartVisitor;
use navmenu_templates::{TemplateValues, Templates};
use once_cell::unsync::OnceCell;
use tracing::trace;

/// Whitespace stripped around the rendered containers. Other Unicode spaces
/// belong to link names and are kept.
const TRIMMED_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Data of one link used by [`Menu::create`]: name, url, and optional
/// attributes of the link and of its container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSpec {
    pub name: String,
    pub url: String,
    pub link_attributes: Option<Attributes>,
    pub container_attributes: Option<Attributes>,
}

impl LinkSpec {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_link_attributes(mut self, attributes: Attributes) -> Self {
        self.link_attributes = Some(attributes);
        self
    }

    pub fn with_container_attributes(mut self, attributes: Attributes) -> Self {
        self.container_attributes = Some(attributes);
        self
    }

    fn into_container(self) -> LinkContainer {
        LinkContainer::create(
            self.name,
            self.url,
            self.link_attributes,
            self.container_attributes,
        )
    }
}

impl From<(&str, &str)> for LinkSpec {
    fn from((name, url): (&str, &str)) -> Self {
        Self::new(name, url)
    }
}

impl From<(String, String)> for LinkSpec {
    fn from((name, url): (String, String)) -> Self {
        Self::new(name, url)
    }
}

/// A menu: an ordered list of containers with links.
///
/// The rendered containers are cached on first use. Borrowing the containers
/// mutably through [`Menu::links_containers_mut`] or visiting the whole tree with
/// [`Menu::accept_all`] drops the cache.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    links_containers: Vec<LinkContainer>,
    attributes: Attributes,
    links_containers_rendered: OnceCell<String>,
}

impl Menu {
    pub const KIND: &'static str = "menu";

    pub fn new(links_containers: Vec<LinkContainer>) -> Self {
        Self {
            links_containers,
            attributes: Attributes::new(),
            links_containers_rendered: OnceCell::new(),
        }
    }

    /// Creates a menu with one container per link.
    ///
    /// Returns `None` if no links are given.
    ///
    /// # Example
    ///
    /// ```rust
    /// use navmenu::{Attributes, LinkSpec, Menu};
    ///
    /// let menu = Menu::create(
    ///     [
    ///         LinkSpec::new("Home", "/"),
    ///         LinkSpec::new("Contact", "/contact")
    ///             .with_container_attributes(Attributes::from([("class", "last")])),
    ///     ],
    ///     Some(Attributes::from([("id", "main-menu")])),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(menu.links_containers().len(), 2);
    /// assert!(Menu::create(Vec::<LinkSpec>::new(), None).is_none());
    /// ```
    pub fn create<I, S>(links: I, menu_attributes: Option<Attributes>) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<LinkSpec>,
    {
        let links_containers: Vec<LinkContainer> = links
            .into_iter()
            .map(Into::<LinkSpec>::into)
            .map(LinkSpec::into_container)
            .collect();

        if links_containers.is_empty() {
            return None;
        }

        let mut menu = Self::new(links_containers);
        if let Some(attributes) = menu_attributes {
            menu.add_attributes(attributes);
        }
        Some(menu)
    }

    pub fn links_containers(&self) -> &[LinkContainer] {
        &self.links_containers
    }

    pub fn links_containers_mut(&mut self) -> &mut [LinkContainer] {
        self.links_containers_rendered.take();
        &mut self.links_containers
    }

    /// True if the menu has no containers or none of them has a link to show.
    pub fn is_empty(&self) -> bool {
        self.links_containers.iter().all(LinkContainer::is_empty)
    }

    /// Returns the menu itself, then all containers, then all links.
    pub fn get_all_menu_parts(&self) -> Vec<Node<'_>> {
        let mut parts = Vec::with_capacity(1 + self.links_containers.len() * 2);
        parts.push(Node::Menu(self));
        parts.extend(self.links_containers.iter().map(Node::LinkContainer));
        parts.extend(
            self.links_containers
                .iter()
                .map(|container| Node::Link(container.link())),
        );
        parts
    }

    /// Runs the visitor on every part, in the order of [`Menu::get_all_menu_parts`].
    pub fn accept_all(&mut self, visitor: &mut dyn MenuPartVisitor) {
        self.accept(visitor);

        for container in self.links_containers_mut() {
            container.accept(visitor);
        }
        for container in self.links_containers_mut() {
            container.link_mut().accept(visitor);
        }
    }

    fn render_links_containers(&self, templates: &Templates) -> Result<&str> {
        self.links_containers_rendered
            .get_or_try_init(|| -> Result<String> {
                let mut rendered = String::new();
                for container in &self.links_containers {
                    rendered.push_str(&container.render(templates)?);
                }
                Ok(rendered.trim_matches(&TRIMMED_CHARS[..]).to_string())
            })
            .map(String::as_str)
    }
}

impl PartialEq for Menu {
    fn eq(&self, other: &Self) -> bool {
        self.links_containers == other.links_containers && self.attributes == other.attributes
    }
}

impl Eq for Menu {}

impl MenuPart for Menu {
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
        let rendered = self.render_links_containers(templates)?;
        Ok(TemplateValues::from([(
            "linksContainers".to_string(),
            rendered.to_string(),
        )]))
    }

    fn node(&self) -> Node<'_> {
        Node::Menu(self)
    }

    fn node_mut(&mut self) -> NodeMut<'_> {
        NodeMut::Menu(self)
    }

    fn render(&self, templates: &Templates) -> Result<String> {
        if self.links_containers.is_empty() {
            trace!("skipping menu without containers");
            return Ok(String::new());
        }

        if self.render_links_containers(templates)?.is_empty() {
            trace!("skipping menu with empty containers only");
            return Ok(String::new());
        }

        render_template(self, templates)
    }
}
