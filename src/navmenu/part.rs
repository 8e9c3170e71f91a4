//! # Menu Parts
//!
//! A menu part is any node of the menu tree. The built-in kinds are [`Menu`],
//! [`LinkContainer`] and [`Link`]; applications may add their own kinds by
//! implementing [`MenuPart`] for their types.
//!
//! ## Rendering
//!
//! Every part renders through the same pipeline ([`render_template`]):
//!
//! 1. Find the template registered under the part's [`kind`](MenuPart::kind)
//! 2. Build the fill values: a common `attributes` value (the part's attributes
//!    with a leading space, or nothing) merged with the part's own values from
//!    [`prepare_template_values`](MenuPart::prepare_template_values)
//! 3. Fill the template
//!
//! The built-in kinds override [`render`](MenuPart::render) only to return an
//! empty string early when there is nothing to show, so no markup is emitted
//! around nothing and no template is needed for empty parts.
//!
//! ## Dispatch
//!
//! [`Node`] and [`NodeMut`] are the closed set of kinds a part can be seen as.
//! Visitors and visitor factories match on them instead of inspecting types at
//! runtime; anything that is not a built-in kind shows up as `Other`.

use crate::error::{MenuError, Result};
use crate::html::Attributes;
use crate::link::Link;
use crate::link_container::LinkContainer;
use crate::menu::Menu;
use crate::visitor::MenuPartVisitor;
use indexmap::IndexMap;
use navmenu_templates::{TemplateValues, Templates};
use tracing::trace;

/// Name of the placeholder every template may use for the part's attributes.
pub const ATTRIBUTES_PLACEHOLDER: &str = "attributes";

/// Shared view of a menu part, tagged by kind.
#[derive(Clone, Copy)]
pub enum Node<'a> {
    Menu(&'a Menu),
    LinkContainer(&'a LinkContainer),
    Link(&'a Link),
    Other(&'a dyn MenuPart),
}

/// Mutable view of a menu part, tagged by kind.
pub enum NodeMut<'a> {
    Menu(&'a mut Menu),
    LinkContainer(&'a mut LinkContainer),
    Link(&'a mut Link),
    Other(&'a mut dyn MenuPart),
}

impl<'a> Node<'a> {
    /// Returns the part behind this view.
    pub fn part(self) -> &'a dyn MenuPart {
        match self {
            Node::Menu(menu) => menu,
            Node::LinkContainer(container) => container,
            Node::Link(link) => link,
            Node::Other(part) => part,
        }
    }

    pub fn kind(self) -> &'a str {
        self.part().kind()
    }
}

impl<'a> NodeMut<'a> {
    /// Reborrows this view as a shared one.
    pub fn as_node(&self) -> Node<'_> {
        match self {
            NodeMut::Menu(menu) => Node::Menu(menu),
            NodeMut::LinkContainer(container) => Node::LinkContainer(container),
            NodeMut::Link(link) => Node::Link(link),
            NodeMut::Other(part) => Node::Other(&**part),
        }
    }

    /// Returns the part behind this view.
    pub fn into_part(self) -> &'a mut dyn MenuPart {
        match self {
            NodeMut::Menu(menu) => menu,
            NodeMut::LinkContainer(container) => container,
            NodeMut::Link(link) => link,
            NodeMut::Other(part) => part,
        }
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Menu(menu) => f.debug_tuple("Menu").field(menu).finish(),
            Node::LinkContainer(container) => {
                f.debug_tuple("LinkContainer").field(container).finish()
            }
            Node::Link(link) => f.debug_tuple("Link").field(link).finish(),
            Node::Other(part) => f.debug_tuple("Other").field(&part.kind()).finish(),
        }
    }
}

/// A node of the menu tree that can carry attributes, be visited and be rendered.
pub trait MenuPart {
    /// Index of the template used to render this part.
    fn kind(&self) -> &str;

    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Values used to fill this part's template, besides the common `attributes`.
    ///
    /// Containers render their children here, so this may fail with any
    /// rendering error.
    fn prepare_template_values(&self, templates: &Templates) -> Result<TemplateValues>;

    fn node(&self) -> Node<'_>;

    fn node_mut(&mut self) -> NodeMut<'_>;

    /// Renders this part using the given templates.
    fn render(&self, templates: &Templates) -> Result<String> {
        render_template(self, templates)
    }

    fn add_attribute(&mut self, name: &str, value: &str) {
        self.attributes_mut().add(name, value);
    }

    fn add_attributes(&mut self, attributes: Attributes) {
        self.attributes_mut().extend(attributes);
    }

    /// Exports the attributes; empty if none were added.
    fn attributes_as_map(&self) -> IndexMap<String, String> {
        self.attributes().to_map()
    }

    /// Runs the visitor on this part.
    fn accept(&mut self, visitor: &mut dyn MenuPartVisitor) {
        visitor.visit(self.node_mut());
    }
}

/// Renders a part with its own template, without any emptiness checks.
pub fn render_template<P: MenuPart + ?Sized>(part: &P, templates: &Templates) -> Result<String> {
    let kind = part.kind();
    let template = templates.find_template(kind)?;

    let mut values = TemplateValues::new();
    values.insert(
        ATTRIBUTES_PLACEHOLDER.to_string(),
        attributes_as_string(part.attributes()),
    );
    values.extend(part.prepare_template_values(templates)?);

    trace!(kind, "rendering menu part");
    template
        .fill(&values)
        .map_err(|err| MenuError::from_fill(kind, err))
}

fn attributes_as_string(attributes: &Attributes) -> String {
    if attributes.is_empty() {
        return String::new();
    }
    format!(" {}", attributes.as_string())
}
