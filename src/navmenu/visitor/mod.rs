//! # Visitors
//!
//! Visitors run functionality outside of the menu parts, typically to decorate a
//! built menu with presentation attributes (CSS classes, ids, `data-*`) without
//! touching the code that builds it.
//!
//! ## Two Ways to Visit
//!
//! 1. **Direct dispatch**: implement [`KindVisitor`] with one hook per built-in
//!    kind. [`dispatch`] routes each part to exactly one hook, checking Menu, then
//!    LinkContainer, then Link. Other kinds go to [`KindVisitor::visit_other`],
//!    which does nothing unless overridden.
//!
//! 2. **Factory-mediated**: wrap a [`VisitorFactory`] in a [`Visitor`]. For every
//!    visited part the factory manufactures a visitor suited for that part (or
//!    none, making the visit a no-op), and that visitor does the work.
//!
//! Both designs implement [`MenuPartVisitor`], the one capability a part needs
//! to [`accept`](crate::MenuPart::accept) a visitor. Visiting never fails.
//!
//! ## Example
//!
//! ```rust
//! use navmenu::{KindVisitor, Link, LinkContainer, Menu, MenuPart};
//!
//! struct ActiveLink<'a>(&'a str);
//!
//! impl KindVisitor for ActiveLink<'_> {
//!     fn visit_menu(&mut self, _menu: &mut Menu) {}
//!
//!     fn visit_link_container(&mut self, _container: &mut LinkContainer) {}
//!
//!     fn visit_link(&mut self, link: &mut Link) {
//!         if link.url() == self.0 {
//!             link.add_attribute("class", "active");
//!         }
//!     }
//! }
//!
//! let mut menu = Menu::create([("Home", "/"), ("Blog", "/blog")], None).unwrap();
//! menu.accept_all(&mut ActiveLink("/blog"));
//!
//! let links = menu.links_containers();
//! assert!(links[0].link().attributes().is_empty());
//! assert_eq!(links[1].link().attributes().get("class"), Some("active"));
//! ```

mod factory;

pub use factory::{KindVisitorFactory, VisitorFactory};

use crate::link::Link;
use crate::link_container::LinkContainer;
use crate::menu::Menu;
use crate::part::{MenuPart, NodeMut};
use tracing::trace;

/// Visitor of any menu part.
pub trait MenuPartVisitor {
    fn visit(&mut self, part: NodeMut<'_>);
}

/// Visitor with one hook per built-in kind of menu part.
pub trait KindVisitor {
    fn visit_menu(&mut self, menu: &mut Menu);

    fn visit_link_container(&mut self, link_container: &mut LinkContainer);

    fn visit_link(&mut self, link: &mut Link);

    /// Called for parts of any other kind. Does nothing by default.
    fn visit_other(&mut self, _part: &mut dyn MenuPart) {}
}

/// Routes the part to exactly one hook of the visitor.
pub fn dispatch<V: KindVisitor + ?Sized>(visitor: &mut V, part: NodeMut<'_>) {
    match part {
        NodeMut::Menu(menu) => visitor.visit_menu(menu),
        NodeMut::LinkContainer(link_container) => visitor.visit_link_container(link_container),
        NodeMut::Link(link) => visitor.visit_link(link),
        NodeMut::Other(part) => visitor.visit_other(part),
    }
}

impl<V: KindVisitor> MenuPartVisitor for V {
    fn visit(&mut self, part: NodeMut<'_>) {
        dispatch(self, part);
    }
}

/// Visitor delegating to visitors manufactured by a factory, one per part.
#[derive(Debug, Clone, Default)]
pub struct Visitor<F> {
    factory: F,
}

impl<F: VisitorFactory> Visitor<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F: VisitorFactory> MenuPartVisitor for Visitor<F> {
    fn visit(&mut self, part: NodeMut<'_>) {
        let Some(mut visitor) = self.factory.create_visitor(part.as_node()) else {
            trace!(kind = part.as_node().kind(), "no visitor for menu part");
            return;
        };
        visitor.visit(part);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::html::ATTRIBUTE_CSS_CLASS;
    use crate::part::tests::{MyFirstMenuPart, MySecondMenuPart};
    use crate::part::Node;

    /// Adds `id="main-menu"` to menus.
    pub(crate) struct MyFirstMenuVisitor;

    impl MenuPartVisitor for MyFirstMenuVisitor {
        fn visit(&mut self, part: NodeMut<'_>) {
            if let NodeMut::Menu(menu) = part {
                menu.add_attribute("id", "main-menu");
            }
        }
    }

    /// Adds `class="link-wrapper"` to containers.
    pub(crate) struct MyFirstLinkContainerVisitor;

    impl MenuPartVisitor for MyFirstLinkContainerVisitor {
        fn visit(&mut self, part: NodeMut<'_>) {
            if let NodeMut::LinkContainer(container) = part {
                container.add_attribute(ATTRIBUTE_CSS_CLASS, "link-wrapper");
            }
        }
    }

    /// Adds `data-start="true"` to links.
    pub(crate) struct MyFirstLinkVisitor;

    impl MenuPartVisitor for MyFirstLinkVisitor {
        fn visit(&mut self, part: NodeMut<'_>) {
            if let NodeMut::Link(link) = part {
                link.add_attribute("data-start", "true");
            }
        }
    }

    pub(crate) struct MyFirstVisitorFactory;

    impl KindVisitorFactory for MyFirstVisitorFactory {
        fn create_menu_visitor(&self, _menu: &Menu) -> Box<dyn MenuPartVisitor> {
            Box::new(MyFirstMenuVisitor)
        }

        fn create_link_container_visitor(
            &self,
            _link_container: &LinkContainer,
        ) -> Box<dyn MenuPartVisitor> {
            Box::new(MyFirstLinkContainerVisitor)
        }

        fn create_link_visitor(&self, _link: &Link) -> Box<dyn MenuPartVisitor> {
            Box::new(MyFirstLinkVisitor)
        }
    }

    /// Adds `id="second-level"` to menus.
    pub(crate) struct MySecondMenuVisitor;

    impl MenuPartVisitor for MySecondMenuVisitor {
        fn visit(&mut self, part: NodeMut<'_>) {
            if let NodeMut::Menu(menu) = part {
                menu.add_attribute("id", "second-level");
            }
        }
    }

    /// Handles the extension kinds only.
    pub(crate) struct MySecondVisitor;

    impl MenuPartVisitor for MySecondVisitor {
        fn visit(&mut self, part: NodeMut<'_>) {
            let NodeMut::Other(part) = part else {
                return;
            };

            match part.kind() {
                MyFirstMenuPart::KIND if part.attributes().is_empty() => {
                    part.add_attribute(ATTRIBUTE_CSS_CLASS, "visible");
                }
                MySecondMenuPart::KIND if !part.attributes().is_empty() => {
                    part.add_attribute(ATTRIBUTE_CSS_CLASS, "second-menu");
                }
                _ => {}
            }
        }
    }

    /// Factory knowing menus and the second extension kind only.
    pub(crate) struct MySecondVisitorFactory;

    impl VisitorFactory for MySecondVisitorFactory {
        fn create_visitor(&self, part: Node<'_>) -> Option<Box<dyn MenuPartVisitor>> {
            match part {
                Node::Menu(_) => Some(Box::new(MySecondMenuVisitor)),
                Node::Other(part) if part.kind() == MySecondMenuPart::KIND => {
                    Some(Box::new(MySecondVisitor))
                }
                _ => None,
            }
        }
    }

    /// Custom visitor matching on kinds directly, extension kinds included.
    struct MyFirstVisitor;

    impl MenuPartVisitor for MyFirstVisitor {
        fn visit(&mut self, part: NodeMut<'_>) {
            match part {
                NodeMut::Menu(menu) => menu.add_attribute("id", "just-testing"),
                NodeMut::LinkContainer(container) => {
                    container.add_attribute(ATTRIBUTE_CSS_CLASS, "first-container")
                }
                NodeMut::Link(link) => link.add_attributes(
                    [
                        ("id", "test"),
                        ("data-start", "true"),
                        (ATTRIBUTE_CSS_CLASS, "blue-box"),
                    ]
                    .into(),
                ),
                NodeMut::Other(part) if part.kind() == MyFirstMenuPart::KIND => {
                    if part.attributes().is_empty() {
                        part.add_attribute(ATTRIBUTE_CSS_CLASS, "visible");
                    }
                }
                NodeMut::Other(_) => {}
            }
        }
    }

    /// Records which hook fired.
    #[derive(Default)]
    struct RecordingVisitor {
        calls: Vec<&'static str>,
    }

    impl KindVisitor for RecordingVisitor {
        fn visit_menu(&mut self, _menu: &mut Menu) {
            self.calls.push("menu");
        }

        fn visit_link_container(&mut self, _link_container: &mut LinkContainer) {
            self.calls.push("link_container");
        }

        fn visit_link(&mut self, _link: &mut Link) {
            self.calls.push("link");
        }
    }

    fn exported(part: &dyn MenuPart) -> Vec<(String, String)> {
        part.attributes_as_map().into_iter().collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn visit_and_export(
        visitor: &mut dyn MenuPartVisitor,
        part: &mut dyn MenuPart,
    ) -> Vec<(String, String)> {
        assert!(part.attributes().is_empty());
        part.accept(visitor);
        exported(part)
    }

    #[test]
    fn test_factory_visitor_on_menu() {
        let mut menu = Menu::new(vec![]);
        let mut visitor = Visitor::new(MyFirstVisitorFactory);
        visitor.visit(menu.node_mut());

        assert_eq!(menu.attributes_as_map().len(), 1);
        assert_eq!(menu.attributes().get("id"), Some("main-menu"));
    }

    #[test]
    fn test_factory_visitor() {
        let mut visitor = Visitor::new(MyFirstVisitorFactory);

        assert_eq!(
            visit_and_export(&mut visitor, &mut MyFirstMenuPart::new("Test")),
            pairs(&[])
        );
        assert_eq!(
            visit_and_export(&mut visitor, &mut MySecondMenuPart::new("100", "blue")),
            pairs(&[])
        );
        assert_eq!(
            visit_and_export(
                &mut visitor,
                &mut LinkContainer::new(Link::new("Test", ""))
            ),
            pairs(&[(ATTRIBUTE_CSS_CLASS, "link-wrapper")])
        );
        assert_eq!(
            visit_and_export(&mut visitor, &mut Link::new("Test", "")),
            pairs(&[("data-start", "true")])
        );
    }

    #[test]
    fn test_custom_visitor() {
        let mut visitor = MyFirstVisitor;

        assert_eq!(
            visit_and_export(&mut visitor, &mut Menu::new(vec![])),
            pairs(&[("id", "just-testing")])
        );
        assert_eq!(
            visit_and_export(
                &mut visitor,
                &mut Menu::new(vec![
                    LinkContainer::new(Link::new("Test 1", "")),
                    LinkContainer::new(Link::new("Test 2", "/")),
                ])
            ),
            pairs(&[("id", "just-testing")])
        );
        assert_eq!(
            visit_and_export(&mut visitor, &mut LinkContainer::new(Link::new("", ""))),
            pairs(&[(ATTRIBUTE_CSS_CLASS, "first-container")])
        );
        assert_eq!(
            visit_and_export(&mut visitor, &mut Link::new("", "")),
            pairs(&[
                ("id", "test"),
                ("data-start", "true"),
                (ATTRIBUTE_CSS_CLASS, "blue-box"),
            ])
        );
        assert_eq!(
            visit_and_export(&mut visitor, &mut MyFirstMenuPart::new("Test")),
            pairs(&[(ATTRIBUTE_CSS_CLASS, "visible")])
        );
        assert_eq!(
            visit_and_export(&mut visitor, &mut MySecondMenuPart::new("100", "blue")),
            pairs(&[])
        );
    }

    #[test]
    fn test_extension_only_visitor_ignores_built_in_kinds() {
        let mut visitor = MySecondVisitor;
        assert_eq!(
            visit_and_export(&mut visitor, &mut Link::new("Test", "/")),
            pairs(&[])
        );

        let mut second = MySecondMenuPart::new("100", "blue");
        second.add_attribute("id", "x");
        second.accept(&mut visitor);
        assert_eq!(
            exported(&second),
            pairs(&[("id", "x"), (ATTRIBUTE_CSS_CLASS, "second-menu")])
        );
    }

    #[test]
    fn test_kind_visitor_fires_exactly_one_hook() {
        let mut visitor = RecordingVisitor::default();

        Menu::new(vec![]).accept(&mut visitor);
        LinkContainer::new(Link::new("", "")).accept(&mut visitor);
        Link::new("", "").accept(&mut visitor);
        MyFirstMenuPart::new("Test").accept(&mut visitor);

        assert_eq!(visitor.calls, vec!["menu", "link_container", "link"]);
    }

    #[test]
    fn test_visitor_with_partial_factory() {
        let mut visitor = Visitor::new(MySecondVisitorFactory);

        let mut menu = Menu::new(vec![]);
        menu.accept(&mut visitor);
        assert_eq!(menu.attributes().get("id"), Some("second-level"));

        let mut link = Link::new("Test", "/");
        link.accept(&mut visitor);
        assert!(link.attributes().is_empty());

        let mut second = MySecondMenuPart::new("100", "blue");
        second.add_attribute("id", "x");
        second.accept(&mut visitor);
        assert_eq!(second.attributes().get(ATTRIBUTE_CSS_CLASS), Some("second-menu"));
    }

    #[test]
    fn test_accept_all_visits_every_part() {
        let mut menu = Menu::create([("Test 1", ""), ("Test 2", "/")], None).unwrap();
        let mut recording = RecordingVisitor::default();
        menu.accept_all(&mut recording);
        assert_eq!(
            recording.calls,
            vec!["menu", "link_container", "link_container", "link", "link"]
        );

        menu.accept_all(&mut Visitor::new(MyFirstVisitorFactory));
        assert_eq!(menu.attributes().get("id"), Some("main-menu"));
        for container in menu.links_containers() {
            assert_eq!(
                container.attributes().get(ATTRIBUTE_CSS_CLASS),
                Some("link-wrapper")
            );
            assert_eq!(container.link().attributes().get("data-start"), Some("true"));
        }
    }
}
