use super::MenuPartVisitor;
use crate::link::Link;
use crate::link_container::LinkContainer;
use crate::menu::Menu;
use crate::part::Node;

/// Manufactures a visitor suited for the given part.
///
/// `None` means the part is not handled, and visiting it is a no-op.
pub trait VisitorFactory {
    fn create_visitor(&self, part: Node<'_>) -> Option<Box<dyn MenuPartVisitor>>;
}

/// Factory with one creation hook per built-in kind.
///
/// Parts of other kinds get no visitor.
pub trait KindVisitorFactory {
    fn create_menu_visitor(&self, menu: &Menu) -> Box<dyn MenuPartVisitor>;

    fn create_link_container_visitor(
        &self,
        link_container: &LinkContainer,
    ) -> Box<dyn MenuPartVisitor>;

    fn create_link_visitor(&self, link: &Link) -> Box<dyn MenuPartVisitor>;
}

impl<F: KindVisitorFactory> VisitorFactory for F {
    fn create_visitor(&self, part: Node<'_>) -> Option<Box<dyn MenuPartVisitor>> {
        match part {
            Node::Menu(menu) => Some(self.create_menu_visitor(menu)),
            Node::LinkContainer(link_container) => {
                Some(self.create_link_container_visitor(link_container))
            }
            Node::Link(link) => Some(self.create_link_visitor(link)),
            Node::Other(_) => None,
        }
    }
}
