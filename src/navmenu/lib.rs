//! # Navmenu Architecture
//!
//! Navmenu is a **navigation menu object model**: a small tree of menu parts that
//! renders itself to HTML through application-provided templates, and that can be
//! decorated by visitors after it has been built.
//!
//! ## The Tree
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Menu (menu.rs)                        template: "menu"     │
//! │  - Ordered containers, fills %linksContainers%              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ 0..n
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  LinkContainer (link_container.rs)                          │
//! │  - Wraps exactly one link, fills %link%                     │
//! │  - template: "link_container"                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ 1
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Link (link.rs)                        template: "link"     │
//! │  - Name and url, fills %name% and %url%                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every part carries ordered HTML [`Attributes`] and fills `%attributes%` in its
//! template. The pipeline every part shares lives in [`part`]; applications can add
//! their own kinds by implementing [`MenuPart`].
//!
//! ## Emptiness
//!
//! A link without a name is absent. Its container and a menu made only of such
//! containers render to an empty string, without touching any template. This lets
//! callers build menus from data that may have holes, and render nothing at all
//! instead of an empty `<ul></ul>`.
//!
//! ## Templates
//!
//! Templates come from the `navmenu-templates` crate (re-exported here). They can be
//! built in code or loaded from a `templates.json` file through [`MenuConfig`], which
//! also ships a plain `<ul>/<li>/<a>` default set.
//!
//! ## Visitors
//!
//! See [`visitor`]: either one hook per kind ([`KindVisitor`]) or a factory
//! creating a visitor per part ([`Visitor`] over a [`VisitorFactory`]).
//!
//! ## Quick Example
//!
//! ```rust
//! use navmenu::{Menu, MenuConfig, MenuPart};
//! use navmenu::html::Attributes;
//!
//! let templates = MenuConfig::default().templates().unwrap();
//! let menu = Menu::create(
//!     [("Home", "/"), ("Contact", "/contact")],
//!     Some(Attributes::from([("id", "main-menu")])),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     menu.render(&templates).unwrap(),
//!     r#"<ul id="main-menu"><li><a href="/">Home</a></li><li><a href="/contact">Contact</a></li></ul>"#
//! );
//! ```

pub mod config;
pub mod error;
pub mod html;
pub mod link;
pub mod link_container;
pub mod menu;
pub mod part;
pub mod visitor;

pub use config::MenuConfig;
pub use error::{MenuError, Result};
pub use html::{AttributeValue, Attributes, ATTRIBUTE_CSS_CLASS};
pub use link::Link;
pub use link_container::LinkContainer;
pub use menu::{LinkSpec, Menu};
pub use navmenu_templates::{Template, TemplateError, TemplateValues, Templates};
pub use part::{render_template, MenuPart, Node, NodeMut};
pub use visitor::{
    dispatch, KindVisitor, KindVisitorFactory, MenuPartVisitor, Visitor, VisitorFactory,
};
