//! # HTML Attributes
//!
//! Every menu part carries a set of HTML attributes (`id`, `class`, `data-*`, ...)
//! that end up in the `%attributes%` placeholder of its template.
//!
//! - [`Attributes`]: ordered, name-unique `name → value` pairs serialized as
//!   `name="value"` separated by single spaces
//! - [`AttributeValue`]: anything that can be stored as an attribute value
//!   (strings, numbers, and `Option`s of those, where `None` becomes `""`)
//!
//! Values are inserted verbatim. No HTML escaping is performed; callers are
//! responsible for passing safe values.

mod attributes;
mod value;

pub use attributes::{Attributes, ATTRIBUTE_CSS_CLASS};
pub use value::AttributeValue;
