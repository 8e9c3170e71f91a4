//! # navmenu-templates - Keyed Placeholder Templates
//!
//! A small template store for rendering HTML fragments: each template is a plain
//! string with `%placeholder%` markers, registered under an index (usually the
//! kind of the thing being rendered) and filled with string values.
//!
//! ## The Problem
//!
//! Menus, links and their wrappers all need markup, but the markup belongs to the
//! application, not to the code that builds the menu tree:
//! - Hard-coding `<ul>`/`<li>` in the tree ties it to one CSS framework
//! - A full template language is overkill for one-line fragments
//! - Forgetting a value should fail loudly instead of leaking `%name%` into HTML
//!
//! ## The Solution
//!
//! - **Templates** are validated once, when created: a template without a single
//!   placeholder is rejected
//! - **Lookup** by index fails with [`TemplateError::NotFound`] naming the index
//! - **Filling** fails with [`TemplateError::MissingPlaceholders`] listing every
//!   placeholder that has no value; extra values are ignored
//!
//! ## Quick Example
//!
//! ```rust
//! use navmenu_templates::{Template, TemplateValues, Templates};
//!
//! let templates = Templates::new()
//!     .add("link", Template::new(r#"<a href="%url%">%name%</a>"#).unwrap());
//!
//! let mut values = TemplateValues::new();
//! values.insert("name".to_string(), "Home".to_string());
//! values.insert("url".to_string(), "/".to_string());
//!
//! let html = templates.find_template("link").unwrap().fill(&values).unwrap();
//! assert_eq!(html, r#"<a href="/">Home</a>"#);
//! ```
//!
//! ## Placeholder Syntax
//!
//! A placeholder is one or more word characters (`A-Z`, `a-z`, `0-9`, `_`) wrapped
//! in `%`. Any other `%` is literal text, so `100%` or `%-%` survive untouched.
//! Values are substituted in a single pass; a value that itself looks like a
//! placeholder is never expanded again.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::{debug, trace};

/// Marker opening and closing a placeholder.
pub const PLACEHOLDER_TAG: char = '%';

/// Values used to fill a template, keyed by placeholder name.
pub type TemplateValues = HashMap<String, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template with '{0}' index was not found. Did you provide all required templates?")]
    NotFound(String),

    #[error(
        "Cannot fill template '{content}', because of missing values for placeholder(s): {}. Did you provide all required values?",
        .missing.join(", ")
    )]
    MissingPlaceholders {
        content: String,
        missing: Vec<String>,
    },

    #[error("Content of template '{0}' is invalid. Did you use string with 1 placeholder at least?")]
    InvalidContent(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Placeholder(String),
}

/// A validated template with at least one `%placeholder%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    content: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses the content, failing with [`TemplateError::InvalidContent`] when it
    /// has no placeholder at all.
    pub fn new(content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        let segments = parse(&content);

        if !segments
            .iter()
            .any(|segment| matches!(segment, Segment::Placeholder(_)))
        {
            return Err(TemplateError::InvalidContent(content));
        }

        Ok(Self { content, segments })
    }

    /// Returns the raw template text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the distinct placeholder names, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitutes every placeholder with its value.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingPlaceholders`] if any placeholder has no
    /// entry in `values`. Nothing is substituted in that case.
    pub fn fill(&self, values: &TemplateValues) -> Result<String> {
        let missing: Vec<String> = self
            .placeholders()
            .into_iter()
            .filter(|name| !values.contains_key(*name))
            .map(str::to_string)
            .collect();

        if !missing.is_empty() {
            return Err(TemplateError::MissingPlaceholders {
                content: self.content.clone(),
                missing,
            });
        }

        trace!(template = %self.content, "filling template");

        let mut output = String::with_capacity(self.content.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(value) = values.get(name) {
                        output.push_str(value);
                    }
                }
            }
        }
        Ok(output)
    }
}

impl TryFrom<String> for Template {
    type Error = TemplateError;

    fn try_from(content: String) -> Result<Self> {
        Self::new(content)
    }
}

impl TryFrom<&str> for Template {
    type Error = TemplateError;

    fn try_from(content: &str) -> Result<Self> {
        Self::new(content)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn parse(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut rest = content;

    while let Some(start) = rest.find(PLACEHOLDER_TAG) {
        text.push_str(&rest[..start]);
        let tail = &rest[start + PLACEHOLDER_TAG.len_utf8()..];
        let name_len = tail.find(|c: char| !is_word_char(c)).unwrap_or(tail.len());

        if name_len > 0 && tail[name_len..].starts_with(PLACEHOLDER_TAG) {
            if !text.is_empty() {
                segments.push(Segment::Text(std::mem::take(&mut text)));
            }
            segments.push(Segment::Placeholder(tail[..name_len].to_string()));
            rest = &tail[name_len + PLACEHOLDER_TAG.len_utf8()..];
        } else {
            // Not a placeholder: keep the tag and rescan right after it
            text.push(PLACEHOLDER_TAG);
            rest = tail;
        }
    }

    text.push_str(rest);
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

/// A collection of templates, keyed by index.
///
/// # Example
///
/// ```rust
/// use navmenu_templates::{Template, TemplateError, Templates};
///
/// let templates = Templates::new()
///     .add("menu", Template::new("<ul>%linksContainers%</ul>").unwrap());
///
/// assert!(templates.has("menu"));
/// assert_eq!(
///     templates.find_template("link").unwrap_err(),
///     TemplateError::NotFound("link".to_string())
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct Templates {
    templates: HashMap<String, Template>,
}

impl Templates {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template under the given index, returning the updated collection
    /// for chaining. An existing template with the same index is replaced.
    pub fn add(mut self, index: impl Into<String>, template: Template) -> Self {
        self.insert(index, template);
        self
    }

    /// Adds a template in place, returning the template it replaced, if any.
    pub fn insert(&mut self, index: impl Into<String>, template: Template) -> Option<Template> {
        self.templates.insert(index.into(), template)
    }

    /// Finds the template registered under the given index.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] if no such template exists.
    pub fn find_template(&self, index: &str) -> Result<&Template> {
        self.templates.get(index).ok_or_else(|| {
            debug!(index, "template not found");
            TemplateError::NotFound(index.to_string())
        })
    }

    /// Returns true if a template with the given index exists.
    pub fn has(&self, index: &str) -> bool {
        self.templates.contains_key(index)
    }

    /// Returns the number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if no templates are registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TryFrom<BTreeMap<String, String>> for Templates {
    type Error = TemplateError;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self> {
        raw.into_iter()
            .map(|(index, content)| Template::new(content).map(|template| (index, template)))
            .collect::<Result<HashMap<_, _>>>()
            .map(|templates| Self { templates })
    }
}

impl TryFrom<HashMap<String, String>> for Templates {
    type Error = TemplateError;

    fn try_from(raw: HashMap<String, String>) -> Result<Self> {
        Self::try_from(raw.into_iter().collect::<BTreeMap<_, _>>())
    }
}

impl From<Templates> for BTreeMap<String, String> {
    fn from(templates: Templates) -> Self {
        templates
            .templates
            .into_iter()
            .map(|(index, template)| (index, template.content))
            .collect()
    }
}
