use navmenu_templates::TemplateError;
use thiserror::Error;

/// Errors raised while building templates or rendering menu parts.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Template with '{0}' index was not found. Did you provide all required templates?")]
    TemplateNotFound(String),

    #[error(
        "Cannot fill template '{template}', because of missing values for placeholder(s): {}. Did you provide all required values?",
        .missing.join(", ")
    )]
    MissingPlaceholders {
        template: String,
        missing: Vec<String>,
    },

    #[error("Content of template '{0}' is invalid. Did you use string with 1 placeholder at least?")]
    InvalidTemplate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MenuError {
    /// Names a fill failure after the kind being rendered instead of the raw template text.
    pub(crate) fn from_fill(kind: &str, err: TemplateError) -> Self {
        match err {
            TemplateError::MissingPlaceholders { missing, .. } => MenuError::MissingPlaceholders {
                template: kind.to_string(),
                missing,
            },
            other => other.into(),
        }
    }
}

impl From<TemplateError> for MenuError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound(index) => MenuError::TemplateNotFound(index),
            TemplateError::MissingPlaceholders { content, missing } => {
                MenuError::MissingPlaceholders {
                    template: content,
                    missing,
                }
            }
            TemplateError::InvalidContent(content) => MenuError::InvalidTemplate(content),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
