use crate::registry::HandlerCategory;

/// A template string that can not be parsed into segments.
#[derive(Debug, thiserror::Error)]
pub enum InvalidTemplate {
    #[error("template can not be empty")]
    Empty,
    #[error("parameter name can not be empty: template = {template:?}")]
    EmptyParamName { template: Box<str> },
    #[error("parameter name {name:?} appears twice: template = {template:?}")]
    DuplicateParamName { name: Box<str>, template: Box<str> },
}

/// An entry with the same category and path already exists.
#[derive(Debug, thiserror::Error)]
#[error("handler with category = {category:?} and path = {path:?} already exists")]
pub struct DuplicateRoute {
    pub(crate) category: HandlerCategory,
    pub(crate) path: Box<str>,
}

impl DuplicateRoute {
    pub fn category(&self) -> HandlerCategory {
        self.category
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Parameter extraction was attempted on a path the template does not match.
#[derive(Debug, thiserror::Error)]
#[error("path {path:?} does not match template {template:?}")]
pub struct TemplateMismatch {
    pub(crate) template: Box<str>,
    pub(crate) path: Box<str>,
}

/// Any failure of [`MatcherRegistry::register`](crate::MatcherRegistry::register).
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    InvalidTemplate(#[from] InvalidTemplate),
    #[error(transparent)]
    DuplicateRoute(#[from] DuplicateRoute),
}
