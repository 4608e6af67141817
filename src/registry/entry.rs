use super::HandlerCategory;
use crate::error::{InvalidTemplate, TemplateMismatch};
use crate::template::{PathParams, PathTemplate};

use std::collections::HashSet;

/// An immutable handler registration.
///
/// Pairs a category and a compiled [`PathTemplate`] with the declared access
/// roles and a caller-owned configuration value `T`. The matcher never
/// inspects `T` or the roles; role enforcement belongs to the caller.
#[derive(Debug)]
pub struct HandlerEntry<T> {
    category: HandlerCategory,
    template: PathTemplate,
    roles: HashSet<String>,
    config: T,
}

impl<T> HandlerEntry<T> {
    /// Compiles `path` and builds an entry.
    pub fn new<I, S>(
        category: HandlerCategory,
        path: &str,
        roles: I,
        config: T,
    ) -> Result<Self, InvalidTemplate>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let template = PathTemplate::parse(path)?;
        Ok(Self {
            category,
            template,
            roles: roles.into_iter().map(Into::into).collect(),
            config,
        })
    }

    pub fn category(&self) -> HandlerCategory {
        self.category
    }

    /// The original template string this entry was registered with.
    pub fn path(&self) -> &str {
        self.template.raw()
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    pub fn roles(&self) -> &HashSet<String> {
        &self.roles
    }

    pub fn config(&self) -> &T {
        &self.config
    }

    pub fn matches(&self, path: &str) -> bool {
        self.template.matches(path)
    }

    pub fn extract_path_params<'a>(
        &'a self,
        path: &'a str,
    ) -> Result<PathParams<'a>, TemplateMismatch> {
        self.template.extract_params(path)
    }
}
