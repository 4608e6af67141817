#![deny(unsafe_code)]

mod error;
mod registry;
mod template;

pub use crate::error::{DuplicateRoute, InvalidTemplate, RegisterError, TemplateMismatch};
pub use crate::registry::{HandlerCategory, HandlerEntry, MatcherRegistry};
pub use crate::template::{PathParams, PathTemplate, Segment};
