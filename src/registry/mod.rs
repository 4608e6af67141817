mod category;
mod entry;

pub use self::category::HandlerCategory;
pub use self::entry::HandlerEntry;

use crate::error::{DuplicateRoute, RegisterError};

const MATCH_ALL: &str = "*";

/// Owns all handler registrations, partitioned by category.
///
/// Populated during a single-threaded setup phase (`&mut self`), then queried
/// read-only (`&self`). The borrow rules make registration happen-before any
/// query on a shared registry; no locking is needed.
#[derive(Debug)]
pub struct MatcherRegistry<T> {
    entries: [Vec<HandlerEntry<T>>; HandlerCategory::COUNT],
}

impl<T> MatcherRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Appends an entry to its category.
    ///
    /// Fails if the category already holds an entry with the same path; the
    /// registry is left unchanged in that case.
    pub fn add(&mut self, entry: HandlerEntry<T>) -> Result<(), DuplicateRoute> {
        let bucket = &mut self.entries[entry.category().index()];
        if bucket.iter().any(|e| e.path() == entry.path()) {
            return Err(DuplicateRoute {
                category: entry.category(),
                path: entry.path().into(),
            });
        }
        bucket.push(entry);
        Ok(())
    }

    /// Compiles and adds an entry in one step.
    pub fn register<I, S>(
        &mut self,
        category: HandlerCategory,
        path: &str,
        roles: I,
        config: T,
    ) -> Result<(), RegisterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = HandlerEntry::new(category, path, roles, config)?;
        self.add(entry)?;
        Ok(())
    }

    /// All entries, flattened in [`HandlerCategory::ALL`] order, registration
    /// order within each category.
    pub fn all_entries(&self) -> impl Iterator<Item = &HandlerEntry<T>> {
        self.entries.iter().flatten()
    }

    /// All entries of `category` matching `path`, in registration order.
    ///
    /// An entry registered with the literal path `"*"` matches any path
    /// unconditionally, bypassing segment matching.
    pub fn find_matches<'a>(
        &'a self,
        category: HandlerCategory,
        path: &'a str,
    ) -> impl Iterator<Item = &'a HandlerEntry<T>> {
        self.entries[category.index()]
            .iter()
            .filter(move |entry| entry.path() == MATCH_ALL || entry.matches(path))
    }

    /// The first entry of `category` matching `path`, in registration order.
    pub fn find_first_match<'a>(
        &'a self,
        category: HandlerCategory,
        path: &'a str,
    ) -> Option<&'a HandlerEntry<T>> {
        self.find_matches(category, path).next()
    }

    /// Returns all the before filters that match the given path.
    pub fn find_before_entries<'a>(
        &'a self,
        path: &'a str,
    ) -> impl Iterator<Item = &'a HandlerEntry<T>> {
        self.find_matches(HandlerCategory::Before, path)
    }

    /// Returns the first endpoint handler that matches the given path, or `None`.
    pub fn find_endpoint_entry<'a>(&'a self, path: &'a str) -> Option<&'a HandlerEntry<T>> {
        self.find_first_match(HandlerCategory::Endpoint, path)
    }

    /// Returns all the after filters that match the given path.
    pub fn find_after_entries<'a>(
        &'a self,
        path: &'a str,
    ) -> impl Iterator<Item = &'a HandlerEntry<T>> {
        self.find_matches(HandlerCategory::After, path)
    }
}

impl<T> Default for MatcherRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
