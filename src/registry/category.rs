/// The role of a handler registration relative to a connection lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerCategory {
    /// Filter invoked before the endpoint handler. All matches apply.
    Before,
    /// The primary connection handler. The first match wins.
    Endpoint,
    /// Filter invoked after the endpoint handler. All matches apply.
    After,
}

impl HandlerCategory {
    /// All categories, in the order `all_entries` flattens them.
    pub const ALL: [HandlerCategory; 3] = [
        HandlerCategory::Before,
        HandlerCategory::Endpoint,
        HandlerCategory::After,
    ];

    pub(super) const COUNT: usize = Self::ALL.len();

    #[inline]
    pub(super) fn index(self) -> usize {
        self as usize
    }
}
