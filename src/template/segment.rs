/// One '/'-delimited unit of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches only an identical path segment, case-sensitive.
    Literal(Box<str>),
    /// Matches any single non-empty path segment and binds it to the name.
    Param(Box<str>),
    /// Matches any single non-empty path segment without binding.
    /// In trailing position it also consumes everything after it.
    Wildcard,
}

impl Segment {
    pub(super) fn matches(&self, part: &str) -> bool {
        match self {
            Segment::Literal(lit) => &**lit == part,
            Segment::Param(_) | Segment::Wildcard => !part.is_empty(),
        }
    }
}
