mod params;
mod segment;

pub use self::params::PathParams;
pub use self::segment::Segment;

use crate::error::{InvalidTemplate, TemplateMismatch};

use smallvec::SmallVec;

const STAR: &str = "*";
const COLON: char = ':';
const SLASH: char = '/';

type SmallPartsBuffer<'a> = SmallVec<[&'a str; 8]>;

/// A compiled path template.
///
/// Parsed once at registration time, matched repeatedly at query time.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    raw: Box<str>,
    segments: Vec<Segment>,
    catch_all: bool,
}

impl PathTemplate {
    /// Parses a template string.
    ///
    /// A segment starting with `:` is a named parameter, a segment equal to
    /// `*` is a wildcard, anything else is a literal. One leading '/' is
    /// ignored. Parameter names must be non-empty and unique within the
    /// template.
    pub fn parse(raw: &str) -> Result<Self, InvalidTemplate> {
        if raw.is_empty() {
            return Err(InvalidTemplate::Empty);
        }

        let parts: SmallPartsBuffer<'_> = trim_first_slash(raw).split(SLASH).collect();
        let mut segments: Vec<Segment> = Vec::with_capacity(parts.len());
        let mut names: SmallPartsBuffer<'_> = SmallVec::new();

        for &part in &parts {
            if part == STAR {
                segments.push(Segment::Wildcard);
            } else if let Some(name) = part.strip_prefix(COLON) {
                if name.is_empty() {
                    return Err(InvalidTemplate::EmptyParamName {
                        template: raw.into(),
                    });
                }
                if names.contains(&name) {
                    return Err(InvalidTemplate::DuplicateParamName {
                        name: name.into(),
                        template: raw.into(),
                    });
                }
                names.push(name);
                segments.push(Segment::Param(name.into()));
            } else {
                segments.push(Segment::Literal(part.into()));
            }
        }

        let catch_all = matches!(segments.last(), Some(Segment::Wildcard));

        Ok(Self {
            raw: raw.into(),
            segments,
            catch_all,
        })
    }

    /// The original template string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether this is the match-everything template `"*"`, which matches
    /// any path without segment-count comparison.
    pub fn is_match_all(&self) -> bool {
        &*self.raw == STAR
    }

    /// Returns true iff the path matches this template.
    pub fn matches(&self, path: &str) -> bool {
        if self.is_match_all() {
            return true;
        }
        let parts: SmallPartsBuffer<'_> = trim_first_slash(path).split(SLASH).collect();
        self.matches_parts(&parts)
    }

    /// Extracts named parameter values from a matching path.
    ///
    /// The match is recomputed internally: a non-matching path yields
    /// [`TemplateMismatch`] instead of bogus bindings.
    pub fn extract_params<'a>(&'a self, path: &'a str) -> Result<PathParams<'a>, TemplateMismatch> {
        let parts: SmallPartsBuffer<'a> = trim_first_slash(path).split(SLASH).collect();

        if !self.is_match_all() && !self.matches_parts(&parts) {
            return Err(TemplateMismatch {
                template: self.raw.clone(),
                path: path.into(),
            });
        }

        let mut params = PathParams::new();
        for (segment, &part) in self.segments.iter().zip(&parts) {
            if let Segment::Param(name) = segment {
                params.buf.push((&**name, part));
            }
        }
        Ok(params)
    }

    fn matches_parts(&self, parts: &[&str]) -> bool {
        if self.catch_all {
            if parts.len() < self.segments.len() {
                return false;
            }
        } else if parts.len() != self.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(parts)
            .all(|(segment, &part)| segment.matches(part))
    }
}

#[inline]
fn trim_first_slash(s: &str) -> &str {
    if s.starts_with(SLASH) {
        &s[1..]
    } else {
        s
    }
}
