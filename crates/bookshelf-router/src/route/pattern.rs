/// Pattern parsing for route segments
///
/// Parses route patterns like `/books/:id` or `/docs/*rest` into typed segments
/// and matches requested paths against them.
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RouteError;

static PARAM_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("parameter name regex is valid")
});

/// A single segment of a parsed route pattern
///
/// # Examples
///
/// ```
/// use bookshelf_router::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("about"), Segment::Static("about".into()));
/// assert_eq!(classify_segment(":id"), Segment::Param("id".into()));
/// assert_eq!(classify_segment("*rest"), Segment::CatchAll("rest".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that must match exactly
    Static(String),
    /// `:name` - exactly one path segment
    Param(String),
    /// `*name` - one or more trailing path segments
    CatchAll(String),
}

impl Segment {
    /// Parameter name for dynamic segments
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Param(name) | Segment::CatchAll(name) => Some(name),
        }
    }

    fn to_pattern(&self) -> String {
        match self {
            Segment::Static(text) => text.clone(),
            Segment::Param(name) => format!(":{}", name),
            Segment::CatchAll(name) => format!("*{}", name),
        }
    }
}

/// Classifies one raw segment without validating parameter names
pub fn classify_segment(segment: &str) -> Segment {
    if let Some(name) = segment.strip_prefix(':') {
        Segment::Param(name.to_string())
    } else if let Some(name) = segment.strip_prefix('*') {
        Segment::CatchAll(name.to_string())
    } else {
        Segment::Static(segment.to_string())
    }
}

/// A validated route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses and validates a route pattern
    ///
    /// A single trailing `/` is accepted and dropped, so `/book/list/` and
    /// `/book/list` are the same pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf_router::route::pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("/books/:id/").unwrap();
    /// assert_eq!(pattern.as_str(), "/books/:id");
    /// assert_eq!(pattern.params(), vec!["id"]);
    ///
    /// assert!(Pattern::parse("books").is_err());
    /// assert!(Pattern::parse("/docs/*rest/edit").is_err());
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        if pattern.contains('\\') {
            return Err(invalid("must not contain '\\'"));
        }

        let body = pattern.strip_suffix('/').unwrap_or(pattern);
        if body.contains("//") || body.ends_with('/') {
            return Err(invalid("must not contain empty segments"));
        }

        let segments: Vec<Segment> = body
            .split('/')
            .filter(|s| !s.is_empty())
            .map(classify_segment)
            .collect();

        let mut seen = Vec::new();
        for (idx, segment) in segments.iter().enumerate() {
            let Some(name) = segment.param_name() else {
                continue;
            };
            if !PARAM_NAME.is_match(name) {
                return Err(invalid(&format!("invalid parameter name '{}'", name)));
            }
            if seen.contains(&name) {
                return Err(invalid(&format!("parameter '{}' appears twice", name)));
            }
            if matches!(segment, Segment::CatchAll(_)) && idx + 1 != segments.len() {
                return Err(invalid("catch-all must be the last segment"));
            }
            seen.push(name);
        }

        let source = if segments.is_empty() {
            "/".to_string()
        } else {
            let parts: Vec<String> = segments.iter().map(Segment::to_pattern).collect();
            format!("/{}", parts.join("/"))
        };

        Ok(Pattern { source, segments })
    }

    /// Canonical pattern text
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in declaration order
    pub fn params(&self) -> Vec<&str> {
        self.segments.iter().filter_map(Segment::param_name).collect()
    }

    /// Key under which two patterns are considered the same route
    ///
    /// Parameter names are erased, so `/books/:id` and `/books/:book` collide.
    pub fn shape_key(&self, case_insensitive: bool) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(text) if case_insensitive => text.to_ascii_lowercase(),
                Segment::Static(text) => text.clone(),
                Segment::Param(_) => ":".to_string(),
                Segment::CatchAll(_) => "*".to_string(),
            })
            .collect();
        format!("/{}", parts.join("/"))
    }

    /// Matches a normalized path, returning extracted parameters
    pub fn matches(&self, path: &str, case_insensitive: bool) -> Option<HashMap<String, String>> {
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match_segments(&self.segments, &path_segments, case_insensitive, HashMap::new())
    }

    /// Substitutes parameters into the pattern
    ///
    /// Returns the name of the first missing parameter on failure.
    pub fn generate(&self, params: &HashMap<String, String>) -> Result<String, String> {
        let parts = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(text) => Ok(text.clone()),
                Segment::Param(name) | Segment::CatchAll(name) => params
                    .get(name)
                    .filter(|value| !value.is_empty())
                    .map(|value| value.trim_matches('/').to_string())
                    .ok_or_else(|| name.clone()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format!("/{}", parts.join("/")))
    }
}

fn match_segments(
    pattern: &[Segment],
    path: &[&str],
    case_insensitive: bool,
    mut params: HashMap<String, String>,
) -> Option<HashMap<String, String>> {
    let Some((segment, pattern_rest)) = pattern.split_first() else {
        return path.is_empty().then_some(params);
    };

    match (segment, path) {
        (Segment::CatchAll(name), rest) if !rest.is_empty() => {
            params.insert(name.clone(), rest.join("/"));
            Some(params)
        }
        (Segment::Param(name), [value, path_rest @ ..]) => {
            params.insert(name.clone(), (*value).to_string());
            match_segments(pattern_rest, path_rest, case_insensitive, params)
        }
        (Segment::Static(text), [value, path_rest @ ..]) => {
            let equal = if case_insensitive {
                text.eq_ignore_ascii_case(value)
            } else {
                text == value
            };
            if equal {
                match_segments(pattern_rest, path_rest, case_insensitive, params)
            } else {
                None
            }
        }
        _ => None,
    }
}
