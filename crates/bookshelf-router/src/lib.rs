//! # Bookshelf Router
//!
//! An ordered, immutable route table for single-page applications:
//! - Static routes (`/about`)
//! - Dynamic parameters (`/books/:id`)
//! - Catch-all routes (`/docs/*rest`)
//! - Named routes with URL generation
//!
//! Routes are matched in insertion order and the first matching pattern wins.
//! Once built, a [`RouteTable`] exposes no mutation API and can be shared
//! across threads by reference.
//!
//! ## Path Normalization
//!
//! Requested paths are normalized before matching:
//! - Trailing slashes: `/path/` → `/path`
//! - Double slashes: `/path//to` → `/path/to`
//! - Query strings and fragments are ignored
//!
//! ## Example
//!
//! ```
//! use bookshelf_router::RouteTable;
//!
//! let table = RouteTable::builder()
//!     .named("/", "Home", "home-view")
//!     .route("/books/:id", "book-view")
//!     .build()
//!     .unwrap();
//!
//! let found = table.resolve("/books/42").unwrap();
//! assert_eq!(*found.view(), "book-view");
//! assert_eq!(found.param("id"), Some("42"));
//!
//! assert!(table.resolve("/nonexistent").is_none());
//! ```

use std::collections::HashMap;

// ============================================================================
// Module Declarations
// ============================================================================

mod catalog;
mod error;
pub mod path;
pub mod route;

pub use catalog::{RouteDef, ViewCatalog};
pub use error::RouteError;
pub use path::{is_valid_path, normalize_path};
pub use route::{Pattern, Segment};

// ============================================================================
// Core Types
// ============================================================================

/// A single registered route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry<V> {
    pattern: Pattern,
    name: Option<String>,
    view: V,
}

impl<V> RouteEntry<V> {
    /// Canonical path pattern, e.g. `/books/:id`
    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The view rendered when this route matches
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// Result of resolving a path against a [`RouteTable`]
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a, V> {
    pub entry: &'a RouteEntry<V>,
    pub params: HashMap<String, String>,
}

impl<'a, V> RouteMatch<'a, V> {
    pub fn view(&self) -> &'a V {
        &self.entry.view
    }

    pub fn name(&self) -> Option<&'a str> {
        self.entry.name.as_deref()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Options applied to every route in a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Compare static segments with ASCII case folding
    pub case_insensitive: bool,
}

// ============================================================================
// Route Table
// ============================================================================

/// Ordered collection of routes, immutable after [`RouteTableBuilder::build`]
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
    names: HashMap<String, usize>,
    options: RouteOptions,
}

impl<V> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// Builds a table from declarative definitions, resolving each view id
    ///
    /// Fails with [`RouteError::UnresolvedView`] on the first identifier the
    /// catalog does not know.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf_router::{RouteDef, RouteOptions, RouteTable};
    /// use std::collections::HashMap;
    ///
    /// let mut views = HashMap::new();
    /// views.insert("home", 1u32);
    ///
    /// let defs = [RouteDef::named("/", "Home", "home")];
    /// let table = RouteTable::from_defs(defs, &views, RouteOptions::default()).unwrap();
    /// assert_eq!(table.resolve("/").map(|m| *m.view()), Some(1));
    ///
    /// let missing = [RouteDef::new("/about", "about")];
    /// assert!(RouteTable::from_defs(missing, &views, RouteOptions::default()).is_err());
    /// ```
    pub fn from_defs<I, C>(defs: I, catalog: &C, options: RouteOptions) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = RouteDef>,
        C: ViewCatalog<View = V>,
    {
        let mut builder = RouteTableBuilder::new().options(options);

        for def in defs {
            let view = catalog.lookup(def.view).ok_or_else(|| RouteError::UnresolvedView {
                path: def.path.to_string(),
                view: def.view.to_string(),
            })?;
            builder = match def.name {
                Some(name) => builder.named(def.path, name, view),
                None => builder.route(def.path, view),
            };
        }

        builder.build()
    }

    /// Resolves a requested path to the first matching route
    ///
    /// Returns `None` when nothing matches; an unknown path is not an error.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        let path = normalize_path(path);

        let found = self.entries.iter().find_map(|entry| {
            entry
                .pattern
                .matches(&path, self.options.case_insensitive)
                .map(|params| RouteMatch { entry, params })
        });

        match &found {
            Some(m) => tracing::debug!(path = %path, route = m.entry.path(), "route matched"),
            None => tracing::debug!(path = %path, "no route matched"),
        }

        found
    }

    /// Looks up a route by name
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry<V>> {
        self.names.get(name).map(|&idx| &self.entries[idx])
    }

    /// Generates the URL of a named route
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf_router::RouteTable;
    /// use std::collections::HashMap;
    ///
    /// let table = RouteTable::builder()
    ///     .named("/books/:id", "book", ())
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "7".to_string());
    /// assert_eq!(table.url_for("book", &params).unwrap(), "/books/7");
    /// ```
    pub fn url_for(&self, name: &str, params: &HashMap<String, String>) -> Result<String, RouteError> {
        let entry = self
            .by_name(name)
            .ok_or_else(|| RouteError::UnknownRouteName(name.to_string()))?;

        entry
            .pattern
            .generate(params)
            .map_err(|param| RouteError::MissingParam {
                route: name.to_string(),
                param,
            })
    }

    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry<V>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn options(&self) -> RouteOptions {
        self.options
    }
}

impl<'a, V> IntoIterator for &'a RouteTable<V> {
    type Item = &'a RouteEntry<V>;
    type IntoIter = std::slice::Iter<'a, RouteEntry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects route declarations and validates them all at once in [`build`]
///
/// [`build`]: RouteTableBuilder::build
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    pending: Vec<(String, Option<String>, V)>,
    options: RouteOptions,
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RouteTableBuilder<V> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            options: RouteOptions::default(),
        }
    }

    pub fn options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.options.case_insensitive = case_insensitive;
        self
    }

    /// Adds an unnamed route
    pub fn route(mut self, path: impl Into<String>, view: V) -> Self {
        self.pending.push((path.into(), None, view));
        self
    }

    /// Adds a named route
    pub fn named(mut self, path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        self.pending.push((path.into(), Some(name.into()), view));
        self
    }

    /// Validates every route and freezes the table
    ///
    /// Rejects malformed patterns, paths that collide structurally with an
    /// earlier route, and names that are already taken.
    pub fn build(self) -> Result<RouteTable<V>, RouteError> {
        let case_insensitive = self.options.case_insensitive;
        let mut shapes: HashMap<String, String> = HashMap::new();
        let mut names: HashMap<String, usize> = HashMap::new();
        let mut entries = Vec::with_capacity(self.pending.len());

        for (path, name, view) in self.pending {
            let pattern = Pattern::parse(&path)?;

            let shape = pattern.shape_key(case_insensitive);
            if let Some(existing) = shapes.get(&shape) {
                return Err(RouteError::DuplicatePath {
                    path: pattern.as_str().to_string(),
                    existing: existing.clone(),
                });
            }
            shapes.insert(shape, pattern.as_str().to_string());

            if let Some(name) = &name {
                if names.contains_key(name) {
                    return Err(RouteError::DuplicateName(name.clone()));
                }
                names.insert(name.clone(), entries.len());
            }

            entries.push(RouteEntry {
                pattern,
                name,
                view,
            });
        }

        tracing::debug!(routes = entries.len(), "route table built");

        Ok(RouteTable {
            entries,
            names,
            options: self.options,
        })
    }
}
