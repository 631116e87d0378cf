use std::collections::HashMap;

/// A route declared by view identifier rather than by view reference
///
/// The fields are `&'static str` so a whole table can live in a `const`:
///
/// ```
/// use bookshelf_router::RouteDef;
///
/// const ROUTES: &[RouteDef] = &[RouteDef::named("/", "Home", "home")];
/// assert_eq!(ROUTES[0].name, Some("Home"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: &'static str,
}

impl RouteDef {
    pub const fn new(path: &'static str, view: &'static str) -> Self {
        Self {
            path,
            name: None,
            view,
        }
    }

    pub const fn named(path: &'static str, name: &'static str, view: &'static str) -> Self {
        Self {
            path,
            name: Some(name),
            view,
        }
    }
}

/// Resolves view identifiers to the references stored in a route table
pub trait ViewCatalog {
    type View;

    /// Returns the view registered under `id`, if any
    fn lookup(&self, id: &str) -> Option<Self::View>;
}

impl<V: Clone> ViewCatalog for HashMap<String, V> {
    type View = V;

    fn lookup(&self, id: &str) -> Option<V> {
        self.get(id).cloned()
    }
}

impl<V: Clone> ViewCatalog for HashMap<&'static str, V> {
    type View = V;

    fn lookup(&self, id: &str) -> Option<V> {
        self.get(id).cloned()
    }
}
