//! Views rendered for matched page routes

mod home;

use std::collections::HashMap;
use std::sync::Arc;

use bookshelf_router::ViewCatalog;
use maud::{html, Markup, DOCTYPE};

use crate::plugins::Plugins;

pub use home::Home;

/// Shared reference to a view, as stored in the route table
pub type ViewRef = Arc<dyn View>;

/// What a view gets to see while rendering
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    /// Normalized request path
    pub path: &'a str,
    pub params: &'a HashMap<String, String>,
}

/// A renderable page body
pub trait View: Send + Sync + std::fmt::Debug {
    /// Catalog identifier used by route definitions
    fn id(&self) -> &'static str;

    fn title(&self) -> &str;

    fn render(&self, ctx: &ViewContext<'_>) -> Markup;
}

/// Catalog of views known to the application
#[derive(Debug, Default, Clone)]
pub struct Views {
    by_id: HashMap<&'static str, ViewRef>,
}

impl Views {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in view registered
    pub fn standard() -> Self {
        Self::new().with(Home)
    }

    pub fn with(mut self, view: impl View + 'static) -> Self {
        self.by_id.insert(view.id(), Arc::new(view));
        self
    }

    pub fn get(&self, id: &str) -> Option<&ViewRef> {
        self.by_id.get(id)
    }
}

impl ViewCatalog for Views {
    type View = ViewRef;

    fn lookup(&self, id: &str) -> Option<ViewRef> {
        self.by_id.get(id).cloned()
    }
}

/// Wraps a view body in the document shell with plugin assets
pub fn page(view: &dyn View, ctx: &ViewContext<'_>, plugins: &Plugins) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (view.title()) }
                @for href in plugins.stylesheets() {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                div #app data-view=(view.id()) {
                    (view.render(ctx))
                }
                @for src in plugins.scripts() {
                    script src=(src) {}
                }
            }
        }
    }
}

/// 404 page for paths no route matches
pub fn not_found(path: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Page Not Found" }
            }
            body {
                h1 { "404 Page Not Found" }
                p { "Route '" (path) "' not found" }
                a href="/" { "Go Home" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetsConfig;
    use crate::plugins::WidgetKit;

    #[test]
    fn test_standard_catalog_has_home() {
        let views = Views::standard();
        assert_eq!(views.lookup("home").map(|v| v.id()), Some("home"));
        assert!(views.lookup("hello-world").is_none());
    }

    #[test]
    fn test_page_includes_plugin_assets() {
        let mut plugins = Plugins::new();
        plugins.install(WidgetKit::from_config(&WidgetsConfig {
            stylesheets: vec!["/static/widgets.css".to_string()],
            scripts: vec!["/static/widgets.js".to_string()],
        }));

        let params = HashMap::new();
        let ctx = ViewContext { path: "/", params: &params };
        let html = page(&Home, &ctx, &plugins).into_string();

        assert!(html.contains(r#"<link rel="stylesheet" href="/static/widgets.css">"#));
        assert!(html.contains(r#"<script src="/static/widgets.js"></script>"#));
        assert!(html.contains(r#"data-view="home""#));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = not_found("/<script>").into_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
