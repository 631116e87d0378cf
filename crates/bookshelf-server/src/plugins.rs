//! Host plugins
//!
//! Capabilities are installed into a [`Plugins`] registry owned by the caller
//! instead of a process-wide global. Pages pull their head assets from every
//! installed plugin.

use std::sync::Arc;

use bookshelf_router::RouteOptions;

use crate::config::{RoutingConfig, WidgetsConfig};

/// A capability installed into the host application
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Unique plugin name; a second install under the same name is ignored
    fn name(&self) -> &'static str;

    fn stylesheets(&self) -> &[String] {
        &[]
    }

    fn scripts(&self) -> &[String] {
        &[]
    }
}

/// Ordered registry of installed plugins
#[derive(Debug, Default, Clone)]
pub struct Plugins {
    installed: Vec<Arc<dyn Plugin>>,
}

impl Plugins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a plugin, returning `false` if one with the same name is already present
    pub fn install(&mut self, plugin: impl Plugin + 'static) -> bool {
        let name = plugin.name();
        if self.is_installed(name) {
            tracing::warn!(plugin = name, "plugin already installed, keeping the first one");
            return false;
        }

        tracing::debug!(plugin = name, "plugin installed");
        self.installed.push(Arc::new(plugin));
        true
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.installed.iter().any(|p| p.name() == name)
    }

    /// Plugin names in installation order
    pub fn names(&self) -> Vec<&'static str> {
        self.installed.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.installed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }

    /// Stylesheets of every plugin, in installation order
    pub fn stylesheets(&self) -> impl Iterator<Item = &str> {
        self.installed
            .iter()
            .flat_map(|p| p.stylesheets().iter().map(String::as_str))
    }

    /// Scripts of every plugin, in installation order
    pub fn scripts(&self) -> impl Iterator<Item = &str> {
        self.installed
            .iter()
            .flat_map(|p| p.scripts().iter().map(String::as_str))
    }
}

/// Routing capability
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    options: RouteOptions,
}

impl Navigation {
    pub fn new(options: RouteOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(RouteOptions {
            case_insensitive: config.case_insensitive,
        })
    }

    pub fn options(&self) -> RouteOptions {
        self.options
    }
}

impl Plugin for Navigation {
    fn name(&self) -> &'static str {
        "navigation"
    }
}

/// UI widget capability
#[derive(Debug, Clone, Default)]
pub struct WidgetKit {
    stylesheets: Vec<String>,
    scripts: Vec<String>,
}

impl WidgetKit {
    pub fn from_config(config: &WidgetsConfig) -> Self {
        Self {
            stylesheets: config.stylesheets.clone(),
            scripts: config.scripts.clone(),
        }
    }
}

impl Plugin for WidgetKit {
    fn name(&self) -> &'static str {
        "widgets"
    }

    fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    fn scripts(&self) -> &[String] {
        &self.scripts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_ignored() {
        let mut plugins = Plugins::new();
        let first = WidgetKit::from_config(&WidgetsConfig {
            stylesheets: vec!["/a.css".to_string()],
            scripts: vec![],
        });

        assert!(plugins.install(first));
        assert!(!plugins.install(WidgetKit::default()));
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins.stylesheets().collect::<Vec<_>>(), vec!["/a.css"]);
    }

    #[test]
    fn test_assets_follow_install_order() {
        let mut plugins = Plugins::new();
        plugins.install(WidgetKit::from_config(&WidgetsConfig {
            stylesheets: vec!["/widgets.css".to_string()],
            scripts: vec!["/widgets.js".to_string()],
        }));
        plugins.install(Navigation::default());

        assert_eq!(plugins.names(), vec!["widgets", "navigation"]);
        assert_eq!(plugins.scripts().collect::<Vec<_>>(), vec!["/widgets.js"]);
    }

    #[test]
    fn test_navigation_reads_routing_config() {
        let navigation = Navigation::from_config(&RoutingConfig {
            case_insensitive: true,
        });
        assert!(navigation.options().case_insensitive);
        assert!(!Navigation::default().options().case_insensitive);
    }
}
