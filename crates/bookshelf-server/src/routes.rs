// File: src/routes.rs
// Purpose: Page route table for the application

use bookshelf_router::{RouteDef, RouteError, RouteTable};

use crate::plugins::{Navigation, Plugins, WidgetKit};
use crate::views::{ViewRef, Views};

/// Page routes, highest priority first
pub const ROUTES: &[RouteDef] = &[RouteDef::named("/", "Home", "home")];

/// Installs the widget kit and navigation into `plugins`, then builds the page table
///
/// Fails if a route references a view missing from `views`.
pub fn build_routes(
    plugins: &mut Plugins,
    navigation: Navigation,
    widgets: WidgetKit,
    views: &Views,
) -> Result<RouteTable<ViewRef>, RouteError> {
    let options = navigation.options();

    plugins.install(widgets);
    plugins.install(navigation);

    RouteTable::from_defs(ROUTES.iter().copied(), views, options)
}
