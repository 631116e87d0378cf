//! # Bookshelf Server
//!
//! Hosts the bookshelf application: the page route table (resolved through
//! `bookshelf-router`), the installed UI plugins, and the JSON book API.
//!
//! ```text
//! GET /book/list/           -> {"code":0,"msg":...,"data":[...]}
//! GET /book/create/?name=.. -> {"code":0,"msg":...,"data":[]}
//! GET <anything else>       -> route table -> rendered view | 404 page
//! ```

pub mod config;
pub mod database;
pub mod handlers;
pub mod plugins;
pub mod routes;
pub mod views;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use bookshelf_router::RouteTable;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub use config::Config;

use crate::plugins::{Navigation, Plugins, WidgetKit};
use crate::views::{ViewRef, Views};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub routes: Arc<RouteTable<ViewRef>>,
    pub plugins: Arc<Plugins>,
}

impl AppState {
    /// Installs plugins, builds the route table and opens the database
    ///
    /// Any route table error aborts startup.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut plugins = Plugins::new();
        let routes = routes::build_routes(
            &mut plugins,
            Navigation::from_config(&config.routing),
            WidgetKit::from_config(&config.widgets),
            &Views::standard(),
        )
        .context("Failed to build route table")?;

        tracing::info!(plugins = ?plugins.names(), "plugins installed");
        for entry in &routes {
            tracing::info!("  {} -> {}", entry.path(), entry.view().id());
        }

        let pool = database::init_db(&config.database.url, config.database.max_connections)
            .await
            .with_context(|| format!("Failed to open database {}", config.database.url))?;

        Ok(Self {
            pool,
            routes: Arc::new(routes),
            plugins: Arc::new(plugins),
        })
    }
}

/// Builds the HTTP application
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/book/list/", get(handlers::list_books))
        .route("/book/list", get(handlers::list_books))
        .route("/book/create/", get(handlers::create_book))
        .route("/book/create", get(handlers::create_book))
        .fallback(handlers::page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
