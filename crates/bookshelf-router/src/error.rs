/// Errors raised while building a route table or generating URLs
///
/// Build errors are meant to abort startup: a table that fails to build
/// leaves the application without its navigation surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route path '{path}' (already registered as '{existing}')")]
    DuplicatePath { path: String, existing: String },

    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("route '{path}' references unknown view '{view}'")]
    UnresolvedView { path: String, view: String },

    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("no route named '{0}'")]
    UnknownRouteName(String),

    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },
}
