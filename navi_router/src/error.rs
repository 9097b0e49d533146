#![allow(missing_docs)]

use thiserror::Error;

/// Errors produced while building the route table or navigating.
///
/// Unmatched paths are not errors; they resolve to `None` in the table and to
/// a not-found state in the engine.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Two routes were registered under the same name.
    #[error("route name '{0}' is already registered")]
    DuplicateName(String),

    /// The pattern is malformed or conflicts with an existing pattern.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// No route is registered under this name.
    #[error("no route named '{0}'")]
    UnknownRoute(String),

    /// A named navigation did not supply a parameter the pattern needs.
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    /// A parameter value cannot be placed into the pattern.
    #[error("invalid value '{value}' for parameter '{param}' of route '{route}'")]
    InvalidParam {
        route: String,
        param: String,
        value: String,
    },

    /// History mode string was neither `web` nor `hash`.
    #[error("unknown history mode '{0}', expected 'web' or 'hash'")]
    InvalidHistoryMode(String),

    /// A lazily loaded view failed to load.
    #[error("failed to load view for route '{route}'")]
    Load {
        route: String,
        #[source]
        source: LoadError,
    },

    /// A router singleton has already been installed on this thread.
    #[error("a router is already installed")]
    AlreadyInstalled,

    /// A browser API call failed.
    #[error("browser error: {0}")]
    Browser(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for RouterError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        RouterError::Browser(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

/// Failure reported by a lazy view loader.
///
/// Cloneable so a single in-flight load can be shared by several navigations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for LoadError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        LoadError::new(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}
