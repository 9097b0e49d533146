//! Route table and history plumbing for the navi navigation engine.
//!
//! This crate knows nothing about views. It maps URL paths to named route
//! entries (via [`matchit`]), builds URLs back from route names, and maps
//! route paths to browser URLs for the configured [`HistoryMode`].

mod error;
pub mod history;
mod params;
mod table;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use error::{LoadError, RouterError};
pub use history::{HistoryBackend, HistoryMode, Location, MemoryHistory, RouterConfig};
pub use params::RouteParams;
pub use table::{Resolved, ResolvedRoute, RouteEntry, RouteTable};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;

pub use matchit;
