//! The application's route table.

use navi::{
    HistoryBackend, RouteComponent, RouteDescriptor, Router, RouterConfig, RouterError,
};
use std::rc::Rc;

use crate::{config, roster, views};

/// Name of the dashboard route, usable with [`Router::navigate_named`].
pub const HOME: &str = "home";
/// Name of the champion route; takes an `id` param.
pub const CHAMPION: &str = "champion";

/// The app's routes, in match order.
///
/// The dashboard is constructed here. The champion view is only constructed
/// when `/champion/{id}` is first visited.
pub fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new(
            "/",
            HOME,
            RouteComponent::eager(views::Dashboard::new(roster::bundled_roster())),
        ),
        RouteDescriptor::new(
            "/champion/{id}",
            CHAMPION,
            RouteComponent::lazy(views::champion::load),
        ),
    ]
}

/// Build a router over [`routes`] without installing it.
pub fn build_router(
    config: RouterConfig,
    history: impl HistoryBackend + 'static,
) -> Result<Router, RouterError> {
    Router::builder(config)
        .history(history)
        .routes(routes())
        .build()
}

/// Build the router from the build-time configuration and install it as the
/// application router.
///
/// # Errors
///
/// Fails on an invalid `RIFT_HISTORY`, if the browser history is unavailable,
/// or if a router was already installed.
pub fn install_router() -> Result<Rc<Router>, RouterError> {
    let config = config::router_config()?;

    #[cfg(target_arch = "wasm32")]
    let history = navi::BrowserHistory::new()?;
    #[cfg(not(target_arch = "wasm32"))]
    let history = navi::MemoryHistory::new(&config.href("/"));

    build_router(config, history)?.install()
}
