//! Rift: a champion roster browser.
//!
//! The application is two routes. `/` shows the dashboard, available as soon
//! as the bundle starts. `/champion/{id}` shows a single champion; its view is
//! only loaded when it is first visited.

pub mod config;
pub mod roster;
pub mod router;
pub mod views;

pub use router::{build_router, install_router, routes};

/// Browser entry point: install the router and mount it on `#app`.
#[cfg(target_arch = "wasm32")]
pub fn start() -> Result<(), navi::RouterError> {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();

    let router = install_router()?;

    router.on_error(|error| {
        navi::web_sys::console::error_1(&error.to_string().into());
    });

    let app = navi::web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("app"));

    navi::Navi::new(router).mount(app.as_ref())
}
