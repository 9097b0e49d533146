//! Browser wiring for a router: outlet rendering, back/forward, link clicks.

use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::{JsCast, closure::Closure};
use wasm_bindgen_futures::spawn_local;

use crate::{HistoryMode, Router, RouterError};

/// Event other scripts can dispatch on `document` to request a navigation;
/// `detail` carries the route path.
pub(crate) const NAVIGATE_EVENT: &str = "navi:navigate";

pub(crate) fn start(router: Rc<Router>, root: web_sys::Element) -> Result<(), RouterError> {
    let window =
        web_sys::window().ok_or_else(|| RouterError::Browser("no global window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| RouterError::Browser("no document".to_owned()))?;

    router.subscribe(move |router| router.render().mount(&root));

    let history_event = match router.config().mode() {
        HistoryMode::Web => "popstate",
        HistoryMode::Hash => "hashchange",
    };

    let history_callback = {
        let router = Rc::clone(&router);

        Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let router = Rc::clone(&router);
            spawn_local(async move {
                // failures already went to the router's error handlers
                let _ = router.sync().await;
            });
        }) as Box<dyn FnMut(_)>)
    };

    window.add_event_listener_with_callback(
        history_event,
        history_callback.as_ref().unchecked_ref(),
    )?;
    history_callback.forget();

    let click_callback = {
        let router = Rc::clone(&router);

        Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            if event.default_prevented()
                || event.button() != 0
                || event.ctrl_key()
                || event.meta_key()
                || event.shift_key()
                || event.alt_key()
            {
                return;
            }

            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };

            let Ok(Some(anchor)) = target.closest("a[data-navi-link]") else {
                return;
            };

            let Some(path) = anchor.get_attribute("data-navi-link") else {
                return;
            };

            event.prevent_default();
            navigate_detached(&router, path);
        }) as Box<dyn FnMut(_)>)
    };

    document.add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())?;
    click_callback.forget();

    let navigate_callback = {
        let router = Rc::clone(&router);

        Closure::wrap(Box::new(move |event: web_sys::CustomEvent| {
            if let Some(path) = event.detail().as_string() {
                navigate_detached(&router, path);
            }
        }) as Box<dyn FnMut(_)>)
    };

    document.add_event_listener_with_callback(
        NAVIGATE_EVENT,
        navigate_callback.as_ref().unchecked_ref(),
    )?;
    navigate_callback.forget();

    debug!(history_event, "navigation listeners attached");

    let initial = Rc::clone(&router);
    spawn_local(async move {
        let _ = initial.sync().await;
    });

    Ok(())
}

fn navigate_detached(router: &Rc<Router>, path: String) {
    let router = Rc::clone(router);

    spawn_local(async move {
        debug!(%path, "navigation requested");
        let _ = router.navigate(&path).await;
    });
}
