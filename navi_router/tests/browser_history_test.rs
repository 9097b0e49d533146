#![cfg(target_arch = "wasm32")]
#![allow(missing_docs)]

use navi_router::{BrowserHistory, HistoryBackend, RouterConfig};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_push_and_replace_update_location() {
    let history = BrowserHistory::new().unwrap();
    let config = RouterConfig::web("/");

    history.push(&config.href("/champion/42")).unwrap();
    assert_eq!(history.location().pathname, "/champion/42");
    assert_eq!(config.route_path(&history.location()), "/champion/42");

    history.replace(&config.href("/champion/abc?tab=lore")).unwrap();
    assert_eq!(history.location().pathname, "/champion/abc");
    assert_eq!(history.location().search, "?tab=lore");
}
