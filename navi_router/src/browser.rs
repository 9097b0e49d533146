use tracing::debug;
use wasm_bindgen::JsValue;

use crate::{HistoryBackend, Location, RouterError};

/// History backend over `window.history` and `window.location`.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    window: web_sys::Window,
}

impl BrowserHistory {
    pub fn new() -> Result<Self, RouterError> {
        let window =
            web_sys::window().ok_or_else(|| RouterError::Browser("no global window".to_owned()))?;

        Ok(Self { window })
    }
}

impl HistoryBackend for BrowserHistory {
    fn location(&self) -> Location {
        let location = self.window.location();

        Location {
            pathname: location.pathname().unwrap_or_else(|_| "/".to_owned()),
            search: location.search().unwrap_or_default(),
            hash: location.hash().unwrap_or_default(),
        }
    }

    fn push(&self, href: &str) -> Result<(), RouterError> {
        debug!(href, "history.pushState");
        self.window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(href))?;

        Ok(())
    }

    fn replace(&self, href: &str) -> Result<(), RouterError> {
        debug!(href, "history.replaceState");
        self.window
            .history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(href))?;

        Ok(())
    }
}
