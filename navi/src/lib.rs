//! Client-side navigation engine.
//!
//! A [`Router`] owns an immutable table of named routes, each bound to a view
//! that is either available up front or loaded on first navigation. It keeps
//! the history backend in sync and renders the matched view; [`Navi`] wires a
//! router into the browser.

use std::{fmt, rc::Rc};

pub mod prelude;

mod component;
mod router;

#[cfg(target_arch = "wasm32")]
mod navigation;

pub use component::{LazyView, RouteComponent, RouteDescriptor};
pub use router::{NavigationOutcome, RouteContext, RouteState, Router, RouterBuilder};

pub use navi_router::{
    HistoryBackend, HistoryMode, LoadError, Location, MemoryHistory, ResolvedRoute, RouteParams,
    RouteTable, RouterConfig, RouterError,
};

#[cfg(target_arch = "wasm32")]
pub use navi_router::BrowserHistory;

pub use js_sys;
pub use wasm_bindgen;
pub use web_sys;

/// Trait that defines the view layer for routes
///
/// Views are rendered with the matched route and the router that matched it,
/// so they can read params and build links without global lookups.
pub trait View {
    /// Render the view for the matched route
    fn render(&self, cx: &RouteContext<'_>) -> Html;
}

/// Rendered HTML markup
///
/// Markup is passed through untouched; use [`Html::text`] for user supplied
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub fn new(markup: impl Into<String>) -> Self {
        Html(markup.into())
    }

    /// Escaped text content
    pub fn text(text: &str) -> Self {
        Html(navi_utils::escape_html(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace the children of `target` with this markup
    #[cfg(target_arch = "wasm32")]
    pub fn mount(&self, target: &web_sys::Element) {
        target.set_inner_html(&self.0);
    }
}

impl From<&str> for Html {
    fn from(markup: &str) -> Self {
        Html(markup.to_owned())
    }
}

impl From<String> for Html {
    fn from(markup: String) -> Self {
        Html(markup)
    }
}

impl FromIterator<Html> for Html {
    fn from_iter<I: IntoIterator<Item = Html>>(iter: I) -> Self {
        Html(iter.into_iter().map(|html| html.0).collect())
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Browser application shell around an installed router
#[derive(Debug, Clone)]
pub struct Navi {
    router: Rc<Router>,
}

impl Navi {
    /// Create an application around a router
    pub fn new(router: Rc<Router>) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &Rc<Router> {
        &self.router
    }

    /// Mount the router outlet into a DOM element and start listening for
    /// navigation
    ///
    /// # Arguments
    /// * `target` - Optional target element (defaults to document body)
    #[cfg(target_arch = "wasm32")]
    pub fn mount(self, target: Option<&web_sys::Element>) -> Result<(), RouterError> {
        let target_element: web_sys::Element = if let Some(element) = target {
            element.clone()
        } else {
            let window = web_sys::window()
                .ok_or_else(|| RouterError::Browser("no global window".to_owned()))?;
            let document = window
                .document()
                .ok_or_else(|| RouterError::Browser("no document".to_owned()))?;

            document
                .body()
                .ok_or_else(|| RouterError::Browser("no body element".to_owned()))?
                .into()
        };

        navigation::start(self.router, target_element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_text_is_escaped() {
        assert_eq!(Html::text("<Kha'Zix>").as_str(), "&lt;Kha&#39;Zix&gt;");
        assert_eq!(Html::from("<b>ok</b>").to_string(), "<b>ok</b>");
    }

    #[test]
    fn test_html_collects() {
        let list: Html = ["<li>a</li>", "<li>b</li>"]
            .into_iter()
            .map(Html::from)
            .collect();

        assert_eq!(list.into_string(), "<li>a</li><li>b</li>");
        assert!(Html::default().is_empty());
    }
}
