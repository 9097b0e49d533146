//! Mapping between route paths and browser URLs.
//!
//! [`RouterConfig`] decides how a route path such as `/champion/42` appears in
//! the address bar (`/base/champion/42` or `/base/#/champion/42`), and how a
//! browser location is turned back into a route path. [`HistoryBackend`] is
//! the seam to the actual history stack.

use navi_utils::{normalize_base, split_location, strip_base};
use serde::{Deserialize, Serialize};
use std::{
    cell::{Cell, RefCell},
    str::FromStr,
};

use crate::RouterError;

/// How route paths are encoded in URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Path based URLs using the History API (`/base/champion/42`)
    #[default]
    Web,
    /// Fragment based URLs (`/base/#/champion/42`)
    Hash,
}

impl FromStr for HistoryMode {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" | "history" => Ok(HistoryMode::Web),
            "hash" => Ok(HistoryMode::Hash),
            other => Err(RouterError::InvalidHistoryMode(other.to_owned())),
        }
    }
}

/// Browser-style location, with `search` and `hash` keeping their `?` / `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Path portion, e.g. `/rift/champion/42`
    pub pathname: String,
    /// Query including `?`, or empty
    pub search: String,
    /// Fragment including `#`, or empty
    pub hash: String,
}

impl Location {
    /// Parse an href such as `/app/champion/1?x=1#top`
    pub fn parse(href: &str) -> Self {
        let parts = split_location(href);

        Self {
            pathname: parts.path.to_owned(),
            search: parts.query.map(|q| format!("?{q}")).unwrap_or_default(),
            hash: parts.hash.map(|h| format!("#{h}")).unwrap_or_default(),
        }
    }
}

/// Base prefix and history mode shared by every route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterConfig {
    base: String,
    mode: HistoryMode,
}

impl RouterConfig {
    pub fn new(base: &str, mode: HistoryMode) -> Self {
        Self {
            base: normalize_base(base),
            mode,
        }
    }

    pub fn web(base: &str) -> Self {
        Self::new(base, HistoryMode::Web)
    }

    pub fn hash(base: &str) -> Self {
        Self::new(base, HistoryMode::Hash)
    }

    /// Normalised base, empty for the root
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// URL to put in links and history entries for a route path.
    pub fn href(&self, path: &str) -> String {
        match self.mode {
            HistoryMode::Web => format!("{}{path}", self.base),
            HistoryMode::Hash if self.base.is_empty() => format!("#{path}"),
            HistoryMode::Hash => format!("{}/#{path}", self.base),
        }
    }

    /// Route path (with query and fragment) for a browser location.
    pub fn route_path(&self, location: &Location) -> String {
        match self.mode {
            HistoryMode::Web => format!(
                "{}{}{}",
                strip_base(&self.base, &location.pathname),
                location.search,
                location.hash
            ),
            HistoryMode::Hash => {
                let fragment = location
                    .hash
                    .strip_prefix('#')
                    .unwrap_or(&location.hash);

                if fragment.is_empty() {
                    "/".to_owned()
                } else if fragment.starts_with('/') {
                    fragment.to_owned()
                } else {
                    format!("/{fragment}")
                }
            }
        }
    }
}

/// The history stack the engine writes to.
///
/// Methods take `&self`; implementations are single-threaded and use interior
/// mutability, like the browser history itself.
pub trait HistoryBackend {
    /// Current location
    fn location(&self) -> Location;

    /// Append a new entry and make it current
    fn push(&self, href: &str) -> Result<(), RouterError>;

    /// Overwrite the current entry
    fn replace(&self, href: &str) -> Result<(), RouterError>;
}

/// In-memory history stack for tests and non-browser targets.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: RefCell::new(vec![initial.to_owned()]),
            index: Cell::new(0),
        }
    }

    /// Step back one entry. Returns `false` at the start of the stack.
    pub fn back(&self) -> bool {
        match self.index.get() {
            0 => false,
            i => {
                self.index.set(i - 1);
                true
            }
        }
    }

    /// Step forward one entry. Returns `false` at the end of the stack.
    pub fn forward(&self) -> bool {
        let next = self.index.get() + 1;

        if next < self.entries.borrow().len() {
            self.index.set(next);
            true
        } else {
            false
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn current(&self) -> String {
        self.entries
            .borrow()
            .get(self.index.get())
            .cloned()
            .unwrap_or_else(|| "/".to_owned())
    }
}

impl HistoryBackend for MemoryHistory {
    fn location(&self) -> Location {
        Location::parse(&self.current())
    }

    fn push(&self, href: &str) -> Result<(), RouterError> {
        let mut entries = self.entries.borrow_mut();
        let index = self.index.get();

        entries.truncate(index + 1);
        entries.push(href.to_owned());
        self.index.set(entries.len() - 1);

        Ok(())
    }

    fn replace(&self, href: &str) -> Result<(), RouterError> {
        let mut entries = self.entries.borrow_mut();

        match entries.get_mut(self.index.get()) {
            Some(entry) => *entry = href.to_owned(),
            None => entries.push(href.to_owned()),
        }

        Ok(())
    }
}

impl<H: HistoryBackend + ?Sized> HistoryBackend for std::rc::Rc<H> {
    fn location(&self) -> Location {
        (**self).location()
    }

    fn push(&self, href: &str) -> Result<(), RouterError> {
        (**self).push(href)
    }

    fn replace(&self, href: &str) -> Result<(), RouterError> {
        (**self).replace(href)
    }
}
