//! Named route table backed by [`matchit`].
//!
//! Entries are kept in registration order next to the matcher, which only
//! stores indices into that list. This lets the same table carry any payload
//! (views on the client, nothing at all on the dev server).

use matchit::Router;
use navi_utils::split_location;
use serde::Serialize;
use std::{collections::HashMap, fmt};
use tracing::debug;

use crate::{RouteParams, RouterError};

/// A registered route: its symbolic name, pattern and payload.
#[derive(Debug, Clone)]
pub struct RouteEntry<T> {
    name: String,
    pattern: String,
    value: T,
}

impl<T> RouteEntry<T> {
    /// Symbolic route name, e.g. `champion`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path pattern, e.g. `/champion/{id}`
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Payload bound to the route
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Owned description of a matched location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    /// Name of the matched route
    pub name: String,
    /// Pattern of the matched route
    pub pattern: String,
    /// Concrete path that matched, without query or fragment
    pub path: String,
    /// Captured path parameters
    pub params: RouteParams,
    /// Raw query string without the leading `?`
    pub query: Option<String>,
    /// Raw fragment without the leading `#`
    pub hash: Option<String>,
}

impl ResolvedRoute {
    /// Shorthand for `self.params.get(name)`
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Path followed by `?query` and `#hash` when present.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();

        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }

        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }

        full
    }
}

/// Result of [`RouteTable::resolve`]: the matched entry and the owned match data.
#[derive(Debug)]
pub struct Resolved<'a, T> {
    /// Entry whose pattern matched
    pub entry: &'a RouteEntry<T>,
    /// Owned match data
    pub route: ResolvedRoute,
}

/// Ordered, immutable-after-build set of named routes.
pub struct RouteTable<T> {
    matcher: Router<usize>,
    entries: Vec<RouteEntry<T>>,
    names: HashMap<String, usize>,
}

impl<T> fmt::Debug for RouteTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("matcher", &"<Router<usize>>")
            .field(
                "routes",
                &self
                    .entries
                    .iter()
                    .map(|entry| (entry.name.as_str(), entry.pattern.as_str()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self {
            matcher: Router::new(),
            entries: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Register a route.
    ///
    /// # Errors
    ///
    /// * [`RouterError::DuplicateName`] if `name` is taken
    /// * [`RouterError::InvalidPattern`] if the pattern does not start with `/`,
    ///   is malformed, or conflicts with an already registered pattern
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
        value: T,
    ) -> Result<(), RouterError> {
        let name = name.into();
        let pattern = pattern.into();

        if self.names.contains_key(&name) {
            return Err(RouterError::DuplicateName(name));
        }

        if !pattern.starts_with('/') {
            return Err(RouterError::InvalidPattern {
                pattern,
                reason: "route patterns must start with '/'".to_owned(),
            });
        }

        let index = self.entries.len();

        if let Err(e) = self.matcher.insert(pattern.as_str(), index) {
            return Err(RouterError::InvalidPattern {
                pattern,
                reason: e.to_string(),
            });
        }

        debug!(route = %name, %pattern, "registered route");

        self.names.insert(name.clone(), index);
        self.entries.push(RouteEntry {
            name,
            pattern,
            value,
        });

        Ok(())
    }

    /// Match a location (`/path?query#hash`) against the table.
    ///
    /// Returns `None` when no pattern matches the path.
    pub fn resolve(&self, location: &str) -> Option<Resolved<'_, T>> {
        let parts = split_location(location);
        let matched = self.matcher.at(parts.path).ok()?;
        let entry = self.entries.get(*matched.value)?;

        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();

        Some(Resolved {
            entry,
            route: ResolvedRoute {
                name: entry.name.clone(),
                pattern: entry.pattern.clone(),
                path: parts.path.to_owned(),
                params,
                query: parts.query.map(str::to_owned),
                hash: parts.hash.map(str::to_owned),
            },
        })
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry<T>> {
        self.names.get(name).and_then(|&i| self.entries.get(i))
    }

    /// Build the concrete path for a named route.
    ///
    /// Values are inserted as-is, so none may be empty or contain `?` or `#`.
    /// Single-segment parameters may not contain `/` either; catch-all
    /// parameters (`{*rest}`) may.
    pub fn url_for(&self, name: &str, params: &RouteParams) -> Result<String, RouterError> {
        let entry = self
            .by_name(name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_owned()))?;

        let mut path = String::new();

        for segment in entry.pattern.trim_start_matches('/').split('/') {
            path.push('/');

            let Some((param, catch_all)) = placeholder(segment) else {
                path.push_str(segment);
                continue;
            };

            let value = params
                .get(param)
                .ok_or_else(|| RouterError::MissingParam {
                    route: entry.name.clone(),
                    param: param.to_owned(),
                })?;

            if value.is_empty()
                || value.contains(['?', '#'])
                || (!catch_all && value.contains('/'))
            {
                return Err(RouterError::InvalidParam {
                    route: entry.name.clone(),
                    param: param.to_owned(),
                    value: value.to_owned(),
                });
            }

            path.push_str(value);
        }

        Ok(path)
    }

    /// Entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the table without payloads.
    ///
    /// The outline is `Send + Sync` regardless of `T`, so it can be shared
    /// with multi-threaded code such as the dev server.
    pub fn outline(&self) -> RouteTable<()> {
        RouteTable {
            matcher: self.matcher.clone(),
            entries: self
                .entries
                .iter()
                .map(|entry| RouteEntry {
                    name: entry.name.clone(),
                    pattern: entry.pattern.clone(),
                    value: (),
                })
                .collect(),
            names: self.names.clone(),
        }
    }
}

// `{id}` -> ("id", false), `{*rest}` -> ("rest", true)
fn placeholder(segment: &str) -> Option<(&str, bool)> {
    let inner = segment.strip_prefix('{')?.strip_suffix('}')?;

    match inner.strip_prefix('*') {
        Some(name) => Some((name, true)),
        None => Some((inner, false)),
    }
}
