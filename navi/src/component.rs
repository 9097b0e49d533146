//! Route descriptors and the views bound to them.

use futures_util::future::{FutureExt, LocalBoxFuture, Shared};
use std::{cell::RefCell, fmt, future::Future, rc::Rc};
use tracing::{debug, warn};

use crate::{LoadError, View};

type LoadFuture = LocalBoxFuture<'static, Result<Rc<dyn View>, LoadError>>;

/// One entry of the route table handed to [`Router`](crate::Router).
pub struct RouteDescriptor {
    /// Path pattern, placeholders written as `{name}`
    pub path: String,
    /// Unique symbolic name used for navigation by name
    pub name: String,
    /// View rendered when the route matches
    pub component: RouteComponent,
}

impl RouteDescriptor {
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        component: RouteComponent,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
        }
    }
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("component", &self.component)
            .finish()
    }
}

/// How a route's view is obtained.
pub enum RouteComponent {
    /// Resolved at build time, rendered without suspending
    Eager(Rc<dyn View>),
    /// Loaded on first navigation, cached afterwards
    Lazy(LazyView),
}

impl RouteComponent {
    pub fn eager<V: View + 'static>(view: V) -> Self {
        RouteComponent::Eager(Rc::new(view))
    }

    /// Bind a deferred loader. The loader is not called until the route is
    /// first navigated to.
    pub fn lazy<F, Fut, V>(loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<V, LoadError>> + 'static,
        V: View + 'static,
    {
        RouteComponent::Lazy(LazyView::new(move || {
            let load = loader();

            async move { load.await.map(|view| Rc::new(view) as Rc<dyn View>) }.boxed_local()
        }))
    }

    /// The view if it can be rendered right now
    pub fn ready(&self) -> Option<Rc<dyn View>> {
        match self {
            RouteComponent::Eager(view) => Some(Rc::clone(view)),
            RouteComponent::Lazy(lazy) => lazy.loaded(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        match self {
            RouteComponent::Eager(_) => true,
            RouteComponent::Lazy(lazy) => lazy.is_loaded(),
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, RouteComponent::Lazy(_))
    }

    /// Obtain the view, loading it first if needed
    pub async fn resolve(&self) -> Result<Rc<dyn View>, LoadError> {
        match self {
            RouteComponent::Eager(view) => Ok(Rc::clone(view)),
            RouteComponent::Lazy(lazy) => lazy.load().await,
        }
    }
}

impl fmt::Debug for RouteComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteComponent::Eager(_) => f.write_str("Eager(<View>)"),
            RouteComponent::Lazy(lazy) => f
                .debug_struct("Lazy")
                .field("loaded", &lazy.is_loaded())
                .finish(),
        }
    }
}

enum LazyState {
    Unloaded,
    Loading(Shared<LoadFuture>),
    Loaded(Rc<dyn View>),
}

/// A view behind a deferred loader.
///
/// Concurrent loads share one in-flight future. A successful load is cached
/// for the lifetime of the view; a failed one resets so the next navigation
/// calls the loader again.
pub struct LazyView {
    loader: Box<dyn Fn() -> LoadFuture>,
    state: RefCell<LazyState>,
}

impl LazyView {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> LoadFuture + 'static,
    {
        Self {
            loader: Box::new(loader),
            state: RefCell::new(LazyState::Unloaded),
        }
    }

    pub fn loaded(&self) -> Option<Rc<dyn View>> {
        match &*self.state.borrow() {
            LazyState::Loaded(view) => Some(Rc::clone(view)),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Loaded(_))
    }

    pub async fn load(&self) -> Result<Rc<dyn View>, LoadError> {
        let load = {
            let mut state = self.state.borrow_mut();

            let in_flight = match &*state {
                LazyState::Loaded(view) => return Ok(Rc::clone(view)),
                LazyState::Loading(load) => Some(load.clone()),
                LazyState::Unloaded => None,
            };

            match in_flight {
                Some(load) => load,
                None => {
                    debug!("calling lazy view loader");
                    let load = (self.loader)().shared();
                    *state = LazyState::Loading(load.clone());
                    load
                }
            }
        };

        let result = load.clone().await;
        let mut state = self.state.borrow_mut();

        match &result {
            Ok(view) => {
                if !matches!(&*state, LazyState::Loaded(_)) {
                    *state = LazyState::Loaded(Rc::clone(view));
                }
            }
            Err(e) => {
                warn!(error = %e, "lazy view failed to load");

                // a later attempt may already be in flight
                let current =
                    matches!(&*state, LazyState::Loading(pending) if pending.ptr_eq(&load));
                if current {
                    *state = LazyState::Unloaded;
                }
            }
        }

        result
    }
}
