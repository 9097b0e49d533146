//! The navigation engine.
//!
//! Navigation is single-threaded and cooperative. The only suspension point
//! is loading a lazy view; every navigation takes a ticket and a navigation
//! whose ticket is stale once its load completes is dropped, so the last
//! navigation always wins.

use std::{
    cell::{Cell, OnceCell, Ref, RefCell},
    fmt,
    rc::Rc,
};
use tracing::{debug, error, info, warn};

use navi_router::{
    HistoryBackend, MemoryHistory, Resolved, ResolvedRoute, RouteParams, RouteTable, RouterConfig,
    RouterError,
};

use crate::{Html, RouteComponent, RouteDescriptor, View};

thread_local! {
    static INSTALLED: OnceCell<Rc<Router>> = const { OnceCell::new() };
}

type ErrorHandler = Rc<dyn Fn(&RouterError)>;
type Listener = Rc<dyn Fn(&Router)>;

/// What the router is currently showing.
#[derive(Clone, Default)]
pub enum RouteState {
    /// No navigation has completed yet
    #[default]
    Idle,
    /// A lazy view for this route is being loaded
    Loading(ResolvedRoute),
    /// The view for this route is ready to render
    Ready {
        route: ResolvedRoute,
        view: Rc<dyn View>,
    },
    /// Nothing is registered for this location; renders blank
    NotFound { path: String },
}

impl RouteState {
    /// Route being shown or loaded
    pub fn route(&self) -> Option<&ResolvedRoute> {
        match self {
            RouteState::Loading(route) | RouteState::Ready { route, .. } => Some(route),
            RouteState::Idle | RouteState::NotFound { .. } => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RouteState::Loading(_))
    }

    fn is_settled(&self) -> bool {
        !self.is_loading()
    }
}

impl fmt::Debug for RouteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteState::Idle => f.write_str("Idle"),
            RouteState::Loading(route) => f.debug_tuple("Loading").field(route).finish(),
            RouteState::Ready { route, .. } => f
                .debug_struct("Ready")
                .field("route", route)
                .field("view", &"<View>")
                .finish(),
            RouteState::NotFound { path } => {
                f.debug_struct("NotFound").field("path", path).finish()
            }
        }
    }
}

/// Result of a navigation that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The matched view is now current
    Rendered(ResolvedRoute),
    /// No route matched; nothing is rendered
    NotFound(String),
    /// A newer navigation started while this one was loading
    Superseded,
}

/// What a view gets to see while rendering.
#[derive(Debug, Clone, Copy)]
pub struct RouteContext<'a> {
    router: &'a Router,
    route: &'a ResolvedRoute,
}

impl<'a> RouteContext<'a> {
    pub fn router(&self) -> &'a Router {
        self.router
    }

    pub fn route(&self) -> &'a ResolvedRoute {
        self.route
    }

    /// Raw parameter value, e.g. `id` for `/champion/{id}`
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.route.params.get(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryUpdate {
    Push,
    Replace,
    // location already reflects the navigation (initial load, popstate)
    Keep,
}

/// Builder for [`Router`].
pub struct RouterBuilder {
    config: RouterConfig,
    history: Option<Box<dyn HistoryBackend>>,
    routes: Vec<RouteDescriptor>,
}

impl fmt::Debug for RouterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterBuilder")
            .field("config", &self.config)
            .field("routes", &self.routes)
            .finish()
    }
}

impl RouterBuilder {
    /// History stack to keep in sync. Defaults to an in-memory stack.
    pub fn history(mut self, history: impl HistoryBackend + 'static) -> Self {
        self.history = Some(Box::new(history));
        self
    }

    pub fn route(mut self, route: RouteDescriptor) -> Self {
        self.routes.push(route);
        self
    }

    pub fn routes(mut self, routes: impl IntoIterator<Item = RouteDescriptor>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// Build the route table.
    ///
    /// # Errors
    ///
    /// Fails on duplicate route names and on malformed or conflicting paths.
    pub fn build(self) -> Result<Router, RouterError> {
        let mut table = RouteTable::new();

        for route in self.routes {
            table.insert(route.name, route.path, route.component)?;
        }

        info!(
            base = self.config.base(),
            mode = ?self.config.mode(),
            routes = table.len(),
            "router built"
        );

        Ok(Router {
            config: self.config,
            history: self
                .history
                .unwrap_or_else(|| Box::new(MemoryHistory::default())),
            table,
            state: RefCell::new(RouteState::Idle),
            settled: RefCell::new(RouteState::Idle),
            ticket: Cell::new(0),
            error_handlers: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        })
    }
}

/// Navigation engine: matches locations, loads views, keeps history in sync.
pub struct Router {
    config: RouterConfig,
    history: Box<dyn HistoryBackend>,
    table: RouteTable<RouteComponent>,
    state: RefCell<RouteState>,
    // last state that was not `Loading`; restored when a navigation fails
    settled: RefCell<RouteState>,
    ticket: Cell<u64>,
    error_handlers: RefCell<Vec<ErrorHandler>>,
    listeners: RefCell<Vec<Listener>>,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("table", &self.table)
            .field("state", &*self.state.borrow())
            .finish()
    }
}

impl Router {
    pub fn builder(config: RouterConfig) -> RouterBuilder {
        RouterBuilder {
            config,
            history: None,
            routes: Vec::new(),
        }
    }

    /// Register this router as the application-wide instance.
    ///
    /// # Errors
    ///
    /// [`RouterError::AlreadyInstalled`] if a router was installed before.
    pub fn install(self) -> Result<Rc<Router>, RouterError> {
        let router = Rc::new(self);

        INSTALLED.with(|installed| {
            installed
                .set(Rc::clone(&router))
                .map_err(|_| RouterError::AlreadyInstalled)
        })?;

        info!("router installed");

        Ok(router)
    }

    /// The router registered with [`Router::install`], if any
    pub fn installed() -> Option<Rc<Router>> {
        INSTALLED.with(|installed| installed.get().cloned())
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn table(&self) -> &RouteTable<RouteComponent> {
        &self.table
    }

    pub fn state(&self) -> Ref<'_, RouteState> {
        self.state.borrow()
    }

    /// Route whose view is currently rendered
    pub fn current_route(&self) -> Option<ResolvedRoute> {
        match &*self.state.borrow() {
            RouteState::Ready { route, .. } => Some(route.clone()),
            _ => None,
        }
    }

    /// Match a location without navigating
    pub fn resolve(&self, location: &str) -> Option<ResolvedRoute> {
        self.table.resolve(location).map(|resolved| resolved.route)
    }

    /// Route path for a named route
    pub fn url_for(&self, name: &str, params: &RouteParams) -> Result<String, RouterError> {
        self.table.url_for(name, params)
    }

    /// Browser href (base and history mode applied) for a named route
    pub fn href_for(&self, name: &str, params: &RouteParams) -> Result<String, RouterError> {
        Ok(self.config.href(&self.url_for(name, params)?))
    }

    /// Whether the view of a named route can render without loading.
    /// `None` for unknown names.
    pub fn is_view_loaded(&self, name: &str) -> Option<bool> {
        self.table
            .by_name(name)
            .map(|entry| entry.value().is_loaded())
    }

    /// Navigate to a route path, pushing a history entry.
    pub async fn navigate(&self, location: &str) -> Result<NavigationOutcome, RouterError> {
        self.run(location, HistoryUpdate::Push).await
    }

    /// Navigate to a route path, replacing the current history entry.
    pub async fn replace(&self, location: &str) -> Result<NavigationOutcome, RouterError> {
        self.run(location, HistoryUpdate::Replace).await
    }

    /// Navigate by route name; same destination as the equivalent literal path.
    pub async fn navigate_named(
        &self,
        name: &str,
        params: &RouteParams,
    ) -> Result<NavigationOutcome, RouterError> {
        let path = self.url_for(name, params)?;
        self.navigate(&path).await
    }

    /// Navigate to whatever the history backend currently points at.
    ///
    /// Used for the initial load and for back/forward.
    pub async fn sync(&self) -> Result<NavigationOutcome, RouterError> {
        let location = self.config.route_path(&self.history.location());
        self.run(&location, HistoryUpdate::Keep).await
    }

    /// Markup of the current view; empty while idle, loading or not found.
    pub fn render(&self) -> Html {
        match &*self.state.borrow() {
            RouteState::Ready { route, view } => view.render(&RouteContext {
                router: self,
                route,
            }),
            _ => Html::default(),
        }
    }

    /// Register an error boundary for failed navigations (lazy load failures).
    pub fn on_error(&self, handler: impl Fn(&RouterError) + 'static) {
        self.error_handlers.borrow_mut().push(Rc::new(handler));
    }

    /// Register a listener called after every state change.
    pub fn subscribe(&self, listener: impl Fn(&Router) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    async fn run(
        &self,
        location: &str,
        update: HistoryUpdate,
    ) -> Result<NavigationOutcome, RouterError> {
        let ticket = self.ticket.get() + 1;
        self.ticket.set(ticket);

        let location = if location.starts_with('/') {
            location.to_owned()
        } else {
            format!("/{location}")
        };

        let Some(Resolved { entry, route }) = self.table.resolve(&location) else {
            debug!(%location, "no route matched");

            self.update_history(&location, update)
                .map_err(|error| self.fail(error))?;
            self.set_state(RouteState::NotFound {
                path: location.clone(),
            });

            return Ok(NavigationOutcome::NotFound(location));
        };

        let view = match entry.value().ready() {
            Some(view) => view,
            None => {
                debug!(route = %route.name, "loading view");

                self.set_state(RouteState::Loading(route.clone()));
                let loaded = entry.value().resolve().await;

                if self.ticket.get() != ticket {
                    debug!(route = %route.name, path = %route.path, "navigation superseded");
                    return Ok(NavigationOutcome::Superseded);
                }

                match loaded {
                    Ok(view) => view,
                    Err(source) => {
                        return Err(self.fail(RouterError::Load {
                            route: route.name.clone(),
                            source,
                        }));
                    }
                }
            }
        };

        self.update_history(&route.full_path(), update)
            .map_err(|error| self.fail(error))?;

        info!(route = %route.name, path = %route.path, "navigated");

        self.set_state(RouteState::Ready {
            route: route.clone(),
            view,
        });

        Ok(NavigationOutcome::Rendered(route))
    }

    fn update_history(&self, path: &str, update: HistoryUpdate) -> Result<(), RouterError> {
        let href = self.config.href(path);

        match update {
            HistoryUpdate::Keep => Ok(()),
            // Navigating to the current location does not add an entry
            HistoryUpdate::Push if self.config.route_path(&self.history.location()) == path => {
                self.history.replace(&href)
            }
            HistoryUpdate::Push => self.history.push(&href),
            HistoryUpdate::Replace => self.history.replace(&href),
        }
    }

    fn set_state(&self, state: RouteState) {
        if state.is_settled() {
            *self.settled.borrow_mut() = state.clone();
        }

        self.state.replace(state);

        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(self);
        }
    }

    // Drops a pending `Loading` back to the last settled state and reports
    fn fail(&self, error: RouterError) -> RouterError {
        if self.state.borrow().is_loading() {
            let settled = self.settled.borrow().clone();
            self.set_state(settled);
        }

        self.report(&error);
        error
    }

    fn report(&self, error: &RouterError) {
        let handlers = self.error_handlers.borrow().clone();

        if handlers.is_empty() {
            error!(error = %error, "unhandled navigation error");
        } else {
            warn!(error = %error, "navigation failed");
        }

        for handler in handlers {
            handler(error);
        }
    }
}
