pub use crate::{
    Html, LoadError, NavigationOutcome, Navi, RouteComponent, RouteContext, RouteDescriptor,
    RouteParams, Router, RouterConfig, RouterError, View,
};
