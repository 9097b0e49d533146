#![allow(missing_docs)]
#![cfg(not(target_arch = "wasm32"))]

use futures_util::FutureExt;
use navi::{
    MemoryHistory, NavigationOutcome, RouteParams, RouteState, Router, RouterConfig,
};
use rift_app::{build_router, routes};
use std::rc::Rc;

fn app(history: Rc<MemoryHistory>) -> Router {
    build_router(RouterConfig::web("/"), history).unwrap()
}

#[test]
fn test_route_table_shape() {
    let routes = routes();

    let table: Vec<(&str, &str, bool)> = routes
        .iter()
        .map(|route| {
            (
                route.name.as_str(),
                route.path.as_str(),
                route.component.is_lazy(),
            )
        })
        .collect();

    assert_eq!(
        table,
        vec![("home", "/", false), ("champion", "/champion/{id}", true)]
    );
}

#[test]
fn test_dashboard_renders_synchronously() {
    let router = app(Rc::default());

    let outcome = router
        .navigate("/")
        .now_or_never()
        .expect("dashboard must not suspend")
        .unwrap();

    assert!(matches!(outcome, NavigationOutcome::Rendered(route) if route.name == "home"));

    let html = router.render();
    assert!(html.as_str().contains("<h1>Champions</h1>"));
    assert!(html.as_str().contains(r#"href="/champion/ahri""#));
}

#[tokio::test]
async fn test_champion_view_is_not_loaded_before_first_visit() {
    let router = app(Rc::default());

    assert_eq!(router.is_view_loaded("home"), Some(true));
    assert_eq!(router.is_view_loaded("champion"), Some(false));

    router.navigate("/").await.unwrap();
    assert_eq!(router.is_view_loaded("champion"), Some(false));

    router.navigate("/champion/ahri").await.unwrap();
    assert_eq!(router.is_view_loaded("champion"), Some(true));
}

#[tokio::test]
async fn test_champion_id_is_a_raw_string() {
    let router = app(Rc::default());

    for id in ["42", "abc"] {
        let outcome = router.navigate(&format!("/champion/{id}")).await.unwrap();
        let NavigationOutcome::Rendered(route) = outcome else {
            panic!("expected champion to render, got {outcome:?}");
        };

        assert_eq!(route.name, "champion");
        assert_eq!(route.param("id"), Some(id));

        let html = router.render();
        assert!(html.as_str().contains(&format!(r#"data-id="{id}""#)));
        assert!(html.as_str().contains("Unknown champion"));
    }

    router.navigate("/champion/jinx").await.unwrap();
    assert!(router.render().as_str().contains("<h1>Jinx</h1>"));
}

#[tokio::test]
async fn test_names_map_to_single_patterns() {
    let router = app(Rc::default());

    let home = router.table().by_name("home").unwrap();
    assert_eq!(home.pattern(), "/");

    let champion = router.table().by_name("champion").unwrap();
    assert_eq!(champion.pattern(), "/champion/{id}");

    let params = RouteParams::new().with("id", "42");
    router.navigate_named("champion", &params).await.unwrap();
    let by_name = router.current_route().unwrap();

    router.navigate("/").await.unwrap();
    router.navigate("/champion/42").await.unwrap();

    assert_eq!(router.current_route().unwrap(), by_name);
}

#[tokio::test]
async fn test_unmatched_path_renders_blank() {
    let history = Rc::new(MemoryHistory::default());
    let router = app(Rc::clone(&history));

    router.navigate("/").await.unwrap();

    let outcome = router.navigate("/nonexistent").await.unwrap();
    assert_eq!(outcome, NavigationOutcome::NotFound("/nonexistent".to_owned()));
    assert!(matches!(&*router.state(), RouteState::NotFound { .. }));
    assert!(router.render().is_empty());
    assert_eq!(history.current(), "/nonexistent");
}

#[tokio::test]
async fn test_back_link_returns_home() {
    let router = app(Rc::default());

    router.navigate("/champion/thresh").await.unwrap();
    assert!(
        router
            .render()
            .as_str()
            .contains(r#"<a href="/" data-navi-link="/" class="back">All champions</a>"#)
    );
}

#[tokio::test]
async fn test_base_prefixed_app() {
    let history = Rc::new(MemoryHistory::new("/rift/champion/garen"));
    let router = build_router(RouterConfig::web("/rift/"), Rc::clone(&history)).unwrap();

    router.sync().await.unwrap();
    assert_eq!(router.current_route().unwrap().param("id"), Some("garen"));

    router.navigate("/").await.unwrap();
    assert_eq!(history.entries(), vec!["/rift/champion/garen", "/rift/"]);
    assert!(router.render().as_str().contains(r#"href="/rift/champion/garen""#));
}
