#![allow(missing_docs)]

use navi_router::{RouteParams, RouteTable, RouterError};

fn champion_table() -> RouteTable<&'static str> {
    let mut table = RouteTable::new();

    table.insert("home", "/", "Dashboard").unwrap();
    table
        .insert("champion", "/champion/{id}", "Champion")
        .unwrap();

    table
}

#[test]
fn test_basic_routing() {
    let table = champion_table();

    let home = table.resolve("/").unwrap();
    assert_eq!(home.route.name, "home");
    assert_eq!(*home.entry.value(), "Dashboard");
    assert!(home.route.params.is_empty());

    let champion = table.resolve("/champion/42").unwrap();
    assert_eq!(champion.route.name, "champion");
    assert_eq!(champion.route.pattern, "/champion/{id}");
    assert_eq!(champion.route.param("id"), Some("42"));
    assert_eq!(*champion.entry.value(), "Champion");
}

#[test]
fn test_params_are_not_coerced() {
    let table = champion_table();

    let resolved = table.resolve("/champion/abc").unwrap();
    assert_eq!(resolved.route.param("id"), Some("abc"));

    let resolved = table.resolve("/champion/Kai%27Sa").unwrap();
    assert_eq!(resolved.route.param("id"), Some("Kai%27Sa"));
}

#[test]
fn test_unmatched_paths() {
    let table = champion_table();

    assert!(table.resolve("/nonexistent").is_none());
    assert!(table.resolve("/champion").is_none());
    assert!(table.resolve("/champion/42/skins").is_none());
}

#[test]
fn test_query_and_hash_are_split_off() {
    let table = champion_table();

    let resolved = table.resolve("/champion/42?tab=skins#lore").unwrap();
    assert_eq!(resolved.route.path, "/champion/42");
    assert_eq!(resolved.route.query.as_deref(), Some("tab=skins"));
    assert_eq!(resolved.route.hash.as_deref(), Some("lore"));
    assert_eq!(resolved.route.full_path(), "/champion/42?tab=skins#lore");
}

#[test]
fn test_duplicate_names_rejected() {
    let mut table = champion_table();

    let err = table.insert("home", "/home", "Other").unwrap_err();
    assert!(matches!(err, RouterError::DuplicateName(name) if name == "home"));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_conflicting_patterns_rejected() {
    let mut table = champion_table();

    let err = table
        .insert("champion-again", "/champion/{id}", "Other")
        .unwrap_err();
    assert!(matches!(err, RouterError::InvalidPattern { pattern, .. } if pattern == "/champion/{id}"));

    let err = table.insert("relative", "champions", "Other").unwrap_err();
    assert!(matches!(err, RouterError::InvalidPattern { .. }));

    // Failed inserts leave the table untouched
    assert!(table.by_name("champion-again").is_none());
    assert!(table.by_name("relative").is_none());
    assert_eq!(table.len(), 2);
}

#[test]
fn test_url_for_named_routes() {
    let table = champion_table();

    assert_eq!(table.url_for("home", &RouteParams::new()).unwrap(), "/");
    assert_eq!(
        table
            .url_for("champion", &RouteParams::new().with("id", "42"))
            .unwrap(),
        "/champion/42"
    );

    // Same destination as the literal path
    let by_name = table
        .url_for("champion", &RouteParams::from([("id", "abc")]))
        .unwrap();
    assert_eq!(
        table.resolve(&by_name).unwrap().route,
        table.resolve("/champion/abc").unwrap().route
    );
}

#[test]
fn test_url_for_errors() {
    let table = champion_table();

    assert!(matches!(
        table.url_for("missing", &RouteParams::new()),
        Err(RouterError::UnknownRoute(name)) if name == "missing"
    ));

    assert!(matches!(
        table.url_for("champion", &RouteParams::new()),
        Err(RouterError::MissingParam { route, param }) if route == "champion" && param == "id"
    ));

    assert!(matches!(
        table.url_for("champion", &RouteParams::new().with("id", "a/b")),
        Err(RouterError::InvalidParam { .. })
    ));

    assert!(matches!(
        table.url_for("champion", &RouteParams::new().with("id", "")),
        Err(RouterError::InvalidParam { .. })
    ));

    // would be split off as query or fragment when the path is matched
    for value in ["kai#sa", "kai?sa"] {
        assert!(matches!(
            table.url_for("champion", &RouteParams::new().with("id", value)),
            Err(RouterError::InvalidParam { param, value: rejected, .. })
                if param == "id" && rejected == value
        ));
    }
}

#[test]
fn test_catch_all_url_for() {
    let mut table = RouteTable::new();
    table.insert("assets", "/assets/{*file}", ()).unwrap();

    assert_eq!(
        table
            .url_for("assets", &RouteParams::new().with("file", "img/ahri.png"))
            .unwrap(),
        "/assets/img/ahri.png"
    );
    assert_eq!(
        table.resolve("/assets/img/ahri.png").unwrap().route.param("file"),
        Some("img/ahri.png")
    );
}

#[test]
fn test_outline_keeps_names_and_patterns() {
    let table = champion_table();
    let outline = table.outline();

    let routes: Vec<_> = outline
        .iter()
        .map(|entry| (entry.name(), entry.pattern()))
        .collect();
    assert_eq!(routes, vec![("home", "/"), ("champion", "/champion/{id}")]);

    assert_eq!(outline.resolve("/champion/7").unwrap().route.name, "champion");
    assert!(outline.resolve("/nonexistent").is_none());

    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    assert_send_sync(&outline);
}
