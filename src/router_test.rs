use super::*;

#[test]
fn root_and_dashboard_resolve_to_dashboard() {
    assert_eq!(resolve("/"), Route::Dashboard);
    assert_eq!(resolve(""), Route::Dashboard);
    assert_eq!(resolve("/dashboard"), Route::Dashboard);
}

#[test]
fn static_routes_resolve() {
    assert_eq!(resolve("/collection"), Route::Collection);
    assert_eq!(resolve("/boards/"), Route::Boards);
    assert_eq!(resolve("/subscription"), Route::Subscription { node: None });
}

#[test]
fn schema_routes_capture_params() {
    assert_eq!(resolve("/schema/board"), Route::Schema { name: "board".into() });
    assert_eq!(
        resolve("/schema/board/9f2c"),
        Route::SchemaDetails { name: "board".into(), id: "9f2c".into() }
    );
}

#[test]
fn schema_without_name_is_not_found() {
    assert_eq!(resolve("/schema"), Route::NotFound { path: "/schema".into() });
    assert_eq!(resolve("/schema/a/b/c"), Route::NotFound { path: "/schema/a/b/c".into() });
}

#[test]
fn detail_subtree_captures_remaining_path() {
    assert_eq!(resolve("/detail"), Route::Detail { rest: String::new() });
    assert_eq!(resolve("/detail/child/1"), Route::Detail { rest: "child/1".into() });
    assert_eq!(resolve("/details"), Route::NotFound { path: "/details".into() });
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(resolve("/nowhere"), Route::NotFound { path: "/nowhere".into() });
}

#[test]
fn subscription_reads_node_query() {
    assert_eq!(
        resolve("/subscription?node=02ab&x=1"),
        Route::Subscription { node: Some("02ab".into()) }
    );
    assert_eq!(resolve("/subscription?node="), Route::Subscription { node: None });
}

#[test]
fn query_and_fragment_are_ignored_for_matching() {
    assert_eq!(resolve("/collection?sort=name#top"), Route::Collection);
    assert_eq!(resolve("//schema//board"), Route::Schema { name: "board".into() });
}

#[test]
fn route_table_lists_every_view() {
    let kinds: Vec<RouteKind> = ROUTES.iter().map(|(_, kind)| *kind).collect();
    for kind in [
        RouteKind::Dashboard,
        RouteKind::Collection,
        RouteKind::Boards,
        RouteKind::Subscription,
        RouteKind::Schema,
        RouteKind::SchemaDetails,
        RouteKind::Detail,
    ] {
        assert!(kinds.contains(&kind), "missing {kind:?}");
    }
}
