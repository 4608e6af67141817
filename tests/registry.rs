use ws_matcher::{HandlerCategory, HandlerEntry, MatcherRegistry, RegisterError};

const NO_ROLES: [&str; 0] = [];

fn entry(category: HandlerCategory, path: &str, config: usize) -> HandlerEntry<usize> {
    HandlerEntry::new(category, path, NO_ROLES, config).unwrap()
}

#[test]
fn registry_duplicate_rejected() {
    let mut registry: MatcherRegistry<usize> = MatcherRegistry::new();

    registry
        .add(entry(HandlerCategory::Endpoint, "/rooms/:roomId", 1))
        .unwrap();

    let err = registry
        .add(entry(HandlerCategory::Endpoint, "/rooms/:roomId", 2))
        .unwrap_err();
    assert_eq!(err.category(), HandlerCategory::Endpoint);
    assert_eq!(err.path(), "/rooms/:roomId");

    // the failed call left the registry unchanged
    assert_eq!(registry.all_entries().count(), 1);
    assert_eq!(
        *registry.find_endpoint_entry("/rooms/42").unwrap().config(),
        1
    );
}

#[test]
fn registry_same_path_across_categories() {
    let mut registry: MatcherRegistry<usize> = MatcherRegistry::new();

    registry
        .add(entry(HandlerCategory::Before, "/rooms/:roomId", 1))
        .unwrap();
    registry
        .add(entry(HandlerCategory::Endpoint, "/rooms/:roomId", 2))
        .unwrap();
    registry
        .add(entry(HandlerCategory::After, "/rooms/:roomId", 3))
        .unwrap();

    assert_eq!(registry.all_entries().count(), 3);
}

#[test]
fn registry_queries_stay_in_category() {
    let mut registry: MatcherRegistry<usize> = MatcherRegistry::new();

    registry
        .add(entry(HandlerCategory::Before, "/rooms/:roomId", 1))
        .unwrap();
    registry
        .add(entry(HandlerCategory::After, "/rooms/:roomId", 2))
        .unwrap();

    assert!(registry.find_endpoint_entry("/rooms/42").is_none());
    assert_eq!(
        registry
            .find_matches(HandlerCategory::Before, "/rooms/42")
            .map(|e| *e.config())
            .collect::<Vec<_>>(),
        [1]
    );
    assert_eq!(
        registry
            .find_matches(HandlerCategory::After, "/rooms/42")
            .map(|e| *e.config())
            .collect::<Vec<_>>(),
        [2]
    );
}

#[test]
fn registry_preserves_registration_order() {
    let mut registry: MatcherRegistry<usize> = MatcherRegistry::new();

    registry
        .add(entry(HandlerCategory::Before, "/rooms/:roomId", 1))
        .unwrap();
    registry
        .add(entry(HandlerCategory::Before, "/rooms/:other", 2))
        .unwrap();
    registry
        .add(entry(HandlerCategory::Before, "/chat", 3))
        .unwrap();

    let matched: Vec<usize> = registry
        .find_before_entries("/rooms/42")
        .map(|e| *e.config())
        .collect();
    assert_eq!(matched, [1, 2]);

    assert_eq!(
        *registry
            .find_first_match(HandlerCategory::Before, "/rooms/42")
            .unwrap()
            .config(),
        1
    );
}

#[test]
fn registry_match_all_shortcut() {
    let mut registry: MatcherRegistry<usize> = MatcherRegistry::new();

    registry
        .add(entry(HandlerCategory::Before, "*", 1))
        .unwrap();

    for &path in &["/anything/at/all", "", "/", "/rooms/42"] {
        let matched: Vec<usize> = registry
            .find_before_entries(path)
            .map(|e| *e.config())
            .collect();
        assert_eq!(matched, [1], "path = {:?}", path);
    }
}

#[test]
fn registry_endpoint_dispatch() {
    let mut registry: MatcherRegistry<usize> = MatcherRegistry::new();

    registry
        .register(HandlerCategory::Endpoint, "/rooms/:roomId", ["admin"], 1)
        .unwrap();
    registry
        .register(HandlerCategory::Endpoint, "/chat", NO_ROLES, 2)
        .unwrap();

    let entry = registry.find_endpoint_entry("/rooms/42").unwrap();
    assert_eq!(*entry.config(), 1);
    assert!(entry.roles().contains("admin"));

    let params = entry.extract_path_params("/rooms/42").unwrap();
    assert_eq!(params.get("roomId"), Some("42"));

    assert!(registry.find_endpoint_entry("/rooms").is_none());
    assert!(registry.find_endpoint_entry("/rooms/42/extra").is_none());
    assert_eq!(*registry.find_endpoint_entry("/chat").unwrap().config(), 2);
}

#[test]
fn registry_register_errors() {
    let mut registry: MatcherRegistry<usize> = MatcherRegistry::new();

    assert!(matches!(
        registry.register(HandlerCategory::Endpoint, "/rooms/:", NO_ROLES, 1),
        Err(RegisterError::InvalidTemplate(_))
    ));
    assert!(registry.all_entries().next().is_none());

    registry
        .register(HandlerCategory::Endpoint, "/chat", NO_ROLES, 1)
        .unwrap();
    assert!(matches!(
        registry.register(HandlerCategory::Endpoint, "/chat", NO_ROLES, 2),
        Err(RegisterError::DuplicateRoute(_))
    ));
}

#[test]
fn registry_all_entries_order() {
    let mut registry: MatcherRegistry<&'static str> = MatcherRegistry::new();

    registry
        .register(HandlerCategory::After, "/a", NO_ROLES, "after")
        .unwrap();
    registry
        .register(HandlerCategory::Before, "/b", NO_ROLES, "before-1")
        .unwrap();
    registry
        .register(HandlerCategory::Endpoint, "/c", NO_ROLES, "endpoint")
        .unwrap();
    registry
        .register(HandlerCategory::Before, "/d", NO_ROLES, "before-2")
        .unwrap();

    let order: Vec<&str> = registry.all_entries().map(|e| *e.config()).collect();
    assert_eq!(order, ["before-1", "before-2", "endpoint", "after"]);
}
