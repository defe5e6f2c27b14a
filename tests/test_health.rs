use gomoku::protocol::health::{Availability, report};

#[test]
fn test_readiness_follows_the_search_guard() {
    let gate = Availability::new();
    assert_eq!(gate.readiness(), "ready");

    let guard = gate.begin_search();
    assert_eq!(gate.readiness(), "drain");

    drop(guard);
    assert_eq!(gate.readiness(), "ready");
}

#[test]
fn test_guard_releases_on_unwind_paths() {
    let gate = Availability::new();
    {
        let _guard = gate.begin_search();
        assert_eq!(gate.readiness(), "drain");
    }
    assert_eq!(gate.readiness(), "ready");
}

#[test]
fn test_health_report_shape() {
    let health = report();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
    assert!(health.uptime >= 0.0);

    let encoded = serde_json::to_value(&health).unwrap();
    assert!(encoded.get("status").is_some());
    assert!(encoded.get("version").is_some());
    assert!(encoded.get("uptime").is_some());
}
