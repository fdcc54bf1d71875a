//! Tests for planner configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [deck]
        rows = 8
        columns = 12

        [termination]
        node_limit = 5000
        seconds_spent_limit = 2
        millis_spent_limit = 500

        [search]
        explored_keying = "deck_and_tasks"
        heuristic = "zero"
    "#;

    let config = PlannerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.dimensions(), Some(DeckDimensions::new(8, 12)));
    assert_eq!(config.node_limit(), Some(5000));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(2500)));
    assert_eq!(config.search.explored_keying, ExploredKeying::DeckAndTasks);
    assert_eq!(config.search.heuristic, HeuristicType::Zero);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        deck:
          rows: 4
          columns: 6
        termination:
          node_limit: 100
        search:
          explored_keying: deck_only
    "#;

    let config = PlannerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.dimensions(), Some(DeckDimensions::new(4, 6)));
    assert_eq!(config.node_limit(), Some(100));
    assert!(config.time_limit().is_none());
    assert_eq!(config.search.heuristic, HeuristicType::Manhattan);
}

#[test]
fn test_empty_toml_is_unbounded() {
    let config = PlannerConfig::from_toml_str("").unwrap();
    assert!(config.deck.is_none());
    assert!(config.node_limit().is_none());
    assert!(config.time_limit().is_none());
    assert_eq!(config.search.explored_keying, ExploredKeying::DeckOnly);
}

#[test]
fn test_rejects_zero_sized_deck() {
    let err = PlannerConfig::from_toml_str(
        r#"
        [deck]
        rows = 0
        columns = 12
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_zero_node_limit() {
    let err = PlannerConfig::from_yaml_str("termination:\n  node_limit: 0\n").unwrap_err();
    assert!(err.to_string().contains("node_limit"));
}

#[test]
fn test_unknown_keying_is_parse_error() {
    let err = PlannerConfig::from_toml_str(
        r#"
        [search]
        explored_keying = "everything"
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = PlannerConfig::load("/nonexistent/planner.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = PlannerConfig::new()
        .with_deck(8, 12)
        .with_node_limit(1000)
        .with_time_limit_millis(750)
        .with_explored_keying(ExploredKeying::DeckAndTasks)
        .with_heuristic(HeuristicType::Zero);

    assert_eq!(config.node_limit(), Some(1000));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(750)));
    assert_eq!(config.search.explored_keying, ExploredKeying::DeckAndTasks);
    assert!(config.validate().is_ok());
}

#[test]
fn test_huge_time_limit_saturates() {
    let config = PlannerConfig::from_toml_str(
        r#"
        [termination]
        seconds_spent_limit = 18446744073709552
        millis_spent_limit = 9223372036854775807
    "#,
    )
    .unwrap();

    let limit = config.time_limit().unwrap();
    assert!(limit >= Duration::from_secs(18_446_744_073_709_552));

    let seconds_only = PlannerConfig::from_toml_str(
        "[termination]\nseconds_spent_limit = 18446744073709552\n",
    )
    .unwrap();
    assert_eq!(
        seconds_only.time_limit(),
        Some(Duration::from_secs(18_446_744_073_709_552))
    );
}

#[test]
fn test_time_limit_sum_saturates_at_max() {
    let termination = TerminationConfig {
        node_limit: None,
        seconds_spent_limit: Some(u64::MAX),
        millis_spent_limit: Some(u64::MAX),
    };
    assert_eq!(termination.time_limit(), Some(Duration::MAX));
}
