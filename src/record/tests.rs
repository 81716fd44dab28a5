//! Unit tests for the aggregate record and its persistence

use super::*;
use serde_json::json;
use tempfile::tempdir;

const TOP_LEVEL_KEYS: [&str; 9] = [
    "team_info",
    "players",
    "fixtures",
    "standings",
    "statistics",
    "h2h",
    "predictions",
    "last_updated",
    "metadata",
];

fn metadata() -> Metadata {
    Metadata {
        team_id: TeamId::new(541),
        league_id: LeagueId::new(140),
        season: Season::default(),
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_new_record_serializes_all_keys_empty() {
    let value = serde_json::to_value(AggregateRecord::new()).unwrap();
    let obj = value.as_object().unwrap();

    assert_eq!(obj.len(), 9);
    for key in TOP_LEVEL_KEYS {
        assert!(obj.contains_key(key), "missing key {}", key);
    }
    assert_eq!(value["team_info"], json!({}));
    assert_eq!(value["players"], json!([]));
    assert_eq!(value["h2h"], json!({}));
    assert_eq!(value["last_updated"], Value::Null);
    assert_eq!(value["metadata"], Value::Null);
}

#[test]
fn test_key_order_matches_field_order() {
    let json = serde_json::to_string(&AggregateRecord::new()).unwrap();
    let positions: Vec<usize> = TOP_LEVEL_KEYS
        .iter()
        .map(|k| json.find(&format!("\"{}\"", k)).unwrap())
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_persist_empty_record_has_all_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("team_data.json");

    let mut record = AggregateRecord::new();
    record.persist(&path, metadata()).unwrap();

    let value = read_json(&path);
    let obj = value.as_object().unwrap();
    for key in TOP_LEVEL_KEYS {
        assert!(obj.contains_key(key), "missing key {}", key);
    }
    assert_eq!(value["team_info"], json!({}));
    assert_eq!(value["players"], json!([]));
    assert_eq!(value["fixtures"], json!([]));
    assert_eq!(value["standings"], json!([]));
    assert_eq!(value["statistics"], json!({}));
    assert_eq!(value["h2h"], json!({}));
    assert_eq!(value["predictions"], json!({}));
    assert_eq!(
        value["metadata"],
        json!({"team_id": 541, "league_id": 140, "season": "2024"})
    );
    assert!(value["last_updated"].is_string());
}

#[test]
fn test_persist_stamps_parseable_utc_timestamp() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    let mut record = AggregateRecord::new();
    record.persist(&path, metadata()).unwrap();

    let stamp = record.last_updated.clone().unwrap();
    assert!(stamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    assert_eq!(read_json(&path)["last_updated"], stamp);
}

#[test]
fn test_persist_keeps_non_ascii_unescaped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    let mut record = AggregateRecord::new();
    record
        .team_info
        .insert("venue".to_string(), json!({"name": "Estadio Santiago Bernabéu"}));
    record
        .h2h
        .insert("Atlético Madrid".to_string(), vec![json!({"fixture": {"id": 1}})]);
    record.persist(&path, metadata()).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("Bernabéu"));
    assert!(raw.contains("\"Atlético Madrid\""));
    assert!(!raw.contains("\\u00e9"));
    // Pretty-printed
    assert!(raw.contains("\n  \"team_info\""));
}

#[test]
fn test_persist_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, r#"{"stale": true, "players": [1, 2, 3]}"#).unwrap();

    let mut record = AggregateRecord::new();
    record.players.push(json!({"player": {"name": "Vinícius Júnior"}}));
    record.persist(&path, metadata()).unwrap();

    let value = read_json(&path);
    assert!(value.get("stale").is_none());
    assert_eq!(value["players"].as_array().unwrap().len(), 1);
}

#[test]
fn test_persist_relative_file_without_parent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.json");

    let mut record = AggregateRecord::new();
    assert!(record.persist(&path, metadata()).is_ok());
    assert!(path.exists());
}

#[test]
fn test_persist_into_file_as_directory_fails() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("data");
    fs::write(&blocker, "not a directory").unwrap();

    let mut record = AggregateRecord::new();
    let result = record.persist(&blocker.join("out.json"), metadata());
    assert!(matches!(result, Err(crate::FetchError::Io(_))));
}
