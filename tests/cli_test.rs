// Render mode of the jsonorbit binary
use jsonorbit::cli::render;
use jsonorbit::LayoutConfig;
use serde_json::Value;
use std::fs;

#[test]
fn test_render_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.json");
    let output = dir.path().join("payload.json");
    fs::write(&input, r#"{"users":[{"name":"ada"},{"name":"alan"}]}"#).unwrap();

    render(&input, Some(output.as_path()), &LayoutConfig::default(), true).unwrap();

    let payload: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(payload["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(payload["edges"].as_array().unwrap().len(), 5);
    assert_eq!(payload["rootNode"]["children"][0]["id"], "root.users");
    assert_eq!(payload["nodes"][3]["id"], "root.users.[0].name");
}

#[test]
fn test_render_reports_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    let output = dir.path().join("payload.json");
    fs::write(&input, "{\"a\": ").unwrap();

    let err = render(&input, Some(output.as_path()), &LayoutConfig::default(), false).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("broken.json"));
    assert!(message.contains("Invalid JSON"));
    assert!(!output.exists());
}

#[test]
fn test_render_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(render(&missing, None, &LayoutConfig::default(), false).is_err());
}
