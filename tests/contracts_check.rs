use assert_cmd::cargo::cargo_bin_cmd;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn run_json(home: &Path, args: &[&str]) -> Value {
    let mut cmd = cargo_bin_cmd!("civix");
    cmd.env("HOME", home).arg("--json").args(args);
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid json output")
}

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let tmp = TempDir::new().unwrap();
    let home = tmp.path().join("home");
    fs::create_dir_all(&home).unwrap();

    let photo = tmp.path().join("evidence.png");
    fs::write(&photo, b"\x89PNG\r\n\x1a\n").unwrap();
    let photo = photo.to_str().unwrap();

    let submit = run_json(
        &home,
        &[
            "submit",
            "--category",
            "Pothole",
            "--location",
            "Main St",
            "--description",
            "Deep hole near the crosswalk",
            "--photo",
            photo,
        ],
    );
    assert_eq!(submit["ok"], true);
    validate("report.schema.json", &submit["data"]);

    let list = run_json(&home, &["list"]);
    assert_eq!(list["ok"], true);
    validate("report-list.schema.json", &list["data"]);

    let dash = run_json(&home, &["dashboard"]);
    assert_eq!(dash["ok"], true);
    validate("dashboard.schema.json", &dash["data"]);

    let id = submit["data"]["id"].as_str().unwrap();
    let set = run_json(&home, &["set-status", id, "in-progress"]);
    assert_eq!(set["ok"], true);
    validate("set-status.schema.json", &set["data"]);
}
