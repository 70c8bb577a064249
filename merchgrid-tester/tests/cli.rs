use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "merchgrid-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn demo_catalog_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../merchgrid-web/static/assets/data/catalog.json")
}

#[test]
fn cli_passes_on_the_shipped_catalog_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_merchgrid-tester");
    let output_path = temp_path("demo");
    let status = Command::new(exe)
        .arg(demo_catalog_path())
        .args(["--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());

    let content = std::fs::read_to_string(&output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("parse report");
    assert_eq!(report["failed"], 0);
    assert_eq!(report["total"], 2); // validate + browse
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_fails_on_a_catalog_with_lint_findings() {
    let exe = env!("CARGO_BIN_EXE_merchgrid-tester");
    let bad_path = temp_path("bad.json");
    std::fs::write(
        &bad_path,
        r#"{
            "fandoms": [
                { "id": "x", "name": "X", "products": { "ghost": [] } }
            ],
            "productTypes": []
        }"#,
    )
    .expect("write bad catalog");

    let status = Command::new(exe)
        .arg(&bad_path)
        .args(["--mode", "validate"])
        .status()
        .expect("run cli");
    assert!(!status.success());
    let _ = std::fs::remove_file(bad_path);
}

#[test]
fn cli_rejects_a_zero_page_size() {
    let exe = env!("CARGO_BIN_EXE_merchgrid-tester");
    let output = Command::new(exe)
        .arg(demo_catalog_path())
        .args(["--page-size", "0"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--page-size"), "stderr was: {stderr}");
}

#[test]
fn cli_errors_on_unparseable_input() {
    let exe = env!("CARGO_BIN_EXE_merchgrid-tester");
    let junk_path = temp_path("junk.json");
    std::fs::write(&junk_path, "{ not json").expect("write junk");

    let status = Command::new(exe)
        .arg(&junk_path)
        .status()
        .expect("run cli");
    assert!(!status.success());
    let _ = std::fs::remove_file(junk_path);
}
