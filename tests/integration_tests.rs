//! Integration tests for the heyuan-guide CLI

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn guide(args: &[&str], dir: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_heyuan-guide"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help with explicit help flag
#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = guide(&["--help"], &dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("heyuan-guide"));
    assert!(stdout.contains("render"));
    assert!(stdout.contains("serve"));
}

/// Missing data file still produces a full page from the fallback dataset
#[test]
fn test_render_missing_data_uses_fallback() {
    let dir = TempDir::new().unwrap();
    let output = guide(
        &["render", "--data", "missing/travel_data.json", "--output", "out/index.html"],
        &dir,
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rendered fallback travel data"));

    let page = fs::read_to_string(dir.path().join("out/index.html")).unwrap();
    assert_eq!(page.matches(r#"class="hotel-card "#).count(), 2);
    assert_eq!(page.matches("<table").count(), 1);
    assert_eq!(page.matches(r#"class="timeline-item "#).count(), 1);
    assert_eq!(page.matches(r#"class="activity-card "#).count(), 2);
    assert_eq!(page.matches(r#"class="attraction-card "#).count(), 1);
    assert!(page.contains("河源万绿湖渼居空中汤泉酒店"));
    assert!(page.contains("河源春沐源蓝葡萄酒店"));
}

/// Malformed data is treated like a retrieval failure
#[test]
fn test_render_malformed_data_uses_fallback() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let output = guide(&["render", "--data", "broken.json", "-o", "page.html"], &dir);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error loading travel data"));
    let page = fs::read_to_string(dir.path().join("page.html")).unwrap();
    assert!(page.contains("万绿湖风景区"));
}

/// A valid file with an empty section renders the other sections
#[test]
fn test_render_custom_data_and_compare_view() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("travel_data.json"),
        r#"{
            "hotels": [
                {"name": "湖景酒店", "features": {"免费设施": ["泳池"], "收费设施": []}},
                {"name": "山景酒店"},
                {"name": "城景酒店"}
            ],
            "itinerary": [{"day": 1, "title": "抵达", "activities": []}],
            "attractions": []
        }"#,
    )
    .unwrap();

    let output = guide(
        &["render", "--data", "travel_data.json", "-o", "page.html", "--view", "compare"],
        &dir,
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rendered travel data from travel_data.json"));
    assert!(stdout.contains("3 hotels, 1 days, 0 attractions"));

    let page = fs::read_to_string(dir.path().join("page.html")).unwrap();
    assert_eq!(page.matches(r#"class="hotel-card "#).count(), 3);
    assert_eq!(page.matches(r#"class="attraction-card "#).count(), 0);
    assert!(page.contains(r#"id="hotels-cards" class="grid md:grid-cols-2 gap-8" hidden>"#));
    assert!(page.contains(r#"<div id="hotels-comparison"><div"#));
}

#[test]
fn test_fallback_command_prints_dataset_json() {
    let dir = TempDir::new().unwrap();
    let output = guide(&["fallback"], &dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let dataset = heyuan_guide::Dataset::from_json(&stdout).unwrap();
    assert_eq!(dataset, heyuan_guide::fallback_dataset());
}

#[test]
fn test_invalid_view_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = guide(&["render", "--view", "grid"], &dir);
    assert!(!output.status.success());
}

/// Test custom config file option
#[test]
fn test_custom_config_option() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("guide.toml"),
        "[output]\npath = \"site/guide.html\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();

    let output = guide(&["--config", "guide.toml", "render"], &dir);

    assert!(output.status.success());
    assert!(dir.path().join("site/guide.html").exists());
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("guide.toml"), "[logging]\nlevel = \"loud\"\n").unwrap();

    let output = guide(&["--config", "guide.toml", "render"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log level"));
    assert!(stderr.contains("Please check your config file."));
}

/// A custom page shell: placeholder content is replaced and exactly one
/// hotel container stays visible
#[test]
fn test_render_with_custom_template() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("shell.html"),
        r#"<html><body>
<div id="hotels-cards" class="grid"><p class="loading">正在加载...</p></div>
<div id="hotels-comparison" class="hidden"></div>
<div id="itinerary-timeline"></div>
<section id="attractions-grid"><p class="loading">正在加载...</p></section>
</body></html>"#,
    )
    .unwrap();

    let output = guide(
        &[
            "render",
            "--data",
            "missing.json",
            "--template",
            "shell.html",
            "-o",
            "page.html",
            "--view",
            "compare",
        ],
        &dir,
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let page = fs::read_to_string(dir.path().join("page.html")).unwrap();
    assert!(!page.contains("正在加载"));
    assert!(page.contains(r#"<div id="hotels-cards" class="grid" hidden><div class="hotel-card "#));
    assert!(page.contains(r#"<div id="hotels-comparison"><div"#));
    assert!(page.contains(r#"<section id="attractions-grid"><div class="attraction-card "#));
    assert!(page.ends_with("</section>\n</body></html>"));
}

#[test]
fn test_render_with_missing_template_fails() {
    let dir = TempDir::new().unwrap();
    let output = guide(&["render", "--template", "nope.html"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read template"));
}

/// Environment variables override the config file
#[test]
fn test_environment_overrides_source_and_output() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("env_data.json"),
        r#"{"attractions": [{"name": "桂山风景区"}]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("guide.toml"),
        "[source]\nlocation = \"file_data.json\"\n\n[output]\npath = \"from-file.html\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_heyuan-guide"))
        .args(["--config", "guide.toml", "render"])
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("HEYUAN_GUIDE_SOURCE__LOCATION", "env_data.json")
        .env("HEYUAN_GUIDE_OUTPUT__PATH", "from-env.html")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rendered travel data from env_data.json"));
    assert!(!dir.path().join("from-file.html").exists());
    let page = fs::read_to_string(dir.path().join("from-env.html")).unwrap();
    assert!(page.contains("桂山风景区"));
}

#[test]
fn test_blank_data_location_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = guide(&["render", "--data", "  ", "-o", "page.html"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("data location cannot be blank"));
    assert!(!dir.path().join("page.html").exists());
}
