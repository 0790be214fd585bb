//! Render Command Tests
//!
//! Verifies the text and JSON views of a payload, the HTML report and
//! handling of upstream failures.

mod common;

use common::{BACKEND_RESPONSE, QUOTA_RESPONSE, TestFixture};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_render_text_lists_sections_in_order() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("result.json", BACKEND_RESPONSE);

    let output = fixture
        .command()
        .arg("render")
        .arg(&payload)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let positions: Vec<usize> = ["THINK", "FEEL", "ACT", "PAIN POINTS", "LANGUAGE ALIGNMENT"]
        .iter()
        .map(|title| stdout.find(&format!("\n{}\n", title)).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted, "sections out of order:\n{}", stdout);

    assert!(!stdout.contains("POTENTIAL CONTENT TOPICS"));
    assert!(!stdout.contains("POSITIVE & NEGATIVE TAKES"));
    assert!(stdout.contains("12 likes, 3 replies"));
    assert!(stdout.contains("engine (2.0)"));
}

#[test]
fn test_render_stores_payload_verbatim() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("result.json", BACKEND_RESPONSE);

    fixture
        .command()
        .arg("render")
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("commentlens export csv"));

    let stored = fs::read_to_string(fixture.data_dir().join("last_result.json")).unwrap();
    assert_eq!(stored, BACKEND_RESPONSE);
    assert!(fixture.data_dir().join("last_result.meta.json").exists());
}

#[test]
fn test_render_no_store_leaves_workspace_untouched() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("result.json", BACKEND_RESPONSE);

    fixture
        .command()
        .args(["render", "--no-store"])
        .arg(&payload)
        .assert()
        .success();

    assert!(!fixture.data_dir().join("last_result.json").exists());
}

#[test]
fn test_render_reads_stdin() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["render", "-", "--view", "minimal"])
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::contains("THINK (0)\nFEEL (0)\nACT (0)\n"));
}

#[test]
fn test_render_json_dumps_view_model() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("result.json", BACKEND_RESPONSE);

    let output = fixture
        .command()
        .args(["render", "--format", "json"])
        .arg(&payload)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sections = value["content"]["sections"].as_array().unwrap();
    let ids: Vec<&str> = sections.iter().map(|s| s["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec!["think", "feel", "act", "pain_points", "language_alignment"]
    );
    assert_eq!(sections[4]["layout"], "cloud");
    assert_eq!(sections[4]["body"]["items"][0]["weight"], 2.0);
    assert_eq!(value["content"]["summary"]["item_count"], 4);
}

#[test]
fn test_render_writes_escaped_html() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload(
        "xss.json",
        r#"{"feel": [{"text": "<script>alert(1)</script>", "likes": 1}]}"#,
    );
    let html_path = fixture.root().join("report.html");

    fixture
        .command()
        .arg("render")
        .arg(&payload)
        .arg("--html")
        .arg(&html_path)
        .assert()
        .success();

    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_render_upstream_quota_error() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("failed.json", QUOTA_RESPONSE);

    fixture
        .command()
        .arg("render")
        .arg(&payload)
        .assert()
        .failure()
        .stdout(predicate::str::contains("YouTube API Error"))
        .stdout(predicate::str::contains("The daily quota has been exceeded"))
        .stdout(predicate::str::contains("THINK").not())
        .stderr(predicate::str::contains("Error: Analysis service reported an error"));

    assert!(!fixture.data_dir().join("last_result.json").exists());
}

#[test]
fn test_render_rejects_malformed_payload() {
    let fixture = TestFixture::new();
    let payload = fixture.write_payload("broken.json", r#"{"think": [{"likes": 1}]}"#);

    fixture
        .command()
        .arg("render")
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode"));
}
