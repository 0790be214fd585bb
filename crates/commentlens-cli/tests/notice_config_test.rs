//! Notice & Config Command Tests

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_notice_quota_message_gets_help() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["notice", "API key not valid. Please pass a valid API key."])
        .assert()
        .success()
        .stdout(predicate::str::contains("YouTube API Error"))
        .stdout(predicate::str::contains("The API key is invalid"));
}

#[test]
fn test_notice_generic_message() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["notice", "Invalid URL format", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["content"]["kind"], "generic");
    assert_eq!(value["content"]["title"], "Error");
    assert_eq!(value["content"]["message"], "Invalid URL format");
    assert!(value["content"].get("help").is_none());
}

#[test]
fn test_notice_network_and_empty_input() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["notice", "--network"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Failed to connect to the server. Please try again.",
        ));

    fixture
        .command()
        .args(["notice", "  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a URL"));
}

#[test]
fn test_config_show_defaults() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_name  = youtube_comments_analysis"))
        .stdout(predicate::str::contains("(not created)"));
}

#[test]
fn test_config_init_then_refuses_overwrite() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = std::fs::read_to_string(fixture.data_dir().join("config.toml")).unwrap();
    assert!(written.contains("base_name = \"youtube_comments_analysis\""));

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration reset to defaults"));
}

#[test]
fn test_invalid_config_is_reported() {
    let fixture = TestFixture::new();
    fixture.write_config("[render]\ncolor = \"sometimes\"\n");

    fixture
        .command()
        .args(["notice", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
