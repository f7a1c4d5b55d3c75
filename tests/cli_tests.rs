//! CLI integration tests

use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MEETING_JSON: &str = r#"{
  "id": "m1",
  "title": "Standup",
  "date": "2024-01-01T10:00:00Z",
  "transcripts": [
    {"text": "hello", "timestamp": "2024-01-01T10:05:00Z"}
  ]
}"#;

/// Isolated config location and meeting file for one test
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("meeting.json"), MEETING_JSON).unwrap();
        Self { dir }
    }

    fn meeting(&self) -> PathBuf {
        self.dir.path().join("meeting.json")
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn write_config(&self, content: &str) {
        std::fs::write(self.config(), content).unwrap();
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("meeting-export").unwrap();
        isolate(&mut cmd, &self.config());
        cmd
    }
}

fn isolate(cmd: &mut Command, config: &Path) {
    cmd.env("MEETING_EXPORT_CONFIG", config)
        .env_remove("NOTION_API_KEY")
        .env_remove("NOTION_PAGE_ID")
        .env_remove("RUST_LOG");
}

#[test]
fn help_output() {
    Command::cargo_bin("meeting-export")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("markdown"))
        .stdout(predicate::str::contains("blocks"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn export_help_lists_flags() {
    Command::cargo_bin("meeting-export")
        .unwrap()
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--page-id"))
        .stdout(predicate::str::contains("--overflow"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--tz"));
}

#[test]
fn version_output() {
    Command::cargo_bin("meeting-export")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("meeting-export"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_usage_error() {
    Command::cargo_bin("meeting-export")
        .unwrap()
        .assert()
        .failure()
        .code(2);
}

#[test]
fn markdown_command_prints_document() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("markdown")
        .arg(ws.meeting())
        .args(["--tz", "utc"])
        .assert()
        .success()
        .stdout(
            "# Standup\n\n**Date:** 1/1/2024\n**Meeting ID:** m1\n\n## Transcript\n\n**[10:05:00 AM]** hello\n",
        );
}

#[test]
fn markdown_reads_stdin() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["markdown", "-", "--tz", "+02:00"])
        .write_stdin(MEETING_JSON)
        .assert()
        .success()
        .stdout(predicate::str::contains("**[12:05:00 PM]** hello"));
}

#[test]
fn markdown_keeps_summary_order_and_accepts_null_transcripts() {
    let ws = Workspace::new();
    std::fs::write(
        ws.meeting(),
        r#"{
          "id": "m1",
          "title": "Retro",
          "date": "2024-01-01T10:00:00Z",
          "transcripts": null,
          "summary": {
            "key_points": {"title": "Key Points", "blocks": [{"content": "Ship it"}]},
            "action_items": {"title": "Action Items", "blocks": [{"content": "Write notes"}]}
          }
        }"#,
    )
    .unwrap();

    let output = ws
        .cmd()
        .arg("markdown")
        .arg(ws.meeting())
        .args(["--tz", "utc"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let headings: Vec<&str> = stdout.lines().filter(|l| l.starts_with("### ")).collect();
    assert_eq!(headings, ["### Key Points", "### Action Items"]);
    assert!(!stdout.contains("## Transcript"));
}

#[test]
fn blocks_command_prints_json_array() {
    let ws = Workspace::new();

    let output = ws
        .cmd()
        .arg("blocks")
        .arg(ws.meeting())
        .args(["--tz", "utc"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let blocks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let blocks = blocks.as_array().unwrap();
    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[0]["type"], "heading_1");
    assert_eq!(blocks[2]["type"], "heading_2");
}

#[test]
fn invalid_timezone_is_usage_error() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("markdown")
        .arg(ws.meeting())
        .args(["--tz", "Mars/Olympus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn unreadable_meeting_file_fails() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["markdown", "/nonexistent/meeting.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read meeting file"));
}

#[test]
fn invalid_meeting_json_fails() {
    let ws = Workspace::new();
    std::fs::write(ws.meeting(), "{\"title\": 1}").unwrap();

    ws.cmd()
        .arg("markdown")
        .arg(ws.meeting())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid meeting JSON"));
}

#[test]
fn dry_run_prints_request_body_without_credentials() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("export")
        .arg(ws.meeting())
        .args(["--dry-run", "--tz", "utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"children\""))
        .stdout(predicate::str::contains("heading_1"))
        .stderr(predicate::str::contains("Dry run: 1 request(s), 4 blocks, 0 dropped"));
}

#[test]
fn export_without_api_key_fails() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("export")
        .arg(ws.meeting())
        .args(["--page-id", "abc123"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing Notion API key"))
        .stderr(predicate::str::contains("NOTION_API_KEY"));
}

#[test]
fn export_without_page_id_fails() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("export")
        .arg(ws.meeting())
        .env("NOTION_API_KEY", "secret_from_env")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing Notion page id"));
}

#[test]
fn config_path_honors_override() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(
            ws.dir.path().to_string_lossy().to_string(),
        ));
}

#[test]
fn config_set_get_round_trip() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "set", "page_id", "abc123"])
        .assert()
        .success();

    ws.cmd()
        .args(["config", "get", "page_id"])
        .assert()
        .success()
        .stdout("abc123\n");
}

#[test]
fn config_masks_api_key() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "set", "api_key", "secret_abcdefghijklmnop"])
        .assert()
        .success()
        .stderr(predicate::str::contains("secr...mnop"))
        .stderr(predicate::str::contains("abcdefghijkl").not());

    ws.cmd()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("secr...mnop"))
        .stdout(predicate::str::contains("secret_abcdefghijklmnop").not());
}

#[test]
fn config_rejects_unknown_key() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "set", "colour", "blue"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_rejects_invalid_overflow() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "set", "overflow", "queue"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid overflow policy"));
}

#[test]
fn config_rejects_unknown_pattern_item() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "set", "date_format", "%Q"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid date/time pattern"));
}

#[test]
fn bad_pattern_in_config_file_uses_default() {
    let ws = Workspace::new();
    ws.write_config("date_format = \"%Q\"\n");

    ws.cmd()
        .arg("markdown")
        .arg(ws.meeting())
        .args(["--tz", "utc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Date:** 1/1/2024"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let ws = Workspace::new();

    ws.cmd().args(["config", "init"]).assert().success();
    assert!(ws.config().exists());

    ws.cmd()
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[tokio::test(flavor = "multi_thread")]
async fn export_sends_blocks_and_prints_page_url() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/blocks/abc123/children"))
        .and(header("Authorization", "Bearer secret_from_env"))
        .and(header("Notion-Version", "2022-06-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "list"})))
        .expect(1)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    ws.write_config(&format!("api_base_url = \"{}/v1\"\n", server.uri()));

    let meeting = ws.meeting();
    let config = ws.config();
    let output = tokio::task::spawn_blocking(move || {
        let mut cmd = StdCommand::new(env!("CARGO_BIN_EXE_meeting-export"));
        cmd.env("MEETING_EXPORT_CONFIG", &config)
            .env_remove("NOTION_PAGE_ID")
            .env_remove("RUST_LOG")
            .env("NOTION_API_KEY", "secret_from_env")
            .arg("export")
            .arg(&meeting)
            .args(["--page-id", "abc123"]);
        cmd.output()
    })
    .await
    .unwrap()
    .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "https://notion.so/abc123");
    assert!(!String::from_utf8_lossy(&output.stderr).contains("secret_from_env"));
}

#[tokio::test(flavor = "multi_thread")]
async fn export_reports_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "API token is invalid."})))
        .mount(&server)
        .await;

    let ws = Workspace::new();
    ws.write_config(&format!(
        "api_key = \"secret_in_file\"\npage_id = \"abc123\"\napi_base_url = \"{}/v1\"\n",
        server.uri()
    ));

    let meeting = ws.meeting();
    let config = ws.config();
    let output = tokio::task::spawn_blocking(move || {
        StdCommand::new(env!("CARGO_BIN_EXE_meeting-export"))
            .env("MEETING_EXPORT_CONFIG", &config)
            .env_remove("NOTION_API_KEY")
            .env_remove("NOTION_PAGE_ID")
            .env_remove("RUST_LOG")
            .arg("export")
            .arg(&meeting)
            .output()
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to export meeting to Notion"));
    assert!(stderr.contains("API token is invalid."));
    assert!(output.stdout.is_empty());
}
