//! Integration tests for the spf-cli binary.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test context holding a scratch directory for payloads and catalogs
struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        Self { temp_dir }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    fn render_cmd(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_spf-render");
        let mut cmd = Command::new(bin_path);
        cmd.env_remove("SPF_JOURNAL_URI");
        cmd.env_remove("SPF_CATALOG");
        cmd.env_remove("SPF_DATE_FORMAT");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    fn render(&self, args: &[&str], payload: &PathBuf) -> Output {
        self.render_cmd()
            .args(args)
            .arg(payload)
            .output()
            .expect("failed to run spf-render")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx
        .render_cmd()
        .arg("--help")
        .output()
        .expect("failed to run spf-render");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_listing_renders_rows() {
    let ctx = TestContext::new();
    let payload = ctx.write(
        "listing.json",
        r#"{"doc_pkgs":[{"name":"pkgA","uri":"/d/1","created":"2023-01-01"}],"errors":[]}"#,
    );

    let output = ctx.render(&["listing"], &payload);
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains(r#"<div id="resultSearchPackages"><table"#));
    assert!(html.contains(r#"<td>1</td>"#));
    assert!(html.contains(r#"href="/d/1""#));
    assert!(html.contains(r#"<div id="searchPackageLoading" style="display: none">"#));
    assert!(!html.contains("disabled"));
}

#[test]
fn test_listing_errors_as_text() {
    let ctx = TestContext::new();
    let payload = ctx.write(
        "listing.json",
        r#"{"doc_pkgs":[],"errors":["PID not found","index offline"]}"#,
    );

    let output = ctx.render(&["--format", "text", "listing"], &payload);
    assert!(output.status.success());
    let text = stdout(&output);
    let first = text.find("PID not found").expect("first error missing");
    let second = text.find("index offline").expect("second error missing");
    assert!(first < second);
    assert!(!text.contains('#'), "table must stay hidden");
}

#[test]
fn test_upload_uses_journal_uri_from_env() {
    let ctx = TestContext::new();
    let payload = ctx.write(
        "upload.json",
        r#"{"package_file":"pkg.zip","datetime":"2023-05-02T10:00:00Z",
            "article_files":[{"issn":"1234-5678","acron":"abc","pid":"S1","version":"1",
                              "file":{"name":"a.xml","uri":"/f/a.xml"}}]}"#,
    );

    let output = ctx
        .render_cmd()
        .env("SPF_JOURNAL_URI", "https://j.example/")
        .arg("upload")
        .arg(&payload)
        .output()
        .expect("failed to run spf-render");
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains(r#"href="https://j.example/abc/a/S1""#));
    assert!(html.contains("2023-05-02 10:00"));
}

#[test]
fn test_search_with_catalog() {
    let ctx = TestContext::new();
    let catalog = ctx.write(
        "pt.toml",
        "\"Package was generated with success.\" = \"Pacote gerado com sucesso.\"\n",
    );
    let payload = ctx.write(
        "search.json",
        r#"{"name":"pkgA","version":"1.0","created":"2023-01-01","uri":"/d/pkgA.zip"}"#,
    );

    let output = ctx
        .render_cmd()
        .arg("--catalog")
        .arg(&catalog)
        .args(["--date-format", "%d/%m/%Y", "search"])
        .arg(&payload)
        .output()
        .expect("failed to run spf-render");
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains("Pacote gerado com sucesso."));
    assert!(html.contains("alert-success"));
    assert!(html.contains("01/01/2023"));
    assert!(html.contains(">ZIP</a>"));
}

#[test]
fn test_pending_task_keeps_indicator() {
    let ctx = TestContext::new();
    let payload = ctx.write(
        "status.json",
        r#"{"status":"PROGRESS","state":"PROGRESS","data":{"status":"LOADING..."}}"#,
    );

    let output = ctx.render(&["status"], &payload);
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains(r#"<div id="searchPackageLoading">"#));
    assert!(html.contains(r#"disabled="disabled""#));
    assert!(html.contains("bg-warning"));
}

#[test]
fn test_finished_task_completes_badge() {
    let ctx = TestContext::new();
    let payload = ctx.write(
        "status.json",
        r#"{"status":"SUCCESS","state":"PROGRESS",
            "data":{"doc_pkgs":[{"name":"pkgA","uri":"/d/1","created":"2023-01-01"}],"errors":[]}}"#,
    );

    let output = ctx.render(&["status"], &payload);
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains(r#"<td class="badge bg-success">Completed</td>"#));
    assert!(html.contains(r#"href="/d/1""#));
}

#[test]
fn test_missing_payload_fails() {
    let ctx = TestContext::new();
    let missing = ctx.temp_dir.path().join("nope.json");
    let output = ctx.render(&["listing"], &missing);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read payload"));
}

#[test]
fn test_malformed_payload_fails() {
    let ctx = TestContext::new();
    let payload = ctx.write("bad.json", "<html>not json</html>");
    let output = ctx.render(&["search"], &payload);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Malformed search payload"));
}
