//! Integration test: run the compiled binary the way a CGI gateway does.
//!
//! Each run gets a cleared environment plus the request variables, with HOME
//! and the XDG dirs pointed at a temp dir so no real config or log is touched.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::{tempdir, NamedTempFile, TempDir};

fn envprobe(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_envprobe"));
    cmd.env_clear()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_STATE_HOME", home.path().join("state"));
    cmd
}

fn stdout(out: &Output) -> String {
    assert!(
        out.status.success(),
        "exit {:?}, stderr: {}",
        out.status,
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout.clone()).unwrap()
}

fn split_response(text: &str) -> (&str, &str) {
    text.split_once("\n\n").expect("header block")
}

fn config_file(home: &TempDir) -> PathBuf {
    home.path().join("config").join("envprobe").join("config.toml")
}

fn write_config(home: &TempDir, toml: &str) {
    let path = config_file(home);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, toml).unwrap();
}

#[test]
fn index_page_reports_forwarded_params() {
    let home = tempdir().unwrap();
    let out = envprobe(&home)
        .env("GATEWAY_INTERFACE", "CGI/1.1")
        .env("SERVER_SOFTWARE", "HAProxy")
        .env("SCRIPT_NAME", "/index.php")
        .env("SCRIPT_FILENAME", "/var/www/html/index.php")
        .env("DOCUMENT_ROOT", "/var/www/html")
        .env("REQUEST_METHOD", "GET")
        .env("HTTPS", "on")
        .output()
        .unwrap();
    let text = stdout(&out);
    let (headers, body) = split_response(&text);
    assert_eq!(headers, "Content-Type: text/plain; charset=utf-8");
    assert!(body.starts_with("FastCGI Environment\n"));
    assert!(body.contains("Document Root      /var/www/html\n"));
    assert!(body.contains("Script Filename    /var/www/html/index.php\n"));
    assert!(body.contains("HTTPS              Yes\n"));
    assert!(body.contains("PATH_INFO          Not set\n"));
    assert!(body.contains("Server Port        N/A\n"));
    assert!(body.contains("/test-path-info/extra/path"));
}

#[test]
fn index_page_shows_forwarded_path_info() {
    let home = tempdir().unwrap();
    let out = envprobe(&home)
        .env("GATEWAY_INTERFACE", "CGI/1.1")
        .env("SCRIPT_NAME", "/index.php")
        .env("PATH_INFO", "/x")
        .output()
        .unwrap();
    let text = stdout(&out);
    let (_, body) = split_response(&text);
    assert!(body.starts_with("FastCGI Environment\n"));
    assert!(body.contains("PATH_INFO          /x\n"));
}

#[test]
fn path_info_page_json() {
    let home = tempdir().unwrap();
    write_config(&home, "format = \"json\"\n");
    let out = envprobe(&home)
        .env("GATEWAY_INTERFACE", "CGI/1.1")
        .env("SCRIPT_NAME", "/test-path-info.php")
        .env("REQUEST_URI", "/test-path-info.php/api//v1/products/")
        .env("PATH_INFO", "/api//v1/products/")
        .output()
        .unwrap();
    let text = stdout(&out);
    let (headers, body) = split_response(&text);
    assert_eq!(headers, "Content-Type: application/json");
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["page"], "path-info");
    assert_eq!(json["path_info_set"], true);
    assert_eq!(json["segments"], serde_json::json!(["api", "v1", "products"]));
    assert_eq!(json["examples"][0]["href"], "/test-path-info.php/users");
}

#[test]
fn indexed_query_argv_still_serves_page() {
    let home = tempdir().unwrap();
    let out = envprobe(&home)
        .arg("search+term")
        .env("GATEWAY_INTERFACE", "CGI/1.1")
        .env("QUERY_STRING", "search+term")
        .output()
        .unwrap();
    let text = stdout(&out);
    assert!(text.starts_with("Content-Type: text/plain; charset=utf-8\n\n"));
    assert!(text.contains("Query String       search+term\n"));
}

#[test]
fn gateway_never_runs_subcommands_from_argv() {
    let home = tempdir().unwrap();
    let mut dump = NamedTempFile::new().unwrap();
    dump.write_all(b"SECRET_MARKER=1\n").unwrap();
    dump.flush().unwrap();
    let out = envprobe(&home)
        .arg("inspect")
        .arg(dump.path())
        .env("GATEWAY_INTERFACE", "CGI/1.1")
        .output()
        .unwrap();
    let text = stdout(&out);
    assert!(text.starts_with("Content-Type: text/plain; charset=utf-8\n\n"));
    assert!(!text.contains("SECRET_MARKER"));
    assert!(!config_file(&home).exists(), "CGI mode must not write config");

    let out = envprobe(&home)
        .args(["segments", "a"])
        .env("GATEWAY_INTERFACE", "CGI/1.1")
        .output()
        .unwrap();
    assert!(stdout(&out)
        .starts_with("Content-Type: text/plain; charset=utf-8\n\nFastCGI Environment\n"));
}

#[test]
fn cgi_subcommand_outside_gateway_honours_flags() {
    let home = tempdir().unwrap();
    let out = envprobe(&home)
        .args(["cgi", "--page", "path-info", "--format", "json"])
        .env("PATH_INFO", "/users")
        .output()
        .unwrap();
    let text = stdout(&out);
    let (headers, body) = split_response(&text);
    assert_eq!(headers, "Content-Type: application/json");
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["segments"], serde_json::json!(["users"]));
}

#[test]
fn unreadable_config_falls_back_in_cgi_mode() {
    let home = tempdir().unwrap();
    write_config(&home, "format = ");
    let out = envprobe(&home)
        .env("GATEWAY_INTERFACE", "CGI/1.1")
        .output()
        .unwrap();
    assert!(stdout(&out).starts_with("Content-Type: text/plain"));
}

#[test]
fn inspect_env_dump_prints_body_only() {
    let home = tempdir().unwrap();
    let mut dump = NamedTempFile::new().unwrap();
    dump.write_all(b"SCRIPT_NAME=/test-path-info.php\nPATH_INFO=/users/123\n").unwrap();
    dump.flush().unwrap();
    let out = envprobe(&home)
        .arg("inspect")
        .arg(dump.path())
        .output()
        .unwrap();
    let body = stdout(&out);
    assert!(body.starts_with("PATH_INFO Test\n"));
    assert!(body.contains("[0] => users\n[1] => 123\n"));
    assert!(!body.contains("Content-Type"));
}

#[test]
fn inspect_malformed_dump_fails() {
    let home = tempdir().unwrap();
    let mut dump = NamedTempFile::new().unwrap();
    dump.write_all(b"SCRIPT_NAME=/index.php\ngarbage\n").unwrap();
    dump.flush().unwrap();
    let out = envprobe(&home)
        .arg("inspect")
        .arg(dump.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("envprobe error:"));
    assert!(stderr.contains("line 2: expected KEY=VALUE"));
}

#[test]
fn segments_one_per_line() {
    let home = tempdir().unwrap();
    let out = envprobe(&home)
        .args(["segments", "/a//b/"])
        .output()
        .unwrap();
    assert_eq!(stdout(&out), "a\nb\n");

    let out = envprobe(&home).args(["segments", "/"]).output().unwrap();
    assert_eq!(stdout(&out), "");
}
