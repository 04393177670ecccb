//! CLI integration tests for devtoolbox
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn devtoolbox() -> Command {
    let mut cmd = Command::cargo_bin("devtoolbox").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    devtoolbox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Developer text utilities"))
        .stdout(predicate::str::contains("escape"))
        .stdout(predicate::str::contains("base64"));
}

#[test]
fn test_version() {
    devtoolbox()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("devtoolbox"));
}

#[test]
fn test_missing_subcommand_fails() {
    devtoolbox().assert().failure();
}

// ============================================================================
// Escape
// ============================================================================

#[test]
fn test_escape_encode_code_point() {
    devtoolbox()
        .args(["escape", "encode", "--format", "code-point", "A😀"])
        .assert()
        .success()
        .stdout("U+0041 U+1F600\n");
}

#[test]
fn test_escape_decode_detects_notation() {
    devtoolbox()
        .args(["escape", "decode", "&#72;&#x69;"])
        .assert()
        .success()
        .stdout("Hi\n");
}

#[test]
fn test_escape_decode_from_stdin() {
    devtoolbox()
        .args(["escape", "decode"])
        .write_stdin("\\u{1F600}\n")
        .assert()
        .success()
        .stdout("😀\n");
}

#[test]
fn test_escape_decode_explicit_format_mismatch() {
    devtoolbox()
        .args(["escape", "decode", "--format", "html-code", "U+0041"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_escape_detect() {
    devtoolbox()
        .args(["escape", "detect", "&amp;"])
        .assert()
        .success()
        .stdout("html-entity\n");
}

#[test]
fn test_escape_unknown_format_suggests() {
    devtoolbox()
        .args(["escape", "encode", "--format", "code-pont", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown escape type 'code-pont'"))
        .stderr(predicate::str::contains("code-point"));
}

// ============================================================================
// URL
// ============================================================================

#[test]
fn test_url_encode() {
    devtoolbox()
        .args(["url", "encode", "a b&c=d/é"])
        .assert()
        .success()
        .stdout("a%20b%26c%3Dd%2F%C3%A9\n");
}

#[test]
fn test_url_decode_malformed() {
    devtoolbox()
        .args(["url", "decode", "%E0%A4%A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("url decode"));
}

#[test]
fn test_url_auto_picks_direction() {
    devtoolbox()
        .args(["url", "auto", "hello%20world"])
        .assert()
        .success()
        .stdout("hello world\n");

    devtoolbox()
        .args(["url", "auto", "hello world"])
        .assert()
        .success()
        .stdout("hello%20world\n");
}

#[test]
fn test_url_detect_json() {
    devtoolbox()
        .args(["--json", "url", "detect", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"encoded\": false"));
}

// ============================================================================
// Base64
// ============================================================================

#[test]
fn test_base64_encode_and_url_safe() {
    devtoolbox()
        .args(["base64", "encode", "Hello World"])
        .assert()
        .success()
        .stdout("SGVsbG8gV29ybGQ=\n");

    devtoolbox()
        .args(["base64", "encode", "--url-safe", "<<??>>"])
        .assert()
        .success()
        .stdout("PDw_Pz4-\n");
}

#[test]
fn test_base64_decode_to_stdout() {
    devtoolbox()
        .args(["base64", "decode", "SGVsbG8gV29ybGQ"])
        .assert()
        .success()
        .stdout("Hello World");
}

#[test]
fn test_base64_decode_to_file() {
    let dir = std::env::temp_dir().join(format!("devtoolbox-b64-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let out = dir.join("pixel.png");

    devtoolbox()
        .args(["base64", "decode", "iVBORw0KGgo=", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read(&out).unwrap(), b"\x89PNG\r\n\x1a\n");
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_base64_validate_mixed_alphabets() {
    devtoolbox()
        .args(["base64", "validate", "SGVsbG8gV29ybGQ="])
        .assert()
        .success()
        .stdout("valid\n");

    devtoolbox()
        .args(["base64", "validate", "SGVsbG8+V29ybGQ-"])
        .assert()
        .code(1)
        .stdout("invalid\n");
}

#[test]
fn test_base64_inspect_file_type() {
    devtoolbox()
        .args(["--json", "base64", "inspect", "JVBERi0xLjQK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"))
        .stdout(predicate::str::contains("application/pdf"));
}

#[test]
fn test_base64_standardize() {
    devtoolbox()
        .args(["base64", "standardize", "PDw_Pz4-"])
        .assert()
        .success()
        .stdout("PDw/Pz4+\n");
}

#[test]
fn test_base64_encode_file() {
    let dir = std::env::temp_dir().join(format!("devtoolbox-enc-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("input.bin");
    fs::write(&input, [0u8, 1, 2, 255]).unwrap();

    devtoolbox()
        .args(["base64", "encode", "--file"])
        .arg(&input)
        .assert()
        .success()
        .stdout("AAEC/w==\n");

    fs::remove_dir_all(&dir).ok();
}

// ============================================================================
// Date
// ============================================================================

#[test]
fn test_date_from_timestamp() {
    devtoolbox()
        .args(["date", "1705314600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Input format: TimestampSeconds"))
        .stdout(predicate::str::contains("2024-01-15T10:30:00Z"))
        .stdout(predicate::str::contains("Mon, 15 Jan 2024 10:30:00 GMT"))
        .stdout(predicate::str::contains("1705314600000"));
}

#[test]
fn test_date_timezone_rendering() {
    devtoolbox()
        .args(["date", "2024-01-15T10:30:00Z", "--tz", "Europe/Paris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timezone: Europe/Paris"))
        .stdout(predicate::str::contains("2024-01-15T11:30:00+01:00"))
        .stdout(predicate::str::contains("Mon, 15 Jan 2024 10:30:00 GMT"));
}

#[test]
fn test_date_unknown_timezone() {
    devtoolbox()
        .args(["date", "1705314600", "--tz", "Europe/Pari"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown timezone"))
        .stderr(predicate::str::contains("Europe/Paris"));
}

#[test]
fn test_date_unrecognised_input() {
    devtoolbox()
        .args(["date", "not a date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--from"));
}

#[test]
fn test_date_now_without_input() {
    devtoolbox()
        .args(["--json", "date"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input_format\": null"))
        .stdout(predicate::str::contains("TimestampMilliseconds"));
}

// ============================================================================
// UUID
// ============================================================================

#[test]
fn test_uuid_v4_quantity() {
    let output = devtoolbox()
        .args(["uuid", "-n", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.len(), 36);
        assert_eq!(&line[14..15], "4");
    }
}

#[test]
fn test_uuid_v5_preset_namespace() {
    devtoolbox()
        .args(["uuid", "--version", "v5", "--namespace", "dns", "--name", "example.com"])
        .assert()
        .success()
        .stdout("cfbff0d1-9375-5685-968c-48ce8b15ae17\n");
}

#[test]
fn test_uuid_formatting_flags() {
    devtoolbox()
        .args([
            "uuid", "--version", "nil", "--no-hyphens", "--braces", "--quotes", "--commas",
        ])
        .assert()
        .success()
        .stdout("\"{00000000000000000000000000000000}\",\n");
}

#[test]
fn test_uuid_v3_requires_name() {
    devtoolbox()
        .args(["uuid", "--version", "v3", "--namespace", "url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_uuid_validate() {
    devtoolbox()
        .args(["uuid", "--validate", "cfbff0d1-9375-5685-968c-48ce8b15ae17"])
        .assert()
        .success()
        .stdout("valid\n");

    devtoolbox()
        .args(["uuid", "--validate", "not-a-uuid"])
        .assert()
        .code(1);
}

// ============================================================================
// Color
// ============================================================================

#[test]
fn test_color_single_target() {
    devtoolbox()
        .args(["color", "#3296fa", "--to", "hsl"])
        .assert()
        .success()
        .stdout("hsl(210, 95%, 59%)\n");
}

#[test]
fn test_color_named_input() {
    devtoolbox()
        .args(["color", "red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Input format: named color"))
        .stdout(predicate::str::contains("Name: red"))
        .stdout(predicate::str::contains("#ff0000"))
        .stdout(predicate::str::contains("rgb(255, 0, 0)"));
}

#[test]
fn test_color_invalid() {
    devtoolbox()
        .args(["color", "#ggg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ============================================================================
// Count
// ============================================================================

#[test]
fn test_count_json() {
    devtoolbox()
        .args(["--json", "count", "Hello, world!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 13"))
        .stdout(predicate::str::contains("\"nonLatin\": 0"));
}

#[test]
fn test_count_table() {
    devtoolbox()
        .args(["count", "a b\nc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:      3"))
        .stdout(predicate::str::contains("Lines:      2"));
}

#[test]
fn test_count_stdin_keeps_trailing_newline() {
    devtoolbox()
        .arg("count")
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Characters: 4"))
        .stdout(predicate::str::contains("Lines:      3"));
}

#[test]
fn test_stdin_trailing_newline_dropped_for_encoders() {
    devtoolbox()
        .args(["url", "encode"])
        .write_stdin("a b\n")
        .assert()
        .success()
        .stdout("a%20b\n");
}

// ============================================================================
// Hash
// ============================================================================

#[test]
fn test_hash_default_algorithm() {
    devtoolbox()
        .args(["hash", "abc"])
        .assert()
        .success()
        .stdout("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n");
}

#[test]
fn test_hash_md5_base64() {
    devtoolbox()
        .args(["hash", "-a", "md5", "-e", "base64", "abc"])
        .assert()
        .success()
        .stdout("kAFQmDzST7DWlj99KOF/cg==\n");
}

#[test]
fn test_hash_unknown_algorithm() {
    devtoolbox()
        .args(["hash", "-a", "sha265", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown hash algorithm 'sha265'"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_list_hashes() {
    devtoolbox()
        .args(["config", "list", "hashes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("md5,sha224,sha256"));
}

#[test]
fn test_config_list_json() {
    devtoolbox()
        .args(["--json", "config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"escapes\""))
        .stdout(predicate::str::contains("\"colors\""));
}

#[test]
fn test_config_show() {
    devtoolbox()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[uuid]"))
        .stdout(predicate::str::contains("max_input_size"));
}

#[test]
fn test_explicit_config_overrides() {
    let dir = std::env::temp_dir().join(format!("devtoolbox-cfg-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("override.toml");
    fs::write(&path, "[hash]\nalgorithm = \"md5\"\n").unwrap();

    devtoolbox()
        .arg("--config")
        .arg(&path)
        .args(["hash", "abc"])
        .assert()
        .success()
        .stdout("900150983cd24fb0d6963f7d28e17f72\n");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_explicit_config_fails() {
    devtoolbox()
        .args(["--config", "/nonexistent/devtoolbox.toml", "count", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read config"));
}

// ============================================================================
// Input limits
// ============================================================================

#[test]
fn test_file_over_max_size_needs_force() {
    let dir = std::env::temp_dir().join(format!("devtoolbox-max-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("big.txt");
    fs::write(&input, "x".repeat(64)).unwrap();

    devtoolbox()
        .args(["--max-size", "16", "count", "--file"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    devtoolbox()
        .args(["--max-size", "16", "--force", "--json", "count", "--file"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 64"));

    fs::remove_dir_all(&dir).ok();
}
