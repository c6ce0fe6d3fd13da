//! CLI integration tests for testshape
//!
//! Runs the testshape binary and verifies its output.

use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

// ============================================================================
// Helper Functions
// ============================================================================

/// Run testshape command and return output
fn run_testshape(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Get stdout as string
fn stdout_string(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as string
fn stderr_string(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Create a two frame 64x48 Y4M file
fn create_test_y4m() -> NamedTempFile {
    let mut temp_file = NamedTempFile::with_suffix(".y4m").expect("Failed to create temp file");
    let mut data = b"YUV4MPEG2 W64 H48 F25:1 Ip A1:1 C420jpeg\n".to_vec();
    for _ in 0..2 {
        data.extend_from_slice(b"FRAME\n");
        data.extend(std::iter::repeat(16u8).take(64 * 48));
        data.extend(std::iter::repeat(128u8).take(2 * 32 * 24));
    }
    temp_file.write_all(&data).expect("Failed to write y4m");
    temp_file.flush().expect("Failed to flush y4m");
    temp_file
}

// ============================================================================
// Help and Inspect
// ============================================================================

#[test]
fn test_help() {
    let output = run_testshape(&["--help"]);
    assert!(output.status.success());
    let stdout = stdout_string(&output);
    assert!(stdout.contains("draw"));
    assert!(stdout.contains("inspect"));
}

#[test]
fn test_inspect() {
    let output = run_testshape(&["inspect"]);
    assert!(output.status.success(), "stderr: {}", stderr_string(&output));
    let stdout = stdout_string(&output);
    assert!(stdout.contains("Filter/Effect/Video"));
    assert!(stdout.contains("format=(string)NV12"));
    assert!(stdout.contains("circle_radius"));
    assert!(stdout.contains("SINK template: 'sink'"));
}

#[test]
fn test_inspect_json() {
    let output = run_testshape(&["inspect", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr_string(&output));

    let json: serde_json::Value =
        serde_json::from_str(&stdout_string(&output)).expect("inspect --json prints JSON");
    assert_eq!(json["metadata"]["name"], "testshape");
    assert_eq!(json["pad_templates"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["properties"].as_array().map(Vec::len), Some(10));
    assert_eq!(json["properties"][0]["name"], "shape");
    assert_eq!(json["properties"][0]["default"], "square");
}

// ============================================================================
// Draw
// ============================================================================

#[test]
fn test_draw() {
    let input = create_test_y4m();
    let output_file = NamedTempFile::with_suffix(".y4m").expect("Failed to create temp file");

    let output = run_testshape(&[
        "draw",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "-p",
        "shape=circle",
        "-p",
        "color=blue",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_string(&output));
    assert!(stdout_string(&output).contains("Drew circle on 2 frames"));

    let written = std::fs::read(output_file.path()).unwrap();
    assert!(written.starts_with(b"YUV4MPEG2 W64 H48"));
    // blue luma somewhere in the output
    assert!(written.contains(&29));
}

#[test]
fn test_draw_with_options() {
    let input = create_test_y4m();
    let output_file = NamedTempFile::with_suffix(".y4m").expect("Failed to create temp file");

    let output = run_testshape(&[
        "draw",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "--shape",
        "triangle",
        "--color",
        "green",
        "--coordinate",
        "--x",
        "32",
        "--y",
        "24",
        "--triangle-size",
        "10",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_string(&output));
    assert!(stdout_string(&output).contains("Drew triangle on 2 frames"));

    let written = std::fs::read(output_file.path()).unwrap();
    assert!(written.contains(&149));
}

#[test]
fn test_draw_with_settings_file() {
    let input = create_test_y4m();
    let output_file = NamedTempFile::with_suffix(".y4m").expect("Failed to create temp file");
    let mut settings = NamedTempFile::with_suffix(".json").expect("Failed to create temp file");
    settings
        .write_all(br#"{"shape": "rectangle", "color": "green"}"#)
        .unwrap();
    settings.flush().unwrap();

    let output = run_testshape(&[
        "draw",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "--settings",
        settings.path().to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_string(&output));
    assert!(stdout_string(&output).contains("Drew rectangle"));
}

#[test]
fn test_draw_rejects_unknown_shape() {
    let input = create_test_y4m();
    let output_file = NamedTempFile::with_suffix(".y4m").expect("Failed to create temp file");

    let output = run_testshape(&[
        "draw",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "-p",
        "shape=hexagon",
    ]);
    assert!(!output.status.success());
    assert!(stderr_string(&output).contains("hexagon"));
}

#[test]
fn test_draw_missing_input() {
    let output = run_testshape(&["draw", "-i", "/nonexistent/in.y4m", "-o", "/tmp/out.y4m"]);
    assert!(!output.status.success());
}
