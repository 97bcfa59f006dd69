#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::Command;

// One well-formed message 2004 frame, preceded by two garbage bytes.
// Header fields: ref_station_id=77, tow=123456789, sync_flag=1,
// num_bd2_processed=12, smoothing_indicator=0, smoothing_interval=5.
const WIRE: &[u8] = &[
    0x13, 0x55, // garbage before the preamble
    0xD3, 0x00, 0x1A, 0x7D, 0x40, 0x4D, 0x1D, 0x6F, 0x34, 0x56, 0xC5, 0xD5, 0xE6, 0xF7, 0xFF,
    0xD9, 0x76, 0x4C, 0x89, 0x6A, 0xC7, 0x8E, 0x79, 0x61, 0xB5, 0x69, 0xFF, 0xFC, 0xF2, 0xC0,
    0x00, 0x00,
];

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/corrkit-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

#[test]
fn decode_file_outputs_json_records() {
    let dir = unique_temp_dir("decode");
    let input = dir.join("stream.bin");
    std::fs::write(&input, WIRE).expect("input should be writable");

    let output = Command::new(env!("CARGO_BIN_EXE_corrkit"))
        .arg("--log-level")
        .arg("error")
        .arg("--format")
        .arg("json")
        .arg("decode")
        .arg(&input)
        .output()
        .expect("decode should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("record.schema.json"));
    assert!(stdout.contains("\"msg_number\":2004"));
    assert!(stdout.contains("\"name\":\"tow\""));
    assert!(stdout.contains("123456789"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn decode_stats_reports_frame_counts() {
    let dir = unique_temp_dir("stats");
    let input = dir.join("stream.bin");
    std::fs::write(&input, WIRE).expect("input should be writable");

    let output = Command::new(env!("CARGO_BIN_EXE_corrkit"))
        .arg("--log-level")
        .arg("error")
        .arg("--format")
        .arg("json")
        .arg("decode")
        .arg(&input)
        .arg("--stats")
        .output()
        .expect("decode should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("decode-report.schema.json"));
    assert!(stdout.contains("\"frames\":1"));
    assert!(stdout.contains("\"decoded\":1"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn decode_missing_file_returns_usage_code() {
    let missing = PathBuf::from(format!(
        "/tmp/corrkit-missing-{}-{}.bin",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));

    let output = Command::new(env!("CARGO_BIN_EXE_corrkit"))
        .arg("decode")
        .arg(&missing)
        .output()
        .expect("decode should run");

    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn schemas_lists_builtin_layouts() {
    let output = Command::new(env!("CARGO_BIN_EXE_corrkit"))
        .arg("--format")
        .arg("json")
        .arg("schemas")
        .output()
        .expect("schemas should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("schema-list.schema.json"));
    assert!(stdout.contains("\"msg_number\":2004"));
    assert!(stdout.contains("\"msg_number\":2104"));
}

#[test]
fn schemas_merges_extra_directory() {
    let dir = unique_temp_dir("schemas");
    let layout = r#"{
        "msg_number": 1001,
        "headers": [
            {"name": "msg_number", "type": "uint12"},
            {"name": "station", "type": "uint12"}
        ],
        "content_length": 0
    }"#;
    std::fs::write(dir.join("msg_1001.schema.json"), layout).expect("layout should be writable");

    let output = Command::new(env!("CARGO_BIN_EXE_corrkit"))
        .arg("--format")
        .arg("json")
        .arg("schemas")
        .arg("--schemas")
        .arg(&dir)
        .output()
        .expect("schemas should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"msg_number\":1001"));
    assert!(stdout.contains("\"msg_number\":2004"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_prints_package_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_corrkit"))
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("corrkit "));
}
