use safe_arith::Variant;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(exe: &str, args: &[&str]) -> Output {
    Command::new(exe)
        .args(args)
        .env_remove("SAFE_ARITH_LIB")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn variant executable")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

/// Split off the banner line.
fn split_banner(text: &str) -> (&str, &str) {
    text.split_once('\n').expect("output has no banner line")
}

const EXPECTED_RESULTS: &str = "Obtained magic number: 42\n\
                                Answer is 84, with invalid flag 0\n\
                                Answer is 0, with invalid flag 0\n";

#[test]
fn static_program_prints_report() {
    let out = run(env!("CARGO_BIN_EXE_static_program"), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let text = stdout(&out);
    let (banner, rest) = split_banner(&text);
    assert_eq!(banner, Variant::Static.banner());
    assert_eq!(rest, EXPECTED_RESULTS);
}

#[test]
fn source_program_prints_report() {
    let out = run(env!("CARGO_BIN_EXE_source_program"), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let text = stdout(&out);
    let (banner, rest) = split_banner(&text);
    assert_eq!(banner, Variant::Source.banner());
    assert_eq!(rest, EXPECTED_RESULTS);
}

/// The cdylib built alongside this test, in `target/<profile>/deps`.
fn built_library() -> PathBuf {
    let exe = std::env::current_exe().expect("no test executable path");
    let deps = exe.parent().expect("test executable has no parent dir");
    let path = deps.join(libloading::library_filename("safe_arith"));
    assert!(path.is_file(), "cdylib not built at {}", path.display());
    path
}

#[test]
fn dynamic_program_matches_other_variants() {
    let library = built_library();
    let out = run(
        env!("CARGO_BIN_EXE_dynamic_program"),
        &["--library", library.to_str().expect("non UTF-8 target dir")],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let text = stdout(&out);
    let (banner, rest) = split_banner(&text);
    assert_eq!(banner, Variant::Dynamic.banner());
    assert_eq!(rest, EXPECTED_RESULTS);

    for exe in [
        env!("CARGO_BIN_EXE_static_program"),
        env!("CARGO_BIN_EXE_source_program"),
    ] {
        let other = stdout(&run(exe, &[]));
        assert_eq!(rest, split_banner(&other).1, "{exe}");
    }
}

#[test]
fn dynamic_program_finds_library_without_flags() {
    let out = run(env!("CARGO_BIN_EXE_dynamic_program"), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let text = stdout(&out);
    assert_eq!(split_banner(&text), (Variant::Dynamic.banner(), EXPECTED_RESULTS));
}

#[test]
fn dynamic_program_reports_missing_library() {
    let out = run(
        env!("CARGO_BIN_EXE_dynamic_program"),
        &["--library", "/nowhere/libsafe_arith.so"],
    );
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("/nowhere/libsafe_arith.so"), "stderr: {stderr}");
}

#[test]
fn json_output_is_parseable() {
    let out = run(env!("CARGO_BIN_EXE_static_program"), &["--format", "json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["variant"], "static");
    assert_eq!(value["magic_number"], 42);
    assert_eq!(value["sum"]["invalid"], false);
}

#[test]
fn explicit_missing_config_fails() {
    let out = run(
        env!("CARGO_BIN_EXE_source_program"),
        &["--config", "does/not/exist.toml"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to read config"));
}
