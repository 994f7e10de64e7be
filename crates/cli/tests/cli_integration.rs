use std::process::{Command, Output};

fn optsift() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_optsift"));
    cmd.env_remove("OPTSIFT_FORMAT").env_remove("RUST_LOG");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run optsift")
}

fn assert_success(out: &Output) {
    assert!(
        out.status.success(),
        "optsift failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
}

#[test]
fn prints_text_snapshot() {
    let out = run(optsift().args([
        "--port",
        "8080",
        "-Syu",
        "--lines",
        "blank",
        "notes.txt",
        "-c=55",
    ]));
    assert_success(&out);

    let stdout = String::from_utf8_lossy(&out.stdout);
    let expected = "\
long options:
  --port = 8080
  --lines = blank
short options:
  -c = 55
short clusters:
  -Syu
positional arguments:
  notes.txt
";
    assert_eq!(stdout, expected);
}

#[test]
fn prints_placeholder_without_arguments() {
    let out = run(&mut optsift());
    assert_success(&out);
    assert_eq!(String::from_utf8_lossy(&out.stdout), "(no arguments)\n");
}

#[test]
fn prints_json_snapshot() {
    let out = run(
        optsift()
            .env("OPTSIFT_FORMAT", "json")
            .args(["in.txt", "--negate", "-402", "-f", "soft", "-Xabc"]),
    );
    assert_success(&out);

    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is not valid JSON");
    assert_eq!(
        value,
        serde_json::json!({
            "long": { "negate": "-402" },
            "short": { "f": "soft" },
            "clusters": ["Xabc"],
            "positionals": ["in.txt"],
        })
    );
}

#[test]
fn rejects_multi_character_short_option_with_detached_value() {
    let out = run(optsift().args(["-abc", "value"]));
    assert!(!out.status.success(), "expected failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("exactly one character"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn rejects_unknown_output_format() {
    let out = run(optsift().env("OPTSIFT_FORMAT", "yaml").arg("--port"));
    assert!(!out.status.success(), "expected failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("OPTSIFT_FORMAT"), "unexpected stderr:\n{stderr}");
}
