// crates/tdsp-cli/tests/cli_color.rs

use std::io::Write;
use std::process::{Command, Output};

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tdsp-cli"))
}

fn run_ok(cmd: &mut Command) -> String {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

fn run_err(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        !out.status.success(),
        "command unexpectedly succeeded:\n{}",
        String::from_utf8_lossy(&out.stdout)
    );
    out
}

#[test]
fn parse_named_color_both_bases() {
    assert_eq!(run_ok(cli().args(["parse", "red"])), "1 0 0\n");
    assert_eq!(
        run_ok(cli().args(["--base", "integer", "parse", "red", "--hex"])),
        "255 0 0\n0xFF0000\n"
    );
    assert_eq!(
        run_ok(cli().args(["parse", "10, 20, 30", "--base", "integer"])),
        "10 20 30\n"
    );
}

#[test]
fn parse_signed_suffix() {
    assert_eq!(run_ok(cli().args(["parse", "white-+-"])), "-1 1 -1\n");
}

#[test]
fn negative_triples_reach_the_parser() {
    assert_eq!(run_ok(cli().args(["parse", "-1, 0, 0"])), "-1 0 0\n");
    assert_eq!(run_ok(cli().args(["hex", "-1, 0, 0"])), "0x000000\n");
    assert_eq!(
        run_ok(cli().args(["distance", "-1, 0, 0", "black"])).lines().next(),
        Some("distance2    = 1")
    );
    assert_eq!(
        run_ok(cli().args(["fade", "-1, 0, 0", "red", "--fader", "0.5"])),
        "black\n"
    );
}

#[test]
fn format_prefers_names_then_grey_then_hex() {
    assert_eq!(run_ok(cli().args(["format", "1", "1", "1"])), "white\n");
    assert_eq!(run_ok(cli().args(["format", "-1", "0", "0"])), "red-++\n");
    assert_eq!(run_ok(cli().args(["format", "0.5", "0.5", "0.5"])), "gray 50\n");
    assert_eq!(
        run_ok(cli().args(["--base", "integer", "format", "18", "52", "86"])),
        "#123456\n"
    );
}

#[test]
fn hex_of_text() {
    assert_eq!(run_ok(cli().args(["hex", "#0080ff"])), "0x0080FF\n");
}

#[test]
fn distance_and_greyness() {
    assert_eq!(
        run_ok(cli().args(["distance", "red", "blue"])),
        "distance2    = 2\ngreyness2(a) = 2\ngreyness2(b) = 2\n"
    );
}

#[test]
fn unknown_name_fails_and_names_the_text() {
    let out = run_err(cli().args(["parse", "notacolor"]));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("notacolor"), "stderr:\n{stderr}");

    let out = run_err(cli().args(["parse", "1, 2"]));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("1, 2"), "stderr:\n{stderr}");
}

#[test]
fn custom_names_file() {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(f, "! custom table").unwrap();
    writeln!(f, "255 102   0\t\tbrand orange").unwrap();
    f.flush().unwrap();
    let path = f.path().to_str().unwrap().to_string();

    assert_eq!(
        run_ok(cli().args(["--names", &path, "--base", "integer", "parse", "brand orange"])),
        "255 102 0\n"
    );
    assert_eq!(
        run_ok(cli().args(["--names", &path, "--base", "integer", "format", "255", "102", "0"])),
        "brand orange\n"
    );

    let listed = run_ok(cli().args(["--names", &path, "names"]));
    assert!(listed.lines().any(|l| l == "brand orange"));
    assert!(listed.lines().any(|l| l == "red"));
}

#[test]
fn bad_names_file_is_reported() {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(f, "255 nope 0 broken").unwrap();
    f.flush().unwrap();
    let path = f.path().to_str().unwrap().to_string();

    let out = run_err(cli().args(["--names", &path, "names"]));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 1"), "stderr:\n{stderr}");
}
