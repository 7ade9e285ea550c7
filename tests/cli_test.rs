//! Binary contract: exit codes, headless transcript and error output.

use std::process::{Command, Output, Stdio};

fn bouncebox(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bouncebox"))
        .args(args)
        .stdin(Stdio::null())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bouncebox")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_simulate_prints_draw_calls() {
    let output = bouncebox(&[
        "--rectangles", "3", "--width", "100", "--height", "100", "--seed", "5", "--simulate", "2",
    ]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    // Round one draws 3 rectangles, round two erases and redraws each.
    assert_eq!(lines.len(), 9);
    assert!(lines[..3].iter().all(|line| line.starts_with("fg ")));
    for line in &lines {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 5, "{line}");
        assert!(fields[0] == "fg" || fields[0] == "bg", "{line}");
        assert!(fields[1..].iter().all(|f| f.parse::<u16>().is_ok()), "{line}");
    }
    assert_eq!(lines[3..].iter().filter(|l| l.starts_with("bg ")).count(), 3);
}

#[test]
fn test_simulate_is_reproducible() {
    let args = ["-n", "5", "--seed", "12", "--simulate", "40"];
    assert_eq!(bouncebox(&args).stdout, bouncebox(&args).stdout);
}

#[test]
fn test_zero_rectangles_exits_with_config_error() {
    let output = bouncebox(&["--rectangles", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(
        stderr(&output).contains("rectangle count must be at least 1"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn test_surface_too_small_exits_with_config_error() {
    let output = bouncebox(&["--width", "30", "--height", "30", "--simulate", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("surface 30x30 is too small"), "{}", stderr(&output));
}

#[cfg(unix)]
#[test]
fn test_no_terminal_reports_cause_once() {
    // With a controlling terminal available the binary would take it over.
    if std::fs::File::open("/dev/tty").is_ok() {
        return;
    }

    let output = bouncebox(&["--rectangles", "3"]);
    assert_eq!(output.status.code(), Some(1));

    let message = stderr(&output);
    let line = message.trim_end();
    assert!(
        line.starts_with("Error: failed to initialize display surface: "),
        "{line}"
    );
    let parts: Vec<&str> = line.split(": ").collect();
    for (i, part) in parts.iter().enumerate() {
        assert!(!parts[i + 1..].contains(part), "repeated cause in {line}");
    }
}
