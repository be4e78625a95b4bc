use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

fn write_input(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rr_model_{}_{name}.txt", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn rr(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rr"))
        .args(args)
        .env_remove("RR_QUANTUM")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_both_averages() {
    let input = write_input("averages", "4\n1, 0, 7,\n2, 2, 4,\n3, 4, 1,\n4, 5, 4,\n");
    let out = rr(&[input.to_str().unwrap(), "3"]);

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Average waiting time: 7.00\nAverage response time: 2.75\n"
    );
}

#[test]
fn per_process_table_precedes_summary() {
    let input = write_input("table", "2\n1 0 4\n2 0 4\n");
    let out = rr(&[input.to_str().unwrap(), "2", "--per-process"]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(out.status.success());
    assert!(stdout.starts_with("   pid"));
    assert!(stdout.ends_with("Average waiting time: 3.00\nAverage response time: 1.00\n"));
}

#[test]
fn zero_quantum_fails_without_output() {
    let input = write_input("zero", "1\n1 0 5\n");
    let out = rr(&[input.to_str().unwrap(), "0"]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("quantum"));
}

#[test]
fn truncated_file_fails() {
    let input = write_input("truncated", "3\n1 0 5\n2 1");
    let out = rr(&[input.to_str().unwrap(), "2"]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn non_digit_quantum_is_a_usage_error() {
    let input = write_input("usage", "1\n1 0 5\n");
    let out = rr(&[input.to_str().unwrap(), "3q"]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn huge_arrival_gap_finishes_with_a_short_trace() {
    let input = write_input("gap", "2  1 0 1  2 4294967295 1");
    let out = rr(&[input.to_str().unwrap(), "1", "--trace"]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(out.status.success());
    assert!(stdout.lines().count() < 12);
    assert!(stdout.contains("Idle { ticks: 4294967294 }"));
    assert!(stdout.ends_with("Average waiting time: 0.00\nAverage response time: 0.00\n"));
}
