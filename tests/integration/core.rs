use crate::common::{
    make_temp_dir, run_with_input, run_without_input, stderr_of, stdout_of, write_valid_config,
};

#[test]
fn main_reports_empty_input() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_without_input(&dir, &[]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "No input provided");
}

#[test]
fn main_treats_leading_blank_line_as_empty_dump() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_with_input(&dir, &[], "\npay rent\n");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("No input provided"));
}

#[test]
fn main_fails_when_config_missing() {
    let dir = make_temp_dir("core");
    let output = run_without_input(&dir, &[]);
    assert!(
        !output.status.success(),
        "expected failure when config is missing"
    );
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Configuration file"),
        "stderr did not mention missing config: {}",
        stderr
    );
}

#[test]
fn main_fails_when_scheduling_constant_missing() {
    let dir = make_temp_dir("core");
    std::fs::write(
        dir.join("config.json"),
        r#"{ "max_tasks_per_day": { "value": 3, "description": "cap" } }"#,
    )
    .unwrap();
    let output = run_without_input(&dir, &[]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("URGENT_WINDOW"));
}

#[test]
fn main_rejects_unknown_arguments() {
    let dir = make_temp_dir("core");
    write_valid_config(&dir);
    let output = run_without_input(&dir, &["--frobnicate"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Unknown argument: --frobnicate"));
}

#[test]
fn main_uses_config_and_logs_paths_from_flags() {
    let dir = make_temp_dir("core");
    let elsewhere = make_temp_dir("core-elsewhere");
    write_valid_config(&elsewhere);
    let config = elsewhere.join("config.json");
    let logs = elsewhere.join("logs");

    let output = run_with_input(
        &dir,
        &[
            "--config",
            config.to_str().unwrap(),
            "--logs",
            logs.to_str().unwrap(),
        ],
        "call mom\n",
    );

    assert!(output.status.success(), "{}", stderr_of(&output));
    assert!(logs.exists());
    assert!(!dir.join("logs").exists());
}
