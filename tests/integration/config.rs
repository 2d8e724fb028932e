use lifeadmin::config::Config;

use crate::common::{make_temp_dir, run_without_input, stderr_of, stdout_of, write_valid_config};

#[test]
fn show_config_prints_every_key() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_without_input(&dir, &["--show-config"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("CONFIG"), "stdout did not include CONFIG table");
    for key in ["MAX_TASKS_PER_DAY", "URGENT_WINDOW", "LOW_WINDOW", "PLAN_START_DATE"] {
        assert!(stdout.contains(key), "missing {key}");
    }
}

#[test]
fn set_flag_persists_change() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_without_input(&dir, &["--set", "LOW_WINDOW=5-7", "--show-config"]);

    assert!(output.status.success(), "{}", stderr_of(&output));
    let cfg = Config::load_from(dir.join("config.json")).unwrap();
    assert_eq!(cfg.settings().unwrap().scheduler.windows.low.days(), &[5, 6, 7]);
    assert!(stdout_of(&output).contains("5-7"));
}

#[test]
fn set_flag_rejects_invalid_value_without_saving() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let before = std::fs::read_to_string(dir.join("config.json")).unwrap();
    let output = run_without_input(&dir, &["--set", "URGENT_WINDOW=3-1"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Invalid day window"));
    assert_eq!(std::fs::read_to_string(dir.join("config.json")).unwrap(), before);
}

#[test]
fn set_flag_requires_key_value_pair() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_without_input(&dir, &["--set", "LOW_WINDOW"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("KEY=VALUE"));
}
