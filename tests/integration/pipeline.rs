use lifeadmin::core::types::{Category, Urgency};
use lifeadmin::pipeline::Pipeline;
use lifeadmin::{build_7_day_plan, extract_and_classify_tasks};
use serde_json::Value;

use crate::common::{
    make_temp_dir, read_log_contents, run_with_input, stderr_of, stdout_of,
    write_config_with_start, write_valid_config,
};

const DUMP: &str = "Extend my visa today, clean the fridge, call mom\n";

#[test]
fn library_operations_chain_through_json() {
    let extraction = extract_and_classify_tasks(DUMP).unwrap();
    let plan = build_7_day_plan(&extraction).unwrap();

    let days = plan["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    let placed: usize = days
        .iter()
        .map(|d| d["tasks"].as_array().unwrap().len())
        .sum();
    assert_eq!(placed, 3);
}

#[test]
fn pipeline_run_classifies_and_places() {
    let out = Pipeline::with_defaults().unwrap().run(DUMP).unwrap();

    let first = &out.extraction.tasks[0];
    assert_eq!(first.category, Category::Immigration);
    assert_eq!(first.urgency, Urgency::Urgent);
    assert_eq!(out.plan.day_of(1), Some(1));
    assert_eq!(out.plan.total_tasks(), 3);
}

#[test]
fn main_prints_tasks_and_weekly_plan() {
    let dir = make_temp_dir("pipeline");
    write_config_with_start(&dir, "2099-01-01");
    let output = run_with_input(&dir, &[], DUMP);

    assert!(output.status.success(), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("TASKS"));
    assert!(stdout.contains("Extend my visa today"));
    assert!(stdout.contains("3 task(s): 1 urgent, 0 soon, 2 normal, 0 low"));
    assert!(stdout.contains("WHY"));
    assert!(stdout.contains("WEEKLY PLAN"));
    assert!(stdout.contains("DAY 1: TODAY (2099-01-01)"));
    assert!(stdout.contains("Nothing planned."));
    assert!(!stdout.contains('\u{1b}'), "piped output should be uncolored");
}

#[test]
fn main_json_output_has_extraction_and_plan() {
    let dir = make_temp_dir("pipeline");
    write_config_with_start(&dir, "2099-01-01");
    let output = run_with_input(&dir, &["--json"], DUMP);

    assert!(output.status.success(), "{}", stderr_of(&output));
    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["extraction"]["summary"]["total_tasks"], 3);
    assert_eq!(json["extraction"]["tasks"][0]["urgency"], "urgent");
    assert_eq!(json["plan"]["start_date"], "2099-01-01");
    assert_eq!(json["plan"]["days"].as_array().unwrap().len(), 7);
    assert_eq!(json["plan"]["days"][0]["tasks"][0]["id"], 1);
}

#[test]
fn main_logs_placements_to_session_file() {
    let dir = make_temp_dir("pipeline");
    write_valid_config(&dir);
    let output = run_with_input(&dir, &["--json"], DUMP);
    assert!(output.status.success(), "{}", stderr_of(&output));

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Extracted 3 task(s)"));
    assert!(log.contains("Task with id 1 placed on day 1"));
    assert!(log.contains("Finished scheduling 3 task(s)."));
}

#[test]
fn main_rejects_oversized_dump() {
    let dir = make_temp_dir("pipeline");
    write_valid_config(&dir);
    let input = format!("{}\n", "a".repeat(10_001));
    let output = run_with_input(&dir, &[], &input);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Invalid input"));
}
