use super::{
    cli::CliOptions,
    context::AppContext,
    models::{Extraction, TaskCandidate},
    settings::PlannerSettings,
    types::{Bool, Category, DayWindow, Date, Urgency},
};
use crate::errors::Error;
use crate::scheduler::{SchedulerSettings, build_plan};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("lifeadmin-core-{name}-{nanos}-{uniq}"))
}

const SAMPLE_CONFIG: &str = r#"{
  "max_tasks_per_day": { "value": 2, "description": "cap" },
  "urgent_window": { "value": "1", "description": "urgent" },
  "soon_window": { "value": "1-3", "description": "soon" },
  "normal_window": { "value": "2,4,6", "description": "normal" },
  "low_window": { "value": "none", "description": "low" },
  "file_logging_enabled": { "value": "False", "description": "file logging" }
}"#;

#[test]
fn parses_categories_and_urgencies() {
    assert_eq!(Category::try_from("Finance").unwrap(), Category::Finance);
    assert_eq!(Category::try_from(" social ").unwrap(), Category::Social);
    assert_eq!(Urgency::try_from("URGENT").unwrap(), Urgency::Urgent);

    match Urgency::try_from("whenever").unwrap_err() {
        Error::InvalidInput(msg) => assert!(msg.contains("urgent, soon, normal, low")),
        other => panic!("expected invalid input error, got {other:?}"),
    }
    assert!(matches!(
        Category::try_from("hobby"),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn urgency_orders_most_urgent_first() {
    assert!(Urgency::Urgent < Urgency::Soon);
    assert!(Urgency::Normal < Urgency::Low);
}

#[test]
fn day_window_parses_ranges_lists_and_none() {
    assert_eq!(DayWindow::try_from_str("1-2").unwrap().days(), &[1, 2]);
    assert_eq!(DayWindow::try_from_str("6, 2,4").unwrap().days(), &[2, 4, 6]);
    assert_eq!(DayWindow::try_from_str("3").unwrap().days(), &[3]);
    assert!(DayWindow::try_from_str("None").unwrap().is_empty());
    assert!(DayWindow::try_from_str("1-3,5").unwrap().contains(5));
}

#[test]
fn day_window_rejects_days_outside_the_week() {
    for bad in ["0", "8", "4-2", "1-9", "x", "", "1-"] {
        match DayWindow::try_from_str(bad) {
            Err(Error::Configuration(_)) => {}
            other => panic!("expected configuration error for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn day_window_displays_canonical_form() {
    let show = |s: &str| DayWindow::try_from_str(s).unwrap().to_string();
    assert_eq!(show("1,2,3"), "1-3");
    assert_eq!(show("2,4,6"), "2,4,6");
    assert_eq!(show("5"), "5");
    assert_eq!(show("none"), "none");
    assert_eq!(DayWindow::whole_week().to_string(), "1-7");
}

#[test]
fn day_window_serializes_as_string() {
    let w = DayWindow::range(2, 4).unwrap();
    assert_eq!(serde_json::to_string(&w).unwrap(), "\"2-4\"");
    let back: DayWindow = serde_json::from_str("\"2-4\"").unwrap();
    assert_eq!(back, w);
    assert!(serde_json::from_str::<DayWindow>("\"9\"").is_err());
}

#[test]
fn parses_dates_and_bools() {
    let expected = NaiveDate::from_ymd_opt(2099, 1, 2).unwrap();
    assert_eq!(Date::try_from_str("2099-01-02").unwrap().0, expected);
    assert_eq!(Date::try_from_str("2099/01/02").unwrap().0, expected);
    assert_eq!(Date::try_from_str("01/02/2099").unwrap().0, expected);
    assert!(matches!(
        Date::try_from_str("tomorrow"),
        Err(Error::Configuration(_))
    ));

    assert_eq!(Bool::try_from_str("true").unwrap(), Bool(true));
    assert_eq!(Bool::try_from_str("False").unwrap().to_string(), "False");
    assert!(Bool::try_from_str("yes").is_err());
}

#[test]
fn task_candidate_json_omits_absent_due_cue() {
    let task = TaskCandidate {
        id: 1,
        raw_text: "call mom".into(),
        category: Category::Social,
        urgency: Urgency::Normal,
        rationale: "r".into(),
        due_cue: None,
    };
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["category"], "social");
    assert_eq!(json["urgency"], "normal");
    assert!(json.get("due_cue").is_none());
}

#[test]
fn task_candidate_accepts_minimal_payload() {
    let task: TaskCandidate = serde_json::from_str(
        r#"{ "raw_text": "pay rent", "category": "finance", "urgency": "soon" }"#,
    )
    .unwrap();
    assert_eq!(task.id, 0);
    assert!(task.rationale.is_empty());
    assert_eq!(task.urgency, Urgency::Soon);
}

#[test]
fn extraction_counts_tiers() {
    let make = |id, urgency| TaskCandidate {
        id,
        raw_text: format!("t{id}"),
        category: Category::Other,
        urgency,
        rationale: String::new(),
        due_cue: None,
    };
    let extraction = Extraction::new(vec![
        make(1, Urgency::Urgent),
        make(2, Urgency::Low),
        make(3, Urgency::Low),
    ]);
    assert_eq!(extraction.summary.total_tasks, 3);
    assert_eq!(extraction.summary.urgent, 1);
    assert_eq!(extraction.summary.low, 2);
    assert_eq!(extraction.summary.soon, 0);

    let empty: Extraction = serde_json::from_str("{}").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn empty_plan_has_seven_indexed_days() {
    let plan = build_plan(&[], &SchedulerSettings::default());
    assert_eq!(plan.days().len(), 7);
    assert_eq!(plan.day(1).unwrap().index(), 1);
    assert_eq!(plan.day(7).unwrap().index(), 7);
    assert!(plan.day(0).is_none());
    assert!(plan.day(8).is_none());
    assert_eq!(plan.total_tasks(), 0);
    assert_eq!(plan.day_of(1), None);
}

#[test]
fn planner_settings_defaults_match_built_in_constants() {
    let settings = PlannerSettings::default();
    assert_eq!(settings.scheduler.max_tasks_per_day, 3);
    assert_eq!(settings.scheduler.windows.urgent.to_string(), "1-2");
    assert_eq!(settings.scheduler.windows.soon.to_string(), "1-4");
    assert_eq!(settings.scheduler.windows.normal.to_string(), "2-7");
    assert_eq!(settings.scheduler.windows.low.to_string(), "1-7");
    assert_eq!(settings.extractor.max_input_chars, 10_000);
    assert!(settings.start_date.is_none());
}

#[test]
fn cli_options_defaults() {
    let opts = CliOptions::from_args(std::iter::empty()).unwrap();
    assert_eq!(opts.config_path, PathBuf::from("config.json"));
    assert_eq!(opts.logs_dir, PathBuf::from("logs"));
    assert!(!opts.json);
    assert!(!opts.show_config);
    assert!(opts.overrides.is_empty());
}

#[test]
fn cli_options_parses_all_flags() {
    let args = [
        "--config",
        "/tmp/cfg.json",
        "--logs",
        "/tmp/logs",
        "--json",
        "--show-config",
        "--set",
        "MAX_TASKS_PER_DAY = 5",
    ]
    .map(String::from);
    let opts = CliOptions::from_args(args.into_iter()).unwrap();
    assert_eq!(opts.config_path, PathBuf::from("/tmp/cfg.json"));
    assert_eq!(opts.logs_dir, PathBuf::from("/tmp/logs"));
    assert!(opts.json);
    assert!(opts.show_config);
    assert_eq!(
        opts.overrides,
        vec![("MAX_TASKS_PER_DAY".to_string(), "5".to_string())]
    );
}

#[test]
fn cli_options_errors_on_unknown_flag_and_missing_value() {
    let err = CliOptions::from_args(["--nope".to_string()].into_iter()).unwrap_err();
    assert!(err.contains("Unknown argument"));

    let err = CliOptions::from_args(["--config".to_string()].into_iter()).unwrap_err();
    assert_eq!(err, "Missing value for --config");

    let err = CliOptions::from_args(["--set".to_string(), "oops".to_string()].into_iter())
        .unwrap_err();
    assert!(err.contains("KEY=VALUE"));
}

#[test]
fn app_context_loads_settings_from_config() {
    let path = temp_path("config.json");
    fs::write(&path, SAMPLE_CONFIG).unwrap();
    let ctx = AppContext::new_with_paths(path.clone(), temp_path("logs")).unwrap();

    assert_eq!(ctx.settings.scheduler.max_tasks_per_day, 2);
    assert_eq!(ctx.settings.scheduler.windows.normal.days(), &[2, 4, 6]);
    assert!(ctx.settings.scheduler.windows.low.is_empty());
    assert_eq!(ctx.settings.extractor.min_split_chars, 12);
    assert!(!ctx.logger.file_logging_enabled());
    assert_eq!(ctx.config_path, path);
}

#[test]
fn app_context_fails_fast_on_missing_constant() {
    let path = temp_path("config.json");
    fs::write(
        &path,
        r#"{ "max_tasks_per_day": { "value": 3, "description": "cap" } }"#,
    )
    .unwrap();
    match AppContext::new_with_paths(path, temp_path("logs")).unwrap_err() {
        Error::ConfigItemMissing { item } => assert_eq!(item, "URGENT_WINDOW"),
        other => panic!("expected missing item error, got {other:?}"),
    }
}

#[test]
fn app_context_applies_overrides_and_refreshes_settings() {
    let path = temp_path("config.json");
    fs::write(&path, SAMPLE_CONFIG).unwrap();
    let mut opts = CliOptions::from_args(std::iter::empty()).unwrap();
    opts.config_path = path.clone();
    opts.logs_dir = temp_path("logs");
    opts.overrides = vec![("LOW_WINDOW".into(), "5-7".into())];

    let ctx = AppContext::from_options(&opts).unwrap();
    assert_eq!(ctx.settings.scheduler.windows.low.days(), &[5, 6, 7]);
    assert!(fs::read_to_string(&path).unwrap().contains("5-7"));
}
