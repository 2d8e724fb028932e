use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_lifeadmin"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "lifeadmin-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

fn config_json(start: Option<&str>, file_logging: bool) -> String {
    let start = start
        .map(|s| format!("\"{s}\""))
        .unwrap_or_else(|| "null".to_string());
    let logging = if file_logging { "True" } else { "False" };
    format!(
        r#"{{
      "max_tasks_per_day": {{ "value": 3, "description": "cap" }},
      "urgent_window": {{ "value": "1-2", "description": "urgent" }},
      "soon_window": {{ "value": "1-4", "description": "soon" }},
      "normal_window": {{ "value": "2-7", "description": "normal" }},
      "low_window": {{ "value": "1-7", "description": "low" }},
      "plan_start_date": {{ "value": {start}, "description": "start" }},
      "file_logging_enabled": {{ "value": "{logging}", "description": "file logging" }}
    }}"#
    )
}

pub fn write_valid_config(dir: &Path) {
    fs::write(dir.join("config.json"), config_json(None, true)).unwrap();
}

pub fn write_config_with_start(dir: &Path, start: &str) {
    fs::write(dir.join("config.json"), config_json(Some(start), true)).unwrap();
}

pub fn run_with_input(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

pub fn run_without_input(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
