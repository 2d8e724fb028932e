#[cfg(test)]
mod tests;

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;
use strum_macros::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

trait LogSink: Send + Sync {
    fn accepts(&self, level: LogLevel) -> bool;
    fn write_line(&self, line: &str);
}

struct StdoutSink;
impl LogSink for StdoutSink {
    fn accepts(&self, level: LogLevel) -> bool {
        level == LogLevel::Info
    }
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

struct StderrSink;
impl LogSink for StderrSink {
    fn accepts(&self, level: LogLevel) -> bool {
        matches!(level, LogLevel::Warn | LogLevel::Error)
    }
    fn write_line(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Session log file, one per process run.
struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    fn open_in(dir: &Path) -> std::io::Result<(Self, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S%.3f");
        let path = dir.join(format!("session-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((
            Self {
                file: Mutex::new(file),
            },
            path,
        ))
    }
}

impl LogSink for FileSink {
    fn accepts(&self, _level: LogLevel) -> bool {
        true
    }
    fn write_line(&self, line: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

impl LogTarget {
    fn console(self) -> bool {
        matches!(self, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
    }
    fn file(self) -> bool {
        matches!(self, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
    }
}

/// Cheap-to-clone handle; clones share the same session file.
#[derive(Clone)]
pub struct Logger {
    console: Arc<[Box<dyn LogSink>]>,
    file_state: Arc<Mutex<FileState>>,
    file_enabled: Arc<AtomicBool>,
}

struct FileState {
    sink: Option<Arc<FileSink>>,
    log_path: Option<PathBuf>,
    attempted: bool,
    log_dir: PathBuf,
}

impl Default for FileState {
    fn default() -> Self {
        Self {
            sink: None,
            log_path: None,
            attempted: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        let console: Vec<Box<dyn LogSink>> = vec![Box::new(StdoutSink), Box::new(StderrSink)];
        Self {
            console: console.into(),
            file_state: Arc::new(Mutex::new(FileState::default())),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// The file is created on the first file-targeted line, not before.
    fn file_sink(&self) -> Option<Arc<FileSink>> {
        let mut state = self.file_state.lock().ok()?;
        if state.attempted {
            return state.sink.clone();
        }
        state.attempted = true;

        match FileSink::open_in(&state.log_dir) {
            Ok((sink, path)) => {
                let sink = Arc::new(sink);
                state.log_path = Some(path);
                state.sink = Some(sink.clone());
                Some(sink)
            }
            Err(err) => {
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                None
            }
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target.console() {
            self.console
                .iter()
                .filter(|sink| sink.accepts(level))
                .for_each(|sink| sink.write_line(message));
        }

        if target.file() && self.file_enabled.load(Ordering::SeqCst) {
            if let Some(sink) = self.file_sink() {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
                sink.write_line(&format!("[{timestamp}] {:<5} {message}", level.to_string()));
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Ignored once the session file exists.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut state) = self.file_state.lock() {
            if !state.attempted {
                state.log_dir = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.file_state.lock().ok().and_then(|s| s.log_path.clone())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .field("file_enabled", &self.file_logging_enabled())
            .finish()
    }
}
