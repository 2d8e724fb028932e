use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error set for the extraction and scheduling pipeline.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Caller input -------------------------------------------------------
    /// Raw text is not usable text, is too large, or a task payload is malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---- Config -------------------------------------------------------------
    /// Scheduling constants are missing or inconsistent, or the config file is unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Specific missing config item.
    #[error("Missing configuration item: {item}")]
    ConfigItemMissing { item: &'static str },

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (stdin, config writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::ConfigItemMissing>` with a static key.
pub fn require_config_item<T>(opt: Option<T>, item: &'static str) -> Result<T> {
    opt.ok_or(Error::ConfigItemMissing { item })
}
