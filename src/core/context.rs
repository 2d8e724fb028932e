use crate::config::Config;
use crate::core::cli::CliOptions;
use crate::core::settings::PlannerSettings;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub settings: PlannerSettings,
    pub logger: Logger,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn from_options(opts: &CliOptions) -> Result<Self> {
        let mut ctx = Self::new_with_paths(opts.config_path.clone(), opts.logs_dir.clone())?;
        for (key, value) in &opts.overrides {
            ctx.set_config(key, value)?;
        }
        Ok(ctx)
    }

    /// Loads and validates the config; any missing or inconsistent constant fails here.
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&config_path)?;
        let settings = config.settings()?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            settings,
            logger,
            config_path,
            logs_dir,
        })
    }

    /// Persists one config edit and refreshes the derived settings.
    pub fn set_config(&mut self, key: &str, value: &str) -> Result<()> {
        self.config.set(key, value)?;
        self.settings = self.config.settings()?;
        self.logger
            .set_file_logging_enabled(self.config.file_logging_enabled());
        if let Some((key, old, new)) = self.config.take_last_change() {
            self.logger.info(
                format!("Config {key} changed from {old} to {new}"),
                LogTarget::FileOnly,
            );
        }
        Ok(())
    }
}
