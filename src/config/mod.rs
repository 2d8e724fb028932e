pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, CountConfigItem, FileLoggingConfigItem, StartDateConfigItem, WindowConfigItem,
};
use crate::core::settings::PlannerSettings;
use crate::core::types::{DayWindow, Urgency};
use crate::errors::{Error, Result, require_config_item};
use crate::extensions::enums::valid_csv;
use crate::extractor::ExtractorSettings;
use crate::extractor::rules::ClassifierRules;
use crate::scheduler::{SchedulerSettings, UrgencyWindows, check_start_date};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    MaxTasksPerDay,
    UrgentWindow,
    SoonWindow,
    NormalWindow,
    LowWindow,
    MaxInputChars,
    MinSplitChars,
    MinTaskChars,
    PlanStartDate,
    FileLoggingEnabled,
}

impl ConfigKey {
    /// Description used when an optional item is first written.
    pub fn default_description(&self) -> &'static str {
        match self {
            ConfigKey::MaxTasksPerDay => "Maximum number of tasks placed on one day.",
            ConfigKey::UrgentWindow => "Days urgent tasks may be placed on (e.g. 1-2).",
            ConfigKey::SoonWindow => "Days soon tasks may be placed on (e.g. 1-4).",
            ConfigKey::NormalWindow => "Days normal tasks may be placed on (e.g. 2-7).",
            ConfigKey::LowWindow => "Days low-urgency tasks may be placed on (e.g. 1-7).",
            ConfigKey::MaxInputChars => "Longest accepted dump, in characters.",
            ConfigKey::MinSplitChars => "Sentences shorter than this are not split on commas.",
            ConfigKey::MinTaskChars => "Clauses shorter than this are merged into a neighbour.",
            ConfigKey::PlanStartDate => "First day of the plan (YYYY-MM-DD); empty means today.",
            ConfigKey::FileLoggingEnabled => "Enable writing log messages to file.",
        }
    }

    fn window_urgency(&self) -> Option<Urgency> {
        match self {
            ConfigKey::UrgentWindow => Some(Urgency::Urgent),
            ConfigKey::SoonWindow => Some(Urgency::Soon),
            ConfigKey::NormalWindow => Some(Urgency::Normal),
            ConfigKey::LowWindow => Some(Urgency::Low),
            _ => None,
        }
    }
}

/// On-disk layout. Scheduling constants are required at load time; the
/// extractor bounds fall back to built-in defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tasks_per_day: Option<CountConfigItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgent_window: Option<WindowConfigItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soon_window: Option<WindowConfigItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_window: Option<WindowConfigItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_window: Option<WindowConfigItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_input_chars: Option<CountConfigItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_split_chars: Option<CountConfigItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_task_chars: Option<CountConfigItem>,
    #[serde(default)]
    pub plan_start_date: StartDateConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

impl ConfigFile {
    fn count_slot(&mut self, key: ConfigKey) -> Option<&mut Option<CountConfigItem>> {
        match key {
            ConfigKey::MaxTasksPerDay => Some(&mut self.max_tasks_per_day),
            ConfigKey::MaxInputChars => Some(&mut self.max_input_chars),
            ConfigKey::MinSplitChars => Some(&mut self.min_split_chars),
            ConfigKey::MinTaskChars => Some(&mut self.min_task_chars),
            _ => None,
        }
    }

    fn count(&self, key: ConfigKey) -> Option<&CountConfigItem> {
        match key {
            ConfigKey::MaxTasksPerDay => self.max_tasks_per_day.as_ref(),
            ConfigKey::MaxInputChars => self.max_input_chars.as_ref(),
            ConfigKey::MinSplitChars => self.min_split_chars.as_ref(),
            ConfigKey::MinTaskChars => self.min_task_chars.as_ref(),
            _ => None,
        }
    }

    fn window_slot(&mut self, urgency: Urgency) -> &mut Option<WindowConfigItem> {
        match urgency {
            Urgency::Urgent => &mut self.urgent_window,
            Urgency::Soon => &mut self.soon_window,
            Urgency::Normal => &mut self.normal_window,
            Urgency::Low => &mut self.low_window,
        }
    }

    fn window(&self, urgency: Urgency) -> Option<&WindowConfigItem> {
        match urgency {
            Urgency::Urgent => self.urgent_window.as_ref(),
            Urgency::Soon => self.soon_window.as_ref(),
            Urgency::Normal => self.normal_window.as_ref(),
            Urgency::Low => self.low_window.as_ref(),
        }
    }

    /// Parses `new_value` for `key`; nothing changes when it is rejected.
    fn apply(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        if let Some(urgency) = key.window_urgency() {
            let slot = self.window_slot(urgency);
            let mut item = slot.clone().unwrap_or_else(|| {
                WindowConfigItem::new(DayWindow::empty(), key.default_description())
            });
            item.set_value(new_value)?;
            *slot = Some(item);
            return Ok(());
        }
        if let Some(slot) = self.count_slot(key) {
            let mut item = slot
                .clone()
                .unwrap_or_else(|| CountConfigItem::new(0, key.default_description()));
            item.set_value(new_value)?;
            *slot = Some(item);
            return Ok(());
        }
        match key {
            ConfigKey::PlanStartDate => self.plan_start_date.set_value(new_value),
            ConfigKey::FileLoggingEnabled => self.file_logging_enabled.set_value(new_value),
            _ => Err(Error::Configuration(format!("'{key}' cannot be edited."))),
        }
    }

    fn value_string(&self, key: ConfigKey) -> String {
        if let Some(urgency) = key.window_urgency() {
            return self
                .window(urgency)
                .map(|w| w.get_value().to_string())
                .unwrap_or_else(|| "-".to_string());
        }
        match key {
            ConfigKey::PlanStartDate => self
                .plan_start_date
                .get_value()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            ConfigKey::FileLoggingEnabled => self.file_logging_enabled.get_value().to_string(),
            _ => self
                .count(key)
                .map(|c| c.get_value().to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }

    fn description(&self, key: ConfigKey) -> String {
        let stored = if let Some(urgency) = key.window_urgency() {
            self.window(urgency).map(|w| w.description())
        } else {
            match key {
                ConfigKey::PlanStartDate => Some(self.plan_start_date.description()),
                ConfigKey::FileLoggingEnabled => Some(self.file_logging_enabled.description()),
                _ => self.count(key).map(|c| c.description()),
            }
        };
        stored.unwrap_or(key.default_description()).to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<(String, String, String)>,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<&(String, String, String)> {
        self.0.get(index)
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    /// Fails fast: a config that cannot produce valid settings is rejected here.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Configuration(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path).map_err(|e| {
            Error::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let data: ConfigFile = serde_json::from_str(&text).map_err(|e| {
            Error::Configuration(format!("Invalid JSON in '{}': {}", path.display(), e))
        })?;
        let config = Self {
            path,
            data,
            last_change: None,
        };
        config.settings()?;
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_tasks_per_day(&self) -> Result<usize> {
        require_config_item(self.data.max_tasks_per_day.as_ref(), "MAX_TASKS_PER_DAY")
            .map(|item| *item.get_value())
    }

    pub fn window(&self, urgency: Urgency) -> Result<&DayWindow> {
        let item = match urgency {
            Urgency::Urgent => "URGENT_WINDOW",
            Urgency::Soon => "SOON_WINDOW",
            Urgency::Normal => "NORMAL_WINDOW",
            Urgency::Low => "LOW_WINDOW",
        };
        require_config_item(self.data.window(urgency), item).map(|w| w.get_value())
    }

    pub fn plan_start_date(&self) -> Option<NaiveDate> {
        *self.data.plan_start_date.get_value()
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn scheduler_settings(&self) -> Result<SchedulerSettings> {
        Ok(SchedulerSettings {
            max_tasks_per_day: self.max_tasks_per_day()?,
            windows: UrgencyWindows {
                urgent: self.window(Urgency::Urgent)?.clone(),
                soon: self.window(Urgency::Soon)?.clone(),
                normal: self.window(Urgency::Normal)?.clone(),
                low: self.window(Urgency::Low)?.clone(),
            },
        })
    }

    pub fn extractor_settings(&self) -> Result<ExtractorSettings> {
        let defaults = ExtractorSettings::default();
        let count = |key: ConfigKey, fallback: usize| {
            self.data
                .count(key)
                .map(|item| *item.get_value())
                .unwrap_or(fallback)
        };
        let settings = ExtractorSettings {
            max_input_chars: count(ConfigKey::MaxInputChars, defaults.max_input_chars),
            min_split_chars: count(ConfigKey::MinSplitChars, defaults.min_split_chars),
            min_task_chars: count(ConfigKey::MinTaskChars, defaults.min_task_chars),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Everything both pipeline stages need, validated.
    pub fn settings(&self) -> Result<PlannerSettings> {
        check_start_date(self.plan_start_date())?;
        Ok(PlannerSettings {
            extractor: self.extractor_settings()?,
            scheduler: self.scheduler_settings()?,
            rules: ClassifierRules::default(),
            start_date: self.plan_start_date(),
        })
    }

    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    (
                        key.to_string(),
                        self.data.description(key),
                        self.data.value_string(key),
                    )
                })
                .collect(),
        )
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.data.value_string(key);
        self.edit(|cfg| cfg.apply(key, new_value))?;
        // stash for caller to log
        self.last_change = Some((key.to_string(), old, self.data.value_string(key)));
        Ok(())
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Configuration(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str.trim(),
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    /// Validates the edited copy before it replaces the loaded one, then persists it.
    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut draft = self.data.clone();
        f(&mut draft)?;
        let previous = std::mem::replace(&mut self.data, draft);
        if let Err(err) = self.settings() {
            self.data = previous;
            return Err(err);
        }
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::Configuration(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json).map_err(|e| {
            Error::Configuration(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}
