use crate::core::types::{Bool, Date, DayWindow};
use crate::errors::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

/// A non-negative whole number (caps, character limits).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountConfigItem {
    pub value: usize,
    pub description: String,
}

impl CountConfigItem {
    pub fn new(value: usize, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

impl ConfigItem<usize> for CountConfigItem {
    fn get_value(&self) -> &usize {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = new_value.trim().parse::<usize>().map_err(|_| {
            Error::Configuration(format!(
                "Invalid count: '{}'. Expected a whole number of 0 or more.",
                new_value.trim()
            ))
        })?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// Days of the plan an urgency tier may use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfigItem {
    pub value: DayWindow,
    pub description: String,
}

impl WindowConfigItem {
    pub fn new(value: DayWindow, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

impl ConfigItem<DayWindow> for WindowConfigItem {
    fn get_value(&self) -> &DayWindow {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = DayWindow::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartDateConfigItem {
    pub value: Option<NaiveDate>,
    pub description: String,
}

impl Default for StartDateConfigItem {
    fn default() -> Self {
        Self {
            value: None,
            description: "First day of the plan (YYYY-MM-DD); empty means today.".into(),
        }
    }
}

impl ConfigItem<Option<NaiveDate>> for StartDateConfigItem {
    fn get_value(&self) -> &Option<NaiveDate> {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        if new_value.trim().is_empty() {
            self.value = None;
            return Ok(());
        }
        let parsed = Date::try_from_str(new_value)?;
        self.value = Some(parsed.0);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
