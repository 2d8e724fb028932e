use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::DashSeparated;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Number of day-slots in every weekly plan.
pub const DAYS_IN_PLAN: usize = 7;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Finance,
    Immigration,
    Chores,
    Career,
    Health,
    Social,
    Other,
}

impl Category {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::InvalidInput(format!(
                "Unknown category: '{}'. Valid categories: {}",
                s.trim(),
                valid_csv::<Category>()
            ))
        })
    }
}

/// Time-sensitivity tier. Declaration order is descending urgency, so the derived
/// `Ord` sorts the most time-critical tier first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Urgent,
    Soon,
    Normal,
    Low,
}

impl Urgency {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::InvalidInput(format!(
                "Unknown urgency: '{}'. Valid urgencies: {}",
                s.trim(),
                valid_csv::<Urgency>()
            ))
        })
    }
}

/// The subset of plan days (1-based) a tier may be placed on.
///
/// Kept sorted and free of duplicates. An empty window is legal: tasks of that tier
/// always fall through to the whole-week fallback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayWindow {
    days: Vec<usize>,
}

impl DayWindow {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every day of the plan.
    pub fn whole_week() -> Self {
        Self {
            days: (1..=DAYS_IN_PLAN).collect(),
        }
    }

    pub fn range(first: usize, last: usize) -> Result<Self> {
        if first > last {
            return Err(Error::Configuration(format!(
                "Invalid day window {first}-{last}: start is after end."
            )));
        }
        Self::from_days(first..=last)
    }

    pub fn from_days<I: IntoIterator<Item = usize>>(days: I) -> Result<Self> {
        let mut out = Vec::new();
        for day in days {
            if !(1..=DAYS_IN_PLAN).contains(&day) {
                return Err(Error::Configuration(format!(
                    "Day window references day {day}, which is outside 1-{DAYS_IN_PLAN}."
                )));
            }
            out.push(day);
        }
        out.sort_unstable();
        out.dedup();
        Ok(Self { days: out })
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        if input.is_empty() {
            return Err(Error::Configuration(Self::error_message(s)));
        }
        if input.eq_ignore_ascii_case("none") {
            return Ok(Self::empty());
        }

        let mut days = Vec::new();
        for token in input.split(',').map(str::trim) {
            match token.split_once('-') {
                Some((a, b)) => {
                    let first = Self::parse_day(a, s)?;
                    let last = Self::parse_day(b, s)?;
                    days.extend(Self::range(first, last)?.days);
                }
                None => days.push(Self::parse_day(token, s)?),
            }
        }
        Self::from_days(days)
    }

    fn parse_day(token: &str, input: &str) -> Result<usize> {
        token
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::Configuration(Self::error_message(input)))
    }

    pub fn usage() -> String {
        format!(
            "Supported formats: 1-2, 2,4,6, 3, none (days are numbered 1-{DAYS_IN_PLAN})"
        )
    }

    fn error_message(input: &str) -> String {
        format!("Invalid day window: '{}'. {}", input.trim(), Self::usage())
    }

    pub fn days(&self) -> &[usize] {
        &self.days
    }

    pub fn contains(&self, day: usize) -> bool {
        self.days.binary_search(&day).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl fmt::Display for DayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, last) = match (self.days.first(), self.days.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return write!(f, "none"),
        };
        if first == last {
            return write!(f, "{first}");
        }
        if last - first + 1 == self.days.len() {
            return write!(f, "{first}-{last}");
        }
        let parts = self
            .days
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{parts}")
    }
}

impl Serialize for DayWindow {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DayWindow {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DayWindow, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        DayWindow::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr)]
pub enum DateFormat {
    #[strum(to_string = "%Y-%m-%d")]
    YmdDash,
    #[strum(to_string = "%m-%d-%Y")]
    MdYDash,
}

impl Date {
    pub fn usage() -> String {
        "Supported formats: YYYY-MM-DD, YYYY/MM/DD, MM-DD-YYYY, MM/DD/YYYY".to_string()
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let normalized = input.dash_separated();
        DateFormat::iter()
            .find_map(|f| NaiveDate::parse_from_str(&normalized, f.as_ref()).ok())
            .map(Date)
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "Invalid date format: '{}'. {}",
                    input.trim(),
                    Self::usage()
                ))
            })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Configuration(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
