pub mod classifier;
pub mod rules;
mod segmenter;
#[cfg(test)]
mod tests;

use crate::core::models::{Extraction, TaskCandidate};
use crate::errors::{Error, Result};
use crate::extractor::classifier::{Classification, Classifier};
use crate::extractor::rules::ClassifierRules;
use crate::extractor::segmenter::Segmenter;

/// Bounds applied to raw input before and during segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorSettings {
    /// Inputs longer than this (in characters) are rejected.
    pub max_input_chars: usize,
    /// Sentences shorter than this are never split on commas or conjunctions.
    pub min_split_chars: usize,
    /// Clauses shorter than this are merged into a neighbour.
    pub min_task_chars: usize,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            max_input_chars: 10_000,
            min_split_chars: 12,
            min_task_chars: 4,
        }
    }
}

impl ExtractorSettings {
    pub fn validate(&self) -> Result<()> {
        if self.max_input_chars == 0 {
            return Err(Error::configuration(
                "MAX_INPUT_CHARS must be at least 1.",
            ));
        }
        Ok(())
    }
}

/// Raw text → classified task candidates. Pure: the same text always yields the same tasks.
#[derive(Debug, Clone)]
pub struct Extractor {
    settings: ExtractorSettings,
    classifier: Classifier,
}

impl Extractor {
    pub fn new(settings: ExtractorSettings, rules: &ClassifierRules) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            classifier: Classifier::new(rules)?,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(ExtractorSettings::default(), &ClassifierRules::default())
    }

    pub fn settings(&self) -> &ExtractorSettings {
        &self.settings
    }

    /// Empty or whitespace-only text gives an empty extraction, not an error.
    pub fn extract_and_classify(&self, raw_text: &str) -> Result<Extraction> {
        self.check_input(raw_text)?;

        let tasks = self
            .segment(raw_text)
            .into_iter()
            .enumerate()
            .map(|(i, fragment)| self.to_candidate(i + 1, fragment))
            .collect();
        Ok(Extraction::new(tasks))
    }

    /// Byte-level entry point for callers that cannot guarantee UTF-8.
    pub fn extract_from_bytes(&self, raw: &[u8]) -> Result<Extraction> {
        let text = std::str::from_utf8(raw)
            .map_err(|e| Error::invalid_input(format!("Input is not valid UTF-8 text: {e}")))?;
        self.extract_and_classify(text)
    }

    pub fn segment<'a>(&self, raw_text: &'a str) -> Vec<&'a str> {
        Segmenter::new(&self.settings).segment(raw_text)
    }

    pub fn classify(&self, fragment: &str) -> Classification {
        self.classifier.classify(fragment)
    }

    fn to_candidate(&self, id: usize, fragment: &str) -> TaskCandidate {
        let Classification {
            category,
            urgency,
            due_cue,
            rationale,
            ..
        } = self.classify(fragment);
        TaskCandidate {
            id,
            raw_text: fragment.to_string(),
            category,
            urgency,
            rationale,
            due_cue,
        }
    }

    fn check_input(&self, raw_text: &str) -> Result<()> {
        let len = raw_text.chars().count();
        if len > self.settings.max_input_chars {
            return Err(Error::invalid_input(format!(
                "Input is {len} characters long; the limit is {}.",
                self.settings.max_input_chars
            )));
        }
        if let Some(c) = raw_text
            .chars()
            .find(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
        {
            return Err(Error::invalid_input(format!(
                "Input contains a non-text control character (U+{:04X}).",
                c as u32
            )));
        }
        Ok(())
    }
}
