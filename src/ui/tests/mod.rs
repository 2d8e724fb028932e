
use crate::core::models::{Extraction, TaskCandidate};
use crate::core::types::{Category, Urgency};

pub(super) fn task(id: usize, text: &str, category: Category, urgency: Urgency) -> TaskCandidate {
    TaskCandidate {
        id,
        raw_text: text.to_string(),
        category,
        urgency,
        rationale: format!("because {id}"),
        due_cue: None,
    }
}

pub(super) fn sample_extraction() -> Extraction {
    crate::extractor::Extractor::with_defaults()
        .unwrap()
        .extract_and_classify("Extend my visa today, clean the fridge, call mom")
        .unwrap()
}
