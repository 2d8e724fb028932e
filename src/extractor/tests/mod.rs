
use crate::extractor::{Extractor, ExtractorSettings};
use crate::extractor::rules::ClassifierRules;

pub(super) fn extractor() -> Extractor {
    Extractor::with_defaults().unwrap()
}

pub(super) fn extractor_with(settings: ExtractorSettings) -> Extractor {
    Extractor::new(settings, &ClassifierRules::default()).unwrap()
}
