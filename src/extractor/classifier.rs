use crate::core::types::{Category, Urgency};
use crate::errors::Result;
use crate::extractor::rules::{ClassifierRules, RuleMatch, RuleTable};

pub const NO_CUE: &str = "no explicit urgency cue detected";
const NO_KEYWORD: &str = "no category keyword matched";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub urgency: Urgency,
    pub keyword: Option<String>,
    pub due_cue: Option<String>,
    pub rationale: String,
}

/// Rule-table classifier. Category and urgency are decided independently,
/// each by the first rule in its table that matches.
#[derive(Debug, Clone)]
pub struct Classifier {
    categories: RuleTable<Category>,
    cues: RuleTable<Urgency>,
}

impl Classifier {
    pub fn new(rules: &ClassifierRules) -> Result<Self> {
        Ok(Self {
            categories: rules.compile_categories()?,
            cues: rules.compile_cues()?,
        })
    }

    pub fn classify(&self, fragment: &str) -> Classification {
        let category_hit = self.categories.first_match(fragment);
        let cue_hit = self.cues.first_match(fragment);

        let rationale = Self::rationale(&category_hit, &cue_hit);
        let (category, keyword) = match category_hit {
            Some(RuleMatch { label, term }) => (label, Some(term)),
            None => (Category::Other, None),
        };
        let (urgency, due_cue) = match cue_hit {
            Some(RuleMatch { label, term }) => (label, Some(term)),
            None => (Urgency::Normal, None),
        };

        Classification {
            category,
            urgency,
            keyword,
            due_cue,
            rationale,
        }
    }

    fn rationale(
        category: &Option<RuleMatch<Category>>,
        cue: &Option<RuleMatch<Urgency>>,
    ) -> String {
        let category_part = match category {
            Some(hit) => format!("Category {} (keyword '{}')", hit.label, hit.term),
            None => format!("Category {} ({NO_KEYWORD})", Category::Other),
        };
        let urgency_part = match cue {
            Some(hit) => format!("urgency {} (cue '{}')", hit.label, hit.term),
            None => format!("urgency {} ({NO_CUE})", Urgency::Normal),
        };
        format!("{category_part}; {urgency_part}.")
    }
}
