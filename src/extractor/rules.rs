use crate::core::types::{Category, Urgency};
use crate::errors::{Error, Result};
use regex::Regex;

/// Keywords that file a fragment under one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordGroup {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// Due-phrases that put a fragment into one urgency tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueGroup {
    pub urgency: Urgency,
    pub phrases: Vec<String>,
}

/// Ordered keyword and cue tables. Order is precedence: the first group that matches wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierRules {
    pub categories: Vec<KeywordGroup>,
    pub cues: Vec<CueGroup>,
    /// Tier assigned when the text carries an explicit numeric date.
    pub date_urgency: Urgency,
}

fn group(category: Category, keywords: &[&str]) -> KeywordGroup {
    KeywordGroup {
        category,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn cues(urgency: Urgency, phrases: &[&str]) -> CueGroup {
    CueGroup {
        urgency,
        phrases: phrases.iter().map(|p| p.to_string()).collect(),
    }
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            categories: vec![
                group(
                    Category::Finance,
                    &[
                        "rent", "bill", "pay", "invoice", "tax", "insurance", "bank", "loan",
                        "credit", "refund",
                    ],
                ),
                group(
                    Category::Immigration,
                    &[
                        "visa", "passport", "permit", "residence", "registration", "embassy",
                        "consulate", "citizenship",
                    ],
                ),
                group(
                    Category::Chores,
                    &[
                        "clean", "laundry", "groceries", "dish", "fridge", "kitchen", "vacuum",
                        "trash", "garbage", "repair",
                    ],
                ),
                group(
                    Category::Career,
                    &[
                        "cv", "resume", "job", "interview", "linkedin", "presentation", "slides",
                        "deadline", "manager", "project",
                    ],
                ),
                group(
                    Category::Health,
                    &[
                        "doctor", "gym", "medication", "dentist", "therapy", "hospital",
                        "clinic", "workout", "physio",
                    ],
                ),
                group(
                    Category::Social,
                    &[
                        "call", "visit", "birthday", "mom", "dad", "parents", "family", "friend",
                        "dinner", "partner",
                    ],
                ),
            ],
            cues: vec![
                cues(
                    Urgency::Urgent,
                    &["today", "tonight", "tomorrow", "asap", "urgent", "now"],
                ),
                cues(Urgency::Soon, &["this week", "this weekend", "soon"]),
                cues(
                    Urgency::Low,
                    &[
                        "next week",
                        "next weekend",
                        "next month",
                        "someday",
                        "eventually",
                    ],
                ),
            ],
            date_urgency: Urgency::Low,
        }
    }
}

/// One compiled `(predicate, label)` pair. `terms[i]` is the configured word
/// behind capture group `i + 1` of `pattern`.
#[derive(Debug, Clone)]
pub struct Rule<L> {
    pattern: Regex,
    terms: Vec<String>,
    label: L,
}

impl<L: Copy> Rule<L> {
    fn find(&self, text: &str) -> Option<RuleMatch<L>> {
        let caps = self.pattern.captures(text)?;
        let term = caps
            .iter()
            .skip(1)
            .position(|group| group.is_some())
            .and_then(|i| self.terms.get(i).cloned())
            .or_else(|| caps.get(0).map(|m| m.as_str().to_lowercase()))?;
        Some(RuleMatch {
            label: self.label,
            term,
        })
    }
}

/// A hit: the label plus the rule term that triggered it. Keyword hits report the
/// configured keyword ("bill" for "Bills"); date hits report the date as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<L> {
    pub label: L,
    pub term: String,
}

/// Rules evaluated in fixed sequence; first match wins.
#[derive(Debug, Clone)]
pub struct RuleTable<L> {
    rules: Vec<Rule<L>>,
}

impl<L: Copy> RuleTable<L> {
    pub fn first_match(&self, text: &str) -> Option<RuleMatch<L>> {
        self.rules.iter().find_map(|rule| rule.find(text))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Common English inflections accepted after a category keyword ("bills", "cleaning", "payment").
const INFLECTIONS: &str = r"(?:s|es|d|ed|ing|er|ers|ment|ments)?";

/// Builds `\b(?:(a)|(b c)|...)\b`, one group per word. With `inflected`, keywords also match
/// their common inflections; cue phrases must match as whole word sequences.
fn alternation(words: &[String], inflected: bool, what: &str) -> Result<(Regex, Vec<String>)> {
    let mut parts = Vec::with_capacity(words.len());
    let mut terms = Vec::with_capacity(words.len());
    for word in words {
        let tokens: Vec<_> = word.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(Error::Configuration(format!("Empty keyword in {what} rules.")));
        }
        let escaped: Vec<_> = tokens.iter().map(|t| regex::escape(t)).collect();
        parts.push(format!("({})", escaped.join(r"\s+")));
        terms.push(tokens.join(" ").to_lowercase());
    }
    if parts.is_empty() {
        return Err(Error::Configuration(format!("No keywords given for {what}.")));
    }
    let suffix = if inflected { INFLECTIONS } else { "" };
    let source = format!(r"(?i)\b(?:{}){}\b", parts.join("|"), suffix);
    let pattern = Regex::new(&source)
        .map_err(|e| Error::Configuration(format!("Invalid {what} rule pattern: {e}")))?;
    Ok((pattern, terms))
}

/// `dd.mm`, `dd/mm`, `dd-mm` with an optional year, or ISO `yyyy-mm-dd`.
const DATE_PATTERN: &str = r"\b(?:\d{4}-\d{1,2}-\d{1,2}|\d{1,2}[./-]\d{1,2}(?:[./-]\d{2,4})?)\b";

impl ClassifierRules {
    pub fn compile_categories(&self) -> Result<RuleTable<Category>> {
        let rules = self
            .categories
            .iter()
            .map(|g| {
                alternation(&g.keywords, true, g.category.as_ref()).map(|(pattern, terms)| Rule {
                    pattern,
                    terms,
                    label: g.category,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleTable { rules })
    }

    pub fn compile_cues(&self) -> Result<RuleTable<Urgency>> {
        let mut rules = self
            .cues
            .iter()
            .map(|g| {
                alternation(&g.phrases, false, g.urgency.as_ref()).map(|(pattern, terms)| Rule {
                    pattern,
                    terms,
                    label: g.urgency,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let date = Regex::new(DATE_PATTERN)
            .map_err(|e| Error::Configuration(format!("Invalid date cue pattern: {e}")))?;
        rules.push(Rule {
            pattern: date,
            terms: Vec::new(),
            label: self.date_urgency,
        });
        Ok(RuleTable { rules })
    }
}
