use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::ExtractorSettings;

static BULLET_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*+]+|\d{1,2}[.)])\s+").expect("bullet prefix pattern is valid")
});

// `;` always ends a clause; `.`, `!`, `?` only when followed by whitespace or the end,
// so "12.03" and "v1.2" survive.
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r";|[.!?]+(?:\s+|$)").expect("sentence pattern is valid"));

static CONJUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*,\s*|\s+(?:and|then|also|plus|&)\s+").expect("conjunction pattern is valid")
});

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '•' | '·' | '▪')
}

fn clean_edges(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '-' | '*'))
}

fn strip_bullet(line: &str) -> &str {
    match BULLET_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// A bare comma between two digits ("1,000", "3,5") belongs to a number.
fn is_digit_group_comma(s: &str, start: usize, end: usize) -> bool {
    &s[start..end] == ","
        && s[..start].ends_with(|c: char| c.is_ascii_digit())
        && s[end..].starts_with(|c: char| c.is_ascii_digit())
}

fn visible_len(s: &str) -> usize {
    clean_edges(s).chars().count()
}

/// Splits a dump into task fragments, coarsest delimiter first:
/// line breaks and bullets, then sentence ends, then commas and conjunctions.
/// Every fragment is a trimmed substring of the input; list markers and
/// fragments without a single letter are dropped.
pub struct Segmenter<'s> {
    settings: &'s ExtractorSettings,
}

impl<'s> Segmenter<'s> {
    pub fn new(settings: &'s ExtractorSettings) -> Self {
        Self { settings }
    }

    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(is_line_break)
            .map(strip_bullet)
            .flat_map(|line| SENTENCE_END.split(line))
            .map(strip_bullet)
            .flat_map(|sentence| self.split_clauses(sentence))
            .map(clean_edges)
            .filter(|fragment| fragment.chars().any(char::is_alphabetic))
            .collect()
    }

    /// Fallback split on commas and conjunctions. Sentences shorter than
    /// `min_split_chars` stay whole; clauses shorter than `min_task_chars`
    /// are glued back onto a neighbour instead of becoming tasks of their own.
    fn split_clauses<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        let sentence = sentence.trim();
        if sentence.chars().count() < self.settings.min_split_chars {
            return vec![sentence];
        }

        let mut pieces = Vec::new();
        let mut start = 0;
        for m in CONJUNCTION
            .find_iter(sentence)
            .filter(|m| !is_digit_group_comma(sentence, m.start(), m.end()))
        {
            pieces.push((start, m.start()));
            start = m.end();
        }
        pieces.push((start, sentence.len()));

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(pieces.len());
        let mut carry: Option<usize> = None;
        for (piece_start, end) in pieces {
            let begin = carry.take().unwrap_or(piece_start);
            if visible_len(&sentence[begin..end]) >= self.settings.min_task_chars {
                merged.push((begin, end));
                continue;
            }
            match merged.last_mut() {
                Some(prev) => prev.1 = end,
                None => carry = Some(begin),
            }
        }
        if let Some(begin) = carry {
            merged.push((begin, sentence.len()));
        }

        merged.into_iter().map(|(s, e)| &sentence[s..e]).collect()
    }
}
