//! Frequency-ranked job description keywords and their presence in a resume

use crate::processing::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Words never considered keywords.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "from", "have", "will", "your", "our",
];

/// Keywords must be longer than this.
const MIN_KEYWORD_LEN: usize = 3;
pub const MAX_RANKED_KEYWORDS: usize = 20;
pub const MAX_KEYWORDS_PER_SIDE: usize = 15;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Token counts of the job description, excluding stop words and short tokens.
///
/// Entries are returned in first-seen order.
pub fn keyword_frequencies(job_description: &str) -> Vec<(String, usize)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokenize(job_description) {
        if token.len() <= MIN_KEYWORD_LEN || STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        match index.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts
}

/// Top job description keywords by frequency.
///
/// Ties keep first-seen order: the sort is stable over a first-seen table.
pub fn rank_keywords(job_description: &str) -> Vec<String> {
    let mut counts = keyword_frequencies(job_description);
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_RANKED_KEYWORDS)
        .map(|(word, _)| word)
        .collect()
}

/// Split the ranked job keywords by whether the raw resume text contains them.
pub fn match_keywords(resume: &str, job_description: &str) -> KeywordMatch {
    let resume_lower = resume.to_lowercase();

    let (matched, missing): (Vec<String>, Vec<String>) = rank_keywords(job_description)
        .into_iter()
        .partition(|keyword| resume_lower.contains(keyword.as_str()));

    KeywordMatch {
        matched: matched.into_iter().take(MAX_KEYWORDS_PER_SIDE).collect(),
        missing: missing.into_iter().take(MAX_KEYWORDS_PER_SIDE).collect(),
    }
}
