use std::{collections::HashSet, fmt, sync::Arc};

use tracing::debug;

use crate::{
    dictionary::dictionary::Dictionary,
    distance::{
        levenshtein::edit_distance,
        prefix::{ProximityParams, prefix_proximity},
    },
};

/// Thresholds for the two approximate tiers
#[derive(Debug, Clone, PartialEq)]
pub struct MatchParams {
    pub proximity: ProximityParams,
    pub min_proximity: f32,       // Lowest prefix proximity accepted (typical: 80)
    pub max_edit_distance: usize, // Highest edit distance accepted (typical: 2)
}

impl Default for MatchParams {
    fn default() -> Self {
        MatchParams {
            proximity: ProximityParams::default(),
            min_proximity: 80.0,
            max_edit_distance: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a, S> {
    pub word: &'a str,
    pub score: S,
}

/// Result of looking a single word up.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Exact(String),
    Prefix(HashSet<String>),
    EditDistance(HashSet<String>),
    NotFound,
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        !matches!(self, LookupOutcome::NotFound)
    }

    /// Every lemma carried by the outcome, empty when nothing matched.
    pub fn lemmas(&self) -> Vec<&str> {
        match self {
            LookupOutcome::Exact(lemma) => vec![lemma.as_str()],
            LookupOutcome::Prefix(lemmas) | LookupOutcome::EditDistance(lemmas) => {
                lemmas.iter().map(String::as_str).collect()
            }
            LookupOutcome::NotFound => Vec::new(),
        }
    }
}

fn sorted(lemmas: &HashSet<String>) -> Vec<&str> {
    let mut lemmas: Vec<&str> = lemmas.iter().map(String::as_str).collect();
    lemmas.sort_unstable();
    lemmas
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Exact(lemma) => write!(f, "{}", lemma),
            LookupOutcome::Prefix(lemmas) => write!(f, "[{}] (prefix)", sorted(lemmas).join(", ")),
            LookupOutcome::EditDistance(lemmas) => {
                write!(f, "[{}] (edit distance)", sorted(lemmas).join(", "))
            }
            LookupOutcome::NotFound => write!(f, "not found"),
        }
    }
}

/// Returns the longest prefix of `ranked` whose scores all qualify.
///
/// The scan stops at the first candidate that fails, so a failing leader
/// yields nothing even if later candidates would qualify.
pub fn leading_candidates<'r, 'a, S, F>(
    ranked: &'r [ScoredCandidate<'a, S>],
    qualifies: F,
) -> &'r [ScoredCandidate<'a, S>]
where
    F: Fn(&S) -> bool,
{
    let len = ranked
        .iter()
        .take_while(|candidate| qualifies(&candidate.score))
        .count();
    &ranked[..len]
}

/// Three-tier lookup: exact, then prefix proximity, then edit distance.
#[derive(Debug, Clone)]
pub struct Matcher {
    dictionary: Arc<Dictionary>,
    params: MatchParams,
}

impl Matcher {
    pub fn new(dictionary: Arc<Dictionary>, params: MatchParams) -> Self {
        Self { dictionary, params }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn params(&self) -> &MatchParams {
        &self.params
    }

    pub fn lookup(&self, word: &str) -> LookupOutcome {
        if let Some(lemma) = self.dictionary.lookup_exact(word) {
            return LookupOutcome::Exact(lemma.to_string());
        }
        if let Some(lemmas) = self.prefix_search(word) {
            return LookupOutcome::Prefix(lemmas);
        }
        if let Some(lemmas) = self.edit_distance_search(word) {
            return LookupOutcome::EditDistance(lemmas);
        }
        LookupOutcome::NotFound
    }

    /// Lemmas of the dictionary words sharing a long enough prefix with `word`.
    pub fn prefix_search(&self, word: &str) -> Option<HashSet<String>> {
        let mut ranked: Vec<ScoredCandidate<f32>> = self
            .dictionary
            .entries()
            .map(|(candidate, _)| ScoredCandidate {
                word: candidate,
                score: prefix_proximity(word, candidate, &self.params.proximity),
            })
            .collect();
        // descending, stable on ties
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let selected = leading_candidates(&ranked, |score| *score >= self.params.min_proximity);
        debug!(word, candidates = selected.len(), "prefix search");
        self.collect_lemmas(selected)
    }

    /// Lemmas of the dictionary words within the maximum edit distance of `word`.
    pub fn edit_distance_search(&self, word: &str) -> Option<HashSet<String>> {
        let mut ranked: Vec<ScoredCandidate<usize>> = self
            .dictionary
            .entries()
            .map(|(candidate, _)| ScoredCandidate {
                word: candidate,
                score: edit_distance(word, candidate),
            })
            .collect();
        ranked.sort_by_key(|candidate| candidate.score);

        let selected = leading_candidates(&ranked, |score| *score <= self.params.max_edit_distance);
        debug!(word, candidates = selected.len(), "edit distance search");
        self.collect_lemmas(selected)
    }

    fn collect_lemmas<S>(&self, selected: &[ScoredCandidate<S>]) -> Option<HashSet<String>> {
        if selected.is_empty() {
            return None;
        }
        Some(
            self.dictionary
                .lemma_set(selected.iter().map(|candidate| candidate.word)),
        )
    }
}
