use std::{collections::HashSet, sync::Arc};

use thiserror::Error;

use crate::{
    config::config::Config,
    dictionary::dictionary::{Dictionary, DictionaryError},
    matcher::matcher::{LookupOutcome, MatchParams, Matcher},
    query_parser::tokenizer::{LineTokenizer, TokenizationError},
};

#[derive(Debug, Error)]
pub enum LemmatizerError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Tokenization(#[from] TokenizationError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LemmatizedToken {
    pub position: u32,
    pub word: String,
    pub outcome: LookupOutcome,
}

/// How many tokens matched, and the distinct lemmas they were mapped to.
pub fn summarize(tokens: &[LemmatizedToken]) -> (usize, HashSet<&str>) {
    let found = tokens.iter().filter(|t| t.outcome.is_found()).count();
    let lemmas = tokens.iter().flat_map(|t| t.outcome.lemmas()).collect();
    (found, lemmas)
}

/// Tokenizes lines of text and looks every token up in the dictionary.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    tokenizer: LineTokenizer,
    matcher: Matcher,
}

impl Lemmatizer {
    pub fn new(config: &Config) -> Result<Self, LemmatizerError> {
        let dictionary = Dictionary::load(&config.dictionary_path)?;
        Ok(Self::from_dictionary(dictionary, config.match_params()))
    }

    pub fn from_dictionary(dictionary: Dictionary, params: MatchParams) -> Self {
        Self {
            tokenizer: LineTokenizer::new(),
            matcher: Matcher::new(Arc::new(dictionary), params),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.matcher.dictionary()
    }

    pub fn params(&self) -> &MatchParams {
        self.matcher.params()
    }

    pub fn lemmatize_word(&self, word: &str) -> LookupOutcome {
        self.matcher.lookup(word)
    }

    pub fn lemmatize_line(&self, line: &str) -> Result<Vec<LemmatizedToken>, LemmatizerError> {
        let tokens = self.tokenizer.tokenize(line)?;
        Ok(tokens
            .into_iter()
            .map(|token| LemmatizedToken {
                outcome: self.matcher.lookup(&token.word),
                position: token.position,
                word: token.word,
            })
            .collect())
    }
}
