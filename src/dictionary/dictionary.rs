use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{info, warn};

// Word and lemma are separated by two or more whitespace characters.
static FIELD_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary unavailable: {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read dictionary at line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Immutable word form -> lemma table.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    lemmas: FxHashMap<String, String>,
    skipped_lines: usize,
}

/// Splits a dictionary line into its (word, lemma) pair, lowercased.
/// Fields after the second are ignored.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let mut fields = FIELD_SEPARATOR.split(line.trim());
    let word = fields.next().filter(|w| !w.is_empty())?;
    let lemma = fields.next().filter(|l| !l.is_empty())?;
    Some((word.to_lowercase(), lemma.to_lowercase()))
}

impl Dictionary {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            words = dictionary.size(),
            skipped = dictionary.skipped_lines,
            "dictionary loaded"
        );
        Ok(dictionary)
    }

    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, DictionaryError> {
        let mut dictionary = Dictionary::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            line_no += 1;
            let bytes_read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| DictionaryError::Io {
                    line: line_no,
                    source,
                })?;
            if bytes_read == 0 {
                break;
            }

            // Undecodable lines are malformed, not fatal.
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    warn!(line = line_no, error = %e, "skipping dictionary line that is not valid UTF-8");
                    dictionary.skipped_lines += 1;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Some((word, lemma)) => {
                    dictionary.lemmas.insert(word, lemma);
                }
                None => {
                    warn!(line = line_no, content = %line.trim_end(), "skipping malformed dictionary line");
                    dictionary.skipped_lines += 1;
                }
            }
        }

        Ok(dictionary)
    }

    pub fn from_entries<I, W, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, L)>,
        W: AsRef<str>,
        L: AsRef<str>,
    {
        let lemmas = entries
            .into_iter()
            .map(|(word, lemma)| (word.as_ref().to_lowercase(), lemma.as_ref().to_lowercase()))
            .collect();
        Self {
            lemmas,
            skipped_lines: 0,
        }
    }

    pub fn lookup_exact(&self, word: &str) -> Option<&str> {
        self.lemmas.get(word).map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lemmas
            .iter()
            .map(|(word, lemma)| (word.as_str(), lemma.as_str()))
    }

    pub fn size(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    /// Number of non-blank lines dropped while loading.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Lemmas of the given words, without duplicates. Unknown words are ignored.
    pub fn lemma_set<'a, I>(&self, words: I) -> HashSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .filter_map(|word| self.lookup_exact(word))
            .map(str::to_string)
            .collect()
    }
}
