use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TokenizationError {
    #[error("nothing to lemmatize: the input is empty")]
    EmptyInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub position: u32,
    pub word: String,
}

pub fn clean_word(word: &str) -> String {
    // First trim, then lowercase (only lowercase what we need)
    let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
    trimmed.to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct LineTokenizer;

impl LineTokenizer {
    pub fn new() -> Self {
        LineTokenizer
    }

    /// Splits a line of free text into lowercased word tokens.
    /// Positions count every whitespace-separated item, kept or not.
    pub fn tokenize(&self, line: &str) -> Result<Vec<Token>, TokenizationError> {
        if line.trim().is_empty() {
            return Err(TokenizationError::EmptyInput);
        }

        let mut tokens = Vec::new();
        for (position, item) in line.split_whitespace().enumerate() {
            let word = clean_word(item);
            if word.is_empty() {
                continue;
            }
            tokens.push(Token {
                position: position as u32,
                word,
            });
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.word.as_str()).collect()
    }

    #[test]
    fn test_clean_word() {
        assert_eq!(clean_word("Mangeons,"), "mangeons");
        assert_eq!(clean_word("«Été»"), "été");
        assert_eq!(clean_word("aujourd'hui"), "aujourd'hui");
        assert_eq!(clean_word("..."), "");
    }

    #[test]
    fn test_multiple_words() {
        let tokenizer = LineTokenizer::new();
        let tokens = tokenizer.tokenize("Nous mangeons des pommes").unwrap();

        assert_eq!(words(&tokens), vec!["nous", "mangeons", "des", "pommes"]);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, i as u32);
        }
    }

    #[test]
    fn test_no_stop_words_are_dropped() {
        let tokenizer = LineTokenizer::new();
        let tokens = tokenizer.tokenize("le la les de").unwrap();
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_extra_whitespace() {
        let tokenizer = LineTokenizer::new();
        let tokens = tokenizer.tokenize("  word1    word2  \n\t  word3  ").unwrap();

        assert_eq!(words(&tokens), vec!["word1", "word2", "word3"]);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_punctuation_only_items_keep_positions() {
        let tokenizer = LineTokenizer::new();
        let tokens = tokenizer.tokenize("mangez , !!! partons").unwrap();

        assert_eq!(words(&tokens), vec!["mangez", "partons"]);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 3);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = LineTokenizer::new();
        assert_eq!(tokenizer.tokenize(""), Err(TokenizationError::EmptyInput));
        assert_eq!(tokenizer.tokenize(" \t\n"), Err(TokenizationError::EmptyInput));
    }

    #[test]
    fn test_unicode_support() {
        let tokenizer = LineTokenizer::new();
        let tokens = tokenizer.tokenize("Café NAÏVE résumé").unwrap();
        assert_eq!(words(&tokens), vec!["café", "naïve", "résumé"]);
    }
}
