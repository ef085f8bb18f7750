//! Input tokenization.
//!
//! Converts a raw input line into words and quoted strings.

use wayfarer_foundation::SENTENCE_PUNCTUATION;

/// A token from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A lowercase word with sentence punctuation removed
    Word(String),
    /// A quoted string (preserved as typed)
    Quoted(String),
}

impl InputToken {
    /// Returns the token text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Word(s) | Self::Quoted(s) => s,
        }
    }

    /// Returns true for a plain word equal to `word`.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Self::Word(w) if w == word)
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string.
    ///
    /// - Converts words to lowercase
    /// - Strips sentence punctuation, unless the word is nothing but
    ///   punctuation (so `?` survives as a hotkey)
    /// - Keeps apostrophes (`guard's`)
    /// - Preserves double-quoted strings as single tokens; an unterminated
    ///   quote runs to the end of the line
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let mut tokens = Vec::new();
        let mut chars = input.chars();
        let mut current = String::new();

        while let Some(ch) = chars.next() {
            if ch == '"' {
                flush(&mut current, &mut tokens);
                let quoted: String = chars.by_ref().take_while(|&c| c != '"').collect();
                tokens.push(InputToken::Quoted(quoted));
            } else if ch.is_whitespace() {
                flush(&mut current, &mut tokens);
            } else {
                current.push(ch);
            }
        }
        flush(&mut current, &mut tokens);

        tokens
    }

    /// Tokenizes and returns only the token texts.
    #[must_use]
    pub fn words(input: &str) -> Vec<String> {
        Self::tokenize(input)
            .into_iter()
            .map(|t| t.text().to_string())
            .collect()
    }
}

fn flush(current: &mut String, tokens: &mut Vec<InputToken>) {
    if current.is_empty() {
        return;
    }
    let stripped: String = current
        .chars()
        .filter(|c| !SENTENCE_PUNCTUATION.contains(c))
        .collect();
    let word = if stripped.is_empty() {
        current.clone()
    } else {
        stripped
    };
    tokens.push(InputToken::Word(word.to_lowercase()));
    current.clear();
}
