//! Noun phrase representation.
//!
//! A noun phrase is the run of tokens naming an object, such as `3 gold
//! coins` or `the brass lamp`. A leading integer is a quantity, and a single
//! leading article is ignored when matching names.

use wayfarer_foundation::NameKey;
use wayfarer_storage::Entity;

use crate::tokenizer::InputToken;

const ARTICLES: [&str; 3] = ["the", "a", "an"];

/// A parsed noun phrase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NounPhrase {
    words: Vec<String>,
}

impl NounPhrase {
    /// Creates a phrase from token texts.
    #[must_use]
    pub fn from_tokens(tokens: &[InputToken]) -> Self {
        Self {
            words: tokens.iter().map(|t| t.text().to_string()).collect(),
        }
    }

    /// Creates a phrase from plain text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Removes and returns a leading integer.
    ///
    /// Zero and negative numbers are returned as typed.
    pub fn take_quantity(&mut self) -> Option<i64> {
        let quantity = self.words.first()?.parse::<i64>().ok()?;
        self.words.remove(0);
        Some(quantity)
    }

    /// The phrase as typed, words joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// The phrase without a leading article.
    ///
    /// An article standing alone is kept so that `a` can still name
    /// something.
    #[must_use]
    pub fn bare(&self) -> String {
        match self.words.split_first() {
            Some((first, rest)) if !rest.is_empty() && ARTICLES.contains(&first.as_str()) => {
                rest.join(" ")
            }
            _ => self.text(),
        }
    }

    /// Returns true if the phrase has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if the phrase names `key`, with or without an article.
    #[must_use]
    pub fn names(&self, key: &NameKey) -> bool {
        !self.is_empty() && (key.matches(&self.text()) || key.matches(&self.bare()))
    }

    /// Returns true if the phrase names `entity`.
    #[must_use]
    pub fn names_entity(&self, entity: &Entity) -> bool {
        self.names(entity.key())
    }
}
