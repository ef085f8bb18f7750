//! The parsed form of one input line.

use wayfarer_foundation::NameKey;

use crate::noun_phrase::NounPhrase;

/// Index of the verb as the player typed it.
pub const SEGMENT_VERB: usize = 0;
/// Index of the matched command's name.
pub const SEGMENT_COMMAND: usize = 1;
/// Index of the remainder of the line after the verb.
pub const SEGMENT_REST: usize = 2;

/// One parsed input line, ready to run.
///
/// Operations are built once per turn and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    /// The raw line.
    pub input: String,
    /// Token texts of the line.
    pub tokens: Vec<String>,
    /// Verb as typed, command name, and the rest of the line.
    pub segments: [String; 3],
    /// The command to run.
    pub command: NameKey,
    /// Leading number of the direct phrase, or 1.
    pub quantity: i64,
    /// True if the player typed the quantity.
    pub explicit_quantity: bool,
    /// Preposition that split the phrases, if any.
    pub preposition: Option<String>,
    /// Object phrase before the preposition, quantity removed.
    pub direct_phrase: NounPhrase,
    /// Object phrase after the preposition.
    pub indirect_phrase: NounPhrase,
    /// Entity the direct phrase resolved to.
    pub direct: Option<NameKey>,
    /// Entity the indirect phrase resolved to.
    pub indirect: Option<NameKey>,
}

impl Operation {
    /// Creates an operation for `command` with nothing after the verb.
    ///
    /// Used by tests and by code that runs a command directly.
    #[must_use]
    pub fn bare(command: &str) -> Self {
        let key = NameKey::new(command);
        Self {
            input: command.to_string(),
            tokens: vec![key.as_str().to_string()],
            segments: [
                key.as_str().to_string(),
                key.as_str().to_string(),
                String::new(),
            ],
            command: key,
            quantity: 1,
            explicit_quantity: false,
            preposition: None,
            direct_phrase: NounPhrase::default(),
            indirect_phrase: NounPhrase::default(),
            direct: None,
            indirect: None,
        }
    }

    /// Returns a segment, empty when out of range.
    #[must_use]
    pub fn segment(&self, index: usize) -> &str {
        self.segments.get(index).map_or("", String::as_str)
    }

    /// The verb as typed.
    #[must_use]
    pub fn verb(&self) -> &str {
        self.segment(SEGMENT_VERB)
    }

    /// The rest of the line after the verb.
    #[must_use]
    pub fn rest(&self) -> &str {
        self.segment(SEGMENT_REST)
    }

    /// Returns true if the player named something after the verb.
    #[must_use]
    pub fn has_object(&self) -> bool {
        !self.direct_phrase.is_empty()
    }
}
