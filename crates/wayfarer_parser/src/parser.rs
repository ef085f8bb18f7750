//! Main parser pipeline.
//!
//! Orchestrates the flow from a raw line to an [`Operation`]:
//!
//! 1. Tokenize
//! 2. Match the verb against the active commands
//! 3. Split the remainder on the first preposition (actions only)
//! 4. Take a leading quantity from the direct phrase
//! 5. Resolve both phrases through the actor's scope

use wayfarer_foundation::NameKey;
use wayfarer_storage::Registry;

use crate::noun_phrase::NounPhrase;
use crate::operation::Operation;
use crate::scope::Scope;
use crate::tokenizer::{InputToken, InputTokenizer};
use crate::vocabulary::VerbTable;

/// Result of parsing one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// The line named an active command
    Parsed(Box<Operation>),
    /// The line was blank
    Empty,
    /// The first word is not an active command
    Unrecognized(String),
}

impl ParseResult {
    /// Returns the operation if parsing succeeded.
    #[must_use]
    pub fn operation(&self) -> Option<&Operation> {
        match self {
            Self::Parsed(op) => Some(op),
            _ => None,
        }
    }

    /// Consumes the result, returning the operation if parsing succeeded.
    #[must_use]
    pub fn into_operation(self) -> Option<Operation> {
        match self {
            Self::Parsed(op) => Some(*op),
            _ => None,
        }
    }
}

/// Parses input lines against a fixed set of active commands.
#[derive(Clone, Debug, Default)]
pub struct OperationParser {
    verbs: VerbTable,
}

impl OperationParser {
    /// Creates a parser over a verb table.
    #[must_use]
    pub fn new(verbs: VerbTable) -> Self {
        Self { verbs }
    }

    /// Creates a parser for the commands named in `active`.
    #[must_use]
    pub fn for_active(registry: &Registry, active: &[NameKey]) -> Self {
        Self::new(VerbTable::from_active(registry, active))
    }

    /// Returns the verb table.
    #[must_use]
    pub fn verbs(&self) -> &VerbTable {
        &self.verbs
    }

    /// Parses a line typed by `actor`.
    ///
    /// Never mutates the registry. Unresolved phrases leave the matching
    /// object empty; commands report those to the player.
    #[must_use]
    pub fn parse(&self, input: &str, registry: &Registry, actor: &NameKey) -> ParseResult {
        // 1. Tokenize
        let tokens = InputTokenizer::tokenize(input);
        if tokens.is_empty() {
            return ParseResult::Empty;
        }

        // 2. Verb
        let Some(verb) = self.verbs.lookup(&tokens) else {
            let word = tokens[0].text().to_string();
            tracing::debug!(%word, "unrecognized verb");
            return ParseResult::Unrecognized(word);
        };
        let (typed, rest) = tokens.split_at(verb.consumed);

        // 3. Prepositions
        let prepositions = registry
            .get_key(&verb.command)
            .and_then(|e| e.as_command())
            .map(|c| c.prepositions().to_vec())
            .unwrap_or_default();
        let split = rest
            .iter()
            .position(|t| prepositions.iter().any(|p| t.is_word(p)));
        let (direct_tokens, preposition, indirect_tokens) = match split {
            Some(i) => (&rest[..i], Some(rest[i].text().to_string()), &rest[i + 1..]),
            None => (rest, None, &rest[rest.len()..]),
        };

        // 4. Quantity
        let mut direct_phrase = NounPhrase::from_tokens(direct_tokens);
        let indirect_phrase = NounPhrase::from_tokens(indirect_tokens);
        let explicit = direct_phrase.take_quantity();

        // 5. Objects
        let scope = Scope::for_actor(registry, actor);
        let direct = scope.resolve(registry, &direct_phrase).map(|(k, _)| k);
        let indirect = scope.resolve(registry, &indirect_phrase).map(|(k, _)| k);

        let operation = Operation {
            input: input.to_string(),
            tokens: tokens.iter().map(|t| t.text().to_string()).collect(),
            segments: [
                join(typed),
                verb.command.as_str().to_string(),
                join(rest),
            ],
            command: verb.command,
            quantity: explicit.unwrap_or(1),
            explicit_quantity: explicit.is_some(),
            preposition,
            direct_phrase,
            indirect_phrase,
            direct,
            indirect,
        };
        tracing::debug!(
            command = %operation.command,
            quantity = operation.quantity,
            direct = ?operation.direct,
            indirect = ?operation.indirect,
            "parsed operation"
        );
        ParseResult::Parsed(Box::new(operation))
    }
}

fn join(tokens: &[InputToken]) -> String {
    tokens
        .iter()
        .map(InputToken::text)
        .collect::<Vec<_>>()
        .join(" ")
}
