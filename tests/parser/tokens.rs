//! Integration tests for the tokenizer.

use proptest::prelude::*;
use wayfarer_parser::{InputToken, InputTokenizer};

#[test]
fn lowercases_and_strips_punctuation() {
    assert_eq!(
        InputTokenizer::words("Take the LAMP, please!"),
        ["take", "the", "lamp", "please"]
    );
}

#[test]
fn keeps_apostrophes_and_lone_punctuation() {
    assert_eq!(InputTokenizer::words("ask miller's son"), ["ask", "miller's", "son"]);
    assert_eq!(InputTokenizer::words("?"), ["?"]);
}

#[test]
fn quoted_text_is_one_token() {
    let tokens = InputTokenizer::tokenize(r#"say "Open Sesame" twice"#);
    assert_eq!(
        tokens,
        [
            InputToken::Word("say".into()),
            InputToken::Quoted("Open Sesame".into()),
            InputToken::Word("twice".into()),
        ]
    );
    assert!(!tokens[1].is_word("open sesame"));
}

#[test]
fn unterminated_quote_runs_to_end() {
    let tokens = InputTokenizer::tokenize(r#"say "hello there"#);
    assert_eq!(tokens[1], InputToken::Quoted("hello there".into()));
}

#[test]
fn blank_input_has_no_tokens() {
    assert!(InputTokenizer::tokenize("").is_empty());
    assert!(InputTokenizer::tokenize(" \t ").is_empty());
}

proptest! {
    #[test]
    fn words_never_contain_whitespace(input in "[ a-zA-Z0-9.,!?]{0,40}") {
        for word in InputTokenizer::words(&input) {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.chars().any(char::is_whitespace));
            prop_assert_eq!(word.to_lowercase(), word);
        }
    }
}
