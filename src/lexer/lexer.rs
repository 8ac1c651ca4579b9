use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{delimiter_label, is_keyword, operator_label, Category, Token};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap();
}

/// Tokenizes `input` in a single left-to-right pass.
///
/// Runs of characters that are neither whitespace nor ASCII punctuation
/// accumulate into a word; whitespace flushes the word and is discarded;
/// punctuation flushes the word and then resolves as a two-character
/// operator, a one-character operator, a delimiter, or an `Unknown` token,
/// in that order. Never fails: every character of the input lands in
/// exactly one token unless it is whitespace.
pub fn analyze(input: &str) -> Vec<Token> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens: Vec<Token> = vec![];
    let mut word = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];

        if ch.is_whitespace() {
            flush_word(&mut word, &mut tokens);
            pos += 1;
        } else if ch.is_ascii_punctuation() {
            flush_word(&mut word, &mut tokens);

            // Compound operators resolve first so `==` never splits into
            // two `=` tokens.
            if pos + 1 < chars.len() {
                let compound: String = [ch, chars[pos + 1]].iter().collect();
                if let Some(label) = operator_label(&compound) {
                    tokens.push(Token::operator(compound, label));
                    pos += 2;
                    continue;
                }
            }

            let single = ch.to_string();
            if let Some(label) = operator_label(&single) {
                tokens.push(Token::operator(single, label));
            } else if let Some(label) = delimiter_label(ch) {
                tokens.push(Token::delimiter(ch, label));
            } else {
                tokens.push(Token::unknown(single));
            }
            pos += 1;
        } else {
            word.push(ch);
            pos += 1;
        }
    }

    flush_word(&mut word, &mut tokens);

    tokens
}

fn flush_word(word: &mut String, tokens: &mut Vec<Token>) {
    if !word.is_empty() {
        tokens.push(classify_word(word));
        word.clear();
    }
}

/// Classifies a flushed word, in strict priority order: keyword, then
/// number, then identifier, then unknown. The keyword check must come
/// before the identifier check since every keyword also has identifier
/// shape.
pub fn classify_word(word: &str) -> Token {
    if is_keyword(word) {
        Token::word(String::from(word), Category::Keyword)
    } else if NUMBER_PATTERN.is_match(word) {
        Token::word(String::from(word), Category::Number)
    } else if is_identifier(word) {
        Token::word(String::from(word), Category::Identifier)
    } else {
        Token::unknown(String::from(word))
    }
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }

    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
