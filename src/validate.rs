//! Alphabet check for raw formula text.

use crate::error::{FormulaError, Result};

/// Returns `true` if `c` may appear in a formula.
///
/// The alphabet is the lowercase letters, `+`, `*`, `!`, both parentheses and
/// the space character.
pub fn is_legal_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '+' | '*' | '!' | '(' | ')' | ' ')
}

/// Returns `true` if every character of `input` is in the alphabet.
pub fn is_legal(input: &str) -> bool {
    input.chars().all(is_legal_char)
}

/// Checks `input` against the alphabet, reporting the first offending
/// character and its (character) position.
pub fn validate(input: &str) -> Result<()> {
    match input.chars().enumerate().find(|&(_, c)| !is_legal_char(c)) {
        Some((position, character)) => Err(FormulaError::IllegalCharacter { character, position }),
        None => Ok(()),
    }
}
