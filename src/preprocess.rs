//! Normalization of raw formula text.
//!
//! The preprocessor turns the text a person writes (`a b + !!c(d)`) into an
//! unambiguous infix string (`a*b+c*(d)`) that the postfix converter can
//! consume token by token:
//!
//! - whitespace is dropped;
//! - every `!!` pair cancels (double negation elimination), and cancellation
//!   folds, so `!!!!a` becomes `a` and `!!!a` becomes `!a`;
//! - juxtaposition means conjunction: after a variable or `)`, a following
//!   variable, `(` or `!` gets an explicit `*` in front of it.

use log::debug;

use crate::error::{FormulaError, Result};
use crate::types::Token;
use crate::validate::validate;

/// Returns `true` if `c` ends an operand (a variable or a closing parenthesis).
fn ends_operand(c: char) -> bool {
    c.is_ascii_lowercase() || c == ')'
}

/// Returns `true` if `c` starts an operand (a variable, `(` or a negation).
fn starts_operand(c: char) -> bool {
    c.is_ascii_lowercase() || c == '(' || c == Token::NOT
}

/// Normalizes `origin` into its processed form.
///
/// Fails with [`FormulaError::IllegalCharacter`] on characters outside the
/// alphabet and with [`FormulaError::EmptyFormula`] if nothing but whitespace
/// is left.
pub fn preprocess(origin: &str) -> Result<String> {
    validate(origin)?;

    let chars: Vec<char> = origin.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }

    let mut processed = String::with_capacity(2 * chars.len());
    for (i, &c) in chars.iter().enumerate() {
        processed.push(c);
        if processed.ends_with("!!") {
            processed.truncate(processed.len() - 2);
        }

        // The last character has nothing to its right.
        if let Some(&next) = chars.get(i + 1) {
            if ends_operand(c) && starts_operand(next) {
                processed.push(Token::AND);
            }
        }
    }

    debug!("preprocess({:?}) -> {:?}", origin, processed);
    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_implicit_and() {
        assert_eq!(preprocess("ab").unwrap(), "a*b");
        assert_eq!(preprocess("a(b+c)").unwrap(), "a*(b+c)");
        assert_eq!(preprocess("a!b").unwrap(), "a*!b");
        assert_eq!(preprocess("(a)(b)").unwrap(), "(a)*(b)");
        assert_eq!(preprocess("(a+b)c").unwrap(), "(a+b)*c");
        assert_eq!(preprocess("abc").unwrap(), "a*b*c");
    }

    #[test]
    fn test_no_and_before_operators() {
        assert_eq!(preprocess("a+b").unwrap(), "a+b");
        assert_eq!(preprocess("a*b").unwrap(), "a*b");
        assert_eq!(preprocess("(a)").unwrap(), "(a)");
        assert_eq!(preprocess("!a").unwrap(), "!a");
    }

    #[test]
    fn test_whitespace_dropped() {
        assert_eq!(preprocess(" a + b ").unwrap(), "a+b");
        assert_eq!(preprocess("a b").unwrap(), "a*b");
        assert_eq!(preprocess("a ( b )").unwrap(), "a*(b)");
    }

    #[test]
    fn test_double_negation_collapses() {
        assert_eq!(preprocess("!!a").unwrap(), "a");
        assert_eq!(preprocess("!!!a").unwrap(), "!a");
        assert_eq!(preprocess("!!!!a").unwrap(), preprocess("a").unwrap());
        assert_eq!(preprocess("a!!b").unwrap(), "a*b");
        assert_eq!(preprocess("! ! a").unwrap(), "a");
        assert_eq!(preprocess("!(!!a)").unwrap(), "!(a)");
    }

    #[test]
    fn test_idempotent() {
        for s in ["ab+!c", "a(b+c)!d", "!!!!a", "(a)(b)!!c"] {
            let once = preprocess(s).unwrap();
            let twice = preprocess(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(preprocess(""), Err(FormulaError::EmptyFormula));
        assert_eq!(preprocess("   "), Err(FormulaError::EmptyFormula));
    }

    #[test]
    fn test_illegal() {
        assert!(matches!(
            preprocess("a?b"),
            Err(FormulaError::IllegalCharacter { character: '?', .. })
        ));
    }
}
