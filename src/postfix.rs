//! Infix to postfix conversion.
//!
//! This is an operator-precedence (shunting-yard) parser driven by two
//! priority tables, see [`Token::in_stack_priority`] and
//! [`Token::incoming_priority`]:
//!
//! ```text
//! token   in-stack  incoming
//!   +        3         2
//!   *        5         4
//!   !        6         7
//!   (        1        10
//!   )       10         1
//! ```
//!
//! An operator arriving from the input pops every stacked operator whose
//! in-stack priority is at least its own incoming priority. Hence `!` binds
//! tighter than `*`, which binds tighter than `+`; binary operators are
//! left-associative and `!` is right-associative.
//!
//! A `(` on the stack is a barrier: nothing pops it by comparison. It is only
//! discarded when the matching `)` arrives, and `)` itself is never pushed.

use std::fmt;

use log::debug;

use crate::types::Token;

/// A formula in postfix (reverse Polish) order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    pub fn new(tokens: Vec<Token>) -> Self {
        Postfix(tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.0 {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl FromIterator<Token> for Postfix {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Postfix(iter.into_iter().collect())
    }
}

/// Converts a processed infix string into postfix order.
///
/// The input is expected to come from [`preprocess`][crate::preprocess::preprocess],
/// i.e. to contain no whitespace and no implicit conjunctions. Characters
/// that are not tokens are skipped.
///
/// Unbalanced parentheses are not reported here: an unmatched `(` is flushed
/// to the output at the end, and an unmatched `)` is passed straight to the
/// output. Both make [`evaluate`][crate::eval::evaluate] fail.
pub fn to_postfix(processed: &str) -> Postfix {
    let mut stack: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(processed.len());

    for token in processed.chars().filter_map(Token::from_char) {
        if token.is_var() {
            output.push(token);
            continue;
        }

        while let Some(&top) = stack.last() {
            if top == Token::LParen || token.incoming_priority() > top.in_stack_priority() {
                break;
            }
            output.push(top);
            stack.pop();
        }

        if token == Token::RParen {
            if stack.last() == Some(&Token::LParen) {
                stack.pop();
            } else {
                output.push(token);
            }
        } else {
            stack.push(token);
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top);
    }

    let postfix = Postfix(output);
    debug!("to_postfix({:?}) -> {}", processed, postfix);
    postfix
}
