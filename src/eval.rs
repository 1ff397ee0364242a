//! Postfix evaluation.
//!
//! A postfix sequence is run on a stack of booleans: a variable pushes its
//! value, `!` replaces the top with its negation, and `*` / `+` replace the
//! two topmost values with their conjunction / disjunction. A well-formed
//! formula leaves exactly one value behind.

use log::trace;

use crate::assignment::Assignment;
use crate::error::{FormulaError, Result};
use crate::postfix::Postfix;
use crate::types::Token;

fn pop(stack: &mut Vec<bool>, op: Token) -> Result<bool> {
    stack
        .pop()
        .ok_or_else(|| FormulaError::SyntaxError(format!("missing operand for '{}'", op)))
}

/// Evaluates `postfix` under `assignment`.
pub fn evaluate(postfix: &Postfix, assignment: &Assignment) -> Result<bool> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for token in postfix.iter() {
        match token {
            Token::Var(var) => {
                let value = assignment.get(var).ok_or(FormulaError::UnassignedVariable(var))?;
                stack.push(value);
            }
            Token::Not => {
                let a = pop(&mut stack, token)?;
                stack.push(!a);
            }
            Token::And => {
                let a = pop(&mut stack, token)?;
                let b = pop(&mut stack, token)?;
                stack.push(a && b);
            }
            Token::Or => {
                let a = pop(&mut stack, token)?;
                let b = pop(&mut stack, token)?;
                stack.push(a || b);
            }
            Token::LParen | Token::RParen => {
                return Err(FormulaError::SyntaxError(format!("unbalanced '{}'", token)));
            }
        }
    }

    let result = match stack.as_slice() {
        [value] => *value,
        [] => return Err(FormulaError::SyntaxError("expression has no value".to_string())),
        values => {
            return Err(FormulaError::SyntaxError(format!(
                "{} operands left without an operator",
                values.len()
            )))
        }
    };
    trace!("evaluate({}, {}) -> {}", postfix, assignment, result);
    Ok(result)
}

impl Postfix {
    /// Evaluates this postfix sequence under `assignment`, see [`evaluate`].
    pub fn eval(&self, assignment: &Assignment) -> Result<bool> {
        evaluate(self, assignment)
    }
}
