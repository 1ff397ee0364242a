//! Error types for formula compilation.

use thiserror::Error;

use crate::types::Var;

/// Everything that can go wrong while compiling a formula.
///
/// Every error is terminal for the formula that raised it.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum FormulaError {
    #[error("illegal character {character:?} at position {position}")]
    IllegalCharacter { character: char, position: usize },

    #[error("formula is empty")]
    EmptyFormula,

    #[error("too many variables: {count} (at most {max} supported)")]
    TooManyVariables { count: usize, max: usize },

    #[error("syntax error: {0}")]
    SyntaxError(String),

    #[error("variable {0} has no assigned value")]
    UnassignedVariable(Var),
}

pub type Result<T> = std::result::Result<T, FormulaError>;
