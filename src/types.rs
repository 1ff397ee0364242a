//! Type-safe wrappers for formula variables and tokens.
//!
//! Formulas are written over single lowercase letters, so a variable is just
//! a letter. Wrapping it in [`Var`] keeps letters that name variables apart
//! from the operator characters they share a string with.
use std::fmt;

/// A propositional variable, named by a single lowercase ASCII letter.
///
/// # Invariants
///
/// - The wrapped byte is always in `b'a'..=b'z'`
/// - Ordering is alphabetical, which fixes the column order of truth tables
///   and the literal order inside minterms
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u8);

impl Var {
    /// Creates a variable from its letter.
    ///
    /// Returns `None` if `c` is not a lowercase ASCII letter.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Var(c as u8))
        } else {
            None
        }
    }

    /// Returns the letter naming this variable.
    pub fn name(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.name()
    }
}

/// A single lexical unit of a formula.
///
/// Every token is exactly one character of the source text.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Var(Var),
    /// Conjunction, `*`.
    And,
    /// Disjunction, `+`.
    Or,
    /// Negation, `!`.
    Not,
    LParen,
    RParen,
}

impl Token {
    pub const AND: char = '*';
    pub const OR: char = '+';
    pub const NOT: char = '!';

    /// Classifies a single character, or returns `None` if it is not a token
    /// (whitespace and anything outside the alphabet).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::AND => Some(Token::And),
            Self::OR => Some(Token::Or),
            Self::NOT => Some(Token::Not),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => Var::new(c).map(Token::Var),
        }
    }

    /// Returns the source character of this token.
    pub fn symbol(self) -> char {
        match self {
            Token::Var(v) => v.name(),
            Token::And => Self::AND,
            Token::Or => Self::OR,
            Token::Not => Self::NOT,
            Token::LParen => '(',
            Token::RParen => ')',
        }
    }

    pub fn is_var(self) -> bool {
        matches!(self, Token::Var(_))
    }

    /// Priority of this token while it sits on the operator stack.
    ///
    /// Variables never reach the operator stack.
    pub fn in_stack_priority(self) -> u8 {
        match self {
            Token::Or => 3,
            Token::And => 5,
            Token::Not => 6,
            Token::LParen => 1,
            Token::RParen => 10,
            Token::Var(_) => 0,
        }
    }

    /// Priority of this token while it arrives from the input.
    pub fn incoming_priority(self) -> u8 {
        match self {
            Token::Or => 2,
            Token::And => 4,
            Token::Not => 7,
            Token::LParen => 10,
            Token::RParen => 1,
            Token::Var(_) => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
