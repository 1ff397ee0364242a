//! Formulas and their compilation pipeline.
//!
//! A [`Formula`] holds the validated source text and lazily computes every
//! artifact derived from it:
//!
//! ```text
//! origin ─preprocess→ processed ─to_postfix→ postfix ─generate→ truth table ─extract→ pdnf
//! ```
//!
//! Each stage is a pure function of the previous artifact (see the
//! [`preprocess`][crate::preprocess], [`postfix`][crate::postfix],
//! [`truth_table`][crate::truth_table] and [`pdnf`][crate::pdnf] modules).
//! The formula only caches their results, so asking twice is cheap and always
//! yields the same value.
//!
//! # Examples
//!
//! ```
//! use pdnf_rs::formula::Formula;
//!
//! let f = Formula::new("a!b + !ab").unwrap();
//! assert_eq!(f.processed().unwrap(), "a*!b+!a*b");
//! assert_eq!(f.postfix().unwrap().to_string(), "ab!*a!b*+");
//! assert_eq!(f.pdnf().unwrap().to_string(), "a!b+!ab");
//!
//! let g = Formula::new("(a + b) !(a b)").unwrap();
//! assert!(f.equivalent(&g).unwrap());
//! assert!(!f.same_origin(&g));
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use once_cell::unsync::OnceCell;

use crate::assignment::Assignment;
use crate::error::{FormulaError, Result};
use crate::eval::evaluate;
use crate::pdnf::Pdnf;
use crate::postfix::{to_postfix, Postfix};
use crate::preprocess::preprocess;
use crate::truth_table::TruthTable;
use crate::types::Var;
use crate::validate::validate;

/// Returns the variables occurring in `origin`, sorted and deduplicated.
pub fn extract_variables(origin: &str) -> Vec<Var> {
    let mut variables: Vec<Var> = origin.chars().filter_map(Var::new).collect();
    variables.sort();
    variables.dedup();
    variables
}

/// A propositional formula together with its (lazily computed) compilation.
#[derive(Debug, Clone)]
pub struct Formula {
    origin: String,
    variables: Vec<Var>,
    processed: OnceCell<String>,
    postfix: OnceCell<Postfix>,
    truth_table: OnceCell<TruthTable>,
    pdnf: OnceCell<Pdnf>,
}

impl Formula {
    /// Creates a formula from its source text.
    ///
    /// Fails with [`FormulaError::IllegalCharacter`] if `origin` contains a
    /// character outside the alphabet, and with [`FormulaError::EmptyFormula`]
    /// if it has no tokens at all. Nothing else is computed yet.
    pub fn new(origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        validate(&origin)?;
        if origin.trim().is_empty() {
            return Err(FormulaError::EmptyFormula);
        }

        let variables = extract_variables(&origin);
        debug!("Formula::new({:?}), variables = {:?}", origin, variables);

        Ok(Self {
            origin,
            variables,
            processed: OnceCell::new(),
            postfix: OnceCell::new(),
            truth_table: OnceCell::new(),
            pdnf: OnceCell::new(),
        })
    }

    /// The source text, exactly as given.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The variables of the formula in alphabetical order.
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// The normalized infix text, see [`preprocess`].
    pub fn processed(&self) -> Result<&str> {
        self.processed
            .get_or_try_init(|| preprocess(&self.origin))
            .map(String::as_str)
    }

    pub fn postfix(&self) -> Result<&Postfix> {
        self.postfix
            .get_or_try_init(|| -> Result<Postfix> { Ok(to_postfix(self.processed()?)) })
    }

    /// The full truth table over [`variables`][Self::variables].
    ///
    /// Fails with [`FormulaError::TooManyVariables`] for more than
    /// [`MAX_VARIABLES`][crate::truth_table::MAX_VARIABLES] variables, and with
    /// [`FormulaError::SyntaxError`] for malformed formulas.
    pub fn truth_table(&self) -> Result<&TruthTable> {
        self.truth_table
            .get_or_try_init(|| -> Result<TruthTable> { TruthTable::generate(&self.variables, self.postfix()?) })
    }

    pub fn pdnf(&self) -> Result<&Pdnf> {
        self.pdnf
            .get_or_try_init(|| -> Result<Pdnf> { Ok(Pdnf::from_truth_table(self.truth_table()?)) })
    }

    /// Evaluates the formula under a single assignment.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool> {
        evaluate(self.postfix()?, assignment)
    }

    /// Returns `true` if the formula is true under every assignment.
    pub fn is_tautology(&self) -> Result<bool> {
        let table = self.truth_table()?;
        Ok(table.count_true() == table.len())
    }

    /// Returns `true` if the formula is false under every assignment.
    pub fn is_contradiction(&self) -> Result<bool> {
        Ok(self.pdnf()?.is_contradiction())
    }

    pub fn is_satisfiable(&self) -> Result<bool> {
        Ok(!self.is_contradiction()?)
    }

    /// Logical equivalence: both formulas have the same set of minterms.
    ///
    /// Variables are compared by name and no padding is done, so formulas
    /// over different sets of variables are never equivalent, even when one
    /// simply ignores a variable the other mentions (`a` vs `a*b+a*!b`).
    pub fn equivalent(&self, other: &Formula) -> Result<bool> {
        Ok(self.pdnf()? == other.pdnf()?)
    }

    /// Syntactic sameness: the source texts are identical.
    pub fn same_origin(&self, other: &Formula) -> bool {
        self.origin == other.origin
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self> {
        Formula::new(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin)
    }
}
