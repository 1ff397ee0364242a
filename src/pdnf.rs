//! Principal Disjunctive Normal Form.
//!
//! The PDNF of a formula is the disjunction of one minterm per satisfying
//! assignment. A minterm mentions every variable exactly once, negated when
//! the variable is false in that assignment, so the PDNF is canonical: two
//! formulas over the same variables have the same PDNF iff they have the same
//! truth function.
//!
//! Minterms are listed with the all-true assignment first, e.g. exclusive-or
//! over `[a, b]` is `a!b+!ab`.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::assignment::Assignment;
use crate::truth_table::TruthTable;
use crate::types::Token;

/// The text standing in for the PDNF of a formula that is never true.
pub const CONTRADICTION: &str = "Contradictory Formula";

/// A conjunction of literals, one per variable, in variable order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Minterm(String);

impl Minterm {
    pub fn from_assignment(assignment: &Assignment) -> Self {
        let mut literals = String::with_capacity(2 * assignment.len());
        for (var, value) in assignment.iter() {
            if !value {
                literals.push(Token::NOT);
            }
            literals.push(var.name());
        }
        Minterm(literals)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Literal strings over the same variables sort like their assignment index,
// since '!' sorts before every letter. Reversed, so the all-true minterm
// comes first.
impl Ord for Minterm {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for Minterm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Minterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of minterms of a formula.
///
/// Equality is set equality of minterms, i.e. equality of truth functions
/// over the same (by name) variables.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Pdnf {
    minterms: BTreeSet<Minterm>,
}

impl Pdnf {
    /// Collects one minterm per true row of `table`.
    pub fn from_truth_table(table: &TruthTable) -> Self {
        let pdnf: Pdnf = table
            .true_rows()
            .map(|row| Minterm::from_assignment(&row.assignment))
            .collect();
        debug!("pdnf: {} minterms out of {} rows", pdnf.len(), table.len());
        pdnf
    }

    pub fn minterms(&self) -> impl Iterator<Item = &Minterm> + '_ {
        self.minterms.iter()
    }

    pub fn contains(&self, minterm: &Minterm) -> bool {
        self.minterms.contains(minterm)
    }

    pub fn len(&self) -> usize {
        self.minterms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minterms.is_empty()
    }

    /// Returns `true` if there are no minterms, i.e. the formula is never true.
    pub fn is_contradiction(&self) -> bool {
        self.is_empty()
    }
}

impl FromIterator<Minterm> for Pdnf {
    fn from_iter<I: IntoIterator<Item = Minterm>>(iter: I) -> Self {
        Self {
            minterms: iter.into_iter().collect(),
        }
    }
}

/// Renders the minterms joined by `+`, or [`CONTRADICTION`] if there are none.
impl fmt::Display for Pdnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_contradiction() {
            return write!(f, "{}", CONTRADICTION);
        }
        for (i, minterm) in self.minterms.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", Token::OR)?;
            }
            write!(f, "{}", minterm)?;
        }
        Ok(())
    }
}
