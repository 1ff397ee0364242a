//! Variable assignments.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::Var;

/// A mapping from variables to truth values.
///
/// Iteration follows variable order, which is the column order of a truth
/// table and the literal order of a minterm.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Assignment {
    values: BTreeMap<Var, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the `index`-th assignment over `variables`.
    ///
    /// The first variable is the most significant bit, so enumerating
    /// `0..2^n` cycles the first variable slowest and the last one fastest.
    ///
    /// ```
    /// use pdnf_rs::assignment::Assignment;
    /// use pdnf_rs::types::Var;
    ///
    /// let a = Var::new('a').unwrap();
    /// let b = Var::new('b').unwrap();
    /// let assignment = Assignment::from_index(&[a, b], 0b10);
    /// assert_eq!(assignment.get(a), Some(true));
    /// assert_eq!(assignment.get(b), Some(false));
    /// ```
    pub fn from_index(variables: &[Var], index: usize) -> Self {
        let n = variables.len();
        variables
            .iter()
            .enumerate()
            .map(|(j, &var)| (var, (index >> (n - 1 - j)) & 1 == 1))
            .collect()
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.values.get(&var).copied()
    }

    pub fn set(&mut self, var: Var, value: bool) {
        self.values.insert(var, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.values.iter().map(|(&var, &value)| (var, value))
    }

    pub fn variables(&self) -> impl Iterator<Item = Var> + '_ {
        self.values.keys().copied()
    }

    /// Packs the assignment back into its index, the inverse of [`from_index`][Self::from_index].
    pub fn index(&self) -> usize {
        self.values.values().fold(0, |acc, &value| (acc << 1) | value as usize)
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", var, value as u8)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(s: &str) -> Vec<Var> {
        s.chars().map(|c| Var::new(c).unwrap()).collect()
    }

    #[test]
    fn test_from_index_msb_first() {
        let vs = vars("abc");
        let bits = |i| {
            Assignment::from_index(&vs, i)
                .iter()
                .map(|(_, v)| v)
                .collect::<Vec<_>>()
        };
        assert_eq!(bits(0), vec![false, false, false]);
        assert_eq!(bits(1), vec![false, false, true]);
        assert_eq!(bits(4), vec![true, false, false]);
        assert_eq!(bits(7), vec![true, true, true]);
    }

    #[test]
    fn test_index_inverse() {
        let vs = vars("pqrs");
        for i in 0..16 {
            assert_eq!(Assignment::from_index(&vs, i).index(), i);
        }
    }

    #[test]
    fn test_empty() {
        let assignment = Assignment::from_index(&[], 0);
        assert!(assignment.is_empty());
        assert_eq!(assignment.index(), 0);
        assert_eq!(assignment.to_string(), "{}");
    }

    #[test]
    fn test_set_overwrites_and_keeps_order() {
        let mut assignment = Assignment::new();
        assignment.set(Var::new('c').unwrap(), true);
        assignment.set(Var::new('a').unwrap(), false);
        assignment.set(Var::new('c').unwrap(), false);
        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.get(Var::new('c').unwrap()), Some(false));
        assert_eq!(assignment.get(Var::new('b').unwrap()), None);
        assert_eq!(assignment.variables().collect::<Vec<_>>(), vars("ac"));
        assert_eq!(assignment, Assignment::from_index(&vars("ac"), 0));
    }

    #[test]
    fn test_display() {
        let vs = vars("ab");
        assert_eq!(Assignment::from_index(&vs, 2).to_string(), "{a=1, b=0}");
    }
}
