//! Truth tables of formulas.
//!
//! A truth table over n variables lists all 2ⁿ assignments together with the
//! value of the formula under each of them. Rows are ordered by the
//! assignment index (see [`Assignment::from_index`]): the first variable
//! changes slowest, the last one fastest.
//!
//! # Example
//!
//! For `a*b` over variables `[a, b]`:
//!
//! ```text
//!      a     b     Truth Value
//! ----------------------------------
//!  False False     False
//!  False  True     False
//!   True False     False
//!   True  True     True
//! ```

use std::fmt;
use std::fmt::Write;

use log::debug;

use crate::assignment::Assignment;
use crate::error::{FormulaError, Result};
use crate::eval::evaluate;
use crate::postfix::Postfix;
use crate::types::Var;

/// The largest number of distinct variables a truth table may range over.
pub const MAX_VARIABLES: usize = 10;

/// Width of a variable column in the rendered table.
const COLUMN_WIDTH: usize = 6;

/// Configuration for rendering a truth table as text.
///
/// # Examples
///
/// ```
/// use pdnf_rs::truth_table::TableConfig;
///
/// // Show at most 4 rows, then an ellipsis line.
/// let config = TableConfig { fold: true, fold_line: 4 };
/// // Show every row.
/// let full = TableConfig { fold: false, ..Default::default() };
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TableConfig {
    /// Whether long tables are cut short (default: true)
    pub fold: bool,
    /// Number of rows shown before folding (default: 10)
    pub fold_line: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            fold: true,
            fold_line: 10,
        }
    }
}

/// One row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub assignment: Assignment,
    pub value: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<Var>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Evaluates `postfix` under every assignment of `variables`.
    ///
    /// `variables` must be sorted and free of duplicates; their order is the
    /// column order of the table.
    ///
    /// Fails with [`FormulaError::TooManyVariables`] before enumerating anything
    /// if there are more than [`MAX_VARIABLES`] variables, and with the first
    /// evaluation error otherwise.
    pub fn generate(variables: &[Var], postfix: &Postfix) -> Result<Self> {
        let n = variables.len();
        if n > MAX_VARIABLES {
            return Err(FormulaError::TooManyVariables {
                count: n,
                max: MAX_VARIABLES,
            });
        }

        let rows = (0..1usize << n)
            .map(|index| {
                let assignment = Assignment::from_index(variables, index);
                let value = evaluate(postfix, &assignment)?;
                Ok(Row { assignment, value })
            })
            .collect::<Result<Vec<_>>>()?;

        let table = Self {
            variables: variables.to_vec(),
            rows,
        };
        debug!(
            "truth table for {}: {} rows, {} true",
            postfix,
            table.len(),
            table.count_true()
        );
        Ok(table)
    }

    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, always `2^variables().len()`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A truth table always has at least one row (the empty assignment).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows on which the formula is true.
    pub fn count_true(&self) -> usize {
        self.rows.iter().filter(|row| row.value).count()
    }

    /// Iterates over the rows on which the formula is true.
    pub fn true_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter().filter(|row| row.value)
    }

    /// Renders the table using the default [`TableConfig`].
    pub fn render(&self) -> String {
        self.render_with_config(&TableConfig::default())
    }

    /// Renders the table as fixed-width text.
    ///
    /// Each variable gets a right-aligned column of width 6, followed by the
    /// `Truth Value` column. When folding is enabled and the table is longer
    /// than `config.fold_line`, only the first `fold_line` rows are shown and
    /// an ellipsis line marks the cut.
    pub fn render_with_config(&self, config: &TableConfig) -> String {
        let mut out = String::new();
        self.write_table(&mut out, config).expect("writing to a String never fails");
        out
    }

    fn write_table(&self, out: &mut impl Write, config: &TableConfig) -> fmt::Result {
        let folded = config.fold && config.fold_line < self.rows.len();
        let shown = if folded { config.fold_line } else { self.rows.len() };

        for var in &self.variables {
            write!(out, "{:>width$}", var.to_string(), width = COLUMN_WIDTH)?;
        }
        writeln!(out, "     Truth Value")?;
        writeln!(out, "{}", "-".repeat(COLUMN_WIDTH * (self.variables.len() + 1) + 16))?;

        for row in &self.rows[..shown] {
            for (_, value) in row.assignment.iter() {
                write!(out, "{:>width$}", bool_name(value), width = COLUMN_WIDTH)?;
            }
            writeln!(out, "     {}", bool_name(row.value))?;
        }

        if folded {
            writeln!(out, "......")?;
        }
        Ok(())
    }
}

fn bool_name(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_table(f, &TableConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use test_log::test;

    use crate::postfix::to_postfix;

    fn vars(s: &str) -> Vec<Var> {
        s.chars().map(|c| Var::new(c).unwrap()).collect()
    }

    #[test]
    fn test_row_count_and_distinct() {
        for (names, formula) in [("a", "a"), ("ab", "a*b"), ("abc", "a+b*c"), ("abcde", "a*b+c*d+e")] {
            let table = TruthTable::generate(&vars(names), &to_postfix(formula)).unwrap();
            assert_eq!(table.len(), 1 << names.len());
            let distinct: HashSet<_> = table.rows().iter().map(|r| r.assignment.clone()).collect();
            assert_eq!(distinct.len(), table.len());
        }
    }

    #[test]
    fn test_row_order() {
        let table = TruthTable::generate(&vars("ab"), &to_postfix("a*!b")).unwrap();
        let values: Vec<_> = table
            .rows()
            .iter()
            .map(|r| (r.assignment.iter().map(|(_, v)| v).collect::<Vec<_>>(), r.value))
            .collect();
        assert_eq!(
            values,
            vec![
                (vec![false, false], false),
                (vec![false, true], false),
                (vec![true, false], true),
                (vec![true, true], false),
            ]
        );
        assert_eq!(table.count_true(), 1);
    }

    #[test]
    fn test_max_variables() {
        let ten = vars("abcdefghij");
        let table = TruthTable::generate(&ten, &to_postfix("a+b+c+d+e+f+g+h+i+j")).unwrap();
        assert_eq!(table.len(), 1024);
        assert_eq!(table.count_true(), 1023);
    }

    #[test]
    fn test_too_many_variables() {
        let eleven = vars("abcdefghijk");
        let result = TruthTable::generate(&eleven, &to_postfix("a+b+c+d+e+f+g+h+i+j+k"));
        assert_eq!(result, Err(FormulaError::TooManyVariables { count: 11, max: 10 }));
    }

    #[test]
    fn test_syntax_error_propagates() {
        let result = TruthTable::generate(&vars("a"), &to_postfix("a+"));
        assert!(matches!(result, Err(FormulaError::SyntaxError(_))));
    }

    #[test]
    fn test_render() {
        let table = TruthTable::generate(&vars("ab"), &to_postfix("a*b")).unwrap();
        let expected = concat!(
            "     a     b     Truth Value\n",
            "----------------------------------\n",
            " False False     False\n",
            " False  True     False\n",
            "  True False     False\n",
            "  True  True     True\n",
        );
        assert_eq!(table.render(), expected);
        assert_eq!(table.to_string(), expected);
        assert!(table.render().starts_with("     a"));
    }

    #[test]
    fn test_render_folded() {
        let table = TruthTable::generate(&vars("abc"), &to_postfix("a")).unwrap();
        let config = TableConfig {
            fold: true,
            fold_line: 2,
        };
        let rendered = table.render_with_config(&config);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 2 + 2 + 1);
        assert_eq!(lines[1].len(), 6 * 4 + 16);
        assert_eq!(lines.last(), Some(&"......"));

        let full = table.render_with_config(&TableConfig {
            fold: false,
            ..Default::default()
        });
        assert_eq!(full.lines().count(), 2 + 8);
        assert!(!full.contains("......"));
    }

    #[test]
    fn test_default_fold_is_ten() {
        let table = TruthTable::generate(&vars("abcd"), &to_postfix("a*b*c*d")).unwrap();
        let rendered = table.render();
        assert_eq!(rendered.lines().count(), 2 + 10 + 1);
    }
}
