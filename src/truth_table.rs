//! Truth table enumeration.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::Result;
use crate::expr::Expr;

/// One truth-table row: the variable assignment plus the evaluated result.
///
/// `values[j]` is the value of the `j`-th variable in the table's
/// (code-point-ordered) variable order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub values: Vec<bool>,
    pub result: bool,
}

/// The full enumeration of a boolean expression over its variables.
///
/// For `n` distinct variables the table has exactly `2^n` rows, in row-index
/// order `0..2^n`. Bit `j` of the row index (least-significant bit first)
/// is the value of variable `j`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    expression: String,
    variables: Vec<char>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Parses `expression` and enumerates its truth table.
    ///
    /// # Examples
    ///
    /// ```
    /// use discrete_rs::truth_table::TruthTable;
    ///
    /// let table = TruthTable::build("a AND NOT b").unwrap();
    /// assert_eq!(table.variables(), &['a', 'b']);
    /// assert_eq!(table.rows().len(), 4);
    /// // row 1: a = true, b = false
    /// assert!(table.rows()[1].result);
    /// ```
    pub fn build(expression: &str) -> Result<Self> {
        debug!("build({:?})", expression);
        let expr = Expr::parse(expression)?;
        let variables = expr.variables();
        let n = variables.len();

        let mut rows = Vec::with_capacity(1usize << n);
        for i in 0..(1usize << n) {
            let values: Vec<bool> = (0..n).map(|j| (i >> j) & 1 == 1).collect();
            let assignment: HashMap<char, bool> =
                variables.iter().copied().zip(values.iter().copied()).collect();
            let result = expr.eval(&assignment)?;
            rows.push(Row { values, result });
        }

        Ok(Self {
            expression: expression.to_string(),
            variables,
            rows,
        })
    }

    /// The source expression, verbatim.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Variable names in column order.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.variables {
            write!(f, "{} ", v)?;
        }
        writeln!(f, "| {}", self.expression)?;
        for row in &self.rows {
            for value in &row.values {
                write!(f, "{} ", u8::from(*value))?;
            }
            writeln!(f, "| {}", u8::from(row.result))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_a_and_not_b() {
        let table = TruthTable::build("a AND NOT b").unwrap();
        assert_eq!(table.variables(), &['a', 'b']);
        assert_eq!(table.rows().len(), 4);

        // bit 0 = a, bit 1 = b
        let expected = [
            (vec![false, false], false),
            (vec![true, false], true),
            (vec![false, true], false),
            (vec![true, true], false),
        ];
        for (row, (values, result)) in table.rows().iter().zip(&expected) {
            assert_eq!(&row.values, values);
            assert_eq!(row.result, *result);
        }
    }

    #[test]
    fn test_row_count_and_width() {
        for (expression, n) in [
            ("a", 1),
            ("a OR b", 2),
            ("(a ^ b) AND (c OR d)", 4),
            ("a AND b OR c AND d XOR e", 5),
        ] {
            let table = TruthTable::build(expression).unwrap();
            assert_eq!(table.rows().len(), 1 << n);
            for row in table.rows() {
                assert_eq!(row.values.len(), n);
            }
            assert_eq!(table.variables().len(), n);
        }
    }

    #[test]
    fn test_variable_order_is_lexicographic() {
        let table = TruthTable::build("d OR b OR c OR a").unwrap();
        assert_eq!(table.variables(), &['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_xor_table() {
        let table = TruthTable::build("a ⊕ b").unwrap();
        let results: Vec<bool> = table.rows().iter().map(|r| r.result).collect();
        assert_eq!(results, vec![false, true, true, false]);
    }

    #[test]
    fn test_build_rejects_malformed_expression() {
        assert!(matches!(
            TruthTable::build("a AND OR b"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(TruthTable::build(""), Err(Error::Parse(_))));
    }

    #[test]
    fn test_display_renders_header_and_rows() {
        let table = TruthTable::build("a AND b").unwrap();
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "a b | a AND b");
        assert_eq!(lines[1], "0 0 | 0");
        assert_eq!(lines[4], "1 1 | 1");
    }
}
