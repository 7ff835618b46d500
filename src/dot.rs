//! Relation to DOT (Graphviz) conversion.
//!
//! Renders a [`Relation`][crate::relation::Relation] as a directed graph in
//! DOT format: one node per universe element, one edge per pair. The output
//! is plain text; rendering it to an image is the caller's concern
//! (`dot -Tpng graph.dot -o graph.png`).
//!
//! Node numbering follows the universe's lexicographic order, so the same
//! relation always produces the same text.

use crate::relation::Relation;

impl Relation {
    /// Converts the relation to DOT format.
    ///
    /// # Examples
    ///
    /// ```
    /// use discrete_rs::relation::Relation;
    ///
    /// let r = Relation::new(["a", "b"], [("a", "b")]);
    /// let dot = r.to_dot().unwrap();
    /// assert!(dot.contains("digraph"));
    /// ```
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let mut dot = String::new();
        writeln!(dot, "digraph relation {{")?;
        writeln!(dot, "  label=\"Binary Relation Graph\";")?;
        writeln!(dot, "  labelloc=\"t\";")?;
        writeln!(dot, "  node [color=skyblue, style=filled];")?;
        writeln!(dot, "  edge [color=black];")?;

        let ids: Vec<&str> = self.universe().iter().map(String::as_str).collect();
        let id_of = |element: &str| ids.iter().position(|e| *e == element);

        for (i, element) in ids.iter().enumerate() {
            writeln!(dot, "  n{} [label={:?}];", i, element)?;
        }
        for (a, b) in self.pairs() {
            // Both endpoints are in the universe by the constructor invariant.
            if let (Some(from), Some(to)) = (id_of(a), id_of(b)) {
                writeln!(dot, "  n{} -> n{};", from, to)?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
