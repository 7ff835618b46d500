//! Binary relation classification.
//!
//! A [`Relation`] is a finite set of ordered pairs over a universe of
//! elements. [`Relation::analyze`] classifies it along three independent
//! partitions (reflexivity, symmetry, transitivity), each contributing
//! exactly one label, plus a standalone antisymmetry flag.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

/// A single classified property of a relation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PropertyLabel {
    Reflexive,
    Antireflexive,
    Nonreflexive,
    Symmetric,
    Asymmetric,
    Nonsymmetric,
    Antisymmetric,
    Transitive,
    Antitransitive,
    Nontransitive,
}

impl fmt::Display for PropertyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyLabel::Reflexive => "reflexive",
            PropertyLabel::Antireflexive => "antireflexive",
            PropertyLabel::Nonreflexive => "nonreflexive",
            PropertyLabel::Symmetric => "symmetric",
            PropertyLabel::Asymmetric => "asymmetric",
            PropertyLabel::Nonsymmetric => "nonsymmetric",
            PropertyLabel::Antisymmetric => "antisymmetric",
            PropertyLabel::Transitive => "transitive",
            PropertyLabel::Antitransitive => "antitransitive",
            PropertyLabel::Nontransitive => "nontransitive",
        };
        write!(f, "{}", s)
    }
}

/// The reflexivity partition: exactly one variant holds for any relation.
///
/// # Invariants
///
/// - `Reflexive`: every universe element `e` has the pair `(e, e)`.
/// - `Antireflexive`: no universe element has its self-pair.
/// - `Nonreflexive`: some but not all self-pairs are present.
///
/// An empty universe satisfies both universal readings vacuously; by
/// convention it is classified `Reflexive`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reflexivity {
    Reflexive,
    Antireflexive,
    Nonreflexive,
}

impl Reflexivity {
    pub fn label(self) -> PropertyLabel {
        match self {
            Reflexivity::Reflexive => PropertyLabel::Reflexive,
            Reflexivity::Antireflexive => PropertyLabel::Antireflexive,
            Reflexivity::Nonreflexive => PropertyLabel::Nonreflexive,
        }
    }
}

/// The symmetry partition: exactly one variant holds for any relation.
///
/// `Asymmetric` requires that no pair's reverse is present. A self-pair
/// `(e, e)` is its own reverse, so any relation containing one cannot be
/// asymmetric. An empty relation is classified `Symmetric` (vacuous).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Symmetry {
    Symmetric,
    Asymmetric,
    Nonsymmetric,
}

impl Symmetry {
    pub fn label(self) -> PropertyLabel {
        match self {
            Symmetry::Symmetric => PropertyLabel::Symmetric,
            Symmetry::Asymmetric => PropertyLabel::Asymmetric,
            Symmetry::Nonsymmetric => PropertyLabel::Nonsymmetric,
        }
    }
}

/// The transitivity partition: exactly one variant holds for any relation.
///
/// A relation with no chains `(a, b), (b, c)` at all is classified
/// `Transitive` (vacuous).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Transitivity {
    Transitive,
    Antitransitive,
    Nontransitive,
}

impl Transitivity {
    pub fn label(self) -> PropertyLabel {
        match self {
            Transitivity::Transitive => PropertyLabel::Transitive,
            Transitivity::Antitransitive => PropertyLabel::Antitransitive,
            Transitivity::Nontransitive => PropertyLabel::Nontransitive,
        }
    }
}

/// The full classification of a relation.
///
/// One value per partition, plus the non-exclusive antisymmetry flag.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Properties {
    pub reflexivity: Reflexivity,
    pub symmetry: Symmetry,
    pub transitivity: Transitivity,
    pub antisymmetric: bool,
}

impl Properties {
    /// Flattens the classification into an ordered label list:
    /// reflexivity, symmetry, optional antisymmetric, transitivity.
    pub fn labels(&self) -> Vec<PropertyLabel> {
        let mut labels = vec![self.reflexivity.label(), self.symmetry.label()];
        if self.antisymmetric {
            labels.push(PropertyLabel::Antisymmetric);
        }
        labels.push(self.transitivity.label());
        labels
    }
}

/// A finite binary relation over a universe of labeled elements.
///
/// Pairs have set semantics (duplicates collapse). The universe always
/// contains every element mentioned by a pair: the constructor unions the
/// supplied universe with the pair elements, so an empty supplied universe
/// is simply inferred from the relation.
///
/// All iteration is in lexicographic element order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Relation {
    universe: BTreeSet<String>,
    pairs: BTreeSet<(String, String)>,
}

impl Relation {
    pub fn new<U, P, S, T>(universe: U, pairs: P) -> Self
    where
        U: IntoIterator<Item = S>,
        S: Into<String>,
        P: IntoIterator<Item = (T, T)>,
        T: Into<String>,
    {
        let mut universe: BTreeSet<String> = universe.into_iter().map(Into::into).collect();
        let pairs: BTreeSet<(String, String)> = pairs
            .into_iter()
            .map(|(a, b)| (a.into(), b.into()))
            .collect();
        for (a, b) in &pairs {
            universe.insert(a.clone());
            universe.insert(b.clone());
        }
        Self { universe, pairs }
    }

    pub fn universe(&self) -> &BTreeSet<String> {
        &self.universe
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(a, b)| (a.as_str(), b.as_str()))
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&(a.to_string(), b.to_string()))
    }

    /// Classifies the relation along all three partitions.
    ///
    /// The transitivity check is the O(|relation|²) pairwise chain scan;
    /// relations are UI-scale, so no closure precomputation is done.
    ///
    /// # Examples
    ///
    /// ```
    /// use discrete_rs::relation::{PropertyLabel, Relation};
    ///
    /// let identity = Relation::new(["a", "b", "c"], [("a", "a"), ("b", "b"), ("c", "c")]);
    /// let labels = identity.analyze().labels();
    /// assert_eq!(
    ///     labels,
    ///     vec![
    ///         PropertyLabel::Reflexive,
    ///         PropertyLabel::Symmetric,
    ///         PropertyLabel::Antisymmetric,
    ///         PropertyLabel::Transitive,
    ///     ]
    /// );
    /// ```
    pub fn analyze(&self) -> Properties {
        debug!(
            "analyze(universe = {} elements, relation = {} pairs)",
            self.universe.len(),
            self.pairs.len()
        );
        Properties {
            reflexivity: self.check_reflexivity(),
            symmetry: self.check_symmetry(),
            transitivity: self.check_transitivity(),
            antisymmetric: self.check_antisymmetric(),
        }
    }

    fn check_reflexivity(&self) -> Reflexivity {
        let mut all_present = true;
        let mut none_present = true;
        for e in &self.universe {
            if self.contains(e, e) {
                none_present = false;
            } else {
                all_present = false;
            }
        }
        // Empty universe leaves both flags set; Reflexive wins by convention.
        match (all_present, none_present) {
            (true, _) => Reflexivity::Reflexive,
            (_, true) => Reflexivity::Antireflexive,
            _ => Reflexivity::Nonreflexive,
        }
    }

    fn check_symmetry(&self) -> Symmetry {
        let mut all_reversed = true;
        let mut none_reversed = true;
        for (a, b) in &self.pairs {
            if self.contains(b, a) {
                none_reversed = false;
            } else {
                all_reversed = false;
            }
        }
        match (all_reversed, none_reversed) {
            (true, _) => Symmetry::Symmetric,
            (_, true) => Symmetry::Asymmetric,
            _ => Symmetry::Nonsymmetric,
        }
    }

    fn check_antisymmetric(&self) -> bool {
        self.pairs
            .iter()
            .all(|(a, b)| a == b || !self.contains(b, a))
    }

    fn check_transitivity(&self) -> Transitivity {
        let mut all_closed = true;
        let mut none_closed = true;
        for (a, b) in &self.pairs {
            for (b2, c) in &self.pairs {
                if b == b2 {
                    if self.contains(a, c) {
                        none_closed = false;
                    } else {
                        all_closed = false;
                    }
                }
            }
        }
        match (all_closed, none_closed) {
            (true, _) => Transitivity::Transitive,
            (_, true) => Transitivity::Antitransitive,
            _ => Transitivity::Nontransitive,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_identity_relation() {
        let r = Relation::new(["a", "b", "c"], [("a", "a"), ("b", "b"), ("c", "c")]);
        let props = r.analyze();
        assert_eq!(props.reflexivity, Reflexivity::Reflexive);
        assert_eq!(props.symmetry, Symmetry::Symmetric);
        assert_eq!(props.transitivity, Transitivity::Transitive);
        assert!(props.antisymmetric);
    }

    #[test]
    fn test_empty_universe_is_reflexive() {
        let r = Relation::new(Vec::<String>::new(), Vec::<(String, String)>::new());
        let props = r.analyze();
        assert_eq!(props.reflexivity, Reflexivity::Reflexive);
        assert_eq!(props.symmetry, Symmetry::Symmetric);
        assert_eq!(props.transitivity, Transitivity::Transitive);
        assert!(props.antisymmetric);
    }

    #[test]
    fn test_empty_relation_over_nonempty_universe() {
        let r = Relation::new(["a", "b"], Vec::<(String, String)>::new());
        let props = r.analyze();
        assert_eq!(props.reflexivity, Reflexivity::Antireflexive);
        assert_eq!(props.symmetry, Symmetry::Symmetric);
        assert_eq!(props.transitivity, Transitivity::Transitive);
    }

    #[test]
    fn test_universe_extended_by_pairs() {
        let r = Relation::new(["a"], [("b", "c")]);
        assert_eq!(
            r.universe().iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_strict_order_is_asymmetric() {
        // a < b < c on {a, b, c}
        let r = Relation::new(
            ["a", "b", "c"],
            [("a", "b"), ("b", "c"), ("a", "c")],
        );
        let props = r.analyze();
        assert_eq!(props.reflexivity, Reflexivity::Antireflexive);
        assert_eq!(props.symmetry, Symmetry::Asymmetric);
        assert_eq!(props.transitivity, Transitivity::Transitive);
        assert!(props.antisymmetric);
    }

    #[test]
    fn test_self_pair_blocks_asymmetric() {
        // (a, a) is its own reverse, so asymmetry is out even though no
        // distinct pair has its reverse present.
        let r = Relation::new(["a", "b"], [("a", "a"), ("a", "b")]);
        let props = r.analyze();
        assert_eq!(props.symmetry, Symmetry::Nonsymmetric);
        assert!(props.antisymmetric);
    }

    #[test]
    fn test_two_cycle_is_not_antisymmetric() {
        let r = Relation::new(["a", "b"], [("a", "b"), ("b", "a")]);
        let props = r.analyze();
        assert_eq!(props.symmetry, Symmetry::Symmetric);
        assert!(!props.antisymmetric);
        // a->b->a needs (a, a); absent, and no chain is closed
        assert_eq!(props.transitivity, Transitivity::Antitransitive);
    }

    #[test]
    fn test_nonreflexive_nontransitive() {
        let r = Relation::new(
            ["a", "b", "c"],
            [("a", "a"), ("a", "b"), ("b", "c"), ("a", "c")],
        );
        let props = r.analyze();
        assert_eq!(props.reflexivity, Reflexivity::Nonreflexive);
        // every chain here is closed
        assert_eq!(props.transitivity, Transitivity::Transitive);

        let r = Relation::new(["a", "b", "c", "d"], [("a", "b"), ("b", "c"), ("a", "c"), ("c", "d")]);
        assert_eq!(r.analyze().transitivity, Transitivity::Nontransitive);
    }

    #[test]
    fn test_labels_order_and_grouping() {
        let r = Relation::new(["a", "b"], [("a", "b"), ("b", "a"), ("a", "a")]);
        let labels = r.analyze().labels();
        assert_eq!(labels[0], PropertyLabel::Nonreflexive);
        assert_eq!(labels[1], PropertyLabel::Symmetric);
        assert_eq!(*labels.last().unwrap(), PropertyLabel::Nontransitive);
        assert!(!labels.contains(&PropertyLabel::Antisymmetric));
    }

    #[test]
    fn test_partitions_are_exhaustive_on_random_relations() {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(20240927);
        let elements: Vec<String> = (0..10).map(|i| format!("e{}", i)).collect();

        for _ in 0..200 {
            let n = rng.gen_range(0..=10);
            let universe = elements[..n].to_vec();
            let mut pairs = Vec::new();
            for a in &universe {
                for b in &universe {
                    if rng.gen_bool(0.3) {
                        pairs.push((a.clone(), b.clone()));
                    }
                }
            }
            let labels = Relation::new(universe, pairs).analyze().labels();

            let reflexivity = [
                PropertyLabel::Reflexive,
                PropertyLabel::Antireflexive,
                PropertyLabel::Nonreflexive,
            ];
            let symmetry = [
                PropertyLabel::Symmetric,
                PropertyLabel::Asymmetric,
                PropertyLabel::Nonsymmetric,
            ];
            let transitivity = [
                PropertyLabel::Transitive,
                PropertyLabel::Antitransitive,
                PropertyLabel::Nontransitive,
            ];
            for group in [&reflexivity, &symmetry, &transitivity] {
                let count = labels.iter().filter(|l| group.contains(l)).count();
                assert_eq!(count, 1, "labels = {:?}", labels);
            }
        }
    }
}
