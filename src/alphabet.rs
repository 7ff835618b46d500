//! The symbol → codeword table shared by both coding engines.
//!
//! The alphabet is the only artifact meant to be serialized and later
//! reloaded for decode-only reconstruction, so it must round-trip exactly
//! through any external representation.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A bijective symbol → codeword mapping over the binary alphabet.
///
/// Iteration is canonical (symbol code-point order). Codewords are strings
/// over `'0'`/`'1'`; the empty codeword is legal only for a singleton
/// alphabet (the degenerate Shannon-Fano case).
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alphabet {
    codes: BTreeMap<char, String>,
}

impl Alphabet {
    /// Builds an alphabet from an external table, validating it.
    ///
    /// Rejects an empty table, codewords with characters outside
    /// `{'0','1'}`, an empty codeword in a non-singleton table, and two
    /// symbols sharing a codeword.
    pub fn new(codes: BTreeMap<char, String>) -> Result<Self> {
        let alphabet = Self { codes };
        alphabet.validate()?;
        Ok(alphabet)
    }

    /// Re-checks the invariants of [`Alphabet::new`].
    ///
    /// Deserialization does not validate, so codec reconstruction calls
    /// this before trusting an external table.
    pub fn validate(&self) -> Result<()> {
        if self.codes.is_empty() {
            return Err(Error::InvalidInput("empty alphabet".to_string()));
        }
        let singleton = self.codes.len() == 1;
        for (symbol, code) in &self.codes {
            if code.is_empty() && !singleton {
                return Err(Error::InvalidInput(format!(
                    "empty codeword for symbol {:?} in a non-singleton alphabet",
                    symbol
                )));
            }
            if let Some(bad) = code.chars().find(|c| *c != '0' && *c != '1') {
                return Err(Error::InvalidInput(format!(
                    "codeword {:?} for symbol {:?} contains non-bit character {:?}",
                    code, symbol, bad
                )));
            }
        }
        let distinct: HashMap<&str, char> =
            self.codes.iter().map(|(s, c)| (c.as_str(), *s)).collect();
        if distinct.len() != self.codes.len() {
            return Err(Error::InvalidInput(
                "two symbols share a codeword".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds an alphabet from codewords already known to be well-formed.
    pub(crate) fn from_codes(codes: BTreeMap<char, String>) -> Self {
        Self { codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The codeword for `symbol`, if the symbol is known.
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Iterates `(symbol, codeword)` in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(s, c)| (*s, c.as_str()))
    }

    /// The codeword → symbol reverse table.
    pub(crate) fn reverse(&self) -> HashMap<String, char> {
        self.codes.iter().map(|(s, c)| (c.clone(), *s)).collect()
    }

    /// True iff all codewords have the same length.
    pub fn is_uniform_length(&self) -> bool {
        let mut lengths = self.codes.values().map(String::len);
        match lengths.next() {
            Some(first) => lengths.all(|len| len == first),
            None => true,
        }
    }

    /// True iff no codeword is a prefix of another codeword.
    ///
    /// Guarantees unambiguous left-to-right decoding.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                if a.starts_with(b) || b.starts_with(a) {
                    return false;
                }
            }
        }
        true
    }

    /// Unweighted mean codeword length, in bits.
    ///
    /// Used as the average code length when symbol probabilities are not
    /// available (a codec reconstructed from a persisted table).
    pub fn mean_code_length(&self) -> f64 {
        if self.codes.is_empty() {
            return 0.0;
        }
        let total: usize = self.codes.values().map(String::len).sum();
        total as f64 / self.codes.len() as f64
    }
}

impl FromIterator<(char, String)> for Alphabet {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}
