//! Shannon-Fano coding.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::alphabet::Alphabet;
use crate::coding::Codec;
use crate::error::{Error, Result};

/// A Shannon-Fano prefix code learned from symbol frequencies.
///
/// Symbols are sorted by probability descending, tie-broken by code point
/// ascending, then recursively split into two halves of roughly equal
/// cumulative probability. The ordering is fully deterministic: the same
/// sample always yields the same alphabet.
///
/// The degenerate single-symbol alphabet gets the empty codeword; it
/// encodes every sample-alphabet text to the empty bitstring, and only the
/// empty bitstring decodes (to the empty text).
#[derive(Debug, Clone)]
pub struct ShannonFanoCode {
    alphabet: Alphabet,
    decode_table: HashMap<String, char>,
    probabilities: BTreeMap<char, f64>,
}

/// Splits `symbols` at the point minimizing the difference between the two
/// halves' cumulative probability, then recurses with the grown prefixes.
fn assign_codes(symbols: &[(char, f64)], prefix: String, codes: &mut BTreeMap<char, String>) {
    if let [(symbol, _)] = symbols {
        codes.insert(*symbol, prefix);
        return;
    }

    let total: f64 = symbols.iter().map(|(_, p)| p).sum();
    let mut best_split = 1;
    let mut best_diff = f64::INFINITY;
    let mut left_sum = 0.0;
    for (i, (_, p)) in symbols.iter().enumerate().take(symbols.len() - 1) {
        left_sum += p;
        // |left - total/2| scaled by 2 to stay in exact sums
        let diff = (2.0 * left_sum - total).abs();
        if diff < best_diff {
            best_diff = diff;
            best_split = i + 1;
        }
    }

    let (left, right) = symbols.split_at(best_split);
    assign_codes(left, format!("{}0", prefix), codes);
    assign_codes(right, format!("{}1", prefix), codes);
}

impl ShannonFanoCode {
    /// Learns the alphabet from the symbol frequencies of `sample`.
    ///
    /// # Examples
    ///
    /// ```
    /// use discrete_rs::coding::shannon_fano::ShannonFanoCode;
    /// use discrete_rs::coding::Codec;
    ///
    /// let code = ShannonFanoCode::from_sample("aabbbcccc").unwrap();
    /// assert_eq!(code.alphabet().code('c'), Some("0"));
    /// assert_eq!(code.encode("abc").unwrap(), "11100");
    /// ```
    pub fn from_sample(sample: &str) -> Result<Self> {
        debug!("from_sample({} chars)", sample.chars().count());
        if sample.is_empty() {
            return Err(Error::InvalidInput("empty sample text".to_string()));
        }

        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        let mut total = 0usize;
        for symbol in sample.chars() {
            *counts.entry(symbol).or_insert(0) += 1;
            total += 1;
        }
        let probabilities: BTreeMap<char, f64> = counts
            .iter()
            .map(|(symbol, count)| (*symbol, *count as f64 / total as f64))
            .collect();

        // Probability descending, code point ascending on ties.
        let mut symbols: Vec<(char, f64)> = probabilities.iter().map(|(s, p)| (*s, *p)).collect();
        symbols.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut codes = BTreeMap::new();
        assign_codes(&symbols, String::new(), &mut codes);
        let alphabet = Alphabet::from_codes(codes);
        debug_assert!(alphabet.is_prefix_free());
        let decode_table = alphabet.reverse();

        Ok(Self {
            alphabet,
            decode_table,
            probabilities,
        })
    }

    /// Reconstructs a codec from a persisted alphabet, without the sample.
    ///
    /// Decode behavior is identical to the originating codec's. Symbol
    /// probabilities are not part of the persisted artifact, so
    /// [`average_code_length`][Codec::average_code_length] falls back to
    /// the unweighted mean codeword length.
    pub fn from_alphabet(alphabet: Alphabet) -> Result<Self> {
        alphabet.validate()?;
        if !alphabet.is_prefix_free() {
            return Err(Error::InvalidInput(
                "alphabet is not prefix-free".to_string(),
            ));
        }
        let decode_table = alphabet.reverse();
        Ok(Self {
            alphabet,
            decode_table,
            probabilities: BTreeMap::new(),
        })
    }

    /// The symbol → probability table learned from the sample, in symbol
    /// order. Empty for a codec reconstructed from an alphabet.
    pub fn probabilities(&self) -> &BTreeMap<char, f64> {
        &self.probabilities
    }
}

impl Codec for ShannonFanoCode {
    fn encode(&self, text: &str) -> Result<String> {
        let mut bits = String::new();
        for symbol in text.chars() {
            match self.alphabet.code(symbol) {
                Some(code) => bits.push_str(code),
                None => return Err(Error::UnknownSymbol(symbol.to_string())),
            }
        }
        Ok(bits)
    }

    fn decode(&self, bits: &str) -> Result<String> {
        let mut text = String::new();
        let mut code = String::new();
        for bit in bits.chars() {
            if bit != '0' && bit != '1' {
                return Err(Error::Parse(format!(
                    "non-bit character {:?} in bitstring",
                    bit
                )));
            }
            code.push(bit);
            // Prefix-freeness makes the first match the only match.
            if let Some(symbol) = self.decode_table.get(&code) {
                text.push(*symbol);
                code.clear();
            }
        }
        if !code.is_empty() {
            return Err(Error::Parse(format!(
                "trailing bits {:?} match no codeword",
                code
            )));
        }
        Ok(text)
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn average_code_length(&self) -> f64 {
        if self.probabilities.is_empty() {
            return self.alphabet.mean_code_length();
        }
        self.probabilities
            .iter()
            .map(|(symbol, p)| {
                let len = self.alphabet.code(*symbol).map_or(0, str::len);
                p * len as f64
            })
            .sum()
    }
}
