//! Fixed-length coding.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::debug;

use crate::alphabet::Alphabet;
use crate::coding::Codec;
use crate::error::{Error, Result};

/// A fixed-length binary code over the distinct characters of a sample.
///
/// Symbols are sorted by code point and assigned zero-padded binary indices
/// of length `ceil(log2(n))`, clamped to at least one bit so a singleton
/// alphabet still produces decodable output. Construction from the same
/// sample always yields the same table.
#[derive(Debug, Clone)]
pub struct FixedLengthCode {
    alphabet: Alphabet,
    decode_table: HashMap<String, char>,
    code_length: usize,
}

fn code_length_for(symbols: usize) -> usize {
    debug_assert!(symbols > 0);
    let mut length = 1;
    while (1usize << length) < symbols {
        length += 1;
    }
    length
}

impl FixedLengthCode {
    /// Learns the alphabet from `sample`.
    ///
    /// # Examples
    ///
    /// ```
    /// use discrete_rs::coding::fixed::FixedLengthCode;
    /// use discrete_rs::coding::Codec;
    ///
    /// let code = FixedLengthCode::from_sample("aabbbcccc").unwrap();
    /// assert_eq!(code.alphabet().code('a'), Some("00"));
    /// assert_eq!(code.encode("abc").unwrap(), "000110");
    /// ```
    pub fn from_sample(sample: &str) -> Result<Self> {
        debug!("from_sample({} chars)", sample.chars().count());
        if sample.is_empty() {
            return Err(Error::InvalidInput("empty sample text".to_string()));
        }

        let symbols: BTreeSet<char> = sample.chars().collect();
        let code_length = code_length_for(symbols.len());

        let codes: BTreeMap<char, String> = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| (symbol, format!("{:0width$b}", i, width = code_length)))
            .collect();
        let alphabet = Alphabet::from_codes(codes);
        let decode_table = alphabet.reverse();

        Ok(Self {
            alphabet,
            decode_table,
            code_length,
        })
    }

    /// Reconstructs a codec from a persisted alphabet, without the sample.
    ///
    /// Decode behavior is identical to the originating codec's.
    pub fn from_alphabet(alphabet: Alphabet) -> Result<Self> {
        alphabet.validate()?;
        if !alphabet.is_uniform_length() {
            return Err(Error::InvalidInput(
                "fixed-length alphabet has codewords of differing lengths".to_string(),
            ));
        }
        let code_length = alphabet
            .iter()
            .map(|(_, code)| code.len())
            .next()
            .unwrap_or(0);
        if code_length == 0 {
            return Err(Error::InvalidInput(
                "fixed-length codewords must be at least one bit".to_string(),
            ));
        }
        let decode_table = alphabet.reverse();
        Ok(Self {
            alphabet,
            decode_table,
            code_length,
        })
    }

    /// The uniform codeword length, in bits.
    pub fn code_length(&self) -> usize {
        self.code_length
    }
}

impl Codec for FixedLengthCode {
    fn encode(&self, text: &str) -> Result<String> {
        let mut bits = String::with_capacity(text.len() * self.code_length);
        for symbol in text.chars() {
            match self.alphabet.code(symbol) {
                Some(code) => bits.push_str(code),
                None => return Err(Error::UnknownSymbol(symbol.to_string())),
            }
        }
        Ok(bits)
    }

    fn decode(&self, bits: &str) -> Result<String> {
        if bits.len() % self.code_length != 0 {
            return Err(Error::Parse(format!(
                "bitstring length {} is not a multiple of the code length {}",
                bits.len(),
                self.code_length
            )));
        }
        if let Some(bad) = bits.chars().find(|c| *c != '0' && *c != '1') {
            return Err(Error::Parse(format!(
                "non-bit character {:?} in bitstring",
                bad
            )));
        }
        let mut text = String::with_capacity(bits.len() / self.code_length);
        let chars: Vec<char> = bits.chars().collect();
        for chunk in chars.chunks(self.code_length) {
            let code: String = chunk.iter().collect();
            match self.decode_table.get(&code) {
                Some(symbol) => text.push(*symbol),
                None => return Err(Error::UnknownSymbol(code)),
            }
        }
        Ok(text)
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn average_code_length(&self) -> f64 {
        self.code_length as f64
    }
}
