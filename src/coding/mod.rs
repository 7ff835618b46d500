//! Symbol coding engines.
//!
//! Two schemes behind one contract: a fixed-length code
//! ([`FixedLengthCode`][fixed::FixedLengthCode]) and the Shannon-Fano
//! variable-length prefix code
//! ([`ShannonFanoCode`][shannon_fano::ShannonFanoCode]). Both learn their
//! alphabet from a sample text, or are reconstructed from a previously
//! persisted [`Alphabet`][crate::alphabet::Alphabet] for decode-only use.

pub mod fixed;
pub mod shannon_fano;

use crate::alphabet::Alphabet;
use crate::error::Result;

/// The contract shared by both coding schemes.
///
/// Bitstrings are exchanged as text over `'0'`/`'1'`, matching the
/// representation the transport layer forwards. The alphabet is computed
/// once at construction and immutable thereafter.
pub trait Codec {
    /// Encodes `text` into a bitstring.
    ///
    /// Fails with [`Error::UnknownSymbol`][crate::error::Error::UnknownSymbol]
    /// on a character outside the learned alphabet.
    fn encode(&self, text: &str) -> Result<String>;

    /// Decodes a bitstring back into text.
    ///
    /// Fails with [`Error::Parse`][crate::error::Error::Parse] on a
    /// malformed bitstring and
    /// [`Error::UnknownSymbol`][crate::error::Error::UnknownSymbol] on a
    /// chunk outside the known table.
    fn decode(&self, bits: &str) -> Result<String>;

    /// The symbol → codeword table.
    fn alphabet(&self) -> &Alphabet;

    /// Average codeword length, in bits.
    fn average_code_length(&self) -> f64;
}
