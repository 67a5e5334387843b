//! Erlang External Term Format (ETF) codec.
//!
//! Converts [`TermValue`] trees to version-prefixed tagged bytes and back,
//! with two decode strategies behind one wire grammar:
//!
//! - [`EtfDecoder`] materializes a generic value tree;
//! - [`EtfToJsonConverter`] renders JSON text straight into a reusable
//!   buffer, skipping the tree entirely.
//!
//! Compressed envelopes (tag 80) are inflated transparently by either
//! decoder. Every failure is a typed [`EtfError`]; malformed or truncated
//! input never panics and never yields a partial result.
//!
//! ```
//! use etf_pack::{decode, encode, to_json, TermValue};
//!
//! let value = TermValue::Object(vec![
//!     ("id".to_string(), TermValue::Integer(7)),
//!     ("ok".to_string(), TermValue::Bool(true)),
//! ]);
//! let bytes = encode(&value).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), value);
//! assert_eq!(to_json(&bytes).unwrap(), br#"{"id":7,"ok":true}"#);
//! ```

pub mod bigint;
pub mod constants;
mod decoder;
mod encoder;
mod error;
mod inflate;
mod record;
mod term_value;
mod to_json;

pub use decoder::EtfDecoder;
pub use encoder::EtfEncoder;
pub use error::EtfError;
pub use record::ToRecord;
pub use term_value::TermValue;
pub use to_json::{EtfToJsonConverter, MAX_RETAINED_CAPACITY};

/// Encode one term with a fresh encoder.
pub fn encode(value: &TermValue) -> Result<Vec<u8>, EtfError> {
    let mut encoder = EtfEncoder::new();
    encoder.encode(value)
}

/// Decode a payload to a value tree with a fresh decoder.
pub fn decode(input: &[u8]) -> Result<TermValue, EtfError> {
    let mut decoder = EtfDecoder::new();
    decoder.decode(input)
}

/// Decode a payload to JSON text with a fresh converter.
pub fn to_json(input: &[u8]) -> Result<Vec<u8>, EtfError> {
    let mut converter = EtfToJsonConverter::new();
    converter.convert(input)
}

/// Caller-owned codec facade bundling one encoder and both decoders.
///
/// Construct one per thread of use; instances share nothing, so independent
/// instances may run fully in parallel.
pub struct Etf {
    encoder: EtfEncoder,
    decoder: EtfDecoder,
    converter: EtfToJsonConverter,
}

impl Default for Etf {
    fn default() -> Self {
        Self::new()
    }
}

impl Etf {
    pub fn new() -> Self {
        Self {
            encoder: EtfEncoder::new(),
            decoder: EtfDecoder::new(),
            converter: EtfToJsonConverter::new(),
        }
    }

    /// Encodes a term, reusing this instance's output allocation.
    pub fn pack(&mut self, value: &TermValue) -> Result<Vec<u8>, EtfError> {
        self.encoder.encode(value)
    }

    /// Decodes a payload to a value tree.
    pub fn unpack(&mut self, input: &[u8]) -> Result<TermValue, EtfError> {
        self.decoder.decode(input)
    }

    /// Decodes a payload to JSON text, reusing this instance's output buffer.
    pub fn unpack_to_json(&mut self, input: &[u8]) -> Result<Vec<u8>, EtfError> {
        self.converter.convert(input)
    }
}
