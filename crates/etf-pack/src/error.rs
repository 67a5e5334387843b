//! ETF codec error type.

use etf_buffers::BufferError;
use thiserror::Error;

/// Error type for ETF encoding and decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EtfError {
    /// The payload is empty or does not start with the format version byte.
    #[error("invalid format")]
    InvalidFormat,
    /// A read ran past the end of the input.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// An unrecognized term tag was encountered.
    #[error("unsupported tag: {0}")]
    UnsupportedTag(u8),
    /// A list was not terminated by the nil tail marker.
    #[error("list tail missing")]
    ListTailMissing,
    /// A map key used a term tag that cannot be stringified.
    #[error("unsupported key tag: {0}")]
    UnsupportedKeyTag(u8),
    /// A big integer declared more than 8 magnitude digits.
    #[error("unable to decode big ints larger than 8 bytes")]
    BigIntTooLarge,
    /// The compressed envelope payload failed to inflate.
    #[error("compressed payload is corrupt")]
    CompressionFailed,
    /// The inflated size disagreed with the declared uncompressed size.
    #[error("compressed payload declared {declared} bytes but inflated to {actual}")]
    CompressionMismatch {
        /// Size announced in the envelope header.
        declared: usize,
        /// Size actually produced by inflation.
        actual: usize,
    },
    /// A collection or byte string is too large for a 32-bit wire count.
    #[error("collection length does not fit a 32-bit count")]
    TooLarge,
}

impl From<BufferError> for EtfError {
    fn from(_: BufferError) -> Self {
        EtfError::UnexpectedEof
    }
}
