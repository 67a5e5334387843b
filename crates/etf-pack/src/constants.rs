//! ETF wire-format tag bytes.
//!
//! Every term starts with one of these tags; a complete payload is prefixed
//! with the [`FORMAT_VERSION`] byte.

/// Format version byte required at offset 0 of every payload.
pub const FORMAT_VERSION: u8 = 131;

/// Unsigned integer, 1 payload byte.
pub const SMALL_INTEGER_EXT: u8 = 97;
/// Signed integer, 4 payload bytes (big-endian two's complement).
pub const INTEGER_EXT: u8 = 98;
/// IEEE-754 double, 8 payload bytes (big-endian bit pattern).
pub const NEW_FLOAT_EXT: u8 = 70;
/// Atom with a 2-byte length prefix.
pub const ATOM_EXT: u8 = 100;
/// Atom with a 1-byte length prefix.
pub const SMALL_ATOM_EXT: u8 = 115;
/// Tuple with a 1-byte arity.
pub const SMALL_TUPLE_EXT: u8 = 104;
/// Tuple with a 4-byte arity.
pub const LARGE_TUPLE_EXT: u8 = 105;
/// Empty list; also the mandatory list tail terminator.
pub const NIL_EXT: u8 = 106;
/// Byte string with a 2-byte length prefix (list of small integers).
pub const STRING_EXT: u8 = 107;
/// Proper list: 4-byte element count, elements, then a NIL_EXT tail.
pub const LIST_EXT: u8 = 108;
/// Map: 4-byte entry count, then key/value term pairs.
pub const MAP_EXT: u8 = 116;
/// Binary: 4-byte length prefix plus raw bytes.
pub const BINARY_EXT: u8 = 109;
/// Big integer with a 1-byte digit count.
pub const SMALL_BIG_EXT: u8 = 110;
/// Big integer with a 4-byte digit count.
pub const LARGE_BIG_EXT: u8 = 111;
/// Compressed envelope: 4-byte uncompressed size plus a zlib stream.
pub const COMPRESSED: u8 = 80;
