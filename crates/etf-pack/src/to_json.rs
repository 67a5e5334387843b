//! `EtfToJsonConverter` — converts ETF payloads to JSON text directly.
//!
//! Walks the same tag grammar as the tree decoder but writes JSON bytes
//! straight into a reusable output buffer, skipping the intermediate
//! [`TermValue`](crate::TermValue) allocation entirely. Fed through a JSON
//! parser, its output equals the JSON serialization of the tree decoder's
//! result for the same payload.

use etf_buffers::{Reader, Writer};

use crate::bigint::{read_big, BigNum};
use crate::constants::{
    ATOM_EXT, BINARY_EXT, COMPRESSED, FORMAT_VERSION, INTEGER_EXT, LARGE_BIG_EXT, LARGE_TUPLE_EXT,
    LIST_EXT, MAP_EXT, NEW_FLOAT_EXT, NIL_EXT, SMALL_ATOM_EXT, SMALL_BIG_EXT, SMALL_INTEGER_EXT,
    SMALL_TUPLE_EXT, STRING_EXT,
};
use crate::inflate::inflate_envelope;
use crate::EtfError;

/// Output buffer allocations beyond this are not retained between calls.
pub const MAX_RETAINED_CAPACITY: usize = 32 * 1024;

const HEX: [u8; 16] = *b"0123456789abcdef";

/// Streaming ETF-to-JSON converter with a reusable, capped output buffer.
///
/// A single instance is a single-writer resource; use one instance per
/// thread. On any decode error the partially-written output is rolled back
/// and never observable.
pub struct EtfToJsonConverter {
    pub writer: Writer,
}

impl Default for EtfToJsonConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl EtfToJsonConverter {
    pub fn new() -> Self {
        Self {
            writer: Writer::with_alloc_size(MAX_RETAINED_CAPACITY),
        }
    }

    /// Converts a version-prefixed payload to JSON text.
    pub fn convert(&mut self, input: &[u8]) -> Result<Vec<u8>, EtfError> {
        if input.is_empty() || input[0] != FORMAT_VERSION {
            return Err(EtfError::InvalidFormat);
        }
        // Drop an oversized allocation left behind by a large previous
        // payload instead of retaining it indefinitely.
        if self.writer.capacity() > MAX_RETAINED_CAPACITY {
            self.writer.new_buffer(MAX_RETAINED_CAPACITY);
        }
        self.writer.reset();
        let mut reader = Reader::new(&input[1..]);
        match self.write_term(&mut reader) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                self.writer.x = self.writer.x0;
                Err(err)
            }
        }
    }

    fn write_term(&mut self, reader: &mut Reader<'_>) -> Result<(), EtfError> {
        let tag = reader.u8()?;
        match tag {
            SMALL_INTEGER_EXT => {
                let v = reader.u8()?;
                self.writer.ascii(&v.to_string());
                Ok(())
            }
            INTEGER_EXT => {
                let v = reader.i32()?;
                self.writer.ascii(&v.to_string());
                Ok(())
            }
            NEW_FLOAT_EXT => {
                self.write_float(reader.f64()?);
                Ok(())
            }
            ATOM_EXT => {
                let len = reader.u16()? as usize;
                let bytes = reader.buf(len)?;
                self.write_atom(bytes);
                Ok(())
            }
            SMALL_ATOM_EXT => {
                let len = reader.u8()? as usize;
                let bytes = reader.buf(len)?;
                self.write_atom(bytes);
                Ok(())
            }
            STRING_EXT => {
                let len = reader.u16()? as usize;
                let bytes = reader.buf(len)?;
                self.write_json_str(bytes);
                Ok(())
            }
            BINARY_EXT => {
                let len = reader.u32()? as usize;
                let bytes = reader.buf(len)?;
                self.write_json_str(bytes);
                Ok(())
            }
            NIL_EXT => {
                self.writer.buf(b"[]");
                Ok(())
            }
            LIST_EXT => {
                let len = reader.u32()? as usize;
                self.write_elements(reader, len)?;
                let tail = reader.u8()?;
                if tail != NIL_EXT {
                    return Err(EtfError::ListTailMissing);
                }
                Ok(())
            }
            SMALL_TUPLE_EXT => {
                let len = reader.u8()? as usize;
                self.write_elements(reader, len)
            }
            LARGE_TUPLE_EXT => {
                let len = reader.u32()? as usize;
                self.write_elements(reader, len)
            }
            MAP_EXT => {
                let len = reader.u32()? as usize;
                self.writer.u8(b'{');
                for i in 0..len {
                    if i > 0 {
                        self.writer.u8(b',');
                    }
                    self.write_key(reader)?;
                    self.writer.u8(b':');
                    self.write_term(reader)?;
                }
                self.writer.u8(b'}');
                Ok(())
            }
            SMALL_BIG_EXT => {
                let digits = reader.u8()? as usize;
                self.write_big(read_big(reader, digits)?);
                Ok(())
            }
            LARGE_BIG_EXT => {
                let digits = reader.u32()? as usize;
                self.write_big(read_big(reader, digits)?);
                Ok(())
            }
            COMPRESSED => {
                let inflated = inflate_envelope(reader)?;
                let mut inner = Reader::new(&inflated);
                self.write_term(&mut inner)
            }
            other => Err(EtfError::UnsupportedTag(other)),
        }
    }

    fn write_elements(&mut self, reader: &mut Reader<'_>, len: usize) -> Result<(), EtfError> {
        self.writer.u8(b'[');
        for i in 0..len {
            if i > 0 {
                self.writer.u8(b',');
            }
            self.write_term(reader)?;
        }
        self.writer.u8(b']');
        Ok(())
    }

    /// Map keys must become text before the value is decoded; the supported
    /// key tags mirror the tree decoder exactly.
    fn write_key(&mut self, reader: &mut Reader<'_>) -> Result<(), EtfError> {
        let tag = reader.u8()?;
        match tag {
            ATOM_EXT | STRING_EXT => {
                let len = reader.u16()? as usize;
                let bytes = reader.buf(len)?;
                self.write_json_str(bytes);
                Ok(())
            }
            SMALL_ATOM_EXT => {
                let len = reader.u8()? as usize;
                let bytes = reader.buf(len)?;
                self.write_json_str(bytes);
                Ok(())
            }
            BINARY_EXT => {
                let len = reader.u32()? as usize;
                let bytes = reader.buf(len)?;
                self.write_json_str(bytes);
                Ok(())
            }
            SMALL_INTEGER_EXT => {
                let v = reader.u8()?;
                self.write_quoted_ascii(&v.to_string());
                Ok(())
            }
            SMALL_BIG_EXT => {
                let digits = reader.u8()? as usize;
                let num = read_big(reader, digits)?;
                self.write_quoted_ascii(&num.render());
                Ok(())
            }
            other => Err(EtfError::UnsupportedKeyTag(other)),
        }
    }

    /// The literal atoms for null and the booleans become JSON keywords,
    /// matching the tree decoder's classification; everything else is a
    /// quoted string.
    fn write_atom(&mut self, bytes: &[u8]) {
        match bytes {
            b"" | b"nil" | b"null" => self.writer.buf(b"null"),
            b"true" => self.writer.buf(b"true"),
            b"false" => self.writer.buf(b"false"),
            _ => self.write_json_str(bytes),
        }
    }

    fn write_big(&mut self, num: BigNum) {
        match num {
            BigNum::Small(v) => self.writer.ascii(&v.to_string()),
            large => self.write_quoted_ascii(&large.render()),
        }
    }

    /// Non-finite floats have no JSON form and render as null, matching the
    /// tree decoder's JSON conversion.
    fn write_float(&mut self, f: f64) {
        match serde_json::Number::from_f64(f) {
            Some(n) => self.writer.ascii(&n.to_string()),
            None => self.writer.buf(b"null"),
        }
    }

    fn write_quoted_ascii(&mut self, s: &str) {
        self.writer.u8(b'"');
        self.writer.ascii(s);
        self.writer.u8(b'"');
    }

    /// Quoted JSON string with byte-level escaping: quote and backslash get
    /// a backslash, the common control characters get letter escapes, any
    /// other byte below 0x20 gets a `\u00XX` escape.
    fn write_json_str(&mut self, bytes: &[u8]) {
        self.writer.ensure_capacity(bytes.len() + 2);
        self.writer.u8(b'"');
        for &c in bytes {
            match c {
                b'"' | b'\\' => {
                    self.writer.u8(b'\\');
                    self.writer.u8(c);
                }
                0x08 => self.writer.buf(b"\\b"),
                0x0c => self.writer.buf(b"\\f"),
                b'\n' => self.writer.buf(b"\\n"),
                b'\r' => self.writer.buf(b"\\r"),
                b'\t' => self.writer.buf(b"\\t"),
                c if c < 0x20 => {
                    self.writer.buf(&[
                        b'\\',
                        b'u',
                        b'0',
                        b'0',
                        HEX[(c >> 4) as usize],
                        HEX[(c & 0xf) as usize],
                    ]);
                }
                c => self.writer.u8(c),
            }
        }
        self.writer.u8(b'"');
    }
}
