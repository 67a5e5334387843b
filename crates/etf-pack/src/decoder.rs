//! `EtfDecoder` — recursive-descent decoder producing a [`TermValue`] tree.

use etf_buffers::Reader;

use crate::bigint::{read_big, BigNum};
use crate::constants::{
    ATOM_EXT, BINARY_EXT, COMPRESSED, FORMAT_VERSION, INTEGER_EXT, LARGE_BIG_EXT, LARGE_TUPLE_EXT,
    LIST_EXT, MAP_EXT, NEW_FLOAT_EXT, NIL_EXT, SMALL_ATOM_EXT, SMALL_BIG_EXT, SMALL_INTEGER_EXT,
    SMALL_TUPLE_EXT, STRING_EXT,
};
use crate::inflate::inflate_envelope;
use crate::{EtfError, TermValue};

/// Tree decoder for ETF payloads.
///
/// One instance may be reused across calls; it is a single-writer resource
/// (`&mut self`), so concurrent use requires one instance per thread.
pub struct EtfDecoder;

impl Default for EtfDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl EtfDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a version-prefixed payload into a value tree.
    pub fn decode(&mut self, input: &[u8]) -> Result<TermValue, EtfError> {
        if input.is_empty() || input[0] != FORMAT_VERSION {
            return Err(EtfError::InvalidFormat);
        }
        let mut reader = Reader::new(&input[1..]);
        self.read_any(&mut reader)
    }

    /// Reads one term at the cursor.
    pub fn read_any(&mut self, reader: &mut Reader<'_>) -> Result<TermValue, EtfError> {
        let tag = reader.u8()?;
        match tag {
            SMALL_INTEGER_EXT => Ok(TermValue::Integer(reader.u8()? as i64)),
            INTEGER_EXT => Ok(TermValue::Integer(reader.i32()? as i64)),
            NEW_FLOAT_EXT => Ok(TermValue::Float(reader.f64()?)),
            ATOM_EXT => {
                let len = reader.u16()? as usize;
                Ok(classify_atom(reader.buf(len)?))
            }
            SMALL_ATOM_EXT => {
                let len = reader.u8()? as usize;
                Ok(classify_atom(reader.buf(len)?))
            }
            STRING_EXT => {
                let len = reader.u16()? as usize;
                Ok(text_or_bytes(reader.buf(len)?))
            }
            BINARY_EXT => {
                let len = reader.u32()? as usize;
                Ok(text_or_bytes(reader.buf(len)?))
            }
            NIL_EXT => Ok(TermValue::Array(Vec::new())),
            LIST_EXT => {
                let len = reader.u32()? as usize;
                let arr = self.read_arr(reader, len)?;
                let tail = reader.u8()?;
                if tail != NIL_EXT {
                    return Err(EtfError::ListTailMissing);
                }
                Ok(TermValue::Array(arr))
            }
            SMALL_TUPLE_EXT => {
                let len = reader.u8()? as usize;
                Ok(TermValue::Array(self.read_arr(reader, len)?))
            }
            LARGE_TUPLE_EXT => {
                let len = reader.u32()? as usize;
                Ok(TermValue::Array(self.read_arr(reader, len)?))
            }
            MAP_EXT => {
                let len = reader.u32()? as usize;
                let mut obj = Vec::with_capacity(len.min(64));
                for _ in 0..len {
                    let key = self.read_key(reader)?;
                    let val = self.read_any(reader)?;
                    obj.push((key, val));
                }
                Ok(TermValue::Object(obj))
            }
            SMALL_BIG_EXT => {
                let digits = reader.u8()? as usize;
                Ok(big_value(read_big(reader, digits)?))
            }
            LARGE_BIG_EXT => {
                let digits = reader.u32()? as usize;
                Ok(big_value(read_big(reader, digits)?))
            }
            COMPRESSED => {
                let inflated = inflate_envelope(reader)?;
                let mut inner = Reader::new(&inflated);
                self.read_any(&mut inner)
            }
            other => Err(EtfError::UnsupportedTag(other)),
        }
    }

    fn read_arr(
        &mut self,
        reader: &mut Reader<'_>,
        len: usize,
    ) -> Result<Vec<TermValue>, EtfError> {
        let mut arr = Vec::with_capacity(len.min(64));
        for _ in 0..len {
            arr.push(self.read_any(reader)?);
        }
        Ok(arr)
    }

    /// Canonical map-key stringification. Text-shaped keys pass through;
    /// small integers and big integers render as decimal text; every other
    /// key tag is a hard failure.
    fn read_key(&mut self, reader: &mut Reader<'_>) -> Result<String, EtfError> {
        let tag = reader.u8()?;
        match tag {
            ATOM_EXT | STRING_EXT => {
                let len = reader.u16()? as usize;
                Ok(String::from_utf8_lossy(reader.buf(len)?).into_owned())
            }
            SMALL_ATOM_EXT => {
                let len = reader.u8()? as usize;
                Ok(String::from_utf8_lossy(reader.buf(len)?).into_owned())
            }
            BINARY_EXT => {
                let len = reader.u32()? as usize;
                Ok(String::from_utf8_lossy(reader.buf(len)?).into_owned())
            }
            SMALL_INTEGER_EXT => Ok(reader.u8()?.to_string()),
            SMALL_BIG_EXT => {
                let digits = reader.u8()? as usize;
                Ok(read_big(reader, digits)?.render())
            }
            other => Err(EtfError::UnsupportedKeyTag(other)),
        }
    }
}

/// Atom text is classified, not carried as a distinct type: the literal
/// forms for null and the booleans become primitives, everything else is a
/// plain string.
fn classify_atom(bytes: &[u8]) -> TermValue {
    match bytes {
        b"" | b"nil" | b"null" => TermValue::Null,
        b"true" => TermValue::Bool(true),
        b"false" => TermValue::Bool(false),
        _ => TermValue::Str(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn text_or_bytes(bytes: &[u8]) -> TermValue {
    match std::str::from_utf8(bytes) {
        Ok(s) => TermValue::Str(s.to_owned()),
        Err(_) => TermValue::Bytes(bytes.to_vec()),
    }
}

fn big_value(num: BigNum) -> TermValue {
    match num {
        BigNum::Small(v) => TermValue::Integer(v),
        large => TermValue::Str(large.render()),
    }
}
