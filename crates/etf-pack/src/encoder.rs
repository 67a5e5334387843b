//! `EtfEncoder` — writes [`TermValue`] trees as tagged ETF bytes.

use etf_buffers::Writer;

use crate::constants::{
    BINARY_EXT, FORMAT_VERSION, INTEGER_EXT, LIST_EXT, MAP_EXT, NEW_FLOAT_EXT, NIL_EXT,
    SMALL_ATOM_EXT, SMALL_BIG_EXT, SMALL_INTEGER_EXT,
};
use crate::{EtfError, TermValue};

/// ETF term encoder over a reusable output buffer.
///
/// Holds no state between calls apart from the writer allocation; every
/// [`encode`](EtfEncoder::encode) call produces a fresh byte vector prefixed
/// with the format version byte. A failed call (oversized collection) leaves
/// no bytes visible.
pub struct EtfEncoder {
    pub writer: Writer,
}

impl Default for EtfEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl EtfEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes one term, prefixed with the format version byte.
    pub fn encode(&mut self, value: &TermValue) -> Result<Vec<u8>, EtfError> {
        self.writer.reset();
        self.writer.u8(FORMAT_VERSION);
        match self.write_any(value) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                // Roll the cursor back so the partial term is never flushed.
                self.writer.x = self.writer.x0;
                Err(err)
            }
        }
    }

    pub fn write_any(&mut self, value: &TermValue) -> Result<(), EtfError> {
        match value {
            TermValue::Null => self.write_nil(),
            TermValue::Bool(b) => self.write_boolean(*b),
            TermValue::Integer(i) => self.write_integer(*i),
            TermValue::UInteger(u) => self.write_u_integer(*u),
            TermValue::Float(f) => self.write_float(*f),
            TermValue::Str(s) => self.write_binary(s.as_bytes())?,
            TermValue::Bytes(b) => self.write_binary(b)?,
            TermValue::Array(arr) => self.write_arr(arr)?,
            TermValue::Object(obj) => self.write_obj(obj)?,
        }
        Ok(())
    }

    /// `nil` small atom; decodes back to null.
    pub fn write_nil(&mut self) {
        self.writer.buf(&[SMALL_ATOM_EXT, 3, b'n', b'i', b'l']);
    }

    pub fn write_boolean(&mut self, b: bool) {
        if b {
            self.writer.buf(&[SMALL_ATOM_EXT, 4, b't', b'r', b'u', b'e']);
        } else {
            self.writer
                .buf(&[SMALL_ATOM_EXT, 5, b'f', b'a', b'l', b's', b'e']);
        }
    }

    pub fn write_integer(&mut self, int: i64) {
        if (0..=255).contains(&int) {
            self.writer.u8(SMALL_INTEGER_EXT);
            self.writer.u8(int as u8);
        } else if int >= i32::MIN as i64 && int <= i32::MAX as i64 {
            self.writer.u8(INTEGER_EXT);
            self.writer.i32(int as i32);
        } else {
            self.write_big(int < 0, int.unsigned_abs());
        }
    }

    pub fn write_u_integer(&mut self, uint: u64) {
        if uint <= 255 {
            self.writer.u8(SMALL_INTEGER_EXT);
            self.writer.u8(uint as u8);
        } else if uint <= i32::MAX as u64 {
            self.writer.u8(INTEGER_EXT);
            self.writer.i32(uint as i32);
        } else {
            self.write_big(false, uint);
        }
    }

    /// Sign + minimal little-endian magnitude digits. An `i64`/`u64`
    /// magnitude never needs more than 8 digits, so the 1-byte count form
    /// is always sufficient.
    pub fn write_big(&mut self, negative: bool, magnitude: u64) {
        let le = magnitude.to_le_bytes();
        let digits = (8 - magnitude.leading_zeros() as usize / 8).max(1);
        self.writer.u8(SMALL_BIG_EXT);
        self.writer.u8(digits as u8);
        self.writer.u8(u8::from(negative));
        self.writer.buf(&le[..digits]);
    }

    pub fn write_float(&mut self, float: f64) {
        self.writer.u8(NEW_FLOAT_EXT);
        self.writer.f64(float);
    }

    pub fn write_binary(&mut self, buf: &[u8]) -> Result<(), EtfError> {
        let length = u32::try_from(buf.len()).map_err(|_| EtfError::TooLarge)?;
        self.writer.u8u32(BINARY_EXT, length);
        self.writer.buf(buf);
        Ok(())
    }

    /// An empty sequence is the bare nil tag; anything else is a proper
    /// list with a nil tail.
    pub fn write_arr(&mut self, arr: &[TermValue]) -> Result<(), EtfError> {
        if arr.is_empty() {
            self.writer.u8(NIL_EXT);
            return Ok(());
        }
        let length = u32::try_from(arr.len()).map_err(|_| EtfError::TooLarge)?;
        self.writer.u8u32(LIST_EXT, length);
        for item in arr {
            self.write_any(item)?;
        }
        self.writer.u8(NIL_EXT);
        Ok(())
    }

    /// Map keys go on the wire as binary terms.
    pub fn write_obj(&mut self, obj: &[(String, TermValue)]) -> Result<(), EtfError> {
        let length = u32::try_from(obj.len()).map_err(|_| EtfError::TooLarge)?;
        self.writer.u8u32(MAP_EXT, length);
        for (key, val) in obj {
            self.write_binary(key.as_bytes())?;
            self.write_any(val)?;
        }
        Ok(())
    }
}
