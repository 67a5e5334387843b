//! Big-integer term payload codec.
//!
//! Wire form after the SMALL_BIG/LARGE_BIG digit count: one sign byte
//! (0 = non-negative, 1 = negative) followed by the magnitude as
//! little-endian base-256 digits. The decoder supports at most 8 digit
//! bytes; magnitudes up to 4 digits collapse to a native signed number,
//! wider ones are carried as sign + u64 magnitude and rendered as decimal
//! text by both decode strategies.

use etf_buffers::Reader;

use crate::EtfError;

/// Decoded big-integer payload, classified by digit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigNum {
    /// Magnitude fit in 4 digit bytes; sign already applied.
    Small(i64),
    /// Magnitude took 5 to 8 digit bytes.
    Large {
        /// Sign byte was 1.
        negative: bool,
        /// Little-endian digit accumulation.
        magnitude: u64,
    },
}

impl BigNum {
    /// Renders the number as decimal text, with a leading `-` when negative.
    pub fn render(&self) -> String {
        match *self {
            BigNum::Small(v) => v.to_string(),
            BigNum::Large { negative, magnitude } => {
                if negative && magnitude != 0 {
                    format!("-{}", magnitude)
                } else {
                    magnitude.to_string()
                }
            }
        }
    }
}

/// Reads the sign byte and `digits` magnitude bytes at the cursor.
///
/// Digit counts above 8 fail with [`EtfError::BigIntTooLarge`].
pub fn read_big(reader: &mut Reader<'_>, digits: usize) -> Result<BigNum, EtfError> {
    let sign = reader.u8()?;

    if digits > 8 {
        return Err(EtfError::BigIntTooLarge);
    }

    let mut value: u64 = 0;
    let mut shift = 0u32;
    for _ in 0..digits {
        let digit = reader.u8()? as u64;
        value += digit << shift;
        shift += 8;
    }

    if digits <= 4 {
        let v = value as i64;
        Ok(BigNum::Small(if sign == 0 { v } else { -v }))
    } else {
        Ok(BigNum::Large {
            negative: sign != 0,
            magnitude: value,
        })
    }
}
