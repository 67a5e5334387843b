//! Compressed envelope inflation shared by both decode strategies.

use std::io::Read;

use etf_buffers::Reader;
use flate2::read::ZlibDecoder;

use crate::EtfError;

/// Handles a COMPRESSED term at the cursor (the tag byte itself already
/// consumed): reads the declared uncompressed size, inflates the remaining
/// bytes of the buffer and advances the cursor past the consumed compressed
/// bytes.
///
/// The inflated bytes form a complete term stream without a version byte;
/// the caller decodes them recursively. Reading is bounded at one byte past
/// the declared size, so an envelope that inflates beyond its declaration
/// fails without buffering the excess.
pub(crate) fn inflate_envelope(reader: &mut Reader<'_>) -> Result<Vec<u8>, EtfError> {
    let declared = reader.u32()? as usize;

    let mut z = ZlibDecoder::new(reader.remainder()).take(declared as u64 + 1);
    let mut inflated = Vec::new();
    z.read_to_end(&mut inflated)
        .map_err(|_| EtfError::CompressionFailed)?;

    if inflated.len() != declared {
        return Err(EtfError::CompressionMismatch {
            declared,
            actual: inflated.len(),
        });
    }

    let consumed = z.into_inner().total_in() as usize;
    reader.skip(consumed)?;

    Ok(inflated)
}
