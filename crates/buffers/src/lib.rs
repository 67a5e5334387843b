//! Binary buffer primitives for the ETF codec.
//!
//! [`Reader`] is a bounds-checked big-endian cursor over a borrowed byte
//! slice; [`Writer`] is an auto-growing output buffer. Every multi-byte read
//! verifies the remaining length before advancing, so a failed read never
//! leaves the cursor partially moved.

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::Writer;
