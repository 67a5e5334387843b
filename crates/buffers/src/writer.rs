//! Binary buffer writer with auto-growing capacity.

/// A binary buffer writer that grows automatically as needed.
///
/// Multi-byte writes are big-endian. The writer tracks a flush position
/// (`x0`) separately from the cursor (`x`), so the bytes written since the
/// last flush can be taken as a fresh vector while the allocation is reused.
///
/// # Example
///
/// ```
/// use etf_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// assert_eq!(writer.flush(), [0x01, 0x02, 0x03]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Position where the last flush happened.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    /// Allocation size when the buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with the default allocation size (64KB).
    pub fn new() -> Self {
        Self::with_alloc_size(64 * 1024)
    }

    /// Creates a new writer with a custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: vec![0u8; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Returns the size of the backing allocation.
    pub fn capacity(&self) -> usize {
        self.uint8.len()
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining < capacity {
            let total = self.uint8.len() - self.x0;
            let required = capacity - remaining;
            let total_required = total + required;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..x - x0].copy_from_slice(&self.uint8[x0..x]);
        self.uint8 = new_buf;
        self.x = x - x0;
        self.x0 = 0;
    }

    /// Resets the flush position to the current cursor.
    pub fn reset(&mut self) {
        self.x0 = self.x;
    }

    /// Replaces the backing buffer with a fresh allocation of `size` bytes.
    pub fn new_buffer(&mut self, size: usize) {
        self.uint8 = vec![0u8; size];
        self.x = 0;
        self.x0 = 0;
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = val;
        self.x += 1;
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.ensure_capacity(2);
        let bytes = val.to_be_bytes();
        self.uint8[self.x] = bytes[0];
        self.uint8[self.x + 1] = bytes[1];
        self.x += 2;
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.ensure_capacity(4);
        let bytes = val.to_be_bytes();
        self.uint8[self.x..self.x + 4].copy_from_slice(&bytes);
        self.x += 4;
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.ensure_capacity(4);
        let bytes = val.to_be_bytes();
        self.uint8[self.x..self.x + 4].copy_from_slice(&bytes);
        self.x += 4;
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.ensure_capacity(8);
        let bytes = val.to_be_bytes();
        self.uint8[self.x..self.x + 8].copy_from_slice(&bytes);
        self.x += 8;
    }

    /// Writes a 64-bit floating point number (big-endian bit pattern).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.ensure_capacity(8);
        let bytes = val.to_be_bytes();
        self.uint8[self.x..self.x + 8].copy_from_slice(&bytes);
        self.x += 8;
    }

    /// Writes a u8 followed by a u32 (big-endian).
    pub fn u8u32(&mut self, u8_val: u8, u32_val: u32) {
        self.ensure_capacity(5);
        self.uint8[self.x] = u8_val;
        let bytes = u32_val.to_be_bytes();
        self.uint8[self.x + 1..self.x + 5].copy_from_slice(&bytes);
        self.x += 5;
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        self.uint8[self.x..self.x + length].copy_from_slice(buf);
        self.x += length;
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        let bytes = s.as_bytes();
        self.buf(bytes);
        bytes.len()
    }

    /// Writes an ASCII string.
    pub fn ascii(&mut self, s: &str) {
        self.utf8(s); // ASCII is a subset of UTF-8
    }
}
