//! Byte cursor over an inbound frame.

use crate::error::WireError;

/// Read cursor tracking how many bytes of a frame have been consumed.
///
/// Each decode call owns its own cursor; there is no shared state. All
/// reads are bounds-checked and fail with [`WireError::TruncatedInput`]
/// instead of panicking.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `data`.
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left to read.
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// The unread remainder of the frame.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Consume `n` bytes and return them.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedInput` if fewer than `n` bytes remain.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if self.remaining() < n {
            return Err(WireError::TruncatedInput {
                needed: n,
                have: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Advance past `n` bytes without returning them.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedInput` if fewer than `n` bytes remain.
    pub fn advance(&mut self, n: usize) -> Result<(), WireError> {
        self.take(n).map(|_| ())
    }

    /// Read a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedInput` if fewer than 4 bytes remain.
    pub fn read_u32_le(&mut self) -> Result<u32, WireError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a little-endian `u64`.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedInput` if fewer than 8 bytes remain.
    pub fn read_u64_le(&mut self) -> Result<u64, WireError> {
        let b = self.take(8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_reads() {
        let data = [0x01, 0x00, 0x00, 0x00, 0xFF, 0xEE];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u32_le().expect("u32"), 1);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.rest(), &[0xFF, 0xEE]);
    }

    #[test]
    fn test_read_u64_le() {
        let data = 0x1122334455667788u64.to_le_bytes();
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u64_le().expect("u64"), 0x1122334455667788);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_truncated_read() {
        let data = [0x01, 0x02];
        let mut cursor = ByteCursor::new(&data);

        let result = cursor.read_u32_le();
        assert!(matches!(
            result,
            Err(WireError::TruncatedInput { needed: 4, have: 2 })
        ));
        // Failed reads do not consume anything.
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_past_end() {
        let data = [0u8; 3];
        let mut cursor = ByteCursor::new(&data);
        assert!(cursor.advance(3).is_ok());
        assert!(matches!(
            cursor.advance(1),
            Err(WireError::TruncatedInput { needed: 1, have: 0 })
        ));
    }

    #[test]
    fn test_empty_rest() {
        let cursor = ByteCursor::new(&[]);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.rest().is_empty());
    }
}
