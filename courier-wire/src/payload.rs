//! Opaque trailing payload region.
//!
//! Whatever bytes remain in a frame after the header and body belong to the
//! payload. The region is opaque to this layer: it is captured verbatim on
//! decode and appended verbatim on encode. Reads are bounds-checked; going
//! past the end is an error, never partial data.

use crate::error::WireError;

/// Seekable, readable view of an envelope's trailing bytes.
///
/// Logical position 0 is the slice's own origin, not the original frame's.
/// For outgoing envelopes the region starts empty (with an optional
/// capacity reserve) and grows through [`PayloadSlice::write`].
#[derive(Debug, Clone, Default)]
pub struct PayloadSlice {
    data: Vec<u8>,
    pos: usize,
}

impl PayloadSlice {
    /// Create an empty payload region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty payload region with a capacity reserve hint.
    pub fn with_capacity(reserve: usize) -> Self {
        Self {
            data: Vec::with_capacity(reserve),
            pos: 0,
        }
    }

    /// Capture an already-materialized byte region, positioned at 0.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    /// The captured region, exactly as it appeared on the wire.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Length of the captured region in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the region is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Seek to an absolute offset within the region.
    ///
    /// Seeking to `len()` (one past the last byte) is allowed; any further
    /// is not.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `pos` exceeds the region length.
    pub fn seek(&mut self, pos: usize) -> Result<(), WireError> {
        if pos > self.data.len() {
            return Err(WireError::OutOfRange {
                requested: pos,
                len: self.data.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    /// Read `len` bytes from the current position, advancing past them.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the read would cross the end of the region;
    /// the position is left unchanged in that case.
    pub fn read(&mut self, len: usize) -> Result<&[u8], WireError> {
        let end = self.pos + len;
        if end > self.data.len() {
            return Err(WireError::OutOfRange {
                requested: end,
                len: self.data.len(),
            });
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Append bytes to the region (outgoing direction).
    pub fn write(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }
}
