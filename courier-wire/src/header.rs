//! Fixed-layout envelope header codec.
//!
//! Wire layout: `[code+flag: u32][job_id_source: u64][job_id_target: u64]`,
//! all little-endian. The high bit of the first word is the framing flag;
//! it is set on every frame this family produces. The low 31 bits are the
//! message code.

use serde::{Deserialize, Serialize};

use crate::cursor::ByteCursor;
use crate::error::WireError;
use crate::job::JobId;

/// Fixed header width in bytes: 4 (code+flag) + 8 (source) + 8 (target).
pub const HEADER_SIZE: usize = 20;

/// High bit of the code word: set when the body uses protobuf-style framing.
const PROTO_FLAG: u32 = 0x8000_0000;

/// Mask selecting the message code from the code word.
const CODE_MASK: u32 = !PROTO_FLAG;

/// Routing and correlation metadata at the front of every frame.
///
/// The header is a plain value; serializing and deserializing it moves a
/// caller-owned cursor by exactly [`HEADER_SIZE`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeHeader {
    /// Message code identifying the frame's kind (low 31 bits on the wire).
    pub code: u32,

    /// Framing flag. True for every frame this family produces; a frame
    /// decoded with this flag clear uses legacy framing and is rejected
    /// by the envelope decoder.
    pub proto: bool,

    /// Job id of the sender's side of the exchange.
    pub job_id_source: JobId,

    /// Job id this frame replies to, or the sentinel for unsolicited frames.
    pub job_id_target: JobId,
}

impl EnvelopeHeader {
    /// Create a header for a new outgoing frame with the given code.
    ///
    /// Both job ids start at the sentinel; correlation is stamped on later.
    pub fn for_code(code: u32) -> Self {
        Self {
            code,
            proto: true,
            job_id_source: JobId::NONE,
            job_id_target: JobId::NONE,
        }
    }

    /// Append the header's fixed wire layout to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        let mut word = self.code & CODE_MASK;
        if self.proto {
            word |= PROTO_FLAG;
        }
        out.extend_from_slice(&word.to_le_bytes());
        out.extend_from_slice(&self.job_id_source.value().to_le_bytes());
        out.extend_from_slice(&self.job_id_target.value().to_le_bytes());
    }

    /// Read a header, advancing the cursor by exactly [`HEADER_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns `TruncatedInput` if fewer than [`HEADER_SIZE`] bytes remain;
    /// the cursor is left where it was.
    pub fn read_from(cursor: &mut ByteCursor<'_>) -> Result<Self, WireError> {
        if cursor.remaining() < HEADER_SIZE {
            return Err(WireError::TruncatedInput {
                needed: HEADER_SIZE,
                have: cursor.remaining(),
            });
        }

        let word = cursor.read_u32_le()?;
        let job_id_source = JobId::new(cursor.read_u64_le()?);
        let job_id_target = JobId::new(cursor.read_u64_le()?);

        Ok(Self {
            code: word & CODE_MASK,
            proto: word & PROTO_FLAG != 0,
            job_id_source,
            job_id_target,
        })
    }

    /// Decode only the header of a frame, for routing before the body type
    /// is known.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedInput` if the frame is shorter than [`HEADER_SIZE`].
    pub fn peek(frame: &[u8]) -> Result<Self, WireError> {
        let mut cursor = ByteCursor::new(frame);
        Self::read_from(&mut cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let header = EnvelopeHeader {
            code: 4006,
            proto: true,
            job_id_source: JobId::new(0x1111),
            job_id_target: JobId::new(0x2222),
        };

        let mut buf = Vec::new();
        header.write_to(&mut buf);
        assert_eq!(buf.len(), HEADER_SIZE);

        let mut cursor = ByteCursor::new(&buf);
        let decoded = EnvelopeHeader::read_from(&mut cursor).expect("read");
        assert_eq!(decoded, header);
        assert_eq!(cursor.position(), HEADER_SIZE);
    }

    #[test]
    fn test_flag_bit_on_wire() {
        let mut buf = Vec::new();
        EnvelopeHeader::for_code(4006).write_to(&mut buf);

        let word = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        assert_eq!(word & 0x8000_0000, 0x8000_0000);
        assert_eq!(word & 0x7FFF_FFFF, 4006);
    }

    #[test]
    fn test_for_code_defaults() {
        let header = EnvelopeHeader::for_code(5210);
        assert_eq!(header.code, 5210);
        assert!(header.proto);
        assert!(header.job_id_source.is_none());
        assert!(header.job_id_target.is_none());
    }

    #[test]
    fn test_legacy_flag_preserved() {
        let header = EnvelopeHeader {
            proto: false,
            ..EnvelopeHeader::for_code(4004)
        };

        let mut buf = Vec::new();
        header.write_to(&mut buf);

        let decoded = EnvelopeHeader::peek(&buf).expect("peek");
        assert!(!decoded.proto);
        assert_eq!(decoded.code, 4004);
    }

    #[test]
    fn test_truncated_header() {
        let result = EnvelopeHeader::peek(&[0u8; 10]);
        assert!(matches!(
            result,
            Err(WireError::TruncatedInput {
                needed: HEADER_SIZE,
                have: 10
            })
        ));
    }

    #[test]
    fn test_truncated_leaves_cursor_untouched() {
        let data = [0u8; 5];
        let mut cursor = ByteCursor::new(&data);
        let _ = EnvelopeHeader::read_from(&mut cursor);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_sentinel_job_ids_on_wire() {
        let mut buf = Vec::new();
        EnvelopeHeader::for_code(1).write_to(&mut buf);

        // Both job id fields are all-ones when no correlation is set.
        assert!(buf[4..20].iter().all(|b| *b == 0xFF));
    }
}
