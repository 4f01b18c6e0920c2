//! Generic body codec.
//!
//! The envelope does not know the concrete shape of its body. It requires
//! three capabilities of the type it carries: construct a fresh default
//! instance, merge-decode from the remaining frame bytes, and serialize to
//! canonical bytes. The `Default` bound is the factory: the caller names
//! the concrete type at each call site and the compiler supplies
//! construction, so no runtime type inspection exists anywhere.

use crate::cursor::ByteCursor;
use crate::error::WireError;

/// Error reported by a body's own decoder.
///
/// The envelope layer wraps this into [`WireError::MalformedBody`] together
/// with the frame offset where the body started.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct BodyDecodeError {
    message: String,
}

impl BodyDecodeError {
    /// Create an error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A message body with a self-delimiting wire encoding.
///
/// The body format declares its own length implicitly through its encoding
/// rules; `merge_from` must stop at the body's boundary and report exactly
/// how many bytes it consumed. `encode_to_vec` must be deterministic for a
/// given value so that frames round-trip byte-exactly.
pub trait WireBody: Default {
    /// Merge-decode from the front of `buf`, returning the byte count
    /// consumed.
    ///
    /// # Errors
    ///
    /// Returns [`BodyDecodeError`] when `buf` does not start with a valid
    /// encoding of this body type.
    fn merge_from(&mut self, buf: &[u8]) -> Result<usize, BodyDecodeError>;

    /// Serialize to the body's canonical wire encoding.
    fn encode_to_vec(&self) -> Vec<u8>;
}

/// Decode a body from the cursor's remaining bytes.
///
/// Instantiates `B` through its `Default` factory, merge-decodes, and
/// advances the cursor by exactly the count the body consumed.
///
/// # Errors
///
/// Returns [`WireError::MalformedBody`] carrying the cursor offset of the
/// body start when the body's decoder rejects its bytes.
pub fn decode_body<B: WireBody>(cursor: &mut ByteCursor<'_>) -> Result<B, WireError> {
    let offset = cursor.position();
    let mut body = B::default();
    let consumed = body
        .merge_from(cursor.rest())
        .map_err(|e| WireError::MalformedBody {
            offset,
            message: e.to_string(),
        })?;
    cursor.advance(consumed)?;
    Ok(body)
}
