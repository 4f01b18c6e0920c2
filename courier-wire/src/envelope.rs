//! Envelope composition: header + generic body + opaque payload.

use crate::body::{decode_body, WireBody};
use crate::cursor::ByteCursor;
use crate::error::WireError;
use crate::header::{EnvelopeHeader, HEADER_SIZE};
use crate::job::JobId;
use crate::kind::MsgKind;
use crate::payload::PayloadSlice;

/// Default payload capacity reserve for new outgoing envelopes.
pub const DEFAULT_PAYLOAD_RESERVE: usize = 64;

/// One request/reply message: fixed header, typed body, opaque payload.
///
/// An envelope is an inert value. Constructing, encoding, and decoding one
/// involves no I/O and no shared state; correlation across envelopes is the
/// job of the layer above.
///
/// The header's code and the body type are mutually consistent only while
/// the caller pairs them correctly: decoding a frame with a body type that
/// does not match its code produces a garbage-but-valid body, not a crash.
/// Pick the body type from the header's code (see
/// [`EnvelopeHeader::peek`]) before decoding.
///
/// # Examples
///
/// ```
/// use courier_wire::{BodyDecodeError, Envelope, JobId, MsgKind, WireBody};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Seq {
///     value: u8,
/// }
///
/// impl WireBody for Seq {
///     fn merge_from(&mut self, buf: &[u8]) -> Result<usize, BodyDecodeError> {
///         let byte = buf.first().ok_or_else(|| BodyDecodeError::new("empty body"))?;
///         self.value = *byte;
///         Ok(1)
///     }
///
///     fn encode_to_vec(&self) -> Vec<u8> {
///         vec![self.value]
///     }
/// }
///
/// let mut request: Envelope<Seq> = Envelope::new_request(MsgKind::SessionHello);
/// request.body_mut().value = 7;
/// request.payload_mut().write(&[0xAA, 0xBB]);
///
/// let frame = request.encode();
/// let decoded: Envelope<Seq> = Envelope::decode(&frame).expect("decode");
///
/// assert_eq!(decoded.kind(), Some(MsgKind::SessionHello));
/// assert_eq!(decoded.body().value, 7);
/// assert_eq!(decoded.payload().as_bytes(), &[0xAA, 0xBB]);
/// assert_eq!(decoded.target_job_id(), JobId::NONE);
/// ```
#[derive(Debug, Clone)]
pub struct Envelope<B> {
    header: EnvelopeHeader,
    body: B,
    payload: PayloadSlice,
}

impl<B: WireBody> Envelope<B> {
    /// Create a new outgoing request envelope.
    ///
    /// The header takes the kind's code, both job ids start at the
    /// sentinel, the body is the type's default instance, and the payload
    /// is empty with the default capacity reserve.
    pub fn new_request(kind: MsgKind) -> Self {
        Self::new_request_with_capacity(kind, DEFAULT_PAYLOAD_RESERVE)
    }

    /// As [`Envelope::new_request`], with an explicit payload reserve hint.
    pub fn new_request_with_capacity(kind: MsgKind, payload_reserve: usize) -> Self {
        Self {
            header: EnvelopeHeader::for_code(kind.code()),
            body: B::default(),
            payload: PayloadSlice::with_capacity(payload_reserve),
        }
    }

    /// Create a reply to a previously decoded request envelope.
    ///
    /// The reply's target job id is the request's source job id; the
    /// reply's own source job id stays at the sentinel until the layer
    /// above stamps one on.
    pub fn reply_to<R: WireBody>(kind: MsgKind, request: &Envelope<R>) -> Self {
        Self::reply_to_with_capacity(kind, request, DEFAULT_PAYLOAD_RESERVE)
    }

    /// As [`Envelope::reply_to`], with an explicit payload reserve hint.
    pub fn reply_to_with_capacity<R: WireBody>(
        kind: MsgKind,
        request: &Envelope<R>,
        payload_reserve: usize,
    ) -> Self {
        let mut reply = Self::new_request_with_capacity(kind, payload_reserve);
        reply.header.job_id_target = request.header.job_id_source;
        reply
    }

    /// Decode an inbound frame: header, then body, then payload capture.
    ///
    /// # Errors
    ///
    /// - `TruncatedInput` if the frame is shorter than the fixed header.
    /// - `NonProtoFrame` if the header flags legacy framing.
    /// - `MalformedBody` if the body's decoder rejects its byte range.
    pub fn decode(frame: &[u8]) -> Result<Self, WireError> {
        let mut cursor = ByteCursor::new(frame);

        let header = EnvelopeHeader::read_from(&mut cursor)?;
        if !header.proto {
            return Err(WireError::NonProtoFrame { code: header.code });
        }

        let body = decode_body::<B>(&mut cursor)?;
        let payload = PayloadSlice::from_bytes(cursor.rest().to_vec());

        Ok(Self {
            header,
            body,
            payload,
        })
    }

    /// Serialize to wire bytes: header, body, payload, in that order.
    ///
    /// No framing or length prefix is added; whole-message length belongs
    /// to the transport below.
    pub fn encode(&self) -> Vec<u8> {
        let body = self.body.encode_to_vec();
        let mut out = Vec::with_capacity(HEADER_SIZE + body.len() + self.payload.len());
        self.header.write_to(&mut out);
        out.extend_from_slice(&body);
        out.extend_from_slice(self.payload.as_bytes());
        out
    }

    /// The envelope's header.
    pub fn header(&self) -> &EnvelopeHeader {
        &self.header
    }

    /// Raw message code from the header.
    pub fn code(&self) -> u32 {
        self.header.code
    }

    /// The header's code resolved against the kind table.
    ///
    /// `None` for codes outside the table; absence is not an error.
    pub fn kind(&self) -> Option<MsgKind> {
        MsgKind::from_code(self.header.code)
    }

    /// Whether the body uses protobuf-style framing. Always true for
    /// envelopes this family constructs or accepts.
    pub fn is_proto(&self) -> bool {
        self.header.proto
    }

    /// Job id of this envelope's side of the exchange.
    pub fn source_job_id(&self) -> JobId {
        self.header.job_id_source
    }

    /// Set the source job id. The id is always explicit; pass
    /// [`JobId::NONE`] to clear correlation rather than omitting it.
    pub fn set_source_job_id(&mut self, job: JobId) {
        self.header.job_id_source = job;
    }

    /// Job id this envelope replies to.
    pub fn target_job_id(&self) -> JobId {
        self.header.job_id_target
    }

    /// Set the target job id. The id is always explicit; pass
    /// [`JobId::NONE`] to clear correlation rather than omitting it.
    pub fn set_target_job_id(&mut self, job: JobId) {
        self.header.job_id_target = job;
    }

    /// The typed body.
    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable access to the typed body, for populating a new request.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// The opaque trailing payload.
    pub fn payload(&self) -> &PayloadSlice {
        &self.payload
    }

    /// Mutable access to the payload, for reading or appending.
    pub fn payload_mut(&mut self) -> &mut PayloadSlice {
        &mut self.payload
    }

    /// Split the envelope into its parts.
    pub fn into_parts(self) -> (EnvelopeHeader, B, PayloadSlice) {
        (self.header, self.body, self.payload)
    }
}
