//! Message kind table for the coordinator envelope family.
//!
//! Every frame carries an integer wire code identifying its kind. The table
//! maps codes to named variants in both directions. Lookup by code returns
//! an `Option`: a code outside the table is expected traffic (a newer peer,
//! a kind this client does not handle) and is never an error here.

use serde::{Deserialize, Serialize};

/// Named message kinds and their wire codes.
///
/// The discriminant of each variant is its code on the wire. The set is
/// static lookup data compiled into the binary; `from_code` is a precomputed
/// match, not a scan.
///
/// # Examples
///
/// ```
/// use courier_wire::MsgKind;
///
/// assert_eq!(MsgKind::SessionHello.code(), 4006);
/// assert_eq!(MsgKind::from_code(4006), Some(MsgKind::SessionHello));
/// assert_eq!(MsgKind::from_code(9999), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum MsgKind {
    /// Client announces itself after the transport comes up.
    SessionHello = 4006,

    /// Service accepts the session and returns its version metadata.
    SessionWelcome = 4004,

    /// Periodic session liveness report in either direction.
    SessionStatus = 4009,

    /// Fetch a keyed record from the coordinator's store.
    StoreGet = 5210,

    /// Reply to [`MsgKind::StoreGet`].
    StoreGetReply = 5211,

    /// Write a keyed record to the coordinator's store.
    StorePut = 5212,

    /// Reply to [`MsgKind::StorePut`].
    StorePutReply = 5213,

    /// One-way notification; the raw payload carries the event data.
    EventNotify = 7300,
}

impl MsgKind {
    /// Wire code for this kind.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Look up a kind by wire code.
    ///
    /// Returns `None` for codes outside the table. Absence is not an error;
    /// callers decide whether to drop, log, or raise.
    pub const fn from_code(code: u32) -> Option<MsgKind> {
        match code {
            4006 => Some(MsgKind::SessionHello),
            4004 => Some(MsgKind::SessionWelcome),
            4009 => Some(MsgKind::SessionStatus),
            5210 => Some(MsgKind::StoreGet),
            5211 => Some(MsgKind::StoreGetReply),
            5212 => Some(MsgKind::StorePut),
            5213 => Some(MsgKind::StorePutReply),
            7300 => Some(MsgKind::EventNotify),
            _ => None,
        }
    }
}

impl std::fmt::Display for MsgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MsgKind::SessionHello => "SessionHello",
            MsgKind::SessionWelcome => "SessionWelcome",
            MsgKind::SessionStatus => "SessionStatus",
            MsgKind::StoreGet => "StoreGet",
            MsgKind::StoreGetReply => "StoreGetReply",
            MsgKind::StorePut => "StorePut",
            MsgKind::StorePutReply => "StorePutReply",
            MsgKind::EventNotify => "EventNotify",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MsgKind; 8] = [
        MsgKind::SessionHello,
        MsgKind::SessionWelcome,
        MsgKind::SessionStatus,
        MsgKind::StoreGet,
        MsgKind::StoreGetReply,
        MsgKind::StorePut,
        MsgKind::StorePutReply,
        MsgKind::EventNotify,
    ];

    #[test]
    fn test_code_lookup_roundtrip() {
        for kind in ALL {
            assert_eq!(MsgKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_code_is_none() {
        assert_eq!(MsgKind::from_code(0), None);
        assert_eq!(MsgKind::from_code(1), None);
        assert_eq!(MsgKind::from_code(9999), None);
        assert_eq!(MsgKind::from_code(u32::MAX), None);
    }

    #[test]
    fn test_codes_are_distinct() {
        for a in ALL {
            for b in ALL {
                if a != b {
                    assert_ne!(a.code(), b.code());
                }
            }
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(MsgKind::SessionHello.to_string(), "SessionHello");
        assert_eq!(MsgKind::StoreGetReply.to_string(), "StoreGetReply");
    }

    #[test]
    fn test_serde_roundtrip() {
        for kind in ALL {
            let json = serde_json::to_string(&kind).expect("serialize");
            let decoded: MsgKind = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(kind, decoded);
        }
    }
}
