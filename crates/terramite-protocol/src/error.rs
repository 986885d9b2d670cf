//! Error types for the protocol layer.

/// Errors that can occur while framing, decoding, or encoding packets.
///
/// Note what is *not* here: "need more data" is not an error. The frame
/// decoder signals it with `Ok(None)` because a partial frame is the
/// normal state of a TCP stream, not a failure. Everything in this enum
/// is fatal to the connection that produced it.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The frame's tag byte matches no packet kind the server decodes.
    ///
    /// Carries the raw tag so the log line tells you exactly which kind
    /// the client tried to send.
    #[error("unsupported packet kind {0}")]
    UnsupportedKind(u8),

    /// A packet body ended before all of its declared fields could be
    /// read (short integer, missing color bytes, buff array under-run).
    #[error("truncated packet body")]
    Truncated,

    /// A string field's payload was not valid UTF-8.
    #[error("string field is not valid UTF-8")]
    InvalidString,

    /// A string was too long for its one-byte embedded length prefix.
    /// Only reachable on encode; decoded strings are bounded by the
    /// frame length, which is itself a `u16`.
    #[error("string of {0} bytes exceeds the one-byte length prefix")]
    StringTooLong(usize),

    /// The frame header declared a total length smaller than the header
    /// itself. A conforming peer can never produce this, so it is
    /// treated as stream corruption rather than stalling the decoder.
    #[error("declared frame length {0} is shorter than the 3-byte header")]
    InvalidFrameLength(u16),

    /// An encoded frame would not fit in the `u16` length field.
    #[error("encoded frame of {0} bytes exceeds the u16 length field")]
    FrameTooLarge(usize),
}
