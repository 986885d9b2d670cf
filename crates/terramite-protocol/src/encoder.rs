//! The frame encoder: wraps a packet body in the wire envelope
//! `[length:u16 LE][tag:u8][body]`.

use bytes::{Bytes, BytesMut};

use crate::wire::HEADER_SIZE;
use crate::{Packet, ProtocolError};

/// Encodes one packet into a complete wire frame.
///
/// The body is written first, at an offset past the header, and the
/// header is backfilled afterwards — a two-pass write, because for
/// string-bearing packets the true body length is unknown until
/// serialization completes. The packet's size estimate only pre-sizes the
/// allocation; the real body may be larger or smaller.
///
/// The length field counts from its own first byte, so it is always
/// `3 + body_len`.
///
/// # Errors
/// - [`ProtocolError::StringTooLong`] if a string field exceeds its
///   one-byte prefix.
/// - [`ProtocolError::FrameTooLarge`] if the total frame would overflow
///   the `u16` length field.
pub fn encode(packet: &Packet) -> Result<Bytes, ProtocolError> {
    let mut buf =
        BytesMut::with_capacity(HEADER_SIZE + packet.estimated_size());
    buf.resize(HEADER_SIZE, 0);

    packet.write_body(&mut buf)?;

    let frame_len = buf.len();
    if frame_len > u16::MAX as usize {
        return Err(ProtocolError::FrameTooLarge(frame_len));
    }
    buf[..2].copy_from_slice(&(frame_len as u16).to_le_bytes());
    buf[2] = packet.tag();

    Ok(buf.freeze())
}

// =========================================================================
// Tests
// =========================================================================
