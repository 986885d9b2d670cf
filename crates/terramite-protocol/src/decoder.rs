//! The streaming frame decoder: turns an unbounded byte stream into
//! discrete, typed packets.
//!
//! TCP delivers arbitrary chunk boundaries — a frame can arrive one byte
//! at a time, or ten frames can arrive in one read. The decoder is a
//! resumable state machine so that every call picks up exactly where the
//! last one left off, without re-consuming or losing bytes:
//!
//! ```text
//! AwaitingHeader ──(2 bytes)──→ AwaitingTag ──(1 byte)──→ AwaitingBody
//!       ↑                                                      │
//!       └──────────────(body complete, packet emitted)─────────┘
//! ```
//!
//! Each field read is atomic: the `u16` length is not consumed until both
//! of its bytes are buffered, so a multi-byte field is never torn across
//! two network reads.

use bytes::{Buf, BytesMut};

use crate::wire::HEADER_SIZE;
use crate::{Packet, ProtocolError};

/// Where the decoder is within the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    /// Waiting for the 2-byte little-endian total length.
    AwaitingHeader,
    /// Length consumed; waiting for the 1-byte tag.
    AwaitingTag { frame_len: usize },
    /// Header fully consumed; waiting for `frame_len - 3` body bytes.
    /// Monotonic: re-entering here never re-reads length or tag.
    AwaitingBody { frame_len: usize, tag: u8 },
}

/// A resumable frame decoder for one connection's byte stream.
///
/// Owned exclusively by that connection's task — decoder state is never
/// shared, so no locking is involved here.
///
/// # Usage
///
/// Append received bytes to a [`BytesMut`] and drain it:
///
/// ```
/// use bytes::BytesMut;
/// use terramite_protocol::{FrameDecoder, Packet};
///
/// let mut decoder = FrameDecoder::new();
/// let mut buf = BytesMut::from(&[0x04, 0x00, 0x06, 0x00][..]);
///
/// let packet = decoder.decode(&mut buf).unwrap();
/// assert!(matches!(packet, Some(Packet::RequestWorldData(_))));
/// assert_eq!(decoder.decode(&mut buf).unwrap(), None); // need more data
/// ```
#[derive(Debug)]
pub struct FrameDecoder {
    state: ReadState,
}

impl FrameDecoder {
    /// Creates a decoder awaiting the start of a frame.
    pub fn new() -> Self {
        Self {
            state: ReadState::AwaitingHeader,
        }
    }

    /// Returns `true` if the decoder is between frames (no partially
    /// consumed header). This holds after every emitted packet and after
    /// every error — an error resets the state machine before it is
    /// signalled, so a recovering caller starts from a clean slate.
    pub fn is_idle(&self) -> bool {
        self.state == ReadState::AwaitingHeader
    }

    /// Attempts to decode one packet from the front of `buf`.
    ///
    /// Returns:
    /// - `Ok(Some(packet))` — a full frame was consumed and decoded. Call
    ///   again: the buffer may hold more frames from the same read.
    /// - `Ok(None)` — need more data. Not an error; nothing the caller
    ///   can observe has been lost, and the next call resumes here.
    /// - `Err(_)` — unsupported tag or malformed body. Fatal to the
    ///   connection. The frame's bytes have been consumed and the decoder
    ///   reset; there is no resynchronization by scanning for a plausible
    ///   next header.
    pub fn decode(
        &mut self,
        buf: &mut BytesMut,
    ) -> Result<Option<Packet>, ProtocolError> {
        if self.state == ReadState::AwaitingHeader {
            if buf.len() < size_of::<u16>() {
                return Ok(None);
            }
            let frame_len = buf.get_u16_le();
            self.state = ReadState::AwaitingTag {
                frame_len: frame_len as usize,
            };
        }

        if let ReadState::AwaitingTag { frame_len } = self.state {
            if buf.is_empty() {
                return Ok(None);
            }
            let tag = buf.get_u8();
            self.state = ReadState::AwaitingBody { frame_len, tag };
        }

        let ReadState::AwaitingBody { frame_len, tag } = self.state else {
            return Ok(None);
        };

        // The length field counts the header itself, so it can never be
        // smaller than the header. A peer that sends one anyway has
        // corrupted the stream beyond recovery.
        let Some(body_len) = frame_len.checked_sub(HEADER_SIZE) else {
            self.state = ReadState::AwaitingHeader;
            return Err(ProtocolError::InvalidFrameLength(frame_len as u16));
        };

        if buf.len() < body_len {
            return Ok(None);
        }

        // Split off exactly the body — trailing bytes (the start of the
        // next frame) stay in the caller's buffer untouched.
        let mut body = buf.split_to(body_len).freeze();

        // Reset before constructing, so the state machine is already
        // clean when an unknown-tag or malformed-body error propagates.
        self.state = ReadState::AwaitingHeader;

        let packet = Packet::decode_body(tag, body_len, &mut body)?;
        Ok(Some(packet))
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::packets::{
        Connect, PlayerHP, PlayerInventorySlot, RequestWorldData,
        SetUserSlot,
    };

    fn sample_packets() -> Vec<Packet> {
        vec![
            Packet::Connect(Connect { version: "1.4.4.9".into() }),
            Packet::PlayerHP(PlayerHP {
                for_player: 2,
                hp: 100,
                max_hp: 400,
            }),
            Packet::RequestWorldData(RequestWorldData),
            Packet::PlayerInventorySlot(PlayerInventorySlot {
                for_player: 2,
                slot_id: 0,
                stack: 64,
                prefix: 0,
                net_id: 757,
            }),
        ]
    }

    /// Concatenates the encoded frames of all sample packets.
    fn sample_stream() -> Vec<u8> {
        let mut stream = Vec::new();
        for packet in sample_packets() {
            stream.extend_from_slice(&encode(&packet).unwrap());
        }
        stream
    }

    /// Drains every currently decodable packet out of `buf`.
    fn drain(
        decoder: &mut FrameDecoder,
        buf: &mut BytesMut,
    ) -> Vec<Packet> {
        let mut out = Vec::new();
        while let Some(packet) = decoder.decode(buf).unwrap() {
            out.push(packet);
        }
        out
    }

    // =====================================================================
    // Happy path
    // =====================================================================

    #[test]
    fn test_decode_single_frame_all_at_once() {
        let mut decoder = FrameDecoder::new();
        let mut buf = BytesMut::from(
            &[0x0B, 0x00, 0x01, 0x07, b'1', b'.', b'4', b'.', b'4', b'.',
                b'9'][..],
        );

        let packet = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(
            packet,
            Packet::Connect(Connect { version: "1.4.4.9".into() })
        );
        assert!(buf.is_empty());
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_decode_multiple_frames_from_one_read() {
        let mut decoder = FrameDecoder::new();
        let mut buf = BytesMut::from(&sample_stream()[..]);

        let decoded = drain(&mut decoder, &mut buf);

        assert_eq!(decoded, sample_packets());
        assert!(buf.is_empty());
    }

    // =====================================================================
    // Resumability — the core framing property
    // =====================================================================

    #[test]
    fn test_decode_one_byte_at_a_time_yields_same_packets() {
        let stream = sample_stream();
        let mut decoder = FrameDecoder::new();
        let mut buf = BytesMut::new();
        let mut decoded = Vec::new();

        for byte in stream {
            buf.extend_from_slice(&[byte]);
            decoded.extend(drain(&mut decoder, &mut buf));
        }

        assert_eq!(decoded, sample_packets());
    }

    #[test]
    fn test_decode_split_at_every_boundary_yields_same_packets() {
        // Split the whole stream at every possible single split point.
        let stream = sample_stream();
        for split in 0..=stream.len() {
            let mut decoder = FrameDecoder::new();
            let mut buf = BytesMut::new();
            let mut decoded = Vec::new();

            buf.extend_from_slice(&stream[..split]);
            decoded.extend(drain(&mut decoder, &mut buf));
            buf.extend_from_slice(&stream[split..]);
            decoded.extend(drain(&mut decoder, &mut buf));

            assert_eq!(
                decoded,
                sample_packets(),
                "split at byte {split} changed the decoded sequence"
            );
        }
    }

    #[test]
    fn test_length_field_not_consumed_until_both_bytes_present() {
        let mut decoder = FrameDecoder::new();
        // Only the first byte of the u16 length.
        let mut buf = BytesMut::from(&[0x04u8][..]);

        assert_eq!(decoder.decode(&mut buf).unwrap(), None);
        // The byte must still be there — the read is atomic per field.
        assert_eq!(&buf[..], &[0x04]);
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_header_consumed_once_across_partial_body_reads() {
        let mut decoder = FrameDecoder::new();
        let frame =
            encode(&Packet::PlayerHP(PlayerHP {
                for_player: 1,
                hp: 50,
                max_hp: 100,
            }))
            .unwrap();

        // Feed the header plus one body byte, then poll repeatedly.
        let mut buf = BytesMut::from(&frame[..4]);
        assert_eq!(decoder.decode(&mut buf).unwrap(), None);
        assert_eq!(decoder.decode(&mut buf).unwrap(), None);
        assert!(!decoder.is_idle());

        // Deliver the rest; the packet comes out exactly once.
        buf.extend_from_slice(&frame[4..]);
        let packet = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(
            packet,
            Packet::PlayerHP(PlayerHP {
                for_player: 1,
                hp: 50,
                max_hp: 100,
            })
        );
    }

    #[test]
    fn test_trailing_bytes_left_untouched() {
        let mut decoder = FrameDecoder::new();
        let mut stream = encode(&Packet::RequestWorldData(RequestWorldData))
            .unwrap()
            .to_vec();
        stream.extend_from_slice(&[0x0B, 0x00]); // start of a next frame
        let mut buf = BytesMut::from(&stream[..]);

        decoder.decode(&mut buf).unwrap().unwrap();

        assert_eq!(&buf[..], &[0x0B, 0x00]);
    }

    // =====================================================================
    // Errors
    // =====================================================================

    #[test]
    fn test_unknown_tag_errors_with_the_tag_and_resets() {
        let mut decoder = FrameDecoder::new();
        // length=4, tag=0x63, 1-byte body.
        let mut buf = BytesMut::from(&[0x04, 0x00, 0x63, 0x00][..]);

        let err = decoder.decode(&mut buf).unwrap_err();
        assert_eq!(err, ProtocolError::UnsupportedKind(0x63));

        // Reset-then-signal: inspecting the decoder post-error sees a
        // clean slate, and a well-formed next frame decodes fine.
        assert!(decoder.is_idle());
        buf.extend_from_slice(&encode(&Packet::RequestWorldData(
            RequestWorldData,
        ))
        .unwrap());
        let packet = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(packet, Packet::RequestWorldData(RequestWorldData));
    }

    #[test]
    fn test_malformed_body_errors_and_resets() {
        let mut decoder = FrameDecoder::new();
        // PlayerHP declares a 5-byte body but this frame carries only 2.
        let mut buf = BytesMut::from(&[0x05, 0x00, 0x10, 0x01, 0x64][..]);

        let err = decoder.decode(&mut buf).unwrap_err();
        assert_eq!(err, ProtocolError::Truncated);
        assert!(decoder.is_idle());
        assert!(buf.is_empty(), "the bad frame's bytes are consumed");
    }

    #[test]
    fn test_declared_length_below_header_size_is_an_error() {
        let mut decoder = FrameDecoder::new();
        // length=2 < 3: impossible from a conforming peer.
        let mut buf = BytesMut::from(&[0x02, 0x00, 0x01][..]);

        let err = decoder.decode(&mut buf).unwrap_err();
        assert_eq!(err, ProtocolError::InvalidFrameLength(2));
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_empty_buffer_needs_more_data() {
        let mut decoder = FrameDecoder::new();
        let mut buf = BytesMut::new();
        assert_eq!(decoder.decode(&mut buf).unwrap(), None);
    }

    // =====================================================================
    // The documented connect exchange
    // =====================================================================

    #[test]
    fn test_connect_frame_decodes_and_slot_reply_encodes() {
        // Client sends Connect("1.4.4.9"); the server's reply assigning
        // slot 0 is the 4-byte frame 04 00 03 00.
        let mut decoder = FrameDecoder::new();
        let mut buf = BytesMut::from(
            &[0x0B, 0x00, 0x01, 0x07, b'1', b'.', b'4', b'.', b'4', b'.',
                b'9'][..],
        );

        let packet = decoder.decode(&mut buf).unwrap().unwrap();
        let Packet::Connect(connect) = packet else {
            panic!("expected Connect");
        };
        assert_eq!(connect.version, "1.4.4.9");

        let reply =
            encode(&Packet::SetUserSlot(SetUserSlot { slot: 0 })).unwrap();
        assert_eq!(&reply[..], &[0x04, 0x00, 0x03, 0x00]);
    }
}
