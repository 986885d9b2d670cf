//! Field-level wire codec: the encode/decode rules for every primitive
//! that appears in a packet body.
//!
//! All integers on the wire are fixed-width little-endian. Strings use the
//! protocol's implicit length-prefix convention (see [`read_wire_string`]),
//! and colors are three raw bytes. Each type knows its own byte width as a
//! `const`, so composite packets can compute their fixed width as an
//! explicit compile-time sum instead of introspecting anything at runtime.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::ProtocolError;

/// Size of the frame header: a `u16` length followed by a `u8` tag.
///
/// The length field counts from its own first byte, so a frame's body is
/// always exactly `length - HEADER_SIZE` bytes.
pub const HEADER_SIZE: usize = size_of::<u16>() + size_of::<u8>();

/// A field type that can be decoded from a packet body.
///
/// Reads are atomic: `read` either consumes exactly [`WIDTH`](Self::WIDTH)
/// bytes and succeeds, or fails with [`ProtocolError::Truncated`]. There is
/// no partial consumption — a failed field read fails the whole packet,
/// and the frame decoder has already split the body off the stream.
pub trait WireRead: Sized {
    /// Exact number of bytes this type occupies on the wire.
    const WIDTH: usize;

    /// Decodes one value from the front of `buf`.
    ///
    /// # Errors
    /// [`ProtocolError::Truncated`] if fewer than `WIDTH` bytes remain.
    fn read(buf: &mut Bytes) -> Result<Self, ProtocolError>;
}

/// A field type that can be encoded into a packet body.
///
/// Appends exactly the number of bytes [`WireRead::read`] would consume
/// (fixed-width types only; strings are handled separately because their
/// width depends on the value).
pub trait WireWrite {
    /// Appends this value's wire representation to `buf`.
    fn write(&self, buf: &mut BytesMut);
}

impl WireRead for u8 {
    const WIDTH: usize = 1;

    fn read(buf: &mut Bytes) -> Result<Self, ProtocolError> {
        if buf.remaining() < Self::WIDTH {
            return Err(ProtocolError::Truncated);
        }
        Ok(buf.get_u8())
    }
}

impl WireWrite for u8 {
    fn write(&self, buf: &mut BytesMut) {
        buf.put_u8(*self);
    }
}

impl WireRead for u16 {
    const WIDTH: usize = 2;

    fn read(buf: &mut Bytes) -> Result<Self, ProtocolError> {
        if buf.remaining() < Self::WIDTH {
            return Err(ProtocolError::Truncated);
        }
        Ok(buf.get_u16_le())
    }
}

impl WireWrite for u16 {
    fn write(&self, buf: &mut BytesMut) {
        buf.put_u16_le(*self);
    }
}

impl WireRead for i16 {
    const WIDTH: usize = 2;

    fn read(buf: &mut Bytes) -> Result<Self, ProtocolError> {
        if buf.remaining() < Self::WIDTH {
            return Err(ProtocolError::Truncated);
        }
        Ok(buf.get_i16_le())
    }
}

impl WireWrite for i16 {
    fn write(&self, buf: &mut BytesMut) {
        buf.put_i16_le(*self);
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A 3-byte RGB triple. No alpha channel on the wire.
///
/// Serialized as three raw bytes, red then green then blue. The `Default`
/// (black) exists so a zeroed value is always constructible; message
/// contents always come from a decode or from game logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl WireRead for Color {
    const WIDTH: usize = 3 * <u8 as WireRead>::WIDTH;

    fn read(buf: &mut Bytes) -> Result<Self, ProtocolError> {
        let red = u8::read(buf)?;
        let green = u8::read(buf)?;
        let blue = u8::read(buf)?;
        Ok(Self { red, green, blue })
    }
}

impl WireWrite for Color {
    fn write(&self, buf: &mut BytesMut) {
        buf.put_u8(self.red);
        buf.put_u8(self.green);
        buf.put_u8(self.blue);
    }
}

// ---------------------------------------------------------------------------
// Strings — the implicit length-prefix convention
// ---------------------------------------------------------------------------

/// Decodes a string field occupying exactly `len` bytes of the body.
///
/// Strings in this protocol are not null-terminated and their extent is
/// implied by the frame length, *but* the wire format also embeds one
/// leading length byte that belongs to the string's own encoding. That
/// byte is read and discarded here — the string's real extent comes from
/// `len`, which the caller derives from the frame header (minus any
/// fixed-width fields around the string). An easy convention to get
/// wrong: the prefix byte is part of the field, not part of the payload.
///
/// A zero-length field decodes as the empty string (there is no prefix
/// byte to strip).
///
/// # Errors
/// - [`ProtocolError::Truncated`] if `buf` holds fewer than `len` bytes.
/// - [`ProtocolError::InvalidString`] if the payload is not UTF-8.
pub fn read_wire_string(
    buf: &mut Bytes,
    len: usize,
) -> Result<String, ProtocolError> {
    if buf.remaining() < len {
        return Err(ProtocolError::Truncated);
    }
    if len == 0 {
        return Ok(String::new());
    }
    let mut field = buf.split_to(len);
    field.advance(1); // the string's own embedded length byte
    String::from_utf8(field.to_vec())
        .map_err(|_| ProtocolError::InvalidString)
}

/// Encodes a string field: one length byte, then the raw UTF-8 bytes.
///
/// The total wire width is `1 + s.len()` bytes, which is exactly what
/// [`read_wire_string`] consumes when handed that width back.
///
/// # Errors
/// [`ProtocolError::StringTooLong`] if the string exceeds 255 bytes —
/// the most a one-byte prefix can describe.
pub fn write_wire_string(
    s: &str,
    buf: &mut BytesMut,
) -> Result<(), ProtocolError> {
    let len = s.len();
    if len > u8::MAX as usize {
        return Err(ProtocolError::StringTooLong(len));
    }
    buf.put_u8(len as u8);
    buf.put_slice(s.as_bytes());
    Ok(())
}

/// The number of body bytes [`write_wire_string`] produces for `s`.
pub fn wire_string_width(s: &str) -> usize {
    1 + s.len()
}

// =========================================================================
// Tests
// =========================================================================
