//! The packet catalog: every message kind that travels on the wire.
//!
//! Each packet kind has a constant one-byte tag (a magic number fixed by
//! the wrapped protocol — never renumbered), an estimated body size used
//! purely as an allocation hint, and a fixed set of typed fields encoded
//! with the rules in [`crate::wire`].
//!
//! The catalog itself is the closed [`Packet`] enum. Decoding produces a
//! variant, and the dispatch layer matches exhaustively over the variants,
//! so a tag/type mismatch at a handler boundary is impossible by
//! construction: adding a kind without routing it is a compile error, not
//! a runtime surprise.
//!
//! Direction capability:
//! - *inbound* (server decodes): [`Connect`], [`RequestWorldData`],
//!   [`ClientUUID`]
//! - *outbound* (server encodes): [`SetUserSlot`]
//! - *bidirectional* (one layout, both directions): [`PlayerInfo`],
//!   [`PlayerInventorySlot`], [`PlayerHP`], [`PlayerMP`],
//!   [`UpdatePlayerBuff`]

use bytes::{Bytes, BytesMut};

use crate::wire::{
    read_wire_string, wire_string_width, write_wire_string, Color,
    WireRead, WireWrite,
};
use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Packet kinds
// ---------------------------------------------------------------------------

/// Client → Server. The first packet on every connection: the client's
/// protocol version string (e.g. "1.4.4.9").
///
/// The body is a single implicit-length string: one embedded length byte
/// followed by the version text, with the total extent implied by the
/// frame length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connect {
    pub version: String,
}

impl Connect {
    pub const TAG: u8 = 1;
    pub const ESTIMATED_SIZE: usize = 11;

    pub fn read_body(
        size: usize,
        buf: &mut Bytes,
    ) -> Result<Self, ProtocolError> {
        let version = read_wire_string(buf, size)?;
        Ok(Self { version })
    }

    pub fn write_body(
        &self,
        buf: &mut BytesMut,
    ) -> Result<(), ProtocolError> {
        write_wire_string(&self.version, buf)
    }
}

/// Server → Client. Tells a freshly connected client which slot number
/// (0–255) it now occupies. Sent in response to [`Connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetUserSlot {
    pub slot: u8,
}

impl SetUserSlot {
    pub const TAG: u8 = 3;
    pub const ESTIMATED_SIZE: usize = 1;

    pub fn read_body(
        _size: usize,
        buf: &mut Bytes,
    ) -> Result<Self, ProtocolError> {
        let slot = u8::read(buf)?;
        Ok(Self { slot })
    }

    pub fn write_body(
        &self,
        buf: &mut BytesMut,
    ) -> Result<(), ProtocolError> {
        self.slot.write(buf);
        Ok(())
    }
}

/// Bidirectional. A player's appearance and name.
///
/// The `name` string sits between fixed-width fields, so its extent is
/// recovered by subtracting [`PlayerInfo::FIXED_WIDTH`] — the summed
/// width of every other field — from the declared body size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerInfo {
    pub for_player: u8,
    pub skin_variant: u8,
    pub hair: u8,
    pub name: String,
    pub hair_dye: u8,
    pub hide_visuals: u8,
    pub hide_visuals2: u8,
    pub hide_misc: u8,
    pub hair_color: Color,
    pub skin_color: Color,
    pub eye_color: Color,
    pub shirt_color: Color,
    pub under_shirt_color: Color,
    pub pants_color: Color,
    pub shoe_color: Color,
    pub difficulty_flags: u8,
    pub torch_flags: u8,
}

impl PlayerInfo {
    pub const TAG: u8 = 4;
    pub const ESTIMATED_SIZE: usize = Self::FIXED_WIDTH + 16;

    /// Total wire width of every field except `name`: nine `u8`s and
    /// seven [`Color`]s. An explicit sum over the declared layout — if a
    /// field is added, this constant changes with it.
    pub const FIXED_WIDTH: usize =
        9 * <u8 as WireRead>::WIDTH + 7 * <Color as WireRead>::WIDTH;

    pub fn read_body(
        size: usize,
        buf: &mut Bytes,
    ) -> Result<Self, ProtocolError> {
        let for_player = u8::read(buf)?;
        let skin_variant = u8::read(buf)?;
        let hair = u8::read(buf)?;

        let name_width = size
            .checked_sub(Self::FIXED_WIDTH)
            .ok_or(ProtocolError::Truncated)?;
        let name = read_wire_string(buf, name_width)?;

        let hair_dye = u8::read(buf)?;
        let hide_visuals = u8::read(buf)?;
        let hide_visuals2 = u8::read(buf)?;
        let hide_misc = u8::read(buf)?;
        let hair_color = Color::read(buf)?;
        let skin_color = Color::read(buf)?;
        let eye_color = Color::read(buf)?;
        let shirt_color = Color::read(buf)?;
        let under_shirt_color = Color::read(buf)?;
        let pants_color = Color::read(buf)?;
        let shoe_color = Color::read(buf)?;
        let difficulty_flags = u8::read(buf)?;
        let torch_flags = u8::read(buf)?;

        Ok(Self {
            for_player,
            skin_variant,
            hair,
            name,
            hair_dye,
            hide_visuals,
            hide_visuals2,
            hide_misc,
            hair_color,
            skin_color,
            eye_color,
            shirt_color,
            under_shirt_color,
            pants_color,
            shoe_color,
            difficulty_flags,
            torch_flags,
        })
    }

    pub fn write_body(
        &self,
        buf: &mut BytesMut,
    ) -> Result<(), ProtocolError> {
        self.for_player.write(buf);
        self.skin_variant.write(buf);
        self.hair.write(buf);
        write_wire_string(&self.name, buf)?;
        self.hair_dye.write(buf);
        self.hide_visuals.write(buf);
        self.hide_visuals2.write(buf);
        self.hide_misc.write(buf);
        self.hair_color.write(buf);
        self.skin_color.write(buf);
        self.eye_color.write(buf);
        self.shirt_color.write(buf);
        self.under_shirt_color.write(buf);
        self.pants_color.write(buf);
        self.shoe_color.write(buf);
        self.difficulty_flags.write(buf);
        self.torch_flags.write(buf);
        Ok(())
    }
}

/// Bidirectional. One inventory slot of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInventorySlot {
    pub for_player: u8,
    pub slot_id: i16,
    pub stack: i16,
    pub prefix: u8,
    pub net_id: u16,
}

impl PlayerInventorySlot {
    pub const TAG: u8 = 5;
    pub const ESTIMATED_SIZE: usize = 8;

    pub fn read_body(
        _size: usize,
        buf: &mut Bytes,
    ) -> Result<Self, ProtocolError> {
        let for_player = u8::read(buf)?;
        let slot_id = i16::read(buf)?;
        let stack = i16::read(buf)?;
        let prefix = u8::read(buf)?;
        let net_id = u16::read(buf)?;
        Ok(Self {
            for_player,
            slot_id,
            stack,
            prefix,
            net_id,
        })
    }

    pub fn write_body(
        &self,
        buf: &mut BytesMut,
    ) -> Result<(), ProtocolError> {
        self.for_player.write(buf);
        self.slot_id.write(buf);
        self.stack.write(buf);
        self.prefix.write(buf);
        self.net_id.write(buf);
        Ok(())
    }
}

/// Client → Server. Asks the server to send world data. Empty body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestWorldData;

impl RequestWorldData {
    pub const TAG: u8 = 6;
    pub const ESTIMATED_SIZE: usize = 0;

    pub fn read_body(
        _size: usize,
        _buf: &mut Bytes,
    ) -> Result<Self, ProtocolError> {
        Ok(Self)
    }

    pub fn write_body(
        &self,
        _buf: &mut BytesMut,
    ) -> Result<(), ProtocolError> {
        Ok(())
    }
}

/// Bidirectional. A player's current and maximum health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHP {
    pub for_player: u8,
    pub hp: i16,
    pub max_hp: i16,
}

impl PlayerHP {
    pub const TAG: u8 = 16;
    pub const ESTIMATED_SIZE: usize = 5;

    pub fn read_body(
        _size: usize,
        buf: &mut Bytes,
    ) -> Result<Self, ProtocolError> {
        let for_player = u8::read(buf)?;
        let hp = i16::read(buf)?;
        let max_hp = i16::read(buf)?;
        Ok(Self {
            for_player,
            hp,
            max_hp,
        })
    }

    pub fn write_body(
        &self,
        buf: &mut BytesMut,
    ) -> Result<(), ProtocolError> {
        self.for_player.write(buf);
        self.hp.write(buf);
        self.max_hp.write(buf);
        Ok(())
    }
}

/// Bidirectional. A player's current and maximum mana.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerMP {
    pub for_player: u8,
    pub mp: i16,
    pub max_mp: i16,
}

impl PlayerMP {
    pub const TAG: u8 = 42;
    pub const ESTIMATED_SIZE: usize = 5;

    pub fn read_body(
        _size: usize,
        buf: &mut Bytes,
    ) -> Result<Self, ProtocolError> {
        let for_player = u8::read(buf)?;
        let mp = i16::read(buf)?;
        let max_mp = i16::read(buf)?;
        Ok(Self {
            for_player,
            mp,
            max_mp,
        })
    }

    pub fn write_body(
        &self,
        buf: &mut BytesMut,
    ) -> Result<(), ProtocolError> {
        self.for_player.write(buf);
        self.mp.write(buf);
        self.max_mp.write(buf);
        Ok(())
    }
}

/// Bidirectional. The full buff list of one player — always exactly
/// [`UpdatePlayerBuff::BUFF_SLOTS`] entries regardless of content. A body
/// with fewer entries fails the whole packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePlayerBuff {
    pub for_player: u8,
    pub buffs: [u16; Self::BUFF_SLOTS],
}

impl UpdatePlayerBuff {
    pub const TAG: u8 = 50;
    pub const ESTIMATED_SIZE: usize = 45;

    /// Number of buff slots carried per player.
    pub const BUFF_SLOTS: usize = 22;

    pub fn read_body(
        _size: usize,
        buf: &mut Bytes,
    ) -> Result<Self, ProtocolError> {
        let for_player = u8::read(buf)?;
        let mut buffs = [0u16; Self::BUFF_SLOTS];
        for buff in &mut buffs {
            *buff = u16::read(buf)?;
        }
        Ok(Self { for_player, buffs })
    }

    pub fn write_body(
        &self,
        buf: &mut BytesMut,
    ) -> Result<(), ProtocolError> {
        self.for_player.write(buf);
        for buff in &self.buffs {
            buff.write(buf);
        }
        Ok(())
    }
}

/// Client → Server. The client's persistent UUID string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientUUID {
    pub uuid: String,
}

impl ClientUUID {
    pub const TAG: u8 = 68;
    pub const ESTIMATED_SIZE: usize = 32;

    pub fn read_body(
        size: usize,
        buf: &mut Bytes,
    ) -> Result<Self, ProtocolError> {
        let uuid = read_wire_string(buf, size)?;
        Ok(Self { uuid })
    }

    pub fn write_body(
        &self,
        buf: &mut BytesMut,
    ) -> Result<(), ProtocolError> {
        write_wire_string(&self.uuid, buf)
    }
}

// ---------------------------------------------------------------------------
// The catalog
// ---------------------------------------------------------------------------

/// A decoded (or to-be-encoded) packet: one variant per catalog entry.
///
/// Packets are transient value types — produced fresh per decode, consumed
/// once by a handler, never shared across connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Connect(Connect),
    SetUserSlot(SetUserSlot),
    PlayerInfo(PlayerInfo),
    PlayerInventorySlot(PlayerInventorySlot),
    RequestWorldData(RequestWorldData),
    PlayerHP(PlayerHP),
    PlayerMP(PlayerMP),
    UpdatePlayerBuff(UpdatePlayerBuff),
    ClientUUID(ClientUUID),
}

impl Packet {
    /// The one-byte type tag this packet travels under.
    pub fn tag(&self) -> u8 {
        match self {
            Packet::Connect(_) => Connect::TAG,
            Packet::SetUserSlot(_) => SetUserSlot::TAG,
            Packet::PlayerInfo(_) => PlayerInfo::TAG,
            Packet::PlayerInventorySlot(_) => PlayerInventorySlot::TAG,
            Packet::RequestWorldData(_) => RequestWorldData::TAG,
            Packet::PlayerHP(_) => PlayerHP::TAG,
            Packet::PlayerMP(_) => PlayerMP::TAG,
            Packet::UpdatePlayerBuff(_) => UpdatePlayerBuff::TAG,
            Packet::ClientUUID(_) => ClientUUID::TAG,
        }
    }

    /// Allocation hint for the encoder. Not an enforced bound — variable
    /// length strings can make the real body larger or smaller.
    pub fn estimated_size(&self) -> usize {
        match self {
            Packet::Connect(p) => wire_string_width(&p.version),
            Packet::SetUserSlot(_) => SetUserSlot::ESTIMATED_SIZE,
            Packet::PlayerInfo(_) => PlayerInfo::ESTIMATED_SIZE,
            Packet::PlayerInventorySlot(_) => {
                PlayerInventorySlot::ESTIMATED_SIZE
            }
            Packet::RequestWorldData(_) => RequestWorldData::ESTIMATED_SIZE,
            Packet::PlayerHP(_) => PlayerHP::ESTIMATED_SIZE,
            Packet::PlayerMP(_) => PlayerMP::ESTIMATED_SIZE,
            Packet::UpdatePlayerBuff(_) => UpdatePlayerBuff::ESTIMATED_SIZE,
            Packet::ClientUUID(p) => wire_string_width(&p.uuid),
        }
    }

    /// Constructs a packet from a frame body, by tag.
    ///
    /// Only *inbound* and *bidirectional* kinds appear here — this is the
    /// table of what the server is willing to decode. [`SetUserSlot`]
    /// (outbound-only) and every unknown tag fall through to
    /// [`ProtocolError::UnsupportedKind`].
    ///
    /// `size` is the body length declared by the frame header; string
    /// fields derive their extent from it.
    pub fn decode_body(
        tag: u8,
        size: usize,
        buf: &mut Bytes,
    ) -> Result<Self, ProtocolError> {
        match tag {
            Connect::TAG => {
                Connect::read_body(size, buf).map(Packet::Connect)
            }
            PlayerInfo::TAG => {
                PlayerInfo::read_body(size, buf).map(Packet::PlayerInfo)
            }
            PlayerInventorySlot::TAG => {
                PlayerInventorySlot::read_body(size, buf)
                    .map(Packet::PlayerInventorySlot)
            }
            RequestWorldData::TAG => RequestWorldData::read_body(size, buf)
                .map(Packet::RequestWorldData),
            PlayerHP::TAG => {
                PlayerHP::read_body(size, buf).map(Packet::PlayerHP)
            }
            PlayerMP::TAG => {
                PlayerMP::read_body(size, buf).map(Packet::PlayerMP)
            }
            UpdatePlayerBuff::TAG => UpdatePlayerBuff::read_body(size, buf)
                .map(Packet::UpdatePlayerBuff),
            ClientUUID::TAG => {
                ClientUUID::read_body(size, buf).map(Packet::ClientUUID)
            }
            other => Err(ProtocolError::UnsupportedKind(other)),
        }
    }

    /// Serializes this packet's body (no frame header).
    ///
    /// Every kind can encode — bidirectional kinds reuse the one layout
    /// for both directions, and inbound-only kinds keep their encoders so
    /// the codec stays symmetric (and testable) end to end.
    pub fn write_body(
        &self,
        buf: &mut BytesMut,
    ) -> Result<(), ProtocolError> {
        match self {
            Packet::Connect(p) => p.write_body(buf),
            Packet::SetUserSlot(p) => p.write_body(buf),
            Packet::PlayerInfo(p) => p.write_body(buf),
            Packet::PlayerInventorySlot(p) => p.write_body(buf),
            Packet::RequestWorldData(p) => p.write_body(buf),
            Packet::PlayerHP(p) => p.write_body(buf),
            Packet::PlayerMP(p) => p.write_body(buf),
            Packet::UpdatePlayerBuff(p) => p.write_body(buf),
            Packet::ClientUUID(p) => p.write_body(buf),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Encodes a packet's body and decodes it back through the catalog,
    /// asserting the result is identical and the body was fully consumed.
    fn body_round_trip(packet: Packet) {
        let mut buf = BytesMut::new();
        packet.write_body(&mut buf).expect("body should encode");
        let size = buf.len();

        let mut bytes = buf.freeze();
        let decoded = Packet::decode_body(packet.tag(), size, &mut bytes)
            .expect("body should decode");

        assert_eq!(decoded, packet);
        assert!(bytes.is_empty(), "decode must consume the whole body");
    }

    fn sample_player_info(name: &str) -> PlayerInfo {
        PlayerInfo {
            for_player: 3,
            skin_variant: 1,
            hair: 42,
            name: name.to_string(),
            hair_dye: 2,
            hide_visuals: 0,
            hide_visuals2: 0b1010,
            hide_misc: 1,
            hair_color: Color { red: 1, green: 2, blue: 3 },
            skin_color: Color { red: 255, green: 220, blue: 185 },
            eye_color: Color { red: 10, green: 20, blue: 30 },
            shirt_color: Color { red: 0, green: 0, blue: 255 },
            under_shirt_color: Color { red: 9, green: 8, blue: 7 },
            pants_color: Color { red: 100, green: 100, blue: 100 },
            shoe_color: Color { red: 50, green: 25, blue: 0 },
            difficulty_flags: 0b100,
            torch_flags: 0,
        }
    }

    // =====================================================================
    // Tag constants — fixed by the wrapped protocol
    // =====================================================================

    #[test]
    fn test_tags_match_the_wire_protocol() {
        assert_eq!(Connect::TAG, 1);
        assert_eq!(SetUserSlot::TAG, 3);
        assert_eq!(PlayerInfo::TAG, 4);
        assert_eq!(PlayerInventorySlot::TAG, 5);
        assert_eq!(RequestWorldData::TAG, 6);
        assert_eq!(PlayerHP::TAG, 16);
        assert_eq!(PlayerMP::TAG, 42);
        assert_eq!(UpdatePlayerBuff::TAG, 50);
        assert_eq!(ClientUUID::TAG, 68);
    }

    #[test]
    fn test_player_info_fixed_width_is_thirty() {
        // 9 single bytes + 7 three-byte colors.
        assert_eq!(PlayerInfo::FIXED_WIDTH, 30);
    }

    // =====================================================================
    // Round trips
    // =====================================================================

    #[test]
    fn test_connect_round_trip() {
        body_round_trip(Packet::Connect(Connect {
            version: "1.4.4.9".into(),
        }));
    }

    #[test]
    fn test_connect_empty_version_round_trip() {
        body_round_trip(Packet::Connect(Connect {
            version: String::new(),
        }));
    }

    #[test]
    fn test_client_uuid_round_trip() {
        body_round_trip(Packet::ClientUUID(ClientUUID {
            uuid: "f47ac10b-58cc-4372-a567-0e02b2c3d479".into(),
        }));
    }

    #[test]
    fn test_player_hp_round_trip() {
        body_round_trip(Packet::PlayerHP(PlayerHP {
            for_player: 0,
            hp: -1,
            max_hp: i16::MAX,
        }));
    }

    #[test]
    fn test_player_mp_round_trip() {
        body_round_trip(Packet::PlayerMP(PlayerMP {
            for_player: 255,
            mp: i16::MIN,
            max_mp: 200,
        }));
    }

    #[test]
    fn test_player_inventory_slot_round_trip() {
        body_round_trip(Packet::PlayerInventorySlot(PlayerInventorySlot {
            for_player: 7,
            slot_id: -3,
            stack: 999,
            prefix: 81,
            net_id: u16::MAX,
        }));
    }

    #[test]
    fn test_update_player_buff_round_trip() {
        let mut buffs = [0u16; UpdatePlayerBuff::BUFF_SLOTS];
        for (i, b) in buffs.iter_mut().enumerate() {
            *b = (i * 3) as u16;
        }
        body_round_trip(Packet::UpdatePlayerBuff(UpdatePlayerBuff {
            for_player: 12,
            buffs,
        }));
    }

    #[test]
    fn test_request_world_data_round_trip() {
        body_round_trip(Packet::RequestWorldData(RequestWorldData));
    }

    #[test]
    fn test_player_info_round_trip() {
        body_round_trip(Packet::PlayerInfo(sample_player_info("Redigit")));
    }

    #[test]
    fn test_player_info_empty_name_round_trip() {
        body_round_trip(Packet::PlayerInfo(sample_player_info("")));
    }

    // =====================================================================
    // Name splitting in PlayerInfo
    // =====================================================================

    #[test]
    fn test_player_info_name_width_comes_from_body_size() {
        let info = sample_player_info("abc");
        let mut buf = BytesMut::new();
        info.write_body(&mut buf).unwrap();
        // Fixed fields + prefix byte + 3 name bytes.
        assert_eq!(buf.len(), PlayerInfo::FIXED_WIDTH + 4);

        let size = buf.len();
        let mut bytes = buf.freeze();
        let decoded = PlayerInfo::read_body(size, &mut bytes).unwrap();
        assert_eq!(decoded.name, "abc");
        assert_eq!(decoded.torch_flags, info.torch_flags);
    }

    #[test]
    fn test_player_info_body_smaller_than_fixed_width_fails() {
        // A body too short to even hold the fixed fields cannot contain
        // a name of any length.
        let mut bytes = Bytes::copy_from_slice(&[0u8; 10]);
        let result = PlayerInfo::read_body(10, &mut bytes);
        assert_eq!(result, Err(ProtocolError::Truncated));
    }

    // =====================================================================
    // Malformed bodies
    // =====================================================================

    #[test]
    fn test_buff_array_under_run_fails_whole_packet() {
        // One buff short of the required 22.
        let mut buf = BytesMut::new();
        buf.extend_from_slice(&[5u8]);
        for _ in 0..(UpdatePlayerBuff::BUFF_SLOTS - 1) {
            buf.extend_from_slice(&[0, 0]);
        }
        let size = buf.len();
        let mut bytes = buf.freeze();
        let result =
            Packet::decode_body(UpdatePlayerBuff::TAG, size, &mut bytes);
        assert_eq!(result, Err(ProtocolError::Truncated));
    }

    #[test]
    fn test_player_hp_short_body_fails() {
        let mut bytes = Bytes::copy_from_slice(&[1, 100]);
        let result = Packet::decode_body(PlayerHP::TAG, 2, &mut bytes);
        assert_eq!(result, Err(ProtocolError::Truncated));
    }

    // =====================================================================
    // Catalog membership
    // =====================================================================

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let mut bytes = Bytes::copy_from_slice(&[0u8; 4]);
        let result = Packet::decode_body(0xFE, 4, &mut bytes);
        assert_eq!(result, Err(ProtocolError::UnsupportedKind(0xFE)));
    }

    #[test]
    fn test_set_user_slot_is_not_decodable() {
        // Outbound-only: the server encodes SetUserSlot but refuses to
        // decode it from a client.
        let mut bytes = Bytes::copy_from_slice(&[0]);
        let result = Packet::decode_body(SetUserSlot::TAG, 1, &mut bytes);
        assert_eq!(
            result,
            Err(ProtocolError::UnsupportedKind(SetUserSlot::TAG))
        );
    }

    #[test]
    fn test_packet_tag_matches_constructor_tag() {
        let packets = [
            Packet::Connect(Connect { version: "v".into() }),
            Packet::SetUserSlot(SetUserSlot { slot: 0 }),
            Packet::RequestWorldData(RequestWorldData),
            Packet::PlayerHP(PlayerHP { for_player: 0, hp: 1, max_hp: 1 }),
        ];
        assert_eq!(packets[0].tag(), 1);
        assert_eq!(packets[1].tag(), 3);
        assert_eq!(packets[2].tag(), 6);
        assert_eq!(packets[3].tag(), 16);
    }

    #[test]
    fn test_estimated_size_tracks_string_length_for_connect() {
        let p = Packet::Connect(Connect { version: "1.4.4.9".into() });
        // Prefix byte + 7 payload bytes.
        assert_eq!(p.estimated_size(), 8);
    }
}
