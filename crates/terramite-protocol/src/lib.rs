//! Wire protocol for Terramite.
//!
//! This crate is the protocol engine in full: it knows how bytes become
//! packets and packets become bytes, and nothing about sockets, slots, or
//! game logic.
//!
//! - **Wire codec** ([`wire`]) — per-field encode/decode rules:
//!   little-endian fixed-width integers, 3-byte [`Color`]s, and the
//!   implicit length-prefix string convention.
//! - **Packet catalog** ([`Packet`] and the structs in [`packets`]) — the
//!   closed set of packet kinds, each with its one-byte tag and layout.
//! - **Frame decoder** ([`FrameDecoder`]) — a resumable state machine
//!   that survives arbitrary TCP fragmentation.
//! - **Frame encoder** ([`encode`]) — body-first, header-backfilled
//!   framing.
//!
//! # Architecture
//!
//! ```text
//! Transport (bytes) → FrameDecoder → Packet → dispatch (terramite crate)
//!                                    Packet → encode → Transport (bytes)
//! ```
//!
//! Packets and frames are transient: each is owned by exactly one
//! pipeline stage and lives for one decode/encode cycle.

mod decoder;
mod encoder;
mod error;
pub mod packets;
pub mod wire;

pub use decoder::FrameDecoder;
pub use encoder::encode;
pub use error::ProtocolError;
pub use packets::{
    ClientUUID, Connect, Packet, PlayerHP, PlayerInfo, PlayerInventorySlot,
    PlayerMP, RequestWorldData, SetUserSlot, UpdatePlayerBuff,
};
pub use wire::{Color, HEADER_SIZE};
