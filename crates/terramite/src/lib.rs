//! # Terramite
//!
//! A Terraria-compatible multiplayer server over plain TCP.
//!
//! Terramite speaks the game's length-prefixed binary frame protocol and
//! provides a server-authoritative join flow: clients connect, get a
//! player slot, and exchange player state packets. Game behavior plugs
//! in through the [`PacketHandler`] trait; the framework handles
//! transport, framing, slot bookkeeping, and routing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use terramite::prelude::*;
//!
//! # async fn run() -> Result<(), TerramiteError> {
//! let server = TerramiteServer::<LoggingHandler>::builder()
//!     .bind("0.0.0.0:7777")
//!     .build(LoggingHandler)
//!     .await?;
//! server.run().await
//! # }
//! ```
//!
//! Layer stack, bottom up:
//!
//! ```text
//! terramite-transport   raw TCP byte chunks
//! terramite-protocol    frames ⇄ packets
//! terramite-registry    connection ⇄ slot bookkeeping
//! terramite             dispatch, handler, server loop
//! ```

mod dispatch;
mod error;
mod handler;
mod server;

pub use dispatch::{dispatch, Context, LoggingHandler, PacketHandler};
pub use error::TerramiteError;
pub use server::{TerramiteServer, TerramiteServerBuilder};

/// Everything a server implementation typically needs.
pub mod prelude {
    pub use crate::{
        Context, LoggingHandler, PacketHandler, TerramiteError,
        TerramiteServer, TerramiteServerBuilder,
    };
    pub use terramite_protocol::{
        ClientUUID, Color, Connect, Packet, PlayerHP, PlayerInfo,
        PlayerInventorySlot, PlayerMP, RequestWorldData, SetUserSlot,
        UpdatePlayerBuff,
    };
    pub use terramite_transport::ConnectionId;
}
