//! The dispatch layer: routes decoded packets to typed handler methods.
//!
//! Dispatch is an exhaustive `match` over the [`Packet`] enum, so the
//! packet catalog and the handler surface cannot drift apart: adding a
//! kind to the catalog without giving it a route here is a compile
//! error. There is no tag→closure table and no downcast that could fail
//! at a handler boundary.
//!
//! Handlers are the game logic seam. Today they log and return — the
//! protocol engine is complete, the game behind it is not — but the
//! trait is where world state, inventory checks, and broadcasts go.

#![allow(unused_variables)]

use std::future::Future;

use terramite_protocol::{
    ClientUUID, Connect, Packet, PlayerHP, PlayerInfo, PlayerInventorySlot,
    PlayerMP, RequestWorldData, SetUserSlot, UpdatePlayerBuff,
};
use terramite_transport::ConnectionId;
use tokio::sync::mpsc;

use crate::TerramiteError;

/// Per-connection context handed to every handler invocation.
///
/// Lets a handler identify the sender and enqueue replies. Sending is
/// fire-and-forget: packets go onto an unbounded queue drained by the
/// connection's writer task, so a handler never blocks on socket I/O.
pub struct Context {
    conn_id: ConnectionId,
    outbound: mpsc::UnboundedSender<Packet>,
}

impl Context {
    pub(crate) fn new(
        conn_id: ConnectionId,
        outbound: mpsc::UnboundedSender<Packet>,
    ) -> Self {
        Self { conn_id, outbound }
    }

    /// The connection this packet arrived on.
    pub fn connection_id(&self) -> ConnectionId {
        self.conn_id
    }

    /// Enqueues a packet for delivery to this connection's peer.
    ///
    /// If the connection is already gone the packet is silently dropped;
    /// the handler's own teardown is driven by the read side.
    pub fn send(&self, packet: Packet) {
        let _ = self.outbound.send(packet);
    }
}

/// Game-logic hooks, one per inbound packet kind.
///
/// Every method defaults to logging the packet and returning `Ok` —
/// implement the ones your server cares about. Handlers for one
/// connection run strictly in arrival order: packet N+1 is not
/// dispatched until packet N's handler has returned. No ordering holds
/// across different connections.
///
/// # Trait bounds
///
/// `Send + Sync + 'static` because one handler instance is shared by
/// every connection task for the lifetime of the server.
pub trait PacketHandler: Send + Sync + 'static {
    /// A client announced itself with its protocol version. The server
    /// has already assigned the slot and queued [`SetUserSlot`] by the
    /// time this runs; this hook is for version checks and bookkeeping.
    fn on_connect(
        &self,
        ctx: &Context,
        packet: Connect,
    ) -> impl Future<Output = Result<(), TerramiteError>> + Send {
        async move {
            tracing::info!(conn = %ctx.connection_id(), version = %packet.version, "client connected");
            Ok(())
        }
    }

    /// A player sent their name and appearance.
    fn on_player_info(
        &self,
        ctx: &Context,
        packet: PlayerInfo,
    ) -> impl Future<Output = Result<(), TerramiteError>> + Send {
        async move {
            tracing::info!(conn = %ctx.connection_id(), name = %packet.name, "player info received");
            Ok(())
        }
    }

    /// A client reported its persistent UUID.
    fn on_client_uuid(
        &self,
        ctx: &Context,
        packet: ClientUUID,
    ) -> impl Future<Output = Result<(), TerramiteError>> + Send {
        async move {
            tracing::info!(conn = %ctx.connection_id(), uuid = %packet.uuid, "client uuid received");
            Ok(())
        }
    }

    /// A player reported a health change.
    fn on_player_hp(
        &self,
        ctx: &Context,
        packet: PlayerHP,
    ) -> impl Future<Output = Result<(), TerramiteError>> + Send {
        async move {
            tracing::info!(conn = %ctx.connection_id(), hp = packet.hp, max_hp = packet.max_hp, "player hp update");
            Ok(())
        }
    }

    /// A player reported a mana change.
    fn on_player_mp(
        &self,
        ctx: &Context,
        packet: PlayerMP,
    ) -> impl Future<Output = Result<(), TerramiteError>> + Send {
        async move {
            tracing::info!(conn = %ctx.connection_id(), mp = packet.mp, max_mp = packet.max_mp, "player mp update");
            Ok(())
        }
    }

    /// A player's buff list changed.
    fn on_update_player_buff(
        &self,
        ctx: &Context,
        packet: UpdatePlayerBuff,
    ) -> impl Future<Output = Result<(), TerramiteError>> + Send {
        async move {
            tracing::info!(conn = %ctx.connection_id(), player = packet.for_player, "buff update");
            Ok(())
        }
    }

    /// A player set an inventory slot.
    fn on_player_inventory_slot(
        &self,
        ctx: &Context,
        packet: PlayerInventorySlot,
    ) -> impl Future<Output = Result<(), TerramiteError>> + Send {
        async move {
            tracing::info!(
                conn = %ctx.connection_id(),
                slot = packet.slot_id,
                net_id = packet.net_id,
                "inventory slot update"
            );
            Ok(())
        }
    }

    /// A client asked for world data.
    fn on_request_world_data(
        &self,
        ctx: &Context,
        packet: RequestWorldData,
    ) -> impl Future<Output = Result<(), TerramiteError>> + Send {
        async move {
            tracing::info!(conn = %ctx.connection_id(), "world data requested");
            Ok(())
        }
    }
}

/// A [`PacketHandler`] that takes every default: log and move on.
///
/// What the stock binary runs while the game logic behind the protocol
/// engine is still being built.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHandler;

impl PacketHandler for LoggingHandler {}

/// Routes one decoded packet to its handler method.
///
/// Exhaustive over the catalog. The one variant the server never decodes
/// — [`SetUserSlot`], outbound-only — maps to a connection-level error
/// rather than a panic, keeping a catalog/dispatch mismatch impossible
/// to hit and harmless if the impossible happens.
pub async fn dispatch<H: PacketHandler>(
    handler: &H,
    ctx: &Context,
    packet: Packet,
) -> Result<(), TerramiteError> {
    match packet {
        Packet::Connect(p) => handler.on_connect(ctx, p).await,
        Packet::PlayerInfo(p) => handler.on_player_info(ctx, p).await,
        Packet::ClientUUID(p) => handler.on_client_uuid(ctx, p).await,
        Packet::PlayerHP(p) => handler.on_player_hp(ctx, p).await,
        Packet::PlayerMP(p) => handler.on_player_mp(ctx, p).await,
        Packet::UpdatePlayerBuff(p) => {
            handler.on_update_player_buff(ctx, p).await
        }
        Packet::PlayerInventorySlot(p) => {
            handler.on_player_inventory_slot(ctx, p).await
        }
        Packet::RequestWorldData(p) => {
            handler.on_request_world_data(ctx, p).await
        }
        Packet::SetUserSlot(_) => Err(TerramiteError::Protocol(
            terramite_protocol::ProtocolError::UnsupportedKind(
                SetUserSlot::TAG,
            ),
        )),
    }
}

// =========================================================================
// Tests
// =========================================================================
