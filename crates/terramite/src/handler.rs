//! Per-connection handler: framing, slot assignment, and packet routing.
//!
//! Each accepted connection gets its own Tokio task running this handler.
//! The flow is:
//!   1. Read chunks off the socket into a growable buffer
//!   2. Drain complete frames out of the buffer via `FrameDecoder`
//!   3. Connect → assign a player slot, reply with SetUserSlot
//!   4. Route every decoded packet to the `PacketHandler`
//!
//! A second task per connection drains the outbound queue and writes
//! encoded frames to the socket, so handlers never block on I/O.

use std::sync::Arc;

use bytes::BytesMut;
use terramite_protocol::{encode, FrameDecoder, Packet, SetUserSlot};
use terramite_registry::RegistryError;
use terramite_transport::{Connection, TcpConnection};
use tokio::sync::mpsc;

use crate::dispatch::{dispatch, Context, PacketHandler};
use crate::server::ServerState;
use crate::TerramiteError;

/// Drop guard that frees a connection's player slot when the handler
/// exits.
///
/// This ensures cleanup happens even if the handler panics. Since `Drop`
/// is synchronous, we spawn a fire-and-forget task for the async lock.
/// Releasing a connection that never got a slot is a no-op, so the guard
/// is armed from the moment the connection is accepted.
struct SlotGuard<H: PacketHandler> {
    conn_id: terramite_transport::ConnectionId,
    state: Arc<ServerState<H>>,
}

impl<H: PacketHandler> Drop for SlotGuard<H> {
    fn drop(&mut self) {
        let conn_id = self.conn_id;
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let mut registry = state.registry.lock().await;
            if let Some(slot) = registry.release(conn_id) {
                tracing::info!(%conn_id, slot, "player slot released");
            }
        });
    }
}

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection<H: PacketHandler>(
    conn: TcpConnection,
    state: Arc<ServerState<H>>,
) -> Result<(), TerramiteError> {
    let conn_id = conn.id();
    tracing::debug!(%conn_id, "handling new connection");

    let _guard = SlotGuard {
        conn_id,
        state: Arc::clone(&state),
    };

    // --- Outbound half: queue → encode → socket ---
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<Packet>();
    let writer_conn = conn.clone();
    let writer = tokio::spawn(async move {
        while let Some(packet) = outbound_rx.recv().await {
            let frame = match encode(&packet) {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::warn!(
                        %conn_id, error = %e, "dropping unencodable packet"
                    );
                    continue;
                }
            };
            if let Err(e) = writer_conn.send(&frame).await {
                tracing::debug!(%conn_id, error = %e, "send failed");
                break;
            }
        }
    });

    let ctx = Context::new(conn_id, outbound_tx);

    // --- Inbound half: socket → frames → dispatch ---
    let result = read_loop(&conn, &state, &ctx).await;

    // Normal teardown releases the slot before the socket goes away;
    // the guard only matters if this task panics or is cancelled.
    {
        let mut registry = state.registry.lock().await;
        if let Some(slot) = registry.release(conn_id) {
            tracing::info!(%conn_id, slot, "player slot released");
        }
    }

    // Dropping the context closes the outbound queue; let the writer
    // flush what is already queued before shutting the socket down.
    drop(ctx);
    let _ = writer.await;
    let _ = conn.close().await;

    result
}

/// Reads chunks, drains frames, and routes packets until the peer
/// disconnects or a protocol violation ends the connection.
async fn read_loop<H: PacketHandler>(
    conn: &TcpConnection,
    state: &Arc<ServerState<H>>,
    ctx: &Context,
) -> Result<(), TerramiteError> {
    let conn_id = ctx.connection_id();
    let mut buffer = BytesMut::new();
    let mut decoder = FrameDecoder::new();

    loop {
        let chunk = match conn.recv().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => {
                tracing::info!(%conn_id, "connection closed cleanly");
                return Ok(());
            }
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "recv error");
                return Ok(());
            }
        };
        buffer.extend_from_slice(&chunk);

        // A chunk may complete zero, one, or many frames.
        loop {
            let packet = match decoder.decode(&mut buffer) {
                Ok(Some(packet)) => packet,
                Ok(None) => break,
                Err(e) => {
                    // Frame boundaries can no longer be trusted; the
                    // only safe recovery is a fresh connection.
                    tracing::warn!(
                        %conn_id, error = %e, "protocol violation, closing"
                    );
                    return Err(TerramiteError::Protocol(e));
                }
            };

            if !handle_packet(state, ctx, packet).await? {
                return Ok(());
            }
        }
    }
}

/// Routes one packet. Returns `false` if the connection should close.
async fn handle_packet<H: PacketHandler>(
    state: &Arc<ServerState<H>>,
    ctx: &Context,
    packet: Packet,
) -> Result<bool, TerramiteError> {
    // Connect carries server-side bookkeeping before the handler runs:
    // the client needs its slot number before anything else matters.
    if let Packet::Connect(_) = &packet {
        let conn_id = ctx.connection_id();
        let assigned = {
            let mut registry = state.registry.lock().await;
            registry.assign(conn_id)
        };
        let slot = match assigned {
            Ok(slot) => slot,
            Err(RegistryError::AlreadyAssigned { slot, .. }) => {
                // A repeated Connect gets the same answer, not a
                // second slot.
                tracing::debug!(%conn_id, slot, "repeated connect");
                slot
            }
            Err(e @ RegistryError::Exhausted) => {
                tracing::warn!(%conn_id, error = %e, "rejecting connection");
                return Ok(false);
            }
        };
        ctx.send(Packet::SetUserSlot(SetUserSlot { slot }));
    }

    dispatch(&state.handler, ctx, packet).await?;
    Ok(true)
}
