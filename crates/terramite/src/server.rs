//! `TerramiteServer` builder and server loop.
//!
//! This is the entry point for running a Terramite server. It ties
//! together all the layers: transport → protocol → registry → handler.

use std::sync::Arc;

use terramite_registry::SlotRegistry;
use terramite_transport::{TcpTransport, Transport};
use tokio::sync::Mutex;

use crate::dispatch::PacketHandler;
use crate::handler::handle_connection;
use crate::TerramiteError;

/// Shared server state passed to each connection handler task.
///
/// Wrapped in `Arc` so it can be cheaply cloned across tasks.
/// Interior mutability via `Mutex` where needed.
pub(crate) struct ServerState<H: PacketHandler> {
    pub(crate) registry: Mutex<SlotRegistry>,
    pub(crate) handler: H,
}

/// Builder for configuring and starting a Terramite server.
///
/// # Example
///
/// ```rust,ignore
/// use terramite::prelude::*;
///
/// let server = TerramiteServer::builder()
///     .bind("0.0.0.0:7777")
///     .build(LoggingHandler)
///     .await?;
/// server.run().await
/// ```
pub struct TerramiteServerBuilder {
    bind_addr: String,
}

impl TerramiteServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:7777".to_string(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Binds the listener and builds the server with the given handler.
    pub async fn build<H: PacketHandler>(
        self,
        handler: H,
    ) -> Result<TerramiteServer<H>, TerramiteError> {
        let transport = TcpTransport::bind(&self.bind_addr).await?;

        let state = Arc::new(ServerState {
            registry: Mutex::new(SlotRegistry::new()),
            handler,
        });

        Ok(TerramiteServer { transport, state })
    }
}

impl Default for TerramiteServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running Terramite server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct TerramiteServer<H: PacketHandler> {
    transport: TcpTransport,
    state: Arc<ServerState<H>>,
}

impl<H: PacketHandler> TerramiteServer<H> {
    /// Creates a new builder.
    pub fn builder() -> TerramiteServerBuilder {
        TerramiteServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the server accept loop.
    ///
    /// Accepts incoming connections and spawns a handler task for each.
    /// A connection that ends with an error takes down only itself.
    /// Runs until the process is terminated.
    pub async fn run(mut self) -> Result<(), TerramiteError> {
        tracing::info!("Terramite server running");

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(conn, state).await
                        {
                            tracing::debug!(
                                error = %e,
                                "connection ended with error"
                            );
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
