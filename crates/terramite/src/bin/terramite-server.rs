//! Stock server binary: bind, accept, log every packet.
//!
//! Usage: `terramite-server [host] [port]` — defaults to 127.0.0.1:7777,
//! the port Terraria clients dial out of the box. `RUST_LOG` controls
//! verbosity.

use terramite::prelude::*;

#[tokio::main]
async fn main() -> Result<(), TerramiteError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,terramite=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "127.0.0.1".to_string());
    let port = args.next().unwrap_or_else(|| "7777".to_string());
    let addr = format!("{host}:{port}");

    let server = TerramiteServer::<LoggingHandler>::builder()
        .bind(&addr)
        .build(LoggingHandler)
        .await?;

    tracing::info!(%addr, "listening");
    server.run().await
}
