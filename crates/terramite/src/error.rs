//! Unified error type for the Terramite server.

use terramite_protocol::ProtocolError;
use terramite_registry::RegistryError;
use terramite_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// Every variant is fatal to one connection, never to the process: the
/// per-connection handler logs it, closes the socket, and releases the
/// slot. The `#[from]` attributes let `?` convert sub-crate errors
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum TerramiteError {
    /// A transport-level error (accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (unsupported tag, malformed body).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A registry-level error (slot exhaustion, double assignment).
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use terramite_transport::ConnectionId;

    #[test]
    fn test_from_transport_error() {
        let err = TransportError::ConnectionClosed("gone".into());
        let top: TerramiteError = err.into();
        assert!(matches!(top, TerramiteError::Transport(_)));
        assert!(top.to_string().contains("gone"));
    }

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::UnsupportedKind(99);
        let top: TerramiteError = err.into();
        assert!(matches!(top, TerramiteError::Protocol(_)));
        assert!(top.to_string().contains("99"));
    }

    #[test]
    fn test_from_registry_error() {
        let err = RegistryError::AlreadyAssigned {
            conn: ConnectionId::new(1),
            slot: 3,
        };
        let top: TerramiteError = err.into();
        assert!(matches!(top, TerramiteError::Registry(_)));
    }
}
