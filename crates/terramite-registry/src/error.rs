//! Error types for the slot registry.

use terramite_transport::ConnectionId;

/// Errors that can occur while assigning player slots.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Every slot (0–255) is occupied. A defined, reportable condition:
    /// the caller refuses the new connection with a reason instead of
    /// corrupting the table or writing out of range.
    #[error("all {max} player slots are occupied", max = crate::MAX_SLOTS)]
    Exhausted,

    /// The connection already holds a slot. Assignment is rejected
    /// deterministically rather than silently double-assigning; the
    /// error carries the slot it already holds so the caller can resend
    /// it if the protocol calls for that.
    #[error("{conn} already holds slot {slot}")]
    AlreadyAssigned { conn: ConnectionId, slot: u8 },
}
