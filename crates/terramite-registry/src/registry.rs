//! The slot registry: hands out unique small-integer player slots.
//!
//! # Concurrency note
//!
//! `SlotRegistry` is NOT thread-safe by itself — it uses plain
//! `HashMap`s. This is intentional: the registry is the only state shared
//! across connections, and it is reached through exactly one
//! `tokio::sync::Mutex` held in the server state. Both directions of the
//! mapping live in this one struct so they can only ever be updated
//! together, inside one `&mut self` call; a half-updated mapping is not
//! observable from outside the lock.

use std::collections::HashMap;

use terramite_transport::ConnectionId;

use crate::RegistryError;

/// Hard ceiling on concurrent players: slots are numbered 0–255.
pub const MAX_SLOTS: usize = 256;

/// An injective partial mapping from connection identity to a slot
/// number in `0..=255`, plus its inverse for O(1) teardown.
///
/// Invariants:
/// - a slot number is held by at most one live connection;
/// - a connection holds at most one slot;
/// - the forward and inverse maps describe the same set of pairs.
///
/// ## Lifecycle
///
/// ```text
/// assign() ──→ [slot held] ──→ release()
///                  │
///                  └── assign() again → AlreadyAssigned (reject)
/// ```
#[derive(Debug, Default)]
pub struct SlotRegistry {
    /// slot number → the connection occupying it.
    slots: HashMap<u8, ConnectionId>,

    /// connection → its slot number. Kept in lockstep with `slots`.
    assignments: HashMap<ConnectionId, u8>,
}

impl SlotRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the first free slot, scanning 0 → 255, and binds it to
    /// `conn` in both directions.
    ///
    /// # Errors
    /// - [`RegistryError::AlreadyAssigned`] if `conn` already holds a
    ///   slot — never silently double-assign.
    /// - [`RegistryError::Exhausted`] if all 256 slots are occupied.
    pub fn assign(
        &mut self,
        conn: ConnectionId,
    ) -> Result<u8, RegistryError> {
        if let Some(&slot) = self.assignments.get(&conn) {
            return Err(RegistryError::AlreadyAssigned { conn, slot });
        }

        let slot = (0..MAX_SLOTS)
            .map(|i| i as u8)
            .find(|slot| !self.slots.contains_key(slot))
            .ok_or(RegistryError::Exhausted)?;

        // Insert into both maps to keep them in sync.
        self.slots.insert(slot, conn);
        self.assignments.insert(conn, slot);

        tracing::info!(%conn, slot, "slot assigned");
        Ok(slot)
    }

    /// Releases whatever slot `conn` holds, removing the forward and
    /// inverse mapping together.
    ///
    /// Returns the freed slot, or `None` if the connection held none —
    /// releasing an unknown connection is a no-op, so teardown paths can
    /// call this unconditionally.
    pub fn release(&mut self, conn: ConnectionId) -> Option<u8> {
        let slot = self.assignments.remove(&conn)?;
        let removed = self.slots.remove(&slot);
        // Both maps always describe the same pairs; a one-sided entry
        // would mean cross-player corruption, so fail loudly.
        debug_assert_eq!(removed, Some(conn), "slot maps out of sync");

        tracing::info!(%conn, slot, "slot released");
        Some(slot)
    }

    /// The slot held by `conn`, if any.
    pub fn slot_of(&self, conn: ConnectionId) -> Option<u8> {
        self.assignments.get(&conn).copied()
    }

    /// The connection occupying `slot`, if any.
    pub fn connection_at(&self, slot: u8) -> Option<ConnectionId> {
        self.slots.get(&slot).copied()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` if no slots are occupied.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================
