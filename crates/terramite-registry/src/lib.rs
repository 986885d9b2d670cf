//! Player slot assignment for Terramite.
//!
//! Every connected player is identified on the wire by a slot — a small
//! integer in `0..=255`, assigned on `Connect` and reclaimed when the
//! connection dies. This crate owns that table:
//!
//! 1. **Assignment** — first free slot, scanning 0 → 255
//!    ([`SlotRegistry::assign`])
//! 2. **Teardown** — both directions of the mapping removed together
//!    ([`SlotRegistry::release`])
//! 3. **Exhaustion** — a defined error when all 256 slots are taken,
//!    never an out-of-range write
//!
//! # How it fits in the stack
//!
//! ```text
//! Server layer (above)  ← assigns on Connect, releases on disconnect
//!     ↕
//! Registry (this crate) ← the one piece of cross-connection state
//!     ↕
//! Transport (below)     ← provides ConnectionId, the map key
//! ```

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::{SlotRegistry, MAX_SLOTS};
