//! Cave data model and procedural builder for a Hunt-the-Wumpus style game.
//!
//! This crate defines the room graph, the builder that constructs a
//! connected cave under degree and hazard-placement constraints, and the
//! [`random::RandomSource`] seam through which all non-determinism flows.
//! The event-chain engine that resolves player commands lives in the
//! `wumpus-engine` crate and operates on a [`Cave`] built here.

/// Procedural construction of a connected, degree-bounded cave.
pub mod builder;
/// The cave: a room graph plus the player's current position.
pub mod cave;
/// Game options, bounds, and validation.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// The injectable randomness seam.
pub mod random;
/// Rooms, room identifiers, and hazard flags.
pub mod room;

/// Re-export builder types.
pub use builder::{CaveBuilder, build_cave};
/// Re-export the cave.
pub use cave::Cave;
/// Re-export game options.
pub use config::GameOptions;
/// Re-export error types.
pub use error::{CaveError, CaveResult};
/// Re-export random source types.
pub use random::{FixedRandom, RandomSource, SeededRandom, SequenceRandom};
/// Re-export room types.
pub use room::{Room, RoomId};
