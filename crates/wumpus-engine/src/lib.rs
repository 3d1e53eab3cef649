//! Event-chain engine for a Hunt-the-Wumpus style game.
//!
//! One player command resolves into a finite, forward-only chain of
//! discrete events: a move may cascade through bat teleports and pit
//! rolls, an arrow follows its aimed path hop by hop and deviates into a
//! random door when the path breaks. The chain is driven by a single
//! exhaustive transition function over a [`GameEvent`] tagged union and
//! always terminates in [`GameEvent::Idle`] or [`GameEvent::GameOver`].
//!
//! All randomness flows through the [`wumpus_core::RandomSource`] passed
//! into each transition, so full turns replay deterministically.

/// The event-chain transition function and driver loop.
pub mod chain;
/// Player commands, as delivered by the input collaborator.
pub mod command;
/// Error types for the engine crate.
pub mod error;
/// The events a chain can produce.
pub mod event;
/// The turn loop tying commands, chains, and observers together.
pub mod game;
/// The route an arrow is aimed through.
pub mod path;
/// Mutable state of one game.
pub mod state;

/// Re-export the chain driver and observer seam.
pub use chain::{EventObserver, run_chain, step};
/// Re-export the command type.
pub use command::Command;
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export event types.
pub use event::{GameEvent, GameOutcome};
/// Re-export the turn loop types.
pub use game::{CommandSource, Game, TurnStatus};
/// Re-export the shot path.
pub use path::ShotPath;
/// Re-export the game state.
pub use state::GameState;
