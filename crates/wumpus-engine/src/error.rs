use wumpus_core::{CaveError, RoomId};

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can abort an event chain.
///
/// Gameplay outcomes are never errors: walls, pit deaths, and missed
/// shots all flow through the chain as ordinary events. What remains here
/// are genuine defects surfaced explicitly instead of silently truncating
/// the chain.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A room lookup failed while resolving the chain, e.g. an arrow path
    /// naming a room that does not exist.
    #[error(transparent)]
    Cave(#[from] CaveError),

    /// A random-neighbor pick found a room with no outgoing doors. The
    /// builder guarantees a minimum degree, so this indicates a cave that
    /// was not built through it.
    #[error("room {0} has no outgoing doors")]
    NoNeighbors(RoomId),
}
