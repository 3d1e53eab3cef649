use wumpus_core::Cave;

/// Mutable state of one game: the cave plus the player's quiver.
///
/// Exclusively owned by the turn loop; only event transitions mutate it,
/// and the arrow count only ever goes down.
#[derive(Debug)]
pub struct GameState {
    /// The cave being explored.
    pub cave: Cave,
    /// Arrows left in the quiver.
    pub num_arrows: u32,
}

impl GameState {
    /// Create the state for a fresh game.
    pub fn new(cave: Cave, num_arrows: u32) -> Self {
        Self { cave, num_arrows }
    }
}
