use serde::{Deserialize, Serialize};
use wumpus_core::RoomId;

/// The route an arrow is aimed through.
///
/// A cursor over an ordered sequence of room ids, mutated only by
/// advancing one hop at a time. The rooms behind the cursor have been
/// flown through; the rooms ahead are where the player wants the arrow
/// to go next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotPath {
    rooms: Vec<RoomId>,
    cursor: usize,
}

impl ShotPath {
    /// A path through the given rooms, cursor at the start.
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms, cursor: 0 }
    }

    /// A path with nothing left to fly through.
    ///
    /// A deviated arrow gets one of these: a misfire is always the
    /// terminal hop.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Advance the cursor one hop, returning the room it passed over.
    pub fn advance(&mut self) -> Option<RoomId> {
        let next = self.rooms.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(next)
    }

    /// The rooms still ahead of the cursor.
    pub fn remaining(&self) -> &[RoomId] {
        &self.rooms[self.cursor..]
    }

    /// Whether the cursor has passed the last room.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.rooms.len()
    }
}
