use std::fmt::Write as _;

use crate::error::{CaveError, CaveResult};
use crate::random::RandomSource;
use crate::room::{Room, RoomId};

/// The cave: an ordered collection of rooms plus the player's position.
///
/// The room order is the shuffled array order fixed at construction; the
/// player starts in the room at array position 0. The only mutation a cave
/// supports after construction is moving the current-room reference, so it
/// is exclusively owned by the turn processor for the duration of a turn.
#[derive(Debug, Clone)]
pub struct Cave {
    rooms: Vec<Room>,
    current: usize,
}

impl Cave {
    pub(crate) fn new(rooms: Vec<Room>) -> Self {
        debug_assert!(!rooms.is_empty());
        Self { rooms, current: 0 }
    }

    /// The room the player currently occupies.
    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current]
    }

    /// Move the player to the room with the given id.
    ///
    /// Performs no adjacency check; callers decide whether the move is
    /// legal (normal traversal checks [`Cave::adjacent_room`] first, bat
    /// teleportation does not). An unknown id is an explicit error.
    pub fn move_to(&mut self, id: RoomId) -> CaveResult<()> {
        self.current = self.index_of(id)?;
        Ok(())
    }

    /// Whether a door leads from the current room to the room with `id`.
    pub fn adjacent_room(&self, id: RoomId) -> bool {
        self.current_room().has_neighbor(id)
    }

    /// Move the player to a uniformly random room, ignoring adjacency.
    ///
    /// Draws an id in `[1, N]` through the half-open convention `[1, N+1)`.
    /// Used by bat teleportation. Returns the destination id.
    pub fn move_player_to_random_room(
        &mut self,
        rng: &mut dyn RandomSource,
    ) -> CaveResult<RoomId> {
        let num_rooms = self.rooms.len() as u32;
        let id = RoomId::new(rng.next_in_range(1, num_rooms + 1));
        self.move_to(id)?;
        Ok(id)
    }

    /// Look up a room by id, independent of the player's position.
    ///
    /// Used for arrow-path resolution. An unknown id is an explicit error
    /// rather than a silent end of the chain.
    pub fn room(&self, id: RoomId) -> CaveResult<&Room> {
        let index = self.index_of(id)?;
        Ok(&self.rooms[index])
    }

    /// All rooms in array order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The number of rooms in the cave.
    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    /// Dump the cave topology in Graphviz digraph format.
    ///
    /// Pit rooms are drawn filled. Debugging aid for inspecting generated
    /// layouts; not part of gameplay output.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");
        for room in &self.rooms {
            // Writing to a String cannot fail.
            let _ = write!(out, "    {}", room.id());
            if room.has_pit() {
                let _ = write!(out, " [fillcolor=\"black\" fontcolor=\"white\"]");
            }
            out.push_str(";\n");
            for neighbor in room.neighbors() {
                let _ = writeln!(out, "    {} -> {};", room.id(), neighbor);
            }
        }
        out.push('}');
        out
    }

    fn index_of(&self, id: RoomId) -> CaveResult<usize> {
        self.rooms
            .iter()
            .position(|room| room.id() == id)
            .ok_or(CaveError::RoomNotFound(id))
    }
}
