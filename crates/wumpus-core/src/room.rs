use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a room, assigned at creation and never reused.
///
/// Ids run from 1 to the room count. Shuffling the cave permutes array
/// positions only; an id travels with its room for the life of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(u32);

impl RoomId {
    /// Wrap a raw room number.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw room number.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the cave graph.
///
/// Neighbors are held in insertion order as an ordered list of ids. Edges
/// may be asymmetric: `a` listing `b` does not imply `b` lists `a` (the
/// builder's fill-phase fallback can introduce one-way doors).
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    neighbors: Vec<RoomId>,
    pit: bool,
    bats: bool,
    wumpus: bool,
}

impl Room {
    pub(crate) fn new(id: RoomId) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
            pit: false,
            bats: false,
            wumpus: false,
        }
    }

    /// The stable id of this room.
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// The rooms reachable through this room's doors, in insertion order.
    pub fn neighbors(&self) -> &[RoomId] {
        &self.neighbors
    }

    /// How many outgoing doors this room has.
    pub fn num_neighbors(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether a door leads from this room to `id`.
    pub fn has_neighbor(&self, id: RoomId) -> bool {
        self.neighbors.contains(&id)
    }

    pub(crate) fn add_neighbor(&mut self, id: RoomId) {
        self.neighbors.push(id);
    }

    /// Whether this room holds a bottomless pit.
    pub fn has_pit(&self) -> bool {
        self.pit
    }

    /// Whether this room holds a colony of giant bats.
    pub fn has_bats(&self) -> bool {
        self.bats
    }

    /// Whether the wumpus sleeps in this room.
    pub fn has_wumpus(&self) -> bool {
        self.wumpus
    }

    /// Whether this room already holds a pit or bats.
    ///
    /// A room never holds both; placement routines check this before
    /// marking a room.
    pub fn has_hazard(&self) -> bool {
        self.pit || self.bats
    }

    pub(crate) fn set_pit(&mut self, pit: bool) {
        debug_assert!(!(pit && self.bats), "room {} already has bats", self.id);
        self.pit = pit;
    }

    pub(crate) fn set_bats(&mut self, bats: bool) {
        debug_assert!(!(bats && self.pit), "room {} already has a pit", self.id);
        self.bats = bats;
    }

    pub(crate) fn set_wumpus(&mut self, wumpus: bool) {
        self.wumpus = wumpus;
    }
}
