//! Procedural construction of a connected, degree-bounded cave.
//!
//! The generated graph starts as a ring over the shuffled room order, which
//! proves connectivity by construction; a fill phase then raises every room
//! to the configured door count. Randomness enters exactly once, through
//! the shuffle and the hazard placement draws — everything in between is
//! deterministic given the shuffled order.

use crate::cave::Cave;
use crate::config::{GameOptions, MAX_DOORS, MAX_ROOMS, MIN_DOORS, MIN_ROOMS, max_doors_for};
use crate::error::{CaveError, CaveResult};
use crate::random::RandomSource;
use crate::room::{Room, RoomId};

/// Builds the rooms of a cave step by step.
///
/// The intended sequence is shuffle, doors, pits, bats, wumpus — exactly
/// what [`build_cave`] drives. The step methods are public so tests can
/// construct precise fixtures; callers composing them directly are
/// responsible for validating hazard counts against the room count first
/// (see [`GameOptions::validate`]), since placement retries until it finds
/// a free room.
#[derive(Debug)]
pub struct CaveBuilder {
    rooms: Vec<Room>,
}

impl CaveBuilder {
    /// Allocate `num_rooms` rooms with stable ids 1..=N in creation order.
    pub fn new(num_rooms: u32) -> CaveResult<Self> {
        if !(MIN_ROOMS..=MAX_ROOMS).contains(&num_rooms) {
            return Err(CaveError::InvalidRoomCount {
                given: num_rooms,
                min: MIN_ROOMS,
                max: MAX_ROOMS,
            });
        }
        let rooms = (1..=num_rooms).map(|id| Room::new(RoomId::new(id))).collect();
        Ok(Self { rooms })
    }

    /// Randomly permute the array positions of the rooms.
    ///
    /// Fisher-Yates over positions; ids travel with their rooms, so this
    /// decides which id sits where without renumbering anything.
    pub fn shuffle_rooms(&mut self, rng: &mut dyn RandomSource) {
        let len = self.rooms.len();
        for from in 0..len.saturating_sub(1) {
            let to = rng.next_in_range(from as u32, len as u32) as usize;
            self.rooms.swap(from, to);
        }
    }

    /// Connect the rooms so each has `num_doors` outgoing doors.
    pub fn build_doors(&mut self, num_doors: u32) -> CaveResult<()> {
        if !(MIN_DOORS..=MAX_DOORS).contains(&num_doors) {
            return Err(CaveError::InvalidDoorCount {
                given: num_doors,
                min: MIN_DOORS,
                max: MAX_DOORS,
            });
        }
        let num_rooms = self.rooms.len() as u32;
        let ceiling = max_doors_for(num_rooms);
        if num_doors > ceiling {
            return Err(CaveError::TooManyDoors {
                given: num_doors,
                ceiling,
                num_rooms,
            });
        }

        self.make_connected_network(num_doors);
        self.fill_in_rest_of_network(num_doors);
        Ok(())
    }

    /// Ring phase: connect position `i` to `(i+1) mod N` bidirectionally.
    ///
    /// The resulting cycle over the shuffled order is the connectivity
    /// witness for the whole cave.
    fn make_connected_network(&mut self, num_doors: u32) {
        let len = self.rooms.len();
        for i in 0..len {
            let next = (i + 1) % len;
            let from_id = self.rooms[i].id();
            let to_id = self.rooms[next].id();

            // Always true while making the initial links: the ring leaves
            // every room at degree 2 and num_doors >= 2.
            debug_assert!(self.room_has_doors_available(num_doors, i));
            debug_assert!(self.room_has_doors_available(num_doors, next));

            self.rooms[i].add_neighbor(to_id);
            self.rooms[next].add_neighbor(from_id);
        }
    }

    /// Fill phase: raise every room to `num_doors` outgoing doors.
    ///
    /// Scans forward for partners that are not self, not already linked,
    /// and still have capacity. If the scan exhausts, a second pass from
    /// the array start adds one-way doors to any room not already linked;
    /// a target may thus exceed `num_doors` in-degree via inbound-only
    /// doors, but never out-degree.
    fn fill_in_rest_of_network(&mut self, num_doors: u32) {
        let len = self.rooms.len();
        for from in 0..len {
            let mut needed =
                (num_doors as usize).saturating_sub(self.rooms[from].num_neighbors());

            let mut to = (from + 1) % len;
            while to < len && needed > 0 {
                let to_id = self.rooms[to].id();
                if to != from
                    && self.room_has_doors_available(num_doors, to)
                    && !self.rooms[from].has_neighbor(to_id)
                {
                    let from_id = self.rooms[from].id();
                    self.rooms[from].add_neighbor(to_id);
                    self.rooms[to].add_neighbor(from_id);
                    needed -= 1;
                }
                to += 1;
            }

            // Whatever is still missing becomes one-way doors.
            let mut to = 0;
            while to < len && needed > 0 {
                let to_id = self.rooms[to].id();
                if to != from && !self.rooms[from].has_neighbor(to_id) {
                    self.rooms[from].add_neighbor(to_id);
                    needed -= 1;
                }
                to += 1;
            }

            debug_assert_eq!(
                needed,
                0,
                "door fill left room {} short",
                self.rooms[from].id()
            );
        }
    }

    fn room_has_doors_available(&self, max_doors: u32, index: usize) -> bool {
        self.rooms[index].num_neighbors() < max_doors as usize
    }

    /// Place `count` pits, each in a uniformly drawn hazard-free room.
    ///
    /// Rejection sampling: positions are drawn in `[0, N)` until a room
    /// holding neither a pit nor bats is found.
    pub fn add_pits(&mut self, count: u32, rng: &mut dyn RandomSource) {
        let len = self.rooms.len() as u32;
        let mut placed = 0;
        while placed < count {
            let index = rng.next_in_range(0, len) as usize;
            if !self.rooms[index].has_hazard() {
                self.rooms[index].set_pit(true);
                placed += 1;
            }
        }
    }

    /// Place `count` bat colonies, each in a uniformly drawn hazard-free
    /// room. Never lands on a pit, whatever the call order.
    pub fn add_bats(&mut self, count: u32, rng: &mut dyn RandomSource) {
        let len = self.rooms.len() as u32;
        let mut placed = 0;
        while placed < count {
            let index = rng.next_in_range(0, len) as usize;
            if !self.rooms[index].has_hazard() {
                self.rooms[index].set_bats(true);
                placed += 1;
            }
        }
    }

    /// Place the wumpus in a uniformly drawn room that is hazard-free and
    /// not the player's starting room (array position 0).
    pub fn place_wumpus(&mut self, rng: &mut dyn RandomSource) {
        let len = self.rooms.len() as u32;
        loop {
            let index = rng.next_in_range(0, len) as usize;
            if index != 0 && !self.rooms[index].has_hazard() {
                self.rooms[index].set_wumpus(true);
                return;
            }
        }
    }

    /// The rooms built so far, in array order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Consume the builder and produce the cave, player at position 0.
    pub fn build(self) -> Cave {
        Cave::new(self.rooms)
    }
}

/// Build a complete cave from validated options.
///
/// Drives the full sequence: shuffle, doors, pits, bats, wumpus.
pub fn build_cave(options: &GameOptions, rng: &mut dyn RandomSource) -> CaveResult<Cave> {
    options.validate()?;
    let mut builder = CaveBuilder::new(options.num_rooms)?;
    builder.shuffle_rooms(rng);
    builder.build_doors(options.num_doors)?;
    builder.add_pits(options.num_pits, rng);
    builder.add_bats(options.num_bats, rng);
    builder.place_wumpus(rng);
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::random::{SeededRandom, SequenceRandom};

    fn ids(rooms: &[Room]) -> Vec<u32> {
        rooms.iter().map(|room| room.id().value()).collect()
    }

    /// Every room reachable from `start` by following directed edges.
    pub(super) fn reachable_from(cave: &Cave, start: RoomId) -> HashSet<RoomId> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            let room = cave.room(id).unwrap();
            for &neighbor in room.neighbors() {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        seen
    }

    #[test]
    fn room_count_bounds_fail_fast() {
        assert!(matches!(
            CaveBuilder::new(9),
            Err(CaveError::InvalidRoomCount { given: 9, .. })
        ));
        assert!(matches!(
            CaveBuilder::new(251),
            Err(CaveError::InvalidRoomCount { given: 251, .. })
        ));
        assert!(CaveBuilder::new(10).is_ok());
        assert!(CaveBuilder::new(250).is_ok());
    }

    #[test]
    fn door_count_bounds_fail_fast() {
        let mut builder = CaveBuilder::new(10).unwrap();
        assert!(matches!(
            builder.build_doors(1),
            Err(CaveError::InvalidDoorCount { given: 1, .. })
        ));
        assert!(matches!(
            builder.build_doors(26),
            Err(CaveError::InvalidDoorCount { given: 26, .. })
        ));
        // 10 rooms support at most 8 doors.
        assert!(matches!(
            builder.build_doors(9),
            Err(CaveError::TooManyDoors { given: 9, ceiling: 8, .. })
        ));
    }

    #[test]
    fn rooms_are_created_with_ids_in_order() {
        let builder = CaveBuilder::new(10).unwrap();
        assert_eq!(ids(builder.rooms()), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_with_scripted_draws_gives_exact_order() {
        // Swap targets chosen so the shuffle lands on a known permutation.
        let mut builder = CaveBuilder::new(10).unwrap();
        let mut rng = SequenceRandom::new([0, 5, 4, 3, 8, 7, 6, 7, 8]);
        builder.shuffle_rooms(&mut rng);
        assert_eq!(ids(builder.rooms()), vec![1, 6, 5, 4, 9, 8, 7, 2, 3, 10]);
    }

    #[test]
    fn shuffle_is_a_bijection_on_room_identity() {
        let mut builder = CaveBuilder::new(25).unwrap();
        let mut rng = SeededRandom::new(314);
        builder.shuffle_rooms(&mut rng);
        let mut shuffled = ids(builder.rooms());
        shuffled.sort_unstable();
        assert_eq!(shuffled, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn ring_alone_satisfies_two_doors() {
        let mut builder = CaveBuilder::new(10).unwrap();
        builder.build_doors(2).unwrap();
        for room in builder.rooms() {
            assert_eq!(room.num_neighbors(), 2);
        }
        // The ring links consecutive array positions both ways.
        let rooms = builder.rooms();
        for i in 0..rooms.len() {
            let next = (i + 1) % rooms.len();
            assert!(rooms[i].has_neighbor(rooms[next].id()));
            assert!(rooms[next].has_neighbor(rooms[i].id()));
        }
    }

    #[test]
    fn hazard_placement_draws_positions_not_ids() {
        let mut builder = CaveBuilder::new(10).unwrap();
        // Shuffle so array position and id disagree.
        let mut rng = SequenceRandom::new([0, 5, 4, 3, 8, 7, 6, 7, 8]);
        builder.shuffle_rooms(&mut rng);

        // Position 1 holds id 6 after the shuffle above.
        let mut rng = SequenceRandom::new([1]);
        builder.add_pits(1, &mut rng);
        let room = &builder.rooms()[1];
        assert_eq!(room.id(), RoomId::new(6));
        assert!(room.has_pit());
    }

    #[test]
    fn hazard_placement_rejects_occupied_rooms() {
        let mut builder = CaveBuilder::new(10).unwrap();
        // Pit lands at position 2.
        let mut rng = SequenceRandom::new([2]);
        builder.add_pits(1, &mut rng);
        // Bats draw position 2 twice, then settle at 4.
        let mut rng = SequenceRandom::new([2, 2, 4]);
        builder.add_bats(1, &mut rng);

        let rooms = builder.rooms();
        assert!(rooms[2].has_pit());
        assert!(!rooms[2].has_bats());
        assert!(rooms[4].has_bats());
    }

    #[test]
    fn wumpus_avoids_hazards_and_the_starting_room() {
        let mut builder = CaveBuilder::new(10).unwrap();
        let mut rng = SequenceRandom::new([3]);
        builder.add_pits(1, &mut rng);
        // Draws the start, then the pit room, then settles at 5.
        let mut rng = SequenceRandom::new([0, 3, 5]);
        builder.place_wumpus(&mut rng);

        let rooms = builder.rooms();
        assert!(!rooms[0].has_wumpus());
        assert!(!rooms[3].has_wumpus());
        assert!(rooms[5].has_wumpus());
    }

    #[test]
    fn build_cave_runs_the_full_sequence() {
        let options = GameOptions::default()
            .with_num_rooms(12)
            .with_num_doors(3)
            .with_num_pits(2)
            .with_num_bats(2);
        let mut rng = SeededRandom::new(7);
        let cave = build_cave(&options, &mut rng).unwrap();

        assert_eq!(cave.num_rooms(), 12);
        let pits = cave.rooms().iter().filter(|r| r.has_pit()).count();
        let bats = cave.rooms().iter().filter(|r| r.has_bats()).count();
        let wumpus = cave.rooms().iter().filter(|r| r.has_wumpus()).count();
        assert_eq!(pits, 2);
        assert_eq!(bats, 2);
        assert_eq!(wumpus, 1);
        assert!(!cave.current_room().has_wumpus());
    }

    #[test]
    fn build_cave_rejects_invalid_options() {
        let options = GameOptions::default().with_num_rooms(9);
        let mut rng = SeededRandom::new(0);
        assert!(build_cave(&options, &mut rng).is_err());
    }

}
