use serde::{Deserialize, Serialize};

use crate::error::{CaveError, CaveResult};

/// Smallest supported room count.
pub const MIN_ROOMS: u32 = 10;
/// Largest supported room count.
pub const MAX_ROOMS: u32 = 250;
/// Smallest supported door count per room.
pub const MIN_DOORS: u32 = 2;
/// Largest supported door count per room.
pub const MAX_DOORS: u32 = 25;

/// The largest door count a cave with `num_rooms` rooms can support.
///
/// The fill phase of door construction can always complete below this
/// ceiling; above it, rooms can run out of partners with spare capacity.
pub fn max_doors_for(num_rooms: u32) -> u32 {
    num_rooms - num_rooms / 4
}

/// Options for one game, as delivered by the external options source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Number of rooms in the cave.
    pub num_rooms: u32,
    /// Number of doors per room.
    pub num_doors: u32,
    /// Number of bottomless pits to place.
    pub num_pits: u32,
    /// Number of bat colonies to place.
    pub num_bats: u32,
    /// Arrows in the player's quiver at the start of the game.
    pub num_arrows: u32,
    /// Longest path an arrow can be aimed through; longer paths are
    /// truncated when the shot is resolved.
    pub max_shot_path: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            num_rooms: 20,
            num_doors: 3,
            num_pits: 3,
            num_bats: 3,
            num_arrows: 3,
            max_shot_path: 6,
        }
    }
}

impl GameOptions {
    /// Set the number of rooms.
    pub fn with_num_rooms(mut self, num_rooms: u32) -> Self {
        self.num_rooms = num_rooms;
        self
    }

    /// Set the number of doors per room.
    pub fn with_num_doors(mut self, num_doors: u32) -> Self {
        self.num_doors = num_doors;
        self
    }

    /// Set the number of pits.
    pub fn with_num_pits(mut self, num_pits: u32) -> Self {
        self.num_pits = num_pits;
        self
    }

    /// Set the number of bat colonies.
    pub fn with_num_bats(mut self, num_bats: u32) -> Self {
        self.num_bats = num_bats;
        self
    }

    /// Set the starting arrow count.
    pub fn with_num_arrows(mut self, num_arrows: u32) -> Self {
        self.num_arrows = num_arrows;
        self
    }

    /// Set the longest path an arrow can be aimed through.
    pub fn with_max_shot_path(mut self, max_shot_path: u32) -> Self {
        self.max_shot_path = max_shot_path;
        self
    }

    /// Check every construction bound up front.
    ///
    /// Returns the first violation as a typed error. A cave must not be
    /// built from options that fail validation.
    pub fn validate(&self) -> CaveResult<()> {
        if self.num_rooms < MIN_ROOMS || self.num_rooms > MAX_ROOMS {
            return Err(CaveError::InvalidRoomCount {
                given: self.num_rooms,
                min: MIN_ROOMS,
                max: MAX_ROOMS,
            });
        }
        if self.num_doors < MIN_DOORS || self.num_doors > MAX_DOORS {
            return Err(CaveError::InvalidDoorCount {
                given: self.num_doors,
                min: MIN_DOORS,
                max: MAX_DOORS,
            });
        }
        let ceiling = max_doors_for(self.num_rooms);
        if self.num_doors > ceiling {
            return Err(CaveError::TooManyDoors {
                given: self.num_doors,
                ceiling,
                num_rooms: self.num_rooms,
            });
        }
        // Hazard placement is rejection sampling; leaving at least two
        // hazard-free rooms bounds the retries and guarantees a wumpus
        // lair away from the starting room. Summed in u64: the counts are
        // unvalidated input and their u32 sum can overflow.
        if u64::from(self.num_pits) + u64::from(self.num_bats) > u64::from(self.num_rooms) - 2 {
            return Err(CaveError::TooManyHazards {
                num_pits: self.num_pits,
                num_bats: self.num_bats,
                num_rooms: self.num_rooms,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        let options = GameOptions::default();
        assert_eq!(options.num_rooms, 20);
        assert_eq!(options.num_doors, 3);
        assert_eq!(options.num_pits, 3);
        assert_eq!(options.num_bats, 3);
        assert_eq!(options.num_arrows, 3);
        assert_eq!(options.max_shot_path, 6);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn builder_chain_sets_fields() {
        let options = GameOptions::default()
            .with_num_rooms(30)
            .with_num_doors(4)
            .with_num_pits(2)
            .with_num_bats(1)
            .with_num_arrows(5)
            .with_max_shot_path(4);
        assert_eq!(options.num_rooms, 30);
        assert_eq!(options.num_doors, 4);
        assert_eq!(options.num_pits, 2);
        assert_eq!(options.num_bats, 1);
        assert_eq!(options.num_arrows, 5);
        assert_eq!(options.max_shot_path, 4);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn room_count_bounds_are_enforced() {
        let too_few = GameOptions::default().with_num_rooms(9);
        assert!(matches!(
            too_few.validate(),
            Err(CaveError::InvalidRoomCount { given: 9, .. })
        ));

        let too_many = GameOptions::default().with_num_rooms(251);
        assert!(matches!(
            too_many.validate(),
            Err(CaveError::InvalidRoomCount { given: 251, .. })
        ));
    }

    #[test]
    fn door_count_bounds_are_enforced() {
        let too_few = GameOptions::default().with_num_doors(1);
        assert!(matches!(
            too_few.validate(),
            Err(CaveError::InvalidDoorCount { given: 1, .. })
        ));

        let too_many = GameOptions::default().with_num_doors(26);
        assert!(matches!(
            too_many.validate(),
            Err(CaveError::InvalidDoorCount { given: 26, .. })
        ));
    }

    #[test]
    fn dynamic_door_ceiling_is_enforced() {
        // 10 rooms support at most 10 - 10/4 = 8 doors.
        assert_eq!(max_doors_for(10), 8);
        let options = GameOptions::default().with_num_rooms(10).with_num_doors(9);
        assert!(matches!(
            options.validate(),
            Err(CaveError::TooManyDoors { given: 9, ceiling: 8, .. })
        ));

        let at_ceiling = GameOptions::default()
            .with_num_rooms(10)
            .with_num_doors(8)
            .with_num_pits(1)
            .with_num_bats(1);
        assert!(at_ceiling.validate().is_ok());
    }

    #[test]
    fn hazard_budget_is_enforced() {
        let options = GameOptions::default()
            .with_num_rooms(10)
            .with_num_pits(5)
            .with_num_bats(4);
        assert!(matches!(
            options.validate(),
            Err(CaveError::TooManyHazards { num_pits: 5, num_bats: 4, .. })
        ));

        let at_budget = GameOptions::default()
            .with_num_rooms(10)
            .with_num_pits(4)
            .with_num_bats(4);
        assert!(at_budget.validate().is_ok());
    }

    #[test]
    fn hazard_budget_survives_extreme_counts() {
        // Counts whose u32 sum wraps must still be rejected, not panic
        // or slip past the budget.
        let options = GameOptions::default()
            .with_num_rooms(10)
            .with_num_pits(u32::MAX)
            .with_num_bats(3);
        assert!(matches!(
            options.validate(),
            Err(CaveError::TooManyHazards { num_pits: u32::MAX, num_bats: 3, .. })
        ));

        let both_huge = GameOptions::default()
            .with_num_rooms(250)
            .with_num_pits(u32::MAX)
            .with_num_bats(u32::MAX);
        assert!(matches!(
            both_huge.validate(),
            Err(CaveError::TooManyHazards { .. })
        ));
    }
}
