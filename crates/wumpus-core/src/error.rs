use crate::room::RoomId;

/// Alias for `Result<T, CaveError>`.
pub type CaveResult<T> = Result<T, CaveError>;

/// Errors that can occur when configuring or building a cave.
///
/// These are all construction-time failures: a cave whose configuration
/// violates the documented bounds must never be built or used. Gameplay
/// outcomes (hitting a wall, falling in a pit, missing a shot) are never
/// errors; they flow through the event chain as ordinary events.
#[derive(Debug, thiserror::Error)]
pub enum CaveError {
    /// The requested room id does not exist in the cave.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// The room count is outside the supported range.
    #[error("room count {given} outside allowed range {min}..={max}")]
    InvalidRoomCount {
        /// The configured room count.
        given: u32,
        /// The smallest supported room count.
        min: u32,
        /// The largest supported room count.
        max: u32,
    },

    /// The door count is outside the supported range.
    #[error("door count {given} outside allowed range {min}..={max}")]
    InvalidDoorCount {
        /// The configured door count.
        given: u32,
        /// The smallest supported door count.
        min: u32,
        /// The largest supported door count.
        max: u32,
    },

    /// The door count exceeds what a cave of this size can support.
    #[error("door count {given} exceeds the ceiling {ceiling} for {num_rooms} rooms")]
    TooManyDoors {
        /// The configured door count.
        given: u32,
        /// The largest door count this cave size supports.
        ceiling: u32,
        /// The configured room count.
        num_rooms: u32,
    },

    /// More hazards were requested than the cave can hold while still
    /// guaranteeing a hazard-free room for the wumpus.
    #[error("{num_pits} pits and {num_bats} bat colonies cannot fit in {num_rooms} rooms")]
    TooManyHazards {
        /// The configured pit count.
        num_pits: u32,
        /// The configured bat colony count.
        num_bats: u32,
        /// The configured room count.
        num_rooms: u32,
    },
}
