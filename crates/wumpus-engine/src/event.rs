use serde::{Deserialize, Serialize};
use wumpus_core::RoomId;

use crate::path::ShotPath;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    /// The arrow found the wumpus.
    Won,
    /// The player died: pit, wumpus, or their own arrow.
    Lost,
    /// The player quit.
    Quit,
}

/// One micro-event in the chain resolving a player command.
///
/// Each variant, given the current game state, yields exactly one
/// successor event or ends the chain; no event is ever revisited. The
/// terminal variants are [`GameEvent::Idle`] (turn over, game continues)
/// and [`GameEvent::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    /// The player tries to walk into the given room.
    MovedToRoom {
        /// The room the player is heading for.
        target: RoomId,
    },
    /// The target room is not adjacent; the player bounces off the wall.
    HitWall,
    /// The player is inside a new room and its contents take effect.
    EnteredRoom,
    /// The room has a pit; gravity rolls the dice.
    EnteredPitRoom,
    /// One-in-six luck: the player caught the edge.
    SurvivedPit,
    /// The pit wins.
    FellInPit,
    /// Giant bats carry the player to a random room.
    MovedByBats,
    /// The player walked in on the wumpus.
    EatenByWumpus,
    /// An arrow leaves the quiver, aimed through a path of rooms.
    ShotArrow {
        /// The route the arrow is aimed through.
        path: ShotPath,
    },
    /// The shot named no rooms at all.
    ArrowWentNowhere,
    /// The arrow flies into a room on its aimed path.
    ArrowEnteredRoom {
        /// The room the arrow just entered.
        room: RoomId,
        /// What is left of the aimed route.
        path: ShotPath,
    },
    /// The aimed hop was not connected; the arrow deviated through a
    /// random door instead. A deviation is always the arrow's last hop.
    ArrowEnteredRandomRoom {
        /// The room the arrow deviated from.
        from: RoomId,
        /// The room the player aimed for.
        intended: RoomId,
        /// The room the arrow actually flew into.
        actual: RoomId,
    },
    /// The arrow found the wumpus.
    ShotWumpus,
    /// The arrow circled back into the player's own room.
    ShotSelf,
    /// Terminal: the turn is over and the player is alive.
    Idle,
    /// Terminal: the game is over.
    GameOver {
        /// How it ended.
        outcome: GameOutcome,
    },
}

impl GameEvent {
    /// Whether this event ends the chain.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Idle | Self::GameOver { .. })
    }

    /// The outcome, if this event ends the game.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            Self::GameOver { outcome } => Some(*outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_idle_and_game_over_are_terminal() {
        assert!(GameEvent::Idle.is_terminal());
        assert!(
            GameEvent::GameOver {
                outcome: GameOutcome::Won
            }
            .is_terminal()
        );
        assert!(!GameEvent::HitWall.is_terminal());
        assert!(!GameEvent::EnteredRoom.is_terminal());
        assert!(
            !GameEvent::MovedToRoom {
                target: RoomId::new(2)
            }
            .is_terminal()
        );
    }

    #[test]
    fn outcome_is_only_carried_by_game_over() {
        assert_eq!(GameEvent::Idle.outcome(), None);
        assert_eq!(
            GameEvent::GameOver {
                outcome: GameOutcome::Quit
            }
            .outcome(),
            Some(GameOutcome::Quit)
        );
    }
}
