use serde::{Deserialize, Serialize};
use wumpus_core::RoomId;

/// A player command, as delivered by the external input collaborator.
///
/// The engine never parses raw text; whatever prompts the player is
/// expected to hand over one of these plain values per turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Move through a door into the room with the given id.
    Move(RoomId),
    /// Shoot an arrow aimed through the given rooms, in order.
    Shoot(Vec<RoomId>),
    /// End the game immediately.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_round_trip_through_json() {
        let commands = [
            Command::Move(RoomId::new(4)),
            Command::Shoot(vec![RoomId::new(2), RoomId::new(3)]),
            Command::Quit,
        ];
        for command in commands {
            let json = serde_json::to_string(&command).unwrap();
            let back: Command = serde_json::from_str(&json).unwrap();
            assert_eq!(back, command);
        }
    }

    #[test]
    fn command_json_shape_is_stable() {
        let json = serde_json::to_string(&Command::Move(RoomId::new(4))).unwrap();
        assert_eq!(json, r#"{"move":4}"#);
        let json = serde_json::to_string(&Command::Quit).unwrap();
        assert_eq!(json, r#""quit""#);
    }
}
