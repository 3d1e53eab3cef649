//! The event-chain transition function and driver loop.
//!
//! [`step`] is the single exhaustive transition: given the current event
//! and exclusive access to the game state, it produces the next event.
//! [`run_chain`] applies it repeatedly from an initial event until a
//! terminal variant, reporting every event instance to the observer in
//! order. Termination is structural: every transition either reaches a
//! terminal class or strictly shortens the remaining shot path.

use wumpus_core::{RandomSource, Room, RoomId};

use crate::error::{EngineError, EngineResult};
use crate::event::{GameEvent, GameOutcome};
use crate::path::ShotPath;
use crate::state::GameState;

/// External display collaborator, notified once per event instance.
///
/// The engine produces plain data; whatever rendering happens with it is
/// someone else's business.
pub trait EventObserver {
    /// Called for every event in the chain, in the order it occurred.
    fn on_event(&mut self, event: &GameEvent);
}

/// Collects events for inspection; handy in tests and replays.
impl EventObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Apply one transition: consume the current event, produce its successor.
///
/// Terminal events are returned unchanged. Draws (pit rolls, teleports,
/// deviation picks) go through `rng`, so a chain replays exactly under a
/// fixed source.
pub fn step(
    event: GameEvent,
    state: &mut GameState,
    rng: &mut dyn RandomSource,
) -> EngineResult<GameEvent> {
    match event {
        GameEvent::MovedToRoom { target } => {
            if state.cave.adjacent_room(target) {
                state.cave.move_to(target)?;
                Ok(GameEvent::EnteredRoom)
            } else {
                Ok(GameEvent::HitWall)
            }
        }

        GameEvent::HitWall => Ok(GameEvent::Idle),

        GameEvent::EnteredRoom => {
            let room = state.cave.current_room();
            if room.has_pit() {
                Ok(GameEvent::EnteredPitRoom)
            } else if room.has_bats() {
                Ok(GameEvent::MovedByBats)
            } else if room.has_wumpus() {
                Ok(GameEvent::EatenByWumpus)
            } else {
                Ok(GameEvent::Idle)
            }
        }

        GameEvent::EnteredPitRoom => {
            // One-in-six chance of catching the edge.
            let roll = rng.next_in_range(0, 6);
            if roll % 6 == 0 {
                Ok(GameEvent::SurvivedPit)
            } else {
                Ok(GameEvent::FellInPit)
            }
        }

        GameEvent::SurvivedPit => Ok(GameEvent::Idle),

        GameEvent::FellInPit => Ok(GameEvent::GameOver {
            outcome: GameOutcome::Lost,
        }),

        GameEvent::MovedByBats => {
            state.cave.move_player_to_random_room(rng)?;
            // The destination gets resolved like any other entry; bats
            // can chain into further bats or a pit.
            Ok(GameEvent::EnteredRoom)
        }

        GameEvent::EatenByWumpus => Ok(GameEvent::GameOver {
            outcome: GameOutcome::Lost,
        }),

        GameEvent::ShotArrow { mut path } => {
            state.num_arrows = state.num_arrows.saturating_sub(1);
            match path.advance() {
                None => Ok(GameEvent::ArrowWentNowhere),
                Some(first) => {
                    if state.cave.adjacent_room(first) {
                        Ok(GameEvent::ArrowEnteredRoom { room: first, path })
                    } else {
                        let from = state.cave.current_room().id();
                        let actual = random_neighbor(state.cave.current_room(), rng)?;
                        Ok(GameEvent::ArrowEnteredRandomRoom {
                            from,
                            intended: first,
                            actual,
                        })
                    }
                }
            }
        }

        GameEvent::ArrowWentNowhere => Ok(GameEvent::Idle),

        GameEvent::ArrowEnteredRoom { room, mut path } => {
            let entered = state.cave.room(room)?;
            if entered.has_wumpus() {
                Ok(GameEvent::ShotWumpus)
            } else if room == state.cave.current_room().id() {
                Ok(GameEvent::ShotSelf)
            } else {
                match path.advance() {
                    None => Ok(GameEvent::Idle),
                    Some(next) => {
                        if entered.has_neighbor(next) {
                            Ok(GameEvent::ArrowEnteredRoom { room: next, path })
                        } else {
                            let actual = random_neighbor(entered, rng)?;
                            Ok(GameEvent::ArrowEnteredRandomRoom {
                                from: room,
                                intended: next,
                                actual,
                            })
                        }
                    }
                }
            }
        }

        GameEvent::ArrowEnteredRandomRoom { actual, .. } => {
            // A deviation is always the arrow's final hop.
            Ok(GameEvent::ArrowEnteredRoom {
                room: actual,
                path: ShotPath::empty(),
            })
        }

        GameEvent::ShotWumpus => Ok(GameEvent::GameOver {
            outcome: GameOutcome::Won,
        }),

        GameEvent::ShotSelf => Ok(GameEvent::GameOver {
            outcome: GameOutcome::Lost,
        }),

        GameEvent::Idle => Ok(GameEvent::Idle),
        GameEvent::GameOver { outcome } => Ok(GameEvent::GameOver { outcome }),
    }
}

/// Drive a chain from `initial` to its terminal event.
///
/// The observer is notified once per event instance, terminal included.
/// Returns the terminal event.
pub fn run_chain(
    initial: GameEvent,
    state: &mut GameState,
    rng: &mut dyn RandomSource,
    observer: &mut dyn EventObserver,
) -> EngineResult<GameEvent> {
    let mut current = initial;
    loop {
        observer.on_event(&current);
        if current.is_terminal() {
            return Ok(current);
        }
        current = step(current, state, rng)?;
    }
}

/// Pick a uniformly random outgoing door of `room`.
fn random_neighbor(room: &Room, rng: &mut dyn RandomSource) -> EngineResult<RoomId> {
    let neighbors = room.neighbors();
    if neighbors.is_empty() {
        return Err(EngineError::NoNeighbors(room.id()));
    }
    let index = rng.next_in_range(0, neighbors.len() as u32) as usize;
    Ok(neighbors[index])
}
