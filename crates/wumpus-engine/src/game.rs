//! The turn loop tying commands, chains, and observers together.

use wumpus_core::{Cave, GameOptions, RandomSource};

use crate::chain::{EventObserver, run_chain};
use crate::command::Command;
use crate::error::EngineResult;
use crate::event::{GameEvent, GameOutcome};
use crate::path::ShotPath;
use crate::state::GameState;

/// External input collaborator: supplies the next player command.
///
/// Asked exactly once per turn; this is the only suspension point in the
/// surrounding system. The engine never sees raw text.
pub trait CommandSource {
    /// Block until the player issues a command.
    fn next_command(&mut self) -> Command;
}

/// What a finished turn means for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The player is alive and the game continues.
    Continuing,
    /// The game ended this turn.
    Over(GameOutcome),
}

/// One game of hunting the wumpus.
///
/// Owns the [`GameState`] between turns and hands it exclusively to the
/// chain for the duration of each turn.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    max_shot_path: usize,
}

impl Game {
    /// Start a game in the given cave.
    pub fn new(cave: Cave, options: &GameOptions) -> Self {
        Self {
            state: GameState::new(cave, options.num_arrows),
            max_shot_path: options.max_shot_path as usize,
        }
    }

    /// The state between turns, for inspection.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Resolve one command to completion.
    ///
    /// The observer sees every event in the chain, in order, terminal
    /// included.
    pub fn play_turn(
        &mut self,
        command: Command,
        rng: &mut dyn RandomSource,
        observer: &mut dyn EventObserver,
    ) -> EngineResult<TurnStatus> {
        let initial = self.initial_event(command);
        let terminal = run_chain(initial, &mut self.state, rng, observer)?;
        Ok(match terminal.outcome() {
            Some(outcome) => TurnStatus::Over(outcome),
            None => TurnStatus::Continuing,
        })
    }

    /// Pull commands and play turns until the game ends.
    pub fn run(
        &mut self,
        commands: &mut dyn CommandSource,
        rng: &mut dyn RandomSource,
        observer: &mut dyn EventObserver,
    ) -> EngineResult<GameOutcome> {
        loop {
            let command = commands.next_command();
            if let TurnStatus::Over(outcome) = self.play_turn(command, rng, observer)? {
                return Ok(outcome);
            }
        }
    }

    /// Translate a command into the first event of its chain.
    fn initial_event(&self, command: Command) -> GameEvent {
        match command {
            Command::Move(target) => GameEvent::MovedToRoom { target },
            Command::Shoot(mut rooms) => {
                rooms.truncate(self.max_shot_path);
                GameEvent::ShotArrow {
                    path: ShotPath::new(rooms),
                }
            }
            Command::Quit => GameEvent::GameOver {
                outcome: GameOutcome::Quit,
            },
        }
    }
}
