use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished,
}

impl GamePhase {
    pub const fn is_not_started(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Commands the presentation layer sends on behalf of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    NewGame,
    Quit,
    ComputerFirst,
    HumanFirst,
    ToggleFirstMover,
    SetDifficulty(Difficulty),
    SetComputerRole(Player),
}

/// A single game against the computer, owned by one control loop.
#[derive(Clone, Debug)]
pub struct GameSession<R = SmallRng> {
    board: Board,
    phase: GamePhase,
    current_player: Player,
    config: GameConfig,
    outcome: Option<Outcome>,
    rng: R,
}

impl GameSession<SmallRng> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        let mut session = Self {
            board: Board::new(),
            phase: GamePhase::NotStarted,
            current_player: config.first_mover,
            config,
            outcome: None,
            rng,
        };
        session.init_game();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn winner_line(&self) -> Option<WinnerLine> {
        self.outcome.and_then(Outcome::line)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.current_player == self.config.computer
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_computer_turn()
    }

    /// Clears the board and outcome and hands the turn to the configured first mover.
    pub fn init_game(&mut self) {
        self.board.reset();
        self.current_player = self.config.first_mover;
        self.outcome = None;
    }

    /// Places `player` at `coords` when the cell is empty and flips whose turn it is.
    ///
    /// Returns `false` without touching anything when the cell is taken.
    pub fn apply_move(&mut self, coords: Coord2, player: Player) -> bool {
        if !self.board.is_empty_at(coords) {
            log::trace!("Cell {:?} already taken, ignoring move by {}", coords, player);
            return false;
        }
        self.board.set_cell(coords, player.into());
        self.current_player = self.current_player.opponent();
        true
    }

    /// Settles the game once a line or a full board exists. Does nothing once finished.
    pub fn check_end_of_game(&mut self) -> Option<Outcome> {
        if self.phase.is_finished() {
            return self.outcome;
        }

        let outcome = if let Some(line) = self.board.winning_line(Player::X) {
            Outcome::Won {
                player: Player::X,
                line,
            }
        } else if let Some(line) = self.board.winning_line(Player::O) {
            Outcome::Won {
                player: Player::O,
                line,
            }
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            return None;
        };

        match outcome {
            Outcome::Won { player, .. } => log::info!("Winner {}", player),
            Outcome::Draw => log::info!("No more moves"),
        }
        self.phase = GamePhase::Finished;
        self.outcome = Some(outcome);
        self.outcome
    }

    /// Human clicked the cell at `coords`.
    pub fn pointer_down(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        let coords = Board::validate_coords(coords).inspect_err(|_| {
            log::error!("Pointer mapped outside the board: {:?}", coords);
        })?;

        if !self.phase.is_in_progress() || !self.is_human_turn() {
            return Ok(MoveOutcome::NoChange);
        }

        let human = self.config.human();
        if !self.apply_move(coords, human) {
            return Ok(MoveOutcome::NoChange);
        }

        if let Some(outcome) = self.check_end_of_game() {
            return Ok(MoveOutcome::GameOver(outcome));
        }

        Ok(match self.advance() {
            MoveOutcome::NoChange => MoveOutcome::Placed,
            reply => reply,
        })
    }

    /// One engine tick: lets the computer move when it is its turn.
    pub fn advance(&mut self) -> MoveOutcome {
        if !self.phase.is_in_progress() {
            return MoveOutcome::NoChange;
        }

        let placed = self.is_computer_turn() && self.play_computer_move();

        match self.check_end_of_game() {
            Some(outcome) => MoveOutcome::GameOver(outcome),
            None if placed => MoveOutcome::Placed,
            None => MoveOutcome::NoChange,
        }
    }

    pub fn command(&mut self, command: Command) -> CommandOutcome {
        use CommandOutcome::*;
        use GamePhase::*;

        match (self.phase, command) {
            (NotStarted, Command::Start) => {
                log::info!("Start of game");
                self.phase = InProgress;
                self.init_game();
                Changed
            }
            (InProgress | Finished, Command::NewGame) => {
                log::info!("New game");
                self.phase = InProgress;
                self.init_game();
                Changed
            }
            (InProgress | Finished, Command::Quit) => {
                log::info!("Quit game");
                self.phase = NotStarted;
                self.init_game();
                Changed
            }
            (NotStarted, Command::ComputerFirst) => self.set_first_mover(self.config.computer),
            (NotStarted, Command::HumanFirst) => self.set_first_mover(self.config.human()),
            (NotStarted, Command::ToggleFirstMover) => {
                self.set_first_mover(self.config.first_mover.opponent())
            }
            (NotStarted, Command::SetDifficulty(difficulty)) => {
                if self.config.difficulty == difficulty {
                    return NoChange;
                }
                match difficulty {
                    Difficulty::Hard => log::info!("Hard Level"),
                    Difficulty::Easy => log::info!("Easy Level"),
                }
                self.config.difficulty = difficulty;
                Changed
            }
            (NotStarted, Command::SetComputerRole(computer)) => {
                if self.config.computer == computer {
                    return NoChange;
                }
                log::info!("Computer plays {}", computer);
                // keep whoever moved first, human or computer
                let computer_first = self.config.computer_moves_first();
                self.config.computer = computer;
                self.config.first_mover = if computer_first {
                    computer
                } else {
                    computer.opponent()
                };
                self.init_game();
                Changed
            }
            (phase, command) => {
                log::trace!("Ignoring {:?} while {:?}", command, phase);
                NoChange
            }
        }
    }

    fn set_first_mover(&mut self, first_mover: Player) -> CommandOutcome {
        if self.config.first_mover == first_mover {
            return CommandOutcome::NoChange;
        }
        self.config.first_mover = first_mover;
        if self.config.computer_moves_first() {
            log::info!("Computer first");
        } else {
            log::info!("Human first");
        }
        self.init_game();
        CommandOutcome::Changed
    }

    fn play_computer_move(&mut self) -> bool {
        let computer = self.config.computer;
        let choice = self
            .config
            .difficulty
            .choose_move(&self.board, computer, &mut self.rng);

        match choice {
            Some(coords) => self.apply_move(coords, computer),
            None => false,
        }
    }
}
