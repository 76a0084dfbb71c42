//! Turn controller driving one Reversi player
//!
//! The [`Player`] owns the board, the adaptive heuristic and the random
//! source used for tie-breaking. It consumes controller [`Command`]s one at
//! a time and answers every move request with a [`Reply`]:
//!
//! 1. **init**: start a fresh game with the given color
//! 2. **opponent move**: apply it for the opponent, then choose and apply ours
//! 3. **opponent pass**: choose and apply ours directly
//! 4. **exit**: stop
//!
//! Any error is fatal: the player moves to a terminated state and refuses
//! further commands.
//!
//! # Example
//!
//! ```
//! use reversi::{Player, PlayerConfig, Step};
//!
//! let mut player: Player = Player::new(PlayerConfig::default().with_seed(7));
//! player.handle_line("init: X").unwrap();
//!
//! match player.handle_line("none").unwrap() {
//!     Step::Reply(reply) => println!("we play {}", reply),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Color, Pos};
use crate::config::PlayerConfig;
use crate::error::EngineError;
use crate::eval::{AdaptiveHeuristic, Strategy};
use crate::protocol::{Command, Reply};

/// What the caller should do after a command was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Write this reply as one line
    Reply(Reply),
    /// Nothing to write
    Silent,
    /// Stop reading input
    Exit,
}

/// A game in progress
#[derive(Debug, Clone)]
struct Game {
    board: Board,
    heuristic: AdaptiveHeuristic,
    us: Color,
}

impl Game {
    fn new(us: Color, early_game_moves: u32) -> Self {
        Self {
            board: Board::new(Color::Black),
            heuristic: AdaptiveHeuristic::with_early_game(early_game_moves),
            us,
        }
    }

    /// Play the opponent's move and feed it to the heuristic.
    fn apply_opponent(&mut self, mv: Pos) -> Result<(), EngineError> {
        self.board.set_side_to_move(self.us.opponent());
        if !self.board.is_legal(mv) {
            return Err(EngineError::IllegalMove(mv));
        }

        let flipped = self.board.apply_move(mv.to_mask());
        debug!("opponent {} flips {}", mv, flipped.count());
        self.heuristic.on_move_made(mv, true);
        Ok(())
    }

    /// Choose, play and report our own move.
    fn play_own<R: Rng + ?Sized>(&mut self, strategy: Strategy, rng: &mut R) -> Reply {
        self.board.set_side_to_move(self.us);

        let Some(mv) = strategy.choose(&self.board, &self.heuristic, rng) else {
            info!("{:?} has no legal move, passing", self.us);
            return Reply::Pass;
        };

        let flipped = self.board.apply_move(mv.to_mask());
        self.heuristic.on_move_made(mv, false);
        debug!(
            "we play {} flipping {} (X {} / O {})\n{}",
            mv,
            flipped.count(),
            self.board.count(Color::Black),
            self.board.count(Color::White),
            self.board
        );
        Reply::Move(mv)
    }
}

#[derive(Debug, Clone)]
enum State {
    Uninitialized,
    Playing(Game),
    Terminated,
}

/// Reversi player answering controller commands.
///
/// The random source is generic so tests can inject a fixed one; by
/// default it is [`StdRng`]. `srand` reseeds it in place.
#[derive(Debug)]
pub struct Player<R = StdRng> {
    config: PlayerConfig,
    state: State,
    rng: R,
}

impl<R: Rng + SeedableRng> Player<R> {
    /// Player seeded from `config.seed`, or from OS entropy when unset
    pub fn new(config: PlayerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => R::seed_from_u64(seed),
            None => R::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Player using the given random source
    pub fn with_rng(config: PlayerConfig, rng: R) -> Self {
        Self {
            config,
            state: State::Uninitialized,
            rng,
        }
    }

    /// Player dropped into an arbitrary position as `us`.
    ///
    /// Useful for analysis and tests; the heuristic starts fresh.
    pub fn with_position(config: PlayerConfig, board: Board, us: Color, rng: R) -> Self {
        let game = Game {
            board,
            heuristic: AdaptiveHeuristic::with_early_game(config.early_game_moves),
            us,
        };
        Self {
            config,
            state: State::Playing(game),
            rng,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Current board, if a game is running
    pub fn board(&self) -> Option<&Board> {
        match &self.state {
            State::Playing(game) => Some(&game.board),
            _ => None,
        }
    }

    /// Our color, if a game is running
    pub fn color(&self) -> Option<Color> {
        match &self.state {
            State::Playing(game) => Some(game.us),
            _ => None,
        }
    }

    /// Heuristic state, if a game is running
    pub fn heuristic(&self) -> Option<&AdaptiveHeuristic> {
        match &self.state {
            State::Playing(game) => Some(&game.heuristic),
            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, State::Terminated)
    }

    /// Parse and handle one raw protocol line.
    pub fn handle_line(&mut self, line: &str) -> Result<Step, EngineError> {
        match line.parse::<Command>() {
            Ok(command) => self.handle(command),
            Err(err) => {
                self.state = State::Terminated;
                Err(err.into())
            }
        }
    }

    /// Handle one command. On error the player is terminated.
    pub fn handle(&mut self, command: Command) -> Result<Step, EngineError> {
        let result = self.dispatch(command);
        if result.is_err() {
            self.state = State::Terminated;
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> Result<Step, EngineError> {
        let Player { config, state, rng } = self;

        if matches!(state, State::Terminated) {
            return Err(EngineError::Terminated);
        }

        match command {
            Command::Init(color) => {
                info!("new game, playing {:?}", color);
                *state = State::Playing(Game::new(color, config.early_game_moves));
                Ok(Step::Silent)
            }
            Command::Seed(seed) => {
                debug!("reseeding with {}", seed);
                *rng = R::seed_from_u64(seed);
                Ok(Step::Silent)
            }
            Command::Exit => {
                info!("exit requested");
                *state = State::Terminated;
                Ok(Step::Exit)
            }
            Command::OpponentMove(mv) => {
                let State::Playing(game) = state else {
                    return Err(EngineError::NotInitialized);
                };
                game.apply_opponent(mv)?;
                Ok(Step::Reply(game.play_own(config.strategy, rng)))
            }
            Command::OpponentPass => {
                let State::Playing(game) = state else {
                    return Err(EngineError::NotInitialized);
                };
                debug!("opponent passed");
                Ok(Step::Reply(game.play_own(config.strategy, rng)))
            }
        }
    }
}
