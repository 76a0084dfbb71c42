//! Reversi player for line-protocol tournament controllers
//!
//! A bitboard Reversi engine that plays one side of a game against a
//! controller over stdin/stdout:
//! - Standard 8x8 board, Black (`X`) moves first
//! - Moves flip every bracketed run in all eight directions
//! - A side without a legal move passes (`none`)
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Bitboards, coordinates and the game board
//! - [`rules`]: Directional flood fills, move generation and captures
//! - [`eval`]: Positional tables, the adaptive heuristic and strategies
//! - [`engine`]: Turn controller applying moves and choosing replies
//! - [`protocol`]: Command parsing and the read-eval loop
//! - [`console`]: Interactive game against a human at the terminal
//!
//! # Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use reversi::{serve, Player, PlayerConfig};
//!
//! let input = Cursor::new("init: X\nsrand: 1\nnone\nexit\n");
//! let mut output = Vec::new();
//! let mut player: Player = Player::new(PlayerConfig::default());
//!
//! serve(input, &mut output, &mut player).unwrap();
//! let reply = String::from_utf8(output).unwrap();
//! assert!(["d3\n", "c4\n", "f5\n", "e6\n"].contains(&reply.as_str()));
//! ```
//!
//! # Move Choice
//!
//! The default [`Strategy::Adaptive`] ranks cells by board region. The
//! ranking moves from an early-game to a mid-game table after a fixed
//! number of moves, and the quadrant around each taken corner is rescored
//! depending on who took it. Ties are broken at random.

pub mod board;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;

// Re-export commonly used types
pub use board::{Bitboard, Board, Color, Pos, BOARD_WIDTH, TOTAL_CELLS};
pub use config::PlayerConfig;
pub use console::{play_console, ConsoleOutcome};
pub use engine::{Player, Step};
pub use error::{EngineError, ProtocolError};
pub use eval::{AdaptiveHeuristic, Phase, Strategy};
pub use protocol::{serve, Command, Reply};
pub use rules::{captured_by, possible_moves, possible_moves_for};
