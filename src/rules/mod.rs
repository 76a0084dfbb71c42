//! Game rules for Reversi
//!
//! This module implements the bitboard rule set:
//! - Direction shifts with wrap-around masks
//! - Legal move generation
//! - Capture (flip) detection

pub mod direction;
pub mod flips;
pub mod moves;

// Re-exports for convenient access
pub use direction::{directional_run, Direction};
pub use flips::{captured_by, flips};
pub use moves::{possible_moves, possible_moves_for};
