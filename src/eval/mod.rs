//! Move evaluation for Reversi
//!
//! This module scores candidate moves. It provides:
//! - Board regions and quadrants
//! - Rank tables for each game situation
//! - The adaptive heuristic and tie-breaking selection
//! - Alternative one-ply strategies

pub mod heuristic;
pub mod regions;
pub mod strategy;
pub mod table;

pub use heuristic::{random_cell, select_best, AdaptiveHeuristic, Phase, EARLY_GAME_MOVES};
pub use regions::{Quadrant, Region};
pub use strategy::{weighted_disc_balance, Strategy};
pub use table::{ScoreTable, CORNER_LOST, CORNER_TAKEN, EARLY_GAME, MID_GAME, RANKS};
