//! Game rules for Reversi
//!
//! This module implements the rule set:
//! - Placement legality and stone flipping (capture runs)
//! - End of game detection and stone counting

pub mod finish;
pub mod placement;

// Re-exports for convenient access
pub use finish::{count_stones, finished, has_empty, legal_positions, placeable, winner};
pub use placement::{captures, place, place_at, resolve};
