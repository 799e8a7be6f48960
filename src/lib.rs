//! Box-pushing puzzle engine.
//!
//! [`crate::core`] holds the rules: a [`Grid`](crate::core::Grid) of tiles,
//! the [`PuzzleState`](crate::core::PuzzleState) threaded through each move,
//! [`attempt_move`](crate::core::attempt_move) and
//! [`is_solved`](crate::core::is_solved). Everything else is a thin caller
//! around it.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod level;
pub mod levels;
pub mod logging;
pub mod models;
pub mod session;
