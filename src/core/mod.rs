mod error;
mod grid;
mod model_helpers;
mod models;
mod rules;
mod state;
mod update;

pub use error::{EngineError, Result};
pub use grid::Grid;
pub use models::{Direction, GameChangeType, GameUpdate, MoveRejection, Position, TileKind, UserAction};
pub use rules::{RulesConfig, VoidPolicy};
pub use state::{is_solved, GoalCount, PuzzleState};
pub use update::{attempt_move, attempt_move_with, step};
