use crate::core::{GameChangeType, PuzzleState};

pub struct GameRenderState<'a> {
    pub title: &'a str,
    pub game: &'a PuzzleState,
    pub level_names: &'a [String],
    pub show_instructions: bool,
    pub message: Option<String>,
    pub last_change: Option<GameChangeType>,
}
