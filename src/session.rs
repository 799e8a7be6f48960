use tracing::{info, warn};

use crate::core::{GameChangeType, GameUpdate, PuzzleState, Result, RulesConfig, UserAction, step};
use crate::level::LevelFile;
use crate::levels;

/// What the terminal caller is showing: a screen or a level in play.
pub struct Session {
    pub title: String,
    pub game: PuzzleState,
    pub message: Option<String>,
    pub last_change: Option<GameChangeType>,
}

impl Session {
    pub fn title_screen() -> Result<Session> {
        Ok(Session::showing("Sokoban", levels::title_screen()?))
    }

    pub fn win_screen() -> Result<Session> {
        Ok(Session::showing("You win!", levels::win_screen()?))
    }

    fn showing(title: impl Into<String>, game: PuzzleState) -> Session {
        Session {
            title: title.into(),
            game,
            message: None,
            last_change: None,
        }
    }

    pub fn menu(&mut self) -> Result<()> {
        *self = Session::title_screen()?;
        Ok(())
    }

    /// `number` counts from 1. A level that fails to load leaves the current
    /// state alone and shows the error instead.
    pub fn choose_level(&mut self, catalog: &[LevelFile], number: usize) -> Result<()> {
        let Some(level) = number.checked_sub(1).and_then(|i| catalog.get(i)) else {
            self.message = Some(format!("No level {}", number));
            return Ok(());
        };
        match level.to_state() {
            Ok(game) => {
                info!(level = %level.name, goals = game.goal_count_raw(), "level chosen");
                *self = Session::showing(level.name.clone(), game);
            }
            Err(err) => {
                warn!(level = %level.name, %err, "level failed to load");
                self.message = Some(err.to_string());
                self.last_change = None;
            }
        }
        self.finish_if_solved()
    }

    pub fn user_action(&mut self, action: UserAction, rules: &RulesConfig) -> Result<()> {
        match step(&self.game, action, rules) {
            GameUpdate::NextState(next, change) => {
                self.game = next;
                self.last_change = Some(change);
                self.message = None;
            }
            GameUpdate::NoChange(rejection) => {
                self.last_change = None;
                self.message = self.game.is_active().then(|| rejection.to_string());
            }
        }
        self.finish_if_solved()
    }

    fn finish_if_solved(&mut self) -> Result<()> {
        if self.game.is_solved() {
            info!(level = %self.title, "level solved");
            *self = Session::win_screen()?;
        }
        Ok(())
    }
}
