use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{EngineError, Result};
use crate::core::{Grid, Position, TileKind};

/// Number of goal cells counted at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCount {
    Active(usize),
    /// Title and win screens: never solved.
    Inactive,
}

impl GoalCount {
    /// Legacy integer form, `-1` when inactive.
    pub fn raw(self) -> i64 {
        match self {
            GoalCount::Active(n) => n as i64,
            GoalCount::Inactive => -1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredPuzzleState")]
pub struct PuzzleState {
    pub(crate) grid: Grid,
    pub(crate) player: Position,
    goal_count: GoalCount,
}

/// Serialized form, checked against the grid before it becomes a `PuzzleState`.
#[derive(Deserialize)]
struct StoredPuzzleState {
    grid: Grid,
    player: Position,
    goal_count: GoalCount,
}

impl TryFrom<StoredPuzzleState> for PuzzleState {
    type Error = EngineError;

    fn try_from(stored: StoredPuzzleState) -> Result<Self> {
        let state = match stored.goal_count {
            GoalCount::Inactive => PuzzleState::inactive(stored.grid),
            GoalCount::Active(_) => PuzzleState::load(stored.grid)?,
        };
        if state.player != stored.player {
            return Err(EngineError::InvalidLevel(format!(
                "player recorded at {} but the grid has it at {}",
                stored.player, state.player
            )));
        }
        if state.goal_count != stored.goal_count {
            return Err(EngineError::InvalidLevel(format!(
                "goal count recorded as {} but the grid has {}",
                stored.goal_count.raw(),
                state.goal_count.raw()
            )));
        }
        Ok(state)
    }
}

impl PuzzleState {
    /// Scans the grid once for the player and the goal cells.
    pub fn load(grid: Grid) -> Result<Self> {
        let (first, second) = {
            let mut players = grid.iter().filter(|&(_, c)| c.is_player()).map(|(pos, _)| pos);
            (players.next(), players.next())
        };
        let player = first.ok_or_else(|| EngineError::InvalidLevel("no player tile found".to_string()))?;
        if let Some(other) = second {
            return Err(EngineError::InvalidLevel(format!(
                "more than one player tile, at {} and {}",
                player, other
            )));
        }

        let goals = grid.count_tiles_matching(TileKind::is_goal);
        debug!(%player, goals, rows = grid.height(), "level loaded");

        Ok(PuzzleState {
            grid,
            player,
            goal_count: GoalCount::Active(goals),
        })
    }

    /// A non-interactive screen. Moves are no-ops and it is never solved.
    pub fn inactive(grid: Grid) -> Self {
        PuzzleState {
            grid,
            player: Position::NONE,
            goal_count: GoalCount::Inactive,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn goal_count(&self) -> GoalCount {
        self.goal_count
    }

    pub fn goal_count_raw(&self) -> i64 {
        self.goal_count.raw()
    }

    pub fn is_active(&self) -> bool {
        self.goal_count != GoalCount::Inactive && !self.player.is_none()
    }

    pub fn is_solved(&self) -> bool {
        is_solved(self)
    }

    pub fn count_boxes(&self) -> usize {
        self.grid.count_tiles_matching(TileKind::is_box)
    }

    pub fn count_boxes_on_goals(&self) -> usize {
        self.grid.count_tiles_matching(|c| c == TileKind::BoxOnGoal)
    }
}

pub fn is_solved(state: &PuzzleState) -> bool {
    let GoalCount::Active(goals) = state.goal_count else {
        return false;
    };

    let mut covered = 0;
    for (_, c) in state.grid.iter() {
        if c.is_uncovered_goal() {
            // a bare goal remains
            return false;
        }
        if c == TileKind::BoxOnGoal {
            covered += 1;
        }
    }
    covered == goals
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::TileKind::*;

    #[test]
    fn load_finds_player_and_counts_every_goal_kind() {
        let grid = Grid::from_rows(vec![
            vec![Wall, Goal, BoxOnGoal, Wall],
            vec![Wall, PlayerOnGoal, Box, Floor],
        ]);
        let state = PuzzleState::load(grid).unwrap();
        assert_eq!(state.player(), Position::new(1, 1));
        assert_eq!(state.goal_count(), GoalCount::Active(3));
        assert_eq!(state.goal_count_raw(), 3);
        assert!(state.is_active());
    }

    #[test]
    fn load_without_player_is_invalid() {
        let grid = Grid::from_rows(vec![vec![Wall, Floor, Wall]]);
        let err = PuzzleState::load(grid).unwrap_err();
        assert!(matches!(err, EngineError::InvalidLevel(_)), "{err}");
    }

    #[test]
    fn load_with_two_players_is_invalid() {
        let grid = Grid::from_rows(vec![vec![Player, Floor, PlayerOnGoal]]);
        assert!(matches!(PuzzleState::load(grid), Err(EngineError::InvalidLevel(_))));
    }

    #[test]
    fn inactive_screen_is_never_solved() {
        let state = PuzzleState::inactive(Grid::from_rows(vec![vec![Wall, Void, Wall]]));
        assert_eq!(state.player(), Position::NONE);
        assert_eq!(state.goal_count_raw(), -1);
        assert!(!state.is_active());
        assert!(!state.is_solved());
    }

    #[test]
    fn goal_less_level_is_solved_immediately() {
        let state = PuzzleState::load(Grid::from_rows(vec![vec![Wall, Player, Floor, Wall]])).unwrap();
        assert_eq!(state.goal_count(), GoalCount::Active(0));
        assert!(state.is_solved());
    }

    #[test]
    fn deserialize_keeps_a_consistent_state() {
        let state = PuzzleState::load(Grid::from_rows(vec![vec![Wall, Player, Floor, Goal, Wall]])).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<PuzzleState>(&json).unwrap(), state);

        let screen = PuzzleState::inactive(Grid::from_rows(vec![vec![Wall, Void, Wall]]));
        let json = serde_json::to_string(&screen).unwrap();
        assert_eq!(serde_json::from_str::<PuzzleState>(&json).unwrap(), screen);
    }

    #[test]
    fn deserialize_rejects_player_away_from_its_tile() {
        let state = PuzzleState::load(Grid::from_rows(vec![vec![Wall, Player, Floor, Goal, Wall]])).unwrap();
        let mut value = serde_json::to_value(&state).unwrap();
        value["player"] = serde_json::to_value(Position::new(0, 2)).unwrap();

        let err = serde_json::from_value::<PuzzleState>(value).unwrap_err();
        assert!(err.to_string().contains("player recorded at"), "{err}");
    }

    #[test]
    fn deserialize_rejects_grid_without_player() {
        let state = PuzzleState::load(Grid::from_rows(vec![vec![Wall, Player, Goal, Wall]])).unwrap();
        let mut value = serde_json::to_value(&state).unwrap();
        value["grid"] = serde_json::to_value(Grid::from_rows(vec![vec![Wall, Floor, Goal, Wall]])).unwrap();

        let err = serde_json::from_value::<PuzzleState>(value).unwrap_err();
        assert!(err.to_string().contains("no player tile"), "{err}");
    }

    #[test]
    fn deserialize_rejects_wrong_goal_count() {
        let state = PuzzleState::load(Grid::from_rows(vec![vec![Wall, Player, Goal, Wall]])).unwrap();
        let mut value = serde_json::to_value(&state).unwrap();
        value["goal_count"] = serde_json::to_value(GoalCount::Active(3)).unwrap();

        assert!(serde_json::from_value::<PuzzleState>(value).is_err());
    }

    #[test]
    fn solved_needs_every_goal_covered() {
        let solved = PuzzleState::load(Grid::from_rows(vec![vec![Player, BoxOnGoal, BoxOnGoal]])).unwrap();
        assert!(solved.is_solved());

        let bare_goal = PuzzleState::load(Grid::from_rows(vec![vec![Player, BoxOnGoal, Goal, Box]])).unwrap();
        assert!(!bare_goal.is_solved());

        let standing_on_goal =
            PuzzleState::load(Grid::from_rows(vec![vec![PlayerOnGoal, BoxOnGoal, Box]])).unwrap();
        assert!(!standing_on_goal.is_solved());
    }
}
