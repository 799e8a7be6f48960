use crate::core::{Direction, UserAction};

impl UserAction {
    pub fn all_actions() -> Vec<UserAction> {
        Direction::ALL.into_iter().map(UserAction::Move).collect()
    }
}

impl From<Direction> for UserAction {
    fn from(dir: Direction) -> Self {
        UserAction::Move(dir)
    }
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
