use serde::{Deserialize, Serialize};

/// Every cell holds exactly one of these. Goal-bearing compound kinds exist
/// because a cell cannot carry a box or player flag on top of a goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
    Void,
    Box,
    BoxOnGoal,
    Player,
    PlayerOnGoal,
    Goal,
}

impl TileKind {
    pub const ALL: [TileKind; 8] = [
        TileKind::Wall,
        TileKind::Floor,
        TileKind::Void,
        TileKind::Box,
        TileKind::BoxOnGoal,
        TileKind::Player,
        TileKind::PlayerOnGoal,
        TileKind::Goal,
    ];

    pub fn is_box(self) -> bool {
        matches!(self, TileKind::Box | TileKind::BoxOnGoal)
    }

    pub fn is_player(self) -> bool {
        matches!(self, TileKind::Player | TileKind::PlayerOnGoal)
    }

    /// Goal cells whether covered or not.
    pub fn is_goal(self) -> bool {
        matches!(self, TileKind::Goal | TileKind::BoxOnGoal | TileKind::PlayerOnGoal)
    }

    /// A goal with no box on it.
    pub fn is_uncovered_goal(self) -> bool {
        matches!(self, TileKind::Goal | TileKind::PlayerOnGoal)
    }

    /// What the cell turns back into once its occupant leaves.
    pub fn without_occupant(self) -> TileKind {
        match self {
            TileKind::Player | TileKind::Box => TileKind::Floor,
            TileKind::PlayerOnGoal | TileKind::BoxOnGoal => TileKind::Goal,
            other => other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// No active player, used by the title and win screens.
    pub const NONE: Position = Position { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    pub fn is_none(&self) -> bool {
        *self == Position::NONE
    }
}

impl std::ops::Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Self::Output {
        let (dr, dc) = dir.delta();
        Position {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl std::ops::Sub<Direction> for Position {
    type Output = Position;

    fn sub(self, dir: Direction) -> Self::Output {
        let (dr, dc) = dir.delta();
        Position {
            row: self.row - dr,
            col: self.col - dc,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// (row, col) unit vector.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

/// Why a move left the state untouched. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    NoActivePlayer,
    Wall,
    Occupied,
    BoxBlocked,
    VoidBlocked,
    OffGrid,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MoveRejection::NoActivePlayer => "No active player",
            MoveRejection::Wall => "Cannot walk into a wall",
            MoveRejection::Occupied => "Cell is already occupied",
            MoveRejection::BoxBlocked => "Cannot push block",
            MoveRejection::VoidBlocked => "Cannot move into the void",
            MoveRejection::OffGrid => "Cannot move out of bounds",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone)]
pub enum GameUpdate {
    NextState(crate::core::PuzzleState, GameChangeType),
    NoChange(MoveRejection),
}
