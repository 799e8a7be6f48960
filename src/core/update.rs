use tracing::{debug, trace};

use crate::core::TileKind::{Box, BoxOnGoal, Floor, Goal, Player, PlayerOnGoal, Void, Wall};
use crate::core::error::Result;
use crate::core::{
    Direction, GameChangeType, GameUpdate, MoveRejection, Position, PuzzleState, RulesConfig, TileKind,
    UserAction,
};

/// The writes one accepted move makes. Every position in here has been read
/// from the grid and is known to be inside a row.
#[derive(Debug, Clone, Copy)]
struct MovePlan {
    from: Position,
    vacated: Option<TileKind>,
    to: Position,
    arrived: TileKind,
    pushed_box: Option<(Position, TileKind)>,
}

impl MovePlan {
    fn change_type(&self) -> GameChangeType {
        if self.pushed_box.is_some() {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        }
    }

    fn apply(&self, state: &mut PuzzleState) -> Result<()> {
        if let Some((beyond, landed)) = self.pushed_box {
            state.grid.set(beyond, landed)?;
        }
        state.grid.set(self.to, self.arrived)?;
        if let Some(vacated) = self.vacated {
            state.grid.set(self.from, vacated)?;
        }
        state.player = self.to;
        Ok(())
    }
}

fn plan_move(state: &PuzzleState, dir: Direction, rules: &RulesConfig) -> std::result::Result<MovePlan, MoveRejection> {
    if !state.is_active() {
        return Err(MoveRejection::NoActivePlayer);
    }
    let grid = &state.grid;
    let from = state.player;
    let to = from + dir;

    let target = grid.get(to);
    let (arrived, pushed_box) = match target {
        Wall => return Err(MoveRejection::Wall),
        Player | PlayerOnGoal => return Err(MoveRejection::Occupied),
        Floor => (Player, None),
        Goal => (PlayerOnGoal, None),
        Void => {
            if !grid.contains(to) {
                return Err(MoveRejection::OffGrid);
            }
            if !rules.void_walkable() {
                return Err(MoveRejection::VoidBlocked);
            }
            (Player, None)
        }
        Box | BoxOnGoal => {
            let beyond_pos = to + dir;
            let beyond = grid.get(beyond_pos);
            if !grid.contains(beyond_pos) {
                return Err(MoveRejection::OffGrid);
            }
            if !rules.accepts_box(beyond) {
                return Err(if beyond == Void {
                    MoveRejection::VoidBlocked
                } else {
                    MoveRejection::BoxBlocked
                });
            }
            let landed = if beyond == Goal { BoxOnGoal } else { Box };
            let arrived = if target == BoxOnGoal { PlayerOnGoal } else { Player };
            (arrived, Some((beyond_pos, landed)))
        }
    };

    let current = grid.get(from);
    let vacated = current.is_player().then(|| current.without_occupant());

    Ok(MovePlan {
        from,
        vacated,
        to,
        arrived,
        pushed_box,
    })
}

/// Resolves one action without touching `state`.
pub fn step(state: &PuzzleState, action: UserAction, rules: &RulesConfig) -> GameUpdate {
    let dir = match action {
        UserAction::Move(d) => d,
    };

    let plan = match plan_move(state, dir, rules) {
        Ok(plan) => plan,
        Err(rejection) => {
            debug!(?dir, player = %state.player, %rejection, "move rejected");
            return GameUpdate::NoChange(rejection);
        }
    };

    let mut next = state.clone();
    if let Err(err) = plan.apply(&mut next) {
        debug!(?dir, %err, "move plan left the grid");
        return GameUpdate::NoChange(MoveRejection::OffGrid);
    }
    trace!(?dir, from = %plan.from, to = %plan.to, change = ?plan.change_type(), "move applied");
    GameUpdate::NextState(next, plan.change_type())
}

/// Returns the state after moving in `direction`. Rejected moves return an
/// identical copy.
pub fn attempt_move(state: &PuzzleState, direction: Direction) -> PuzzleState {
    attempt_move_with(state, direction, &RulesConfig::default())
}

pub fn attempt_move_with(state: &PuzzleState, direction: Direction, rules: &RulesConfig) -> PuzzleState {
    match step(state, UserAction::Move(direction), rules) {
        GameUpdate::NextState(next, _) => next,
        GameUpdate::NoChange(_) => state.clone(),
    }
}

impl PuzzleState {
    /// Moves in place. `None` means the move was rejected and nothing changed.
    pub fn apply(&mut self, direction: Direction, rules: &RulesConfig) -> Option<GameChangeType> {
        let plan = match plan_move(self, direction, rules) {
            Ok(plan) => plan,
            Err(rejection) => {
                debug!(dir = ?direction, player = %self.player, %rejection, "move rejected");
                return None;
            }
        };
        if let Err(err) = plan.apply(self) {
            debug!(dir = ?direction, %err, "move plan left the grid");
            return None;
        }
        Some(plan.change_type())
    }
}
