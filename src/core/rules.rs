use serde::{Deserialize, Serialize};

use crate::core::TileKind;

/// How authored `Void` cells behave. Off-grid positions are never entered
/// whatever the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoidPolicy {
    /// Void is walked on like floor and accepts a pushed box.
    #[default]
    Walkable,
    /// Void blocks like a wall.
    Blocked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub void_policy: VoidPolicy,
}

impl RulesConfig {
    pub fn blocked_void() -> Self {
        RulesConfig {
            void_policy: VoidPolicy::Blocked,
        }
    }

    pub fn void_walkable(&self) -> bool {
        self.void_policy == VoidPolicy::Walkable
    }

    /// Whether a pushed box may come to rest on `beyond`.
    pub fn accepts_box(&self, beyond: TileKind) -> bool {
        match beyond {
            TileKind::Floor | TileKind::Goal => true,
            TileKind::Void => self.void_walkable(),
            TileKind::Wall
            | TileKind::Box
            | TileKind::BoxOnGoal
            | TileKind::Player
            | TileKind::PlayerOnGoal => false,
        }
    }
}
