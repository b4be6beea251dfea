//! The closed action vocabulary.

use std::fmt;

use fleet_core::{Location, PackageId, RobotId};

/// One abstract planner action, immutable once parsed or synthesized.
///
/// A closed enum with a fixed field set per variant keeps validation
/// exhaustive: the engine matches on all three shapes and the compiler
/// flags any future variant it forgot to handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// `robot` steps from `from` to the adjacent cell `to`.
    Move {
        robot: RobotId,
        from: Location,
        to: Location,
    },
    /// `robot` lifts `package` off the ground at `at`.
    Pickup {
        robot: RobotId,
        package: PackageId,
        at: Location,
    },
    /// `robot` sets `package` down at `at`.
    Drop {
        robot: RobotId,
        package: PackageId,
        at: Location,
    },
}

impl Action {
    /// The robot performing this action.
    #[inline]
    pub fn robot(&self) -> RobotId {
        match *self {
            Action::Move { robot, .. }
            | Action::Pickup { robot, .. }
            | Action::Drop { robot, .. } => robot,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move { robot, from, to } => write!(f, "{robot} move {from} -> {to}"),
            Action::Pickup { robot, package, at } => write!(f, "{robot} pickup {package} at {at}"),
            Action::Drop { robot, package, at } => write!(f, "{robot} drop {package} at {at}"),
        }
    }
}
