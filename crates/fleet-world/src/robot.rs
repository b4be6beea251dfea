//! Robot state.

use fleet_core::{Location, PackageId, RobotId};

/// One robot: its identity, current cell, and what it carries.
///
/// Mutated exclusively by the execution engine while a run owns the world;
/// everything else reads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    pub id: RobotId,
    pub location: Location,
    pub carrying: Option<PackageId>,
}

impl Robot {
    /// A robot standing at `location` carrying nothing.
    pub fn new(id: RobotId, location: Location) -> Self {
        Self { id, location, carrying: None }
    }

    /// A robot is free exactly when its gripper is empty.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.carrying.is_none()
    }
}
