//! Package state.

use fleet_core::{Location, PackageId, RobotId};

/// One package: where it is (on the ground *or* in a robot's gripper) and
/// where it needs to go.
///
/// Invariant: exactly one of `location` / `carrier` is `Some` at any time —
/// never both, never neither.  [`Package::placement_ok`] checks it; the
/// execution engine preserves it across pickup and drop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub id: PackageId,
    /// Ground cell while not carried.
    pub location: Option<Location>,
    /// Carrying robot while picked up.
    pub carrier: Option<RobotId>,
    pub destination: Location,
    /// Set when the package is dropped on its destination cell.
    pub delivered: bool,
}

impl Package {
    /// A package waiting on the ground at `location`.
    pub fn new(id: PackageId, location: Location, destination: Location) -> Self {
        Self {
            id,
            location: Some(location),
            carrier: None,
            destination,
            delivered: false,
        }
    }

    /// `true` when exactly one of location/carrier holds.
    #[inline]
    pub fn placement_ok(&self) -> bool {
        self.location.is_some() != self.carrier.is_some()
    }

    #[inline]
    pub fn is_carried(&self) -> bool {
        self.carrier.is_some()
    }
}
