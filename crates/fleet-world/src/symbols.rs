//! Planner-symbol resolution.
//!
//! The external planner speaks in lowercase symbols: `r0`, `p2`,
//! `zone_3_4`.  This table is the single bidirectional mapping between those
//! names and internal `RobotId`/`PackageId`/`Location` values.  The core
//! never parses coordinates out of a symbol on its own — a zone name that was
//! never registered (off-grid, or an obstacle cell) is an unknown symbol.

use std::collections::HashMap;

use fleet_core::{Location, PackageId, RobotId};
use fleet_grid::Grid;

use crate::{WorldError, WorldResult};

/// Bidirectional name table for one scenario.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    robots: HashMap<String, RobotId>,
    packages: HashMap<String, PackageId>,
    locations: HashMap<String, Location>,
}

impl SymbolTable {
    /// Build the table for a scenario: `r<N>` per robot, `p<N>` per package,
    /// and a `zone_<row>_<col>` symbol for every free grid cell.
    pub fn for_scenario(grid: &Grid, robot_count: u32, package_count: u32) -> Self {
        let mut table = Self::default();
        for i in 0..robot_count {
            table.robots.insert(format!("r{i}"), RobotId(i));
        }
        for i in 0..package_count {
            table.packages.insert(format!("p{i}"), PackageId(i));
        }
        for loc in grid.free_cells() {
            table.locations.insert(Self::zone_name(loc), loc);
        }
        table
    }

    /// The planner-side name for a cell.
    pub fn zone_name(loc: Location) -> String {
        format!("zone_{}_{}", loc.row, loc.col)
    }

    pub fn robot(&self, name: &str) -> WorldResult<RobotId> {
        self.robots
            .get(name)
            .copied()
            .ok_or_else(|| WorldError::UnknownSymbol(name.to_owned()))
    }

    pub fn package(&self, name: &str) -> WorldResult<PackageId> {
        self.packages
            .get(name)
            .copied()
            .ok_or_else(|| WorldError::UnknownSymbol(name.to_owned()))
    }

    pub fn location(&self, name: &str) -> WorldResult<Location> {
        self.locations
            .get(name)
            .copied()
            .ok_or_else(|| WorldError::UnknownSymbol(name.to_owned()))
    }

    pub fn robot_name(&self, id: RobotId) -> String {
        format!("r{}", id.0)
    }

    pub fn package_name(&self, id: PackageId) -> String {
        format!("p{}", id.0)
    }
}
