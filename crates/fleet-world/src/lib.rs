//! `fleet-world` — mutable world state and the scenario boundary.
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`robot`]    | `Robot` — position and carried package                  |
//! | [`package`]  | `Package` — position or carrier, destination, delivered |
//! | [`scenario`] | `Scenario` — grid + robots + packages + assignments     |
//! | [`symbols`]  | `SymbolTable` — planner names ↔ internal values         |
//!
//! Robots and packages are created once per scenario and mutated exclusively
//! by the execution engine.  The symbol table is owned by this boundary layer:
//! the core never converts between coordinates and planner names implicitly.

pub mod error;
pub mod package;
pub mod robot;
pub mod scenario;
pub mod symbols;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WorldError, WorldResult};
pub use package::Package;
pub use robot::Robot;
pub use scenario::Scenario;
pub use symbols::SymbolTable;
