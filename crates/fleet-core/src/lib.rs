//! `fleet-core` — foundational types for the `rust_fleet` delivery simulator.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It intentionally
//! has no `fleet-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`ids`]    | `RobotId`, `PackageId`                     |
//! | [`loc`]    | `Location`, Manhattan distance             |
//! | [`tick`]   | `Tick`                                     |
//! | [`config`] | `ExecConfig`, `ExecMode`, `PathPolicy`     |
//! | [`error`]  | `CoreError`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod loc;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ExecConfig, ExecMode, PathPolicy};
pub use error::{CoreError, CoreResult};
pub use ids::{PackageId, RobotId};
pub use loc::Location;
pub use tick::Tick;
