//! # trestle_core - Parametric Trestle Frame Generator
//!
//! `trestle_core` derives the exact 3D layout of every structural member of
//! a trestle-table frame from five scalar dimensions, plus the cut list
//! (distinct lath lengths and counts) a build needs. All inputs and outputs
//! are JSON-serializable, making it ideal for driving renderers or AI
//! assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: building a [`model::Table`] is a pure function of its
//!   [`config::Config`]; no caches, no incremental mutation
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Validated boundary**: degenerate dimensions fail with a named
//!   constraint before any geometry runs
//!
//! ## Quick Start
//!
//! ```rust
//! use trestle_core::model::Table;
//! use trestle_core::presets::Preset;
//!
//! let table = Table::build(&Preset::Original.config()).unwrap();
//!
//! for (name, group) in &table.lengths {
//!     println!("{}: {} x {:.1} cm", name, group.count, group.length);
//! }
//!
//! // Serialize for a renderer or API consumer
//! let json = serde_json::to_string_pretty(&table).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Input dimensions and boundary validation
//! - [`model`] - The geometric model-building layer (table, parts, solver)
//! - [`presets`] - Named dimension sets for the built pieces
//! - [`errors`] - Structured error types

pub mod config;
pub mod errors;
pub mod model;
pub mod presets;

// Re-export commonly used types at crate root for convenience
pub use config::Config;
pub use errors::{ModelError, ModelResult};
pub use model::{Lath, LathName, Part, Table};
pub use presets::Preset;
