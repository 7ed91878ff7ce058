//! # Quiz Core
//!
//! The decision logic of the character guesser. Reads a [`Catalog`] from
//! `character_catalog`, asks a fixed script of attribute questions and
//! narrows the candidates after every answer.
//!
//! ## Core Components
//!
//! - **script**: The fixed question list and the answers collected against it
//! - **filter**: Pure candidate filtering plus narrative override rules
//! - **controller**: The question-flow state machine and presentation snapshots
//! - **config**: Preview size and override rules, loadable from TOML
//!
//! Nothing here draws anything or persists anything. Every play-through
//! starts from an empty state.
//!
//! [`Catalog`]: character_catalog::Catalog

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod script;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use filter::*;
pub use script::*;
