//! # Character Catalog
//!
//! The read-only side of the guesser: attribute vocabularies, the immutable
//! character record and the ordered catalog the quiz narrows down.
//! This crate holds no quiz logic.

pub mod catalog;
pub mod character;
pub mod traits;

pub use catalog::*;
pub use character::*;
pub use traits::*;
