// Pokemon Tournament Schema - Shared type definitions
// This crate holds the static enums and template types shared between the
// battle engine and its content catalog (`data/catalog.ron`).

pub use catalog_types::*;
pub use effect::*;
pub use element::*;

pub mod catalog_types;
pub mod effect;
pub mod element;
