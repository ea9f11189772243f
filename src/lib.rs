//! Core library for Lootdex, a viewer for RPG item catalogs stored as JSON.
//! Normalizes heterogeneous record shapes into a uniform item model, orders
//! them deterministically, groups them by requirement level, and evaluates
//! filter predicates; the GUI shell renders the result.

pub mod catalog;
mod filter;
mod gui;
mod load;
pub mod statics;

pub use catalog::{
    ItemRecord, LevelBucket, Normalized, RawCatalog, compare_items, group_by_level, normalize,
    quality_rank, sort_items,
};
pub use filter::FilterState;
pub use gui::run_gui;
pub use load::{CatalogSource, LoadError, LoadedCatalog, RememberedPath};
