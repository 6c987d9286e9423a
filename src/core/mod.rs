// FHRSView - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app.

pub mod discovery;
pub mod export;
pub mod fields;
pub mod model;
pub mod pager;
pub mod query;
pub mod rating;
