// FHRSView - app/mod.rs
//
// Application layer: ingestion orchestration, session state, menu loop.
// Dependencies: core and ui layers.
// Must NOT depend on: platform specifics.

pub mod load;
pub mod menu;
pub mod session;
