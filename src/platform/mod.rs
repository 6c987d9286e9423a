// FHRSView - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: util layer, directories crate.
// Must NOT depend on: core, app, ui.

pub mod config;
