// FHRSView - ui/mod.rs
//
// Console presentation: prompts, menus, and table rendering.
// Dependencies: core layer for the types being rendered.

pub mod console;
pub mod table;
