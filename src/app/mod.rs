// GameLog - app/mod.rs
//
// Application layer: state management and the demo game's log actions.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod actions;
pub mod state;
