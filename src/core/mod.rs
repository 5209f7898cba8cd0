// GameLog - core/mod.rs
//
// Core logging layer: entry model, store, sinks, filtering, export.
// Dependencies: util (constants, errors), chrono, tracing.
// Must NOT depend on: ui, platform, app.

pub mod export;
pub mod filter;
pub mod model;
pub mod sink;
pub mod store;
