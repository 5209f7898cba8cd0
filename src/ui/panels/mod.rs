// GameLog - ui/panels/mod.rs

pub mod control;
pub mod demo;
pub mod log_window;
