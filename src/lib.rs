// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod gui;
pub mod lookup;
pub mod overlay;
pub mod progress;
pub mod record;
pub mod select;
pub mod specs;
