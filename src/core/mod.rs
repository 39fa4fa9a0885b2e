// src/core/mod.rs

pub mod markup;
pub mod net;
pub mod sanitize;
