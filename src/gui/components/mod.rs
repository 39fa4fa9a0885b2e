// src/gui/components/mod.rs
pub mod alert;
pub mod candidates;
pub mod lookup_bar;
pub mod page_view;
pub mod tooltip;
