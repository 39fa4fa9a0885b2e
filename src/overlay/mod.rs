// src/overlay/mod.rs
//! The one transient tooltip: where it goes ([`placement`]) and when it's up
//! ([`state`]). No drawing here; `gui::components::tooltip` does that.
pub mod placement;
pub mod state;

pub use placement::{place, AnchorPoint, BoxSize, Placement, Rules, ScrollOffset, Viewport};
pub use state::{Overlay, Ticket};
