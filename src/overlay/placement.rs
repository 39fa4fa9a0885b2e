// src/overlay/placement.rs
//
// Keep a measured box fully on screen near the point the user clicked.
// Input is viewport-relative; output is document-relative (scroll added at
// placement time, so a scroll between click and arrival is compensated).

use serde::Serialize;

use crate::config::consts::{ANCHOR_OFFSET, EDGE_MARGIN};

/// Where the triggering gesture happened, viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct AnchorPoint {
    pub x: f32,
    pub y: f32,
}

impl AnchorPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Rendered overlay size; only known after one render.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rules {
    /// Gap between anchor and box, both axes.
    pub offset: f32,
    /// Space kept between the box and the right viewport edge when clamped.
    pub edge_margin: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self { offset: ANCHOR_OFFSET, edge_margin: EDGE_MARGIN }
    }
}

/// Final top-left, document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub left: f32,
    pub top: f32,
    /// Pulled left to fit the right edge.
    pub clamped: bool,
    /// Rendered above the anchor to fit the bottom edge.
    pub flipped: bool,
}

/// Below-right of the anchor by default. Overflowing the right edge pulls the
/// box left; overflowing the bottom flips it above the anchor. The two fixes
/// are independent. Neither edge ever goes negative.
pub fn place(
    anchor: AnchorPoint,
    size: BoxSize,
    viewport: Viewport,
    scroll: ScrollOffset,
    rules: Rules,
) -> Placement {
    let mut left = anchor.x + rules.offset;
    let mut top = anchor.y + rules.offset;

    let clamped = left + size.width > viewport.width;
    if clamped {
        left = viewport.width - size.width - rules.edge_margin;
    }

    let flipped = top + size.height > viewport.height;
    if flipped {
        top = anchor.y - size.height - rules.offset;
    }

    Placement {
        left: left.max(0.0) + scroll.x,
        top: top.max(0.0) + scroll.y,
        clamped,
        flipped,
    }
}
