// src/overlay/state.rs
//
// Hidden ⇄ Visible, plus the anchor and a request ticket.
//
// - `trigger` (new gesture): hide, capture the anchor, issue a new ticket.
// - `deliver` (record arrived): Hidden → Visible, only for the current ticket.
// - `dismiss` (close / click outside): Visible → Hidden.
// - `place`: once per Visible, after the box has been measured.

use super::placement::{self, AnchorPoint, BoxSize, Placement, Rules, ScrollOffset, Viewport};

/// Monotonic id of a triggering gesture. Completions for older tickets are stale.
pub type Ticket = u64;

#[derive(Clone, Debug, PartialEq)]
enum State<T> {
    Hidden,
    Visible { content: T, placement: Option<Placement> },
}

#[derive(Clone, Debug)]
pub struct Overlay<T> {
    anchor: AnchorPoint,
    ticket: Ticket,
    state: State<T>,
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Overlay<T> {
    pub fn new() -> Self {
        Self { anchor: AnchorPoint::default(), ticket: 0, state: State::Hidden }
    }

    /// A new gesture restarts everything: anything shown goes away and the
    /// returned ticket is the only one `deliver` will accept.
    pub fn trigger(&mut self, anchor: AnchorPoint) -> Ticket {
        self.ticket += 1;
        self.anchor = anchor;
        self.state = State::Hidden;
        logd!("Overlay: trigger #{} at ({:.0}, {:.0})", self.ticket, anchor.x, anchor.y);
        self.ticket
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket == self.ticket
    }

    /// Show `content` if it belongs to the latest gesture. Returns whether it did.
    /// Contents are replaced wholesale and placement starts over.
    pub fn deliver(&mut self, ticket: Ticket, content: T) -> bool {
        if !self.is_current(ticket) {
            logd!("Overlay: dropped stale result #{ticket} (current #{})", self.ticket);
            return false;
        }
        self.state = State::Visible { content, placement: None };
        true
    }

    pub fn dismiss(&mut self) {
        if self.is_visible() {
            logd!("Overlay: dismissed");
        }
        self.state = State::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, State::Visible { .. })
    }

    pub fn anchor(&self) -> AnchorPoint {
        self.anchor
    }

    pub fn content(&self) -> Option<&T> {
        match &self.state {
            State::Visible { content, .. } => Some(content),
            State::Hidden => None,
        }
    }

    pub fn placement(&self) -> Option<Placement> {
        match &self.state {
            State::Visible { placement, .. } => *placement,
            State::Hidden => None,
        }
    }

    /// Visible but not yet measured/placed.
    pub fn needs_placement(&self) -> bool {
        matches!(self.state, State::Visible { placement: None, .. })
    }

    /// Compute the placement from the measured box. Runs once per Visible;
    /// later calls return the stored result. `None` while Hidden.
    pub fn place(
        &mut self,
        size: BoxSize,
        viewport: Viewport,
        scroll: ScrollOffset,
        rules: Rules,
    ) -> Option<Placement> {
        let anchor = self.anchor;
        match &mut self.state {
            State::Hidden => None,
            State::Visible { placement: Some(p), .. } => Some(*p),
            State::Visible { placement, .. } => {
                let p = placement::place(anchor, size, viewport, scroll, rules);
                logd!(
                    "Overlay: placed at ({:.0}, {:.0}) clamped={} flipped={}",
                    p.left, p.top, p.clamped, p.flipped
                );
                *placement = Some(p);
                Some(p)
            }
        }
    }
}
