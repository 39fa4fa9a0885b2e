// src/gui/progress.rs
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use eframe::egui;

use crate::{overlay::Ticket, progress::Progress};

/// Mirrors pipeline progress into the status line and wakes the UI.
///
/// Bound to one lookup's ticket: once a newer lookup starts, this one goes
/// quiet so it can't overwrite the newer status.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    latest: Arc<AtomicU64>,
    ticket: Ticket,
    ctx: egui::Context,
    found: Option<usize>,
}

impl GuiProgress {
    pub fn new(
        status: Arc<Mutex<String>>,
        latest: Arc<AtomicU64>,
        ticket: Ticket,
        ctx: egui::Context,
    ) -> Self {
        Self { status, latest, ticket, ctx, found: None }
    }

    fn is_current(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.ticket
    }

    fn set_status(&self, msg: impl Into<String>) {
        if !self.is_current() {
            return;
        }
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, query: &str) {
        self.found = None;
        self.set_status(format!("Looking up \"{query}\"…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn candidates(&mut self, count: usize) {
        self.found = Some(count);
    }
    fn finish(&mut self) {
        match self.found {
            Some(n) if n > 0 => self.set_status(format!("Done ({n} candidate(s))")),
            _ => self.set_status(s!("Done")),
        }
    }
}
