// src/gui/actions.rs
use std::{
    sync::{atomic::Ordering, Arc},
    thread,
};

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    lookup,
    overlay::AnchorPoint,
};

/// Start a lookup for `query`, remembering `anchor` for the tooltip.
///
/// Hides whatever is showing and issues a new ticket; the worker's answer is
/// only shown if no newer lookup started meanwhile.
pub fn lookup(app: &mut App, ctx: &egui::Context, query: &str, anchor: AnchorPoint) {
    let query = query.trim();
    if query.is_empty() {
        app.status("Nothing to look up");
        return;
    }

    let ticket = app.overlay.trigger(anchor);
    app.latest_ticket.store(ticket, Ordering::Release);
    app.running = true;
    logf!("UI: lookup #{ticket} \"{query}\"");

    let query = s!(query);
    let catalog = Arc::clone(&app.catalog);
    let budget = app.state.options.desc_budget;
    let tx = app.results_tx.clone();
    let mut prog =
        GuiProgress::new(app.status.clone(), app.latest_ticket.clone(), ticket, ctx.clone());
    let ctx = ctx.clone();

    thread::spawn(move || {
        let result = lookup::run(catalog.as_ref(), &query, budget, Some(&mut prog));
        // receiver gone means the window closed
        let _ = tx.send((ticket, result));
        ctx.request_repaint();
    });
}
