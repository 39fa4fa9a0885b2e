// src/gui/components/tooltip.rs
//
// Draws the overlay. The tooltip lives in document space (it scrolls with the
// page); the first frame after a record arrives is an invisible sizing pass,
// after which the placement is computed once.

use eframe::egui::{self, Align, Layout, RichText};

use crate::{
    config::consts::TOOLTIP_MAX_WIDTH,
    gui::app::App,
    overlay::{BoxSize, Rules, ScrollOffset, Viewport},
    record::GameRecord,
};

const TOOLTIP_ID: &str = "bgg-peek-tooltip";

/// Returns true when the close button was pressed.
fn contents(ui: &mut egui::Ui, record: &GameRecord) -> bool {
    let mut close = false;
    ui.set_max_width(TOOLTIP_MAX_WIDTH);

    ui.horizontal(|ui| {
        ui.label(RichText::new(&record.title).strong().size(16.0));
        ui.label(RichText::new(format!("({})", record.year)).weak());
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            close = ui.small_button("×").on_hover_text("Close").clicked();
        });
    });

    ui.horizontal_wrapped(|ui| {
        ui.label(format!("⭐ {}", record.rating_label()));
        ui.label(format!("⚖ {}", record.weight_label()));
        ui.label(format!("👥 {}", record.players_label()));
        ui.label(format!("⏳ {}", record.time_label()));
    });

    egui::Grid::new("bgg-peek-credits").num_columns(2).show(ui, |ui| {
        ui.label(RichText::new("Design").weak());
        ui.label(record.designers_label().to_string());
        ui.end_row();
        ui.label(RichText::new("Art").weak());
        ui.label(record.artists_label().to_string());
        ui.end_row();
    });

    ui.separator();
    ui.label(record.description.to_string());

    close
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(lookup) = app.overlay.content() else {
        return;
    };
    let record = lookup.record.clone();

    let vp = app.page.viewport;
    let scroll = app.page.scroll;
    let sizing = app.overlay.needs_placement();

    // Document → screen for the current scroll; before placement, a provisional
    // spot at the anchor (drawn invisibly).
    let pos = match app.overlay.placement() {
        Some(p) => vp.min + egui::vec2(p.left - scroll.x, p.top - scroll.y),
        None => {
            let a = app.overlay.anchor();
            let off = Rules::default().offset;
            vp.min + egui::vec2(a.x + off, a.y + off)
        }
    };

    let shown = egui::Area::new(egui::Id::new(TOOLTIP_ID))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .constrain(false)
        .show(ctx, |ui| {
            if sizing {
                ui.set_invisible();
            } else {
                ui.set_clip_rect(vp);
            }
            egui::Frame::popup(ui.style())
                .show(ui, |ui| contents(ui, &record))
                .inner
        });

    let rect = shown.response.rect;
    let close_clicked = shown.inner;

    if sizing {
        let size = BoxSize { width: rect.width(), height: rect.height() };
        let viewport = Viewport { width: vp.width(), height: vp.height() };
        app.overlay.place(size, viewport, ScrollOffset { x: scroll.x, y: scroll.y }, Rules::default());
        ctx.request_repaint();
        return;
    }

    if close_clicked {
        app.overlay.dismiss();
        return;
    }

    // A click anywhere outside the box dismisses it.
    let outside_click = ctx.input(|i| {
        i.pointer.primary_clicked()
            && i.pointer.interact_pos().is_some_and(|p| !rect.contains(p))
    });
    if outside_click {
        app.overlay.dismiss();
    }
}
