// src/gui/components/alert.rs
//
// Error outcomes never open the tooltip; they get a small centered notice.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.alert.clone() else { return };

    let mut open = true;
    let mut ok = false;
    egui::Window::new("BGG Peek")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(msg);
            ui.add_space(6.0);
            ok = ui.button("OK").clicked();
        });

    if !open || ok {
        app.alert = None;
    }
}
