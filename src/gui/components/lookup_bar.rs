// src/gui/components/lookup_bar.rs

use eframe::egui::{self, widgets::Spinner};

use crate::{gui::app::App, overlay::AnchorPoint};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Game:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.query_text)
                .hint_text("e.g. Wingspan")
                .desired_width(240.0),
        );
        let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let button = ui.add_enabled(
            !app.state.gui.query_text.trim().is_empty(),
            egui::Button::new("Look up"),
        );

        if button.clicked() || enter {
            // no click inside the page; anchor under the button instead
            let vp = app.page.viewport;
            let anchor = AnchorPoint::new((button.rect.left() - vp.min.x).max(0.0), 0.0);
            let query = app.state.gui.query_text.clone();
            crate::gui::actions::lookup(app, ui.ctx(), &query, anchor);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let before = app.state.gui.show_candidates;
            ui.checkbox(&mut app.state.gui.show_candidates, "Candidates");
            if before != app.state.gui.show_candidates {
                logd!("UI: show_candidates → {}", app.state.gui.show_candidates);
            }
        });
    });
}
