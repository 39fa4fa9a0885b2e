// src/gui/components/candidates.rs
//
// Last search's candidates in catalog order; the picked row is marked.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.last_query.is_empty() {
        ui.weak("No lookups yet.");
        return;
    }
    ui.horizontal(|ui| {
        ui.strong(format!("\"{}\"", app.last_query));
        ui.label(format!("{} candidate(s)", app.candidates.len()));
    });

    if app.candidates.is_empty() {
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::exact(24.0))
        .column(Column::exact(40.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(60.0))
        .header(20.0, |mut header| {
            for h in ["", "#", "Name", "Year", "Id"] {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for (i, c) in app.candidates.iter().enumerate() {
                let picked = app.chosen == Some(i);
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        if picked {
                            ui.label("▶");
                        }
                    });
                    row.col(|ui| {
                        ui.label(format!("{}", i + 1));
                    });
                    row.col(|ui| {
                        let name = RichText::new(&c.name);
                        ui.label(if picked { name.strong() } else { name });
                    });
                    row.col(|ui| {
                        ui.label(c.year.to_string());
                    });
                    row.col(|ui| {
                        ui.monospace(&c.id);
                    });
                });
            }
        });
}
