// src/gui/components/page_view.rs
//
// The "page": scrollable text the user selects game names from. Right-click
// offers a lookup of the selection. Also records the page's viewport and
// scroll offset each frame for tooltip placement.

use eframe::egui;

use crate::{gui::app::App, overlay::AnchorPoint};

/// Chars `[a, b)` of `text` (char indices, either order).
fn char_slice(text: &str, a: usize, b: usize) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    text.chars().skip(lo).take(hi - lo).collect()
}

/// Viewport-relative anchor for a secondary press inside the page.
fn gesture_anchor(secondary: bool, pos: Option<egui::Pos2>, viewport: egui::Rect) -> Option<egui::Pos2> {
    let pos = pos.filter(|p| secondary && viewport.contains(*p))?;
    Some((pos - viewport.min).to_pos2())
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let out = egui::ScrollArea::vertical()
        .id_salt("page")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::TextEdit::multiline(&mut app.state.gui.page_text)
                .desired_width(f32::INFINITY)
                .desired_rows(24)
                .show(ui)
        });

    let viewport = out.inner_rect;
    app.page.viewport = viewport;
    app.page.scroll = out.state.offset;

    let text_out = out.inner;

    // Remember the latest selection; a right-click may collapse it.
    if let Some(range) = text_out.state.cursor.char_range() {
        let sel = char_slice(&app.state.gui.page_text, range.primary.index, range.secondary.index);
        if !sel.trim().is_empty() {
            app.selection = sel;
        }
    }

    // The right-click that opens the menu is the gesture's anchor. Clicking
    // the menu item is a primary press and must not move it.
    let (secondary, pos) = ui.input(|i| (i.pointer.secondary_pressed(), i.pointer.interact_pos()));
    if let Some(p) = gesture_anchor(secondary, pos, viewport) {
        app.last_press = Some(p);
    }

    let selection = app.selection.trim().to_string();
    text_out.response.context_menu(|ui| {
        if selection.is_empty() {
            ui.add_enabled(false, egui::Button::new("Select a game name first"));
            return;
        }
        let label = format!("Search '{}' on BGG", crate::core::sanitize::truncate(&selection, 40));
        if ui.button(label).clicked() {
            let p = app.last_press.unwrap_or_default();
            crate::gui::actions::lookup(app, ui.ctx(), &selection, AnchorPoint::new(p.x, p.y));
            ui.close();
        }
    });
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, Rect};

    use super::{char_slice, gesture_anchor};

    #[test]
    fn char_slice_handles_reversed_and_unicode() {
        assert_eq!(char_slice("Ticket to Ride", 10, 14), "Ride");
        assert_eq!(char_slice("Ticket to Ride", 6, 0), "Ticket");
        assert_eq!(char_slice("Café Racer", 0, 4), "Café");
    }

    #[test]
    fn only_the_right_click_sets_the_anchor() {
        let vp = Rect::from_min_max(pos2(100.0, 50.0), pos2(900.0, 650.0));
        assert_eq!(gesture_anchor(true, Some(pos2(350.0, 250.0)), vp), Some(pos2(250.0, 200.0)));
        // clicking the menu item
        assert_eq!(gesture_anchor(false, Some(pos2(370.0, 270.0)), vp), None);
        // outside the page
        assert_eq!(gesture_anchor(true, Some(pos2(20.0, 20.0)), vp), None);
        assert_eq!(gesture_anchor(true, None, vp), None);
    }
}
