// src/config/state.rs
use super::options::LookupOptions;

/// Text shown in the page view at startup; something to select and right-click.
pub const SAMPLE_PAGE: &str = "\
Game night recap

We opened with Catan, as usual, and somebody insisted on the Seafarers rules.
After that a quick round of Wingspan while the pizza arrived. Later in the
evening the heavier crowd moved on to Terraforming Mars, and the rest of us
played Azul and Codenames until midnight.

Next week: Gloomhaven campaign, session four. Bring snacks.

(Select a game name, right-click it, and pick \"Search on BGG\".)
";

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Editable text the user selects game names from
    pub page_text: String,

    /// Lookup bar input
    pub query_text: String,

    /// Bottom panel with the last search's candidates
    pub show_candidates: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 900,
            window_h: 640,
            page_text: s!(SAMPLE_PAGE),
            query_text: s!(),
            show_candidates: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: LookupOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: LookupOptions::default(),
            gui: GuiState::default(),
        }
    }
}

impl AppState {
    pub fn load() -> Self {
        Self {
            options: LookupOptions::load_or_default(),
            gui: GuiState::default(),
        }
    }
}
