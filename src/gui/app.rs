// src/gui/app.rs
use std::{
    error::Error,
    sync::{atomic::AtomicU64, mpsc, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    lookup::{BggCatalog, Lookup, LookupError},
    overlay::{Overlay, Ticket},
    record::CandidateItem,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "BGG Peek",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::load())?))),
    )?;
    Ok(())
}

/// What a worker thread sends back: the gesture it answers, and the outcome.
pub type Delivery = (Ticket, Result<Lookup, LookupError>);

/// Geometry of the page view as of the last frame (screen coordinates).
#[derive(Clone, Copy, Debug)]
pub struct PageGeometry {
    pub viewport: egui::Rect,
    pub scroll: egui::Vec2,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self { viewport: egui::Rect::ZERO, scroll: egui::Vec2::ZERO }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub catalog: Arc<BggCatalog>,

    // the one tooltip; lives for the whole session
    pub overlay: Overlay<Lookup>,
    /// Mirror of the overlay's current ticket, readable from workers.
    pub latest_ticket: Arc<AtomicU64>,

    // page view bookkeeping
    pub page: PageGeometry,
    /// Last pointer press inside the page, viewport-relative.
    pub last_press: Option<egui::Pos2>,
    /// Last non-empty selection in the page text.
    pub selection: String,

    // last search, for the candidates panel
    pub last_query: String,
    pub candidates: Vec<CandidateItem>,
    pub chosen: Option<usize>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub alert: Option<String>,

    pub results_tx: mpsc::Sender<Delivery>,
    pub results_rx: mpsc::Receiver<Delivery>,
}

impl App {
    pub fn new(state: AppState) -> Result<Self, reqwest::Error> {
        let catalog = Arc::new(BggCatalog::new(state.options.clone())?);
        let (results_tx, results_rx) = mpsc::channel();

        logf!(
            "Init: search={} token={}",
            state.options.search_url,
            if state.options.has_token() { "set" } else { "none" }
        );

        Ok(Self {
            state,
            catalog,
            overlay: Overlay::new(),
            latest_ticket: Arc::new(AtomicU64::new(0)),
            page: PageGeometry::default(),
            last_press: None,
            selection: s!(),
            last_query: s!(),
            candidates: Vec::new(),
            chosen: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            alert: None,
            results_tx,
            results_rx,
        })
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Drain finished lookups. Stale ones (an older gesture) are dropped.
    fn poll_results(&mut self) {
        while let Ok((ticket, result)) = self.results_rx.try_recv() {
            if !self.overlay.is_current(ticket) {
                logd!("UI: ignoring result for stale request #{ticket}");
                continue;
            }
            self.running = false;

            match result {
                Ok(lookup) => {
                    self.last_query = lookup.query.clone();
                    self.candidates = lookup.candidates.clone();
                    self.chosen = Some(lookup.chosen);
                    self.status(format!("Showing \"{}\"", lookup.record.title));
                    self.overlay.deliver(ticket, lookup);
                }
                Err(e) => {
                    if let LookupError::NoResults { query } = &e {
                        self.last_query = query.clone();
                        self.candidates.clear();
                        self.chosen = None;
                    }
                    self.status(e.to_string());
                    self.alert = Some(e.to_string());
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        egui::TopBottomPanel::top("lookup_bar").show(ctx, |ui| {
            crate::gui::components::lookup_bar::draw(ui, self);
        });

        if self.state.gui.show_candidates {
            egui::TopBottomPanel::bottom("candidates")
                .resizable(true)
                .default_height(140.0)
                .show(ctx, |ui| {
                    crate::gui::components::candidates::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::page_view::draw(ui, self);
        });

        crate::gui::components::tooltip::draw(ctx, self);
        crate::gui::components::alert::draw(ctx, self);
    }
}
