// tests/lookup_pipeline.rs
//
// The whole pipeline against captured payloads, through the Catalog seam.

use std::cell::RefCell;
use std::collections::HashMap;

use bgg_peek::core::net::NetError;
use bgg_peek::lookup::{self, Catalog, LookupError};
use bgg_peek::progress::Progress;
use bgg_peek::record::Field;
use bgg_peek::select::Rule;
use pretty_assertions::assert_eq;

const SEARCH_CATAN: &str = include_str!("fixtures/search_catan.xml");
const SEARCH_WINGSPAN: &str = include_str!("fixtures/search_wingspan.xml");
const SEARCH_EMPTY: &str = include_str!("fixtures/search_empty.xml");
const THING_13: &str = include_str!("fixtures/thing_13.xml");
const THING_NO_WEIGHT: &str = include_str!("fixtures/thing_no_weight.xml");

/// Serves fixtures; remembers which ids were asked for.
#[derive(Default)]
struct FixtureCatalog {
    search: HashMap<String, &'static str>,
    things: HashMap<String, &'static str>,
    fail_search: bool,
    asked: RefCell<Vec<String>>,
}

impl FixtureCatalog {
    fn standard() -> Self {
        let mut c = Self::default();
        c.search.insert("catan".into(), SEARCH_CATAN);
        c.search.insert("wingspan".into(), SEARCH_WINGSPAN);
        c.things.insert("13".into(), THING_13);
        c.things.insert("266192".into(), THING_NO_WEIGHT);
        c.things.insert("325".into(), "<html>429 Too Many Requests</html>");
        c
    }
}

impl Catalog for FixtureCatalog {
    fn search(&self, query: &str) -> Result<String, NetError> {
        if self.fail_search {
            return Err("connection reset".into());
        }
        Ok(self.search.get(&query.to_lowercase()).copied().unwrap_or(SEARCH_EMPTY).to_string())
    }

    fn thing(&self, id: &str) -> Result<String, NetError> {
        self.asked.borrow_mut().push(id.to_string());
        self.things
            .get(id)
            .map(|s| s.to_string())
            .ok_or_else(|| format!("HTTP error: 404 thing {id}").into())
    }
}

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    count: Option<usize>,
    finished: bool,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn candidates(&mut self, count: usize) {
        self.count = Some(count);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn exact_name_match_wins_over_rank() {
    let cat = FixtureCatalog::standard();
    let l = lookup::run(&cat, "  catan ", 300, None).unwrap();

    assert_eq!(l.query, "catan");
    // expansion filtered out, order kept
    let ids: Vec<&str> = l.candidates.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["325", "27710", "13", "2807"]);
    assert_eq!(l.chosen, 2);
    assert_eq!(l.rule, Rule::Exact);
    assert_eq!(*cat.asked.borrow(), vec!["13".to_string()]);

    let r = &l.record;
    assert_eq!(r.id, "13");
    assert_eq!(r.title, "CATAN");
    assert_eq!(r.year, Field::known("1995"));
    assert_eq!(r.min_players, Field::known("3"));
    assert_eq!(r.max_players, Field::known("4"));
    assert_eq!(r.playing_time_minutes, Field::known("120"));
    assert_eq!(r.rating_average, Field::known("7.10549"));
    assert_eq!(r.weight_average, Field::known("2.2935"));
    assert_eq!(r.designers, vec!["Klaus Teuber"]);
    assert_eq!(r.artists, vec!["Volkan Baga", "Tanja Donner"]);
    assert_eq!(r.rating_label(), "7.1");
    assert_eq!(r.weight_label(), "2.29 / 5");
    assert_eq!(r.players_label(), "3-4");
    assert_eq!(r.time_label(), "120m");
}

#[test]
fn description_is_decoded_and_capped() {
    let cat = FixtureCatalog::standard();
    let r = lookup::run(&cat, "Catan", 80, None).unwrap().record;
    let desc = r.description.as_deref().unwrap();
    assert!(desc.starts_with("In CATAN (formerly \"The Settlers of Catan\"), players"));
    assert!(desc.ends_with("..."));
    assert_eq!(desc.chars().count(), 80 + 3);
    assert!(!desc.contains("&quot;"));
}

#[test]
fn missing_weight_is_unknown_and_record_still_renders() {
    let cat = FixtureCatalog::standard();
    let l = lookup::run(&cat, "wingspan", 300, None).unwrap();
    let r = &l.record;
    assert_eq!(l.rule, Rule::Exact);
    assert_eq!(r.weight_average, Field::Unknown);
    assert_eq!(r.weight_label(), "? / 5");
    assert_eq!(r.rating_average, Field::known("8.05"));
    assert_eq!(r.title, "Wingspan");
    assert_eq!(r.artists_label(), Field::known("Natalia Rojas, Ana Maria Martinez Jaramillo"));
    assert_eq!(r.unknown_fields(), vec!["averageweight"]);
    // short description is not marked as cut
    assert!(!r.description.as_deref().unwrap().ends_with("..."));
}

#[test]
fn no_exact_match_takes_first_ranked() {
    let mut cat = FixtureCatalog::standard();
    cat.search.insert("settlers".into(), SEARCH_CATAN);
    let err = lookup::run(&cat, "settlers", 300, None).unwrap_err();
    // first ranked is 325 whose detail is garbage
    assert_eq!(*cat.asked.borrow(), vec!["325".to_string()]);
    assert!(matches!(err, LookupError::Transport(_)));
    assert_eq!(err.to_string(), "Error fetching data.");
}

#[test]
fn empty_search_is_no_results_and_never_fetches_detail() {
    let cat = FixtureCatalog::standard();
    let err = lookup::run(&cat, "Nonexistent Game", 300, None).unwrap_err();
    assert_eq!(err, LookupError::NoResults { query: "Nonexistent Game".into() });
    assert_eq!(err.to_string(), "No games found on BGG.");
    assert!(cat.asked.borrow().is_empty());
}

#[test]
fn unreadable_search_payload_is_transport_not_no_results() {
    let mut cat = FixtureCatalog::standard();
    cat.search.insert("catan".into(), "<html><body>Rate limit exceeded</body></html>");
    let err = lookup::run(&cat, "catan", 300, None).unwrap_err();
    match &err {
        LookupError::Transport(detail) => assert!(detail.starts_with("search:")),
        other => panic!("expected transport failure, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Error fetching data.");
    assert!(cat.asked.borrow().is_empty());
}

#[test]
fn blank_query_is_no_results() {
    let cat = FixtureCatalog::standard();
    assert!(matches!(
        lookup::run(&cat, "   ", 300, None),
        Err(LookupError::NoResults { .. })
    ));
}

#[test]
fn transport_failures_are_one_generic_outcome() {
    let cat = FixtureCatalog { fail_search: true, ..FixtureCatalog::standard() };
    let err = lookup::run(&cat, "catan", 300, None).unwrap_err();
    match &err {
        LookupError::Transport(detail) => assert!(detail.contains("connection reset")),
        other => panic!("expected transport failure, got {other:?}"),
    }

    let mut cat = FixtureCatalog::standard();
    cat.things.remove("13");
    let err = lookup::run(&cat, "catan", 300, None).unwrap_err();
    assert_eq!(err.to_string(), "Error fetching data.");
}

#[test]
fn progress_sees_both_stages() {
    let cat = FixtureCatalog::standard();
    let mut rec = Recorder::default();
    lookup::run(&cat, "catan", 300, Some(&mut rec)).unwrap();
    assert_eq!(rec.count, Some(4));
    assert_eq!(rec.lines.len(), 2);
    assert!(rec.lines[0].starts_with("Searching"));
    assert!(rec.lines[1].contains("CATAN"));
    assert!(rec.finished);
}

#[test]
fn lookup_serializes_unknown_as_null() {
    let cat = FixtureCatalog::standard();
    let l = lookup::run(&cat, "wingspan", 300, None).unwrap();
    let v = serde_json::to_value(&l).unwrap();
    assert_eq!(v["record"]["weight_average"], serde_json::Value::Null);
    assert_eq!(v["record"]["year"], "2019");
    assert_eq!(v["rule"], "exact");
    assert_eq!(v["chosen"], 0);
}
