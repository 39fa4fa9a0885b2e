// src/lookup.rs
//! The whole pipeline for one query:
//!
//! ```text
//! query → Catalog::search → specs::search::collect → select
//!       → Catalog::thing(chosen id) → specs::thing::build → GameRecord
//! ```
//!
//! Fetching is behind [`Catalog`] so the pipeline runs the same against the
//! live API and against captured payloads.

use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;

use crate::{
    config::{consts::SEARCH_KIND, options::LookupOptions},
    core::net::{self, NetError},
    progress::{NullProgress, Progress},
    record::{CandidateItem, GameRecord},
    select::{self, Rule},
    specs,
};

/// Where the two raw documents come from.
pub trait Catalog {
    fn search(&self, query: &str) -> Result<String, NetError>;
    fn thing(&self, id: &str) -> Result<String, NetError>;
}

/// The real thing: boardgamegeek.com xmlapi2.
#[derive(Clone, Debug)]
pub struct BggCatalog {
    opts: LookupOptions,
    client: Client,
}

impl BggCatalog {
    /// The HTTP client is built here, so each catalog honours its own
    /// timeout and user agent.
    pub fn new(opts: LookupOptions) -> Result<Self, reqwest::Error> {
        let client = net::client(&opts)?;
        Ok(Self { opts, client })
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, NetError> {
        net::http_get(&self.client, self.opts.token.as_deref(), url, query)
    }
}

impl Catalog for BggCatalog {
    fn search(&self, query: &str) -> Result<String, NetError> {
        self.get(&self.opts.search_url, &[("type", SEARCH_KIND), ("query", query)])
    }

    fn thing(&self, id: &str) -> Result<String, NetError> {
        self.get(&self.opts.thing_url, &[("stats", "1"), ("id", id)])
    }
}

/// The two outcomes the presentation layer tells apart.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No games found on BGG.")]
    NoResults { query: String },

    /// Network, status, timeout or unreadable payload. The detail is for logs.
    #[error("Error fetching data.")]
    Transport(String),
}

impl LookupError {
    fn transport(stage: &str, e: impl std::fmt::Display) -> Self {
        LookupError::Transport(format!("{stage}: {e}"))
    }
}

/// A finished lookup: what was searched, what came back, what was picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub query: String,
    pub candidates: Vec<CandidateItem>,
    /// Index into `candidates`.
    pub chosen: usize,
    pub rule: Rule,
    pub record: GameRecord,
}

impl Lookup {
    pub fn chosen_item(&self) -> &CandidateItem {
        &self.candidates[self.chosen]
    }
}

/// Run one query start to finish. Search and detail fetches are strictly
/// sequential: the second needs the id picked from the first.
pub fn run(
    catalog: &dyn Catalog,
    query: &str,
    desc_budget: usize,
    progress: Option<&mut dyn Progress>,
) -> Result<Lookup, LookupError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let query = query.trim();
    progress.begin(query);
    let result = run_inner(catalog, query, desc_budget, &mut *progress);
    match &result {
        Ok(l) => logf!(
            "Lookup: \"{}\" → id={} \"{}\" ({:?}, {}/{})",
            query, l.record.id, l.record.title, l.rule, l.chosen + 1, l.candidates.len()
        ),
        Err(LookupError::NoResults { .. }) => logf!("Lookup: \"{query}\" → no results"),
        Err(LookupError::Transport(detail)) => loge!("Lookup: \"{query}\" failed: {detail}"),
    }
    progress.finish();
    result
}

fn run_inner(
    catalog: &dyn Catalog,
    query: &str,
    desc_budget: usize,
    progress: &mut dyn Progress,
) -> Result<Lookup, LookupError> {
    if query.is_empty() {
        return Err(LookupError::NoResults { query: s!() });
    }

    progress.log(&format!("Searching BGG for \"{query}\"…"));
    let search_doc = catalog.search(query).map_err(|e| LookupError::transport("search", e))?;
    if !specs::search::has_items(&search_doc) {
        return Err(LookupError::transport("search", format!("no <items> in payload: {:?}", head(&search_doc))));
    }
    let candidates = specs::search::collect(&search_doc, SEARCH_KIND);
    progress.candidates(candidates.len());

    let Some(choice) = select::select(&candidates, query) else {
        return Err(LookupError::NoResults { query: s!(query) });
    };
    let (chosen, rule) = (choice.index, choice.rule);
    let item = choice.item.clone();
    logd!("Select: id={} \"{}\" by {:?}", item.id, item.name, rule);

    progress.log(&format!("Fetching details for \"{}\"…", item.name));
    let detail_doc = catalog.thing(&item.id).map_err(|e| LookupError::transport("detail", e))?;
    if !specs::thing::has_item(&detail_doc) {
        return Err(LookupError::transport("detail", format!("no <item> in payload: {:?}", head(&detail_doc))));
    }

    let record = specs::thing::build(&detail_doc, &item, desc_budget);
    Ok(Lookup { query: s!(query), candidates, chosen, rule, record })
}

/// First chars of a payload, for the log.
fn head(doc: &str) -> String {
    doc.chars().take(120).collect()
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Answer one request with a tiny `<items>` body; hand back the raw request.
    fn serve_once() -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/xmlapi2/search", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut sock, _) = listener.accept().unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = sock.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                req.extend_from_slice(&buf[..n]);
            }
            let body = r#"<items total="0"></items>"#;
            let resp = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(resp.as_bytes()).unwrap();
            String::from_utf8_lossy(&req).to_lowercase()
        });
        (url, handle)
    }

    fn options(url: String, agent: &str) -> LookupOptions {
        LookupOptions { search_url: url, user_agent: s!(agent), ..LookupOptions::default() }
    }

    #[test]
    fn each_catalog_sends_its_own_agent_and_token() {
        // a configured proxy would swallow the loopback requests
        if ["http_proxy", "HTTP_PROXY", "all_proxy", "ALL_PROXY"]
            .iter()
            .any(|k| std::env::var_os(k).is_some())
        {
            return;
        }

        let (url, server) = serve_once();
        let first = BggCatalog::new(options(url, "first-agent/1").with_token("tok-a")).unwrap();
        first.search("catan").unwrap();
        let req = server.join().unwrap();
        assert!(req.contains("user-agent: first-agent/1"));
        assert!(req.contains("authorization: bearer tok-a"));
        assert!(req.contains("query=catan"));

        let (url, server) = serve_once();
        let second = BggCatalog::new(options(url, "second-agent/2")).unwrap();
        second.search("wingspan").unwrap();
        let req = server.join().unwrap();
        assert!(req.contains("user-agent: second-agent/2"));
        assert!(!req.contains("authorization:"));
    }
}
