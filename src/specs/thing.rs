// src/specs/thing.rs
//! Detail response → `GameRecord`.
//!
//! Shape (xmlapi2, `stats=1`):
//! ```text
//! <items><item type="boardgame" id="13">
//!   <name type="primary" value="Catan"/>
//!   <description>…</description>
//!   <yearpublished value="1995"/> <minplayers value="3"/> …
//!   <link type="boardgamedesigner" id="11" value="Klaus Teuber"/>
//!   <statistics page="1"><ratings>
//!     <average value="7.1"/> … <averageweight value="2.29"/>
//!   </ratings></statistics>
//! </item></items>
//! ```
//!
//! Every field degrades to Unknown on its own; nothing here aborts the record.

use crate::config::consts::{ARTIST_KIND, DESIGNER_KIND, LINK_CAP};
use crate::core::markup::{self, Tag};
use crate::core::sanitize::{decode_entities, sanitize_text};
use crate::record::{CandidateItem, GameRecord};

use super::search::display_name;

const ITEM: &str = "item";
const RATINGS: &str = "ratings";

/// Does this look like a detail payload at all? (Any `<item` opening tag.)
pub fn has_item(doc: &str) -> bool {
    markup::open_tags(doc, Tag::named(ITEM)).next().is_some()
}

/// The `<item id="{id}">` block if there is one, else the whole document.
fn item_scope<'a>(doc: &'a str, id: &str) -> &'a str {
    markup::elements(doc, Tag::named(ITEM).with("id", id))
        .first()
        .map_or(doc, |el| el.inner)
}

fn links(doc: &str, kind: &str) -> Vec<String> {
    markup::extract_links(doc, kind)
        .iter()
        .take(LINK_CAP)
        .map(|n| decode_entities(n))
        .collect()
}

/// Compose the record for `chosen` out of its detail payload.
///
/// The title comes from the payload's primary name and falls back to the
/// candidate's name, so a record always has one.
pub fn build(doc: &str, chosen: &CandidateItem, desc_budget: usize) -> GameRecord {
    let item = item_scope(doc, &chosen.id);

    // <average> and friends also appear outside <ratings> in some variants
    let stats = markup::slice_section(item, RATINGS).unwrap_or(item);

    let record = GameRecord {
        id: chosen.id.clone(),
        title: display_name(item).unwrap_or_else(|| chosen.name.clone()),
        year: markup::extract_value(item, "yearpublished"),
        designers: links(item, DESIGNER_KIND),
        artists: links(item, ARTIST_KIND),
        min_players: markup::extract_value(item, "minplayers"),
        max_players: markup::extract_value(item, "maxplayers"),
        playing_time_minutes: markup::extract_value(item, "playingtime"),
        rating_average: markup::extract_value(stats, "average"),
        weight_average: markup::extract_value(stats, "averageweight"),
        description: markup::extract_text(item, "description").map(|raw| sanitize_text(raw, desc_budget)),
    };

    let missing = record.unknown_fields();
    if !missing.is_empty() {
        logd!("Detail: id={} unknown fields: {}", record.id, missing.join(", "));
    }
    record
}
