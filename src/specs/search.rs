// src/specs/search.rs
//! Search response → candidates.
//!
//! Shape (xmlapi2):
//! ```text
//! <items total="2">
//!   <item type="boardgame" id="13">
//!     <name type="primary" value="Catan"/>
//!     <yearpublished value="1995"/>
//!   </item>
//!   …
//! </items>
//! ```

use crate::core::markup::{self, Tag, VALUE_ATTR};
use crate::core::sanitize::decode_entities;
use crate::record::CandidateItem;

const ITEMS: &str = "items";
const ITEM: &str = "item";
const KIND_ATTR: &str = "type";
const ID_ATTR: &str = "id";
const NAME: &str = "name";

/// Does the payload have an `<items>` root at all? Anything else (HTML error
/// page, rate-limit text) is not a search response.
pub fn has_items(doc: &str) -> bool {
    markup::open_tags(doc, Tag::named(ITEMS)).next().is_some()
}

/// Every item of `kind`, document order. Empty when there are none.
///
/// An item without a primary name falls back to its first `<name>`; items
/// lacking an id or any name are skipped.
pub fn collect(doc: &str, kind: &str) -> Vec<CandidateItem> {
    let mut out = Vec::new();

    for el in markup::elements(doc, Tag::named(ITEM).with(KIND_ATTR, kind)) {
        let Some(id) = el.open.attr(ID_ATTR).map(str::trim).filter(|s| !s.is_empty()) else {
            logd!("Search: item without id skipped");
            continue;
        };
        let Some(name) = display_name(el.inner) else {
            logd!("Search: item {id} without name skipped");
            continue;
        };

        let year = markup::extract_value(el.inner, "yearpublished");
        out.push(CandidateItem::new(id, name).with_year(year));
    }

    logd!("Search: {} candidate(s) of type={kind}", out.len());
    out
}

/// Primary name if present, else the first name of any type. Entity-decoded.
pub fn display_name(inner: &str) -> Option<String> {
    let primary = markup::extract_attribute(inner, Tag::named(NAME).with("type", "primary"), VALUE_ATTR);
    let raw = if primary.is_known() { primary } else { markup::extract_value(inner, NAME) };
    raw.as_deref()
        .map(|s| decode_entities(s).trim().to_string())
        .filter(|s| !s.is_empty())
}
