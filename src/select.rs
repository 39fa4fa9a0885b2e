// src/select.rs
//! Picks the one candidate a query means.
//!
//! 1. Exact name match: trimmed, case-insensitive. First in document order wins.
//! 2. Otherwise the first candidate: the catalog already ranked them.
//!
//! No similarity scoring. The candidate list is never re-sorted.

use crate::record::CandidateItem;

/// Which rule produced the choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Exact,
    FirstRanked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice<'a> {
    pub item: &'a CandidateItem,
    /// Position in the original candidate list.
    pub index: usize,
    pub rule: Rule,
}

fn same_name(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

/// `None` only for an empty list.
pub fn select<'a>(candidates: &'a [CandidateItem], query: &str) -> Option<Choice<'a>> {
    let exact = candidates
        .iter()
        .enumerate()
        .find(|(_, c)| same_name(&c.name, query));

    match exact {
        Some((index, item)) => Some(Choice { item, index, rule: Rule::Exact }),
        None => candidates
            .first()
            .map(|item| Choice { item, index: 0, rule: Rule::FirstRanked }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cands(v: &[(&str, &str)]) -> Vec<CandidateItem> {
        v.iter().map(|(id, name)| CandidateItem::new(*id, *name)).collect()
    }

    #[test]
    fn exact_match_beats_rank() {
        let c = cands(&[("1", "Catan: Seafarers"), ("2", "Catan")]);
        let got = select(&c, "catan").unwrap();
        assert_eq!(got.item.id, "2");
        assert_eq!(got.index, 1);
        assert_eq!(got.rule, Rule::Exact);
    }

    #[test]
    fn no_match_takes_first() {
        let c = cands(&[("5", "Foo"), ("6", "Bar")]);
        let got = select(&c, "Baz").unwrap();
        assert_eq!(got.item.id, "5");
        assert_eq!(got.rule, Rule::FirstRanked);
    }

    #[test]
    fn whitespace_and_case_are_ignored() {
        let c = cands(&[("1", "Azul: Summer Pavilion"), ("2", " AZUL ")]);
        assert_eq!(select(&c, "  azul\n").unwrap().item.id, "2");
        let c = cands(&[("1", "x"), ("2", "Élan")]);
        assert_eq!(select(&c, "élan").unwrap().item.id, "2");
    }

    #[test]
    fn first_exact_wins_among_duplicates() {
        let c = cands(&[("1", "Other"), ("2", "Wingspan"), ("3", "wingspan")]);
        assert_eq!(select(&c, "WINGSPAN").unwrap().item.id, "2");
    }

    #[test]
    fn empty_list_has_no_choice() {
        assert_eq!(select(&[], "anything"), None);
    }
}
