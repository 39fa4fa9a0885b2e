// src/record.rs
//
// Shapes that come out of the extraction pipeline. Everything scalar stays a
// string: the catalog's markup carries no types, and the GUI/CLI only display.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::consts::UNKNOWN;

/// A scalar pulled out of a document, or the explicit "couldn't find it".
///
/// `Unknown` is not the same as an empty string: `<description></description>`
/// is `Known("")`, a missing `<description>` is `Unknown`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Field {
    Known(String),
    #[default]
    Unknown,
}

impl Field {
    pub fn known(s: impl Into<String>) -> Self {
        Field::Known(s.into())
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Field::Known(_))
    }

    pub fn is_unknown(&self) -> bool {
        !self.is_known()
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Field::Known(s) => Some(s.as_str()),
            Field::Unknown => None,
        }
    }

    pub fn map<F: FnOnce(&str) -> String>(&self, f: F) -> Field {
        match self {
            Field::Known(s) => Field::Known(f(s)),
            Field::Unknown => Field::Unknown,
        }
    }

    /// Numeric view, for display formatting only.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_deref()?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// `"?"` unless there's a parsable number, then `precision` decimals.
    pub fn fixed(&self, precision: usize) -> String {
        match self.as_f64() {
            Some(v) => format!("{v:.precision$}"),
            None => s!(UNKNOWN),
        }
    }
}

impl From<Option<String>> for Field {
    fn from(v: Option<String>) -> Self {
        v.map_or(Field::Unknown, Field::Known)
    }
}

impl From<Option<&str>> for Field {
    fn from(v: Option<&str>) -> Self {
        v.map_or(Field::Unknown, |s| Field::Known(s!(s)))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_deref().unwrap_or(UNKNOWN))
    }
}

// Known → "text", Unknown → null
impl Serialize for Field {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Known(s) => ser.serialize_str(s),
            Field::Unknown => ser.serialize_none(),
        }
    }
}

/// One search hit, in the order the catalog returned it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CandidateItem {
    pub id: String,
    pub name: String,
    pub year: Field,
}

impl CandidateItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), year: Field::Unknown }
    }

    pub fn with_year(mut self, year: Field) -> Self {
        self.year = year;
        self
    }
}

/// The finished record for one selected game. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub year: Field,
    /// At most two, document order.
    pub designers: Vec<String>,
    /// At most two, document order.
    pub artists: Vec<String>,
    pub min_players: Field,
    pub max_players: Field,
    pub playing_time_minutes: Field,
    pub rating_average: Field,
    pub weight_average: Field,
    /// Decoded and cut to the display budget.
    pub description: Field,
}

impl GameRecord {
    /// Fields that degraded to Unknown, by name. Logging only.
    pub fn unknown_fields(&self) -> Vec<&'static str> {
        [
            ("year", &self.year),
            ("minplayers", &self.min_players),
            ("maxplayers", &self.max_players),
            ("playingtime", &self.playing_time_minutes),
            ("average", &self.rating_average),
            ("averageweight", &self.weight_average),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, f)| f.is_unknown())
        .map(|(n, _)| n)
        .collect()
    }

    pub fn rating_label(&self) -> String {
        self.rating_average.fixed(1)
    }

    pub fn weight_label(&self) -> String {
        join!(&self.weight_average.fixed(2), " / 5")
    }

    pub fn players_label(&self) -> String {
        format!("{}-{}", self.min_players, self.max_players)
    }

    pub fn time_label(&self) -> String {
        join!(&self.playing_time_minutes.to_string(), "m")
    }

    pub fn designers_label(&self) -> Field {
        crate::core::markup::display_links(&self.designers)
    }

    pub fn artists_label(&self) -> Field {
        crate::core::markup::display_links(&self.artists)
    }
}
