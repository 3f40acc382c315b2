//! Continent classification and filtering for country geographies.
//!
//! Classification is best effort: the lookup tables cannot know every
//! spelling found in the wild, so an unknown country is simply unclassified.

use super::continent_tables::{COUNTRY_NAMES, ISO_A3_CODES};
use crate::data::feature::GeographyFeature;
use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Properties that may carry an explicit continent
const CONTINENT_PROPS: &[&str] = &["CONTINENT", "continent"];

/// Properties that may carry a three-letter country code
const ISO_PROPS: &[&str] = &[
    "ISO_A3", "iso_a3", "ADM0_A3", "adm0_a3", "SOV_A3", "sov_a3", "ISO3", "iso3",
];

/// Properties that may carry a country name
const NAME_PROPS: &[&str] = &[
    "name",
    "NAME",
    "ADMIN",
    "admin",
    "NAME_LONG",
    "name_long",
    "SOVEREIGNT",
    "sovereignt",
];

static NAME_LOOKUP: Lazy<FxHashMap<&'static str, Continent>> =
    Lazy::new(|| COUNTRY_NAMES.iter().copied().collect());

static ISO_LOOKUP: Lazy<FxHashMap<&'static str, Continent>> =
    Lazy::new(|| ISO_A3_CODES.iter().copied().collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

impl Continent {
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    /// Display label, e.g. `"North America"`
    pub fn as_str(self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = crate::MapError;

    /// Case-insensitive; accepts the display label with or without the space
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "africa" => Ok(Continent::Africa),
            "asia" => Ok(Continent::Asia),
            "europe" => Ok(Continent::Europe),
            "northamerica" => Ok(Continent::NorthAmerica),
            "southamerica" => Ok(Continent::SouthAmerica),
            "oceania" => Ok(Continent::Oceania),
            "antarctica" => Ok(Continent::Antarctica),
            _ => Err(crate::MapError::ParseError(format!("unknown continent '{}'", s))),
        }
    }
}

impl Serialize for Continent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Continent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A set of continents, accepted as a single value or many
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContinentSet(u8);

impl ContinentSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        Continent::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, continent: Continent) {
        self.0 |= continent.bit();
    }

    pub fn contains(&self, continent: Continent) -> bool {
        self.0 & continent.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Continent> + '_ {
        Continent::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl From<Continent> for ContinentSet {
    fn from(continent: Continent) -> Self {
        Self(continent.bit())
    }
}

impl From<&[Continent]> for ContinentSet {
    fn from(continents: &[Continent]) -> Self {
        continents.iter().copied().collect()
    }
}

impl From<Vec<Continent>> for ContinentSet {
    fn from(continents: Vec<Continent>) -> Self {
        continents.into_iter().collect()
    }
}

impl<const N: usize> From<[Continent; N]> for ContinentSet {
    fn from(continents: [Continent; N]) -> Self {
        continents.into_iter().collect()
    }
}

impl FromIterator<Continent> for ContinentSet {
    fn from_iter<I: IntoIterator<Item = Continent>>(iter: I) -> Self {
        let mut set = Self::empty();
        for continent in iter {
            set.insert(continent);
        }
        set
    }
}

/// JavaScript-style truthiness for property values
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The first truthy value among `names`, only if it is a string.
///
/// Later properties are not consulted when the first truthy one is not a
/// string or misses the table; a feature with conflicting fields resolves by
/// property order.
fn first_truthy_str<'a>(
    properties: &'a serde_json::Map<String, Value>,
    names: &[&str],
) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| properties.get(*name))
        .find(|value| is_truthy(value))
        .and_then(Value::as_str)
}

/// Continent of a feature from its properties, or `None` when unclassifiable.
///
/// Resolution order: an explicit continent property, then a country code,
/// then a country name.
pub fn classify(feature: &GeographyFeature) -> Option<Continent> {
    classify_properties(&feature.properties)
}

pub fn classify_properties(properties: &serde_json::Map<String, Value>) -> Option<Continent> {
    if let Some(raw) = first_truthy_str(properties, CONTINENT_PROPS) {
        match raw.parse() {
            Ok(continent) => return Some(continent),
            Err(_) => log::trace!("unrecognized continent property '{}'", raw),
        }
    }

    if let Some(code) = first_truthy_str(properties, ISO_PROPS) {
        if let Some(continent) = ISO_LOOKUP.get(code.to_uppercase().as_str()) {
            return Some(*continent);
        }
    }

    first_truthy_str(properties, NAME_PROPS).and_then(|name| NAME_LOOKUP.get(name).copied())
}

/// Keeps the features whose continent is in `continents`; unclassifiable
/// features are dropped
pub fn filter_by_continents(
    features: &[GeographyFeature],
    continents: impl Into<ContinentSet>,
) -> Vec<GeographyFeature> {
    let set = continents.into();
    features
        .iter()
        .filter(|feature| classify(feature).map_or(false, |c| set.contains(c)))
        .cloned()
        .collect()
}
