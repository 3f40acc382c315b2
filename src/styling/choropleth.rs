use crate::core::constants::DEFAULT_COLOR_STOPS;
use crate::data::feature::{value_as_text, GeographyFeature};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// How data values are turned into stepped fill colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChoroplethSpec {
    /// Feature property whose value keys into the data map
    pub match_key: String,
    /// Color stops from lowest to highest value
    pub colors: Vec<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    /// Fill for features without data
    pub null_color: Option<String>,
}

impl Default for ChoroplethSpec {
    fn default() -> Self {
        Self {
            match_key: "name".to_string(),
            colors: DEFAULT_COLOR_STOPS.iter().map(|c| c.to_string()).collect(),
            min_value: None,
            max_value: None,
            null_color: None,
        }
    }
}

/// Observed range of the finite values in `values`
fn observed_range<'a>(values: impl Iterator<Item = &'a f64>) -> Option<(f64, f64)> {
    values
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Picks the stepped color for `value` within `[min, max]`.
///
/// Equal bounds select the middle stop. Values outside the range land in the
/// first or last bucket.
fn bucket<'a>(spec: &'a ChoroplethSpec, value: f64, min: f64, max: f64) -> Option<&'a str> {
    let stops = &spec.colors;
    if stops.is_empty() || !value.is_finite() {
        return spec.null_color.as_deref();
    }
    if max == min {
        return Some(stops[stops.len() / 2].as_str());
    }
    let t = (value - min) / (max - min);
    let n = stops.len();
    let index = (t * n as f64).floor();
    let index = if index.is_nan() || index < 0.0 {
        0
    } else {
        (index as usize).min(n - 1)
    };
    Some(stops[index].as_str())
}

/// Color for `key` given the whole value map.
///
/// Returns `spec.null_color` when the key has no value; `min`/`max` default
/// to the observed extremes of the map.
pub fn color_for<'a, S: BuildHasher>(
    key: &str,
    values: &HashMap<String, f64, S>,
    spec: &'a ChoroplethSpec,
) -> Option<&'a str> {
    let Some(&value) = values.get(key) else {
        return spec.null_color.as_deref();
    };
    let observed = observed_range(values.values());
    let min = spec.min_value.or(observed.map(|r| r.0));
    let max = spec.max_value.or(observed.map(|r| r.1));
    match (min, max) {
        (Some(min), Some(max)) => bucket(spec, value, min, max),
        _ => spec.null_color.as_deref(),
    }
}

/// A choropleth with its range resolved once, for coloring many features
#[derive(Debug, Clone)]
pub struct ChoroplethScale<'a, S> {
    spec: &'a ChoroplethSpec,
    values: &'a HashMap<String, f64, S>,
    range: Option<(f64, f64)>,
}

impl<'a, S: BuildHasher> ChoroplethScale<'a, S> {
    pub fn new(spec: &'a ChoroplethSpec, values: &'a HashMap<String, f64, S>) -> Self {
        let observed = observed_range(values.values());
        let min = spec.min_value.or(observed.map(|r| r.0));
        let max = spec.max_value.or(observed.map(|r| r.1));
        let range = min.zip(max);
        log::trace!("choropleth range {:?} over {} values", range, values.len());
        Self {
            spec,
            values,
            range,
        }
    }

    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Same result as [`color_for`] without rescanning the map
    pub fn color_for(&self, key: &str) -> Option<&'a str> {
        match (self.values.get(key), self.range) {
            (Some(&value), Some((min, max))) => bucket(self.spec, value, min, max),
            _ => self.spec.null_color.as_deref(),
        }
    }

    /// Color for a feature, keyed by its `match_key` property
    pub fn color_for_feature(&self, feature: &GeographyFeature) -> Option<&'a str> {
        match feature
            .property(&self.spec.match_key)
            .and_then(value_as_text)
        {
            Some(key) => self.color_for(&key),
            None => self.spec.null_color.as_deref(),
        }
    }
}
