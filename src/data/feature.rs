use crate::core::geo::LngLat;
use crate::data::centroid::spherical_centroid;
use geo_types::Geometry;
use serde_json::{Map, Value};

/// A geometry with its property bag and a stable identity key.
///
/// The key is derived from the input alone, so re-parsing the same document
/// yields the same keys and hover/click events stay attributable.
#[derive(Debug, Clone, PartialEq)]
pub struct GeographyFeature {
    pub key: String,
    pub id: Option<Value>,
    pub properties: Map<String, Value>,
    pub geometry: Geometry<f64>,
}

impl GeographyFeature {
    /// Builds a feature whose key comes from `id`, `name`, `NAME`, or the
    /// position in the source collection, in that order
    pub fn new(
        geometry: Geometry<f64>,
        properties: Map<String, Value>,
        id: Option<Value>,
        index: usize,
    ) -> Self {
        let id = id.filter(|value| !value.is_null());
        let key = feature_key(id.as_ref(), &properties, index);
        Self {
            key,
            id,
            properties,
            geometry,
        }
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// First non-empty string (or number) found under any of `names`
    pub fn first_property(&self, names: &[&str]) -> Option<String> {
        names
            .iter()
            .filter_map(|name| self.properties.get(*name))
            .find_map(value_as_text)
    }

    /// Display name used by labels and tooltips
    pub fn name(&self) -> Option<String> {
        self.first_property(&["name", "NAME", "name_en"])
    }

    /// Spherical centroid of the geometry, `None` when the geometry is empty
    pub fn centroid(&self) -> Option<LngLat> {
        spherical_centroid(&self.geometry)
    }
}

/// Identity key for a feature
pub fn feature_key(id: Option<&Value>, properties: &Map<String, Value>, index: usize) -> String {
    id.and_then(value_as_text)
        .or_else(|| properties.get("name").and_then(value_as_text))
        .or_else(|| properties.get("NAME").and_then(value_as_text))
        .unwrap_or_else(|| format!("geography-{}", index))
}

/// Renders scalar JSON values as text; empty strings, null, `false`, arrays
/// and objects count as absent
pub(crate) fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
