use geo_types::{Geometry, Point as GeoPoint};
use mapframe::prelude::*;
use mapframe::styling::continents::classify_properties;
use serde_json::{json, Map, Value};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn props(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

fn country(index: usize, properties: Value) -> GeographyFeature {
    GeographyFeature::new(
        Geometry::Point(GeoPoint::new(0.0, 0.0)),
        props(properties),
        None,
        index,
    )
}

fn population() -> HashMap<String, f64> {
    [("Low", 0.0), ("Middle", 50.0), ("High", 100.0)]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

#[test]
fn test_choropleth_buckets_follow_observed_range() {
    init();
    let spec = ChoroplethSpec::default();
    let values = population();

    assert_eq!(color_for("Low", &values, &spec), Some("#E3F2FD"));
    assert_eq!(color_for("Middle", &values, &spec), Some("#42A5F5"));
    assert_eq!(color_for("High", &values, &spec), Some("#1565C0"));
    assert_eq!(color_for("Missing", &values, &spec), None);
}

#[test]
fn test_choropleth_explicit_bounds_clip_outliers() {
    let spec = ChoroplethSpec {
        colors: vec!["#000".into(), "#555".into(), "#fff".into()],
        min_value: Some(10.0),
        max_value: Some(20.0),
        null_color: Some("#eee".into()),
        ..ChoroplethSpec::default()
    };
    let values = population();

    assert_eq!(color_for("Low", &values, &spec), Some("#000"));
    assert_eq!(color_for("Middle", &values, &spec), Some("#fff"));
    assert_eq!(color_for("Missing", &values, &spec), Some("#eee"));
}

#[test]
fn test_choropleth_degenerate_inputs() {
    let spec = ChoroplethSpec {
        null_color: Some("#ccc".into()),
        ..ChoroplethSpec::default()
    };

    // A single value spans no range and takes the middle stop
    let single: HashMap<String, f64> = [("Only".to_string(), 7.0)].into_iter().collect();
    assert_eq!(color_for("Only", &single, &spec), Some("#42A5F5"));

    let mut with_nan = population();
    with_nan.insert("Broken".to_string(), f64::NAN);
    assert_eq!(color_for("Broken", &with_nan, &spec), Some("#ccc"));
    // NaN does not widen the observed range
    assert_eq!(color_for("High", &with_nan, &spec), Some("#1565C0"));

    let no_colors = ChoroplethSpec {
        colors: Vec::new(),
        ..spec.clone()
    };
    assert_eq!(color_for("High", &population(), &no_colors), Some("#ccc"));
}

#[test]
fn test_choropleth_scale_matches_feature_property() {
    let spec = ChoroplethSpec {
        match_key: "ISO_A3".to_string(),
        ..ChoroplethSpec::default()
    };
    let values: HashMap<String, f64> = [("FRA".to_string(), 1.0), ("JPN".to_string(), 3.0)]
        .into_iter()
        .collect();
    let scale = ChoroplethScale::new(&spec, &values);
    assert_eq!(scale.range(), Some((1.0, 3.0)));

    let france = country(0, json!({ "name": "France", "ISO_A3": "FRA" }));
    let japan = country(1, json!({ "name": "Japan", "ISO_A3": "JPN" }));
    let unnamed = country(2, json!({ "name": "Nowhere" }));
    assert_eq!(scale.color_for_feature(&france), Some("#E3F2FD"));
    assert_eq!(scale.color_for_feature(&japan), Some("#1565C0"));
    assert_eq!(scale.color_for_feature(&unnamed), None);
    assert_eq!(scale.color_for("JPN"), color_for("JPN", &values, &spec));
}

#[test]
fn test_classify_resolution_order() {
    init();
    let explicit = props(json!({ "CONTINENT": "north america", "ISO_A3": "FRA" }));
    assert_eq!(classify_properties(&explicit), Some(Continent::NorthAmerica));

    let by_code = props(json!({ "iso_a3": "bra", "name": "Japan" }));
    assert_eq!(classify_properties(&by_code), Some(Continent::SouthAmerica));

    let by_name = props(json!({ "NAME": "Kenya" }));
    assert_eq!(classify_properties(&by_name), Some(Continent::Africa));

    assert_eq!(classify_properties(&props(json!({ "name": "Atlantis" }))), None);
}

#[test]
fn test_classify_skips_empty_and_unknown_values() {
    // Empty strings are not truthy, so the lowercase property is consulted
    let empty_first = props(json!({ "CONTINENT": "", "continent": "Asia" }));
    assert_eq!(classify_properties(&empty_first), Some(Continent::Asia));

    // An unrecognized continent falls through to the country code
    let unknown = props(json!({ "CONTINENT": "Seven seas", "ISO_A3": "FRA" }));
    assert_eq!(classify_properties(&unknown), Some(Continent::Europe));

    // A truthy non-string hides later spellings of the same property
    let numeric = props(json!({ "ISO_A3": 250, "iso_a3": "FRA", "name": "Japan" }));
    assert_eq!(classify_properties(&numeric), Some(Continent::Asia));
}

#[test]
fn test_filter_by_continents() {
    let features = vec![
        country(0, json!({ "name": "France" })),
        country(1, json!({ "name": "Japan" })),
        country(2, json!({ "ISO_A3": "USA" })),
        country(3, json!({ "name": "Atlantis" })),
    ];

    let europe = filter_by_continents(&features, Continent::Europe);
    assert_eq!(europe.len(), 1);
    assert_eq!(europe[0].key, "France");

    let several = filter_by_continents(&features, [Continent::Asia, Continent::NorthAmerica]);
    let keys: Vec<_> = several.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["Japan", "geography-2"]);

    assert!(filter_by_continents(&features, ContinentSet::empty()).is_empty());
    assert_eq!(filter_by_continents(&features, ContinentSet::all()).len(), 3);
}

#[test]
fn test_continent_names_round_trip_through_json() {
    let continents: Vec<Continent> =
        serde_json::from_str(r#"["North America", "south_america", "OCEANIA"]"#).unwrap();
    assert_eq!(
        continents,
        vec![Continent::NorthAmerica, Continent::SouthAmerica, Continent::Oceania]
    );
    assert_eq!(
        serde_json::to_string(&Continent::NorthAmerica).unwrap(),
        r#""North America""#
    );
    assert!(serde_json::from_str::<Continent>(r#""Atlantis""#).is_err());
}
