#![cfg(feature = "builtin-projections")]

use mapframe::prelude::*;
use serde_json::Value;

const WORLD: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "id": "FRA", "properties": { "name": "France" },
      "geometry": { "type": "Polygon", "coordinates": [[[-4, 43], [7, 43], [7, 50], [-4, 50], [-4, 43]]] } },
    { "type": "Feature", "properties": { "name": "Japan", "ISO_A3": "JPN" },
      "geometry": { "type": "Polygon", "coordinates": [[[130, 31], [142, 31], [142, 43], [130, 43], [130, 31]]] } },
    { "type": "Feature", "properties": { "ADMIN": "Kenya" },
      "geometry": { "type": "Polygon", "coordinates": [[[34, -4], [41, -4], [41, 4], [34, 4], [34, -4]]] } },
    { "type": "Feature", "properties": { "name": "Ghost" }, "geometry": null }
  ]
}"#;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn world() -> Vec<GeographyFeature> {
    init();
    parse_features(WORLD).unwrap()
}

fn mercator() -> MapOptions {
    MapOptions::default().with_projection(ProjectionFamily::Mercator)
}

fn items_json(scene: &Scene, kind: &str) -> Vec<Value> {
    scene
        .items_of_kind(kind)
        .map(|item| serde_json::to_value(item).unwrap())
        .collect()
}

#[test]
fn test_geojson_to_scene() {
    let features = world();
    let keys: Vec<&str> = features.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["FRA", "Japan", "geography-2"]);

    let view = MapView::new(mercator(), features);
    let scene = view.scene();
    assert_eq!((scene.width, scene.height), (800.0, 400.0));
    assert_eq!(scene.transform, ZoomTransform::identity(&Viewport::new(800.0, 400.0)));

    let geographies = items_json(&scene, "geography");
    assert_eq!(geographies.len(), 3);
    let france = &geographies[0];
    assert_eq!(france["type"], "geography");
    assert_eq!(france["key"], "FRA");
    assert_eq!(france["fill"], "#ECECEC");
    assert_eq!(france["stroke"], "#D6D6D6");
    assert_eq!(france["strokeWidth"], 0.5);
    let d = france["d"].as_str().unwrap();
    assert!(d.starts_with('M') && d.ends_with('Z'), "{}", d);
}

#[test]
fn test_continent_filter_from_options_json() {
    let options = MapOptions::from_json(
        r#"{ "projection": "geoMercator", "continents": ["Africa", "Asia"] }"#,
    )
    .unwrap();
    let view = MapView::new(options, world());
    let keys: Vec<&str> = view.features().iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["Japan", "geography-2"]);
    assert!(view.feature("FRA").is_none());
}

#[test]
fn test_overlays_from_options_json() {
    let options = MapOptions::from_json(
        r##"{
            "projection": "geoMercator",
            "markers": [
                { "coordinates": [2.35, 48.85], "shape": "diamond", "color": "#123456", "size": 10 },
                { "coordinates": [139.7, 35.7], "shape": "custom", "customSvg": "M0 0L24 24" },
                { "coordinates": [36.8, -1.3], "shape": "custom", "customSvg": "<svg></svg>", "size": 9 }
            ],
            "lines": [
                { "from": [2.35, 48.85], "to": [139.7, 35.7], "dashed": true, "strokeWidth": 3 }
            ],
            "annotations": [
                { "coordinates": [36.8, -1.3], "text": "Nairobi", "dx": -40 }
            ]
        }"##,
    )
    .unwrap();
    let scene = MapView::new(options, world()).scene();

    let markers = items_json(&scene, "marker");
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[0]["glyph"]["kind"], "path");
    assert_eq!(markers[0]["glyph"]["d"], "M0,-10 L7,0 L0,10 L-7,0 Z");
    assert_eq!(markers[0]["fill"], "#123456");
    assert_eq!(markers[0]["stroke"], "#FFFFFF");
    assert_eq!(markers[0]["strokeWidth"], 2.0);

    assert_eq!(markers[1]["glyph"]["kind"], "icon");
    assert_eq!(
        markers[1]["glyph"]["transform"],
        "scale(0.5) translate(-12, -12)"
    );
    assert_eq!(markers[1]["glyph"]["strokeWidth"], 2.0);
    assert_eq!(markers[1]["fill"], "#FF5533");

    assert_eq!(markers[2]["glyph"]["kind"], "circle");
    assert_eq!(markers[2]["glyph"]["radius"], 9.0);

    let lines = items_json(&scene, "line");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["dashArray"], "5,3");
    assert_eq!(lines[0]["strokeWidth"], 3.0);
    assert!(lines[0]["d"].as_str().unwrap().contains(" L"));
    assert_eq!(scene.items_of_kind("lineEndpoint").count(), 2);

    let annotations = items_json(&scene, "annotation");
    assert_eq!(annotations.len(), 1);
    let note = &annotations[0];
    assert_eq!(note["textAnchor"], "end");
    assert_eq!(note["textColor"], "#000");
    assert_eq!(note["color"], "#FF5533");
    assert_eq!(note["fontSize"], 14.0);
    let subject_x = note["subject"]["x"].as_f64().unwrap();
    let text_x = note["textPosition"]["x"].as_f64().unwrap();
    assert!((text_x - (subject_x - 40.0)).abs() < 1e-9);
}

#[test]
fn test_interaction_moves_scene_transform() {
    let options = mercator().with_interaction(InteractionProfile::Standard);
    let mut view = MapView::new(options, world());

    assert!(view
        .controller_mut()
        .wheel_zoom(-1000.0, Point::new(400.0, 200.0)));
    let events = view.controller_mut().drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], ZoomEvent::Change(state) if state.scale == 2.0));

    let scene = view.scene();
    assert_eq!(scene.transform.scale, 2.0);
    assert_eq!(
        scene.transform.to_svg(),
        "translate(400, 200) scale(2) translate(-400, -200)"
    );
}

#[test]
fn test_click_events_without_zoom() {
    let mut options = mercator();
    options.markers = vec![MapMarker::new(LngLat::new(2.35, 48.85))];
    let mut view = MapView::new(options, world());

    let outcome = view.click("Japan", Instant::now()).unwrap();
    assert!(outcome.animation.is_none());
    assert!(!view.controller().is_animating());
    match outcome.event {
        MapEvent::GeographyClick { key, id, properties } => {
            assert_eq!(key, "Japan");
            assert!(id.is_none());
            assert_eq!(properties["ISO_A3"], "JPN");
        }
        other => panic!("unexpected event {:?}", other),
    }

    assert_eq!(view.click_marker(0), Some(MapEvent::MarkerClick { index: 0 }));
    assert!(view.click_marker(1).is_none());
    assert!(view.click_line(0).is_none());
    assert!(view.click("Atlantis", Instant::now()).is_none());
}

#[test]
fn test_replacing_features_clears_hover() {
    let mut options = mercator();
    options.show_tooltip = true;
    let mut view = MapView::new(options, world());

    let info = view.hover("geography-2").unwrap();
    assert_eq!(info.tooltip.as_deref(), Some("Unknown"));
    assert_eq!(info.fill, "#ECECEC");

    view.set_features(parse_features(WORLD).unwrap());
    assert!(view.hovered().is_none());
    assert!(view.leave().is_none());
}

#[test]
fn test_hover_fill_applies_in_scene() {
    let mut options = mercator();
    options.style.hover_fill = Some("#F53".to_string());
    let mut view = MapView::new(options, world());
    view.hover("Japan");

    let fills: Vec<(String, String)> = view
        .scene()
        .items
        .into_iter()
        .filter_map(|item| match item {
            DrawItem::Geography { key, fill, .. } => Some((key, fill)),
            _ => None,
        })
        .collect();
    assert_eq!(fills[0], ("FRA".to_string(), "#ECECEC".to_string()));
    assert_eq!(fills[1], ("Japan".to_string(), "#F53".to_string()));
}

#[test]
fn test_filtering_out_hovered_feature_clears_hover() {
    let mut view = MapView::new(mercator(), world());
    assert!(view.hover("FRA").is_some());

    let mut options = mercator();
    options.continents = vec![Continent::Asia];
    view.set_options(options);
    assert!(view.feature("FRA").is_none());
    assert!(view.hovered().is_none());
    assert!(view.leave().is_none());

    // A hover that survives the filter is kept
    assert!(view.hover("Japan").is_some());
    let mut options = mercator();
    options.continents = vec![Continent::Asia, Continent::Africa];
    view.set_options(options);
    assert_eq!(view.hovered(), Some("Japan"));
}
