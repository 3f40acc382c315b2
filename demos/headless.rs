use mapframe::prelude::*;

const COUNTRIES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "properties": { "name": "France", "ISO_A3": "FRA" },
      "geometry": { "type": "Polygon", "coordinates": [[[-4.5, 43.4], [7.6, 43.4], [8.2, 49.0], [2.5, 51.1], [-4.8, 48.5], [-4.5, 43.4]]] } },
    { "type": "Feature", "properties": { "name": "Japan", "ISO_A3": "JPN" },
      "geometry": { "type": "Polygon", "coordinates": [[[130.0, 31.0], [141.0, 35.0], [142.0, 43.0], [139.5, 41.0], [130.0, 31.0]]] } },
    { "type": "Feature", "properties": { "name": "Brazil", "ISO_A3": "BRA" },
      "geometry": { "type": "Polygon", "coordinates": [[[-73.0, -7.0], [-50.0, 2.0], [-35.0, -7.0], [-53.0, -33.0], [-73.0, -7.0]]] } }
  ]
}"#;

/// Builds a map without any renderer, drives a few interactions and prints
/// the resulting scene
fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("🗺️ mapframe headless example");
    println!("=============================");

    let features = parse_features(COUNTRIES)?;
    let mut options = MapOptions::from_json(
        r#"{
            "width": 960,
            "height": 500,
            "projection": "geoNaturalEarth1",
            "showGraticule": true,
            "zoomOnClick": true,
            "labels": { "show": true, "minZoom": 2 }
        }"#,
    )?
    .with_interaction(InteractionProfile::Standard);
    options.choropleth_data = Some(
        [("France", 67.0), ("Japan", 125.0), ("Brazil", 214.0)]
            .into_iter()
            .map(|(name, population)| (name.to_string(), population))
            .collect(),
    );
    options.lines = vec![MapLine::new(LngLat::new(2.35, 48.85), LngLat::new(139.69, 35.69)).with_curve(0.4)];
    options.markers = vec![MapMarker::new(LngLat::new(-43.2, -22.9))
        .with_shape(MarkerShape::Pin)
        .with_label("Rio")];

    let mut view = MapView::new(options, features);
    println!(
        "✅ {} projection: scale {:.2}, translate ({:.1}, {:.1})",
        view.projection().family(),
        view.projection().scale(),
        view.projection().translate().x,
        view.projection().translate().y
    );

    let scene = view.scene();
    println!("✅ Initial scene has {} draw items", scene.len());
    for item in scene.items_of_kind("geography") {
        if let DrawItem::Geography { key, fill, .. } = item {
            println!("   🎨 {} filled with {}", key, fill);
        }
    }

    println!("\n🔍 Wheel zoom around the pointer:");
    let controller = view.controller_mut();
    controller.wheel_zoom(-300.0, Point::new(480.0, 250.0));
    println!("   scale {:.3}", controller.state().scale);
    for event in controller.drain_events() {
        println!("   event {:?}", event);
    }

    println!("\n🎯 Click Japan and animate:");
    let start = Instant::now();
    if let Some(outcome) = view.click("Japan", start) {
        if let Some(handle) = outcome.animation {
            let mut frame = 0u32;
            loop {
                let now = start + Duration::from_millis(16 * u64::from(frame));
                let step = view.controller_mut().step_animation(handle, now);
                frame += 1;
                if !step.needs_another_frame() {
                    break;
                }
            }
            let state = view.controller().state();
            println!(
                "   settled after {} frames at scale {} translate ({:.1}, {:.1})",
                frame, state.scale, state.translate_x, state.translate_y
            );
        }
    }

    let zoomed = view.scene();
    println!(
        "✅ Zoomed scene: {} labels, transform {}",
        zoomed.items_of_kind("label").count(),
        zoomed.transform.to_svg()
    );
    Ok(())
}
