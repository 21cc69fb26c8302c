use super::*;

const MIN: f64 = 60_000.0;

fn point(node: &str, cluster: &str, sensor: &str, value: f64) -> TelemetryPoint {
    serde_json::from_value(serde_json::json!({
        "node": node,
        "cluster": cluster,
        "sensor": sensor,
        "value": value,
        "unit": "C",
        "ts": "12:00:00",
    }))
    .expect("point")
}

fn key(s: &str) -> Key {
    let mut parts = s.split('/');
    let node = parts.next().unwrap_or_default();
    let cluster = parts.next().unwrap_or_default();
    Key::new(node, cluster, parts.next())
}

// =============================================================
// Identity
// =============================================================

#[test]
fn ensure_is_create_once() {
    let mut view = TileView::new();
    let a = view.ensure(&key("n1/c1/temp"));
    let again = view.ensure(&key("n1/c1/temp"));
    assert_eq!(a, again);
    assert_eq!(view.order().len(), 1);
}

#[test]
fn ensure_allocates_distinct_ids() {
    let mut view = TileView::new();
    let a = view.ensure(&key("n1/c1/temp"));
    let b = view.ensure(&key("n1/c1/volt"));
    assert_ne!(a, b);
    assert_ne!(a.to_string(), b.to_string());
}

#[test]
fn element_id_renders_as_dom_attribute_value() {
    assert_eq!(ElementId(7).to_string(), "tile-7");
}

#[test]
fn update_without_element_is_noop() {
    let mut view = TileView::new();
    view.update(&point("n1", "c1", "temp", 1.0));
    assert!(view.order().is_empty());
}

// =============================================================
// Content
// =============================================================

#[test]
fn update_replaces_text_only() {
    let mut view = TileView::new();
    let k = key("n1/c1/temp");
    let id = view.ensure(&k);
    view.update(&point("n1", "c1", "temp", 21.5));
    view.update(&point("n1", "c1", "temp", 22.0));

    let tile = view.get(&k).expect("tile");
    assert_eq!(tile.id, id);
    assert_eq!(tile.title, "c1 / temp");
    assert_eq!(tile.node, "n1");
    assert_eq!(tile.value, "22.00 C");
    assert_eq!(tile.ts, "12:00:00");
}

#[test]
fn missing_value_shows_placeholder() {
    let mut view = TileView::new();
    let p: TelemetryPoint =
        serde_json::from_value(serde_json::json!({"node": "n1", "cluster": "c1", "sensor": "temp", "value": null}))
            .expect("point");
    view.ensure(&p.key());
    view.update(&p);
    assert_eq!(view.get(&p.key()).expect("tile").value, "—");
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn sort_is_lexicographic_and_preserves_ids() {
    let mut view = TileView::new();
    let b = view.ensure(&key("n2/c1/temp"));
    let a = view.ensure(&key("n1/c1/temp"));
    view.sort();

    let ordered: Vec<(ElementId, &str)> = view.order().iter().filter_map(|k| view.get(k)).map(|t| (t.id, t.key.as_str())).collect();
    assert_eq!(ordered, vec![(a, "n1/c1/temp"), (b, "n2/c1/temp")]);
}

#[test]
fn sort_is_deterministic_regardless_of_arrival() {
    let keys = ["n1/c2/a", "n1/c1/b", "n0/c9/z", "n1/c1/a"];
    let mut forward = TileView::new();
    let mut backward = TileView::new();
    for k in keys {
        forward.ensure(&key(k));
    }
    for k in keys.iter().rev() {
        backward.ensure(&key(k));
    }
    forward.sort();
    backward.sort();
    assert_eq!(forward.order(), backward.order());
}

// =============================================================
// Projection
// =============================================================

#[test]
fn project_ignores_unknown_key() {
    let registry = TileRegistry::new();
    let mut view = TileView::new();
    assert!(view.project(&registry, &key("n1/c1/temp"), 0.0).is_none());
    assert!(view.order().is_empty());
}

#[test]
fn project_applies_mute_and_restores_on_next_reading() {
    let mut registry = TileRegistry::new();
    let mut view = TileView::new();
    let k = registry.upsert(point("n1", "c1", "temp", 21.5), 0.0);
    let id = view.project(&registry, &k, 0.0);

    registry.mute(&k);
    view.project(&registry, &k, 0.0);
    assert!(view.get(&k).expect("tile").hidden);

    registry.upsert(point("n1", "c1", "temp", 21.6), 1.0);
    let again = view.project(&registry, &k, 1.0);
    assert!(!view.get(&k).expect("tile").hidden);
    assert_eq!(id, again);
}

#[test]
fn repaint_marks_silent_tiles_stale() {
    let mut registry = TileRegistry::new();
    let mut view = TileView::new();
    let k = registry.upsert(point("n1", "c1", "temp", 21.5), 0.0);
    view.project(&registry, &k, 0.0);
    assert_eq!(view.get(&k).expect("tile").freshness, Freshness::Fresh);

    view.repaint(&registry, 61.0 * MIN);
    assert_eq!(view.get(&k).expect("tile").freshness, Freshness::Stale);
}
