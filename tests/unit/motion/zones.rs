use super::*;

#[test]
fn timing_rejects_malformed_ratios() {
    assert!(ZoneTiming::new(0.0, 0.08).is_err());
    assert!(ZoneTiming::new(0.25, -0.1).is_err());
    assert!(ZoneTiming::new(f64::NAN, 0.08).is_err());
    assert!(ZoneTiming::new(0.25, 0.08).is_ok());
}

#[test]
fn layout_rejects_zero_phrases() {
    assert!(ZoneLayout::new(0, ZoneTiming::default()).is_err());
}

#[test]
fn zone_spans_sum_to_one() {
    for count in 1..=6 {
        let layout = ZoneLayout::new(count, ZoneTiming::default()).unwrap();
        let total = (count as f64) * layout.highlight_span()
            + ((count - 1) as f64) * layout.pause_span();
        assert!((total - 1.0).abs() < 1e-12, "count={count} total={total}");
    }
}

#[test]
fn single_phrase_fills_the_whole_axis() {
    let layout = ZoneLayout::new(1, ZoneTiming::default()).unwrap();
    assert!((layout.highlight_span() - 1.0).abs() < 1e-12);
    assert_eq!(layout.active_index(0.0), Some(0));
    assert_eq!(layout.active_index(0.5), Some(0));
    // Sticky tail at the very end.
    assert_eq!(layout.active_index(1.0), Some(0));
}

#[test]
fn alternates_highlight_and_pause_zones() {
    let timing = ZoneTiming::new(0.28, 0.06).unwrap();
    let layout = ZoneLayout::new(3, timing).unwrap();
    let h = layout.highlight_span();
    let p = layout.pause_span();

    // Centers of each zone, in order.
    assert_eq!(layout.active_index(h / 2.0), Some(0));
    assert_eq!(layout.active_index(h + p / 2.0), None);
    assert_eq!(layout.active_index(h + p + h / 2.0), Some(1));
    assert_eq!(layout.active_index(2.0 * (h + p) - p / 2.0), None);
    assert_eq!(layout.active_index(2.0 * (h + p) + h / 2.0), Some(2));
}

#[test]
fn zone_boundaries_are_half_open() {
    let timing = ZoneTiming::new(0.25, 0.25).unwrap();
    let layout = ZoneLayout::new(2, timing).unwrap();
    let h = layout.highlight_span();
    let p = layout.pause_span();

    assert_eq!(layout.active_index(0.0), Some(0));
    // Exactly at the highlight/pause boundary: the pause owns it.
    assert_eq!(layout.active_index(h), None);
    // Exactly at the pause/highlight boundary: the next highlight owns it.
    assert_eq!(layout.active_index(h + p), Some(1));
}

#[test]
fn sticky_tail_keeps_last_phrase_active() {
    for count in 1..=5 {
        let layout = ZoneLayout::new(count, ZoneTiming::default()).unwrap();
        assert_eq!(layout.active_index(1.0), Some(count - 1), "count={count}");
        // Out-of-range input clamps rather than escaping the layout.
        assert_eq!(layout.active_index(7.5), Some(count - 1));
    }
}

#[test]
fn non_finite_progress_activates_nothing() {
    let layout = ZoneLayout::new(3, ZoneTiming::default()).unwrap();
    assert_eq!(layout.active_index(f64::NAN), None);
    assert_eq!(layout.active_index(f64::INFINITY), None);
    assert_eq!(layout.active_index(f64::NEG_INFINITY), None);
}

#[test]
fn active_index_is_monotonic_over_progress() {
    let timing = ZoneTiming::new(0.28, 0.06).unwrap();
    let layout = ZoneLayout::new(4, timing).unwrap();
    let mut last_active = 0usize;
    for step in 0..=1000 {
        let progress = f64::from(step) / 1000.0;
        if let Some(idx) = layout.active_index(progress) {
            assert!(idx >= last_active, "regressed at progress={progress}");
            last_active = idx;
        }
    }
    assert_eq!(last_active, 3);
}

#[test]
fn highlight_start_tracks_zone_order() {
    let timing = ZoneTiming::new(0.28, 0.06).unwrap();
    let layout = ZoneLayout::new(3, timing).unwrap();
    let stride = layout.highlight_span() + layout.pause_span();
    assert_eq!(layout.highlight_start(0), Some(0.0));
    assert_eq!(layout.highlight_start(1), Some(stride));
    assert_eq!(layout.highlight_start(2), Some(2.0 * stride));
    assert_eq!(layout.highlight_start(3), None);
}
