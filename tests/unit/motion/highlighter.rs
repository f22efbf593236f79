use super::*;

fn config(phrases: &[&str]) -> HighlightConfig {
    HighlightConfig {
        phrases: phrases.iter().map(|p| p.to_string()).collect(),
        timing: ZoneTiming::default(),
    }
}

fn viewport() -> Viewport {
    Viewport::new(800.0).unwrap()
}

/// Section geometry placing scroll progress at `progress` for a section of
/// the given height.
fn section_at(progress: f64, height: f64) -> SectionRect {
    let vh = 800.0;
    SectionRect::new(vh - progress * (height + vh), height).unwrap()
}

#[test]
fn config_rejects_empty_phrase_strings() {
    let cfg = config(&["ok", ""]);
    assert!(cfg.validate().is_err());
    assert!(Highlighter::new(cfg, MotionPreference::Full).is_err());
}

#[test]
fn empty_phrase_list_never_activates() {
    let mut hl = Highlighter::new(config(&[]), MotionPreference::Full).unwrap();
    assert_eq!(hl.observe(section_at(0.5, 1200.0), viewport()), None);
    let runs = hl.runs("some text");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text, "some text");
    assert_eq!(runs[0].style, RunStyle::Plain);
}

#[test]
fn observe_tracks_zones_in_order() {
    let mut hl = Highlighter::new(config(&["alpha", "beta"]), MotionPreference::Full).unwrap();
    assert_eq!(hl.observe(section_at(0.0, 1200.0), viewport()), Some(0));
    assert_eq!(hl.observe(section_at(1.0, 1200.0), viewport()), Some(1));
    assert_eq!(hl.active_index(), Some(1));
}

#[test]
fn observe_clears_when_section_leaves_viewport() {
    let mut hl = Highlighter::new(config(&["alpha"]), MotionPreference::Full).unwrap();
    assert_eq!(hl.observe(section_at(0.5, 1200.0), viewport()), Some(0));
    // Fully below the fold.
    let below = SectionRect::new(2000.0, 1200.0).unwrap();
    assert_eq!(hl.observe(below, viewport()), None);
    assert_eq!(hl.active_index(), None);
}

#[test]
fn reduced_motion_never_activates_and_renders_plain() {
    let text = "Based in United States and Brazil.";
    let mut hl =
        Highlighter::new(config(&["United States", "Brazil"]), MotionPreference::Reduced).unwrap();
    assert_eq!(hl.observe(section_at(0.0, 1200.0), viewport()), None);
    assert_eq!(hl.observe(section_at(0.5, 1200.0), viewport()), None);
    let runs = hl.runs(text);
    assert_eq!(runs, vec![TextRun { text, style: RunStyle::Plain, phrase: None }]);
}

#[test]
fn switching_to_reduced_motion_clears_active_state() {
    let mut hl = Highlighter::new(config(&["alpha"]), MotionPreference::Full).unwrap();
    hl.observe(section_at(0.5, 1200.0), viewport());
    assert_eq!(hl.active_index(), Some(0));
    hl.set_motion(MotionPreference::Reduced);
    assert_eq!(hl.active_index(), None);
}

#[test]
fn runs_style_only_the_active_phrase() {
    let text = "alpha then beta";
    let mut hl = Highlighter::new(config(&["alpha", "beta"]), MotionPreference::Full).unwrap();
    hl.observe(section_at(0.0, 1200.0), viewport());
    let runs = hl.runs(text);
    let styles: Vec<_> = runs.iter().map(|r| (r.text, r.style)).collect();
    assert_eq!(
        styles,
        vec![
            ("alpha", RunStyle::Active),
            (" then ", RunStyle::Plain),
            ("beta", RunStyle::Inactive),
        ]
    );
}

struct ScriptedSource {
    samples: Vec<Option<(SectionRect, Viewport)>>,
    polled: usize,
}

impl ScriptedSource {
    fn new(samples: Vec<Option<(SectionRect, Viewport)>>) -> Self {
        Self { samples, polled: 0 }
    }
}

impl GeometrySource for ScriptedSource {
    fn sample(&mut self) -> Option<(SectionRect, Viewport)> {
        let next = self.samples.get(self.polled).copied().flatten();
        self.polled += 1;
        next
    }
}

#[test]
fn driver_polls_source_and_updates_highlight() {
    let hl = Highlighter::new(config(&["alpha", "beta"]), MotionPreference::Full).unwrap();
    let source = ScriptedSource::new(vec![
        Some((section_at(0.0, 1200.0), viewport())),
        Some((section_at(1.0, 1200.0), viewport())),
        None,
    ]);
    let mut driver = ScrollDriver::new(hl, source);
    assert!(driver.is_attached());
    assert_eq!(driver.tick(), Some(0));
    assert_eq!(driver.tick(), Some(1));
    // Source went away: highlight clears.
    assert_eq!(driver.tick(), None);
}

#[test]
fn driver_never_attaches_under_reduced_motion() {
    let hl = Highlighter::new(config(&["alpha"]), MotionPreference::Reduced).unwrap();
    let source = ScriptedSource::new(vec![Some((section_at(0.5, 1200.0), viewport()))]);
    let mut driver = ScrollDriver::new(hl, source);
    assert!(!driver.is_attached());
    assert_eq!(driver.tick(), None);
}

#[test]
fn detach_stops_listening_and_clears() {
    let hl = Highlighter::new(config(&["alpha"]), MotionPreference::Full).unwrap();
    let source = ScriptedSource::new(vec![
        Some((section_at(0.5, 1200.0), viewport())),
        Some((section_at(0.5, 1200.0), viewport())),
    ]);
    let mut driver = ScrollDriver::new(hl, source);
    assert_eq!(driver.tick(), Some(0));
    driver.detach();
    assert!(!driver.is_attached());
    assert_eq!(driver.tick(), None);
}
