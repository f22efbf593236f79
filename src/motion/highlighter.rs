use crate::foundation::core::{SectionRect, Viewport};
use crate::foundation::error::{BorderlineError, BorderlineResult};
use crate::motion::zones::{ZoneLayout, ZoneTiming};
use crate::text::segment::{RunStyle, TextRun, segment};

/// Accessibility preference for motion-driven effects.
///
/// [`MotionPreference::Reduced`] disables highlighting entirely: no geometry
/// is ever sampled and text renders as a single plain run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    /// Motion effects enabled.
    Full,
    /// Motion effects disabled (prefers-reduced-motion).
    Reduced,
}

/// Configuration for a [`Highlighter`]: the ordered phrase list plus zone
/// timing. An empty phrase list is valid and yields a highlighter that never
/// activates anything; empty phrase *strings* are rejected.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HighlightConfig {
    /// Phrases in zone order along the scroll axis.
    pub phrases: Vec<String>,
    /// Relative zone widths.
    pub timing: ZoneTiming,
}

impl HighlightConfig {
    /// Build and validate a config.
    pub fn new(phrases: Vec<String>, timing: ZoneTiming) -> BorderlineResult<Self> {
        let config = Self { phrases, timing };
        config.validate()?;
        Ok(config)
    }

    /// Reject malformed ratios and zero-width phrases.
    pub fn validate(&self) -> BorderlineResult<()> {
        self.timing.validate()?;
        if self.phrases.iter().any(|p| p.is_empty()) {
            return Err(BorderlineError::validation(
                "highlight phrases must be non-empty",
            ));
        }
        Ok(())
    }
}

/// Maps scroll geometry to an active phrase and renders styled runs.
///
/// The highlighter is a plain state machine: the host feeds it a geometry
/// sample per scroll/resize event via [`Highlighter::observe`] and reads the
/// partitioned text back via [`Highlighter::runs`]. It performs no IO and
/// holds no platform handles, so tests drive it with synthetic geometry.
#[derive(Clone, Debug)]
pub struct Highlighter {
    phrases: Vec<String>,
    layout: Option<ZoneLayout>,
    motion: MotionPreference,
    active: Option<usize>,
}

impl Highlighter {
    /// Build a highlighter from a validated config.
    pub fn new(config: HighlightConfig, motion: MotionPreference) -> BorderlineResult<Self> {
        config.validate()?;
        let layout = if config.phrases.is_empty() {
            None
        } else {
            Some(ZoneLayout::new(config.phrases.len(), config.timing)?)
        };
        Ok(Self {
            phrases: config.phrases,
            layout,
            motion,
            active: None,
        })
    }

    /// The phrase list, in zone order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Current motion preference.
    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    /// Change the motion preference at runtime. Switching to reduced motion
    /// clears any active highlight.
    pub fn set_motion(&mut self, motion: MotionPreference) {
        if motion == MotionPreference::Reduced {
            self.active = None;
        }
        self.motion = motion;
    }

    /// The phrase index currently highlighted, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Recompute the active phrase from one geometry sample.
    ///
    /// Sets the index to `None` when the section is outside the viewport or
    /// progress falls in a pause zone, and returns the new value.
    #[tracing::instrument(skip(self), level = "trace")]
    pub fn observe(&mut self, section: SectionRect, viewport: Viewport) -> Option<usize> {
        if self.motion == MotionPreference::Reduced {
            self.active = None;
            return None;
        }
        let Some(layout) = self.layout else {
            self.active = None;
            return None;
        };
        self.active = section
            .scroll_progress(viewport)
            .and_then(|progress| layout.active_index(progress));
        self.active
    }

    /// Clear the active highlight (teardown, section unmount).
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Partition `text` into styled runs against the current active phrase.
    ///
    /// Under reduced motion the text comes back as one plain run.
    pub fn runs<'a>(&self, text: &'a str) -> Vec<TextRun<'a>> {
        if self.motion == MotionPreference::Reduced {
            return vec![TextRun {
                text,
                style: RunStyle::Plain,
                phrase: None,
            }];
        }
        segment(text, &self.phrases, self.active)
    }
}

/// Supplies section/viewport geometry on demand.
///
/// An implementation typically wraps the host page's bounding-rect query.
/// Returning `None` means no geometry is currently available (section
/// unmounted), which clears the active highlight.
pub trait GeometrySource {
    /// Sample the current section and viewport geometry.
    fn sample(&mut self) -> Option<(SectionRect, Viewport)>;
}

/// Owns a [`Highlighter`] plus its geometry source and re-samples on demand.
///
/// The host calls [`ScrollDriver::tick`] at frame cadence from its
/// scroll/resize notifications. Under reduced motion the source is never
/// registered at all, and [`ScrollDriver::detach`] drops it on teardown so no
/// dangling callback outlives the component.
#[derive(Debug)]
pub struct ScrollDriver<S> {
    highlighter: Highlighter,
    source: Option<S>,
}

impl<S: GeometrySource> ScrollDriver<S> {
    /// Attach a source to a highlighter. Reduced motion discards the source
    /// immediately.
    pub fn new(highlighter: Highlighter, source: S) -> Self {
        let source = if highlighter.motion() == MotionPreference::Reduced {
            None
        } else {
            Some(source)
        };
        Self {
            highlighter,
            source,
        }
    }

    /// Whether a geometry source is currently attached.
    pub fn is_attached(&self) -> bool {
        self.source.is_some()
    }

    /// Pull one geometry sample and update the active phrase.
    pub fn tick(&mut self) -> Option<usize> {
        let Some(source) = self.source.as_mut() else {
            return self.highlighter.active_index();
        };
        match source.sample() {
            Some((section, viewport)) => self.highlighter.observe(section, viewport),
            None => {
                self.highlighter.reset();
                None
            }
        }
    }

    /// Stop listening and clear the highlight.
    pub fn detach(&mut self) {
        self.source = None;
        self.highlighter.reset();
    }

    /// Read access to the wrapped highlighter.
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Render `text` against the current highlight state.
    pub fn runs<'a>(&self, text: &'a str) -> Vec<TextRun<'a>> {
        self.highlighter.runs(text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/highlighter.rs"]
mod tests;
