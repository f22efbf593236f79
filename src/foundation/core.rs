use crate::foundation::error::{BorderlineError, BorderlineResult};

/// Host viewport geometry at the time of a scroll or resize event.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Visible height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport, rejecting non-finite or non-positive heights.
    pub fn new(height: f64) -> BorderlineResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(BorderlineError::validation("Viewport height must be > 0"));
        }
        Ok(Self { height })
    }
}

/// Bounding box of a text section, relative to the viewport top.
///
/// `top` is negative once the section's top edge has scrolled past the
/// viewport's top edge, matching what a DOM bounding rect reports.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionRect {
    /// Distance from the viewport top to the section top.
    pub top: f64,
    /// Section height, >= 0.
    pub height: f64,
}

impl SectionRect {
    /// Build a section rect, rejecting non-finite values and negative heights.
    pub fn new(top: f64, height: f64) -> BorderlineResult<Self> {
        if !top.is_finite() || !height.is_finite() {
            return Err(BorderlineError::validation("SectionRect must be finite"));
        }
        if height < 0.0 {
            return Err(BorderlineError::validation("SectionRect height must be >= 0"));
        }
        Ok(Self { top, height })
    }

    /// Bottom edge relative to the viewport top.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Whether any part of the section is inside the viewport.
    pub fn intersects(self, viewport: Viewport) -> bool {
        !(self.bottom() < 0.0 || self.top > viewport.height)
    }

    /// Fraction of the section's total transit through the viewport, in `[0, 1]`.
    ///
    /// 0 when the section top sits at the viewport bottom (about to enter),
    /// 1 when the section bottom has fully exited past the viewport top.
    /// `None` when the section is entirely outside the viewport.
    pub fn scroll_progress(self, viewport: Viewport) -> Option<f64> {
        if !self.intersects(viewport) {
            return None;
        }
        let transit = self.height + viewport.height;
        Some(clamp01((viewport.height - self.top) / transit))
    }
}

pub(crate) fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}
