use crate::foundation::core::clamp01;
use crate::foundation::error::{BorderlineError, BorderlineResult};

/// Relative widths of highlight and pause zones along the scroll axis.
///
/// Both ratios are expressed as fractions of the section transit and are
/// renormalized by [`ZoneLayout::new`], so only their proportion matters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ZoneTiming {
    /// Relative width of each phrase's highlight zone.
    pub highlight_ratio: f64,
    /// Relative width of the pause between consecutive highlights.
    pub pause_ratio: f64,
}

impl Default for ZoneTiming {
    fn default() -> Self {
        Self {
            highlight_ratio: 0.25,
            pause_ratio: 0.08,
        }
    }
}

impl ZoneTiming {
    /// Build a timing, rejecting malformed ratios up front.
    pub fn new(highlight_ratio: f64, pause_ratio: f64) -> BorderlineResult<Self> {
        let timing = Self {
            highlight_ratio,
            pause_ratio,
        };
        timing.validate()?;
        Ok(timing)
    }

    /// Ratios must be finite and strictly positive.
    pub fn validate(&self) -> BorderlineResult<()> {
        if !self.highlight_ratio.is_finite() || self.highlight_ratio <= 0.0 {
            return Err(BorderlineError::validation("highlight_ratio must be > 0"));
        }
        if !self.pause_ratio.is_finite() || self.pause_ratio <= 0.0 {
            return Err(BorderlineError::validation("pause_ratio must be > 0"));
        }
        Ok(())
    }
}

/// Partition of normalized scroll progress into `2N - 1` alternating zones.
///
/// Zone order follows phrase order: highlight 0, pause, highlight 1, pause,
/// ..., highlight N-1. After renormalization the zone spans sum to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneLayout {
    count: usize,
    highlight: f64,
    pause: f64,
}

impl ZoneLayout {
    /// Derive the layout for `count` phrases. `count` must be >= 1.
    pub fn new(count: usize, timing: ZoneTiming) -> BorderlineResult<Self> {
        if count == 0 {
            return Err(BorderlineError::validation(
                "ZoneLayout requires at least one phrase",
            ));
        }
        timing.validate()?;
        let total = (count as f64) * timing.highlight_ratio
            + ((count - 1) as f64) * timing.pause_ratio;
        Ok(Self {
            count,
            highlight: timing.highlight_ratio / total,
            pause: timing.pause_ratio / total,
        })
    }

    /// Number of phrases this layout was built for.
    pub fn phrase_count(self) -> usize {
        self.count
    }

    /// Normalized width of one highlight zone.
    pub fn highlight_span(self) -> f64 {
        self.highlight
    }

    /// Normalized width of one pause zone (0 is never reported; a single-phrase
    /// layout simply has no pause zones).
    pub fn pause_span(self) -> f64 {
        self.pause
    }

    /// Normalized start of phrase `i`'s highlight zone.
    pub fn highlight_start(self, i: usize) -> Option<f64> {
        (i < self.count).then(|| (i as f64) * (self.highlight + self.pause))
    }

    /// Map normalized scroll progress to the active phrase index.
    ///
    /// Returns `None` inside a pause zone and for non-finite progress.
    /// Progress at or past the last zone boundary keeps the final phrase
    /// active (sticky tail), so a fully transited but still-visible section
    /// never drops its last highlight.
    pub fn active_index(self, progress: f64) -> Option<usize> {
        if !progress.is_finite() {
            return None;
        }
        let p = clamp01(progress);
        let mut acc = 0.0;
        for i in 0..self.count {
            let highlight_end = acc + self.highlight;
            if p >= acc && p < highlight_end {
                return Some(i);
            }
            acc = highlight_end;
            if i + 1 < self.count {
                let pause_end = acc + self.pause;
                if p >= acc && p < pause_end {
                    return None;
                }
                acc = pause_end;
            }
        }
        // Past every defined zone with p <= 1: sticky tail.
        Some(self.count - 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/zones.rs"]
mod tests;
