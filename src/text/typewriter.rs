use crate::foundation::error::{BorderlineError, BorderlineResult};
use crate::motion::highlighter::MotionPreference;

/// Default reveal interval, one character per 50ms.
pub const DEFAULT_TYPE_INTERVAL_MS: u64 = 50;

/// Tick-driven typewriter reveal over a fixed string.
///
/// The host advances elapsed time from its own clock; the revealed prefix is a
/// pure function of elapsed ticks, so playback is deterministic and resumable.
/// Reduced motion reveals the full text immediately.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    interval_ms: u64,
    elapsed_ms: u64,
    motion: MotionPreference,
}

impl Typewriter {
    /// Build a typewriter revealing one character per `interval_ms`.
    pub fn new(
        text: impl Into<String>,
        interval_ms: u64,
        motion: MotionPreference,
    ) -> BorderlineResult<Self> {
        if interval_ms == 0 {
            return Err(BorderlineError::validation(
                "Typewriter interval must be > 0",
            ));
        }
        Ok(Self {
            text: text.into(),
            interval_ms,
            elapsed_ms: 0,
            motion,
        })
    }

    /// Advance the clock by `delta_ms`.
    pub fn advance(&mut self, delta_ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
    }

    /// Restart the reveal from the beginning.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
    }

    /// The currently revealed prefix, always on a character boundary.
    pub fn visible(&self) -> &str {
        if self.motion == MotionPreference::Reduced {
            return &self.text;
        }
        let revealed = (self.elapsed_ms / self.interval_ms) as usize;
        match self.text.char_indices().nth(revealed) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }

    /// Whether the full text is revealed.
    pub fn is_complete(&self) -> bool {
        self.visible().len() == self.text.len()
    }
}
