//! Borderline is the engine behind a literary magazine's website, factored
//! out of its view layer.
//!
//! The centerpiece is the scroll-progress highlighter: as a reader scrolls a
//! text section through the viewport, one of several known phrases inside it
//! becomes "active" at a time, in order. The crate also carries the other
//! deterministic pieces of the site: multi-phrase text segmentation, a
//! typewriter reveal, magazine color palettes (predefined themes plus
//! cover-image extraction), contact-form draft persistence, and the core of
//! the contact-email endpoint.
//!
//! # Highlight pipeline
//!
//! 1. **Sample**: the host supplies section/viewport geometry per scroll or
//!    resize event ([`SectionRect`], [`Viewport`]), either directly to
//!    [`Highlighter::observe`] or through a [`GeometrySource`] polled by a
//!    [`ScrollDriver`].
//! 2. **Map**: geometry becomes normalized transit progress, and a
//!    [`ZoneLayout`] maps progress to the active phrase index (pause zones
//!    yield no phrase; progress past the last zone keeps the final phrase
//!    active while the section stays visible).
//! 3. **Render**: [`Highlighter::runs`] partitions the text into
//!    plain/active/inactive [`TextRun`]s; concatenating the runs reproduces
//!    the input text.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: everything is a pure function of supplied
//!   data and an injected clock; no module reads platform state on its own.
//! - **Accessibility first**: a reduced-motion preference short-circuits all
//!   motion-driven behavior.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod form;
mod motion;
mod palette;
mod text;

pub use foundation::core::{SectionRect, Viewport};
pub use foundation::error::{BorderlineError, BorderlineResult};
pub use form::contact::{
    CONTACT_FROM, CONTACT_TO, ContactOutcome, ContactRequest, Mailer, OutboundEmail,
    build_notification, handle_contact, is_plausible_email,
};
pub use form::draft::{
    ContactDraft, DRAFT_DEBOUNCE_MS, DRAFT_MAX_AGE_SECS, DRAFT_SCHEMA_VERSION, DRAFT_STORAGE_KEY,
    DraftDebouncer, DraftStorage, DraftStore, FsStorage, default_store, unix_now,
};
pub use motion::highlighter::{
    GeometrySource, HighlightConfig, Highlighter, MotionPreference, ScrollDriver,
};
pub use motion::zones::{ZoneLayout, ZoneTiming};
pub use palette::extract::{
    SAMPLE_STRIDE_PIXELS, dominant_colors, extract_palette, fallback_palette,
    palette_from_dominant,
};
pub use palette::theme::{Palette, Rgb, Theme, resolve_palette};
pub use text::segment::{PhraseMatch, RunStyle, TextRun, find_matches, segment};
pub use text::typewriter::{DEFAULT_TYPE_INTERVAL_MS, Typewriter};
