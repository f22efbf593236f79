//! Dominant-color extraction from cover-image pixel data.
//!
//! Works on raw RGBA bytes so decode stays at the caller (the CLI decodes
//! with the `image` crate). Extraction is deterministic for a given buffer.

use std::collections::HashMap;

use crate::palette::theme::{Palette, Rgb};

/// Only every Nth pixel is inspected.
pub const SAMPLE_STRIDE_PIXELS: usize = 10;

const MIN_ALPHA: u8 = 128;
const MIN_BRIGHTNESS: f64 = 30.0;
const MAX_BRIGHTNESS: f64 = 225.0;
const TOP_COLORS: usize = 5;

/// The top dominant colors of an RGBA buffer, most frequent first.
///
/// Transparent pixels and near-black/near-white pixels are ignored; frequency
/// ties break by channel value so the ranking is stable. Trailing bytes that
/// do not form a whole pixel are ignored.
pub fn dominant_colors(rgba: &[u8]) -> Vec<Rgb> {
    let mut counts: HashMap<Rgb, u32> = HashMap::new();
    for px in rgba.chunks_exact(4).step_by(SAMPLE_STRIDE_PIXELS) {
        let (color, alpha) = (Rgb::new(px[0], px[1], px[2]), px[3]);
        if alpha < MIN_ALPHA {
            continue;
        }
        let brightness = color.mean_brightness();
        if brightness < MIN_BRIGHTNESS || brightness > MAX_BRIGHTNESS {
            continue;
        }
        *counts.entry(color).or_default() += 1;
    }

    let mut ranked: Vec<(Rgb, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| (a.0.r, a.0.g, a.0.b).cmp(&(b.0.r, b.0.g, b.0.b)))
    });
    ranked
        .into_iter()
        .take(TOP_COLORS)
        .map(|(color, _)| color)
        .collect()
}

/// Derive the 8-field palette from a ranked dominant-color list.
///
/// An empty list falls back to [`fallback_palette`].
pub fn palette_from_dominant(colors: &[Rgb]) -> Palette {
    let Some(&primary) = colors.first() else {
        return fallback_palette();
    };
    let secondary = colors.get(1).copied().unwrap_or(primary);
    let accent = colors.get(2).copied().unwrap_or(secondary);
    Palette {
        primary,
        secondary,
        accent,
        background: primary.dimmed(30),
        text: primary.contrast_text(),
        button: primary,
        button_hover: primary.darkened(20.0),
        border: primary.lightened(20.0),
    }
}

/// Extract a palette straight from RGBA pixel data.
pub fn extract_palette(rgba: &[u8]) -> Palette {
    palette_from_dominant(&dominant_colors(rgba))
}

/// Palette used when no usable pixels are present.
pub fn fallback_palette() -> Palette {
    Palette {
        primary: Rgb::new(0x1f, 0x29, 0x37),
        secondary: Rgb::new(0x37, 0x41, 0x51),
        accent: Rgb::new(0x3b, 0x82, 0xf6),
        background: Rgb::new(0xf8, 0xfa, 0xfc),
        text: Rgb::new(0x1f, 0x29, 0x37),
        button: Rgb::new(0x3b, 0x82, 0xf6),
        button_hover: Rgb::new(0x25, 0x63, 0xeb),
        border: Rgb::new(0xe5, 0xe7, 0xeb),
    }
}
