use crate::foundation::error::{BorderlineError, BorderlineResult};

/// An sRGB color. Serializes as a `#rrggbb` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(s: &str) -> BorderlineResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(BorderlineError::validation(format!(
                "expected #rrggbb color, got '{s}'"
            )));
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| BorderlineError::validation(format!("invalid hex color '{s}'")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as a `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Mean of the three channels, used for filtering sampled pixels.
    pub fn mean_brightness(self) -> f64 {
        (f64::from(self.r) + f64::from(self.g) + f64::from(self.b)) / 3.0
    }

    /// Perceptual brightness (299/587/114 luma weighting).
    pub fn luma(self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    /// Black or white, whichever contrasts better against this color.
    pub fn contrast_text(self) -> Rgb {
        if self.luma() > 128.0 {
            Rgb::new(0, 0, 0)
        } else {
            Rgb::new(255, 255, 255)
        }
    }

    /// Darken by a percentage of each channel's current value.
    pub fn darkened(self, percent: f64) -> Rgb {
        let factor = ((100.0 - percent) / 100.0).clamp(0.0, 1.0);
        Rgb::new(
            (f64::from(self.r) * factor).floor() as u8,
            (f64::from(self.g) * factor).floor() as u8,
            (f64::from(self.b) * factor).floor() as u8,
        )
    }

    /// Lighten by a percentage of each channel's remaining headroom.
    pub fn lightened(self, percent: f64) -> Rgb {
        let factor = (percent / 100.0).clamp(0.0, 1.0);
        let lift = |c: u8| (f64::from(c) + (255.0 - f64::from(c)) * factor).floor() as u8;
        Rgb::new(lift(self.r), lift(self.g), lift(self.b))
    }

    /// Subtract a flat amount from every channel, clamping at zero.
    pub fn dimmed(self, amount: u8) -> Rgb {
        Rgb::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }
}

impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// The fixed 8-field color palette applied to a magazine presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Dominant brand color.
    pub primary: Rgb,
    /// Supporting color.
    pub secondary: Rgb,
    /// Accent for emphasis elements.
    pub accent: Rgb,
    /// Page background.
    pub background: Rgb,
    /// Body text color.
    pub text: Rgb,
    /// Button fill.
    pub button: Rgb,
    /// Button fill on hover.
    pub button_hover: Rgb,
    /// Border and divider color.
    pub border: Rgb,
}

impl Palette {
    /// Render the palette as a `--magazine-*` CSS custom-property list.
    pub fn css_variables(&self) -> String {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("text", self.text),
            ("button", self.button),
            ("button-hover", self.button_hover),
            ("border", self.border),
        ]
        .iter()
        .map(|(name, color)| format!("--magazine-{name}: {}", color.to_hex()))
        .collect::<Vec<_>>()
        .join("; ")
    }
}

/// Predefined magazine themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Literary/classic, the default.
    Literary,
    /// Modern/contemporary.
    Modern,
    /// Artistic/creative.
    Artistic,
    /// Minimalist.
    Minimalist,
    /// Vibrant.
    Vibrant,
}

impl Theme {
    /// Resolve a theme from its name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Theme> {
        match name.trim().to_ascii_lowercase().as_str() {
            "literary" => Some(Theme::Literary),
            "modern" => Some(Theme::Modern),
            "artistic" => Some(Theme::Artistic),
            "minimalist" => Some(Theme::Minimalist),
            "vibrant" => Some(Theme::Vibrant),
            _ => None,
        }
    }

    /// Infer a theme from content tags. Groups are checked in a fixed order
    /// (artistic, modern, minimalist, vibrant) so the result is stable when
    /// tags hint at several themes.
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Option<Theme> {
        const GROUPS: [(&[&str], Theme); 4] = [
            (&["art", "visual", "creative", "poetry"], Theme::Artistic),
            (&["modern", "contemporary", "digital"], Theme::Modern),
            (&["minimal", "clean", "simple"], Theme::Minimalist),
            (&["colorful", "vibrant", "bold"], Theme::Vibrant),
        ];
        let tags: Vec<String> = tags
            .into_iter()
            .map(|t| t.trim().to_ascii_lowercase())
            .collect();
        GROUPS
            .iter()
            .find(|(keywords, _)| tags.iter().any(|t| keywords.contains(&t.as_str())))
            .map(|&(_, theme)| theme)
    }

    /// The theme's predefined palette.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Literary => Palette {
                primary: Rgb::new(0x1f, 0x29, 0x37),
                secondary: Rgb::new(0x37, 0x41, 0x51),
                accent: Rgb::new(0x7c, 0x3a, 0xed),
                background: Rgb::new(0xf8, 0xfa, 0xfc),
                text: Rgb::new(0x1f, 0x29, 0x37),
                button: Rgb::new(0x7c, 0x3a, 0xed),
                button_hover: Rgb::new(0x6d, 0x28, 0xd9),
                border: Rgb::new(0xe5, 0xe7, 0xeb),
            },
            Theme::Modern => Palette {
                primary: Rgb::new(0x0f, 0x17, 0x2a),
                secondary: Rgb::new(0x33, 0x41, 0x55),
                accent: Rgb::new(0x06, 0xb6, 0xd4),
                background: Rgb::new(0xf1, 0xf5, 0xf9),
                text: Rgb::new(0x0f, 0x17, 0x2a),
                button: Rgb::new(0x06, 0xb6, 0xd4),
                button_hover: Rgb::new(0x08, 0x91, 0xb2),
                border: Rgb::new(0xcb, 0xd5, 0xe1),
            },
            Theme::Artistic => Palette {
                primary: Rgb::new(0x7c, 0x2d, 0x12),
                secondary: Rgb::new(0xa1, 0x62, 0x07),
                accent: Rgb::new(0xdc, 0x26, 0x26),
                background: Rgb::new(0xfe, 0xf7, 0xed),
                text: Rgb::new(0x7c, 0x2d, 0x12),
                button: Rgb::new(0xdc, 0x26, 0x26),
                button_hover: Rgb::new(0xb9, 0x1c, 0x1c),
                border: Rgb::new(0xfe, 0xd7, 0xaa),
            },
            Theme::Minimalist => Palette {
                primary: Rgb::new(0x00, 0x00, 0x00),
                secondary: Rgb::new(0x4b, 0x55, 0x63),
                accent: Rgb::new(0x00, 0x00, 0x00),
                background: Rgb::new(0xff, 0xff, 0xff),
                text: Rgb::new(0x00, 0x00, 0x00),
                button: Rgb::new(0x00, 0x00, 0x00),
                button_hover: Rgb::new(0x37, 0x41, 0x51),
                border: Rgb::new(0xe5, 0xe7, 0xeb),
            },
            Theme::Vibrant => Palette {
                primary: Rgb::new(0x1e, 0x40, 0xaf),
                secondary: Rgb::new(0x7c, 0x3a, 0xed),
                accent: Rgb::new(0xf5, 0x9e, 0x0b),
                background: Rgb::new(0xf0, 0xf9, 0xff),
                text: Rgb::new(0x1e, 0x40, 0xaf),
                button: Rgb::new(0xf5, 0x9e, 0x0b),
                button_hover: Rgb::new(0xd9, 0x77, 0x06),
                border: Rgb::new(0xbf, 0xdb, 0xfe),
            },
        }
    }
}

/// Resolve a palette from an optional explicit theme name, falling back to
/// tag inference and finally to the literary default.
pub fn resolve_palette(theme: Option<&str>, tags: &[&str]) -> Palette {
    theme
        .and_then(Theme::from_name)
        .or_else(|| Theme::from_tags(tags.iter().copied()))
        .unwrap_or(Theme::Literary)
        .palette()
}

#[cfg(test)]
#[path = "../../tests/unit/palette/theme.rs"]
mod tests;
