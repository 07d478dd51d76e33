use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{AvatarError, AvatarResult};

/// Number of pre-authored variants every part category owns.
pub const VARIANT_COUNT: usize = 10;

/// Number of part categories in a genotype.
pub const CATEGORY_COUNT: usize = 6;

/// One of the six body-part categories an avatar is composed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Hair, hats and head wraps.
    Hair,
    /// Head with skin tone and expression.
    Face,
    /// Neck and neckwear.
    Neck,
    /// Torso garments.
    Clothing,
    /// Hands and gloves.
    Hands,
    /// Held item.
    Item,
}

impl Category {
    /// Categories in DNA order (the order segments appear in a DNA string).
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Hair,
        Category::Face,
        Category::Neck,
        Category::Clothing,
        Category::Hands,
        Category::Item,
    ];

    /// Back-to-front paint order. Later entries occlude earlier ones.
    pub const DRAW_ORDER: [Category; CATEGORY_COUNT] = [
        Category::Neck,
        Category::Clothing,
        Category::Hands,
        Category::Hair,
        Category::Face,
        Category::Item,
    ];

    /// Zero-based position in DNA order.
    pub fn index(self) -> usize {
        match self {
            Category::Hair => 0,
            Category::Face => 1,
            Category::Neck => 2,
            Category::Clothing => 3,
            Category::Hands => 4,
            Category::Item => 5,
        }
    }

    /// Lowercase name used in JSON and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Category::Hair => "hair",
            Category::Face => "face",
            Category::Neck => "neck",
            Category::Clothing => "clothing",
            Category::Hands => "hands",
            Category::Item => "item",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| AvatarError::validation(format!("unknown part category \"{s}\"")))
    }
}

/// Straight (non-premultiplied) RGBA8 color.
///
/// Text form is `#rrggbb`, or `#rrggbbaa` when not fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white, the default avatar background.
    pub const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);
    /// Fully transparent black, the value of unpainted raster cells.
    pub const TRANSPARENT: Rgba8 = Rgba8::rgba(0, 0, 0, 0);

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> AvatarResult<Self> {
        parse_hex(s).map_err(AvatarError::validation)
    }

    /// Hex text form.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(v: [u8; 4]) -> Self {
        Self::rgba(v[0], v[1], v[2], v[3])
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba8 {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, ch) in digits.chars().enumerate() {
                let nibble = ch
                    .to_digit(16)
                    .ok_or_else(|| format!("invalid hex digit '{ch}'"))?;
                out[i] = (nibble * 17) as u8;
            }
            Ok(Rgba8::rgb(out[0], out[1], out[2]))
        }
        6 => Ok(Rgba8::rgb(
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
            hex_byte(&digits[6..8])?,
        )),
        _ => Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
