use serde::{Deserialize, Serialize};

use crate::assets::table::AUTHORED_GRID_SIZE;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{AvatarError, AvatarResult};

/// Grid units per side of the avatar frame.
pub const DEFAULT_GRID_SIZE: u32 = 24;
/// Device pixels per grid unit.
pub const DEFAULT_PIXEL_SIZE: u32 = 6;
/// Horizontal shift that centers 32-unit parts in the 24-unit frame.
pub const DEFAULT_OFFSET_X: f64 = -3.5;
/// Vertical shift applied to every part.
pub const DEFAULT_OFFSET_Y: f64 = 0.0;
/// Largest raster side length a render may request.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Compositor parameters.
///
/// Every field has a default, so a JSON object may set any subset:
///
/// ```json
/// { "pixel_size": 8, "background": "#f0f0f0", "offset_x": -4 }
/// ```
///
/// `"background": null` renders on a transparent raster.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOpts {
    /// Target grid units per side.
    pub grid_size: u32,
    /// Device pixels per grid unit.
    pub pixel_size: u32,
    /// Fill color, or `None` for a transparent background.
    pub background: Option<Rgba8>,
    /// Grid-unit offset added to every pixel column.
    pub offset_x: f64,
    /// Grid-unit offset added to every pixel row.
    pub offset_y: f64,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self::avatar()
    }
}

impl RenderOpts {
    /// The 24-unit avatar frame on a white background.
    pub fn avatar() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            pixel_size: DEFAULT_PIXEL_SIZE,
            background: Some(Rgba8::WHITE),
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
        }
    }

    /// Full authored 32-unit canvas, transparent, no offset.
    pub fn editor(pixel_size: u32) -> Self {
        Self {
            grid_size: AUTHORED_GRID_SIZE,
            pixel_size,
            background: None,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Small part-selector preview (`editor(2)`).
    pub fn thumbnail() -> Self {
        Self::editor(2)
    }

    /// Return options with `pixel_size` replaced.
    pub fn with_pixel_size(mut self, pixel_size: u32) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    /// Return options with `grid_size` replaced.
    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Return options with the background replaced.
    pub fn with_background(mut self, background: Option<Rgba8>) -> Self {
        self.background = background;
        self
    }

    /// Return options with both offsets replaced.
    pub fn with_offset(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Raster side length in device pixels (`grid_size * pixel_size`, saturating).
    pub fn canvas_size(&self) -> u32 {
        self.grid_size.saturating_mul(self.pixel_size)
    }

    /// Check the options describe a renderable raster.
    pub fn validate(&self) -> AvatarResult<()> {
        if self.pixel_size == 0 {
            return Err(AvatarError::validation("pixel_size must be > 0"));
        }
        if self.grid_size == 0 {
            return Err(AvatarError::validation("grid_size must be > 0"));
        }
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            return Err(AvatarError::validation("offsets must be finite"));
        }
        if self.canvas_size() > MAX_CANVAS_SIDE {
            return Err(AvatarError::validation(format!(
                "canvas side ({} units x {}px) exceeds {MAX_CANVAS_SIDE}px",
                self.grid_size, self.pixel_size
            )));
        }
        Ok(())
    }

    /// Clamp every field into a configuration that passes [`RenderOpts::validate`].
    pub fn sanitized(self) -> Self {
        let grid_size = self.grid_size.clamp(1, MAX_CANVAS_SIDE);
        let max_pixel = (MAX_CANVAS_SIDE / grid_size).max(1);
        let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            grid_size,
            pixel_size: self.pixel_size.clamp(1, max_pixel),
            background: self.background,
            offset_x: finite_or(self.offset_x, DEFAULT_OFFSET_X),
            offset_y: finite_or(self.offset_y, DEFAULT_OFFSET_Y),
        }
    }

    /// Parse options from JSON.
    pub fn from_json(s: &str) -> AvatarResult<Self> {
        serde_json::from_str(s).map_err(|e| AvatarError::serde(format!("render options json: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/opts.rs"]
mod tests;
